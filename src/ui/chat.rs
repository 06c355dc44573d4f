use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::App;
use crate::chat::{Role, EMPTY_HINT, PENDING_LABEL};

use super::helpers::{spinner, wrap_to_width};
use super::theme::{COLOR_ACCENT, COLOR_ASSISTANT_TURN, COLOR_BORDER, COLOR_DIM, COLOR_USER_TURN};

pub fn render_chat_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .title(" Copilot ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(inner);

    // Rows are wrapped here so that one Line is one screen row
    let width = transcript_area.width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    if app.chat.transcript().is_empty() && !app.chat.is_pending() {
        push_wrapped(&mut lines, EMPTY_HINT, width, Style::default().fg(COLOR_DIM));
    }
    for turn in app.chat.transcript() {
        let (who, color) = match turn.role {
            Role::User => ("You", COLOR_USER_TURN),
            Role::Assistant => ("Copilot", COLOR_ASSISTANT_TURN),
        };
        lines.push(Line::from(Span::styled(
            who,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for text_line in turn.text.lines() {
            push_wrapped(&mut lines, text_line, width, Style::default().fg(color));
        }
        lines.push(Line::from(""));
    }
    if app.chat.is_pending() {
        let label = format!("{} {}", spinner(app.tick_count), PENDING_LABEL);
        push_wrapped(&mut lines, &label, width, Style::default().fg(COLOR_DIM));
    }

    // Pin the newest rows to the bottom
    let visible = transcript_area.height as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), transcript_area);

    let input = Paragraph::new(format!("{}▏", app.chat.input())).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER))
            .title(" [Enter] send  [Esc] close "),
    );
    frame.render_widget(input, input_area);
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for row in wrap_to_width(text, width) {
        lines.push(Line::from(Span::styled(row, style)));
    }
}
