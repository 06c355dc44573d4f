use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::app::App;
use crate::pages::LoginField;
use crate::shell::APP_TITLE;

use super::helpers::spinner;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 14;

pub fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.login;

    let width = DIALOG_WIDTH.min(area.width);
    let height = DIALOG_HEIGHT.min(area.height);
    let dialog = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", APP_TITLE),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(dialog).inner(Margin::new(2, 1));
    frame.render_widget(block, dialog);

    let [email_area, password_area, status_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(1),
    ])
    .areas(inner);

    let masked = "•".repeat(page.password.chars().count());
    render_field(frame, email_area, "Email", &page.email, page.focus == LoginField::Email);
    render_field(frame, password_area, "Password", &masked, page.focus == LoginField::Password);

    let status = if page.submitting {
        Line::from(Span::styled(
            format!("{} Signing in...", spinner(app.tick_count)),
            Style::default().fg(COLOR_DIM),
        ))
    } else if let Some(error) = &page.error {
        Line::from(Span::styled(error.clone(), Style::default().fg(COLOR_ERROR)))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(status), status_area);

    frame.render_widget(
        Paragraph::new("[Tab] switch field  [Enter] sign in  [Ctrl-C] quit")
            .style(Style::default().fg(COLOR_DIM)),
        hint_area,
    );
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    let cursor = if focused { "▏" } else { "" };
    let field = Paragraph::new(format!("{}{}", value, cursor)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", label)),
    );
    frame.render_widget(field, area);
}
