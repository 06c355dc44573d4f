use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::app::App;
use crate::pages::threads::{EMPTY_TEXT, PLACEHOLDER};

use super::helpers::{format_datetime, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG, COLOR_USER_TURN};

pub fn render_threads(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.threads;
    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(area);

    // Thread list
    if page.loading && page.threads.is_empty() {
        super::render_loading(frame, app, list_area);
    } else if page.threads.is_empty() {
        frame.render_widget(
            Paragraph::new(EMPTY_TEXT).style(Style::default().fg(COLOR_DIM)),
            list_area,
        );
    } else {
        let width = list_area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = page
            .threads
            .iter()
            .map(|t| {
                let mut lines = vec![Line::from(Span::styled(
                    truncate_to_width(&t.subject, width),
                    Style::default().add_modifier(Modifier::BOLD),
                ))];
                if let Some(at) = &t.last_message_at {
                    lines.push(Line::from(Span::styled(
                        format_datetime(at),
                        Style::default().fg(COLOR_DIM),
                    )));
                }
                ListItem::new(lines)
            })
            .collect();
        let list = List::new(items).highlight_style(Style::default().bg(COLOR_SELECTED_BG));
        let mut state = ListState::default().with_selected(page.cursor.selected(page.threads.len()));
        frame.render_stateful_widget(list, list_area, &mut state);
    }

    // Detail
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(detail_area);
    frame.render_widget(block, detail_area);

    let Some(thread) = &page.selected else {
        frame.render_widget(
            Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(COLOR_DIM))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            thread.subject.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for message in &thread.messages {
        let (alignment, color) = if message.is_outgoing() {
            (Alignment::Right, COLOR_USER_TURN)
        } else {
            (Alignment::Left, COLOR_ACCENT)
        };
        lines.push(
            Line::from(vec![
                Span::styled(message.from_email.clone(), Style::default().fg(color)),
                Span::styled(
                    format!("  {}", format_datetime(&message.sent_at)),
                    Style::default().fg(COLOR_DIM),
                ),
            ])
            .alignment(alignment),
        );
        for body_line in message.body_text.lines() {
            lines.push(Line::from(body_line.to_string()).alignment(alignment));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
