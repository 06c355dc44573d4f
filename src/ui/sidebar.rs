use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::App;
use crate::shell::{APP_TITLE, LOGOUT_LABEL, NAV_ITEMS};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (i, route) in NAV_ITEMS.iter().enumerate() {
        let active = *route == app.route;
        let style = if active {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let marker = if active { "▸" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::styled(format!("{} ", i + 1), Style::default().fg(COLOR_DIM)),
            Span::styled(route.label(), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("L ", Style::default().fg(COLOR_DIM)),
        Span::raw(LOGOUT_LABEL),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}
