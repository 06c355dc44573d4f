use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::App;

use super::helpers::{banner_line, spinner};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_WARNING};

pub fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.settings;
    let [banner_area, profile_area, danger_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(area);

    if let Some(banner) = &page.banner {
        frame.render_widget(banner_line(banner), banner_area);
    }

    let profile_lines = match &page.user {
        Some(user) => vec![
            field("Name", user.display_name()),
            field("Email", &user.email),
            field("Role", user.role.as_str()),
        ],
        None if page.loading => vec![Line::from(Span::styled(
            format!("{} Loading...", spinner(app.tick_count)),
            Style::default().fg(COLOR_DIM),
        ))],
        None => vec![Line::from(Span::styled(
            "Profile unavailable",
            Style::default().fg(COLOR_DIM),
        ))],
    };
    frame.render_widget(
        Paragraph::new(profile_lines).block(section(" Profile ", COLOR_BORDER)),
        profile_area,
    );

    let danger_lines = if page.resetting {
        vec![Line::from(format!("{} Resetting demo data...", spinner(app.tick_count)))]
    } else if page.confirming {
        vec![
            Line::from(Span::styled(
                "Delete all contacts, threads, messages, tasks and memory?",
                Style::default().fg(COLOR_WARNING),
            )),
            Line::from(Span::styled("[y] confirm  [n] cancel", Style::default().fg(COLOR_DIM))),
        ]
    } else {
        vec![
            Line::from("Reset the demo data set. User accounts are kept."),
            Line::from(Span::styled("[R] Reset demo", Style::default().fg(COLOR_ERROR))),
        ]
    };
    frame.render_widget(
        Paragraph::new(danger_lines).block(section(" Danger Zone ", COLOR_ERROR)),
        danger_area,
    );
}

fn field<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<7}", label), Style::default().fg(COLOR_DIM)),
        Span::raw(value.to_string()),
    ])
}

fn section(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(title)
}
