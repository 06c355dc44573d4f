use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::App;
use crate::pages::dashboard::ACTIVITY_PLACEHOLDER;

use super::helpers::banner_line;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_INFO, COLOR_SUCCESS, COLOR_WARNING};

pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.dashboard;
    let [notice_area, cards_area, _, activity_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(area);

    if let Some(notice) = &page.notice {
        frame.render_widget(banner_line(notice), notice_area);
    }

    if page.loading {
        super::render_loading(frame, app, cards_area);
    } else {
        let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(cards_area);
        render_card(frame, cards[0], "Total Contacts", page.stats.contacts, COLOR_INFO);
        render_card(frame, cards[1], "Open Tasks", page.stats.tasks_open, COLOR_SUCCESS);
        render_card(frame, cards[2], "Overdue Tasks", page.stats.tasks_overdue, COLOR_WARNING);
    }

    let activity = Paragraph::new(ACTIVITY_PLACEHOLDER)
        .style(Style::default().fg(COLOR_DIM))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" Recent Activity "),
        );
    frame.render_widget(activity, activity_area);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, value: usize, color: Color) {
    let card = Paragraph::new(vec![
        Line::from(Span::styled(title.to_string(), Style::default().fg(COLOR_DIM))),
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(card, area);
}
