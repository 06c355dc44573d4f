use chrono::Datelike;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::pages::calendar::WEEKDAYS;

use super::helpers::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SUCCESS};

pub fn render_calendar(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.calendar;
    let days = page.days();
    let blanks = page.leading_blanks();
    let weeks = (blanks + days.len()).div_ceil(7);

    let [title_area, header_area, grid_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(weeks as u16),
    ])
    .areas(area);

    let mut title = vec![Span::styled(
        page.title(),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if page.loading {
        title.push(Span::styled("  loading...", Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(title)), title_area);

    let columns = Layout::horizontal([Constraint::Ratio(1, 7); 7]);
    for (i, cell) in columns.split(header_area).iter().enumerate() {
        frame.render_widget(
            Paragraph::new(WEEKDAYS[i])
                .style(Style::default().fg(COLOR_DIM))
                .alignment(Alignment::Center),
            *cell,
        );
    }

    let rows = Layout::vertical(vec![Constraint::Ratio(1, weeks as u32); weeks]).split(grid_area);
    for (slot, day) in days.iter().enumerate().map(|(i, d)| (i + blanks, d)) {
        let cell = columns.split(rows[slot / 7])[slot % 7];
        let today = page.is_today(*day);

        let block = Block::default().borders(Borders::ALL).border_style(
            Style::default().fg(if today { COLOR_ACCENT } else { COLOR_BORDER }),
        );
        let inner = block.inner(cell);
        frame.render_widget(block, cell);

        let day_style = if today {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        let mut lines = vec![Line::from(Span::styled(day.day().to_string(), day_style))
            .alignment(Alignment::Right)];
        let width = inner.width as usize;
        for task in page.tasks_on(*day) {
            let style = if task.is_done() {
                Style::default().fg(COLOR_SUCCESS).add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };
            lines.push(Line::from(Span::styled(truncate_to_width(&task.title, width), style)));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
