//! Task and contact lists.

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::app::App;
use crate::models::{Task, TaskPriority};
use crate::pages::{contacts, tasks, today, TaskFilter};

use super::helpers::{format_datetime, spinner};
use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_SELECTED_BG, COLOR_SUCCESS, COLOR_WARNING,
};

pub fn render_today(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.today;
    if page.loading && page.tasks.is_empty() {
        super::render_loading(frame, app, area);
        return;
    }
    if page.tasks.is_empty() {
        render_empty(frame, area, today::EMPTY_TEXT);
        return;
    }
    let items: Vec<ListItem> = page
        .tasks
        .iter()
        .map(|t| task_item(t, page.completing == Some(t.id), app.tick_count))
        .collect();
    render_list(frame, area, items, page.cursor.selected(page.tasks.len()));
}

pub fn render_tasks(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.tasks;
    let [filter_area, list_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

    let mut spans = vec![Span::styled("Filter: ", Style::default().fg(COLOR_DIM))];
    for filter in TaskFilter::ALL {
        let style = if filter == page.filter {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), filter_area);

    if page.loading && page.tasks.is_empty() {
        super::render_loading(frame, app, list_area);
        return;
    }
    if page.tasks.is_empty() {
        render_empty(frame, list_area, tasks::EMPTY_TEXT);
        return;
    }
    let items: Vec<ListItem> = page
        .tasks
        .iter()
        .map(|t| task_item(t, page.completing == Some(t.id), app.tick_count))
        .collect();
    render_list(frame, list_area, items, page.cursor.selected(page.tasks.len()));
}

pub fn render_contacts(frame: &mut Frame, app: &App, area: Rect) {
    let page = &app.contacts;
    if page.loading && page.contacts.is_empty() {
        super::render_loading(frame, app, area);
        return;
    }
    if page.contacts.is_empty() {
        render_empty(frame, area, contacts::EMPTY_TEXT);
        return;
    }

    let items: Vec<ListItem> = page
        .contacts
        .iter()
        .map(|c| {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        c.display_name().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        c.pipeline_stage.as_str(),
                        Style::default().fg(COLOR_ACCENT),
                    ),
                ]),
                Line::from(Span::styled(c.email.clone(), Style::default().fg(COLOR_DIM))),
            ];
            if let Some(phone) = c.phone.as_deref().filter(|p| !p.is_empty()) {
                lines.push(Line::from(Span::styled(phone.to_string(), Style::default().fg(COLOR_DIM))));
            }
            if let Some(summary) = c.profile_summary.as_deref().filter(|s| !s.is_empty()) {
                lines.push(Line::from(summary.to_string()));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();
    render_list(frame, area, items, page.cursor.selected(page.contacts.len()));
}

fn task_item(task: &Task, completing: bool, tick: u64) -> ListItem<'static> {
    let check = if completing {
        format!("{} ", spinner(tick))
    } else if task.is_done() {
        "[x] ".to_string()
    } else {
        "[ ] ".to_string()
    };
    let title_style = if task.is_done() {
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let mut first = vec![
        Span::raw(check),
        Span::styled(task.title.clone(), title_style),
    ];
    if task.overdue {
        first.push(Span::styled("  OVERDUE", Style::default().fg(COLOR_ERROR)));
    }

    let priority_color = match task.priority {
        TaskPriority::High => COLOR_WARNING,
        TaskPriority::Low => COLOR_SUCCESS,
        _ => COLOR_DIM,
    };
    let mut second = vec![
        Span::raw("    "),
        Span::styled(task.priority.label(), Style::default().fg(priority_color)),
        Span::styled(format!("  {}", task.task_type.label()), Style::default().fg(COLOR_DIM)),
    ];
    if let Some(due) = &task.due_date {
        second.push(Span::styled(
            format!("  Due {}", format_datetime(due)),
            Style::default().fg(COLOR_DIM),
        ));
    }

    ListItem::new(vec![Line::from(first), Line::from(second)])
}

fn render_list(frame: &mut Frame, area: Rect, items: Vec<ListItem>, selected: Option<usize>) {
    let list = List::new(items).highlight_style(Style::default().bg(COLOR_SELECTED_BG));
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_empty(frame: &mut Frame, area: Rect, text: &str) {
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Center),
        area,
    );
}
