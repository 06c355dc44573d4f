//! UI rendering for the Inbox Copilot client
//!
//! Layout: side navigation | page content | chat panel (when open).
//! The Login route takes the whole screen.

mod calendar;
mod chat;
mod dashboard;
mod helpers;
mod lists;
mod login;
mod settings;
mod sidebar;
mod theme;
mod threads;

pub use helpers::{format_datetime, format_datetime_in, truncate_to_width, DATE_FORMAT};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS};

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::App;
use crate::shell::Route;

const SIDEBAR_WIDTH: u16 = 24;
const CHAT_MIN_WIDTH: u16 = 36;

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.route == Route::Login {
        login::render_login(frame, app, area);
        return;
    }

    let chat_width = if app.chat.is_open() {
        (area.width / 3).max(CHAT_MIN_WIDTH).min(area.width.saturating_sub(SIDEBAR_WIDTH))
    } else {
        0
    };

    let columns = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Min(20),
        Constraint::Length(chat_width),
    ])
    .split(area);

    sidebar::render_sidebar(frame, app, columns[0]);
    render_page(frame, app, columns[1]);
    if app.chat.is_open() {
        chat::render_chat_panel(frame, app, columns[2]);
    }
}

fn render_page(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", app.route.label()),
            Style::default()
                .fg(theme::COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    match app.route {
        Route::Login => {}
        Route::Dashboard => dashboard::render_dashboard(frame, app, body),
        Route::Today => lists::render_today(frame, app, body),
        Route::Tasks => lists::render_tasks(frame, app, body),
        Route::Contacts => lists::render_contacts(frame, app, body),
        Route::Threads => threads::render_threads(frame, app, body),
        Route::Calendar => calendar::render_calendar(frame, app, body),
        Route::Settings => settings::render_settings(frame, app, body),
    }

    let hints = Paragraph::new(page_hints(app.route))
        .style(Style::default().fg(theme::COLOR_DIM));
    frame.render_widget(hints, footer);
}

fn page_hints(route: Route) -> &'static str {
    match route {
        Route::Login => "",
        Route::Dashboard => "[s] sync emails  [r] refresh  [c] chat",
        Route::Today => "[j/k] move  [Enter] complete  [r] refresh  [c] chat",
        Route::Tasks => "[j/k] move  [Enter] complete  [f] filter  [r] refresh  [c] chat",
        Route::Contacts => "[j/k] move  [r] refresh  [c] chat",
        Route::Threads => "[j/k] move  [Enter] open  [r] refresh  [c] chat",
        Route::Calendar => "[ / ] month  [r] refresh  [c] chat",
        Route::Settings => "[R] reset demo  [x] dismiss  [c] chat",
    }
}

/// Centered "Loading..." with a spinner.
pub(crate) fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!("{} Loading...", helpers::spinner(app.tick_count));
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(theme::COLOR_DIM))
            .alignment(Alignment::Center),
        area,
    );
}
