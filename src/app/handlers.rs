//! Message and key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::shell::Route;

use super::{App, AppMessage};

impl App {
    /// Apply a completion from a spawned task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::DashboardLoaded(result) => self.dashboard.apply_stats(result),
            AppMessage::SyncFinished(result) => self.dashboard.apply_sync(result),
            AppMessage::TodayLoaded(result) => self.today.apply_tasks(result),
            AppMessage::TodayTaskCompleted(outcome) => self.today.apply_complete(outcome),
            AppMessage::TasksLoaded { filter, result } => {
                self.tasks.apply_tasks(filter, result);
            }
            AppMessage::TasksTaskCompleted { filter, outcome } => {
                self.tasks.apply_complete(filter, outcome)
            }
            AppMessage::ContactsLoaded(result) => self.contacts.apply_contacts(result),
            AppMessage::ThreadsLoaded(result) => self.threads.apply_threads(result),
            AppMessage::ThreadLoaded { id, result } => self.threads.apply_thread(id, result),
            AppMessage::CalendarLoaded(result) => self.calendar.apply_tasks(result),
            AppMessage::UserLoaded(result) => self.settings.apply_user(result),
            AppMessage::ResetFinished(result) => self.settings.apply_reset(result),
            AppMessage::LoginFinished(result) => {
                self.login.apply_login(&result);
                if result.is_ok() {
                    info!("Logged in");
                    self.navigate(Route::Dashboard);
                }
            }
            AppMessage::ChatReplied(result) => {
                self.chat.resolve(result);
            }
            AppMessage::LoggedOut(result) => {
                if let Err(e) = result {
                    warn!("Failed to clear stored session: {}", e);
                }
            }
        }
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.route == Route::Login {
            self.handle_login_key(key);
            return;
        }

        if self.chat.is_open() && self.handle_chat_key(key) {
            return;
        }

        if self.route == Route::Settings && self.settings.confirming {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_reset(),
                KeyCode::Char('n') | KeyCode::Esc => self.settings.cancel_reset(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => self.navigate(self.route.next()),
            KeyCode::BackTab => self.navigate(self.route.prev()),
            KeyCode::Char(d @ '1'..='7') => {
                if let Some(route) = d.to_digit(10).and_then(|n| Route::from_nav_number(n as usize)) {
                    self.navigate(route);
                }
            }
            KeyCode::Char('c') => self.chat.toggle(),
            KeyCode::Char('L') => self.logout(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(true),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(false),
            KeyCode::Enter => self.activate_selection(),
            KeyCode::Char('x') => match self.route {
                Route::Dashboard => self.dashboard.dismiss_notice(),
                Route::Settings => self.settings.dismiss_banner(),
                _ => {}
            },
            KeyCode::Char('f') if self.route == Route::Tasks => self.cycle_task_filter(),
            KeyCode::Char('s') if self.route == Route::Dashboard => self.sync_emails(),
            KeyCode::Char('R') if self.route == Route::Settings => self.settings.request_reset(),
            KeyCode::Char('[') if self.route == Route::Calendar => self.calendar.prev_month(),
            KeyCode::Char(']') if self.route == Route::Calendar => self.calendar.next_month(),
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.toggle_focus()
            }
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => self.login.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.login.push_char(c)
            }
            _ => {}
        }
    }

    /// Keys for the open chat panel. Returns false for keys it leaves to
    /// the page (navigation and selection).
    fn handle_chat_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => self.chat.close(),
            KeyCode::Enter => self.submit_chat(),
            KeyCode::Backspace => self.chat.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.chat.push_char(c)
            }
            _ => return false,
        }
        true
    }

    fn move_selection(&mut self, down: bool) {
        let (cursor, len) = match self.route {
            Route::Today => (&mut self.today.cursor, self.today.tasks.len()),
            Route::Tasks => (&mut self.tasks.cursor, self.tasks.tasks.len()),
            Route::Contacts => (&mut self.contacts.cursor, self.contacts.contacts.len()),
            Route::Threads => (&mut self.threads.cursor, self.threads.threads.len()),
            _ => return,
        };
        if down {
            cursor.move_down(len);
        } else {
            cursor.move_up();
        }
    }

    fn activate_selection(&mut self) {
        match self.route {
            Route::Today | Route::Tasks => self.complete_selected_task(),
            Route::Threads => self.open_selected_thread(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySessionStore, MockHttpClient, MockResponse};
    use crate::api::ApiClient;
    use crate::auth::{Session, SessionContext};
    use crate::chat::PanelState;
    use crossterm::event::KeyEventKind;
    use serde_json::json;
    use std::sync::Arc;

    const BASE: &str = "http://api.test/api/v1";

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn logged_in_app() -> (App, MockHttpClient) {
        let store = InMemorySessionStore::with_session(Session::with_token("tok"));
        let session = SessionContext::init(Arc::new(store)).await.unwrap();
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, json!([])));
        let api = ApiClient::new(BASE, session, Arc::new(http.clone()));
        (App::new(api), http)
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let (mut app, _) = logged_in_app().await;
        let mut event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        event.kind = KeyEventKind::Press;
        app.handle_key(event);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_digit_and_tab_navigation() {
        let (mut app, _) = logged_in_app().await;
        app.navigate(Route::Dashboard);

        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.route, Route::Tasks);

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.route, Route::Contacts);

        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.route, Route::Today);
    }

    #[tokio::test]
    async fn test_chat_captures_typing() {
        let (mut app, _) = logged_in_app().await;
        app.navigate(Route::Dashboard);

        app.handle_key(key(KeyCode::Char('c')));
        assert_eq!(app.chat.state(), PanelState::OpenIdle);

        for c in "hi 2".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.chat.input(), "hi 2");
        assert_eq!(app.route, Route::Dashboard);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.chat.state(), PanelState::Closed);
    }

    #[tokio::test]
    async fn test_reset_prompt_keys() {
        let (mut app, _) = logged_in_app().await;
        app.navigate(Route::Settings);

        app.handle_key(key(KeyCode::Char('R')));
        assert!(app.settings.confirming);
        app.handle_key(key(KeyCode::Char('n')));
        assert!(!app.settings.confirming);
        assert!(!app.settings.resetting);

        app.handle_key(key(KeyCode::Char('R')));
        app.handle_key(key(KeyCode::Char('y')));
        assert!(app.settings.resetting);
    }

    #[tokio::test]
    async fn test_login_typing() {
        let store = InMemorySessionStore::new();
        let session = SessionContext::new(Arc::new(store));
        let api = ApiClient::new(BASE, session, Arc::new(MockHttpClient::new()));
        let mut app = App::new(api);

        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Char('b')));

        assert_eq!(app.login.email, "a");
        assert_eq!(app.login.password, "b");
        assert_eq!(app.route, Route::Login);
    }

    #[tokio::test]
    async fn test_calendar_month_keys() {
        let (mut app, _) = logged_in_app().await;
        app.navigate(Route::Calendar);
        let month = app.calendar.month();

        app.handle_key(key(KeyCode::Char(']')));
        assert_ne!(app.calendar.month(), month);
        app.handle_key(key(KeyCode::Char('[')));
        assert_eq!(app.calendar.month(), month);
    }
}
