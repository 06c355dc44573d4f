//! Application state.
//!
//! [`App`] owns every page model, the chat panel and the session handle.
//! Network work is spawned on the runtime and reports back through the
//! [`AppMessage`] channel; all state changes happen on the UI task in
//! [`App::handle_message`] and [`App::handle_key`].

mod actions;
mod handlers;
mod messages;

pub use messages::{AppMessage, Envelope};

use std::future::Future;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::ApiClient;
use crate::auth::SessionContext;
use crate::chat::ChatPanel;
use crate::pages::{
    dashboard, CalendarPage, ContactsPage, DashboardPage, LoginPage, SettingsPage, TasksPage,
    ThreadsPage, TodayPage,
};
use crate::shell::{guard, GateDecision, Route};

pub struct App {
    pub api: ApiClient,
    pub session: SessionContext,
    /// Page currently shown
    pub route: Route,
    pub dashboard: DashboardPage,
    pub today: TodayPage,
    pub tasks: TasksPage,
    pub contacts: ContactsPage,
    pub threads: ThreadsPage,
    pub calendar: CalendarPage,
    pub settings: SettingsPage,
    pub login: LoginPage,
    pub chat: ChatPanel,
    /// Sender handed to spawned tasks
    pub message_tx: mpsc::UnboundedSender<Envelope>,
    /// Receiver; the event loop takes it for `select!`
    pub message_rx: Option<mpsc::UnboundedReceiver<Envelope>>,
    /// Bumped on logout; results spawned under an older epoch are dropped
    pub session_epoch: u64,
    pub should_quit: bool,
    /// Set whenever state changed since the last draw
    pub needs_redraw: bool,
    /// Animation counter
    pub tick_count: u64,
}

impl App {
    /// Create the app on the Login route. Call [`App::navigate`] to mount
    /// the first page.
    pub fn new(api: ApiClient) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session: api.session().clone(),
            api,
            route: Route::Login,
            dashboard: DashboardPage::new(),
            today: TodayPage::new(),
            tasks: TasksPage::new(),
            contacts: ContactsPage::new(),
            threads: ThreadsPage::new(),
            calendar: CalendarPage::default(),
            settings: SettingsPage::new(),
            login: LoginPage::new(),
            chat: ChatPanel::new(),
            message_tx,
            message_rx: Some(message_rx),
            session_epoch: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_busy() {
            // spinner frames advance
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// True while any visible request is in flight.
    pub fn is_busy(&self) -> bool {
        self.chat.is_pending()
            || self.login.submitting
            || self.dashboard.syncing
            || self.settings.resetting
            || self.page_loading()
    }

    fn page_loading(&self) -> bool {
        match self.route {
            Route::Login => false,
            Route::Dashboard => self.dashboard.loading,
            Route::Today => self.today.loading,
            Route::Tasks => self.tasks.loading,
            Route::Contacts => self.contacts.loading,
            Route::Threads => self.threads.loading || self.threads.opening.is_some(),
            Route::Calendar => self.calendar.loading,
            Route::Settings => self.settings.loading,
        }
    }

    /// Switch to `route`, passing the session gate first.
    ///
    /// Protected routes without a session redirect to Login before anything
    /// is mounted or fetched.
    pub fn navigate(&mut self, route: Route) {
        self.mark_dirty();
        match guard(route, &self.session) {
            GateDecision::Allow(route) => {
                debug!("Navigating to {:?}", route);
                self.route = route;
                self.mount(route);
            }
            GateDecision::RedirectToLogin => {
                info!("No session; redirecting {:?} to login", route);
                self.route = Route::Login;
            }
        }
    }

    /// Start the fetch a page performs on mount.
    pub fn mount(&mut self, route: Route) {
        let api = self.api.clone();
        match route {
            Route::Login => {}
            Route::Dashboard => {
                self.dashboard.begin_load();
                self.spawn(async move { AppMessage::DashboardLoaded(dashboard::fetch_stats(&api).await) });
            }
            Route::Today => {
                self.today.begin_load();
                self.spawn(async move { AppMessage::TodayLoaded(api.today_agenda().await) });
            }
            Route::Tasks => {
                self.tasks.begin_load();
                let filter = self.tasks.filter;
                self.spawn(async move {
                    AppMessage::TasksLoaded {
                        filter,
                        result: api.list_tasks(Some(filter.status())).await,
                    }
                });
            }
            Route::Contacts => {
                self.contacts.begin_load();
                self.spawn(async move { AppMessage::ContactsLoaded(api.list_contacts().await) });
            }
            Route::Threads => {
                self.threads.begin_load();
                self.spawn(async move { AppMessage::ThreadsLoaded(api.list_threads().await) });
            }
            Route::Calendar => {
                self.calendar.begin_load();
                self.spawn(async move { AppMessage::CalendarLoaded(api.list_tasks(None).await) });
            }
            Route::Settings => {
                self.settings.begin_load();
                self.spawn(async move { AppMessage::UserLoaded(api.me().await) });
            }
        }
    }

    /// Run `work` on the runtime and deliver its message to this app.
    pub(crate) fn spawn<F>(&self, work: F)
    where
        F: Future<Output = AppMessage> + Send + 'static,
    {
        let message_tx = self.message_tx.clone();
        let epoch = self.session_epoch;
        tokio::spawn(async move {
            let message = work.await;
            if message_tx.send(Envelope { epoch, message }).is_err() {
                debug!("App message dropped; receiver closed");
            }
        });
    }

    /// Wait for the next message and apply it. Returns false if the
    /// receiver was taken or closed.
    pub async fn process_next_message(&mut self) -> bool {
        let message = match self.message_rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        };
        match message {
            Some(envelope) => {
                self.deliver(envelope);
                true
            }
            None => false,
        }
    }

    /// Apply a message from the channel unless it belongs to a session that
    /// has since been logged out.
    pub fn deliver(&mut self, envelope: Envelope) {
        if envelope.epoch != self.session_epoch && !envelope.message.outlives_session() {
            debug!("Dropping result from a previous session: {:?}", envelope.message);
            return;
        }
        self.handle_message(envelope.message);
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("session", &self.session)
            .field("chat", &self.chat.state())
            .finish()
    }
}
