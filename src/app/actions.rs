//! User actions that start network work.

use tracing::{debug, info, warn};

use crate::chat::SubmitOutcome;
use crate::models::TaskStatus;
use crate::pages::mutate_then_reload;
use crate::shell::Route;

use super::{App, AppMessage};

impl App {
    /// Refetch the current page.
    pub fn refresh(&mut self) {
        self.mount(self.route);
    }

    /// Mark the selected task DONE, then reload the list it came from.
    pub fn complete_selected_task(&mut self) {
        let api = self.api.clone();
        match self.route {
            Route::Today => {
                let Some(id) = self.today.begin_complete() else {
                    return;
                };
                info!("Completing task {}", id);
                self.spawn(async move {
                    let outcome = mutate_then_reload(
                        api.update_task_status(id, TaskStatus::Done),
                        || api.today_agenda(),
                    )
                    .await;
                    AppMessage::TodayTaskCompleted(outcome)
                });
            }
            Route::Tasks => {
                let Some(id) = self.tasks.begin_complete() else {
                    return;
                };
                let filter = self.tasks.filter;
                info!("Completing task {}", id);
                self.spawn(async move {
                    let outcome = mutate_then_reload(
                        api.update_task_status(id, TaskStatus::Done),
                        || api.list_tasks(Some(filter.status())),
                    )
                    .await;
                    AppMessage::TasksTaskCompleted { filter, outcome }
                });
            }
            _ => {}
        }
    }

    /// Select the next task filter and fetch it.
    pub fn cycle_task_filter(&mut self) {
        let filter = self.tasks.cycle_filter();
        let api = self.api.clone();
        self.spawn(async move {
            AppMessage::TasksLoaded {
                filter,
                result: api.list_tasks(Some(filter.status())).await,
            }
        });
    }

    /// Fetch the highlighted thread with its messages.
    pub fn open_selected_thread(&mut self) {
        let Some(id) = self.threads.begin_open() else {
            return;
        };
        let api = self.api.clone();
        self.spawn(async move {
            AppMessage::ThreadLoaded {
                id,
                result: api.get_thread(id).await,
            }
        });
    }

    pub fn sync_emails(&mut self) {
        if !self.dashboard.begin_sync() {
            debug!("Sync already running");
            return;
        }
        let api = self.api.clone();
        self.spawn(async move { AppMessage::SyncFinished(api.sync_emails().await) });
    }

    /// Send the demo reset once the prompt is confirmed.
    pub fn confirm_reset(&mut self) {
        if !self.settings.confirm_reset() {
            return;
        }
        info!("Resetting demo data");
        let api = self.api.clone();
        self.spawn(async move { AppMessage::ResetFinished(api.reset_demo().await) });
    }

    /// Post the login form. On success the token is adopted by the session
    /// before the completion message is sent.
    pub fn submit_login(&mut self) {
        let Some((email, password)) = self.login.begin_submit() else {
            return;
        };
        let api = self.api.clone();
        self.spawn(async move {
            let result = match api.login(&email, &password).await {
                Ok(token) => {
                    if let Err(e) = api.session().establish(token.access_token).await {
                        warn!("Logged in but could not persist session: {}", e);
                    }
                    Ok(())
                }
                Err(e) => Err(e),
            };
            AppMessage::LoginFinished(result)
        });
    }

    /// Submit the chat input.
    pub fn submit_chat(&mut self) {
        match self.chat.submit() {
            SubmitOutcome::Sent(request) => {
                let api = self.api.clone();
                self.spawn(async move { AppMessage::ChatReplied(api.chat(&request.message).await) });
            }
            SubmitOutcome::Busy => debug!("Chat reply pending; submit rejected"),
            SubmitOutcome::Empty | SubmitOutcome::Closed => {}
        }
    }

    /// Drop the session and return to Login. Page data is discarded; the
    /// chat transcript is kept.
    pub fn logout(&mut self) {
        info!("Logging out");
        self.session.forget();
        self.session_epoch += 1;
        self.dashboard = Default::default();
        self.today = Default::default();
        self.tasks = Default::default();
        self.contacts = Default::default();
        self.threads = Default::default();
        self.calendar = Default::default();
        self.settings = Default::default();
        self.login.reset();
        self.chat.close();
        self.route = Route::Login;
        self.mark_dirty();

        let session = self.session.clone();
        self.spawn(async move { AppMessage::LoggedOut(session.teardown().await) });
    }
}
