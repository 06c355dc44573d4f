//! Routes, side navigation and the session gate.

use crate::auth::SessionContext;

pub const APP_TITLE: &str = "Inbox Copilot";
pub const LOGOUT_LABEL: &str = "Logout";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Today,
    Tasks,
    Contacts,
    Threads,
    Calendar,
    Settings,
}

/// Side navigation, in display order.
pub const NAV_ITEMS: [Route; 7] = [
    Route::Dashboard,
    Route::Today,
    Route::Tasks,
    Route::Contacts,
    Route::Threads,
    Route::Calendar,
    Route::Settings,
];

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Today => "Today",
            Route::Tasks => "All Tasks",
            Route::Contacts => "Contacts",
            Route::Threads => "Email Threads",
            Route::Calendar => "Calendar",
            Route::Settings => "Settings",
        }
    }

    /// Every route except Login requires a session.
    pub fn is_protected(&self) -> bool {
        *self != Route::Login
    }

    /// Route for a 1-based navigation number.
    pub fn from_nav_number(n: usize) -> Option<Route> {
        n.checked_sub(1).and_then(|i| NAV_ITEMS.get(i)).copied()
    }

    fn nav_index(&self) -> Option<usize> {
        NAV_ITEMS.iter().position(|r| r == self)
    }

    /// Next navigation item, wrapping.
    pub fn next(&self) -> Route {
        match self.nav_index() {
            Some(i) => NAV_ITEMS[(i + 1) % NAV_ITEMS.len()],
            None => Route::Dashboard,
        }
    }

    /// Previous navigation item, wrapping.
    pub fn prev(&self) -> Route {
        match self.nav_index() {
            Some(i) => NAV_ITEMS[(i + NAV_ITEMS.len() - 1) % NAV_ITEMS.len()],
            None => Route::Dashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow(Route),
    RedirectToLogin,
}

/// Decide whether `route` may mount with the current session.
pub fn guard(route: Route, session: &SessionContext) -> GateDecision {
    if route.is_protected() && !session.is_authenticated() {
        GateDecision::RedirectToLogin
    } else {
        GateDecision::Allow(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemorySessionStore;
    use std::sync::Arc;

    #[test]
    fn test_nav_labels_in_order() {
        let labels: Vec<&str> = NAV_ITEMS.iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Today", "All Tasks", "Contacts", "Email Threads", "Calendar", "Settings"]
        );
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Route::Settings.next(), Route::Dashboard);
        assert_eq!(Route::Dashboard.prev(), Route::Settings);
        assert_eq!(Route::Today.next(), Route::Tasks);
        assert_eq!(Route::Login.next(), Route::Dashboard);
    }

    #[test]
    fn test_nav_numbers() {
        assert_eq!(Route::from_nav_number(1), Some(Route::Dashboard));
        assert_eq!(Route::from_nav_number(7), Some(Route::Settings));
        assert_eq!(Route::from_nav_number(0), None);
        assert_eq!(Route::from_nav_number(8), None);
    }

    #[tokio::test]
    async fn test_guard() {
        let session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
        assert_eq!(guard(Route::Tasks, &session), GateDecision::RedirectToLogin);
        assert_eq!(guard(Route::Login, &session), GateDecision::Allow(Route::Login));

        session.establish("t").await.unwrap();
        assert_eq!(guard(Route::Tasks, &session), GateDecision::Allow(Route::Tasks));

        session.teardown().await.unwrap();
        assert_eq!(guard(Route::Settings, &session), GateDecision::RedirectToLogin);
    }
}
