use super::store::{SessionStorage, SessionStore};

/// Where the guard sends an unauthenticated visitor.
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Initial state; the view renders a loading placeholder.
    Checking,
    /// A session record is present; render the protected children.
    Authorized,
    /// No session; the view renders nothing while navigation happens.
    Unauthorized,
}

/// Navigation side effect requested by an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardEffect {
    None,
    Redirect(&'static str),
}

/// Gate in front of protected views. The session store is the only source of
/// truth: there is no server-side session check, so an expired-but-present
/// record still authorizes until an API call using the token fails.
#[derive(Debug, Default)]
pub struct RouteGuard {
    state: GuardState,
}

impl Default for GuardState {
    fn default() -> Self {
        GuardState::Checking
    }
}

impl RouteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    /// Runs whenever the session reference changes (login, logout, fresh
    /// page load) — never on a timer, so token expiry alone does not
    /// re-trigger it.
    pub fn evaluate<S: SessionStorage>(&mut self, session: &SessionStore<S>) -> GuardEffect {
        if session.current().is_some() {
            self.state = GuardState::Authorized;
            GuardEffect::None
        } else {
            self.state = GuardState::Unauthorized;
            GuardEffect::Redirect(LOGIN_ROUTE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, SessionRecord};

    fn logged_in_store() -> SessionStore<MemoryStorage> {
        let mut store = SessionStore::load(MemoryStorage::default());
        store.set_credentials(SessionRecord {
            token: "tok".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: "admin".into(),
        });
        store
    }

    #[test]
    fn starts_in_checking() {
        assert_eq!(RouteGuard::new().state(), GuardState::Checking);
    }

    #[test]
    fn authorizes_when_a_session_is_present() {
        let store = logged_in_store();
        let mut guard = RouteGuard::new();

        assert_eq!(guard.evaluate(&store), GuardEffect::None);
        assert_eq!(guard.state(), GuardState::Authorized);
    }

    #[test]
    fn redirects_to_login_when_no_session() {
        let store = SessionStore::load(MemoryStorage::default());
        let mut guard = RouteGuard::new();

        assert_eq!(guard.evaluate(&store), GuardEffect::Redirect(LOGIN_ROUTE));
        assert_eq!(guard.state(), GuardState::Unauthorized);
    }

    #[test]
    fn logout_flips_an_authorized_guard_on_reevaluation() {
        let mut store = logged_in_store();
        let mut guard = RouteGuard::new();
        guard.evaluate(&store);
        assert_eq!(guard.state(), GuardState::Authorized);

        store.logout();
        assert_eq!(guard.evaluate(&store), GuardEffect::Redirect(LOGIN_ROUTE));
        assert_eq!(guard.state(), GuardState::Unauthorized);
    }
}
