//! Session model shared with the dashboard shell: a session-scoped store of
//! the issued token + profile, and the guard that gates protected views on it.

mod guard;
mod store;

pub use guard::{GuardEffect, GuardState, LOGIN_ROUTE, RouteGuard};
pub use store::{
    MemoryStorage, SessionRecord, SessionStorage, SessionStore, TOKEN_KEY, USER_INFO_KEY,
};
