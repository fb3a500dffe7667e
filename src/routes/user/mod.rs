mod handler;
mod model;

pub use handler::{create_user, delete_user, get_user, list_users, login, update_user};
pub use model::{LoginRequest, LoginResponse, Profile, User};
