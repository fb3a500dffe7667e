mod handler;
mod model;

pub use handler::{create_client, delete_client, get_client, list_clients, update_client};
pub use model::Client;
