mod handler;
mod model;

pub use handler::{create_country, delete_country, get_country, list_countries, update_country};
pub use model::Country;
