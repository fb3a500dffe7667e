mod handler;
mod model;

pub use handler::{get_currency, list_currencies};
pub use model::Currency;
