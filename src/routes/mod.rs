pub mod client;
pub mod country;
pub mod currency;
pub mod project;
pub mod user;
