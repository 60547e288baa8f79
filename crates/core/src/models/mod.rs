pub mod cache;
pub mod coin;
pub mod detail;
pub mod price;
pub mod query;
pub mod settings;
pub mod view;
