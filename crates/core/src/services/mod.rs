pub mod detail_service;
pub mod gallery_service;
pub mod list_service;
pub mod market_service;
