pub mod api;
pub mod api_docs;
pub mod domain;
pub mod dream;
pub mod infrastructure;
pub mod modules;

pub use infrastructure::config;
pub use infrastructure::server;
