pub mod carbon;
pub mod classify;
pub mod config;
pub mod geometry;
pub mod route;

pub use classify::{classify, prioritize, regional_cards, suggest};
pub use config::AppConfig;
pub use route::{Route, RouteError};
