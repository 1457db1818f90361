// Adapters layer: concrete clients for external systems.

pub mod auth;
pub mod sheets;

pub use auth::{ServiceAccount, TokenProvider};
pub use sheets::SheetsClient;
