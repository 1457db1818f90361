pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{ServiceAccount, SheetsClient, TokenProvider};
pub use config::{CliConfig, Settings};
pub use crate::core::{RosterOptions, RosterService};
pub use domain::model::Roster;
pub use domain::ports::ValueStore;
pub use utils::error::{Result, RosterError};
