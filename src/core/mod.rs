pub mod roster;

pub use crate::domain::model::{AppendAnchor, Roster, ValueInputOption};
pub use crate::domain::ports::ValueStore;
pub use crate::utils::error::Result;
pub use roster::{RosterOptions, RosterService};
