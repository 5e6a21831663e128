pub mod api;
pub mod config;
pub mod emission;
pub mod error;
pub mod ledger;
pub mod points;
pub mod ranking;
pub mod region;
// cmd and reports are modules of the binary crate (main.rs).

pub use error::{EcoError, EcoResult};
