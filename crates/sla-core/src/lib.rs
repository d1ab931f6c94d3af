pub mod breach;
pub mod classifier;
pub mod config;
pub mod duration;
pub mod eligibility;
pub mod error;
pub mod io;
pub mod paths;
pub mod style;
pub mod timer;
pub mod types;

pub use error::{Result, SlaError};
