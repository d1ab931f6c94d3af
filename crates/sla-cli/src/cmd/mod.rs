pub mod breaches;
pub mod config;
pub mod eligibility;
pub mod format;
pub mod init;
