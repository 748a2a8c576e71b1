//! CLI command implementations

pub mod hearts;
pub mod init;
pub mod level;
pub mod quiz;
