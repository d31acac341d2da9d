pub mod close;
pub mod config;
pub mod driver;
pub mod report;
pub mod scratch;
