pub mod cli;
pub mod discovery;
pub mod error;
pub mod report;
pub mod signals;
