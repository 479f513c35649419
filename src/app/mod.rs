//! Application module: command line, configuration and the run itself

pub mod cli;
pub mod error;
pub mod startup;
