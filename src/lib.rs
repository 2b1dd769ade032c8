pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod formula;
pub mod ui;

pub use error::{FormulaUpdaterError, Result};
