//! # searchbox
//!
//! Command-line front end for [`searchbox_core`]:
//! - **report**: parse a query and render it as text or JSON
//! - **demo**: sample queries for both grammars
//! - **error**: front-end error type
//! - **tracing**: logging setup

pub mod demo;
pub mod error;
pub mod report;
pub mod tracing;

pub use error::{Error, Result};
pub use report::Report;
