//! Core library for the CSV toolkit command line utilities.
//!
//! Each binary is a thin wrapper over one module: [`count`] for `rowcount`,
//! [`discovery`] and [`distinct`] for `extract`, and [`language`] plus
//! [`split`] for `split-by-language`. CSV reading and writing live under
//! [`io`], the transient data types in [`model`].

pub mod count;
pub mod discovery;
pub mod distinct;
pub mod error;
pub mod io;
pub mod language;
pub mod logging;
pub mod model;
pub mod split;

pub use error::{Result, ToolError};
