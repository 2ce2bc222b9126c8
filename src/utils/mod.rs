//! Utilities module
//!
//! Contains error handling and logging tools

pub mod error;
pub mod logging;
