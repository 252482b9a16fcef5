//! CLI library components for the `deco` tool.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
pub mod summary;
