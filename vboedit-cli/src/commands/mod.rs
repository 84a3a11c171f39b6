//! CLI command implementations.

pub mod add;
pub mod avi;
pub mod columns;
pub mod common;
pub mod config;
pub mod info;
