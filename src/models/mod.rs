//! Wire-format and configuration models consumed at the crate boundary.

pub mod catalog;
pub mod config;
