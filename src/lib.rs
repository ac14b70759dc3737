//! goaltrack library
//!
//! Core record handling for the goaltrack CLI: the goal data model,
//! identifier resolution, and JSON persistence.

pub mod config;
pub mod record;
