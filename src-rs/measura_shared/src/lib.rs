//! Shared utilities for the Measura workspace

pub mod error;
