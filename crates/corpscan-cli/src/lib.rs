//! corpscan CLI Library
//!
//! Report export helpers for the corpscan command-line front-end.

pub mod report;
