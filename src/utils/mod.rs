//! Utility modules for common functionality
//!
//! This module provides logging and progress reporting used by the
//! library facade and the command-line tool.

pub mod logger;
pub mod progress;
