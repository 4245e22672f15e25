//! Common test utilities for MenuMaker contract and scenario tests.
//!
//! This module provides:
//! - `SharedOutput`: an output sink that actions and the display loop share
//! - `run_script` / `Transcript`: drive a menu with scripted input
//! - Fixtures: reusable menu trees

#![allow(dead_code)]


pub use capture::*;
pub use fixtures::*;
