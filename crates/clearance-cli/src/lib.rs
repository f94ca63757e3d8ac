//! clearance-cli: Configuration and console driver
//!
//! The binary wires these together: load configuration, initialize
//! logging, seed the directories, run the menu loop over stdin/stdout.

pub mod config;
pub mod menu;
