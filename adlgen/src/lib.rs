//! Expose adlgen's internals for integration testing and for the `xtask`
//! runner. The binary is the supported interface.
pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
