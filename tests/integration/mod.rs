//! Integration Tests Module
//!
//! End-to-end tests that drive a complete checkup run through the processor
//! and the command-line binary.

pub mod checkup_pipeline;
pub mod cli_smoke_test;
