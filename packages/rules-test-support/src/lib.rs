//! Test support utilities for the rules engine
//!
//! This crate provides the shared pieces every test binary in the workspace
//! needs: one-time logging initialization and environment-driven proptest
//! configuration.

pub mod logging;
pub mod props;

pub use props::proptest_config;
