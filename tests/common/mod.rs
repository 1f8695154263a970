#![allow(dead_code)]
//! Shared test utilities for segmenta integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod fake_upstream;
pub mod gateway;

pub use builders::*;
pub use fake_upstream::*;
pub use gateway::*;
