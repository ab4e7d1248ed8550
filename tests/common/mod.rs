//! Shared test utilities for prompal integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every helper is deterministic: fixed timestamps, fixed
//! corpus order.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
