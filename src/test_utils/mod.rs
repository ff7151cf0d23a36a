//! Test utilities.
//!
//! This module provides:
//! - Test data factories for creating valid waitlist entries
//! - An in-memory `WaitlistRepo` for exercising use cases and routes without Postgres
//! - `TestAppStateBuilder` for HTTP-level tests

mod app_state_builder;
mod factories;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use waitlist_mocks::*;
