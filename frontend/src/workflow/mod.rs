//! Upload and bank-connection workflow state.
//!
//! Framework-free state machines driven by the Leptos components. Each
//! piece owns its slice of state; components keep them in signals and call
//! the methods below from event handlers.
//!
//! - [`client_info`] - Business name and account-number slots
//! - [`staging`] - File validation and the staged file list
//! - [`bank`] - Bank connection modal state
//! - [`coordinator`] - Submission gating for the manual upload path

pub mod bank;
pub mod client_info;
pub mod coordinator;
pub mod staging;

pub use bank::*;
pub use client_info::*;
pub use coordinator::*;
pub use staging::*;
