//! Tally Core Runtime
//!
//! This crate provides the foundational primitives for the Tally counter widget:
//!
//! - **Counter Values**: text-backed counts with deliberate parsing and an
//!   explicit recovery policy for corrupted storage
//! - **Event Dispatch**: pointer and lifecycle events routed to widget handlers
//!
//! # Example
//!
//! ```rust
//! use tally_core::counter::{Count, ParsePolicy};
//!
//! // Counts round-trip through their persisted text form
//! let count = Count::parse("41").unwrap();
//! assert_eq!(count.increment().render(), "42");
//!
//! // Corrupted storage is an explicit policy decision, not a silent coercion
//! let recovered = Count::recover("abc", ParsePolicy::ResetToZero).unwrap();
//! assert_eq!(recovered, Count::ZERO);
//! ```

pub mod counter;
pub mod events;

pub use counter::{Count, CountParseError, ParsePolicy, COUNTER_SLOT};
pub use events::{Event, EventData, EventDispatcher, EventHandler, EventType};
