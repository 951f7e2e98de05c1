//! Schema validation and source-position mapping.
//!
//! Validation happens in two stages:
//! - [`validate`] walks the parsed key tree and produces [`Violation`]s,
//!   which only know key paths and the nodes involved
//! - [`locate`] / [`locate_all`] turn those into [`PositionedError`]s with a
//!   document line and an optional column range

pub mod engine;
pub mod locate;
pub mod violation;

pub use engine::validate;
pub use locate::{ErrorKind, PositionedError, locate, locate_all};
pub use violation::{KeyPath, Violation, ViolationKind};
