//! A headless reconciliation driver for animated list/grid updates.
//!
//! Given a precomputed staged changeset — an ordered sequence of diff stages, each
//! holding structural deltas plus the resulting data snapshot — this crate applies the
//! minimal set of animated structural operations to a live rendering surface, with an
//! accurate single-fire completion signal even when stage animations run
//! asynchronously and overlap.
//!
//! It is UI-agnostic. An adapter layer is expected to provide:
//! - the surface's native batch-mutation primitives ([`SyncSurface`] / [`AsyncSurface`])
//! - attachment-state detection and animation options
//! - the execution context owning the surface
//!
//! Diff computation is an external collaborator: the staged changeset is consumed as
//! an opaque ordered sequence, never recomputed or re-verified here.
//!
//! Two drivers share one algorithm and differ only in how a stage commits:
//! [`sequential::reload`] for surfaces with synchronous batch semantics, and
//! [`concurrent::reload`] (requires `std`) for surfaces whose batch mutation is itself
//! an asynchronous animated operation.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod latch;
mod options;
mod surface;
mod types;

#[cfg(feature = "std")]
pub mod concurrent;
pub mod sequential;


pub use options::{Completion, Interrupt, OwnerExecutor, StageAnimations};
pub use surface::{AsyncSurface, SyncSurface};
pub use types::{Changeset, ElementPath, StagedChangeset};
