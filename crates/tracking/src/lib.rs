//! Tracking-server access for aimbridge
//!
//! Wire types for the run payload, the [`RunSource`] seam, and the
//! reqwest-backed [`TrackingClient`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod wire;

pub use client::{RunSource, TrackingClient};
pub use wire::{RunDataWire, RunEnvelope, RunInfoWire, RunWire};
