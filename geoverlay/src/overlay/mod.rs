//! Shared overlay machinery.
//!
//! Each overlay kind supplies an [`OverlayState`] with a [`Fingerprint`]
//! and an [`OverlayRenderer`]; [`OverlayController`] drives the lifecycle.
//! Updates are field-local: only properties named in the fingerprint diff
//! are pushed to the surface.

mod controller;
mod entity;
mod fingerprint;
mod renderer;

pub use controller::{OverlayController, ReconcileReport, UpsertOutcome};
pub use entity::{OverlayEntity, OverlayState};
pub use fingerprint::{ChangeSet, Fingerprint, PointsFingerprint};
pub use renderer::OverlayRenderer;
