//! Overlay states and the entities that track them.

use std::fmt;

use super::fingerprint::{ChangeSet, Fingerprint};
use crate::surface::ObjectId;

/// Declarative description of one overlay.
pub trait OverlayState: Clone + fmt::Debug {
    type Fingerprint: Fingerprint;

    /// Stable identifier; never changes for the life of the overlay.
    fn id(&self) -> &str;

    /// Derive the rendering-relevant fields.
    fn fingerprint(&self) -> Self::Fingerprint;
}

/// An overlay state paired with its fingerprint and native object.
///
/// `handle` is `None` until the surface has accepted the object, and again
/// if a rebuild left nothing attached; the controller retries creation on
/// the next pass. A surface that is merely unavailable never clears it.
#[derive(Debug, Clone)]
pub struct OverlayEntity<S: OverlayState> {
    pub state: S,
    pub fingerprint: S::Fingerprint,
    pub handle: Option<ObjectId>,
}

impl<S: OverlayState> OverlayEntity<S> {
    /// Wrap a state that has no native object yet.
    pub fn new(state: S) -> Self {
        let fingerprint = state.fingerprint();
        Self {
            state,
            fingerprint,
            handle: None,
        }
    }

    pub fn with_handle(mut self, handle: Option<ObjectId>) -> Self {
        self.handle = handle;
        self
    }

    pub fn id(&self) -> &str {
        self.state.id()
    }

    /// Fields that changed relative to `previous`.
    pub fn changes_since(
        &self,
        previous: &Self,
    ) -> ChangeSet<<S::Fingerprint as Fingerprint>::Field> {
        self.fingerprint.diff(&previous.fingerprint)
    }
}
