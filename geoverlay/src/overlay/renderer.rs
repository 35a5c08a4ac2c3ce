//! The per-kind create/update/remove contract.

use super::entity::{OverlayEntity, OverlayState};
use crate::surface::{MapSurface, ObjectId};

/// Renders one overlay kind onto a [`MapSurface`].
///
/// The surface is lent per call; `None` means it is unavailable, in which
/// case `create_renderable` and `update_renderable` return `None` and the
/// caller retries on its next pass. No method reports errors: unsupported
/// features are logged and skipped.
pub trait OverlayRenderer {
    type State: OverlayState;

    /// Build and attach a native object for `state`.
    fn create_renderable<S: MapSurface + ?Sized>(
        &self,
        state: &Self::State,
        surface: Option<&mut S>,
    ) -> Option<ObjectId>;

    /// Patch `handle` so it reflects `current`, touching only fields that
    /// differ from `previous`. May return a different id when the object
    /// had to be rebuilt.
    fn update_renderable<S: MapSurface + ?Sized>(
        &self,
        handle: ObjectId,
        current: &OverlayEntity<Self::State>,
        previous: &OverlayEntity<Self::State>,
        surface: Option<&mut S>,
    ) -> Option<ObjectId>;

    /// Detach the entity's native object. Idempotent.
    fn remove_renderable<S: MapSurface + ?Sized>(
        &self,
        entity: &OverlayEntity<Self::State>,
        surface: Option<&mut S>,
    ) {
        if let (Some(handle), Some(surface)) = (entity.handle, surface) {
            surface.remove(handle);
        }
    }

    /// Re-resolve anything that depends on the camera rather than on state.
    ///
    /// Called only on an explicit refresh request. The default does nothing.
    fn refresh_renderable<S: MapSurface + ?Sized>(
        &self,
        handle: ObjectId,
        _entity: &OverlayEntity<Self::State>,
        surface: Option<&mut S>,
    ) -> Option<ObjectId> {
        surface.map(|_| handle)
    }
}
