//! Keeps one overlay kind on a surface in step with declared states.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use super::entity::{OverlayEntity, OverlayState};
use super::renderer::OverlayRenderer;
use crate::log::Logger;
use crate::surface::{MapSurface, ObjectId};
use crate::{log_debug, log_trace};

/// What a single upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A native object was created.
    Created,
    /// The existing object was patched (or rebuilt).
    Updated,
    /// Nothing rendering-relevant changed.
    Unchanged,
    /// The surface was unavailable; the entity will be retried.
    Deferred,
}

/// Tally of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Entities that got a new native object.
    pub created: usize,
    /// Entities whose native object was patched, rebuilt or refreshed.
    pub updated: usize,
    /// Entities left as they were.
    pub unchanged: usize,
    /// Entities dropped because their id was absent. Includes removals
    /// whose detach waits for a surface.
    pub removed: usize,
    /// Entities whose create or update waits for a surface.
    pub deferred: usize,
}

impl ReconcileReport {
    fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Created => self.created += 1,
            UpsertOutcome::Updated => self.updated += 1,
            UpsertOutcome::Unchanged => self.unchanged += 1,
            UpsertOutcome::Deferred => self.deferred += 1,
        }
    }

    /// Whether the pass touched the surface at all.
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.removed == 0
    }
}

/// Controller-side record for one id.
struct Tracked<S: OverlayState> {
    /// Latest declared state, carrying the native handle.
    entity: OverlayEntity<S>,
    /// What the native object still shows when an update was deferred.
    rendered: Option<OverlayEntity<S>>,
    /// A refresh was requested while the surface was unavailable.
    refresh_pending: bool,
}

impl<S: OverlayState> Tracked<S> {
    fn in_sync(entity: OverlayEntity<S>) -> Self {
        Self {
            entity,
            rendered: None,
            refresh_pending: false,
        }
    }
}

/// Entity lifecycle for one overlay kind.
///
/// Entities are keyed by their state id. Without a surface nothing native
/// is touched, but nothing is forgotten either:
///
/// - a deferred creation is retried on every later pass, even when the
///   state is unchanged;
/// - a deferred update keeps the handle and is replayed against the last
///   rendered state once a surface is back;
/// - a deferred removal keeps the handle queued and detaches it on the
///   next call that has a surface.
pub struct OverlayController<R: OverlayRenderer> {
    renderer: R,
    entities: BTreeMap<String, Tracked<R::State>>,
    pending_removals: Vec<OverlayEntity<R::State>>,
    logger: Arc<dyn Logger>,
}

impl<R: OverlayRenderer> OverlayController<R> {
    /// Empty controller rendering through `renderer`.
    pub fn new(renderer: R, logger: Arc<dyn Logger>) -> Self {
        Self {
            renderer,
            entities: BTreeMap::new(),
            pending_removals: Vec::new(),
            logger,
        }
    }

    /// The renderer, e.g. to reach its path resolver statistics.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Create or update the entity for `state`.
    pub fn upsert<S: MapSurface + ?Sized>(
        &mut self,
        state: R::State,
        mut surface: Option<&mut S>,
    ) -> UpsertOutcome {
        self.flush_removals(&mut surface);

        let current = OverlayEntity::new(state);
        let id = current.id().to_string();

        let (outcome, tracked) = match self.entities.remove(&id) {
            Some(previous) => self.advance(previous, current, surface),
            None => self.create(current, surface),
        };

        log_trace!(self.logger, "upsert {}: {:?}", id, outcome);
        self.entities.insert(id, tracked);
        outcome
    }

    fn create<S: MapSurface + ?Sized>(
        &self,
        current: OverlayEntity<R::State>,
        surface: Option<&mut S>,
    ) -> (UpsertOutcome, Tracked<R::State>) {
        let handle = self.renderer.create_renderable(&current.state, surface);
        let outcome = match handle {
            Some(_) => UpsertOutcome::Created,
            None => UpsertOutcome::Deferred,
        };
        (outcome, Tracked::in_sync(current.with_handle(handle)))
    }

    fn advance<S: MapSurface + ?Sized>(
        &self,
        previous: Tracked<R::State>,
        current: OverlayEntity<R::State>,
        surface: Option<&mut S>,
    ) -> (UpsertOutcome, Tracked<R::State>) {
        let Some(handle) = previous.entity.handle else {
            return self.create(current, surface);
        };
        let refresh_pending = previous.refresh_pending;
        let base = previous.rendered.unwrap_or(previous.entity);
        let changed = !current.changes_since(&base).is_empty();

        let Some(surface) = surface else {
            let (outcome, rendered) = if changed {
                (UpsertOutcome::Deferred, Some(base))
            } else {
                (UpsertOutcome::Unchanged, None)
            };
            let tracked = Tracked {
                entity: current.with_handle(Some(handle)),
                rendered,
                refresh_pending,
            };
            return (outcome, tracked);
        };

        let (mut outcome, mut handle) = if changed {
            // With a surface at hand, no handle back means the object is gone
            match self
                .renderer
                .update_renderable(handle, &current, &base, Some(&mut *surface))
            {
                Some(handle) => (UpsertOutcome::Updated, Some(handle)),
                None => (UpsertOutcome::Deferred, None),
            }
        } else {
            (UpsertOutcome::Unchanged, Some(handle))
        };
        if let (true, Some(live)) = (refresh_pending, handle) {
            handle = self.renderer.refresh_renderable(live, &current, Some(surface));
            if outcome == UpsertOutcome::Unchanged {
                outcome = UpsertOutcome::Updated;
            }
        }

        (outcome, Tracked::in_sync(current.with_handle(handle)))
    }

    /// Detach native objects whose entities were removed without a surface.
    fn flush_removals<S: MapSurface + ?Sized>(&mut self, surface: &mut Option<&mut S>) {
        let Some(surface) = surface.as_deref_mut() else {
            return;
        };
        if self.pending_removals.is_empty() {
            return;
        }
        log_debug!(
            self.logger,
            "detaching {} objects removed while the surface was unavailable",
            self.pending_removals.len()
        );
        for entity in self.pending_removals.drain(..) {
            self.renderer.remove_renderable(&entity, Some(&mut *surface));
        }
    }

    fn discard<S: MapSurface + ?Sized>(
        &mut self,
        tracked: Tracked<R::State>,
        surface: Option<&mut S>,
    ) {
        let entity = tracked.entity;
        match (entity.handle, surface) {
            (Some(_), None) => self.pending_removals.push(entity),
            (_, surface) => self.renderer.remove_renderable(&entity, surface),
        }
    }

    /// Remove the entity with `id`, detaching its native object.
    ///
    /// Without a surface the object is queued and detached on the next
    /// call that has one. Returns false if no such entity exists.
    pub fn remove<S: MapSurface + ?Sized>(
        &mut self,
        id: &str,
        mut surface: Option<&mut S>,
    ) -> bool {
        self.flush_removals(&mut surface);
        match self.entities.remove(id) {
            Some(tracked) => {
                self.discard(tracked, surface);
                true
            }
            None => false,
        }
    }

    /// Make the tracked entities match `states` exactly.
    ///
    /// States are upserted in order; a repeated id is diffed against its
    /// earlier occurrence. Entities whose id is absent are removed.
    pub fn reconcile<S, I>(&mut self, states: I, mut surface: Option<&mut S>) -> ReconcileReport
    where
        S: MapSurface + ?Sized,
        I: IntoIterator<Item = R::State>,
    {
        self.flush_removals(&mut surface);
        let mut report = ReconcileReport::default();
        let mut seen = HashSet::new();

        for state in states {
            seen.insert(state.id().to_string());
            let outcome = self.upsert(state, surface.as_deref_mut());
            report.record(outcome);
        }

        let stale: Vec<String> = self
            .entities
            .keys()
            .filter(|id| !seen.contains(*id))
            .cloned()
            .collect();
        for id in stale {
            if self.remove(&id, surface.as_deref_mut()) {
                report.removed += 1;
            }
        }

        log_debug!(
            self.logger,
            "reconciled {} entities: {} created, {} updated, {} unchanged, {} removed, {} deferred",
            self.entities.len(),
            report.created,
            report.updated,
            report.unchanged,
            report.removed,
            report.deferred
        );
        report
    }

    /// Re-resolve camera-dependent output for every rendered entity.
    ///
    /// Intended for camera changes, which never trigger updates on their
    /// own. Returns the number of entities refreshed. Without a surface
    /// the request is remembered and carried out by the next call that has
    /// one; deferred updates are applied before refreshing.
    pub fn refresh_paths<S: MapSurface + ?Sized>(&mut self, mut surface: Option<&mut S>) -> usize {
        self.flush_removals(&mut surface);
        let Some(surface) = surface else {
            for tracked in self.entities.values_mut() {
                tracked.refresh_pending |= tracked.entity.handle.is_some();
            }
            return 0;
        };

        let mut refreshed = 0;
        for tracked in self.entities.values_mut() {
            let Some(mut handle) = tracked.entity.handle else {
                continue;
            };
            if let Some(base) = tracked.rendered.take() {
                match self.renderer.update_renderable(
                    handle,
                    &tracked.entity,
                    &base,
                    Some(&mut *surface),
                ) {
                    Some(updated) => handle = updated,
                    None => {
                        tracked.entity.handle = None;
                        tracked.refresh_pending = false;
                        continue;
                    }
                }
            }
            tracked.entity.handle =
                self.renderer
                    .refresh_renderable(handle, &tracked.entity, Some(&mut *surface));
            tracked.refresh_pending = false;
            if tracked.entity.handle.is_some() {
                refreshed += 1;
            }
        }
        refreshed
    }

    /// Remove every entity.
    pub fn clear<S: MapSurface + ?Sized>(&mut self, mut surface: Option<&mut S>) {
        self.flush_removals(&mut surface);
        for tracked in std::mem::take(&mut self.entities).into_values() {
            self.discard(tracked, surface.as_deref_mut());
        }
    }

    /// The entity tracked for `id`, with its latest declared state.
    pub fn entity(&self, id: &str) -> Option<&OverlayEntity<R::State>> {
        self.entities.get(id).map(|tracked| &tracked.entity)
    }

    /// Whether `id` has an update still waiting for a surface.
    pub fn has_pending_update(&self, id: &str) -> bool {
        self.entities
            .get(id)
            .is_some_and(|tracked| tracked.rendered.is_some() || tracked.refresh_pending)
    }

    /// Native objects queued for detaching once a surface is available.
    pub fn pending_removals(&self) -> usize {
        self.pending_removals.len()
    }

    /// Tracked ids, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entities.keys().map(String::as_str)
    }

    /// Number of tracked entities, rendered or not.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether no entity is tracked.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
