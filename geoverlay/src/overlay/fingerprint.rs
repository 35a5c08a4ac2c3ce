//! Field-level change detection shared by all overlay kinds.

use std::fmt;
use std::sync::Arc;

use crate::geo::GeoPoint;
use crate::interpolation::points_hash;

/// The rendering-relevant fields of an overlay state.
///
/// Two fingerprints compare field by field; [`Fingerprint::diff`] names the
/// fields that differ so a renderer can patch only those.
pub trait Fingerprint: Clone + PartialEq + fmt::Debug {
    /// Field names for this overlay kind.
    type Field: Copy + Eq + fmt::Debug;

    /// Fields whose value differs from `previous`.
    fn diff(&self, previous: &Self) -> ChangeSet<Self::Field>;
}

/// Set of changed fields, in the order they were detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet<F> {
    fields: Vec<F>,
}

impl<F: Copy + Eq> ChangeSet<F> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Record `field` if `changed` is true.
    pub fn mark(&mut self, field: F, changed: bool) -> &mut Self {
        if changed && !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    /// Whether any of `fields` changed.
    pub fn contains_any(&self, fields: &[F]) -> bool {
        fields.iter().any(|f| self.contains(*f))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().copied()
    }
}

impl<F: Copy + Eq> Default for ChangeSet<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Copy + Eq> FromIterator<F> for ChangeSet<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut set = Self::new();
        for field in iter {
            set.mark(field, true);
        }
        set
    }
}

/// Fingerprint of a point sequence.
///
/// The FNV hash rejects most differences cheaply; equal hashes fall back
/// to comparing the points themselves, so hash collisions never hide a
/// geometry change.
#[derive(Clone)]
pub struct PointsFingerprint {
    hash: u64,
    points: Arc<[GeoPoint]>,
}

impl PointsFingerprint {
    pub fn new(points: &Arc<[GeoPoint]>) -> Self {
        Self {
            hash: points_hash(points),
            points: Arc::clone(points),
        }
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PartialEq for PointsFingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && (Arc::ptr_eq(&self.points, &other.points) || self.points == other.points)
    }
}

impl fmt::Debug for PointsFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointsFingerprint")
            .field("hash", &format_args!("{:016x}", self.hash))
            .field("len", &self.points.len())
            .finish()
    }
}
