//! Shared data model for ChronoLens
//!
//! This crate contains the serializable types that are shared between the
//! domain crate (chronolens-core) and the UI frontend (app-ui).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Travel History Types
// ─────────────────────────────────────────────────────────────────────────────

/// Which generation flow produced a travel record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelKind {
    Past,
    Future,
}

impl TravelKind {
    /// Display label for badges and headers.
    pub fn label(&self) -> &'static str {
        match self {
            TravelKind::Past => "Past",
            TravelKind::Future => "Future",
        }
    }
}

/// One completed image-generation event, as persisted in the travel history.
///
/// Records are immutable once created: the history store only ever prepends,
/// removes, or clears them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelRecord {
    /// Opaque caller-supplied identifier (epoch-millis string in practice).
    /// Collisions are not defended against beyond last-write-wins.
    pub id: String,
    /// Reference to the static landmark entry this record depicts.
    pub landmark_id: String,
    /// Denormalized display name; landmark data is static reference content,
    /// so no referential integrity is enforced.
    pub landmark_name: String,
    /// The target year depicted.
    pub year: i32,
    pub kind: TravelKind,
    /// Opaque reference to the generated image. In practice a data URI, which
    /// may be a large inline-encoded payload.
    pub image_uri: String,
    /// Creation time in epoch milliseconds. Display/sorting only.
    pub created_at: i64,
}
