//! Wire types shared by the medtrack API surfaces.
//!
//! These are the JSON request/response shapes exposed over HTTP, kept separate
//! from the core domain types so that API concerns (serde field layout, OpenAPI
//! schemas, string-typed timestamps) never leak into `medtrack-core`.
//!
//! Timestamps cross the wire as RFC 3339 strings; the core holds
//! `chrono::DateTime<Utc>` and the REST layer converts at the boundary.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// A medicine record as it appears on the wire.
///
/// `updated_at` is genuinely optional: it is absent until one of the mutators
/// that touches it has run, which is distinct from a zero timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Medicine {
    /// Canonical 32-lowercase-hex identifier, assigned at creation.
    pub id: String,
    /// Identity of the principal that created the record.
    pub creator: String,
    pub title: String,
    pub description: String,
    /// RFC 3339 creation timestamp, set once.
    pub created_date: String,
    /// RFC 3339 timestamp of the last tag/field update, if any.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// RFC 3339 expiry timestamp.
    pub expiry_date: String,
    /// Assignee identifier; may be empty.
    pub assigned_to: String,
    pub tags: Vec<String>,
    /// Free-text status label ("In Progress" and "Completed" by convention).
    pub status: String,
    /// Free-text priority label; empty by default.
    pub priority: String,
    pub comments: Vec<String>,
}

/// List response used by every multi-record query.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MedicineListRes {
    pub medicines: Vec<Medicine>,
}

/// Payload for creating a medicine record.
///
/// All four fields are required non-empty; `expiry_date` must be RFC 3339 and
/// not in the past at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMedicineReq {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub expiry_date: String,
}

/// Payload for updating a record's caller-editable fields.
///
/// Same shape as [`CreateMedicineReq`]; the expiry date is parsed but not
/// re-validated against the current time.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateMedicineReq {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddTagsReq {
    /// Tags to append. Must be non-empty; duplicates are kept as supplied.
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCommentReq {
    /// Comment to append. A missing or null comment is rejected.
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignReq {
    pub assigned_to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangeStatusReq {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetPriorityReq {
    pub priority: String,
}

/// Response for the due-date reminder query.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReminderRes {
    pub message: String,
}
