//! The medicine record entity and its creation payload.

use chrono::{DateTime, Utc};

use crate::constants::STATUS_COMPLETED;
use crate::id::MedicineId;
use crate::principal::Principal;

/// One medicine-tracking record.
///
/// `id` and `creator` are assigned by the system at creation and never change
/// afterwards. `updated_at` starts unset and is only touched by the add-tags
/// and update operations; the narrower mutators (assign, change-status,
/// set-priority, add-comment, mark-completed) leave it alone.
#[derive(Clone, Debug, PartialEq)]
pub struct MedicineRecord {
    /// Unique identifier; serves as the map key.
    pub id: MedicineId,
    /// Identity of the principal that created the record; the only identity
    /// authorized to mutate or delete it (comments excepted).
    pub creator: Principal,
    pub title: String,
    pub description: String,
    /// Set once at creation.
    pub created_date: DateTime<Utc>,
    /// Unset until a full update or tag append has run.
    pub updated_at: Option<DateTime<Utc>>,
    /// Validated against the current time at creation only; never
    /// re-validated on update.
    pub expiry_date: DateTime<Utc>,
    /// Assignee identifier; may be empty.
    pub assigned_to: String,
    /// Append-only; duplicates are kept as supplied.
    pub tags: Vec<String>,
    /// Free-text status label. "In Progress" and "Completed" are the
    /// conventional values but any string is accepted.
    pub status: String,
    /// Free-text priority label; empty by default.
    pub priority: String,
    /// Append-only.
    pub comments: Vec<String>,
}

impl MedicineRecord {
    /// True when the record expired before `now` and is not completed.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date < now && self.status != STATUS_COMPLETED
    }

    /// Exact-match tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match over title and description.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}

/// Caller-supplied fields for creating a record, and for the full update
/// operation, which takes the same shape.
///
/// `expiry_date` arrives as RFC 3339 text and is parsed by the service; at
/// creation it must also not be in the past.
#[derive(Clone, Debug)]
pub struct NewMedicine {
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub expiry_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::constants::STATUS_IN_PROGRESS;

    fn record(expiry: DateTime<Utc>, status: &str) -> MedicineRecord {
        MedicineRecord {
            id: MedicineId::generate(),
            creator: Principal::new("alice"),
            title: "Amoxicillin course".into(),
            description: "Course of Amoxicillin 500mg".into(),
            created_date: Utc::now(),
            updated_at: None,
            expiry_date: expiry,
            assigned_to: String::new(),
            tags: vec!["oral".into(), "urgent".into()],
            status: status.into(),
            priority: String::new(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn overdue_requires_past_expiry_and_incomplete_status() {
        let now = Utc::now();
        assert!(record(now - Duration::hours(1), STATUS_IN_PROGRESS).is_overdue(now));
        assert!(!record(now + Duration::hours(1), STATUS_IN_PROGRESS).is_overdue(now));
        assert!(!record(now - Duration::hours(1), STATUS_COMPLETED).is_overdue(now));
    }

    #[test]
    fn tag_match_is_exact() {
        let rec = record(Utc::now(), STATUS_IN_PROGRESS);
        assert!(rec.has_tag("urgent"));
        assert!(!rec.has_tag("urg"));
        assert!(!rec.has_tag("Urgent"));
    }

    #[test]
    fn query_match_is_case_insensitive_substring() {
        let rec = record(Utc::now(), STATUS_IN_PROGRESS);
        assert!(rec.matches_query("amoxicillin"));
        assert!(rec.matches_query("500mg"));
        assert!(!rec.matches_query("ibuprofen"));
    }
}
