//! Shared constants for the medtrack core.

/// Number of records returned by the initial-page query when no explicit
/// page size has been configured.
pub const DEFAULT_INITIAL_PAGE_SIZE: usize = 10;

/// Status assigned to every newly created record.
pub const STATUS_IN_PROGRESS: &str = "In Progress";

/// Status set by the mark-completed shortcut. Records with this status are
/// never considered overdue.
pub const STATUS_COMPLETED: &str = "Completed";
