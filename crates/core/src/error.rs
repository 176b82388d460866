//! Error taxonomy for the medtrack core.
//!
//! Every operation returns a [`MedicineResult`]; errors are descriptive and
//! caller-facing. None of them are fatal to the service process, and no
//! operation leaves a record half-mutated: a failing operation performs no
//! store write at all.

/// Errors produced by the record store service.
#[derive(Debug, thiserror::Error)]
pub enum MedicineError {
    /// A required field was missing, empty, or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The store holds no records, or a paginated slice is empty.
    #[error("no medicines found")]
    NoRecords,

    /// Pagination arguments exceed the stored record count.
    #[error("pagination out of range: offset {offset} with limit {limit} exceeds total of {total} medicines")]
    PageOutOfRange {
        offset: i64,
        limit: i64,
        total: usize,
    },

    /// The referenced id is absent from the store.
    #[error("medicine not found: {0}")]
    NotFound(String),

    /// The caller is not the creator of the record it tried to mutate or read.
    #[error("caller is not the creator of medicine {0}")]
    NotCreator(String),

    /// Completion was requested for a record with no assignee.
    #[error("no one was assigned to medicine {0}")]
    NoAssignee(String),

    /// A reminder was requested for a record that is not overdue, or that is
    /// already completed.
    #[error("medicine {0} is not overdue or is already completed")]
    NotOverdue(String),

    /// The expiry date supplied at creation is earlier than the current time.
    #[error("expiry date cannot be in the past")]
    ExpiryInPast,

    /// Insertion would overwrite an existing record.
    #[error("a medicine with id {0} already exists")]
    DuplicateId(String),
}

pub type MedicineResult<T> = std::result::Result<T, MedicineError>;
