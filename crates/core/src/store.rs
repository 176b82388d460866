//! The record store service.
//!
//! Owns the ordered map of id → record and implements every query and update
//! operation, including input validation and the creator-owns-record
//! authorization rule. No API concerns: HTTP status codes, headers and wire
//! shapes belong in `api-rest`.
//!
//! Each operation is a self-contained read-then-write against the map; no
//! operation awaits while holding the lock, and a failing operation performs
//! no write at all. Mutations are atomic per record only; there are no
//! multi-record transactions.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::clock::Clock;
use crate::config::CoreConfig;
use crate::constants::{STATUS_COMPLETED, STATUS_IN_PROGRESS};
use crate::error::{MedicineError, MedicineResult};
use crate::id::MedicineId;
use crate::principal::Principal;
use crate::record::{MedicineRecord, NewMedicine};
use crate::validation::{parse_timestamp, require_non_empty};

/// In-memory record store service.
///
/// Constructed once at process start and shared by handle; the map lives for
/// the life of the process. Iteration order is the ordered-map key order,
/// which is what the paginated views slice over.
pub struct MedicineService {
    cfg: Arc<CoreConfig>,
    clock: Arc<dyn Clock>,
    records: RwLock<BTreeMap<MedicineId, MedicineRecord>>,
}

impl MedicineService {
    /// Creates a new, empty record store.
    pub fn new(cfg: Arc<CoreConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cfg,
            clock,
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read_records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_records().is_empty()
    }

    // A poisoned lock still holds a coherent map, since every write either
    // fully applies or does not run.
    fn read_records(&self) -> RwLockReadGuard<'_, BTreeMap<MedicineId, MedicineRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_records(&self) -> RwLockWriteGuard<'_, BTreeMap<MedicineId, MedicineRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }

    fn ensure_creator(record: &MedicineRecord, caller: &Principal) -> MedicineResult<()> {
        if record.creator != *caller {
            tracing::warn!(
                medicine_id = %record.id,
                caller = %caller,
                "rejected operation by non-creator"
            );
            return Err(MedicineError::NotCreator(record.id.to_string()));
        }
        Ok(())
    }

    /// Creates a new record from caller input.
    ///
    /// The system assigns the id, creator, creation timestamp and the
    /// `"In Progress"` status; tags, comments and priority start empty and
    /// `updated_at` starts unset.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::InvalidInput`] if any required field is empty or
    ///   the expiry date is not RFC 3339,
    /// - [`MedicineError::ExpiryInPast`] if the expiry date is before the
    ///   current time,
    /// - [`MedicineError::DuplicateId`] if the generated id already exists
    ///   in the store.
    pub fn create(
        &self,
        caller: &Principal,
        payload: NewMedicine,
    ) -> MedicineResult<MedicineRecord> {
        let title = require_non_empty("title", &payload.title)?;
        let description = require_non_empty("description", &payload.description)?;
        let assigned_to = require_non_empty("assigned_to", &payload.assigned_to)?;
        let expiry_date = parse_timestamp("expiry_date", &payload.expiry_date)?;

        let now = self.clock.now();
        if expiry_date < now {
            return Err(MedicineError::ExpiryInPast);
        }

        let id = MedicineId::generate();
        let record = MedicineRecord {
            id: id.clone(),
            creator: caller.clone(),
            title,
            description,
            created_date: now,
            updated_at: None,
            expiry_date,
            assigned_to,
            tags: Vec::new(),
            status: STATUS_IN_PROGRESS.to_owned(),
            priority: String::new(),
            comments: Vec::new(),
        };

        let mut records = self.write_records();
        if records.contains_key(&id) {
            return Err(MedicineError::DuplicateId(id.to_string()));
        }
        records.insert(id.clone(), record.clone());

        tracing::info!(medicine_id = %id, creator = %caller, "created medicine record");
        Ok(record)
    }

    /// Returns the first page of records in map order.
    ///
    /// # Errors
    ///
    /// Returns [`MedicineError::NoRecords`] when the store is empty.
    pub fn initial_page(&self) -> MedicineResult<Vec<MedicineRecord>> {
        let records = self.read_records();
        if records.is_empty() {
            return Err(MedicineError::NoRecords);
        }

        Ok(records
            .values()
            .take(self.cfg.initial_page_size())
            .cloned()
            .collect())
    }

    /// Returns the slice `[offset, offset + limit)` of all records in map
    /// order.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::InvalidInput`] for a negative offset or limit,
    /// - [`MedicineError::NoRecords`] when the store is empty,
    /// - [`MedicineError::PageOutOfRange`] when `offset >= total` or
    ///   `offset + limit > total`.
    pub fn load_more(&self, offset: i64, limit: i64) -> MedicineResult<Vec<MedicineRecord>> {
        if offset < 0 {
            return Err(MedicineError::InvalidInput(
                "offset cannot be negative".into(),
            ));
        }
        if limit < 0 {
            return Err(MedicineError::InvalidInput(
                "limit cannot be negative".into(),
            ));
        }

        let records = self.read_records();
        let total = records.len();
        if total == 0 {
            return Err(MedicineError::NoRecords);
        }

        let (offset_u, limit_u) = (offset as usize, limit as usize);
        if offset_u >= total || offset_u + limit_u > total {
            return Err(MedicineError::PageOutOfRange {
                offset,
                limit,
                total,
            });
        }

        Ok(records
            .values()
            .skip(offset_u)
            .take(limit_u)
            .cloned()
            .collect())
    }

    /// Fetches a single record by id.
    ///
    /// Reading by id is restricted to the record's creator, like every other
    /// id-targeted operation apart from commenting and completion.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::InvalidInput`] if the id is empty or malformed,
    /// - [`MedicineError::NotFound`] if no record has this id,
    /// - [`MedicineError::NotCreator`] if the caller did not create it.
    pub fn get_by_id(&self, caller: &Principal, id: &str) -> MedicineResult<MedicineRecord> {
        let id = MedicineId::parse(id)?;
        let records = self.read_records();
        let record = records
            .get(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;
        Self::ensure_creator(record, caller)?;
        Ok(record.clone())
    }

    /// All records whose tag list contains `tag` exactly. An empty result is
    /// a success, not an error.
    pub fn get_by_tag(&self, tag: &str) -> Vec<MedicineRecord> {
        self.read_records()
            .values()
            .filter(|r| r.has_tag(tag))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over title and description.
    pub fn search(&self, query: &str) -> Vec<MedicineRecord> {
        let query_lower = query.to_lowercase();
        self.read_records()
            .values()
            .filter(|r| r.matches_query(&query_lower))
            .cloned()
            .collect()
    }

    /// All records with an exact status match.
    pub fn get_by_status(&self, status: &str) -> Vec<MedicineRecord> {
        self.read_records()
            .values()
            .filter(|r| r.status == status)
            .cloned()
            .collect()
    }

    /// All records created by `creator`.
    pub fn get_by_creator(&self, creator: &Principal) -> Vec<MedicineRecord> {
        self.read_records()
            .values()
            .filter(|r| r.creator == *creator)
            .cloned()
            .collect()
    }

    /// All records whose expiry is before the current time and whose status
    /// is not `"Completed"`.
    pub fn get_overdue(&self) -> Vec<MedicineRecord> {
        let now = self.clock.now();
        self.read_records()
            .values()
            .filter(|r| r.is_overdue(now))
            .cloned()
            .collect()
    }

    /// Sets the record's status to `"Completed"`.
    ///
    /// Completion requires an assignee but, unlike the other mutators, no
    /// creator check: any caller may complete an assigned record.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::NotFound`] if no record has this id,
    /// - [`MedicineError::NoAssignee`] if `assigned_to` is empty.
    pub fn mark_completed(&self, id: &str) -> MedicineResult<MedicineRecord> {
        let id = MedicineId::parse(id)?;
        let mut records = self.write_records();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;

        if record.assigned_to.is_empty() {
            return Err(MedicineError::NoAssignee(id.to_string()));
        }

        record.status = STATUS_COMPLETED.to_owned();
        tracing::debug!(medicine_id = %id, "marked medicine completed");
        Ok(record.clone())
    }

    /// Appends tags to a record and stamps `updated_at`.
    ///
    /// Duplicates are not deduplicated; the sequence is append-only.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::InvalidInput`] if the tag list is empty,
    /// - [`MedicineError::NotFound`] / [`MedicineError::NotCreator`] as for
    ///   every creator-gated mutation.
    pub fn add_tags(
        &self,
        caller: &Principal,
        id: &str,
        tags: Vec<String>,
    ) -> MedicineResult<MedicineRecord> {
        if tags.is_empty() {
            return Err(MedicineError::InvalidInput(
                "tag list cannot be empty".into(),
            ));
        }

        let id = MedicineId::parse(id)?;
        let now = self.clock.now();
        let mut records = self.write_records();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;
        Self::ensure_creator(record, caller)?;

        record.tags.extend(tags);
        record.updated_at = Some(now);
        Ok(record.clone())
    }

    /// Overwrites the caller-editable fields (title, description,
    /// assigned_to, expiry_date) and stamps `updated_at`.
    ///
    /// The expiry date is parsed but deliberately not re-validated against
    /// the current time; that check applies at creation only.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::InvalidInput`] if the expiry date is not RFC 3339,
    /// - [`MedicineError::NotFound`] / [`MedicineError::NotCreator`].
    pub fn update(
        &self,
        caller: &Principal,
        id: &str,
        payload: NewMedicine,
    ) -> MedicineResult<MedicineRecord> {
        let expiry_date = parse_timestamp("expiry_date", &payload.expiry_date)?;

        let id = MedicineId::parse(id)?;
        let now = self.clock.now();
        let mut records = self.write_records();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;
        Self::ensure_creator(record, caller)?;

        record.title = payload.title;
        record.description = payload.description;
        record.assigned_to = payload.assigned_to;
        record.expiry_date = expiry_date;
        record.updated_at = Some(now);
        Ok(record.clone())
    }

    /// Removes a record permanently, returning it as confirmation.
    ///
    /// # Errors
    ///
    /// [`MedicineError::NotFound`] / [`MedicineError::NotCreator`].
    pub fn delete(&self, caller: &Principal, id: &str) -> MedicineResult<MedicineRecord> {
        let id = MedicineId::parse(id)?;
        let mut records = self.write_records();
        let record = records
            .get(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;
        Self::ensure_creator(record, caller)?;

        // Checked above, so the entry is present.
        let removed = records
            .remove(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;
        tracing::info!(medicine_id = %id, "deleted medicine record");
        Ok(removed)
    }

    /// Overwrites the assignee. `updated_at` is left unchanged; only
    /// add-tags and update touch it.
    pub fn assign(
        &self,
        caller: &Principal,
        id: &str,
        assignee: String,
    ) -> MedicineResult<MedicineRecord> {
        let id = MedicineId::parse(id)?;
        let mut records = self.write_records();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;
        Self::ensure_creator(record, caller)?;

        record.assigned_to = assignee;
        Ok(record.clone())
    }

    /// Overwrites the status with an arbitrary string. The status field is
    /// not a closed set and no transition table is enforced. `updated_at` is
    /// left unchanged.
    pub fn change_status(
        &self,
        caller: &Principal,
        id: &str,
        status: String,
    ) -> MedicineResult<MedicineRecord> {
        let id = MedicineId::parse(id)?;
        let mut records = self.write_records();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;
        Self::ensure_creator(record, caller)?;

        record.status = status;
        Ok(record.clone())
    }

    /// Overwrites the priority label. `updated_at` is left unchanged.
    pub fn set_priority(
        &self,
        caller: &Principal,
        id: &str,
        priority: String,
    ) -> MedicineResult<MedicineRecord> {
        let id = MedicineId::parse(id)?;
        let mut records = self.write_records();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;
        Self::ensure_creator(record, caller)?;

        record.priority = priority;
        Ok(record.clone())
    }

    /// Builds a reminder message for an overdue record.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::NotFound`] if no record has this id,
    /// - [`MedicineError::NotOverdue`] if the record has not expired yet or
    ///   is already completed.
    pub fn due_reminder(&self, id: &str) -> MedicineResult<String> {
        let id = MedicineId::parse(id)?;
        let now = self.clock.now();
        let records = self.read_records();
        let record = records
            .get(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;

        if !record.is_overdue(now) {
            return Err(MedicineError::NotOverdue(id.to_string()));
        }

        Ok(format!(
            "medicine '{}' expired on {} and is still not completed",
            record.title,
            record.expiry_date.to_rfc3339()
        ))
    }

    /// Appends a comment to a record.
    ///
    /// Commenting carries no creator check: any caller may comment.
    /// `updated_at` is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`MedicineError::InvalidInput`] if the id is empty or the comment
    ///   is missing,
    /// - [`MedicineError::NotFound`] if no record has this id.
    pub fn add_comment(
        &self,
        id: &str,
        comment: Option<String>,
    ) -> MedicineResult<MedicineRecord> {
        let id = MedicineId::parse(id)?;
        let comment =
            comment.ok_or_else(|| MedicineError::InvalidInput("comment is required".into()))?;

        let mut records = self.write_records();
        let record = records
            .get_mut(&id)
            .ok_or_else(|| MedicineError::NotFound(id.to_string()))?;

        record.comments.push(comment);
        Ok(record.clone())
    }
}
