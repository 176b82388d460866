//! # Medtrack Core
//!
//! Core business logic for the medtrack medicine record system.
//!
//! This crate contains the record store service and its pure data operations:
//! - Record creation, assignment, status/priority changes, tagging and
//!   commenting, all against an ordered in-memory map keyed by generated id
//! - Query views (paged, by tag, by status, by creator, text search, overdue)
//!   layered over linear scans
//! - Creator-owns-record authorization and input validation
//!
//! **No API concerns**: HTTP routing, OpenAPI documentation and header
//! handling belong in `api-rest`.
//!
//! Two values come from the environment rather than caller input: the calling
//! [`Principal`] and the current time via [`Clock`]. Both are injected so the
//! core stays deterministic under test.

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod id;
pub mod principal;
pub mod record;
pub mod store;
pub mod validation;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{initial_page_size_from_env_value, CoreConfig};
pub use error::{MedicineError, MedicineResult};
pub use id::MedicineId;
pub use principal::Principal;
pub use record::{MedicineRecord, NewMedicine};
pub use store::MedicineService;
