//! Domain logic shared across the strata workspace.
//!
//! Pure types and rules only -- no I/O. Persistence lives in `strata-db`,
//! the HTTP surface in `strata-api`.

pub mod error;
pub mod fees;
pub mod pagination;
pub mod reservations;
pub mod roles;
pub mod statuses;
pub mod types;
