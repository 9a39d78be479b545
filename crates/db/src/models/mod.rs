//! Row structs and the DTOs that feed them.
//!
//! The pattern per submodule: a `FromRow` entity mirroring the table, a
//! create struct for inserts, and an update struct whose fields are all
//! `Option` so partial updates leave untouched columns alone.

pub mod access_log;
pub mod alert;
pub mod amenity;
pub mod announcement;
pub mod camera;
pub mod condominium;
pub mod fee;
pub mod fee_schedule;
pub mod maintenance;
pub mod payment;
pub mod payment_method;
pub mod reservation;
pub mod residency;
pub mod role;
pub mod session;
pub mod unit;
pub mod unit_type;
pub mod user;
pub mod vehicle;
pub mod visitor;
