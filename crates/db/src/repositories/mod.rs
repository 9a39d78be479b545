//! SQL access, one zero-sized repo struct per table.
//!
//! Every method takes `&PgPool` first and returns `sqlx::Result`.
//! Multi-row operations (reservation creation, payment application, fee
//! generation) run in a transaction with row-level locks so concurrent
//! requests cannot break the booking and balance invariants.

pub mod access_log_repo;
pub mod alert_repo;
pub mod amenity_repo;
pub mod announcement_repo;
pub mod camera_repo;
pub mod condominium_repo;
pub mod fee_repo;
pub mod fee_schedule_repo;
pub mod maintenance_category_repo;
pub mod maintenance_request_repo;
pub mod payment_method_repo;
pub mod payment_repo;
pub mod reservation_repo;
pub mod residency_repo;
pub mod role_repo;
pub mod session_repo;
pub mod unit_repo;
pub mod unit_type_repo;
pub mod user_repo;
pub mod vehicle_repo;
pub mod visitor_repo;

pub use access_log_repo::AccessLogRepo;
pub use alert_repo::AlertRepo;
pub use amenity_repo::AmenityRepo;
pub use announcement_repo::AnnouncementRepo;
pub use camera_repo::CameraRepo;
pub use condominium_repo::CondominiumRepo;
pub use fee_repo::FeeRepo;
pub use fee_schedule_repo::FeeScheduleRepo;
pub use maintenance_category_repo::MaintenanceCategoryRepo;
pub use maintenance_request_repo::MaintenanceRequestRepo;
pub use payment_method_repo::PaymentMethodRepo;
pub use payment_repo::PaymentRepo;
pub use reservation_repo::ReservationRepo;
pub use residency_repo::ResidencyRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use unit_repo::UnitRepo;
pub use unit_type_repo::UnitTypeRepo;
pub use user_repo::UserRepo;
pub use vehicle_repo::VehicleRepo;
pub use visitor_repo::VisitorRepo;
