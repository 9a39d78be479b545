pub mod access_log;
pub mod admin;
pub mod alert;
pub mod amenity;
pub mod announcement;
pub mod auth;
pub mod camera;
pub mod condominium;
pub mod dashboard;
pub mod fee;
pub mod fee_schedule;
pub mod finance;
pub mod health;
pub mod maintenance;
pub mod notification;
pub mod payment;
pub mod payment_method;
pub mod profile;
pub mod reservation;
pub mod unit;
pub mod unit_type;
pub mod visitor;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                              login (public)
/// /auth/refresh                            refresh (public)
/// /auth/logout                             logout (requires auth)
///
/// /admin/users                             list, create (admin only)
/// /admin/users/{id}                        get, update, deactivate
/// /admin/users/{id}/reset-password         reset password (POST)
/// /admin/stats                             condominium statistics (GET)
///
/// /profile                                 get, update own profile
/// /profile/vehicles                        list, register (GET, POST)
/// /profile/vehicles/{id}                   remove (DELETE)
///
/// /condominiums                            list, create (POST admin)
/// /condominiums/{id}                       get, update, deactivate (admin)
///
/// /unit-types                              list, create (POST admin)
/// /unit-types/{id}                         update (PUT admin)
///
/// /units                                   list, create (POST admin)
/// /units/{id}                              get, update, deactivate (admin)
/// /units/{unit_id}/residencies             list, create (POST admin)
/// /residencies/{id}                        update (PUT admin)
/// /residencies/{id}/end                    end residency (POST admin)
///
/// /amenities                               list, create (POST admin)
/// /amenities/{id}                          get, update, deactivate (admin)
///
/// /reservations                            list own / all, book (POST)
/// /reservations/{id}                       get (owner or admin)
/// /reservations/{id}/cancel                cancel (POST, owner or admin)
///
/// /fee-schedules                           list, create (admin only)
/// /fee-schedules/{id}                      get, update
/// /fee-schedules/{id}/generate             generate per-unit fees (POST)
/// /fee-schedules/{id}/apply-late-charges   late-charge pass (POST)
///
/// /fees                                    list own / all
/// /fees/{id}                               get (unit resident or admin)
/// /fees/{id}/payments                      list, record (GET, POST)
/// /payments/{id}/verify                    verify (POST admin)
/// /payment-methods                         list, create (POST admin)
/// /payment-methods/{id}                    get, update (PUT admin)
/// /finances                                resident finance summary (GET)
///
/// /cameras                                 list, create (staff / admin)
/// /cameras/{id}                            get, update, deactivate
/// /alerts                                  list, raise (POST staff)
/// /alerts/{id}                             get
/// /alerts/{id}/review                      review (POST staff)
/// /visitors                                list, register (GET, POST)
/// /visitors/{id}                           get (authorizer or staff)
/// /visitors/{id}/checkout                  checkout (POST)
/// /access-logs                             list, record (staff only)
///
/// /maintenance/categories                  list, create (POST admin)
/// /maintenance/categories/{id}             update (PUT admin)
/// /maintenance/requests                    list, file (GET, POST)
/// /maintenance/requests/{id}               get, update / rate (PUT)
///
/// /announcements                           feed, draft (POST admin)
/// /announcements/{id}                      get, update, delete (admin)
/// /announcements/{id}/publish              publish (POST admin)
/// /notifications                           grouped pull feed (GET)
///
/// /dashboard                               resident aggregate (GET)
/// /dashboard/quick-actions                 static action catalog (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, refresh, logout).
        .nest("/auth", auth::router())
        // Admin routes (user management + statistics).
        .nest("/admin", admin::router())
        // Own profile and vehicles.
        .nest("/profile", profile::router())
        // Registry: condominiums, unit types, units, residencies.
        .nest("/condominiums", condominium::router())
        .nest("/unit-types", unit_type::router())
        .nest("/units", unit::router())
        .nest("/residencies", unit::residency_router())
        // Amenities and reservations.
        .nest("/amenities", amenity::router())
        .nest("/reservations", reservation::router())
        // Billing: schedules, fees, payments, methods, finance summary.
        .nest("/fee-schedules", fee_schedule::router())
        .nest("/fees", fee::router())
        .nest("/payments", payment::router())
        .nest("/payment-methods", payment_method::router())
        .nest("/finances", finance::router())
        // Security: cameras, alerts, visitors, access logs.
        .nest("/cameras", camera::router())
        .nest("/alerts", alert::router())
        .nest("/visitors", visitor::router())
        .nest("/access-logs", access_log::router())
        // Maintenance categories and work orders.
        .nest("/maintenance", maintenance::router())
        // Announcements and the notification feed.
        .nest("/announcements", announcement::router())
        .nest("/notifications", notification::router())
        // Resident dashboard aggregates.
        .nest("/dashboard", dashboard::router())
}
