//! HTTP API for the condominium management backend.
//!
//! Serves the REST surface under `/api/v1`: authentication, the
//! resident/unit registry, amenity reservations, maintenance-fee billing,
//! payments, security desk operations, maintenance requests, announcements,
//! and the resident dashboard. Authentication is JWT bearer (access +
//! rotating refresh tokens); authorization is role-based and enforced per
//! handler via extractors.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
