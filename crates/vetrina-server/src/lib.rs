//! REST API server — routes, DTOs, and OpenAPI documentation.
//!
//! Two route groups share one router: the public `/api` endpoints consumed by
//! the website, and the `/admin/api` management endpoints. The admin group is
//! deliberately unauthenticated (the deployment fronts it with a trusted
//! reverse proxy), so it must never be exposed directly to the internet.

pub mod dto;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;
