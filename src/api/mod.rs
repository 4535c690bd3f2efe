//! HTTP API: query DTOs, handlers, routing and request tracing.

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod trace;
