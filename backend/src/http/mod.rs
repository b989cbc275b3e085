//! HTTP server module for the staffing grid.
//!
//! This module provides an axum-based HTTP server that plays the part of the
//! page: uploads go in, the rendered surface comes out.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Dashboard (services::dashboard)                          │
//! │  - Current schedule, atomic replacement                   │
//! │  - Slot selection and detail view                         │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Parsers, stats, bands, presentation                      │
//! │  - Pure functions over the canonical schedule             │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
