//! Catalog Admin
//!
//! Browser admin UI for managing products and users over a REST backend.
//!
//! This library provides:
//! - Typed REST client with pluggable transports (reqwest, browser fetch)
//! - Product and user models plus the schema driving generic list/form views
//! - Web UI (Dioxus + Pico CSS) with routing, create/edit forms and delete confirmation
//! - In-memory development backend (server builds only)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// REST client (shared between server SSR and WASM client)
pub mod api;

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Configuration (file/env loading is server only)
pub mod config;

// Records and form schema
pub mod model;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod backend;
