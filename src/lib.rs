//! Localized web front-end for a private event planner.
//!
//! Pages are rendered on the server and every page lives under a locale
//! prefix (`/en/...`, `/pl/...`). All data comes from a remote REST API.

pub mod api;
pub mod config;
pub mod handlers;
pub mod i18n;
pub mod locale_router;
pub mod models;
pub mod pages;
pub mod server;
