// ============================================================================
// MEDMOBILE WEB - Yew client for the MedMobile pharmacy backend
// ============================================================================
// - models: DTOs shared with the REST API
// - stores: session/cart state and its persistence
// - services: HTTP only
// - hooks/context: Yew glue around the stores
// - components/views: rendering
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod hooks;
pub mod models;
pub mod navigation;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;
pub mod views;

pub use app::App;
