//! Backend models and the HTTP client for the VidSpy server.

pub mod models;
pub mod vidspy;

pub use models::*;
pub use vidspy::*;
