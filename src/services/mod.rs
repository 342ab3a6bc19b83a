//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the account store queries so route handlers can stay
//! focused on form/JSON translation and status mapping.

pub mod credentials;
