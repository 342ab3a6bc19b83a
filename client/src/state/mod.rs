//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only process-wide state. It is held in an owned
//! `SessionStore` that views receive explicitly instead of reaching for a
//! global.

pub mod session;
