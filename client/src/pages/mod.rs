//! Page-level glue between API outcomes and client state.

pub mod login;
