//! Wire types and response decoding for the login API.

pub mod api;
