//! # client
//!
//! Single-page shell for the CTF platform: the session store every view
//! consults, the route table with its admin gate, the notification helper,
//! and the wire types shared with the login server.
//!
//! Nothing here performs I/O. The hosting frontend owns the transport and
//! the toast widget and feeds their outcomes into these modules.

pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;
