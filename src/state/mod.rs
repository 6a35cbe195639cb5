//! Shared reactive client state.
//!
//! DESIGN
//! ======
//! Session state lives in one reactive container provided from the app
//! root, so pages observe login/logout transitions instead of re-reading
//! persistent storage ad hoc.

pub mod auth;
