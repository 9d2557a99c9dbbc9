//! Request-processing middleware.
//!
//! - [`auth`]: credential resolution (bearer header or `token` cookie)
//!   and the `AuthUser` extractor
//! - [`role`]: the admin authorization gate, as a layer and as an
//!   extractor

pub mod auth;
pub mod role;
