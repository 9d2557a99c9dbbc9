//! Shared utilities.
//!
//! - [`email`]: SMTP delivery for order notifications
//! - [`errors`]: application error type and HTTP mapping
//! - [`jwt`]: token creation and verification
//! - [`pagination`]: limit/offset/page query handling
//! - [`password`]: bcrypt hashing and verification

pub mod email;
pub mod errors;
pub mod jwt;
pub mod pagination;
pub mod password;
