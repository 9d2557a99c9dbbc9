//! Configuration modules for the Shopwright API.
//!
//! Each submodule owns one aspect of configuration, loaded from
//! environment variables with development defaults.
//!
//! - [`cors`]: allowed origins for browser clients
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`email`]: SMTP settings for order notifications
//! - [`jwt`]: token signing secret and expiry
//! - [`orders`]: order workflow tuning (repricing hook)

pub mod cors;
pub mod database;
pub mod email;
pub mod jwt;
pub mod orders;
