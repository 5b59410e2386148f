//! Core types and utilities for the SamCast admin panel.
//!
//! Holds the error handling foundation and the identifier types shared by
//! the login view logic and the web application.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::NotificationId;
