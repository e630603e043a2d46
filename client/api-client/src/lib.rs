//! Typed HTTP client for the Lumen backend contract.
//!
//! Thin request/response plumbing over `reqwest`: no retries, no caching;
//! a non-2xx status or transport failure is reported once and dropped by
//! the caller. Also implements [`identity_store::AuthGateway`] so the
//! identity store can log in through it.

pub mod client;
pub mod config;
pub mod error;

pub use client::{CommentRequest, HttpApiClient, RegisterRequest, UserSummary};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
