//! dallaem-client
//!
//! Typed Rust client for the Gachi-Dallaem ("같이 달램") gathering service: a
//! REST API for browsing, joining and reviewing group meetups.
//!
//! The crate centers on one request pipeline ([`execution`]) that composes
//! URLs, attaches bearer-token auth, enforces single-source cancellation, and
//! normalizes every failure into [`ApiError`]. Typed endpoint wrappers live
//! under [`apis`]; credential state and session teardown under [`auth`].
#![deny(unsafe_code)]

pub mod apis;
pub mod auth;
pub mod client;
pub mod error;
pub mod execution;
pub mod types;

pub use client::{DallaemClient, DallaemClientBuilder};
pub use error::{ApiError, ErrorCategory};
pub use execution::{CancelHandle, HttpBody, RequestOptions};
