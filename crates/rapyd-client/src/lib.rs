//! # rapyd-client
//!
//! Authenticated HTTP client for the Rapyd REST API, built on the endpoint
//! contract from `rapyd-core`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rapyd_client::{Mode, RapydClient, RapydConfig};
//! use rapyd_core::{CountryCurrencyParams, GetPaymentMethods};
//!
//! // Credentials from RAPYD_ACCESS_KEY / RAPYD_SECRET_KEY / RAPYD_MODE
//! let client = RapydClient::from_env()?;
//!
//! let methods = client
//!     .get::<GetPaymentMethods>(&CountryCurrencyParams::new("US", "USD"))
//!     .await?;
//!
//! for method in methods {
//!     println!("{} ({})", method.name, method.method_type);
//! }
//! ```
//!
//! Every request is signed per Rapyd's HMAC scheme (see [`signature`]) and
//! unwrapped from the response envelope; API-level failures surface as
//! `RapydError::Api` with the status block's fields intact.

pub mod client;
pub mod config;
pub mod signature;

// Re-exports
pub use client::{HttpTransport, RapydClient, Transport, TransportRequest, TransportResponse};
pub use config::{Mode, RapydConfig};
pub use signature::Signature;
