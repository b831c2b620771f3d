//! # longswipe-client
//!
//! Rust client for the Longswipe merchant API: customer management,
//! invoicing, and voucher verification/redemption.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use longswipe_client::LongswipeClient;
//! use longswipe_core::VoucherRedemptionParams;
//!
//! // true = sandbox, false = production
//! let client = LongswipeClient::new("your-api-key", true);
//!
//! let params = VoucherRedemptionParams::new("VOUCHER123", 1000, "USD")
//!     .with_lock_pin("1234");
//!
//! // Inspect charges first, then redeem with the same parameters
//! let charges = client.fetch_voucher_redemption_charges(&params).await?;
//! let receipt = client.process_voucher_payment(&params).await?;
//! ```
//!
//! Every operation returns the decoded `{status, message, code, data}`
//! envelope on HTTP 200 and a [`longswipe_core::LongswipeError`] otherwise:
//! `Api` for non-200 statuses, `Network` for transport failures, `Decode`
//! for malformed success bodies. The client performs no retries and no
//! client-side validation of required fields.

pub mod client;
pub mod config;
pub mod endpoint;

// Re-exports
pub use client::LongswipeClient;
pub use config::{LongswipeConfig, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use endpoint::{Endpoint, Method};
pub use longswipe_core::{ApiResponse, LongswipeError, LongswipeResult};
