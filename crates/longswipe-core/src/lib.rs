//! # longswipe-core
//!
//! Core types for the Longswipe merchant API client.
//!
//! This crate provides:
//! - `LongswipeError` for typed error handling
//! - `ApiResponse`, the `{status, message, code, data}` envelope every
//!   endpoint returns
//! - Typed request parameter structs for customers, invoices, and vouchers
//! - Typed views over common `data` payloads (currencies, redemption charges)
//!
//! The HTTP client itself lives in `longswipe-client`.

pub mod error;
pub mod params;
pub mod response;

// Re-exports for convenience
pub use error::{LongswipeError, LongswipeResult, UNKNOWN_ERROR_MESSAGE};
pub use params::{
    CreateCustomerParams, CreateInvoiceParams, FetchCustomerByEmailParams, FetchCustomersParams,
    InvoiceItem, UpdateCustomerParams, VerifyVoucherParams, VoucherRedemptionParams,
};
pub use response::{
    ApiResponse, CurrencyInfo, RedemptionCharges, SupportedCurrencies, VoucherRedemptionData,
};
