//! # Request Parameter Types
//!
//! Typed parameter structs for each Longswipe operation. Fields serialize
//! to the camelCase names the API expects; optional fields are omitted
//! from the wire entirely when unset.
//!
//! The client does not pre-validate required fields. A missing required
//! field is rejected by the remote service and surfaces as an API error.

use serde::{Deserialize, Serialize};

/// Parameters for creating a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerParams {
    pub email: String,
    pub name: String,
}

/// Parameters for updating a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerParams {
    /// Customer ID to update
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Query parameters for listing customers. All fields are optional;
/// the default lists the first page with server-side defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchCustomersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FetchCustomersParams {
    /// Builder: set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Builder: set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: set a search term
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Query parameters for looking up a customer by email
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchCustomerByEmailParams {
    pub email: String,
}

/// A line item on an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Parameters for creating an invoice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceParams {
    pub blockchain_network_id: String,
    pub currency_id: String,
    pub due_date: String,
    pub invoice_date: String,
    pub invoice_items: Vec<InvoiceItem>,
    pub merchant_user_id: String,
}

/// Parameters shared by voucher charge lookup and voucher redemption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRedemptionParams {
    /// Voucher code to look up or redeem
    pub voucher_code: String,
    /// Amount to redeem, in the voucher's smallest unit
    pub amount: i64,
    /// Currency code to receive (e.g. "USD", "USDC")
    pub to_currency_abbreviation: String,
    /// PIN, required only if the voucher is locked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_pin: Option<String>,
    /// Destination wallet for crypto redemptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

impl VoucherRedemptionParams {
    /// Create redemption parameters with the required fields
    pub fn new(
        voucher_code: impl Into<String>,
        amount: i64,
        to_currency_abbreviation: impl Into<String>,
    ) -> Self {
        Self {
            voucher_code: voucher_code.into(),
            amount,
            to_currency_abbreviation: to_currency_abbreviation.into(),
            lock_pin: None,
            wallet_address: None,
        }
    }

    /// Builder: set the lock PIN
    pub fn with_lock_pin(mut self, pin: impl Into<String>) -> Self {
        self.lock_pin = Some(pin.into());
        self
    }

    /// Builder: set the destination wallet address
    pub fn with_wallet_address(mut self, address: impl Into<String>) -> Self {
        self.wallet_address = Some(address.into());
        self
    }
}

/// Parameters for verifying a voucher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyVoucherParams {
    pub voucher_code: String,
}
