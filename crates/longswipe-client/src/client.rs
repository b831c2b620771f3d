//! # Longswipe Client
//!
//! The client owns one `reqwest::Client` and a read-only config; every
//! operation resolves its endpoint descriptor and hands it to `dispatch`,
//! which performs exactly one HTTP round trip and classifies the outcome.

use crate::config::LongswipeConfig;
use crate::endpoint::{self, Endpoint, Method};
use longswipe_core::{
    ApiResponse, CreateCustomerParams, CreateInvoiceParams, FetchCustomerByEmailParams,
    FetchCustomersParams, LongswipeError, LongswipeResult, UpdateCustomerParams,
    VerifyVoucherParams, VoucherRedemptionParams, UNKNOWN_ERROR_MESSAGE,
};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, error, instrument};

/// Client for the Longswipe merchant API.
///
/// Cheap to clone; safe to share across tasks. Each call is one independent
/// HTTP round trip with no retries and no shared mutable state.
#[derive(Debug, Clone)]
pub struct LongswipeClient {
    config: LongswipeConfig,
    client: Client,
}

impl LongswipeClient {
    /// Create a client from an API key and an environment flag
    pub fn new(api_key: impl Into<String>, sandbox: bool) -> Self {
        Self::with_config(LongswipeConfig::new(api_key, sandbox))
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: LongswipeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables (`LONGSWIPE_API_KEY`,
    /// `LONGSWIPE_SANDBOX`)
    pub fn from_env() -> LongswipeResult<Self> {
        let config = LongswipeConfig::from_env()?;
        Ok(Self::with_config(config))
    }

    /// The base URL this client issues requests against
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------

    /// Create a new customer
    pub async fn create_customer(
        &self,
        params: &CreateCustomerParams,
    ) -> LongswipeResult<ApiResponse> {
        self.dispatch(&endpoint::CREATE_CUSTOMER, None, Some(params))
            .await
    }

    /// Update customer details
    pub async fn update_customer(
        &self,
        params: &UpdateCustomerParams,
    ) -> LongswipeResult<ApiResponse> {
        self.dispatch(&endpoint::UPDATE_CUSTOMER, None, Some(params))
            .await
    }

    /// Delete a customer by id
    pub async fn delete_customer(&self, customer_id: &str) -> LongswipeResult<ApiResponse> {
        self.dispatch::<()>(&endpoint::DELETE_CUSTOMER, Some(customer_id), None)
            .await
    }

    /// Fetch customers, optionally paged and filtered
    pub async fn fetch_customers(
        &self,
        params: &FetchCustomersParams,
    ) -> LongswipeResult<ApiResponse> {
        self.dispatch(&endpoint::FETCH_CUSTOMERS, None, Some(params))
            .await
    }

    /// Fetch a customer by email address
    pub async fn fetch_customer_by_email(
        &self,
        params: &FetchCustomerByEmailParams,
    ) -> LongswipeResult<ApiResponse> {
        self.dispatch(&endpoint::FETCH_CUSTOMER_BY_EMAIL, None, Some(params))
            .await
    }

    // -------------------------------------------------------------------
    // Reference data
    // -------------------------------------------------------------------

    /// Fetch all supported currencies
    pub async fn fetch_supported_currencies(&self) -> LongswipeResult<ApiResponse> {
        self.dispatch::<()>(&endpoint::FETCH_SUPPORTED_CURRENCIES, None, None)
            .await
    }

    /// Fetch all supported crypto networks
    pub async fn fetch_supported_crypto_networks(&self) -> LongswipeResult<ApiResponse> {
        self.dispatch::<()>(&endpoint::FETCH_SUPPORTED_CRYPTO_NETWORKS, None, None)
            .await
    }

    // -------------------------------------------------------------------
    // Invoices
    // -------------------------------------------------------------------

    /// Create an invoice with nested line items
    pub async fn create_invoice(
        &self,
        params: &CreateInvoiceParams,
    ) -> LongswipeResult<ApiResponse> {
        self.dispatch(&endpoint::CREATE_INVOICE, None, Some(params))
            .await
    }

    // -------------------------------------------------------------------
    // Vouchers
    // -------------------------------------------------------------------

    /// Fetch redemption charges (and voucher details) for a voucher
    pub async fn fetch_voucher_redemption_charges(
        &self,
        params: &VoucherRedemptionParams,
    ) -> LongswipeResult<ApiResponse> {
        self.dispatch(
            &endpoint::FETCH_VOUCHER_REDEMPTION_CHARGES,
            None,
            Some(params),
        )
        .await
    }

    /// Verify a voucher code
    pub async fn verify_voucher(
        &self,
        params: &VerifyVoucherParams,
    ) -> LongswipeResult<ApiResponse> {
        self.dispatch(&endpoint::VERIFY_VOUCHER, None, Some(params))
            .await
    }

    /// Redeem a voucher. Takes the same parameters as
    /// [`fetch_voucher_redemption_charges`](Self::fetch_voucher_redemption_charges);
    /// fetch the charges first and redeem once the caller accepts them.
    pub async fn process_voucher_payment(
        &self,
        params: &VoucherRedemptionParams,
    ) -> LongswipeResult<ApiResponse> {
        self.dispatch(&endpoint::REDEEM_VOUCHER, None, Some(params))
            .await
    }

    // -------------------------------------------------------------------
    // Dispatcher
    // -------------------------------------------------------------------

    /// Execute one HTTP round trip for `endpoint` and classify the outcome.
    ///
    /// GET sends params as a query string (none when empty), POST/PATCH as
    /// a JSON body, DELETE sends neither. Required-field validation is left
    /// to the remote service.
    #[instrument(skip_all, fields(method = %endpoint.method, path = endpoint.path))]
    async fn dispatch<P: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        path_param: Option<&str>,
        params: Option<&P>,
    ) -> LongswipeResult<ApiResponse> {
        let path: Cow<'_, str> = match path_param {
            Some(param) => Cow::Owned(endpoint.path_with(param)),
            None => Cow::Borrowed(endpoint.path),
        };
        let url = format!("{}/{}", self.config.base_url, path);

        // Content-Type is a singleton header; `json()` sets it on the
        // body-carrying branch, so only GET/DELETE set it explicitly.
        let request = match endpoint.method {
            Method::Get => {
                let mut request = self
                    .client
                    .get(&url)
                    .header("Content-Type", "application/json");
                if let Some(params) = params {
                    request = request.query(params);
                }
                request
            }
            Method::Post | Method::Patch => {
                let request = match endpoint.method {
                    Method::Post => self.client.post(&url),
                    _ => self.client.patch(&url),
                };
                match params {
                    Some(params) => request.json(params),
                    None => request.json(&Value::Object(Default::default())),
                }
            }
            // Params carry nothing here; the id travels in the path
            Method::Delete => self
                .client
                .delete(&url)
                .header("Content-Type", "application/json"),
        };

        debug!("Dispatching Longswipe request: {}", url);

        let response = request
            .header("Authorization", self.config.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| LongswipeError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LongswipeError::Network(e.to_string()))?;

        if status != StatusCode::OK {
            error!("Longswipe API error: status={}, body={}", status, body);

            let error_data: Option<Value> = serde_json::from_str(&body).ok();
            let message = error_data
                .as_ref()
                .and_then(|data| data.get("message"))
                .and_then(|message| message.as_str())
                .map(String::from)
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

            return Err(LongswipeError::Api {
                message,
                status: status.as_u16(),
                error_data,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            LongswipeError::Decode(format!("Failed to parse Longswipe response: {}", e))
        })
    }
}
