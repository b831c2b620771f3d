//! # Response Envelope
//!
//! Every Longswipe endpoint wraps its payload in the same top-level
//! envelope: `{status, message, code, data}`. The `data` field is kept as
//! raw JSON and decoded into a typed view on demand.

use crate::error::{LongswipeError, LongswipeResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level response envelope returned by every Longswipe endpoint.
///
/// All fields are defaulted so a 200 body is accepted verbatim, whatever
/// subset of the envelope the endpoint fills in. The body must still be a
/// JSON object: a 200 response whose body is valid JSON but not an object
/// (e.g. a bare array) does not deserialize and classifies as a `Decode`
/// error, the same as invalid JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Outcome label, e.g. "success"
    #[serde(default)]
    pub status: String,

    /// Human-readable message
    #[serde(default)]
    pub message: String,

    /// Application-level status code
    #[serde(default)]
    pub code: i64,

    /// Operation-specific payload
    #[serde(default)]
    pub data: Value,
}

impl ApiResponse {
    /// Check whether the envelope reports success
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Decode the `data` payload into a typed view
    pub fn data_as<T: DeserializeOwned>(&self) -> LongswipeResult<T> {
        serde_json::from_value(self.data.clone()).map_err(|e| {
            LongswipeError::Decode(format!("Failed to decode response data: {}", e))
        })
    }
}

/// A currency supported by Longswipe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub currency_type: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_active: bool,
}

/// `data` payload of the fetch-supported-currencies endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedCurrencies {
    #[serde(default)]
    pub currencies: Vec<CurrencyInfo>,
}

/// Fee breakdown for a voucher redemption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionCharges {
    #[serde(default)]
    pub exchange_rate: i64,
    #[serde(default)]
    pub is_percentage_charge: bool,
    #[serde(default)]
    pub percentage_charge: i64,
    #[serde(default)]
    pub processing_fee: i64,
    #[serde(default)]
    pub swap_amount: i64,
    #[serde(default)]
    pub to_amount: i64,
    pub from_currency: Option<CurrencyInfo>,
    pub to_currency: Option<CurrencyInfo>,
}

/// `data` payload of the fetch-voucher-redemption-charges endpoint.
///
/// The voucher itself is opaque to this client; callers that need its
/// fields can inspect the raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoucherRedemptionData {
    pub charges: Option<RedemptionCharges>,
    #[serde(default)]
    pub voucher: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success_envelope() {
        let body = json!({
            "status": "success",
            "message": "ok",
            "code": 200,
            "data": {"id": "c1"}
        });

        let response: ApiResponse = serde_json::from_value(body).unwrap();
        assert!(response.is_success());
        assert_eq!(response.message, "ok");
        assert_eq!(response.code, 200);
        assert_eq!(response.data["id"], "c1");
    }

    #[test]
    fn test_partial_envelope_defaults() {
        let response: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.is_success());
        assert_eq!(response.code, 0);
        assert!(response.data.is_null());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        // Valid JSON, but not an envelope; the client reports Decode
        assert!(serde_json::from_str::<ApiResponse>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<ApiResponse>("\"success\"").is_err());
    }

    #[test]
    fn test_data_as_supported_currencies() {
        let response = ApiResponse {
            status: "success".to_string(),
            message: "ok".to_string(),
            code: 200,
            data: json!({
                "currencies": [{
                    "id": "cur_1",
                    "currency": "US Dollar",
                    "abbreviation": "USD",
                    "symbol": "$",
                    "currencyType": "fiat",
                    "image": "https://cdn.longswipe.com/usd.png",
                    "isActive": true
                }]
            }),
        };

        let decoded: SupportedCurrencies = response.data_as().unwrap();
        assert_eq!(decoded.currencies.len(), 1);
        assert_eq!(decoded.currencies[0].abbreviation, "USD");
        assert!(decoded.currencies[0].is_active);
    }

    #[test]
    fn test_data_as_redemption_charges() {
        let response = ApiResponse {
            status: "success".to_string(),
            message: "ok".to_string(),
            code: 200,
            data: json!({
                "charges": {
                    "exchangeRate": 1,
                    "isPercentageCharge": true,
                    "percentageCharge": 2,
                    "processingFee": 50,
                    "swapAmount": 1000,
                    "toAmount": 930
                },
                "voucher": {"code": "VOUCHER123"}
            }),
        };

        let decoded: VoucherRedemptionData = response.data_as().unwrap();
        let charges = decoded.charges.unwrap();
        assert_eq!(charges.processing_fee, 50);
        assert_eq!(charges.to_amount, 930);
        assert_eq!(decoded.voucher["code"], "VOUCHER123");
    }

    #[test]
    fn test_data_as_type_mismatch() {
        let response = ApiResponse {
            status: "success".to_string(),
            message: "ok".to_string(),
            code: 200,
            data: json!("not an object"),
        };

        let result: LongswipeResult<SupportedCurrencies> = response.data_as();
        assert!(matches!(result, Err(LongswipeError::Decode(_))));
    }
}
