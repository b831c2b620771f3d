//! # Endpoint Registry
//!
//! Static table of every supported Longswipe operation: relative path and
//! HTTP method. Pure data read by the dispatcher; no validation lives here.

/// HTTP methods used by the Longswipe API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Method name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptor for one API operation: relative path plus HTTP method.
///
/// GET endpoints carry parameters in the query string, POST/PATCH in a
/// JSON body, DELETE only in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub method: Method,
}

impl Endpoint {
    const fn new(method: Method, path: &'static str) -> Self {
        Self { path, method }
    }

    /// Resolve the path with a trailing path parameter (e.g. a customer id)
    pub fn path_with(&self, param: &str) -> String {
        format!("{}/{}", self.path, param)
    }
}

pub const CREATE_CUSTOMER: Endpoint = Endpoint::new(
    Method::Post,
    "merchant-integrations-server/add-new-customer",
);

pub const UPDATE_CUSTOMER: Endpoint = Endpoint::new(
    Method::Patch,
    "merchant-integrations-server/update-customer",
);

/// Customer id is appended to the path; no body, no query string.
pub const DELETE_CUSTOMER: Endpoint = Endpoint::new(
    Method::Delete,
    "merchant-integrations-server/delete-customer",
);

pub const FETCH_CUSTOMERS: Endpoint = Endpoint::new(
    Method::Get,
    "merchant-integrations-server/fetch-customers",
);

pub const FETCH_CUSTOMER_BY_EMAIL: Endpoint = Endpoint::new(
    Method::Get,
    "merchant-integrations-server/fetch-customer-by-email",
);

pub const FETCH_SUPPORTED_CURRENCIES: Endpoint = Endpoint::new(
    Method::Get,
    "merchant-integrations-server/fetch-supported-currencies",
);

pub const FETCH_SUPPORTED_CRYPTO_NETWORKS: Endpoint = Endpoint::new(
    Method::Get,
    "merchant-integrations-server/fetch-supported-cryptonetworks",
);

pub const CREATE_INVOICE: Endpoint = Endpoint::new(
    Method::Post,
    "merchant-integrations-server/create-invoice",
);

pub const FETCH_VOUCHER_REDEMPTION_CHARGES: Endpoint = Endpoint::new(
    Method::Post,
    "merchant-integrations/fetch-voucher-redemption-charges",
);

pub const VERIFY_VOUCHER: Endpoint = Endpoint::new(
    Method::Post,
    "merchant-integrations/verify-voucher",
);

pub const REDEEM_VOUCHER: Endpoint = Endpoint::new(
    Method::Post,
    "merchant-integrations/redeem-voucher",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_with_parameter() {
        assert_eq!(
            DELETE_CUSTOMER.path_with("customer-123"),
            "merchant-integrations-server/delete-customer/customer-123"
        );
    }

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_registry_shapes() {
        assert_eq!(CREATE_CUSTOMER.method, Method::Post);
        assert_eq!(UPDATE_CUSTOMER.method, Method::Patch);
        assert_eq!(DELETE_CUSTOMER.method, Method::Delete);
        assert_eq!(FETCH_CUSTOMERS.method, Method::Get);
        assert_eq!(FETCH_SUPPORTED_CURRENCIES.method, Method::Get);
        assert_eq!(REDEEM_VOUCHER.method, Method::Post);
        assert_eq!(
            VERIFY_VOUCHER.path,
            "merchant-integrations/verify-voucher"
        );
    }
}
