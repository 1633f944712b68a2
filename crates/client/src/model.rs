//! Wire models for the customer resource.

use serde::{Deserialize, Serialize};

/// One customer row as it crosses the wire.
///
/// Every field is optional so the same type serves whole rows, create
/// payloads and partial updates; absent fields in an update leave the
/// stored columns untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Customer {
    /// Key assigned by the store; absent on rows not yet created.
    #[serde(rename = "CustomerID", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub customer_name: Option<String>,
    pub phone_number: Option<String>,
    pub fax_number: Option<String>,
    #[serde(rename = "WebsiteURL")]
    pub website_url: Option<String>,
    pub delivery: Delivery,
}

/// Delivery address block nested inside a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Delivery {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub postal_code: Option<String>,
}
