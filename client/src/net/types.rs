//! Shared wire DTOs for the storefront API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the catalog/auth API JSON exactly so the persisted
//! `user` entry and API payloads deserialize with the same types. Unknown
//! fields (timestamps and the like) are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A signed-in customer or administrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned numeric identifier.
    pub user_id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Street address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Opaque role tag (e.g. `"customer"`, `"admin"`).
    pub role: String,
}

impl User {
    /// Full name when either part is known, otherwise the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(" ")
        }
    }

    /// Postal address as display lines; empty when no address field is set.
    #[must_use]
    pub fn address_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(street) = non_blank(self.address.as_deref()) {
            lines.push(street.to_owned());
        }
        let locality: Vec<&str> = [self.city.as_deref(), self.state.as_deref(), self.zip_code.as_deref()]
            .into_iter()
            .filter_map(non_blank)
            .collect();
        if !locality.is_empty() {
            lines.push(locality.join(", "));
        }
        if let Some(country) = non_blank(self.country.as_deref()) {
            lines.push(country.to_owned());
        }
        lines
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Product category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: i64,
    pub name: String,
}

/// A product as listed by `GET /products/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal price kept as its wire text so no rounding happens client-side.
    #[serde(deserialize_with = "deserialize_price")]
    pub price: String,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category_id: i64,
    pub category: Category,
}

impl Product {
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Price prefixed with the store currency symbol.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}

/// Body of a successful `POST /auth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// Decimal prices arrive as strings (`"19.99"`) from the API but plain
/// numbers are accepted too.
fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => {
            if text.trim().parse::<f64>().is_ok_and(f64::is_finite) {
                Ok(text.trim().to_owned())
            } else {
                Err(D::Error::custom(format!("invalid decimal price {text:?}")))
            }
        }
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected decimal string or number")),
    }
}
