//! Wire DTOs for the storefront API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON exactly. Response types are
//! lenient (`#[serde(default)]` plus `null_as_default`) because the backend
//! omits fields freely and stores nullable columns, and a half-populated
//! product card is better than a failed page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_email: String,
    pub user_password: String,
}

/// Body of `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub new_user_name: String,
    pub new_user_email: String,
    pub new_user_password: String,
}

/// A catalogue entry as returned by the product, wish-list and cart endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(rename = "_id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub book_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub original_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub discounted_price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub discount_percent: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub img_src: String,
    #[serde(deserialize_with = "null_as_default")]
    pub img_alt: String,
    pub badge_text: Option<String>,
    #[serde(deserialize_with = "bool_from_int_or_bool")]
    pub out_of_stock: bool,
    #[serde(deserialize_with = "bool_from_int_or_bool")]
    pub fast_delivery_available: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub genre: String,
    pub rating: Option<f64>,
    pub description: Option<String>,
}

/// Wish list and cart of the current user, from `GET /user`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserData {
    #[serde(deserialize_with = "null_as_default")]
    pub wishlist: Vec<Product>,
    #[serde(deserialize_with = "null_as_default")]
    pub cart: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserDataResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user: Option<UserData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NewArrivalsResponse {
    #[serde(rename = "newArrivalList", default, deserialize_with = "null_as_default")]
    pub new_arrival_list: Vec<Product>,
}

/// Nullable SQLite columns come back as `null`; treat that like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// SQLite hands booleans back as `0`/`1`; accept both spellings.
fn bool_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        _ => false,
    })
}
