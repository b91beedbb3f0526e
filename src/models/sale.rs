use chrono::{DateTime, Utc};
use serde::Serialize;

/// A recorded sale with its line items. `total_price` is derived at read
/// time from the current product price, so it moves when prices change.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i64,
    pub user_id: i64,
    pub date: DateTime<Utc>,
    pub items: Vec<SaleItem>,
    pub total_price: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleItem {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
}
