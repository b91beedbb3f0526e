use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_sales_month: f64,
    pub total_sellers: i64,
    pub low_stock_products: i64,
}
