use axum::{extract::State, Json};

use crate::dtos::dashboard::DashboardSummary;
use crate::error::AppError;
use crate::state::AppState;

/// Products below this count are flagged on the dashboard.
const LOW_STOCK_THRESHOLD: i32 = 10;

// GET /dashboard/summary - any authenticated user
//
// Three independent aggregate reads, not a point-in-time consistent view.
pub async fn get_summary(
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<Json<DashboardSummary>, AppError> {
    let total_sales_month: f64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(p.price * si.quantity), 0)
         FROM sales s
         JOIN sales_items si ON s.id = si.sale_id
         JOIN products p ON si.product_id = p.id
         WHERE s.date >= date_trunc('month', current_date)",
    )
    .fetch_one(&db_pool)
    .await?;

    let total_sellers: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'seller'")
            .fetch_one(&db_pool)
            .await?;

    let low_stock_products: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE quantity < $1")
            .bind(LOW_STOCK_THRESHOLD)
            .fetch_one(&db_pool)
            .await?;

    Ok(Json(DashboardSummary {
        total_sales_month,
        total_sellers,
        low_stock_products,
    }))
}
