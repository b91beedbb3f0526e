use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};

use crate::dtos::sale::{CreateSaleRequest, CreateSaleResponse};
use crate::error::AppError;
use crate::models::sale::{Sale, SaleItem};
use crate::state::AppState;

/// One row of the flattened sales join. Item columns are nullable because a
/// sale with no items still produces a row through the LEFT JOIN.
#[derive(sqlx::FromRow)]
struct SaleRow {
    id: i64,
    user_id: i64,
    date: DateTime<Utc>,
    product_id: Option<i64>,
    quantity: Option<i32>,
    product_name: Option<String>,
    unit_price: Option<f64>,
}

// GET /sales - any authenticated user
pub async fn list_sales(
    State(AppState { db_pool, .. }): State<AppState>,
) -> Result<Json<Vec<Sale>>, AppError> {
    let rows = sqlx::query_as::<_, SaleRow>(
        "SELECT s.id, s.user_id, s.date,
                si.product_id, si.quantity,
                p.name AS product_name, p.price AS unit_price
         FROM sales s
         LEFT JOIN sales_items si ON s.id = si.sale_id
         LEFT JOIN products p ON si.product_id = p.id
         ORDER BY s.date DESC",
    )
    .fetch_all(&db_pool)
    .await?;

    Ok(Json(group_sale_rows(rows)))
}

/// Folds the join rows into one `Sale` per id, accumulating items and the
/// running total. Totals use the product's current price, so they shift when
/// prices are edited after the fact. The map loses the query's ordering, so
/// the result is re-sorted by date descending before returning.
fn group_sale_rows(rows: Vec<SaleRow>) -> Vec<Sale> {
    let mut by_id: HashMap<i64, Sale> = HashMap::new();

    for row in rows {
        let sale = by_id.entry(row.id).or_insert_with(|| Sale {
            id: row.id,
            user_id: row.user_id,
            date: row.date,
            items: Vec::new(),
            total_price: 0.0,
        });

        if let (Some(product_id), Some(quantity)) = (row.product_id, row.quantity) {
            let unit_price = row.unit_price.unwrap_or(0.0);
            sale.total_price += f64::from(quantity) * unit_price;
            sale.items.push(SaleItem {
                product_id,
                product_name: row.product_name.unwrap_or_default(),
                quantity,
                unit_price,
            });
        }
    }

    let mut sales: Vec<Sale> = by_id.into_values().collect();
    sales.sort_by(|a, b| b.date.cmp(&a.date));
    sales
}

// POST /sales - any authenticated user
//
// Either every line item is decremented and recorded, or nothing is: the
// whole operation runs inside one transaction, and dropping the transaction
// on any early return rolls it back.
pub async fn create_sale(
    State(AppState { db_pool, .. }): State<AppState>,
    Json(req): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<CreateSaleResponse>), AppError> {
    if req.items.is_empty() {
        return Err(AppError::validation("Sale must contain at least one item"));
    }
    if req.items.iter().any(|item| item.quantity <= 0) {
        return Err(AppError::validation("Quantity must be greater than 0"));
    }

    let mut tx = db_pool.begin().await?;

    let sale_id: i64 =
        sqlx::query_scalar("INSERT INTO sales (user_id, date) VALUES ($1, NOW()) RETURNING id")
            .bind(req.user_id)
            .fetch_one(&mut *tx)
            .await?;

    for item in &req.items {
        // The conditional decrement is what makes concurrent sales of the
        // same product safe: the row lock taken by the UPDATE serializes
        // them, and the quantity guard fails the loser.
        let updated = sqlx::query(
            "UPDATE products SET quantity = quantity - $1 WHERE id = $2 AND quantity >= $1",
        )
        .bind(item.quantity)
        .bind(item.product_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::validation("Insufficient stock or product not found"));
        }

        sqlx::query("INSERT INTO sales_items (sale_id, product_id, quantity) VALUES ($1, $2, $3)")
            .bind(sale_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(CreateSaleResponse { sale_id })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0).unwrap()
    }

    fn item_row(
        id: i64,
        date: DateTime<Utc>,
        product_id: i64,
        quantity: i32,
        unit_price: f64,
    ) -> SaleRow {
        SaleRow {
            id,
            user_id: 7,
            date,
            product_id: Some(product_id),
            quantity: Some(quantity),
            product_name: Some(format!("product-{product_id}")),
            unit_price: Some(unit_price),
        }
    }

    #[test]
    fn groups_rows_into_sales_with_totals() {
        let rows = vec![
            item_row(1, date(9), 10, 2, 5.0),
            item_row(1, date(9), 11, 1, 3.5),
            item_row(2, date(12), 10, 4, 5.0),
        ];

        let sales = group_sale_rows(rows);

        assert_eq!(sales.len(), 2);
        let first = &sales[1];
        assert_eq!(first.id, 1);
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total_price, 2.0 * 5.0 + 3.5);
        let second = &sales[0];
        assert_eq!(second.id, 2);
        assert_eq!(second.total_price, 20.0);
    }

    #[test]
    fn sorts_sales_by_date_descending() {
        let rows = vec![
            item_row(1, date(8), 10, 1, 1.0),
            item_row(2, date(15), 10, 1, 1.0),
            item_row(3, date(11), 10, 1, 1.0),
        ];

        let sales = group_sale_rows(rows);

        let ids: Vec<i64> = sales.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn sale_without_items_yields_empty_list_and_zero_total() {
        let rows = vec![SaleRow {
            id: 5,
            user_id: 7,
            date: date(10),
            product_id: None,
            quantity: None,
            product_name: None,
            unit_price: None,
        }];

        let sales = group_sale_rows(rows);

        assert_eq!(sales.len(), 1);
        assert!(sales[0].items.is_empty());
        assert_eq!(sales[0].total_price, 0.0);
    }
}
