use contracts::domain::expense::{Expense, ExpenseDto};

use crate::shared::api::{delete, get_json, get_text, post_json, put_json, ApiError};

pub async fn fetch_expenses() -> Result<Vec<Expense>, ApiError> {
    get_json("/expenses/").await
}

pub async fn create_expense(dto: &ExpenseDto) -> Result<Expense, ApiError> {
    post_json("/expenses/", dto).await
}

pub async fn update_expense(id: i64, dto: &ExpenseDto) -> Result<Expense, ApiError> {
    put_json(&format!("/expenses/{id}/"), dto).await
}

pub async fn delete_expense(id: i64) -> Result<(), ApiError> {
    delete(&format!("/expenses/{id}/")).await
}

/// Server-rendered CSV of all expense sheets.
pub async fn export_csv() -> Result<String, ApiError> {
    get_text("/expenses/export/").await
}
