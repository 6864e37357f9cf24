use crate::error::{Result, StoreError};
use crate::models::expense::Expense;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Accepts plain or scientific notation as long as the value fits a `Decimal`.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| StoreError::InvalidAmount(raw.to_string()))
}

pub fn create_expense(
    amount: &str,
    description: &str,
    category: &str,
    date: NaiveDate,
) -> Result<Expense> {
    let amount = parse_amount(amount)?;
    Ok(Expense::new(
        amount,
        description.to_string(),
        category.to_string(),
        date,
    ))
}
