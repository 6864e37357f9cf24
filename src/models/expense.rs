use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Date layout used on disk and for month-prefix matching.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Written as a JSON number carrying the exact decimal digits.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(amount: Decimal, description: String, category: String, date: NaiveDate) -> Self {
        Self {
            amount,
            description,
            category,
            date,
        }
    }

    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
