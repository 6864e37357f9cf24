use crate::models::expense::Expense;
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct MonthlySummary<'a> {
    pub month: String,
    pub total: Decimal,
    pub expenses: Vec<&'a Expense>,
}

/// Matches `month` as a raw prefix of each `YYYY-MM-DD` date, so `"2025-1"`
/// also covers October through December.
pub fn summarize_month<'a>(month: &str, expenses: &'a [Expense]) -> Option<MonthlySummary<'a>> {
    let matching: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| expense.date_string().starts_with(month))
        .collect();

    if matching.is_empty() {
        return None;
    }

    let total = matching.iter().map(|expense| expense.amount).sum();
    Some(MonthlySummary {
        month: month.to_string(),
        total,
        expenses: matching,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn create_test_expense(amount: i64, y: i32, m: u32, d: u32) -> Expense {
        Expense::new(
            Decimal::new(amount, 0),
            format!("spent {}", amount),
            "Misc".to_string(),
            NaiveDate::from_ymd_opt(y, m, d).expect("Invalid date"),
        )
    }

    fn sample() -> Vec<Expense> {
        vec![
            create_test_expense(10, 2025, 1, 5),
            create_test_expense(20, 2025, 2, 1),
        ]
    }

    #[test]
    fn test_summarize_month_sums_only_matching() {
        let expenses = sample();
        let summary = summarize_month("2025-01", &expenses).unwrap();

        assert_eq!(summary.month, "2025-01");
        assert_eq!(summary.total, Decimal::new(10, 0));
        assert_eq!(summary.expenses.len(), 1);
        assert_eq!(summary.expenses[0].description, "spent 10");
    }

    #[test]
    fn test_summarize_month_no_matches() {
        let expenses = sample();
        assert!(summarize_month("2025-03", &expenses).is_none());
    }

    #[test]
    fn test_summarize_month_empty_store() {
        assert!(summarize_month("2025-01", &[]).is_none());
    }

    #[test]
    fn test_summarize_month_is_a_literal_prefix() {
        let expenses = vec![
            create_test_expense(1, 2025, 1, 5),
            create_test_expense(2, 2025, 10, 2),
            create_test_expense(4, 2025, 12, 31),
            create_test_expense(8, 2024, 10, 1),
        ];

        let summary = summarize_month("2025-1", &expenses).unwrap();
        assert_eq!(summary.expenses.len(), 3);
        assert_eq!(summary.total, Decimal::new(7, 0));

        let whole_year = summarize_month("2024", &expenses).unwrap();
        assert_eq!(whole_year.total, Decimal::new(8, 0));
    }

    #[test]
    fn test_summarize_month_keeps_insertion_order() {
        let expenses = vec![
            create_test_expense(3, 2025, 5, 20),
            create_test_expense(5, 2025, 5, 2),
        ];

        let summary = summarize_month("2025-05", &expenses).unwrap();
        assert_eq!(summary.expenses[0].description, "spent 3");
        assert_eq!(summary.expenses[1].description, "spent 5");
        assert_eq!(summary.total, Decimal::new(8, 0));
    }
}
