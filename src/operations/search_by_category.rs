use crate::models::expense::Expense;

pub fn search_expenses_by_category<'a>(
    category: &str,
    expenses: &'a [Expense],
) -> Vec<&'a Expense> {
    let wanted = category.to_lowercase();
    expenses
        .iter()
        .filter(|expense| expense.category.to_lowercase() == wanted)
        .collect()
}
