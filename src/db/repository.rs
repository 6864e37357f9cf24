use crate::error::{Result, StoreError};
use crate::models::expense::Expense;
use crate::operations::add::create_expense;
use crate::operations::search_by_category::search_expenses_by_category;
use crate::operations::summary::{MonthlySummary, summarize_month};
use chrono::{Local, NaiveDate};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_PATH: &str = "expenses.json";

/// Ordered expenses mirrored to a JSON file. Every successful mutation
/// rewrites the whole file.
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expenses: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Replaces the in-memory sequence with the file contents. A missing file
    /// is a first run and loads nothing. On any error the store is left empty
    /// and the file is not modified.
    pub fn load(&mut self) -> Result<usize> {
        self.expenses.clear();

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no store file yet, starting empty");
                return Ok(0);
            }
            Err(source) => {
                tracing::warn!(path = %self.path.display(), "failed to read store file: {source}");
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let expenses: Vec<Expense> = serde_json::from_str(&content).map_err(|source| {
            tracing::warn!(path = %self.path.display(), "failed to decode store file: {source}");
            StoreError::Decode {
                path: self.path.clone(),
                source,
            }
        })?;

        self.expenses = expenses;
        tracing::debug!(
            path = %self.path.display(),
            count = self.expenses.len(),
            "loaded expenses"
        );
        Ok(self.expenses.len())
    }

    pub fn save(&self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.expenses).map_err(StoreError::Encode)?;

        fs::write(&self.path, payload).map_err(|source| {
            tracing::warn!(path = %self.path.display(), "failed to save expenses: {source}");
            StoreError::Io {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %self.path.display(), count = self.expenses.len(), "saved expenses");
        Ok(())
    }

    /// Records an expense dated today. An invalid amount leaves the store
    /// untouched. A failed save is reported but the new record stays in memory.
    pub fn add(&mut self, amount: &str, description: &str, category: &str) -> Result<()> {
        self.add_on(amount, description, category, Local::now().date_naive())
    }

    fn add_on(
        &mut self,
        amount: &str,
        description: &str,
        category: &str,
        date: NaiveDate,
    ) -> Result<()> {
        let expense = create_expense(amount, description, category, date)?;
        tracing::info!(amount = %expense.amount, category = %expense.category, "adding expense");
        self.expenses.push(expense);
        self.save()
    }

    pub fn list_all(&self) -> Option<&[Expense]> {
        if self.expenses.is_empty() {
            None
        } else {
            Some(&self.expenses)
        }
    }

    pub fn list_by_category(&self, category: &str) -> Option<Vec<&Expense>> {
        let matches = search_expenses_by_category(category, &self.expenses);
        if matches.is_empty() { None } else { Some(matches) }
    }

    pub fn summary_for_month(&self, month: &str) -> Option<MonthlySummary<'_>> {
        summarize_month(month, &self.expenses)
    }
}
