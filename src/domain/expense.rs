//! Operating expenses: rent, marketing, supplies, and the like.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordId, TableRecord};

/// Expense classification. Informational only; no computation uses it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ExpenseKind {
    #[default]
    Fixed,
    Variable,
}

impl ExpenseKind {
    pub const ALL: [ExpenseKind; 2] = [ExpenseKind::Fixed, ExpenseKind::Variable];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseKind::Fixed => "Fixed",
            ExpenseKind::Variable => "Variable",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One operating expense, grouped by free-text category in reports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    #[serde(rename = "ID", default)]
    pub id: RecordId,
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Amount", default)]
    pub amount: f64,
    #[serde(rename = "Type", default)]
    pub kind: ExpenseKind,
}

impl Expense {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        kind: ExpenseKind,
    ) -> Self {
        Self {
            id: 0,
            date: date.into(),
            category: category.into(),
            amount,
            kind,
        }
    }
}

impl TableRecord for Expense {
    const TABLE_NAME: &'static str = "expenses";
    const COLUMNS: &'static [&'static str] = &["ID", "Date", "Category", "Amount", "Type"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
