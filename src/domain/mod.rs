pub mod common;
pub mod expense;
pub mod product;
pub mod sale;

pub use common::{next_record_id, RecordId, TableRecord};
pub use expense::{Expense, ExpenseKind};
pub use product::Product;
pub use sale::{Sale, SaleChannel};
