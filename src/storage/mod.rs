pub mod csv_backend;

use crate::errors::AtelierError;

pub type Result<T> = std::result::Result<T, AtelierError>;

pub use csv_backend::CsvTable;
