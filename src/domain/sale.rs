//! Sales transactions recorded against catalog products.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordId, TableRecord};

/// Venue a sale went through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SaleChannel {
    #[default]
    #[serde(rename = "Store-front")]
    Storefront,
    Online,
    Market,
}

impl SaleChannel {
    pub const ALL: [SaleChannel; 3] = [
        SaleChannel::Storefront,
        SaleChannel::Online,
        SaleChannel::Market,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SaleChannel::Storefront => "Store-front",
            SaleChannel::Online => "Online",
            SaleChannel::Market => "Market",
        }
    }
}

impl fmt::Display for SaleChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded sale.
///
/// `product_id` may dangle after a product delete; joined reports drop such
/// rows silently. The date is kept as text (nominally `YYYY-MM-DD`) so an
/// unparseable value degrades in the monthly view instead of failing a load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    #[serde(rename = "ID", default)]
    pub id: RecordId,
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "ProductID", default)]
    pub product_id: RecordId,
    #[serde(rename = "Quantity", default)]
    pub quantity: u32,
    #[serde(rename = "Channel", default)]
    pub channel: SaleChannel,
}

impl Sale {
    pub fn new(
        date: impl Into<String>,
        product_id: RecordId,
        quantity: u32,
        channel: SaleChannel,
    ) -> Self {
        Self {
            id: 0,
            date: date.into(),
            product_id,
            quantity,
            channel,
        }
    }

    /// The sale date, when it parses as `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }
}

impl TableRecord for Sale {
    const TABLE_NAME: &'static str = "sales";
    const COLUMNS: &'static [&'static str] = &["ID", "Date", "ProductID", "Quantity", "Channel"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
