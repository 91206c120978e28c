//! Catalog entries for the garments the atelier sells.

use serde::{Deserialize, Serialize};

use crate::domain::common::{RecordId, TableRecord};

/// One garment model: its sale price, unit cost components, and stock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(rename = "ID", default)]
    pub id: RecordId,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "SalePrice", default)]
    pub sale_price: f64,
    #[serde(rename = "FabricCost", default)]
    pub fabric_cost: f64,
    #[serde(rename = "LaborCost", default)]
    pub labor_cost: f64,
    #[serde(rename = "AccessoryCost", default)]
    pub accessory_cost: f64,
    #[serde(rename = "Stock", default)]
    pub stock: u32,
}

impl Product {
    /// Builds a catalog entry with an unassigned identifier; the store
    /// assigns the real one on add.
    pub fn new(
        name: impl Into<String>,
        sale_price: f64,
        fabric_cost: f64,
        labor_cost: f64,
        accessory_cost: f64,
        stock: u32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            sale_price,
            fabric_cost,
            labor_cost,
            accessory_cost,
            stock,
        }
    }

    /// Cost of producing a single unit.
    pub fn unit_cost(&self) -> f64 {
        self.fabric_cost + self.labor_cost + self.accessory_cost
    }
}

impl TableRecord for Product {
    const TABLE_NAME: &'static str = "products";
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "Name",
        "SalePrice",
        "FabricCost",
        "LaborCost",
        "AccessoryCost",
        "Stock",
    ];

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }
}
