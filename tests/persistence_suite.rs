mod common;

use atelier_core::domain::{Expense, ExpenseKind, Product, Sale, SaleChannel};
use atelier_core::storage::CsvTable;
use std::fs;

fn sample_product(name: &str) -> Product {
    Product::new(name, 800.0, 200.0, 150.0, 50.0, 5)
}

#[test]
fn every_mutation_is_visible_to_a_fresh_store() {
    let dir = common::setup_data_dir();
    let table: CsvTable<Product> = CsvTable::open(&dir).unwrap();
    table.add(sample_product("Caftan A")).unwrap();

    // A second store over the same directory sees the write immediately.
    let reopened: CsvTable<Product> = CsvTable::open(&dir).unwrap();
    let rows = reopened.load().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Caftan A");

    reopened.delete(1).unwrap();
    assert!(table.load().unwrap().is_empty());
}

#[test]
fn the_three_tables_are_independent_files() {
    let dir = common::setup_data_dir();
    let products: CsvTable<Product> = CsvTable::open(&dir).unwrap();
    let sales: CsvTable<Sale> = CsvTable::open(&dir).unwrap();
    let expenses: CsvTable<Expense> = CsvTable::open(&dir).unwrap();

    products.add(sample_product("Caftan A")).unwrap();
    sales
        .add(Sale::new("2024-01-15", 1, 2, SaleChannel::Online))
        .unwrap();
    expenses
        .add(Expense::new("2024-01-01", "Rent", 1000.0, ExpenseKind::Fixed))
        .unwrap();

    assert!(dir.join("products.csv").exists());
    assert!(dir.join("sales.csv").exists());
    assert!(dir.join("expenses.csv").exists());

    // Each table assigns identifiers from its own counter.
    assert_eq!(products.load().unwrap()[0].id, 1);
    assert_eq!(sales.load().unwrap()[0].id, 1);
    assert_eq!(expenses.load().unwrap()[0].id, 1);
}

#[test]
fn product_file_carries_the_fixed_column_schema_in_order() {
    let dir = common::setup_data_dir();
    let table: CsvTable<Product> = CsvTable::open(&dir).unwrap();
    table.add(sample_product("Caftan A")).unwrap();

    let contents = fs::read_to_string(table.path()).unwrap();
    assert_eq!(
        contents.lines().next(),
        Some("ID,Name,SalePrice,FabricCost,LaborCost,AccessoryCost,Stock")
    );
}

#[test]
fn sale_and_expense_rows_round_trip_their_enums() {
    let dir = common::setup_data_dir();
    let sales: CsvTable<Sale> = CsvTable::open(&dir).unwrap();
    let expenses: CsvTable<Expense> = CsvTable::open(&dir).unwrap();

    sales
        .add(Sale::new("2024-03-02", 7, 1, SaleChannel::Market))
        .unwrap();
    expenses
        .add(Expense::new(
            "2024-03-05",
            "Marketing",
            500.0,
            ExpenseKind::Variable,
        ))
        .unwrap();

    let sale = &sales.load().unwrap()[0];
    assert_eq!(sale.channel, SaleChannel::Market);
    assert_eq!(sale.product_id, 7);

    let expense = &expenses.load().unwrap()[0];
    assert_eq!(expense.kind, ExpenseKind::Variable);
    assert_eq!(expense.category, "Marketing");

    // The on-disk spelling matches the external contract.
    let contents = fs::read_to_string(sales.path()).unwrap();
    assert!(contents.contains("Market"));
    let storefront_dir = common::setup_data_dir();
    let storefront: CsvTable<Sale> = CsvTable::open(&storefront_dir).unwrap();
    storefront
        .add(Sale::new("2024-03-02", 1, 1, SaleChannel::Storefront))
        .unwrap();
    let contents = fs::read_to_string(storefront.path()).unwrap();
    assert!(contents.contains("Store-front"));
}

#[test]
fn deleting_a_product_does_not_cascade_to_sales() {
    let dir = common::setup_data_dir();
    let products: CsvTable<Product> = CsvTable::open(&dir).unwrap();
    let sales: CsvTable<Sale> = CsvTable::open(&dir).unwrap();

    products.add(sample_product("Caftan A")).unwrap();
    sales
        .add(Sale::new("2024-01-15", 1, 2, SaleChannel::Storefront))
        .unwrap();

    products.delete(1).unwrap();

    // The sale survives with its now-dangling reference.
    let remaining = sales.load().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].product_id, 1);
    assert!(products.load().unwrap().is_empty());
}
