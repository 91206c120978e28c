//! End-to-end checks: rows persisted through the stores feed the report
//! functions exactly as in-memory snapshots do.

mod common;

use atelier_core::domain::{Expense, ExpenseKind, Product, Sale, SaleChannel};
use atelier_core::reports::ReportService;
use atelier_core::storage::CsvTable;

fn seeded_tables() -> (CsvTable<Product>, CsvTable<Sale>, CsvTable<Expense>) {
    let dir = common::setup_data_dir();
    let products: CsvTable<Product> = CsvTable::open(&dir).unwrap();
    let sales: CsvTable<Sale> = CsvTable::open(&dir).unwrap();
    let expenses: CsvTable<Expense> = CsvTable::open(&dir).unwrap();

    products
        .add(Product::new("Caftan A", 800.0, 200.0, 150.0, 50.0, 5))
        .unwrap();
    products
        .add(Product::new("Caftan B", 1200.0, 300.0, 250.0, 50.0, 2))
        .unwrap();
    sales
        .add(Sale::new("2024-01-15", 1, 2, SaleChannel::Storefront))
        .unwrap();
    sales
        .add(Sale::new("2024-01-20", 2, 1, SaleChannel::Online))
        .unwrap();
    sales
        .add(Sale::new("2024-02-03", 1, 1, SaleChannel::Market))
        .unwrap();
    expenses
        .add(Expense::new("2024-01-01", "Rent", 1000.0, ExpenseKind::Fixed))
        .unwrap();
    expenses
        .add(Expense::new(
            "2024-01-10",
            "Marketing",
            500.0,
            ExpenseKind::Variable,
        ))
        .unwrap();

    (products, sales, expenses)
}

#[test]
fn dashboard_figures_from_persisted_rows() {
    let (products, sales, expenses) = seeded_tables();
    let products = products.load().unwrap();
    let sales = sales.load().unwrap();
    let expenses = expenses.load().unwrap();

    let summary = ReportService::profit_summary(&sales, &products, &expenses);
    // 2*800 + 1*1200 + 1*800
    assert_eq!(summary.revenue, 3600.0);
    // 2*400 + 1*600 + 1*400
    assert_eq!(summary.production_cost, 1800.0);
    assert_eq!(summary.gross_profit, 1800.0);
    assert_eq!(summary.net_profit, 300.0);
}

#[test]
fn monthly_series_and_ranking_from_persisted_rows() {
    let (products, sales, _) = seeded_tables();
    let products = products.load().unwrap();
    let sales = sales.load().unwrap();

    let monthly = ReportService::monthly_revenue(&sales, &products);
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].month, "2024-01");
    assert_eq!(monthly[0].revenue, 2800.0);
    assert_eq!(monthly[1].month, "2024-02");
    assert_eq!(monthly[1].revenue, 800.0);

    let top = ReportService::top_products_by_revenue(&sales, &products);
    assert_eq!(top[0].name, "Caftan A");
    assert_eq!(top[0].revenue, 2400.0);
    assert_eq!(top[1].name, "Caftan B");
    assert_eq!(top[1].revenue, 1200.0);
}

#[test]
fn deleting_a_product_drops_its_sales_from_the_aggregates() {
    let (products, sales, expenses) = seeded_tables();

    products.delete(1).unwrap();

    let product_rows = products.load().unwrap();
    let sale_rows = sales.load().unwrap();
    let expense_rows = expenses.load().unwrap();

    // Only Caftan B's sale still joins; Caftan A's two sales dangle.
    let summary = ReportService::profit_summary(&sale_rows, &product_rows, &expense_rows);
    assert_eq!(summary.revenue, 1200.0);
    assert_eq!(summary.production_cost, 600.0);

    let top = ReportService::top_products_by_revenue(&sale_rows, &product_rows);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "Caftan B");
}

#[test]
fn expense_breakdown_from_persisted_rows() {
    let (_, _, expenses) = seeded_tables();
    let expense_rows = expenses.load().unwrap();

    let breakdown = ReportService::expense_breakdown(&expense_rows);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].category, "Rent");
    assert!((breakdown[0].share - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(breakdown[1].category, "Marketing");
    assert!((breakdown[1].share - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn reports_over_empty_stores_return_empty_results() {
    let dir = common::setup_data_dir();
    let products: CsvTable<Product> = CsvTable::open(&dir).unwrap();
    let sales: CsvTable<Sale> = CsvTable::open(&dir).unwrap();
    let expenses: CsvTable<Expense> = CsvTable::open(&dir).unwrap();

    let product_rows = products.load().unwrap();
    let sale_rows = sales.load().unwrap();
    let expense_rows = expenses.load().unwrap();

    let summary = ReportService::profit_summary(&sale_rows, &product_rows, &expense_rows);
    assert_eq!(summary.revenue, 0.0);
    assert_eq!(summary.net_profit, 0.0);
    assert!(ReportService::monthly_revenue(&sale_rows, &product_rows).is_empty());
    assert!(ReportService::expense_breakdown(&expense_rows).is_empty());
}
