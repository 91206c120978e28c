//! Entry forms for the interactive shell.
//!
//! Validation here is the UI boundary: an empty required text field blocks
//! submission and nothing is written. The stores themselves never reject a
//! row.

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::domain::{Expense, ExpenseKind, Product, Sale, SaleChannel};

use super::CliResult;

/// Today's date in the `YYYY-MM-DD` form the tables store.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Collects a product. With `existing`, fields default to the current values
/// and the identifier is preserved for an update.
pub fn product_form(theme: &ColorfulTheme, existing: Option<&Product>) -> CliResult<Product> {
    let name = text(theme, "Product name", existing.map(|p| p.name.clone()))?;
    let sale_price = money(theme, "Sale price", existing.map(|p| p.sale_price))?;
    let fabric_cost = money(theme, "Fabric cost", existing.map(|p| p.fabric_cost))?;
    let labor_cost = money(theme, "Labor cost", existing.map(|p| p.labor_cost))?;
    let accessory_cost = money(theme, "Accessory cost", existing.map(|p| p.accessory_cost))?;
    let stock = count(theme, "Stock", existing.map(|p| p.stock))?;

    let mut product = Product::new(name, sale_price, fabric_cost, labor_cost, accessory_cost, stock);
    if let Some(existing) = existing {
        product.id = existing.id;
    }
    Ok(product)
}

/// Collects a sale against the given catalog. The caller must ensure the
/// catalog is non-empty. New sales are stamped with today's date; edits keep
/// the original date.
pub fn sale_form(
    theme: &ColorfulTheme,
    products: &[Product],
    existing: Option<&Sale>,
) -> CliResult<Sale> {
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    let product_default = existing
        .and_then(|sale| products.iter().position(|p| p.id == sale.product_id))
        .unwrap_or(0);
    let selected = Select::with_theme(theme)
        .with_prompt("Product")
        .items(&names)
        .default(product_default)
        .interact()?;
    let product_id = products[selected].id;

    let quantity = quantity(theme, existing.map(|s| s.quantity))?;

    let labels: Vec<&str> = SaleChannel::ALL.iter().map(|c| c.label()).collect();
    let channel_default = existing
        .and_then(|sale| SaleChannel::ALL.iter().position(|c| *c == sale.channel))
        .unwrap_or(0);
    let choice = Select::with_theme(theme)
        .with_prompt("Channel")
        .items(&labels)
        .default(channel_default)
        .interact()?;
    let channel = SaleChannel::ALL[choice];

    let date = existing.map(|s| s.date.clone()).unwrap_or_else(today);
    let mut sale = Sale::new(date, product_id, quantity, channel);
    if let Some(existing) = existing {
        sale.id = existing.id;
    }
    Ok(sale)
}

/// Collects an expense. New expenses are stamped with today's date.
pub fn expense_form(theme: &ColorfulTheme, existing: Option<&Expense>) -> CliResult<Expense> {
    let category = text(
        theme,
        "Category (Rent, Marketing, ...)",
        existing.map(|e| e.category.clone()),
    )?;
    let amount = money(theme, "Amount", existing.map(|e| e.amount))?;

    let labels: Vec<&str> = ExpenseKind::ALL.iter().map(|k| k.label()).collect();
    let kind_default = existing
        .and_then(|expense| ExpenseKind::ALL.iter().position(|k| *k == expense.kind))
        .unwrap_or(0);
    let choice = Select::with_theme(theme)
        .with_prompt("Type")
        .items(&labels)
        .default(kind_default)
        .interact()?;
    let kind = ExpenseKind::ALL[choice];

    let date = existing.map(|e| e.date.clone()).unwrap_or_else(today);
    let mut expense = Expense::new(date, category, amount, kind);
    if let Some(existing) = existing {
        expense.id = existing.id;
    }
    Ok(expense)
}

fn text(theme: &ColorfulTheme, prompt: &str, default: Option<String>) -> CliResult<String> {
    let input = Input::<String>::with_theme(theme).with_prompt(prompt);
    let input = match default {
        Some(value) => input.default(value),
        None => input,
    };
    Ok(input.validate_with(non_empty).interact_text()?)
}

fn money(theme: &ColorfulTheme, prompt: &str, default: Option<f64>) -> CliResult<f64> {
    let input = Input::<f64>::with_theme(theme).with_prompt(prompt);
    let input = match default {
        Some(value) => input.default(value),
        None => input,
    };
    Ok(input.validate_with(non_negative).interact_text()?)
}

fn count(theme: &ColorfulTheme, prompt: &str, default: Option<u32>) -> CliResult<u32> {
    let input = Input::<u32>::with_theme(theme).with_prompt(prompt);
    let input = match default {
        Some(value) => input.default(value),
        None => input,
    };
    Ok(input.interact_text()?)
}

fn quantity(theme: &ColorfulTheme, default: Option<u32>) -> CliResult<u32> {
    let input = Input::<u32>::with_theme(theme).with_prompt("Quantity");
    let input = match default {
        Some(value) => input.default(value),
        None => input,
    };
    Ok(input.validate_with(at_least_one).interact_text()?)
}

fn non_empty(input: &String) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        Err("a value is required")
    } else {
        Ok(())
    }
}

fn non_negative(value: &f64) -> Result<(), &'static str> {
    if *value < 0.0 {
        Err("must be zero or more")
    } else {
        Ok(())
    }
}

fn at_least_one(value: &u32) -> Result<(), &'static str> {
    if *value < 1 {
        Err("must be at least 1")
    } else {
        Ok(())
    }
}
