//! Pure aggregation over table snapshots. No I/O, no persistence.
//!
//! Joined views drop sales whose product no longer exists; the monthly view
//! additionally drops sales whose date does not parse. Every function maps
//! empty input to zero sums and empty sequences.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{Expense, Product, RecordId, Sale, SaleChannel};

/// One sale joined to its product, with derived revenue and cost.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleDetail {
    pub sale_id: RecordId,
    pub date: String,
    pub product_name: String,
    pub channel: SaleChannel,
    pub quantity: u32,
    pub revenue: f64,
    pub production_cost: f64,
}

/// Headline dashboard figures.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfitSummary {
    pub revenue: f64,
    pub production_cost: f64,
    pub expenses: f64,
    pub gross_profit: f64,
    pub net_profit: f64,
}

/// Revenue summed over one calendar month, labeled `YYYY-MM`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: f64,
}

/// Revenue summed per product name.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRevenue {
    pub name: String,
    pub revenue: f64,
}

/// One expense category's total and its share of all expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub share: f64,
}

/// Derived metrics over store snapshots.
pub struct ReportService;

impl ReportService {
    /// Inner-joins sales to products. Sales with no matching product are
    /// dropped, never reported.
    pub fn sale_details(sales: &[Sale], products: &[Product]) -> Vec<SaleDetail> {
        sales
            .iter()
            .filter_map(|sale| {
                let product = products.iter().find(|p| p.id == sale.product_id)?;
                let quantity = f64::from(sale.quantity);
                Some(SaleDetail {
                    sale_id: sale.id,
                    date: sale.date.clone(),
                    product_name: product.name.clone(),
                    channel: sale.channel,
                    quantity: sale.quantity,
                    revenue: quantity * product.sale_price,
                    production_cost: quantity * product.unit_cost(),
                })
            })
            .collect()
    }

    /// Revenue, production cost, gross profit (revenue minus production
    /// cost), and net profit (gross minus all expenses, fixed and variable).
    pub fn profit_summary(
        sales: &[Sale],
        products: &[Product],
        expenses: &[Expense],
    ) -> ProfitSummary {
        let details = Self::sale_details(sales, products);
        let revenue: f64 = details.iter().map(|d| d.revenue).sum();
        let production_cost: f64 = details.iter().map(|d| d.production_cost).sum();
        let expense_total: f64 = expenses.iter().map(|e| e.amount).sum();
        let gross_profit = revenue - production_cost;
        ProfitSummary {
            revenue,
            production_cost,
            expenses: expense_total,
            gross_profit,
            net_profit: gross_profit - expense_total,
        }
    }

    /// Matched sale revenue bucketed by calendar month, ascending by label.
    /// Rows with an unparseable date are dropped from this view only.
    pub fn monthly_revenue(sales: &[Sale], products: &[Product]) -> Vec<MonthlyRevenue> {
        let mut buckets: BTreeMap<String, f64> = BTreeMap::new();
        for detail in Self::sale_details(sales, products) {
            if let Some(month) = month_label(&detail.date) {
                *buckets.entry(month).or_insert(0.0) += detail.revenue;
            }
        }
        buckets
            .into_iter()
            .map(|(month, revenue)| MonthlyRevenue { month, revenue })
            .collect()
    }

    /// Revenue grouped by product name, sorted descending. The stable sort
    /// keeps first-appearance order on equal revenue.
    pub fn top_products_by_revenue(sales: &[Sale], products: &[Product]) -> Vec<ProductRevenue> {
        let mut ranking: Vec<ProductRevenue> = Vec::new();
        for detail in Self::sale_details(sales, products) {
            match ranking
                .iter_mut()
                .find(|entry| entry.name == detail.product_name)
            {
                Some(entry) => entry.revenue += detail.revenue,
                None => ranking.push(ProductRevenue {
                    name: detail.product_name,
                    revenue: detail.revenue,
                }),
            }
        }
        ranking.sort_by(|a, b| {
            b.revenue
                .partial_cmp(&a.revenue)
                .unwrap_or(Ordering::Equal)
        });
        ranking
    }

    /// Amounts grouped by category in first-appearance order, with each
    /// category's share of the total. A zero total yields no breakdown.
    pub fn expense_breakdown(expenses: &[Expense]) -> Vec<CategoryShare> {
        let mut groups: Vec<(String, f64)> = Vec::new();
        for expense in expenses {
            match groups
                .iter_mut()
                .find(|(category, _)| *category == expense.category)
            {
                Some((_, amount)) => *amount += expense.amount,
                None => groups.push((expense.category.clone(), expense.amount)),
            }
        }
        let total: f64 = groups.iter().map(|(_, amount)| amount).sum();
        if total == 0.0 {
            return Vec::new();
        }
        groups
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category,
                amount,
                share: amount / total,
            })
            .collect()
    }
}

fn month_label(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m").to_string())
}
