//! Interactive menu shell: the login gate, navigation, entity pages, and
//! report views. Mirrors the synchronous load → mutate → recompute → render
//! cycle per user action; nothing is cached between actions.

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use crate::auth::{Session, StaticCredentials};
use crate::cli::{charts, format, forms, output, tables, CliResult};
use crate::config::Config;
use crate::domain::{Expense, Product, RecordId, Sale, TableRecord};
use crate::reports::ReportService;
use crate::storage::CsvTable;

const MAIN_MENU: [&str; 7] = [
    "Dashboard",
    "Products",
    "Sales",
    "Expenses",
    "Reports",
    "Log out",
    "Quit",
];

pub struct Shell {
    theme: ColorfulTheme,
    session: Session<StaticCredentials>,
    products: CsvTable<Product>,
    sales: CsvTable<Sale>,
    expenses: CsvTable<Expense>,
    currency: String,
}

impl Shell {
    pub fn new(config: &Config, data_dir: &Path) -> CliResult<Self> {
        Ok(Self {
            theme: ColorfulTheme::default(),
            session: Session::new(StaticCredentials::new(config.users.clone())),
            products: CsvTable::open(data_dir)?,
            sales: CsvTable::open(data_dir)?,
            expenses: CsvTable::open(data_dir)?,
            currency: config.currency.clone(),
        })
    }

    pub fn run(&mut self) -> CliResult<()> {
        loop {
            if !self.session.is_authenticated() && !self.login_screen()? {
                return Ok(());
            }
            output::header("Navigation");
            let choice = Select::with_theme(&self.theme)
                .items(&MAIN_MENU)
                .default(0)
                .interact()?;
            match choice {
                0 => self.dashboard()?,
                1 => self.products_page()?,
                2 => self.sales_page()?,
                3 => self.expenses_page()?,
                4 => self.reports_page()?,
                5 => {
                    self.session.logout();
                    output::info("Logged out.");
                }
                _ => return Ok(()),
            }
        }
    }

    /// Prompts until a login succeeds. Returns `false` when the user gives up.
    fn login_screen(&mut self) -> CliResult<bool> {
        output::header("Sign in");
        loop {
            let username: String = Input::with_theme(&self.theme)
                .with_prompt("Username")
                .interact_text()?;
            let password = Password::with_theme(&self.theme)
                .with_prompt("Password")
                .interact()?;
            if self.session.login(&username, &password) {
                output::success(format!("Signed in as {username}."));
                return Ok(true);
            }
            output::error("Invalid credentials.");
            let retry = Confirm::with_theme(&self.theme)
                .with_prompt("Try again?")
                .default(true)
                .interact()?;
            if !retry {
                return Ok(false);
            }
        }
    }

    fn dashboard(&self) -> CliResult<()> {
        let products = self.products.load()?;
        let sales = self.sales.load()?;
        let expenses = self.expenses.load()?;

        let summary = ReportService::profit_summary(&sales, &products, &expenses);
        output::header("Dashboard");
        output::info(format!(
            "Total revenue:    {}",
            format::amount(summary.revenue, &self.currency)
        ));
        output::info(format!(
            "Production cost:  {}",
            format::amount(summary.production_cost, &self.currency)
        ));
        output::info(format!(
            "Gross profit:     {}",
            format::amount(summary.gross_profit, &self.currency)
        ));
        output::info(format!(
            "Net profit:       {}",
            format::amount(summary.net_profit, &self.currency)
        ));

        let monthly = ReportService::monthly_revenue(&sales, &products);
        if !monthly.is_empty() {
            output::header("Monthly revenue");
            let entries: Vec<(String, f64)> = monthly
                .iter()
                .map(|point| (point.month.clone(), point.revenue))
                .collect();
            output::info(charts::bar_chart(&entries, 40));
        }
        Ok(())
    }

    fn products_page(&mut self) -> CliResult<()> {
        loop {
            let products = self.products.load()?;
            output::header("Products");
            if products.is_empty() {
                output::info("No products yet.");
            } else {
                let rows: Vec<Vec<String>> = products
                    .iter()
                    .map(|p| {
                        vec![
                            p.id.to_string(),
                            p.name.clone(),
                            format::amount(p.sale_price, &self.currency),
                            format::amount(p.unit_cost(), &self.currency),
                            p.stock.to_string(),
                        ]
                    })
                    .collect();
                tables::print(&["ID", "Name", "Sale price", "Unit cost", "Stock"], &rows);
            }

            match self.page_action()? {
                PageAction::Add => {
                    let product = forms::product_form(&self.theme, None)?;
                    let rows = self.products.add(product)?;
                    if let Some(added) = rows.last() {
                        output::success(format!("Product #{} saved.", added.id));
                    }
                }
                PageAction::Edit => {
                    if let Some(id) = self.pick(&products, |p: &Product| {
                        format!("#{} {}", p.id, p.name)
                    })? {
                        let existing = products.iter().find(|p| p.id == id);
                        let edited = forms::product_form(&self.theme, existing)?;
                        self.products.update(id, |row| *row = edited)?;
                        output::success("Product updated.");
                    }
                }
                PageAction::Delete => {
                    if let Some(id) = self.pick(&products, |p: &Product| {
                        format!("#{} {}", p.id, p.name)
                    })? {
                        if self.confirm_delete("Delete this product? Existing sales keep the reference.")? {
                            self.products.delete(id)?;
                            output::warning("Product deleted.");
                        }
                    }
                }
                PageAction::Back => return Ok(()),
            }
        }
    }

    fn sales_page(&mut self) -> CliResult<()> {
        loop {
            let products = self.products.load()?;
            let sales = self.sales.load()?;
            output::header("Sales");
            if sales.is_empty() {
                output::info("No sales yet.");
            } else {
                let rows: Vec<Vec<String>> = sales
                    .iter()
                    .map(|sale| {
                        let product_name = products
                            .iter()
                            .find(|p| p.id == sale.product_id)
                            .map(|p| p.name.clone())
                            .unwrap_or_else(|| format!("(missing #{})", sale.product_id));
                        vec![
                            sale.id.to_string(),
                            sale.date.clone(),
                            product_name,
                            sale.quantity.to_string(),
                            sale.channel.to_string(),
                        ]
                    })
                    .collect();
                tables::print(&["ID", "Date", "Product", "Quantity", "Channel"], &rows);
            }

            match self.page_action()? {
                PageAction::Add => {
                    if products.is_empty() {
                        output::warning("Add a product before recording sales.");
                        continue;
                    }
                    let sale = forms::sale_form(&self.theme, &products, None)?;
                    let rows = self.sales.add(sale)?;
                    if let Some(added) = rows.last() {
                        output::success(format!("Sale #{} recorded.", added.id));
                    }
                }
                PageAction::Edit => {
                    if products.is_empty() {
                        output::warning("No products to reference.");
                        continue;
                    }
                    if let Some(id) = self.pick(&sales, |s: &Sale| {
                        format!("#{} {} x{}", s.id, s.date, s.quantity)
                    })? {
                        let existing = sales.iter().find(|s| s.id == id);
                        let edited = forms::sale_form(&self.theme, &products, existing)?;
                        self.sales.update(id, |row| *row = edited)?;
                        output::success("Sale updated.");
                    }
                }
                PageAction::Delete => {
                    if let Some(id) = self.pick(&sales, |s: &Sale| {
                        format!("#{} {} x{}", s.id, s.date, s.quantity)
                    })? {
                        if self.confirm_delete("Delete this sale?")? {
                            self.sales.delete(id)?;
                            output::warning("Sale deleted.");
                        }
                    }
                }
                PageAction::Back => return Ok(()),
            }
        }
    }

    fn expenses_page(&mut self) -> CliResult<()> {
        loop {
            let expenses = self.expenses.load()?;
            output::header("Expenses");
            if expenses.is_empty() {
                output::info("No expenses yet.");
            } else {
                let rows: Vec<Vec<String>> = expenses
                    .iter()
                    .map(|e| {
                        vec![
                            e.id.to_string(),
                            e.date.clone(),
                            e.category.clone(),
                            format::amount(e.amount, &self.currency),
                            e.kind.to_string(),
                        ]
                    })
                    .collect();
                tables::print(&["ID", "Date", "Category", "Amount", "Type"], &rows);
            }

            match self.page_action()? {
                PageAction::Add => {
                    let expense = forms::expense_form(&self.theme, None)?;
                    let rows = self.expenses.add(expense)?;
                    if let Some(added) = rows.last() {
                        output::success(format!("Expense #{} saved.", added.id));
                    }
                }
                PageAction::Edit => {
                    if let Some(id) = self.pick(&expenses, |e: &Expense| {
                        format!("#{} {} {}", e.id, e.date, e.category)
                    })? {
                        let existing = expenses.iter().find(|e| e.id == id);
                        let edited = forms::expense_form(&self.theme, existing)?;
                        self.expenses.update(id, |row| *row = edited)?;
                        output::success("Expense updated.");
                    }
                }
                PageAction::Delete => {
                    if let Some(id) = self.pick(&expenses, |e: &Expense| {
                        format!("#{} {} {}", e.id, e.date, e.category)
                    })? {
                        if self.confirm_delete("Delete this expense?")? {
                            self.expenses.delete(id)?;
                            output::warning("Expense deleted.");
                        }
                    }
                }
                PageAction::Back => return Ok(()),
            }
        }
    }

    fn reports_page(&self) -> CliResult<()> {
        let products = self.products.load()?;
        let sales = self.sales.load()?;
        let expenses = self.expenses.load()?;

        output::header("Top products by revenue");
        let top = ReportService::top_products_by_revenue(&sales, &products);
        if top.is_empty() {
            output::info("No matched sales yet.");
        } else {
            let rows: Vec<Vec<String>> = top
                .iter()
                .map(|entry| {
                    vec![
                        entry.name.clone(),
                        format::amount(entry.revenue, &self.currency),
                    ]
                })
                .collect();
            tables::print(&["Product", "Revenue"], &rows);
            let entries: Vec<(String, f64)> = top
                .iter()
                .map(|entry| (entry.name.clone(), entry.revenue))
                .collect();
            output::info(charts::bar_chart(&entries, 40));
        }

        output::header("Expense breakdown");
        let breakdown = ReportService::expense_breakdown(&expenses);
        if breakdown.is_empty() {
            output::info("No expenses yet.");
        } else {
            let rows: Vec<Vec<String>> = breakdown
                .iter()
                .map(|entry| {
                    vec![
                        entry.category.clone(),
                        format::amount(entry.amount, &self.currency),
                        format::percent(entry.share),
                    ]
                })
                .collect();
            tables::print(&["Category", "Amount", "Share"], &rows);
        }
        Ok(())
    }

    fn page_action(&self) -> CliResult<PageAction> {
        let actions = ["Add", "Edit", "Delete", "Back"];
        let choice = Select::with_theme(&self.theme)
            .items(&actions)
            .default(3)
            .interact()?;
        Ok(match choice {
            0 => PageAction::Add,
            1 => PageAction::Edit,
            2 => PageAction::Delete,
            _ => PageAction::Back,
        })
    }

    fn pick<T: TableRecord>(
        &self,
        rows: &[T],
        label: impl Fn(&T) -> String,
    ) -> CliResult<Option<RecordId>> {
        if rows.is_empty() {
            output::warning("Nothing to select.");
            return Ok(None);
        }
        let labels: Vec<String> = rows.iter().map(label).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt("Select an entry")
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Some(rows[index].id()))
    }

    fn confirm_delete(&self, prompt: &str) -> CliResult<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

enum PageAction {
    Add,
    Edit,
    Delete,
    Back,
}
