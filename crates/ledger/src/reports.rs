//! The two standard reports, built from a chart snapshot.
//!
//! Report generation is pure aggregation: it partitions accounts by kind,
//! sums each partition and keeps the chart's ascending-by-code line order.
//! Nothing here validates the accounting identity; an unbalanced chart shows
//! up as a visible mismatch between the totals, not as an error.

use std::fmt;

use serde::Serialize;

use crate::{
    accounts::{AccountKind, Chart},
    money::Money,
};

/// One report line: an account's display name and its balance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportLine {
    pub name: String,
    pub balance: Money,
}

fn section(chart: &Chart, kind: AccountKind) -> (Vec<ReportLine>, Money) {
    let mut lines = Vec::new();
    let mut total = Money::ZERO;
    for account in chart.iter().filter(|account| account.kind == kind) {
        total += account.balance;
        lines.push(ReportLine {
            name: account.name.clone(),
            balance: account.balance,
        });
    }
    (lines, total)
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    heading: &str,
    lines: &[ReportLine],
    total_label: &str,
    total: Money,
) -> fmt::Result {
    writeln!(f, "{heading}:")?;
    for line in lines {
        writeln!(f, "  {}: {}", line.name, line.balance)?;
    }
    writeln!(f, "{total_label}: {total}")
}

/// Asset vs. liability + equity balances at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BalanceSheet {
    pub assets: Vec<ReportLine>,
    pub liabilities: Vec<ReportLine>,
    pub equity: Vec<ReportLine>,
    pub total_assets: Money,
    pub total_liabilities: Money,
    pub total_equity: Money,
    pub liabilities_and_equity: Money,
}

impl BalanceSheet {
    pub fn from_chart(chart: &Chart) -> Self {
        let (assets, total_assets) = section(chart, AccountKind::Asset);
        let (liabilities, total_liabilities) = section(chart, AccountKind::Liability);
        let (equity, total_equity) = section(chart, AccountKind::Equity);

        Self {
            assets,
            liabilities,
            equity,
            total_assets,
            total_liabilities,
            total_equity,
            liabilities_and_equity: total_liabilities + total_equity,
        }
    }
}

impl fmt::Display for BalanceSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== Balance Sheet ==========")?;
        write_section(f, "Assets", &self.assets, "Total assets", self.total_assets)?;
        writeln!(f)?;
        write_section(
            f,
            "Liabilities",
            &self.liabilities,
            "Total liabilities",
            self.total_liabilities,
        )?;
        writeln!(f)?;
        write_section(f, "Equity", &self.equity, "Total equity", self.total_equity)?;
        writeln!(f)?;
        write!(
            f,
            "Total liabilities and equity: {}",
            self.liabilities_and_equity
        )
    }
}

/// Revenue minus expense over the journal's full recorded history.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IncomeStatement {
    pub revenue: Vec<ReportLine>,
    pub expenses: Vec<ReportLine>,
    pub total_revenue: Money,
    pub total_expense: Money,
    pub net_income: Money,
}

impl IncomeStatement {
    pub fn from_chart(chart: &Chart) -> Self {
        let (revenue, total_revenue) = section(chart, AccountKind::Revenue);
        let (expenses, total_expense) = section(chart, AccountKind::Expense);

        Self {
            revenue,
            expenses,
            total_revenue,
            total_expense,
            net_income: total_revenue - total_expense,
        }
    }
}

impl fmt::Display for IncomeStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "========== Income Statement ==========")?;
        write_section(
            f,
            "Revenue",
            &self.revenue,
            "Total revenue",
            self.total_revenue,
        )?;
        writeln!(f)?;
        write_section(
            f,
            "Expenses",
            &self.expenses,
            "Total expenses",
            self.total_expense,
        )?;
        writeln!(f)?;
        write!(f, "Net income: {}", self.net_income)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> Chart {
        let mut chart = Chart::new();
        chart.add("1001", "现金", AccountKind::Asset).unwrap();
        chart
            .add("2001", "应付账款", AccountKind::Liability)
            .unwrap();
        chart.debit("1001", Money::new(50000)).unwrap();
        chart.credit("2001", Money::new(50000)).unwrap();
        chart
    }

    #[test]
    fn balance_sheet_totals_per_partition() {
        let sheet = BalanceSheet::from_chart(&chart());

        assert_eq!(sheet.total_assets, Money::new(50000));
        assert_eq!(sheet.total_liabilities, Money::new(50000));
        assert_eq!(sheet.total_equity, Money::ZERO);
        assert_eq!(sheet.liabilities_and_equity, Money::new(50000));
        assert_eq!(sheet.assets.len(), 1);
        assert_eq!(sheet.assets[0].name, "现金");
    }

    #[test]
    fn balance_sheet_reports_an_imbalance_without_complaint() {
        let mut chart = Chart::new();
        chart.add("1001", "现金", AccountKind::Asset).unwrap();
        chart.debit("1001", Money::new(100)).unwrap();

        let sheet = BalanceSheet::from_chart(&chart);
        assert_eq!(sheet.total_assets, Money::new(100));
        assert_eq!(sheet.liabilities_and_equity, Money::ZERO);
    }

    #[test]
    fn income_statement_with_no_revenue_or_expense_accounts() {
        let statement = IncomeStatement::from_chart(&chart());

        assert_eq!(statement.total_revenue, Money::ZERO);
        assert_eq!(statement.total_expense, Money::ZERO);
        assert_eq!(statement.net_income, Money::ZERO);
        assert!(statement.revenue.is_empty());
        assert!(statement.expenses.is_empty());
    }

    #[test]
    fn net_income_may_be_negative() {
        let mut chart = Chart::new();
        chart.add("4001", "销售收入", AccountKind::Revenue).unwrap();
        chart.add("5001", "房租", AccountKind::Expense).unwrap();
        chart.credit("4001", Money::new(1000)).unwrap();
        chart.debit("5001", Money::new(2500)).unwrap();

        let statement = IncomeStatement::from_chart(&chart);
        assert_eq!(statement.net_income, Money::new(-1500));
    }

    #[test]
    fn line_items_follow_chart_code_order() {
        let mut chart = Chart::new();
        chart.add("1002", "银行存款", AccountKind::Asset).unwrap();
        chart.add("1001", "现金", AccountKind::Asset).unwrap();

        let sheet = BalanceSheet::from_chart(&chart);
        let names: Vec<&str> = sheet.assets.iter().map(|line| line.name.as_str()).collect();
        assert_eq!(names, ["现金", "银行存款"]);
    }
}
