//! Month-scoped aggregation over transaction lists.
//!
//! Everything here is pure: the caller fetches the data once, then derives
//! dashboard figures as often as the selected month changes.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::domain::common::EntryKind;
use crate::domain::{Category, CategoryStats, MonthKey, MonthlyStats, Transaction};

const FALLBACK_NAME: &str = "Other";
const FALLBACK_ICON: &str = "📦";
const FALLBACK_COLOR: &str = "#6b7280";

pub struct SummaryService;

impl SummaryService {
    /// Transactions whose date falls inside the month; unparsable dates are
    /// silently excluded.
    pub fn transactions_in_month<'a>(
        transactions: &'a [Transaction],
        month: &MonthKey,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|txn| month.contains_str(&txn.date))
            .collect()
    }

    /// Income/expense totals and balance for one month.
    pub fn monthly_stats(transactions: &[Transaction], month: &MonthKey) -> MonthlyStats {
        let in_month = Self::transactions_in_month(transactions, month);
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for txn in &in_month {
            match txn.kind {
                EntryKind::Income => total_income += txn.amount,
                EntryKind::Expense => total_expense += txn.amount,
            }
        }
        MonthlyStats {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            transaction_count: in_month.len(),
        }
    }

    /// Expense totals per category for one month, with each category's share
    /// of the total and display metadata joined in, sorted by amount
    /// descending. Shares are all zero when nothing was spent.
    pub fn expense_breakdown(
        transactions: &[Transaction],
        categories: &[Category],
        month: &MonthKey,
    ) -> Vec<CategoryStats> {
        let expenses: Vec<&Transaction> = Self::transactions_in_month(transactions, month)
            .into_iter()
            .filter(|txn| txn.kind == EntryKind::Expense)
            .collect();
        let total_expense: f64 = expenses.iter().map(|txn| txn.amount).sum();

        let mut grouped: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for txn in &expenses {
            let entry = grouped.entry(txn.category_id.as_str()).or_insert((0.0, 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let mut stats: Vec<CategoryStats> = grouped
            .into_iter()
            .map(|(category_id, (amount, count))| {
                let category = categories.iter().find(|cat| cat.id == category_id);
                CategoryStats {
                    category_id: category_id.to_string(),
                    category_name: category
                        .map(|cat| cat.name.clone())
                        .unwrap_or_else(|| FALLBACK_NAME.to_string()),
                    icon: category
                        .map(|cat| cat.icon.clone())
                        .unwrap_or_else(|| FALLBACK_ICON.to_string()),
                    color: category
                        .map(|cat| cat.color.clone())
                        .unwrap_or_else(|| FALLBACK_COLOR.to_string()),
                    amount,
                    percentage: if total_expense > 0.0 {
                        (amount / total_expense) * 100.0
                    } else {
                        0.0
                    },
                    count,
                }
            })
            .collect();
        stats.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
        stats
    }

    /// The latest `count` transactions by date, newest first; records with
    /// unparsable dates sort last.
    pub fn recent<'a>(transactions: &'a [Transaction], count: usize) -> Vec<&'a Transaction> {
        let mut sorted: Vec<&Transaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| b.parsed_date().cmp(&a.parsed_date()));
        sorted.truncate(count);
        sorted
    }
}
