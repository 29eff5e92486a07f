//! Derived figures shown on dashboards.

use serde::Serialize;

use crate::domain::budget::Budget;
use crate::domain::month::MonthKey;

/// Totals for one calendar month of a user's transactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub transaction_count: usize,
}

/// One category's share of a month's expenses, with display metadata joined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category_id: String,
    pub category_name: String,
    pub icon: String,
    pub color: String,
    pub amount: f64,
    pub percentage: f64,
    pub count: usize,
}

/// How far a budget's month has eaten into its configured amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub budget_id: String,
    pub category_id: String,
    pub month: MonthKey,
    pub amount: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
    pub over_budget: bool,
}

impl BudgetUsage {
    /// Derives usage figures from a budget and the amount spent against it.
    ///
    /// A zero-amount budget never divides: anything spent reads as 100 %,
    /// nothing spent as 0 %.
    pub fn from_parts(budget: &Budget, spent: f64) -> Self {
        let percent_used = if budget.amount > 0.0 {
            ((spent / budget.amount) * 100.0).min(100.0)
        } else if spent > 0.0 {
            100.0
        } else {
            0.0
        };
        Self {
            budget_id: budget.id.clone(),
            category_id: budget.category_id.clone(),
            month: budget.month,
            amount: budget.amount,
            spent,
            remaining: budget.amount - spent,
            percent_used,
            over_budget: spent > budget.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(amount: f64) -> Budget {
        Budget {
            id: "b1".into(),
            user_id: "u1".into(),
            category_id: "c1".into(),
            amount,
            month: "2024-04".parse().unwrap(),
            created_at: "2024-04-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn percent_clamps_at_one_hundred() {
        let usage = BudgetUsage::from_parts(&budget(200.0), 350.0);
        assert_eq!(usage.percent_used, 100.0);
        assert!(usage.over_budget);
        assert_eq!(usage.remaining, -150.0);
    }

    #[test]
    fn zero_amount_budget_never_divides() {
        let spent = BudgetUsage::from_parts(&budget(0.0), 25.0);
        assert_eq!(spent.percent_used, 100.0);
        assert!(spent.over_budget);

        let untouched = BudgetUsage::from_parts(&budget(0.0), 0.0);
        assert_eq!(untouched.percent_used, 0.0);
        assert!(!untouched.over_budget);
    }

    #[test]
    fn under_budget_reports_partial_use() {
        let usage = BudgetUsage::from_parts(&budget(200.0), 50.0);
        assert_eq!(usage.percent_used, 25.0);
        assert!(!usage.over_budget);
        assert_eq!(usage.remaining, 150.0);
    }
}
