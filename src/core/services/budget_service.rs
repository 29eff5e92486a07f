//! Budget CRUD with upsert-on-create, and usage evaluation.

use tracing::debug;

use crate::context::AppContext;
use crate::domain::common::EntryKind;
use crate::domain::{Budget, BudgetDraft, BudgetPatch, BudgetUsage, MonthKey, Transaction};
use crate::store::Query;

use super::{ServiceError, ServiceResult};

pub struct BudgetService;

impl BudgetService {
    pub async fn list_for_user(ctx: &AppContext, user_id: &str) -> ServiceResult<Vec<Budget>> {
        Ok(ctx.store.list(&Query::new().eq("userId", user_id)).await?)
    }

    pub async fn list_for_month(
        ctx: &AppContext,
        user_id: &str,
        month: &MonthKey,
    ) -> ServiceResult<Vec<Budget>> {
        let query = Query::new().eq("userId", user_id).eq("month", month);
        Ok(ctx.store.list(&query).await?)
    }

    /// Creates the budget, or updates the amount of the one already covering
    /// this (user, category, month). At most one record exists per key.
    pub async fn create(
        ctx: &AppContext,
        user_id: &str,
        draft: &BudgetDraft,
    ) -> ServiceResult<Budget> {
        Self::validate_amount(draft.amount)?;
        let query = Query::new()
            .eq("userId", user_id)
            .eq("categoryId", &draft.category_id)
            .eq("month", draft.month);
        let existing: Vec<Budget> = ctx.store.list(&query).await?;
        if let Some(current) = existing.into_iter().next() {
            debug!(budget = %current.id, "budget exists, updating amount");
            return Self::update(ctx, &current.id, &BudgetPatch::amount(draft.amount)).await;
        }
        Ok(ctx.store.create(&Budget::from_draft(user_id, draft)).await?)
    }

    pub async fn update(ctx: &AppContext, id: &str, patch: &BudgetPatch) -> ServiceResult<Budget> {
        if let Some(amount) = patch.amount {
            Self::validate_amount(amount)?;
        }
        Ok(ctx.store.patch(id, patch).await?)
    }

    pub async fn delete(ctx: &AppContext, id: &str) -> ServiceResult<()> {
        Ok(ctx.store.delete::<Budget>(id).await?)
    }

    /// Usage of one budget against a transaction list: expense transactions
    /// sharing the budget's category, restricted to the budget's month.
    pub fn usage(budget: &Budget, transactions: &[Transaction]) -> BudgetUsage {
        let spent: f64 = transactions
            .iter()
            .filter(|txn| {
                txn.kind == EntryKind::Expense
                    && txn.category_id == budget.category_id
                    && budget.month.contains_str(&txn.date)
            })
            .map(|txn| txn.amount)
            .sum();
        BudgetUsage::from_parts(budget, spent)
    }

    /// Usage for every budget in the list, in the given order.
    pub fn usage_report(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetUsage> {
        budgets
            .iter()
            .map(|budget| Self::usage(budget, transactions))
            .collect()
    }

    fn validate_amount(amount: f64) -> ServiceResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ServiceError::Invalid(
                "Budget amount must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(amount: f64, month: &str) -> Budget {
        Budget {
            id: "b1".into(),
            user_id: "u1".into(),
            category_id: "food".into(),
            amount,
            month: month.parse().unwrap(),
            created_at: "2024-04-01T00:00:00Z".into(),
        }
    }

    fn expense(category_id: &str, amount: f64, date: &str) -> Transaction {
        Transaction {
            id: format!("t-{category_id}-{date}"),
            user_id: "u1".into(),
            category_id: category_id.into(),
            amount,
            kind: EntryKind::Expense,
            description: String::new(),
            date: date.into(),
            created_at: date.into(),
        }
    }

    #[test]
    fn usage_only_counts_matching_category_and_month() {
        let budget = budget(200.0, "2024-04");
        let transactions = vec![
            expense("food", 80.0, "2024-04-02"),
            expense("food", 40.0, "2024-04-28"),
            expense("food", 99.0, "2024-05-01"),
            expense("transport", 33.0, "2024-04-10"),
        ];
        let usage = BudgetService::usage(&budget, &transactions);
        assert_eq!(usage.spent, 120.0);
        assert!(!usage.over_budget);
        assert_eq!(usage.percent_used, 60.0);
    }

    #[test]
    fn income_never_counts_as_spending() {
        let budget = budget(100.0, "2024-04");
        let mut refund = expense("food", 500.0, "2024-04-15");
        refund.kind = EntryKind::Income;
        let usage = BudgetService::usage(&budget, &[refund]);
        assert_eq!(usage.spent, 0.0);
    }

    #[test]
    fn unparsable_transaction_dates_never_count() {
        let budget = budget(100.0, "2024-04");
        let odd = expense("food", 75.0, "sometime in april");
        let usage = BudgetService::usage(&budget, &[odd]);
        assert_eq!(usage.spent, 0.0);
    }

    #[test]
    fn report_preserves_budget_order() {
        let first = budget(100.0, "2024-04");
        let mut second = budget(50.0, "2024-04");
        second.id = "b2".into();
        second.category_id = "transport".into();
        let report = BudgetService::usage_report(
            &[first, second],
            &[expense("transport", 60.0, "2024-04-09")],
        );
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].budget_id, "b1");
        assert!(!report[0].over_budget);
        assert!(report[1].over_budget);
    }
}
