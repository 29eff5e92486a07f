//! CRUD helpers for a user's transactions.

use crate::context::AppContext;
use crate::domain::{MonthKey, Transaction, TransactionDraft, TransactionPatch};
use crate::store::{Query, SortOrder};

use super::{ServiceError, ServiceResult};

pub struct TransactionService;

impl TransactionService {
    /// All of a user's transactions, newest first (server-side sort).
    pub async fn list_for_user(ctx: &AppContext, user_id: &str) -> ServiceResult<Vec<Transaction>> {
        let query = Query::new()
            .eq("userId", user_id)
            .sort("date", SortOrder::Descending);
        Ok(ctx.store.list(&query).await?)
    }

    /// A user's transactions falling inside one calendar month.
    ///
    /// The store only filters by equality, so the month window is applied
    /// client-side on the fetched list; records with unparsable dates drop
    /// out here.
    pub async fn list_for_month(
        ctx: &AppContext,
        user_id: &str,
        month: &MonthKey,
    ) -> ServiceResult<Vec<Transaction>> {
        let all = Self::list_for_user(ctx, user_id).await?;
        Ok(all
            .into_iter()
            .filter(|txn| month.contains_str(&txn.date))
            .collect())
    }

    pub async fn by_id(ctx: &AppContext, id: &str) -> ServiceResult<Transaction> {
        Ok(ctx.store.get(id).await?)
    }

    /// Records a new transaction for the user and returns the stored copy.
    pub async fn create(
        ctx: &AppContext,
        user_id: &str,
        draft: &TransactionDraft,
    ) -> ServiceResult<Transaction> {
        Self::validate_amount(draft.amount)?;
        Ok(ctx
            .store
            .create(&Transaction::from_draft(user_id, draft))
            .await?)
    }

    /// Updates the transaction identified by `id` with the set fields.
    pub async fn update(
        ctx: &AppContext,
        id: &str,
        patch: &TransactionPatch,
    ) -> ServiceResult<Transaction> {
        if let Some(amount) = patch.amount {
            Self::validate_amount(amount)?;
        }
        Ok(ctx.store.patch(id, patch).await?)
    }

    pub async fn delete(ctx: &AppContext, id: &str) -> ServiceResult<()> {
        Ok(ctx.store.delete::<Transaction>(id).await?)
    }

    fn validate_amount(amount: f64) -> ServiceResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ServiceError::Invalid(
                "Amount must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}
