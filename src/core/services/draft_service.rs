//! Dispatch for tagged form submissions.

use crate::context::AppContext;
use crate::domain::{DraftOutcome, EntityDraft, User};

use super::{AuthService, BudgetService, ServiceResult, TransactionService};

pub struct DraftService;

impl DraftService {
    /// Routes a completed form to the service owning its entity and returns
    /// the stored record.
    pub async fn submit(
        ctx: &AppContext,
        user: &User,
        draft: EntityDraft,
    ) -> ServiceResult<DraftOutcome> {
        match draft {
            EntityDraft::Transaction(draft) => {
                TransactionService::create(ctx, &user.id, &draft)
                    .await
                    .map(DraftOutcome::Transaction)
            }
            EntityDraft::Budget(draft) => BudgetService::create(ctx, &user.id, &draft)
                .await
                .map(DraftOutcome::Budget),
            EntityDraft::Profile(patch) => AuthService::update_profile(ctx, &user.id, &patch)
                .await
                .map(DraftOutcome::User),
        }
    }
}
