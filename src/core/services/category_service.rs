//! Read access to the category reference data.

use crate::context::AppContext;
use crate::domain::common::EntryKind;
use crate::domain::Category;
use crate::store::Query;

use super::ServiceResult;

pub struct CategoryService;

impl CategoryService {
    pub async fn list(ctx: &AppContext) -> ServiceResult<Vec<Category>> {
        Ok(ctx.store.list(&Query::new()).await?)
    }

    pub async fn list_by_kind(ctx: &AppContext, kind: EntryKind) -> ServiceResult<Vec<Category>> {
        Ok(ctx.store.list(&Query::new().eq("type", kind)).await?)
    }

    pub async fn by_id(ctx: &AppContext, id: &str) -> ServiceResult<Category> {
        Ok(ctx.store.get(id).await?)
    }
}
