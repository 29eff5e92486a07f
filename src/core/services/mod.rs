pub mod auth_service;
pub mod budget_service;
pub mod category_service;
pub mod draft_service;
pub mod summary_service;
pub mod transaction_service;

pub use auth_service::AuthService;
pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use draft_service::DraftService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;

use crate::errors::CoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("{0}")]
    Invalid(String),
}
