pub mod budget;
pub mod category;
pub mod common;
pub mod draft;
pub mod month;
pub mod report;
pub mod transaction;
pub mod user;

pub use budget::{Budget, BudgetDraft, BudgetPatch};
pub use category::Category;
pub use common::{Displayable, EntryKind, Identifiable};
pub use draft::{DraftOutcome, EntityDraft};
pub use month::MonthKey;
pub use report::{BudgetUsage, CategoryStats, MonthlyStats};
pub use transaction::{Transaction, TransactionDraft, TransactionPatch};
pub use user::{Credentials, ProfilePatch, Registration, User};
