pub mod collection;
pub mod contact;
pub mod snapshot;

pub use collection::{CollectionPage, Record, DEFAULT_PAGE_SIZE};
pub use contact::ContactSubmission;
pub use snapshot::{AttackCategorySnapshot, PathCount, Snapshot};
