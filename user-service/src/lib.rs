// User Service Library
// Domain crate for the userdeck terminal client: the ordered in-memory user
// list and the one-shot remote loader that seeds it.

pub mod error;
pub mod models;
pub mod remote;
pub mod store;

// Re-export commonly used types
pub use error::{ServiceError, ServiceResult};
pub use models::{User, UserDraft};
pub use remote::{UserApi, DEFAULT_BASE_URL};
pub use store::UserStore;
