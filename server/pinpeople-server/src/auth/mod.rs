//! Authentication and authorization for the Pin People API
//!
//! Password hashing, bearer-token issue/verify, the request extractors
//! that surface the authenticated user, and the profile access policy.

pub mod extractor;
pub mod password;
pub mod policy;
pub mod tokens;

// Re-export for convenience
pub use extractor::{CurrentUser, MaybeUser};
pub use policy::{can_edit, can_view, AccessGrant};
pub use tokens::Claims;
