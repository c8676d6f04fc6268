//! Login/logout audit trail for Pin People
//!
//! Every successful login and logout appends an immutable [`AuthEvent`]
//! to the `audit_events` table, distinguishing the general site from the
//! admin console. The trail is best-effort by policy: authentication must
//! never fail because audit persistence did, so the recorder swallows
//! insert errors after logging them.
//!
//! # Example
//!
//! ```rust,no_run
//! use audit_trail::{Actor, AuditRecorder, AuthEventKind};
//! use uuid::Uuid;
//!
//! async fn on_login(recorder: &AuditRecorder, user_id: Uuid, username: &str) {
//!     let actor = Actor::new(user_id, username);
//!     recorder
//!         .record_auth_event(Some(&actor), AuthEventKind::LoginSite)
//!         .await;
//! }
//! ```

pub mod entry;
pub mod error;
pub mod recorder;

pub use entry::*;
pub use error::*;
pub use recorder::*;
