use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Audit storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Corrupt audit record {id}: unknown event kind '{kind}'")]
    UnknownKind { id: uuid::Uuid, kind: String },
}

pub type AuditResult<T> = Result<T, AuditError>;
