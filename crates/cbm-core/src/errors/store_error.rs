use crate::case::CaseId;

/// Case store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate case identity: {id}")]
    DuplicateCase { id: CaseId },
}
