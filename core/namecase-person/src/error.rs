use namecase_protocol::CaseIndexError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameCaseError {
    #[error("no words have been added to this person")]
    NoWords,

    #[error("case index {index} is out of range for a {count}-case profile")]
    CaseOutOfRange { index: usize, count: usize },
}

impl From<CaseIndexError> for NameCaseError {
    fn from(err: CaseIndexError) -> Self {
        NameCaseError::CaseOutOfRange {
            index: err.index,
            count: err.count,
        }
    }
}

pub type Result<T> = std::result::Result<T, NameCaseError>;
