use thiserror::Error;

use crate::vocabulary::Vocabulary;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown {vocabulary} value: {value:?}")]
    UnknownOption {
        vocabulary: Vocabulary,
        value: String,
    },
}

impl ModelError {
    pub(crate) fn unknown(vocabulary: Vocabulary, value: &str) -> Self {
        ModelError::UnknownOption {
            vocabulary,
            value: value.to_string(),
        }
    }
}
