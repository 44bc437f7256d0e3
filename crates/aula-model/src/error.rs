use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid form field list: {0}")]
    Json(#[from] serde_json::Error),
    #[error("form field #{index} has an empty {attribute}")]
    EmptyFieldAttribute { index: usize, attribute: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
