#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BstError {
    #[error("Invalid add result code (expected 0 or 1, got {0})")]
    InvalidResultCode(i32),
}
