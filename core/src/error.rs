use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid rows do not match the declared dimensions")]
    InvalidInput,
    #[error("Query coordinates outside the playable grid")]
    OutOfRange,
    #[error("Cell resolved to a state that should be unreachable")]
    Internal,
}

pub type Result<T> = core::result::Result<T, GridError>;
