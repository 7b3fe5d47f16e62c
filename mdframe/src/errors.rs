use std::result;

use thiserror::Error;

use crate::types::ElementType;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A typed operation was asked for one element type while the container holds another.
    #[error("type mismatch: requested {requested}, but the active type is {active}")]
    TypeMismatch {
        requested: ElementType,
        active: ElementType,
    },

    #[error("index has {found} coordinates, but the array has rank {rank}")]
    Arity { rank: usize, found: usize },

    #[error("index {index:?} is out of bounds for array of shape {shape:?}")]
    OutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("dimension {name:?} has invalid length {length}")]
    InvalidDimension { name: String, length: i64 },

    #[error("element count overflows for shape {shape:?}")]
    Overflow { shape: Vec<usize> },

    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("unknown dimension {0:?}")]
    UnknownDimension(String),

    #[error("dimension {name:?} already exists with length {existing}, not {requested}")]
    DimensionConflict {
        name: String,
        existing: usize,
        requested: usize,
    },

    #[error("variable {0:?} already exists")]
    DuplicateVariable(String),
}

pub type Result<T> = result::Result<T, Error>;
