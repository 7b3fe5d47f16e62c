use std::fmt;

use crate::errors::{Error, Result};

/// A named axis with a fixed length.
///
/// Dimensions are plain values: two dimensions with the same name and length are the same
/// dimension, no matter which variable or frame they came from.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dimension {
    name: String,
    length: usize,
}

impl Dimension {
    pub fn new(name: impl Into<String>, length: usize) -> Self {
        Self {
            name: name.into(),
            length,
        }
    }

    /// Construct a dimension from a signed length, as handed over by loaders that parse
    /// lengths from external sources. Negative lengths are rejected.
    ///
    pub fn try_new(name: impl Into<String>, length: i64) -> Result<Self> {
        let name = name.into();
        match usize::try_from(length) {
            Ok(length) => Ok(Self { name, length }),
            Err(_) => Err(Error::InvalidDimension { name, length }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.length)
    }
}
