//! Named, dimensioned, multi-dimensional variables over a closed set of element types.
//!
//! A [`Variable`] wraps one dense [`MDArray`] of `i32`, `i64`, `f32` or `f64`. Which one is
//! decided when the variable is made. Callers that know the element type use the typed
//! accessors, which check it. Callers that don't use the untyped ones, which dispatch on the
//! active type and return [`Scalar`] values.

mod dimension;
mod errors;
mod frame;
mod mdarray;
mod types;
mod variable;
pub mod visitors;

#[cfg(test)]
mod testing;

pub use dimension::Dimension;

pub use errors::Error;
pub use errors::Result;

pub use frame::Frame;

pub use mdarray::MDArray;

pub use types::ArrayVariant;
pub use types::Element;
pub use types::ElementType;
pub use types::Scalar;

pub use variable::Variable;
