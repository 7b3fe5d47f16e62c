//! Operations that work the same way on every supported element type.
//!
//! A visitor is written once, generically over `T: Element`, and applied with
//! `ArrayVariant::apply` or `ArrayVariant::apply_mut`, which select the concrete array with a
//! single match on the active tag.

use crate::{
    errors::{Error, Result},
    mdarray::MDArray,
    types::{Element, Scalar},
};

/// Read-only operation over whichever array an `ArrayVariant` holds.
///
pub trait ArrayVisitor<'a> {
    type Output;

    fn visit<T: Element>(self, array: &'a MDArray<T>) -> Self::Output;
}

/// Mutating operation over whichever array an `ArrayVariant` holds.
///
pub trait ArrayVisitorMut<'a> {
    type Output;

    fn visit_mut<T: Element>(self, array: &'a mut MDArray<T>) -> Self::Output;
}

pub struct Size;

impl<'a> ArrayVisitor<'a> for Size {
    type Output = usize;

    fn visit<T: Element>(self, array: &'a MDArray<T>) -> usize {
        array.size()
    }
}

pub struct Rank;

impl<'a> ArrayVisitor<'a> for Rank {
    type Output = usize;

    fn visit<T: Element>(self, array: &'a MDArray<T>) -> usize {
        array.rank()
    }
}

pub struct Shape;

impl<'a> ArrayVisitor<'a> for Shape {
    type Output = &'a [usize];

    fn visit<T: Element>(self, array: &'a MDArray<T>) -> &'a [usize] {
        array.shape()
    }
}

/// Indexed read, returning the element as a `Scalar`.
pub struct At<'i> {
    pub index: &'i [usize],
}

impl<'a, 'i> ArrayVisitor<'a> for At<'i> {
    type Output = Result<Scalar>;

    fn visit<T: Element>(self, array: &'a MDArray<T>) -> Result<Scalar> {
        array.at(self.index).map(Element::into_scalar)
    }
}

/// Indexed write of a `Scalar`.
///
/// The scalar's tag must match the array's element type. Values are never converted between
/// types.
///
pub struct Insert<'i> {
    pub index: &'i [usize],
    pub value: Scalar,
}

impl<'a, 'i> ArrayVisitorMut<'a> for Insert<'i> {
    type Output = Result<()>;

    fn visit_mut<T: Element>(self, array: &'a mut MDArray<T>) -> Result<()> {
        let value = T::from_scalar(self.value).ok_or(Error::TypeMismatch {
            requested: self.value.element_type(),
            active: T::TYPE,
        })?;

        array.insert(self.index, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_traits::cast;

    use crate::types::{ArrayVariant, ElementType};

    /// Visitors aren't limited to the ones above. This one sums any array as f64.
    struct SumAsF64;

    impl<'a> ArrayVisitor<'a> for SumAsF64 {
        type Output = f64;

        fn visit<T: Element>(self, array: &'a MDArray<T>) -> f64 {
            array
                .iter()
                .map(|&value| cast::<T, f64>(value).unwrap())
                .sum()
        }
    }

    fn variants() -> Result<Vec<ArrayVariant>> {
        Ok(vec![
            MDArray::<i32>::new(&[2, 3])?.into(),
            MDArray::<i64>::new(&[2, 3])?.into(),
            MDArray::<f32>::new(&[2, 3])?.into(),
            MDArray::<f64>::new(&[2, 3])?.into(),
        ])
    }

    #[test]
    fn shape_visitors() -> Result<()> {
        for variant in variants()? {
            assert_eq!(variant.apply(Size), 6);
            assert_eq!(variant.apply(Rank), 2);
            assert_eq!(variant.apply(Shape), &[2, 3]);
        }

        Ok(())
    }

    #[test]
    fn insert_then_at() -> Result<()> {
        let mut variant = ArrayVariant::from(MDArray::<f64>::new(&[2, 3])?);
        variant.apply_mut(Insert {
            index: &[1, 2],
            value: Scalar::F64(2.5),
        })?;

        assert_eq!(variant.apply(At { index: &[1, 2] })?, Scalar::F64(2.5));
        assert_eq!(variant.apply(At { index: &[0, 0] })?, Scalar::F64(0.0));

        Ok(())
    }

    #[test]
    fn insert_type_mismatch() -> Result<()> {
        let mut variant = ArrayVariant::from(MDArray::<i32>::new(&[4])?);
        let before = variant.clone();
        assert_eq!(
            variant.apply_mut(Insert {
                index: &[1],
                value: Scalar::I64(7),
            }),
            Err(Error::TypeMismatch {
                requested: ElementType::I64,
                active: ElementType::I32,
            })
        );
        assert_eq!(variant, before);

        Ok(())
    }

    #[test]
    fn at_out_of_bounds() -> Result<()> {
        let variant = ArrayVariant::from(MDArray::<f32>::new(&[4])?);
        assert_eq!(
            variant.apply(At { index: &[4] }),
            Err(Error::OutOfBounds {
                index: vec![4],
                shape: vec![4]
            })
        );
        assert_eq!(
            variant.apply(At { index: &[0, 0] }),
            Err(Error::Arity { rank: 1, found: 2 })
        );

        Ok(())
    }

    #[test]
    fn custom_visitor() -> Result<()> {
        let array = MDArray::from_vec(&[2, 2], vec![1_i64, 2, 3, 4])?;
        assert_eq!(ArrayVariant::from(array).apply(SumAsF64), 10.0);

        let array = MDArray::from_vec(&[3], vec![0.5_f32, 0.25, 0.25])?;
        assert_eq!(ArrayVariant::from(array).apply(SumAsF64), 1.0);

        Ok(())
    }
}
