use ndarray::{iter::Iter, Array1, ArrayBase, ArrayD, ArrayViewD, Data, Dimension as NdDimension, IxDyn};

use crate::{
    errors::{Error, Result},
    types::Element,
};

/// A dense, rectangular, row-major array of a single element type.
///
/// Shape is fixed at construction. A multi-index must supply exactly one coordinate per axis,
/// each coordinate less than that axis' extent.
///
#[derive(Clone, Debug, PartialEq)]
pub struct MDArray<T> {
    data: ArrayD<T>,
}

impl<T> MDArray<T>
where
    T: Element,
{
    /// Allocate a zero filled array of the given shape.
    ///
    pub fn new(shape: &[usize]) -> Result<Self> {
        checked_size(shape)?;

        Ok(Self {
            data: ArrayD::zeros(IxDyn(shape)),
        })
    }

    /// Wrap existing row-major storage.
    ///
    /// `data.len()` must equal the product of `shape`.
    ///
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        let size = checked_size(shape)?;
        let mismatch = |found: usize| Error::ShapeMismatch {
            expected: shape.to_vec(),
            found: vec![found],
        };
        if data.len() != size {
            return Err(mismatch(data.len()));
        }

        let length = data.len();
        let data = ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| mismatch(length))?;

        Ok(Self { data })
    }

    /// Copy an `ndarray` array of any layout into a new MDArray.
    ///
    pub fn from_ndarray<S, D>(array: &ArrayBase<S, D>) -> Result<Self>
    where
        S: Data<Elem = T>,
        D: NdDimension,
    {
        // iter() walks in logical (row-major) order regardless of memory layout
        Self::from_vec(array.shape(), array.iter().copied().collect())
    }

    /// Total number of elements
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of axes
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn strides(&self) -> &[isize] {
        self.data.strides()
    }

    /// Get the element at `index`.
    ///
    pub fn at(&self, index: &[usize]) -> Result<T> {
        self.check_arity(index)?;

        self.data
            .get(IxDyn(index))
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Write `value` at `index`. Nothing is written if the index is invalid.
    ///
    pub fn insert(&mut self, index: &[usize], value: T) -> Result<()> {
        self.check_arity(index)?;

        if let Some(cell) = self.data.get_mut(IxDyn(index)) {
            *cell = value;
            return Ok(());
        }

        Err(self.out_of_bounds(index))
    }

    /// Iterate over elements in row-major order
    pub fn iter(&self) -> Iter<'_, T, IxDyn> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().copied().collect()
    }

    pub fn view(&self) -> ArrayViewD<'_, T> {
        self.data.view()
    }

    pub fn into_ndarray(self) -> ArrayD<T> {
        self.data
    }

    fn check_arity(&self, index: &[usize]) -> Result<()> {
        if index.len() != self.rank() {
            return Err(Error::Arity {
                rank: self.rank(),
                found: index.len(),
            });
        }

        Ok(())
    }

    fn out_of_bounds(&self, index: &[usize]) -> Error {
        Error::OutOfBounds {
            index: index.to_vec(),
            shape: self.shape().to_vec(),
        }
    }
}

/// A degenerate, empty array with shape `[0]`.
///
impl<T> Default for MDArray<T> {
    fn default() -> Self {
        Self {
            data: Array1::from_vec(vec![]).into_dyn(),
        }
    }
}

/// Element count of `shape`.
///
/// Zero length axes make the count 0 wherever they appear. The remaining extents must still
/// multiply to at most `isize::MAX`, which is the largest shape ndarray will lay out.
///
fn checked_size(shape: &[usize]) -> Result<usize> {
    let nonzero = shape
        .iter()
        .filter(|&&extent| extent != 0)
        .try_fold(1_usize, |size, &extent| size.checked_mul(extent))
        .filter(|&size| size <= isize::MAX as usize)
        .ok_or_else(|| Error::Overflow {
            shape: shape.to_vec(),
        })?;

    if shape.contains(&0) {
        Ok(0)
    } else {
        Ok(nonzero)
    }
}
