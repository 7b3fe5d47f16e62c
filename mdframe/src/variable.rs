use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use crate::{
    dimension::Dimension,
    errors::{Error, Result},
    mdarray::MDArray,
    types::{ArrayVariant, Element, ElementType, Scalar},
    visitors::{At, Insert, Rank, Shape, Size},
};

/// A named array spanning an ordered list of dimensions.
///
/// The element type is chosen when the variable is made and never changes afterwards. Typed
/// accessors (`values_of`, `get`, `insert`, `set_data`) check the requested type against it and
/// fail with `Error::TypeMismatch` on disagreement. Untyped accessors (`values`, `at`, `size`,
/// `rank`, `shape`) work without knowing the element type.
///
/// # Equality
///
/// Two variables are equal if and only if the hashes of their **names** are equal. Dimensions
/// and data are not compared, and `Hash` likewise only covers the name. This is intentional: it
/// lets a variable stand in as the key for "the variable named X". Compare `values()` when you
/// need to know whether two variables hold the same data.
///
#[derive(Clone, Debug, Default)]
pub struct Variable {
    name: String,
    dimensions: Vec<Dimension>,
    data: ArrayVariant,
}

impl Variable {
    /// Make a variable of element type `T`, zero filled, spanning `dimensions` in order.
    ///
    pub fn make<T: Element>(name: impl Into<String>, dimensions: &[Dimension]) -> Result<Self> {
        let name = name.into();
        let shape: Vec<usize> = dimensions.iter().map(Dimension::length).collect();
        let data = MDArray::<T>::new(&shape)?;

        log::debug!("made variable {name:?} of {} with shape {shape:?}", T::TYPE);

        Ok(Self {
            name,
            dimensions: dimensions.to_vec(),
            data: T::wrap(data),
        })
    }

    /// Replace this variable's data wholesale.
    ///
    /// `data` must have the variable's element type and a shape matching its dimensions. On
    /// failure the variable is left untouched.
    ///
    pub fn set_data<T: Element>(&mut self, data: MDArray<T>) -> Result<()> {
        self.check_type::<T>()?;
        let expected: Vec<usize> = self.dimensions.iter().map(Dimension::length).collect();
        if data.shape() != expected.as_slice() {
            return Err(Error::ShapeMismatch {
                expected,
                found: data.shape().to_vec(),
            });
        }

        log::debug!("replaced data of variable {:?}", self.name);
        self.data = T::wrap(data);

        Ok(())
    }

    /// Get the type-erased backing array.
    ///
    pub fn values(&self) -> &ArrayVariant {
        &self.data
    }

    /// Get the backing array as `MDArray<T>`.
    ///
    pub fn values_of<T: Element>(&self) -> Result<&MDArray<T>> {
        self.data.get::<T>().ok_or(Error::TypeMismatch {
            requested: T::TYPE,
            active: self.element_type(),
        })
    }

    pub fn element_type(&self) -> ElementType {
        self.data.element_type()
    }

    pub fn size(&self) -> usize {
        self.data.apply(Size)
    }

    pub fn rank(&self) -> usize {
        self.data.apply(Rank)
    }

    pub fn shape(&self) -> &[usize] {
        self.data.apply(Shape)
    }

    /// Write one value at `index`.
    ///
    pub fn insert<T: Element>(&mut self, index: &[usize], value: T) -> Result<()> {
        self.insert_scalar(index, value.into_scalar())
    }

    /// Write one type-erased value at `index`. The scalar's type must match the variable's.
    ///
    pub fn insert_scalar(&mut self, index: &[usize], value: Scalar) -> Result<()> {
        log::trace!("insert {value} at {index:?} into variable {:?}", self.name);

        self.data.apply_mut(Insert { index, value })
    }

    /// Get the value at `index` without knowing the element type.
    ///
    pub fn at(&self, index: &[usize]) -> Result<Scalar> {
        self.data.apply(At { index })
    }

    /// Get the value at `index` as a `T`.
    ///
    pub fn get<T: Element>(&self, index: &[usize]) -> Result<T> {
        self.values_of::<T>()?.at(index)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the dimensions this variable spans, in axis order.
    ///
    pub fn dimensions(&self) -> Vec<&str> {
        self.dimensions.iter().map(Dimension::name).collect()
    }

    pub fn dimension_list(&self) -> &[Dimension] {
        &self.dimensions
    }

    fn check_type<T: Element>(&self) -> Result<()> {
        if T::TYPE == self.element_type() {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                requested: T::TYPE,
                active: self.element_type(),
            })
        }
    }

    fn name_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.name.hash(&mut hasher);

        hasher.finish()
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name_hash() == other.name_hash()
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.name_hash());
    }
}
