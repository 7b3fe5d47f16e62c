//! The closed set of element types a variable can hold.
//!
//! Everything here is derived from the single `type_list!` invocation at the bottom of this
//! module: the `ElementType` tag, the `Scalar` union of bare values, the `ArrayVariant` union
//! of arrays, and the sealed `Element` trait. A generic operation bounded on `T: Element`
//! simply can't be called with a type that isn't in the list.

use std::fmt;

use num_traits::{NumCast, Zero};

use crate::{
    errors::{Error, Result},
    mdarray::MDArray,
    visitors::{ArrayVisitor, ArrayVisitorMut},
};

mod sealed {
    pub trait Sealed {}
}

/// A scalar type that can be stored in an `MDArray` held by a `Variable`.
///
/// This trait is sealed. The set of implementors is exactly the set of types named in the
/// `type_list!` invocation of this module.
///
pub trait Element:
    sealed::Sealed + Copy + fmt::Debug + fmt::Display + PartialEq + Zero + NumCast + Send + Sync + 'static
{
    /// Tag identifying this type inside `ArrayVariant` and `Scalar`.
    const TYPE: ElementType;

    fn wrap(array: MDArray<Self>) -> ArrayVariant;

    fn unwrap_ref(variant: &ArrayVariant) -> Option<&MDArray<Self>>;

    fn unwrap_mut(variant: &mut ArrayVariant) -> Option<&mut MDArray<Self>>;

    fn into_scalar(self) -> Scalar;

    fn from_scalar(scalar: Scalar) -> Option<Self>;
}

macro_rules! type_list {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        /// Tag naming one of the supported element types.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum ElementType {
            $($variant,)+
        }

        impl ElementType {
            /// All supported element types, in declaration order.
            pub const ALL: &'static [ElementType] = &[$(ElementType::$variant,)+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($ty),)+
                }
            }
        }

        /// A single value of any supported element type.
        ///
        /// This is what type-erased element access returns.
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub enum Scalar {
            $($variant($ty),)+
        }

        impl Scalar {
            pub fn element_type(&self) -> ElementType {
                match self {
                    $(Self::$variant(_) => ElementType::$variant,)+
                }
            }
        }

        impl fmt::Display for Scalar {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant(value) => write!(f, "{value}"),)+
                }
            }
        }

        /// Holds exactly one `MDArray` of one of the supported element types.
        #[derive(Clone, Debug, PartialEq)]
        pub enum ArrayVariant {
            $($variant(MDArray<$ty>),)+
        }

        impl ArrayVariant {
            /// Get the tag of the array currently held.
            ///
            pub fn element_type(&self) -> ElementType {
                match self {
                    $(Self::$variant(_) => ElementType::$variant,)+
                }
            }

            /// Apply a visitor to whichever array is currently held.
            ///
            pub fn apply<'a, V>(&'a self, visitor: V) -> V::Output
            where
                V: ArrayVisitor<'a>,
            {
                match self {
                    $(Self::$variant(array) => visitor.visit(array),)+
                }
            }

            /// Apply a mutating visitor to whichever array is currently held.
            ///
            pub fn apply_mut<'a, V>(&'a mut self, visitor: V) -> V::Output
            where
                V: ArrayVisitorMut<'a>,
            {
                match self {
                    $(Self::$variant(array) => visitor.visit_mut(array),)+
                }
            }
        }

        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const TYPE: ElementType = ElementType::$variant;

                fn wrap(array: MDArray<Self>) -> ArrayVariant {
                    ArrayVariant::$variant(array)
                }

                fn unwrap_ref(variant: &ArrayVariant) -> Option<&MDArray<Self>> {
                    match variant {
                        ArrayVariant::$variant(array) => Some(array),
                        _ => None,
                    }
                }

                fn unwrap_mut(variant: &mut ArrayVariant) -> Option<&mut MDArray<Self>> {
                    match variant {
                        ArrayVariant::$variant(array) => Some(array),
                        _ => None,
                    }
                }

                fn into_scalar(self) -> Scalar {
                    Scalar::$variant(self)
                }

                fn from_scalar(scalar: Scalar) -> Option<Self> {
                    match scalar {
                        Scalar::$variant(value) => Some(value),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value)
                }
            }

            impl TryFrom<Scalar> for $ty {
                type Error = Error;

                fn try_from(scalar: Scalar) -> Result<Self> {
                    <$ty as Element>::from_scalar(scalar).ok_or(Error::TypeMismatch {
                        requested: ElementType::$variant,
                        active: scalar.element_type(),
                    })
                }
            }

            impl From<MDArray<$ty>> for ArrayVariant {
                fn from(array: MDArray<$ty>) -> Self {
                    ArrayVariant::$variant(array)
                }
            }
        )+
    };
}

type_list! {
    I32 => i32,
    I64 => i64,
    F32 => f32,
    F64 => f64,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ArrayVariant {
    /// Borrow the held array as `MDArray<T>`, if `T` is the active type.
    ///
    pub fn get<T: Element>(&self) -> Option<&MDArray<T>> {
        T::unwrap_ref(self)
    }

    pub fn get_mut<T: Element>(&mut self) -> Option<&mut MDArray<T>> {
        T::unwrap_mut(self)
    }

    pub fn size(&self) -> usize {
        self.apply(crate::visitors::Size)
    }

    pub fn rank(&self) -> usize {
        self.apply(crate::visitors::Rank)
    }

    pub fn shape(&self) -> &[usize] {
        self.apply(crate::visitors::Shape)
    }
}

/// An empty array of the first supported type.
///
impl Default for ArrayVariant {
    fn default() -> Self {
        ArrayVariant::I32(MDArray::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use paste::paste;

    macro_rules! element_tests {
        ($ty:ident, $variant:ident) => {
            paste! {
                #[test]
                fn [<$ty _tag>]() {
                    assert_eq!(<$ty as Element>::TYPE, ElementType::$variant);
                    assert_eq!(<$ty as Element>::TYPE.name(), stringify!($ty));
                }

                #[test]
                fn [<$ty _scalar_unwrap>]() {
                    let scalar = Scalar::from(7 as $ty);
                    assert_eq!(scalar.element_type(), ElementType::$variant);
                    assert_eq!(<$ty as Element>::from_scalar(scalar), Some(7 as $ty));
                    assert_eq!($ty::try_from(scalar), Ok(7 as $ty));
                }

                #[test]
                fn [<$ty _wrap_array>]() {
                    let array = MDArray::<$ty>::new(&[2, 3]).unwrap();
                    let variant = <$ty as Element>::wrap(array.clone());
                    assert_eq!(variant.element_type(), ElementType::$variant);
                    assert_eq!(variant.get::<$ty>(), Some(&array));
                    assert_eq!(variant.size(), 6);
                    assert_eq!(variant.rank(), 2);
                    assert_eq!(variant.shape(), &[2, 3]);
                }
            }
        };
    }

    element_tests!(i32, I32);
    element_tests!(i64, I64);
    element_tests!(f32, F32);
    element_tests!(f64, F64);

    #[test]
    fn scalar_wrong_type() {
        let scalar = Scalar::F64(1.5);
        assert_eq!(i32::from_scalar(scalar), None);
        assert_eq!(
            i32::try_from(scalar),
            Err(Error::TypeMismatch {
                requested: ElementType::I32,
                active: ElementType::F64,
            })
        );
    }

    #[test]
    fn variant_get_wrong_type() {
        let variant = ArrayVariant::from(MDArray::<i64>::new(&[4]).unwrap());
        assert!(variant.get::<i64>().is_some());
        assert!(variant.get::<i32>().is_none());
        assert!(variant.get::<f64>().is_none());
    }

    #[test]
    fn default_is_empty_first_type() {
        let variant = ArrayVariant::default();
        assert_eq!(variant.element_type(), ElementType::ALL[0]);
        assert_eq!(variant.shape(), &[0]);
        assert_eq!(variant.size(), 0);
    }

    #[test]
    fn all_types_listed_in_order() {
        assert_eq!(
            ElementType::ALL,
            &[
                ElementType::I32,
                ElementType::I64,
                ElementType::F32,
                ElementType::F64
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(ElementType::F32.to_string(), "f32");
        assert_eq!(Scalar::I64(-3).to_string(), "-3");
        assert_eq!(Scalar::F64(0.25).to_string(), "0.25");
    }
}
