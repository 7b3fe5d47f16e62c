use num_traits::cast;
use rand::{self, Rng};

use crate::{dimension::Dimension, types::Element};

pub(crate) fn dims(spec: &[(&str, usize)]) -> Vec<Dimension> {
    spec.iter()
        .map(|&(name, length)| Dimension::new(name, length))
        .collect()
}

/// A spread of dimension lists, including rank 0 and zero length axes.
pub(crate) fn dimension_lists() -> Vec<Vec<Dimension>> {
    vec![
        vec![],
        dims(&[("time", 3)]),
        dims(&[("time", 0)]),
        dims(&[("y", 4), ("x", 5)]),
        dims(&[("time", 2), ("y", 3), ("x", 4)]),
        dims(&[("time", 2), ("layer", 1), ("y", 3), ("x", 7)]),
    ]
}

/// Random (index, value) pairs inside the bounds of `shape`. Values are small whole numbers so
/// they are exactly representable by every element type.
pub(crate) fn random_cells<T: Element>(shape: &[usize], count: usize) -> Vec<(Vec<usize>, T)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let index = shape.iter().map(|&extent| rng.gen_range(0..extent)).collect();
            let value = cast(rng.gen_range(-1000..1000)).unwrap();

            (index, value)
        })
        .collect()
}
