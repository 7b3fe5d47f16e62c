use std::collections::BTreeMap;

use crate::{
    dimension::Dimension,
    errors::{Error, Result},
    types::Element,
    variable::Variable,
};

/// A set of variables that share a registry of dimensions.
///
/// Variables are added by naming the dimensions they span. Those names are resolved against
/// the frame's registry, so every variable in a frame agrees on the length of each dimension.
///
#[derive(Clone, Debug, Default)]
pub struct Frame {
    dimensions: Vec<Dimension>,
    variables: BTreeMap<String, Variable>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dimension.
    ///
    /// Adding a dimension that's already registered with the same length does nothing. A
    /// different length for an existing name is an error.
    ///
    pub fn add_dimension(&mut self, name: &str, length: usize) -> Result<&Dimension> {
        match self.dimensions.iter().position(|dim| dim.name() == name) {
            Some(position) => {
                let existing = &self.dimensions[position];
                if existing.length() != length {
                    return Err(Error::DimensionConflict {
                        name: name.to_string(),
                        existing: existing.length(),
                        requested: length,
                    });
                }

                Ok(existing)
            }
            None => {
                log::debug!("frame: added dimension {name:?} with length {length}");
                self.dimensions.push(Dimension::new(name, length));

                Ok(&self.dimensions[self.dimensions.len() - 1])
            }
        }
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|dim| dim.name() == name)
    }

    pub fn has_dimension(&self, name: &str) -> bool {
        self.dimension(name).is_some()
    }

    /// Iterate over registered dimensions in the order they were added.
    ///
    pub fn dimensions(&self) -> impl Iterator<Item = &Dimension> {
        self.dimensions.iter()
    }

    /// Make a new variable of element type `T` spanning the named dimensions, in order.
    ///
    pub fn add_variable<T: Element>(
        &mut self,
        name: &str,
        dimensions: &[&str],
    ) -> Result<&mut Variable> {
        if self.variables.contains_key(name) {
            return Err(Error::DuplicateVariable(name.to_string()));
        }

        let dimensions = dimensions
            .iter()
            .map(|&dim_name| {
                self.dimension(dim_name)
                    .cloned()
                    .ok_or_else(|| Error::UnknownDimension(dim_name.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let variable = Variable::make::<T>(name, &dimensions)?;
        log::debug!("frame: added variable {name:?} over {dimensions:?}");

        Ok(self.variables.entry(name.to_string()).or_insert(variable))
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.get_mut(name)
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<Variable> {
        self.variables.remove(name)
    }

    /// Iterate over variables, ordered by name.
    ///
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
