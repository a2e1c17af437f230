//! Named values handed from the caller to the component shown in a modal.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::ModalError;

/// A bag of named values, bound to a component's inputs by name at render time.
///
/// Values are reference counted so a request can be cloned into the render
/// tree without cloning the values themselves.
#[derive(Clone, Default)]
pub struct ModalParameters {
    values: HashMap<String, Rc<dyn Any>>,
}

impl ModalParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `name`, replacing any previous value.
    pub fn add<T: 'static>(&mut self, name: impl Into<String>, value: T) -> &mut Self {
        self.values.insert(name.into(), Rc::new(value));
        self
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with<T: 'static>(mut self, name: impl Into<String>, value: T) -> Self {
        self.add(name, value);
        self
    }

    /// Read the value stored under `name`.
    ///
    /// Returns `Ok(None)` when the name is absent so the component can fall
    /// back to its own default.
    pub fn get<T: Clone + 'static>(&self, name: &str) -> Result<Option<T>, ModalError> {
        let Some(value) = self.values.get(name) else {
            return Ok(None);
        };
        value
            .downcast_ref::<T>()
            .cloned()
            .map(Some)
            .ok_or_else(|| ModalError::ParameterType {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    /// Read `name`, or `default` when it was not passed.
    pub fn get_or<T: Clone + 'static>(&self, name: &str, default: T) -> Result<T, ModalError> {
        Ok(self.get(name)?.unwrap_or(default))
    }

    /// Read an input the component cannot render without.
    pub fn require<T: Clone + 'static>(&self, name: &str) -> Result<T, ModalError> {
        self.get(name)?
            .ok_or_else(|| ModalError::MissingParameter(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parameter names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Equal when both bags hold the same names bound to the same shared values.
impl PartialEq for ModalParameters {
    fn eq(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self.values.iter().all(|(name, value)| {
                other
                    .values
                    .get(name)
                    .is_some_and(|other_value| Rc::ptr_eq(value, other_value))
            })
    }
}

impl fmt::Debug for ModalParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
