//! The capability a component needs to be shown inside a modal.
//!
//! Dioxus components are plain functions and cannot be instantiated from a
//! type at runtime, so a modal body is described by a marker type that
//! implements [`ModalComponent`]. Its `render` binds the request's
//! [`ModalParameters`] to the component's inputs and mounts it.
//!
//! ```ignore
//! struct Confirm;
//!
//! impl ModalComponent for Confirm {
//!     fn render(parameters: &ModalParameters) -> Element {
//!         let message = parameters.get_or("Message", String::from("Are you sure?"))?;
//!         rsx! { ConfirmBody { message } }
//!     }
//! }
//! ```

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::error::ModalError;
use crate::parameters::ModalParameters;

/// A component that can be mounted inside a modal.
pub trait ModalComponent: 'static {
    /// Name used for registry lookup and in logs.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Bind `parameters` to the component's inputs and render it.
    ///
    /// Binding errors are returned through the `Element` result and reach
    /// the nearest Dioxus error boundary.
    fn render(parameters: &ModalParameters) -> Element;
}

/// Type-erased handle to a [`ModalComponent`].
#[derive(Debug, Clone, Copy)]
pub struct ComponentType {
    name: &'static str,
    render: fn(&ModalParameters) -> Element,
}

impl ComponentType {
    #[must_use]
    pub fn of<T: ModalComponent>() -> Self {
        Self {
            name: T::name(),
            render: T::render,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn render(&self, parameters: &ModalParameters) -> Element {
        (self.render)(parameters)
    }
}

impl PartialEq for ComponentType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && std::ptr::fn_addr_eq(self.render, other.render)
    }
}

impl Eq for ComponentType {}

/// Components that can be shown by name.
#[derive(Debug, Clone, Default)]
pub struct ModalRegistry {
    components: HashMap<&'static str, ComponentType>,
}

impl ModalRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under [`ModalComponent::name`]. Re-registering replaces.
    pub fn register<T: ModalComponent>(&mut self) -> &mut Self {
        let component = ComponentType::of::<T>();
        self.components.insert(component.name, component);
        self
    }

    pub fn lookup(&self, name: &str) -> Result<ComponentType, ModalError> {
        self.components
            .get(name)
            .copied()
            .ok_or_else(|| ModalError::UnknownComponent(name.to_string()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.components.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
