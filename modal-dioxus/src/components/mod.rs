//! UI components for modal-dioxus.

mod container;

pub use container::ModalContainer;
