//! Custom Dioxus hooks for modal-dioxus components.

use dioxus::prelude::*;

use crate::service::ModalService;

/// Read the modal service provided by an ancestor.
///
/// Panics (like any `use_context`) when no ancestor provides one.
#[must_use]
pub fn use_modal() -> ModalService {
    use_context::<ModalService>()
}

/// Create a modal service and provide it to this component's subtree.
///
/// Call once near the root of the app, above the `ModalContainer`.
#[must_use]
pub fn use_modal_provider() -> ModalService {
    use_context_provider(ModalService::new)
}
