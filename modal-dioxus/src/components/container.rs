//! The dialog shell that displays the service's active request.
//!
//! Mount exactly one `ModalContainer` below the component that provides the
//! [`ModalService`](crate::ModalService). It renders nothing while no modal is
//! shown.

use std::rc::Rc;

use dioxus::core::schedule_update;
use dioxus::prelude::*;

use crate::component::ComponentType;
use crate::hooks::use_modal;
use crate::options::{ModalOptions, ModalPosition};
use crate::parameters::ModalParameters;

/// Modal container with overlay, optional header and the requested component.
///
/// The props are container-wide defaults; options passed to `show` override
/// them per request.
///
/// The title is trusted markup and is inserted without escaping.
#[component]
pub fn ModalContainer(
    position: Option<ModalPosition>,
    class: Option<String>,
    hide_header: Option<bool>,
    hide_close_button: Option<bool>,
) -> Element {
    let service = use_modal();

    // The subscription is owned by this scope and released when it unmounts.
    let _subscription = use_hook({
        let service = service.clone();
        move || {
            let update = schedule_update();
            Rc::new(service.subscribe(move |_| update()))
        }
    });

    let Some(request) = service.current() else {
        return rsx! {};
    };

    let defaults = ModalOptions {
        position,
        class,
        hide_header,
        hide_close_button,
    };
    let options = request.options.resolve(&defaults);
    let container_class = options.container_class();
    let dialog_class = options.dialog_class();
    let title = request.title.clone();

    // A one-item keyed list: a new request id unmounts the previous body.
    let body = std::iter::once((request.id, request.component, request.parameters));

    let close = move |_: MouseEvent| service.close();

    rsx! {
        div {
            class: "{container_class}",

            div {
                class: "blazored-modal-overlay",
                onclick: close.clone(),
            }

            div {
                class: "{dialog_class}",

                if !options.hide_header {
                    div {
                        class: "blazored-modal-header",

                        h3 {
                            class: "blazored-modal-title",
                            dangerous_inner_html: "{title}",
                        }

                        if !options.hide_close_button {
                            button {
                                class: "blazored-modal-close",
                                r#type: "button",
                                aria_label: "close",
                                onclick: close.clone(),
                                span { aria_hidden: "true", "×" }
                            }
                        }
                    }
                }

                div {
                    class: "blazored-modal-content",
                    for (id, component, parameters) in body {
                        ModalContent {
                            key: "{id}",
                            component,
                            parameters,
                        }
                    }
                }
            }
        }
    }
}

/// Mounts the requested component in its own scope.
///
/// Keyed on the request id, so every show starts with fresh hook state.
/// Binding errors go to the nearest error boundary.
#[component]
fn ModalContent(component: ComponentType, parameters: ModalParameters) -> Element {
    component.render(&parameters)
}
