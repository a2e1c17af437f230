//! Demo application shown by `mdx`.
//!
//! A row of buttons opens the demo components with the various options so
//! the container markup and stylesheet can be checked by eye.

use dioxus::prelude::*;

use crate::components::ModalContainer;
use crate::hooks::{use_modal, use_modal_provider};
use crate::{ModalComponent, ModalOptions, ModalParameters, ModalPosition};

/// Settings handed to the app through launch context.
#[derive(Debug, Clone, Default)]
pub struct DemoSettings {
    pub defaults: ModalOptions,
    pub startup: Option<String>,
}

/// Greets `Name` (defaults to "world").
pub struct Greeting;

impl ModalComponent for Greeting {
    fn name() -> &'static str {
        "greeting"
    }

    fn render(parameters: &ModalParameters) -> Element {
        let name = parameters.get_or("Name", "world".to_string())?;
        rsx! { GreetingBody { name } }
    }
}

#[component]
fn GreetingBody(name: String) -> Element {
    let modal = use_modal();

    rsx! {
        div {
            class: "demo-greeting",
            p { "Hello, {name}!" }
            button {
                onclick: move |_| modal.close(),
                "Done"
            }
        }
    }
}

/// Shows the required `Item` parameter; fails to render without it.
pub struct ItemDetails;

impl ModalComponent for ItemDetails {
    fn name() -> &'static str {
        "item-details"
    }

    fn render(parameters: &ModalParameters) -> Element {
        let item = parameters.require::<String>("Item")?;
        let quantity = parameters.get_or("Quantity", 1_u32)?;
        rsx! {
            dl {
                class: "demo-item",
                dt { "Item" }
                dd { "{item}" }
                dt { "Quantity" }
                dd { "{quantity}" }
            }
        }
    }
}

/// Root component of the demo window.
#[component]
pub fn App() -> Element {
    let settings = use_context::<DemoSettings>();
    let modal = use_modal_provider();

    use_hook({
        let modal = modal.clone();
        let startup = settings.startup.clone();
        move || {
            modal.register::<Greeting>().register::<ItemDetails>();
            if let Some(name) = startup {
                if let Err(err) =
                    modal.show_named(&name, &name, ModalParameters::new(), ModalOptions::new())
                {
                    log::warn!("Startup modal not shown: {err}");
                }
            }
        }
    });

    let defaults = settings.defaults;

    rsx! {
        div {
            class: "demo",
            h1 { "modal-dioxus" }

            div {
                class: "demo-buttons",

                button {
                    onclick: {
                        let modal = modal.clone();
                        move |_| modal.show::<Greeting>("Hello")
                    },
                    "Greeting"
                }

                button {
                    onclick: {
                        let modal = modal.clone();
                        move |_| {
                            modal.show_with_parameters::<Greeting>(
                                "Hello <em>again</em>",
                                ModalParameters::new().with("Name", "Dioxus".to_string()),
                            );
                        }
                    },
                    "Greeting with parameter"
                }

                for (position, token) in ModalPosition::ALL.map(|p| (p, p.token())) {
                    button {
                        key: "{token}",
                        onclick: {
                            let modal = modal.clone();
                            move |_| {
                                modal.show_with_options::<Greeting>(
                                    token,
                                    ModalOptions::new().with_position(position),
                                );
                            }
                        },
                        "{token}"
                    }
                }

                button {
                    onclick: {
                        let modal = modal.clone();
                        move |_| {
                            modal.show_with::<ItemDetails>(
                                "",
                                ModalParameters::new()
                                    .with("Item", "Keyboard".to_string())
                                    .with("Quantity", 2_u32),
                                ModalOptions::new().hide_header(true).with_class("demo-compact"),
                            );
                        }
                    },
                    "Item without header"
                }
            }

            ModalContainer {
                position: defaults.position,
                class: defaults.class,
                hide_header: defaults.hide_header,
                hide_close_button: defaults.hide_close_button,
            }
        }
    }
}
