//! Modal dialogs for Dioxus.
//!
//! Application code opens dialogs through a [`ModalService`]; a single
//! [`ModalContainer`](components::ModalContainer) mounted near the root
//! renders the active one.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dioxus::prelude::*;
//! use modal_dioxus::components::ModalContainer;
//! use modal_dioxus::hooks::use_modal_provider;
//! use modal_dioxus::{ModalComponent, ModalParameters};
//!
//! struct Hello;
//!
//! impl ModalComponent for Hello {
//!     fn render(parameters: &ModalParameters) -> Element {
//!         let name = parameters.get_or("Name", String::from("world"))?;
//!         rsx! { p { "Hello, {name}!" } }
//!     }
//! }
//!
//! #[component]
//! fn App() -> Element {
//!     let modal = use_modal_provider();
//!     rsx! {
//!         button { onclick: move |_| modal.show::<Hello>("Greeting"), "Open" }
//!         ModalContainer {}
//!     }
//! }
//! ```
//!
//! ## Markup
//!
//! The container renders `blazored-modal-*` classes; [`STYLESHEET`] holds
//! matching default styles.

use anyhow::Result;

// Public library modules
pub mod args;
pub mod component;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod options;
pub mod parameters;
pub mod service;

// Internal modules
mod app;

#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use component::{ComponentType, ModalComponent, ModalRegistry};
pub use config::ModalConfig;
pub use error::ModalError;
pub use options::{ModalOptions, ModalPosition, ResolvedOptions};
pub use parameters::ModalParameters;
pub use service::{ModalEvent, ModalRequest, ModalService, Subscription, SubscriptionId};

/// Default styles for the container markup.
pub const STYLESHEET: &str = include_str!("../assets/modal.css");

/// Launch the demo desktop application.
///
/// `startup` names a registered component to show once the window opens.
pub fn launch(config: &ModalConfig, startup: Option<String>) -> Result<()> {
    let settings = app::DemoSettings {
        defaults: config.defaults(),
        startup,
    };

    let custom_head = format!("<style>{STYLESHEET}</style>");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head),
        )
        .with_context(settings)
        .launch(app::App);

    Ok(())
}
