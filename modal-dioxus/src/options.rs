//! Presentation options for a modal.
//!
//! Options passed to `show` are layered over the defaults configured on the
//! [`ModalContainer`](crate::components::ModalContainer): every field left as
//! `None` on the request falls back to the container, and from there to the
//! built-in default.

use serde::Deserialize;

/// Where the dialog box is placed inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModalPosition {
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ModalPosition {
    pub const ALL: [ModalPosition; 5] = [
        ModalPosition::Center,
        ModalPosition::TopLeft,
        ModalPosition::TopRight,
        ModalPosition::BottomLeft,
        ModalPosition::BottomRight,
    ];

    /// Token used in the `blazored-modal-<token>` class.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
        }
    }

    /// Full CSS class carried by the container root.
    #[must_use]
    pub fn class(self) -> String {
        format!("blazored-modal-{}", self.token())
    }
}

/// Per-request presentation options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModalOptions {
    pub position: Option<ModalPosition>,
    pub class: Option<String>,
    pub hide_header: Option<bool>,
    pub hide_close_button: Option<bool>,
}

/// Options after layering a request over the container defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub position: ModalPosition,
    pub class: Option<String>,
    pub hide_header: bool,
    pub hide_close_button: bool,
}

impl ModalOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_position(mut self, position: ModalPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Extra class appended verbatim to the dialog wrapper.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn hide_header(mut self, hide: bool) -> Self {
        self.hide_header = Some(hide);
        self
    }

    #[must_use]
    pub fn hide_close_button(mut self, hide: bool) -> Self {
        self.hide_close_button = Some(hide);
        self
    }

    /// Fill unset fields from `defaults`, then from the built-in defaults.
    #[must_use]
    pub fn resolve(&self, defaults: &ModalOptions) -> ResolvedOptions {
        ResolvedOptions {
            position: self.position.or(defaults.position).unwrap_or_default(),
            class: self
                .class
                .clone()
                .or_else(|| defaults.class.clone())
                .filter(|class| !class.trim().is_empty()),
            hide_header: self.hide_header.or(defaults.hide_header).unwrap_or(false),
            hide_close_button: self
                .hide_close_button
                .or(defaults.hide_close_button)
                .unwrap_or(false),
        }
    }
}

impl ResolvedOptions {
    /// Class list of the container root.
    #[must_use]
    pub fn container_class(&self) -> String {
        format!(
            "blazored-modal-container blazored-modal-active {}",
            self.position.class()
        )
    }

    /// Class list of the dialog wrapper, custom class included.
    #[must_use]
    pub fn dialog_class(&self) -> String {
        match &self.class {
            Some(class) => format!("blazored-modal {class}"),
            None => "blazored-modal".to_string(),
        }
    }
}
