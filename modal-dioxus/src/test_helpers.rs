//! Test helpers for rendering the modal container.
//!
//! A [`Harness`] mounts a `ModalContainer` in a headless `VirtualDom`,
//! lets a test drive the service, and renders the result to HTML with
//! `dioxus-ssr`. Queries use CSS selectors through `scraper`.

use dioxus::prelude::*;
use scraper::{ElementRef, Html, Selector};

use crate::components::ModalContainer;
use crate::{ModalComponent, ModalOptions, ModalParameters, ModalService};

/// Title rendered by [`TestComponent`] when no `Title` parameter is passed.
pub const DEFAULT_TITLE: &str = "My Test Component";

/// Modal body used by the tests: renders its `Title` input in an `h1`.
pub struct TestComponent;

impl ModalComponent for TestComponent {
    fn name() -> &'static str {
        "test-component"
    }

    fn render(parameters: &ModalParameters) -> Element {
        let title = parameters.get_or("Title", DEFAULT_TITLE.to_string())?;
        rsx! { TestComponentView { title } }
    }
}

#[component]
pub fn TestComponentView(title: String) -> Element {
    rsx! {
        div {
            class: "test-component",
            h1 { "{title}" }
        }
    }
}

/// `TestComponent` rendered on its own, outside any modal.
#[component]
pub fn StandaloneTestComponent() -> Element {
    rsx! { TestComponentView { title: DEFAULT_TITLE.to_string() } }
}

/// Container defaults injected into the harness root.
#[derive(Clone)]
struct ContainerDefaults(ModalOptions);

#[component]
fn Host() -> Element {
    let ContainerDefaults(defaults) = use_context::<ContainerDefaults>();
    rsx! {
        ModalContainer {
            position: defaults.position,
            class: defaults.class,
            hide_header: defaults.hide_header,
            hide_close_button: defaults.hide_close_button,
        }
    }
}

/// Class of the fallback rendered when the modal body fails.
pub const ERROR_FALLBACK_CLASS: &str = "modal-render-error";

#[component]
fn BoundaryHost() -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_| rsx! {
                div { class: ERROR_FALLBACK_CLASS, "modal failed to render" }
            },
            Host {}
        }
    }
}

/// A mounted modal container and the service it listens to.
pub struct Harness {
    pub dom: VirtualDom,
    pub service: ModalService,
}

impl Harness {
    pub fn new() -> Self {
        Self::mount(ModalService::new(), ModalOptions::default())
    }

    /// Mount a container with container-wide defaults.
    pub fn with_defaults(defaults: ModalOptions) -> Self {
        Self::mount(ModalService::new(), defaults)
    }

    /// Mount a container wrapped in an error boundary.
    pub fn with_error_boundary() -> Self {
        Self::mount_root(BoundaryHost, ModalService::new(), ModalOptions::default())
    }

    /// Mount a container on an existing service.
    pub fn mount(service: ModalService, defaults: ModalOptions) -> Self {
        Self::mount_root(Host, service, defaults)
    }

    fn mount_root(root: fn() -> Element, service: ModalService, defaults: ModalOptions) -> Self {
        let mut dom = VirtualDom::new(root)
            .with_root_context(service.clone())
            .with_root_context(ContainerDefaults(defaults));
        dom.rebuild_in_place();
        Self { dom, service }
    }

    /// Run `action` against the service inside the runtime, then apply the
    /// resulting re-renders.
    pub fn act(&mut self, action: impl FnOnce(&ModalService)) {
        let service = self.service.clone();
        self.dom.in_runtime(|| action(&service));
        self.dom.render_immediate_to_vec();
        // A body that fails marks its boundary dirty during the first pass.
        self.dom.render_immediate_to_vec();
    }

    /// Current markup as an HTML string.
    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Current markup parsed for selector queries.
    pub fn document(&self) -> Html {
        Html::parse_fragment(&self.html())
    }
}

/// Render a component on its own and parse the markup.
pub fn render_standalone(component: fn() -> Element) -> Html {
    let mut dom = VirtualDom::new(component);
    dom.rebuild_in_place();
    Html::parse_fragment(&dioxus_ssr::render(&dom))
}

/// All elements matching `selector`.
pub fn find_all<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    let parsed = Selector::parse(selector).expect("selector should parse");
    document.select(&parsed).collect()
}

/// The first element matching `selector`; panics when there is none.
pub fn find<'a>(document: &'a Html, selector: &str) -> ElementRef<'a> {
    find_all(document, selector)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("no element matches `{selector}`"))
}

/// Class tokens of `element`, in document order.
pub fn classes<'a>(element: &ElementRef<'a>) -> Vec<&'a str> {
    element.value().classes().collect()
}
