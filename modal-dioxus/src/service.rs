//! The modal service: the single active modal request of a UI session.
//!
//! One `ModalService` is created per session and provided through Dioxus
//! context (see [`use_modal_provider`](crate::hooks::use_modal_provider)).
//! `show*` replaces the active request, `close` clears it, and every change
//! is pushed synchronously to the subscribers, which in practice is the one
//! mounted [`ModalContainer`](crate::components::ModalContainer).
//!
//! Everything runs on the UI thread, so state lives in `Rc<RefCell<_>>`.
//! Borrows are never held while subscriber callbacks run, which lets a
//! callback call back into the service.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use slotmap::SlotMap;

use crate::component::{ComponentType, ModalComponent, ModalRegistry};
use crate::error::ModalError;
use crate::options::ModalOptions;
use crate::parameters::ModalParameters;

slotmap::new_key_type! {
    /// Key of a live subscription.
    pub struct SubscriptionId;
}

/// What the container is asked to display.
#[derive(Debug, Clone)]
pub struct ModalRequest {
    /// Increases with every show; the container keys the child on it.
    pub id: u64,
    pub component: ComponentType,
    pub title: String,
    pub options: ModalOptions,
    pub parameters: ModalParameters,
}

/// Change notification delivered to subscribers.
#[derive(Debug, Clone)]
pub enum ModalEvent {
    Shown(ModalRequest),
    Closed,
}

type Callback = Rc<dyn Fn(&ModalEvent)>;

#[derive(Default)]
struct ServiceState {
    request: Option<ModalRequest>,
    next_id: u64,
    subscribers: SlotMap<SubscriptionId, Callback>,
    registry: ModalRegistry,
}

/// Handle to the modal state of one UI session. Clones share the state.
#[derive(Clone, Default)]
pub struct ModalService {
    state: Rc<RefCell<ServiceState>>,
}

impl ModalService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `T` available to [`show_named`](Self::show_named).
    pub fn register<T: ModalComponent>(&self) -> &Self {
        self.state.borrow_mut().registry.register::<T>();
        log::debug!("registered modal component {}", T::name());
        self
    }

    /// Show `T` with a title and default options.
    pub fn show<T: ModalComponent>(&self, title: impl Into<String>) {
        self.show_component(
            ComponentType::of::<T>(),
            title,
            ModalParameters::new(),
            ModalOptions::default(),
        );
    }

    pub fn show_with_options<T: ModalComponent>(
        &self,
        title: impl Into<String>,
        options: ModalOptions,
    ) {
        self.show_component(
            ComponentType::of::<T>(),
            title,
            ModalParameters::new(),
            options,
        );
    }

    pub fn show_with_parameters<T: ModalComponent>(
        &self,
        title: impl Into<String>,
        parameters: ModalParameters,
    ) {
        self.show_component(
            ComponentType::of::<T>(),
            title,
            parameters,
            ModalOptions::default(),
        );
    }

    pub fn show_with<T: ModalComponent>(
        &self,
        title: impl Into<String>,
        parameters: ModalParameters,
        options: ModalOptions,
    ) {
        self.show_component(ComponentType::of::<T>(), title, parameters, options);
    }

    /// Show a component registered under `name`.
    ///
    /// An unknown name leaves the current modal untouched and notifies no one.
    pub fn show_named(
        &self,
        name: &str,
        title: impl Into<String>,
        parameters: ModalParameters,
        options: ModalOptions,
    ) -> Result<(), ModalError> {
        let lookup = self.state.borrow().registry.lookup(name);
        let component = lookup.inspect_err(|err| log::warn!("cannot show modal: {err}"))?;
        self.show_component(component, title, parameters, options);
        Ok(())
    }

    /// Replace the active request and notify subscribers.
    pub fn show_component(
        &self,
        component: ComponentType,
        title: impl Into<String>,
        parameters: ModalParameters,
        options: ModalOptions,
    ) {
        let id = {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            state.next_id
        };
        let request = ModalRequest {
            id,
            component,
            title: title.into(),
            options,
            parameters,
        };
        log::debug!(
            "showing modal {} (title: {:?}, parameters: {:?})",
            request.component.name(),
            request.title,
            request.parameters
        );
        self.state.borrow_mut().request = Some(request.clone());
        self.notify(&ModalEvent::Shown(request));
    }

    /// Clear the active request. Does nothing when no modal is shown.
    pub fn close(&self) {
        let closed = self.state.borrow_mut().request.take();
        if let Some(request) = closed {
            log::debug!("closing modal {}", request.component.name());
            self.notify(&ModalEvent::Closed);
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<ModalRequest> {
        self.state.borrow().request.clone()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.borrow().request.is_some()
    }

    /// Register `callback` for change notifications until the returned
    /// guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&ModalEvent) + 'static) -> Subscription {
        let id = self
            .state
            .borrow_mut()
            .subscribers
            .insert(Rc::new(callback));
        log::debug!("modal subscriber {id:?} added");
        Subscription {
            id,
            state: Rc::downgrade(&self.state),
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    fn notify(&self, event: &ModalEvent) {
        // Snapshot so callbacks can show, close or unsubscribe.
        let callbacks: Vec<Callback> = self.state.borrow().subscribers.values().cloned().collect();
        for callback in callbacks {
            callback(event);
        }
    }
}

impl PartialEq for ModalService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for ModalService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ModalService")
            .field("request", &state.request)
            .field("subscribers", &state.subscribers.len())
            .field("registry", &state.registry.names())
            .finish()
    }
}

/// Guard returned by [`ModalService::subscribe`]. Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    state: Weak<RefCell<ServiceState>>,
}

impl Subscription {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().subscribers.remove(self.id);
            log::debug!("modal subscriber {:?} removed", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::prelude::*;

    use super::*;

    struct Body;

    impl ModalComponent for Body {
        fn name() -> &'static str {
            "body"
        }

        fn render(_parameters: &ModalParameters) -> Element {
            rsx! { p { "body" } }
        }
    }

    /// Record events as short strings.
    fn record(service: &ModalService) -> (Subscription, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let subscription = service.subscribe(move |event| {
            let entry = match event {
                ModalEvent::Shown(request) => format!("shown:{}", request.title),
                ModalEvent::Closed => "closed".to_string(),
            };
            sink.borrow_mut().push(entry);
        });
        (subscription, log)
    }

    #[test]
    fn starts_hidden() {
        let service = ModalService::new();
        assert!(!service.is_visible());
        assert!(service.current().is_none());
    }

    #[test]
    fn show_sets_request_and_notifies() {
        let service = ModalService::new();
        let (_sub, log) = record(&service);

        service.show_with::<Body>(
            "Hello",
            ModalParameters::new().with("Title", "x".to_string()),
            ModalOptions::new().hide_header(true),
        );

        let request = service.current().expect("modal shown");
        assert_eq!(request.title, "Hello");
        assert_eq!(request.component, ComponentType::of::<Body>());
        assert_eq!(request.options.hide_header, Some(true));
        assert!(request.parameters.contains("Title"));
        assert_eq!(*log.borrow(), ["shown:Hello"]);
    }

    #[test]
    fn second_show_replaces_the_first() {
        let service = ModalService::new();
        let (_sub, log) = record(&service);

        service.show::<Body>("first");
        service.show::<Body>("second");

        assert_eq!(service.current().expect("shown").title, "second");
        assert_eq!(service.current().expect("shown").id, 2);
        assert_eq!(*log.borrow(), ["shown:first", "shown:second"]);
    }

    #[test]
    fn close_is_idempotent() {
        let service = ModalService::new();
        let (_sub, log) = record(&service);

        service.close();
        service.show::<Body>("t");
        service.close();
        service.close();

        assert!(!service.is_visible());
        assert_eq!(*log.borrow(), ["shown:t", "closed"]);
    }

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let service = ModalService::new();
        let (sub, log) = record(&service);
        assert_eq!(service.subscriber_count(), 1);

        drop(sub);
        service.show::<Body>("unseen");

        assert_eq!(service.subscriber_count(), 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn guard_outliving_service_is_harmless() {
        let service = ModalService::new();
        let (sub, _log) = record(&service);
        drop(service);
        drop(sub);
    }

    #[test]
    fn show_named_uses_the_registry() {
        let service = ModalService::new();
        service.register::<Body>();
        let (_sub, log) = record(&service);

        service
            .show_named("body", "by name", ModalParameters::new(), ModalOptions::new())
            .expect("registered");

        assert_eq!(service.current().expect("shown").component.name(), "body");
        assert_eq!(*log.borrow(), ["shown:by name"]);
    }

    #[test]
    fn unknown_name_leaves_state_unchanged() {
        let service = ModalService::new();
        let (_sub, log) = record(&service);
        service.show::<Body>("kept");

        let err = service
            .show_named("nope", "lost", ModalParameters::new(), ModalOptions::new())
            .expect_err("not registered");

        assert_eq!(err, ModalError::UnknownComponent("nope".to_string()));
        assert_eq!(service.current().expect("still shown").title, "kept");
        assert_eq!(*log.borrow(), ["shown:kept"]);
    }

    #[test]
    fn callbacks_may_reenter_the_service() {
        let service = ModalService::new();
        let inner = service.clone();
        let _sub = service.subscribe(move |event| {
            if let ModalEvent::Shown(request) = event {
                if request.title == "auto-close" {
                    inner.close();
                }
            }
        });

        service.show::<Body>("auto-close");
        assert!(!service.is_visible());
    }

    #[test]
    fn clones_share_state() {
        let service = ModalService::new();
        let other = service.clone();
        other.show::<Body>("shared");
        assert!(service.is_visible());
        assert_eq!(service, other);
        assert_ne!(service, ModalService::new());
    }
}
