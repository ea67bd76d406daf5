//! Notifications emitted while window state changes.
//!
//! Dispatch is synchronous: [`State`] calls every matching listener before the setter that
//! emitted the signal continues. Listeners get the state back mutably and may call further
//! setters. Such nested changes terminate because every setter returns early when the value
//! is already what was asked for.
use crate::models::{Handle, ScreenId, TagId, WindowHandle};
use crate::property::Property;
use crate::state::State;
use std::fmt;
use std::rc::Rc;

/// Nested dispatches beyond this depth are dropped.
pub const MAX_DISPATCH_DEPTH: usize = 64;

pub type Listener<H> = Rc<dyn Fn(&mut State<H>, &Signal<H>)>;

#[derive(Debug, Clone, PartialEq)]
pub enum Signal<H: Handle> {
    /// `property` is about to be set to `value`.
    ///
    /// This is advisory: listeners cannot veto or rewrite the change, it is committed as soon as
    /// they return.
    Request {
        window: WindowHandle<H>,
        property: Property,
        value: bool,
    },
    /// A new value of `property` has been committed.
    Property {
        window: WindowHandle<H>,
        property: Property,
    },
    Tagged {
        window: WindowHandle<H>,
        tag: TagId,
    },
    Untagged {
        window: WindowHandle<H>,
        tag: TagId,
    },
    /// The workarea of `screen` is stale and has to be recomputed.
    Workarea { screen: ScreenId },
}

impl<H: Handle> Signal<H> {
    /// The name listeners connect to, e.g. `request::fullscreen` or `property::above`.
    pub fn name(&self) -> String {
        match self {
            Self::Request { property, .. } => format!("request::{property}"),
            Self::Property { property, .. } => format!("property::{property}"),
            Self::Tagged { .. } => "tagged".to_owned(),
            Self::Untagged { .. } => "untagged".to_owned(),
            Self::Workarea { .. } => "property::workarea".to_owned(),
        }
    }

    /// The window the signal is about, if any.
    pub fn window(&self) -> Option<WindowHandle<H>> {
        match self {
            Self::Request { window, .. }
            | Self::Property { window, .. }
            | Self::Tagged { window, .. }
            | Self::Untagged { window, .. } => Some(*window),
            Self::Workarea { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

struct Connection<H: Handle> {
    id: ListenerId,
    name: Option<String>,
    listener: Listener<H>,
}

/// Registry of connected listeners.
pub struct Signals<H: Handle> {
    connections: Vec<Connection<H>>,
    next_id: usize,
    depth: usize,
}

impl<H: Handle> Signals<H> {
    fn connect(&mut self, name: Option<String>, listener: Listener<H>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.connections.push(Connection { id, name, listener });
        id
    }

    fn disconnect(&mut self, id: ListenerId) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| c.id != id);
        before != self.connections.len()
    }

    // Cloned out so listeners can connect or disconnect while a dispatch is running.
    fn listeners_for(&self, name: &str) -> Vec<Listener<H>> {
        self.connections
            .iter()
            .filter(|c| c.name.as_deref().map_or(true, |n| n == name))
            .map(|c| c.listener.clone())
            .collect()
    }
}

impl<H: Handle> Default for Signals<H> {
    fn default() -> Self {
        Self {
            connections: vec![],
            next_id: 0,
            depth: 0,
        }
    }
}

impl<H: Handle> fmt::Debug for Signals<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signals")
            .field("listeners", &self.connections.len())
            .field("depth", &self.depth)
            .finish()
    }
}

impl<H: Handle> State<H> {
    /// Listen to every signal.
    pub fn connect<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&mut State<H>, &Signal<H>) + 'static,
    {
        self.signals.connect(None, Rc::new(listener))
    }

    /// Listen to the signals called `name`, e.g. `property::minimized`.
    pub fn connect_signal<F>(&mut self, name: &str, listener: F) -> ListenerId
    where
        F: Fn(&mut State<H>, &Signal<H>) + 'static,
    {
        self.signals.connect(Some(name.to_owned()), Rc::new(listener))
    }

    /// Returns `false` if no listener was connected under `id`.
    pub fn disconnect(&mut self, id: ListenerId) -> bool {
        self.signals.disconnect(id)
    }

    pub(crate) fn emit(&mut self, signal: Signal<H>) {
        let name = signal.name();
        if self.signals.depth >= MAX_DISPATCH_DEPTH {
            tracing::error!(
                "Dropping {} for {:?}: listeners nested deeper than {}",
                name,
                signal.window(),
                MAX_DISPATCH_DEPTH
            );
            return;
        }
        tracing::trace!("Signal: {} {:?}", name, signal);
        let listeners = self.signals.listeners_for(&name);
        self.signals.depth += 1;
        for listener in listeners {
            listener(self, &signal);
        }
        self.signals.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MockHandle, WindowHandle};
    use std::cell::RefCell;

    #[test]
    fn signal_names_follow_the_property_names() {
        let window = WindowHandle::<MockHandle>(1);
        let request = Signal::Request {
            window,
            property: Property::MaximizedHorizontal,
            value: true,
        };
        assert_eq!(request.name(), "request::maximized_horizontal");
        let changed = Signal::Property {
            window,
            property: Property::BorderWidth,
        };
        assert_eq!(changed.name(), "property::border_width");
        assert_eq!(
            Signal::<MockHandle>::Workarea { screen: 1 }.name(),
            "property::workarea"
        );
        assert_eq!(Signal::<MockHandle>::Workarea { screen: 1 }.window(), None);
    }

    #[test]
    fn named_listeners_only_see_their_signal() {
        let mut state = State::new_test(vec![]);
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = seen.clone();
        state.connect_signal("property::workarea", move |_, signal| {
            sink.borrow_mut().push(signal.name());
        });
        state.emit(Signal::Property {
            window: WindowHandle(1),
            property: Property::Sticky,
        });
        state.emit(Signal::Workarea { screen: 4 });
        assert_eq!(*seen.borrow(), vec!["property::workarea".to_owned()]);
    }

    #[test]
    fn disconnected_listeners_are_not_called() {
        let mut state = State::new_test(vec![]);
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let id = state.connect(move |_, _| *counter.borrow_mut() += 1);
        state.emit(Signal::Workarea { screen: 1 });
        assert!(state.disconnect(id));
        assert!(!state.disconnect(id));
        state.emit(Signal::Workarea { screen: 1 });
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn runaway_listeners_are_cut_off() {
        let mut state = State::new_test(vec![]);
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        state.connect(move |state, signal| {
            *counter.borrow_mut() += 1;
            state.emit(signal.clone());
        });
        state.emit(Signal::Workarea { screen: 1 });
        assert_eq!(*calls.borrow(), MAX_DISPATCH_DEPTH);
    }
}
