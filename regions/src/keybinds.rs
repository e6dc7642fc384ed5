//! Key sequence bindings with scoped registration.
//!
//! A binding lives exactly as long as the [`KeybindGuard`] returned by
//! [`KeybindRegistry::bind`]. Components take a guard on mount and drop it on
//! unmount, so repeated mount/unmount cycles never leave stale bindings.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};

use crate::event::KeyCombo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u64);

struct Binding<A> {
    id: BindingId,
    keys: Vec<KeyCombo>,
    action: A,
}

struct Registry<A> {
    next_id: u64,
    bindings: Vec<Binding<A>>,
    /// Keys typed so far that prefix some longer binding.
    pending: Vec<KeyCombo>,
}

trait Unbind {
    fn unbind(&self, id: BindingId);
}

impl<A> Unbind for RefCell<Registry<A>> {
    fn unbind(&self, id: BindingId) {
        match self.try_borrow_mut() {
            Ok(mut registry) => {
                registry.bindings.retain(|binding| binding.id != id);
                registry.pending.clear();
                debug!("unbound {id:?}");
            }
            Err(_) => warn!("keybind registry busy, {id:?} not released"),
        }
    }
}

/// Result of feeding one key into the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMatch<A> {
    /// A sequence completed.
    Action(A),
    /// The keys so far prefix a longer binding.
    Pending,
    Unbound,
}

/// Shared, single-threaded registry of key sequences.
pub struct KeybindRegistry<A> {
    inner: Rc<RefCell<Registry<A>>>,
}

impl<A> Clone for KeybindRegistry<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A> Default for KeybindRegistry<A> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                bindings: Vec::new(),
                pending: Vec::new(),
            })),
        }
    }
}

impl<A> fmt::Debug for KeybindRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeybindRegistry")
            .field("bindings", &self.len())
            .finish()
    }
}

impl<A: Clone + 'static> KeybindRegistry<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `keys` (a single combo or a sequence) to produce `action`.
    pub fn bind(&self, keys: impl Into<Vec<KeyCombo>>, action: A) -> KeybindGuard {
        let keys = keys.into();
        debug_assert!(!keys.is_empty(), "empty key sequence");

        let id = {
            let mut registry = self.inner.borrow_mut();
            let id = BindingId(registry.next_id);
            registry.next_id += 1;
            debug!("bound {id:?} to {keys:?}");
            registry.bindings.push(Binding { id, keys, action });
            id
        };

        let inner: Rc<dyn Unbind> = self.inner.clone();
        KeybindGuard {
            id,
            registry: Rc::downgrade(&inner),
        }
    }

    /// Feed one key press.
    pub fn feed(&self, combo: KeyCombo) -> KeyMatch<A> {
        let mut registry = self.inner.borrow_mut();
        let continues_sequence = !registry.pending.is_empty();
        registry.pending.push(combo);

        match registry.lookup() {
            KeyMatch::Unbound if continues_sequence => {
                // The key that broke the sequence may start a new one.
                registry.pending.push(combo);
                registry.lookup()
            }
            other => other,
        }
    }

    /// Drop any partially typed sequence.
    pub fn reset(&self) {
        self.inner.borrow_mut().pending.clear();
    }

    pub fn is_pending(&self) -> bool {
        !self.inner.borrow().pending.is_empty()
    }
}

impl<A> KeybindRegistry<A> {
    pub fn len(&self) -> usize {
        self.inner.borrow().bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A: Clone> Registry<A> {
    /// Match `pending` against every binding, clearing it unless a longer
    /// binding is still reachable.
    fn lookup(&mut self) -> KeyMatch<A> {
        let mut prefix = false;
        let mut exact = None;

        for binding in &self.bindings {
            trace!("comparing {:?} with {:?}", self.pending, binding.keys);
            if binding.keys == self.pending {
                // Later bindings shadow earlier ones.
                exact = Some(binding.action.clone());
            } else if binding.keys.len() > self.pending.len()
                && binding.keys[..self.pending.len()] == self.pending[..]
            {
                prefix = true;
            }
        }

        if let Some(action) = exact {
            self.pending.clear();
            KeyMatch::Action(action)
        } else if prefix {
            KeyMatch::Pending
        } else {
            self.pending.clear();
            KeyMatch::Unbound
        }
    }
}

/// Keeps a binding registered; dropping it unregisters the binding.
#[must_use = "the binding is released as soon as the guard is dropped"]
pub struct KeybindGuard {
    id: BindingId,
    registry: Weak<dyn Unbind>,
}

impl KeybindGuard {
    pub fn id(&self) -> BindingId {
        self.id
    }
}

impl fmt::Debug for KeybindGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeybindGuard").field(&self.id).finish()
    }
}

impl Drop for KeybindGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.unbind(self.id);
        }
    }
}
