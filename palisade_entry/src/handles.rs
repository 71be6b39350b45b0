// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-time registry of focus-capable host handles.

use hashbrown::HashMap;

use crate::effects::Effect;

/// Maps slot indices to opaque focus-capable host handles.
///
/// The state machine addresses slots by index; hosts usually address their
/// focusable UI elements by some handle type `K` (an element id, a widget
/// key). Populate this registry as slots are rendered, then use
/// [`SlotHandles::resolve`] to turn a [`Effect::Focus`] into the handle to
/// request focus on.
///
/// Registrations for slots that no longer exist (after a length change) are
/// harmless; they simply never resolve. Hosts that rebuild their slots from
/// scratch can [`SlotHandles::clear`] and re-register.
#[derive(Clone, Debug)]
pub struct SlotHandles<K> {
    map: HashMap<usize, K>,
}

impl<K> SlotHandles<K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registers `handle` for `slot`, returning the handle it replaced.
    pub fn register(&mut self, slot: usize, handle: K) -> Option<K> {
        self.map.insert(slot, handle)
    }

    /// Returns the handle registered for `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&K> {
        self.map.get(&slot)
    }

    /// Removes the registration for `slot`, returning it.
    pub fn remove(&mut self, slot: usize) -> Option<K> {
        self.map.remove(&slot)
    }

    /// Drops every registration.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Number of registered slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Copy> SlotHandles<K> {
    /// Resolves a focus effect to the registered host handle.
    ///
    /// Returns `None` for non-focus effects and for focus targets with no
    /// registered handle.
    #[must_use]
    pub fn resolve(&self, effect: &Effect) -> Option<K> {
        match effect {
            Effect::Focus(slot) => self.map.get(slot).copied(),
            Effect::Emit(_) => None,
        }
    }
}

impl<K> Default for SlotHandles<K> {
    fn default() -> Self {
        Self::new()
    }
}
