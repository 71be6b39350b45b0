// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The entry state machine.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use palisade_code::{Code, DEFAULT_LEN};
use palisade_focus::{FocusEntry, FocusPolicy, FocusStrip, LinearPolicy, Navigation, SlotFlags};
use smallvec::SmallVec;

use crate::effects::Effect;
use crate::event::{EntryEvent, Key};

/// Effect list returned by [`EntryState::handle`].
///
/// A single transition produces at most a focus move and an emission, so the
/// list never spills its inline capacity.
pub type Effects = SmallVec<[Effect; 2]>;

/// State machine for a segmented code-entry widget.
///
/// Owns the slot sequence and the focus cursor; converts host events into
/// [`Effect`]s for the host to apply. All transitions are synchronous and the
/// state is exclusively owned — no other actor writes to the sequence, and
/// hosts only observe it through emissions and the read accessors.
///
/// The focus cursor starts out unasserted ([`EntryState::focused`] is `None`)
/// and only takes a value once a transition requests focus; hosts wanting an
/// initial focus can consult [`palisade_focus::autofocus_target`] over their
/// own slot strip.
#[derive(Clone, Debug)]
pub struct EntryState {
    code: Code,
    focus: Option<usize>,
    enabled: bool,
}

impl EntryState {
    /// Creates an entry with `len` empty slots.
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            code: Code::new(len),
            focus: None,
            enabled: true,
        }
    }

    /// The current slot sequence.
    #[must_use]
    pub fn code(&self) -> &Code {
        &self.code
    }

    /// Number of slots.
    #[allow(
        clippy::len_without_is_empty,
        reason = "The slot count is fixed and nonzero; content emptiness is `Code::is_blank`"
    )]
    #[must_use]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// The last slot focus was requested on, or `None` before the first
    /// focus-moving interaction.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focus
    }

    /// Whether the entry currently accepts events.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the entry.
    ///
    /// Hosts disable it while a submitted code is being verified; every event
    /// handled in the disabled state is a no-op.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Processes one host event and returns the effects to apply, in order.
    ///
    /// Rejected input yields an empty list: the sequence did not change and
    /// no emission is due. See the crate docs for the full transition table.
    pub fn handle(&mut self, event: EntryEvent<'_>) -> Effects {
        let mut fx = Effects::new();
        if !self.enabled {
            return fx;
        }
        match event {
            EntryEvent::Input { slot, text } => {
                if slot >= self.code.len() {
                    return fx;
                }
                let Some(digit) = Code::accept(text) else {
                    return fx;
                };
                self.code.set(slot, digit);
                if let Some(next) = self.adjacent(slot, Navigation::Next) {
                    self.push_focus(&mut fx, next);
                }
                fx.push(Effect::Emit(self.code.clone()));
            }
            EntryEvent::Key { slot, key } => {
                if slot >= self.code.len() {
                    return fx;
                }
                match key {
                    Key::Backspace => {
                        if self.code.clear(slot) {
                            // Filled slot: clear in place, focus stays put.
                            fx.push(Effect::Emit(self.code.clone()));
                        } else if let Some(prev) = self.adjacent(slot, Navigation::Prev) {
                            // Empty slot: retreat without clearing the
                            // previous slot's digit.
                            self.push_focus(&mut fx, prev);
                        }
                    }
                    Key::Left => {
                        if let Some(prev) = self.adjacent(slot, Navigation::Prev) {
                            self.push_focus(&mut fx, prev);
                        }
                    }
                    Key::Right => {
                        if let Some(next) = self.adjacent(slot, Navigation::Next) {
                            self.push_focus(&mut fx, next);
                        }
                    }
                }
            }
            // Distribution ignores the receiving slot: pasted digits always
            // land from slot 0.
            EntryEvent::Paste { slot: _, text } => {
                let written = self.code.distribute(text);
                if written > 0 {
                    let target = written.min(self.code.len() - 1);
                    self.push_focus(&mut fx, target);
                    fx.push(Effect::Emit(self.code.clone()));
                }
            }
        }
        fx
    }

    /// Reconfigures the number of slots.
    ///
    /// A changed length resets every slot to empty and clears the focus
    /// cursor, without emitting; the host's change callback is only for user
    /// edits. An unchanged length is a no-op.
    pub fn set_len(&mut self, len: NonZeroUsize) {
        if len.get() == self.code.len() {
            return;
        }
        self.code.set_len(len);
        self.focus = None;
    }

    /// Empties every slot and clears the focus cursor, keeping the length.
    pub fn reset(&mut self) {
        self.code.reset();
        self.focus = None;
    }

    fn push_focus(&mut self, fx: &mut Effects, slot: usize) {
        self.focus = Some(slot);
        fx.push(Effect::Focus(slot));
    }

    /// Adjacent-slot movement via the linear policy, clamped at the ends.
    fn adjacent(&self, origin: usize, intent: Navigation) -> Option<usize> {
        let entries: Vec<FocusEntry<usize>> = (0..self.code.len())
            .map(|i| FocusEntry {
                id: i,
                index: i,
                flags: SlotFlags::default(),
            })
            .collect();
        let strip = FocusStrip { slots: &entries };
        LinearPolicy::default().next(origin, intent, &strip)
    }
}

impl Default for EntryState {
    fn default() -> Self {
        Self::new(DEFAULT_LEN)
    }
}
