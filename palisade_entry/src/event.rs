// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing event types.

/// Non-text keys the entry widget reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Backspace: clear the focused slot, or retreat when it is empty.
    Backspace,
    /// Arrow-Left: move focus to the previous slot.
    Left,
    /// Arrow-Right: move focus to the next slot.
    Right,
}

/// A single host UI event, addressed to the slot that received it.
///
/// The `slot` index is the slot that had input focus when the host dispatched
/// the event. Out-of-range indices are tolerated as no-ops; they indicate the
/// host's slot registry and the configured length have drifted apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntryEvent<'a> {
    /// Direct text input at a slot, before any filtering.
    ///
    /// The text is passed through [`palisade_code::Code::accept`]: exactly
    /// one ASCII digit mutates the slot, anything else is dropped.
    Input {
        /// Slot that received the input.
        slot: usize,
        /// Raw input text as reported by the host.
        text: &'a str,
    },
    /// A non-text key press at a slot.
    Key {
        /// Slot that received the key press.
        slot: usize,
        /// Which key was pressed.
        key: Key,
    },
    /// A clipboard paste at a slot.
    ///
    /// Distribution always starts at slot 0; the receiving slot only
    /// determines where the host saw the event, not where digits land.
    Paste {
        /// Slot that received the paste.
        slot: usize,
        /// Raw pasted text.
        text: &'a str,
    },
}
