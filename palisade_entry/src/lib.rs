// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palisade Entry: the segmented code-entry state machine.
//!
//! ## Overview
//!
//! This crate turns host UI events into slot mutations, focus transitions,
//! and value emissions for a fixed-length code-entry widget. It owns the
//! [`palisade_code::Code`] sequence and the focus cursor; the host owns the
//! actual rendered slots and performs focus requests on them.
//!
//! Feed an [`EntryState`] one [`EntryEvent`] per host UI event. Each call
//! returns a short list of [`Effect`]s — `Focus(slot)` and `Emit(code)` — in
//! the order they should be applied. Rejected input (non-digits, over-length
//! direct entry, digit-free paste payloads) produces an empty list: nothing
//! mutated, nothing to do. There are no error states.
//!
//! ## Transitions
//!
//! - *Digit entered at slot `i`*: accepted via [`palisade_code::Code::accept`];
//!   the slot is overwritten, focus advances to `i + 1` unless `i` is the
//!   last slot, and the value is emitted.
//! - *Backspace at slot `i`*: on an empty slot, focus retreats to `i - 1`
//!   without clearing anything; on a filled slot, the slot is cleared in
//!   place, focus stays, and the value is emitted.
//! - *Arrow-Left / Arrow-Right*: focus moves to the adjacent slot, clamped at
//!   the ends of the strip. No mutation, no emission.
//! - *Paste at any slot*: digits are distributed from slot 0 regardless of
//!   which slot received the paste; focus lands on `min(digits, N - 1)` and
//!   the value is emitted. A payload with no digits is a complete no-op.
//! - *Length reconfiguration* ([`EntryState::set_len`]): every slot resets to
//!   empty and the focus cursor clears. Deliberately **not** emitted.
//!
//! ## Minimal example
//!
//! ```rust
//! use palisade_entry::{Effect, EntryEvent, EntryState};
//!
//! let mut entry = EntryState::default(); // six slots
//!
//! // Type "4" into the first slot.
//! let effects = entry.handle(EntryEvent::Input { slot: 0, text: "4" });
//! assert_eq!(effects[0], Effect::Focus(1));
//! match &effects[1] {
//!     Effect::Emit(code) => assert_eq!(code.text(), "4"),
//!     other => panic!("expected emit, got {other:?}"),
//! }
//!
//! // Paste the rest; distribution always starts at slot 0.
//! let effects = entry.handle(EntryEvent::Paste { slot: 1, text: "412 335" });
//! assert_eq!(effects[0], Effect::Focus(5));
//! ```
//!
//! ## Wiring to host elements
//!
//! [`Effect::Focus`] names a slot index. Hosts that address their
//! focus-capable elements through opaque handles can register them in a
//! [`SlotHandles`] map at render time and resolve effects through it; see
//! [`SlotHandles::resolve`]. The [`effects::run`] helper walks an effect list
//! and honors early stops, mirroring the usual dispatcher shape.
//!
//! All processing is synchronous and single-threaded: every transition
//! happens inside the host's event handler, and the state is exclusively
//! owned by the [`EntryState`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod effects;
mod entry;
mod event;
mod handles;

pub use effects::{Effect, Outcome};
pub use entry::{Effects, EntryState};
pub use event::{EntryEvent, Key};
pub use handles::SlotHandles;
