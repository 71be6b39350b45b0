// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effects produced by the state machine, and a helper to apply them.
//!
//! [`EntryState::handle`](crate::EntryState::handle) reports its outcome as a
//! short effect list rather than calling back into the host directly. The
//! host walks the list and performs each step against its own UI: request
//! focus on an element, invoke the change callback, and so on.
//!
//! [`run`] is a minimal walker for that list. It is deliberately small:
//!
//! - [`Outcome`] only controls whether the walk continues.
//! - The return value reports where the walk stopped, if it did.
//! - Any richer bookkeeping ("was a value emitted this round?") lives on the
//!   host state you pass in, not in [`Outcome`].
//!
//! ```rust
//! use palisade_entry::{effects, Effect, EntryEvent, EntryState, Outcome};
//!
//! let mut entry = EntryState::default();
//! let fx = entry.handle(EntryEvent::Input { slot: 0, text: "3" });
//!
//! let mut reported: Option<String> = None;
//! let stopped = effects::run(&fx, &mut reported, |effect, reported| {
//!     if let Effect::Emit(code) = effect {
//!         *reported = Some(code.text());
//!     }
//!     Outcome::Continue
//! });
//! assert!(stopped.is_none());
//! assert_eq!(reported.as_deref(), Some("3"));
//! ```

use palisade_code::Code;

/// One host-visible step resulting from an accepted mutation.
///
/// Effects are ordered: mutation-related focus moves come before the
/// emission, so a host applying them in sequence observes the same order the
/// widget's transitions define.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Request input focus on the slot at this index.
    Focus(usize),
    /// Report the updated code to the change callback.
    ///
    /// Carries the full positional projection: [`Code::slots`] preserves
    /// gaps, while [`Code::text`] (and `Display`) yields the concatenated
    /// digit string.
    Emit(Code),
}

/// Result of handling a single effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep walking the effect list.
    Continue,
    /// Abort immediately; later effects are not visited.
    Stop,
}

/// Walk an effect list and honor stop outcomes.
///
/// Returns `None` if the full list was visited, or `Some(effect)` with the
/// last visited entry if the handler returned [`Outcome::Stop`].
pub fn run<'a, H>(
    seq: &'a [Effect],
    host: &mut H,
    mut handler: impl FnMut(&Effect, &mut H) -> Outcome,
) -> Option<&'a Effect> {
    for effect in seq {
        match handler(effect, host) {
            Outcome::Continue => {}
            Outcome::Stop => return Some(effect),
        }
    }
    None
}
