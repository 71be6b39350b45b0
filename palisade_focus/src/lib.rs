// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palisade Focus: focus navigation over a 1D strip of entry slots.
//!
//! This crate models the focus cursor of a segmented entry widget as a
//! combination of:
//!
//! - **Navigation intents** ([`Navigation`]) such as [`Navigation::Next`],
//!   [`Navigation::Prev`], or jumps to the ends of the strip.
//! - **Per-slot focus properties** ([`SlotFlags`]) such as enabled state and
//!   autofocus hints.
//! - A **read-only view of candidates** ([`FocusEntry`] / [`FocusStrip`])
//!   describing where focusable slots live along the strip.
//! - Pluggable **policies** ([`FocusPolicy`]) that select the next focused
//!   slot given an origin, an intent, and the candidate view.
//!
//! The core types are generic over the slot identifier `K`, so hosts can use
//! any small, copyable handle (a plain index, an element id, or an
//! application-specific key). Focus itself is an external UI property: this
//! crate only decides *which* slot should receive it; the host performs the
//! actual focus request on its own UI elements.
//!
//! ## Minimal example
//!
//! A three-slot strip traversed left to right:
//!
//! ```rust
//! use palisade_focus::{
//!     FocusEntry, FocusPolicy, FocusStrip, LinearPolicy, Navigation, SlotFlags, WrapMode,
//! };
//!
//! let entries: Vec<FocusEntry<u32>> = (0..3)
//!     .map(|i| FocusEntry {
//!         id: 10 + i,
//!         index: i as usize,
//!         flags: SlotFlags::default(),
//!     })
//!     .collect();
//!
//! let strip = FocusStrip { slots: &entries };
//! let policy = LinearPolicy { wrap: WrapMode::Never };
//!
//! // Next moves from the first slot to the second…
//! assert_eq!(policy.next(10, Navigation::Next, &strip), Some(11));
//! // …and stops at the end of the strip.
//! assert_eq!(policy.next(12, Navigation::Next, &strip), None);
//! ```
//!
//! Opt into [`WrapMode::Wrap`] for toolbars or pickers where the cursor
//! should cycle; a segmented code entry clamps at the ends and uses
//! [`WrapMode::Never`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Direction of focus navigation along the strip.
///
/// These values represent high-level intents such as arrow-key movement and
/// Home/End jumps. Concrete policies interpret them according to their own
/// rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move to the next slot in strip order (for example, Arrow-Right).
    Next,
    /// Move to the previous slot in strip order (for example, Arrow-Left).
    Prev,
    /// Jump to the first slot of the strip.
    First,
    /// Jump to the last slot of the strip.
    Last,
}

bitflags::bitflags! {
    /// Per-slot focus properties provided by the host.
    ///
    /// These are layered on top of the slot sequence: they do not affect the
    /// stored code values, only focus traversal.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SlotFlags: u8 {
        /// Slot can be targeted by focus. Disabled slots are skipped during
        /// traversal but remain part of the strip.
        const ENABLED   = 0b0000_0001;
        /// Slot is the preferred initial focus target when the strip is
        /// first activated.
        const AUTOFOCUS = 0b0000_0010;
    }
}

impl Default for SlotFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// A single focusable candidate within a [`FocusStrip`].
#[derive(Clone, Debug)]
pub struct FocusEntry<K> {
    /// Host handle for this slot.
    pub id: K,
    /// Position of the slot along the strip. Entries need not be supplied in
    /// index order; policies sort by this value.
    pub index: usize,
    /// Focus properties for this slot.
    pub flags: SlotFlags,
}

/// A read-only view of focusable candidates.
///
/// A `FocusStrip` is typically rebuilt by the host whenever the slot count or
/// enabled states change. Policies treat it as an immutable snapshot.
#[derive(Clone, Debug)]
pub struct FocusStrip<'a, K> {
    /// Focusable candidates visible to the current policy.
    pub slots: &'a [FocusEntry<K>],
}

/// Wrap behavior when traversal reaches the ends of the strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Do not wrap; reaching an end yields no next candidate.
    Never,
    /// Cycle around to the opposite end.
    Wrap,
}

/// Trait for focus traversal policies.
///
/// A policy receives a navigation intent, the current origin slot, and a
/// read-only view of candidates, and returns the next focused slot if any.
pub trait FocusPolicy<K>
where
    K: Copy + Eq,
{
    /// Compute the next focus target given an origin, intent, and strip.
    fn next(&self, origin: K, intent: Navigation, strip: &FocusStrip<'_, K>) -> Option<K>;
}

/// Index-ordered traversal policy.
///
/// Candidates are visited in ascending [`FocusEntry::index`] order; disabled
/// slots are skipped. When the origin is not part of the strip (for example,
/// focus was on a slot the host just removed), `Next` restarts at the first
/// enabled slot and `Prev` at the last.
#[derive(Copy, Clone, Debug)]
pub struct LinearPolicy {
    /// Wrap behavior at the ends of the strip.
    pub wrap: WrapMode,
}

impl Default for LinearPolicy {
    fn default() -> Self {
        Self {
            wrap: WrapMode::Never,
        }
    }
}

impl<K> FocusPolicy<K> for LinearPolicy
where
    K: Copy + Eq,
{
    fn next(&self, origin: K, intent: Navigation, strip: &FocusStrip<'_, K>) -> Option<K> {
        let ordered = enabled_in_order(strip);
        if ordered.is_empty() {
            return None;
        }

        match intent {
            Navigation::First => Some(strip.slots[ordered[0]].id),
            Navigation::Last => Some(strip.slots[ordered[ordered.len() - 1]].id),
            Navigation::Next | Navigation::Prev => {
                let origin_pos = ordered
                    .iter()
                    .position(|&i| strip.slots[i].id == origin);
                let pos = match (intent, origin_pos) {
                    (Navigation::Next, Some(pos)) => {
                        if pos + 1 < ordered.len() {
                            Some(pos + 1)
                        } else if self.wrap == WrapMode::Wrap {
                            Some(0)
                        } else {
                            None
                        }
                    }
                    (Navigation::Prev, Some(pos)) => {
                        if pos > 0 {
                            Some(pos - 1)
                        } else if self.wrap == WrapMode::Wrap {
                            Some(ordered.len() - 1)
                        } else {
                            None
                        }
                    }
                    (Navigation::Next, None) => Some(0),
                    (Navigation::Prev, None) => Some(ordered.len() - 1),
                    _ => None,
                };
                pos.map(|p| strip.slots[ordered[p]].id)
            }
        }
    }
}

/// Indices into `strip.slots` for enabled entries, in ascending slot order.
fn enabled_in_order<K>(strip: &FocusStrip<'_, K>) -> Vec<usize> {
    let mut ordered: Vec<usize> = strip
        .slots
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.flags.contains(SlotFlags::ENABLED).then_some(i))
        .collect();
    ordered.sort_by_key(|&i| strip.slots[i].index);
    ordered
}

/// Selects the initial focus target for a freshly activated strip.
///
/// Prefers the first enabled slot marked [`SlotFlags::AUTOFOCUS`]; falls back
/// to the first enabled slot, and returns `None` when nothing is focusable.
#[must_use]
pub fn autofocus_target<K>(strip: &FocusStrip<'_, K>) -> Option<K>
where
    K: Copy,
{
    let ordered = enabled_in_order(strip);
    ordered
        .iter()
        .find(|&&i| strip.slots[i].flags.contains(SlotFlags::AUTOFOCUS))
        .or_else(|| ordered.first())
        .map(|&i| strip.slots[i].id)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn strip_of(flags: &[SlotFlags]) -> Vec<FocusEntry<u32>> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &flags)| FocusEntry {
                id: i as u32,
                index: i,
                flags,
            })
            .collect()
    }

    const ON: SlotFlags = SlotFlags::ENABLED;

    #[test]
    fn next_and_prev_step_through_the_strip() {
        let entries = strip_of(&[ON, ON, ON]);
        let strip = FocusStrip { slots: &entries };
        let policy = LinearPolicy::default();

        assert_eq!(policy.next(0, Navigation::Next, &strip), Some(1));
        assert_eq!(policy.next(1, Navigation::Next, &strip), Some(2));
        assert_eq!(policy.next(2, Navigation::Prev, &strip), Some(1));
    }

    #[test]
    fn never_wrap_stops_at_edges() {
        let entries = strip_of(&[ON, ON]);
        let strip = FocusStrip { slots: &entries };
        let policy = LinearPolicy {
            wrap: WrapMode::Never,
        };

        assert_eq!(policy.next(1, Navigation::Next, &strip), None);
        assert_eq!(policy.next(0, Navigation::Prev, &strip), None);
    }

    #[test]
    fn wrap_cycles_around_the_ends() {
        let entries = strip_of(&[ON, ON, ON]);
        let strip = FocusStrip { slots: &entries };
        let policy = LinearPolicy {
            wrap: WrapMode::Wrap,
        };

        assert_eq!(policy.next(2, Navigation::Next, &strip), Some(0));
        assert_eq!(policy.next(0, Navigation::Prev, &strip), Some(2));
    }

    #[test]
    fn disabled_slots_are_skipped() {
        let entries = strip_of(&[ON, SlotFlags::empty(), ON]);
        let strip = FocusStrip { slots: &entries };
        let policy = LinearPolicy::default();

        assert_eq!(policy.next(0, Navigation::Next, &strip), Some(2));
        assert_eq!(policy.next(2, Navigation::Prev, &strip), Some(0));
    }

    #[test]
    fn first_and_last_ignore_the_origin() {
        let entries = strip_of(&[SlotFlags::empty(), ON, ON]);
        let strip = FocusStrip { slots: &entries };
        let policy = LinearPolicy::default();

        assert_eq!(policy.next(2, Navigation::First, &strip), Some(1));
        assert_eq!(policy.next(1, Navigation::Last, &strip), Some(2));
    }

    #[test]
    fn unknown_origin_restarts_at_an_end() {
        let entries = strip_of(&[ON, ON]);
        let strip = FocusStrip { slots: &entries };
        let policy = LinearPolicy::default();

        assert_eq!(policy.next(99, Navigation::Next, &strip), Some(0));
        assert_eq!(policy.next(99, Navigation::Prev, &strip), Some(1));
    }

    #[test]
    fn entries_are_visited_in_index_order_not_supply_order() {
        // Supply entries back to front; traversal still follows `index`.
        let entries = [
            FocusEntry {
                id: 7_u32,
                index: 2,
                flags: ON,
            },
            FocusEntry {
                id: 8,
                index: 0,
                flags: ON,
            },
            FocusEntry {
                id: 9,
                index: 1,
                flags: ON,
            },
        ];
        let strip = FocusStrip { slots: &entries };
        let policy = LinearPolicy::default();

        assert_eq!(policy.next(8, Navigation::Next, &strip), Some(9));
        assert_eq!(policy.next(9, Navigation::Next, &strip), Some(7));
    }

    #[test]
    fn empty_or_fully_disabled_strip_yields_nothing() {
        let strip: FocusStrip<'_, u32> = FocusStrip { slots: &[] };
        let policy = LinearPolicy::default();
        assert_eq!(policy.next(0, Navigation::Next, &strip), None);

        let entries = strip_of(&[SlotFlags::empty(), SlotFlags::empty()]);
        let strip = FocusStrip { slots: &entries };
        assert_eq!(policy.next(0, Navigation::Next, &strip), None);
        assert_eq!(autofocus_target(&strip), None);
    }

    #[test]
    fn autofocus_prefers_marked_slots() {
        let entries = strip_of(&[ON, ON | SlotFlags::AUTOFOCUS, ON]);
        let strip = FocusStrip { slots: &entries };
        assert_eq!(autofocus_target(&strip), Some(1));
    }

    #[test]
    fn autofocus_falls_back_to_first_enabled() {
        let entries = strip_of(&[SlotFlags::empty(), ON, ON]);
        let strip = FocusStrip { slots: &entries };
        assert_eq!(autofocus_target(&strip), Some(1));
    }

    #[test]
    fn disabled_autofocus_is_not_selected() {
        let entries = strip_of(&[ON, SlotFlags::AUTOFOCUS, ON]);
        let strip = FocusStrip { slots: &entries };
        // Slot 1 is marked but not enabled; fall back to slot 0.
        assert_eq!(autofocus_target(&strip), Some(0));
    }
}
