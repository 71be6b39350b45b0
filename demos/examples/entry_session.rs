// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives an [`EntryState`] through a typical code-entry session and prints
//! the effect stream a host would apply: focus requests resolved through a
//! [`SlotHandles`] registry, and value emissions.

use palisade_code::DEFAULT_LEN;
use palisade_entry::{Effect, EntryEvent, EntryState, Key, Outcome, SlotHandles, effects};
use palisade_focus::{FocusEntry, FocusStrip, SlotFlags, autofocus_target};

/// Stand-in for a host UI element handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct ElementId(u64);

fn apply(label: &str, entry: &mut EntryState, handles: &SlotHandles<ElementId>, ev: EntryEvent<'_>) {
    let fx = entry.handle(ev);
    if fx.is_empty() {
        println!("{label:<24} -> (rejected, no effects)");
        return;
    }
    effects::run(&fx, &mut (), |effect, _| {
        match effect {
            Effect::Focus(slot) => {
                let element = handles.resolve(effect);
                println!("{label:<24} -> focus slot {slot} ({element:?})");
            }
            Effect::Emit(code) => {
                println!("{label:<24} -> emit {:?} (slots {:?})", code.text(), code.slots());
            }
        }
        Outcome::Continue
    });
}

fn main() {
    let mut entry = EntryState::new(DEFAULT_LEN);

    // Register a fake focusable element per slot, as a renderer would.
    let mut handles = SlotHandles::new();
    for slot in 0..entry.len() {
        handles.register(slot, ElementId(100 + slot as u64));
    }

    // Pick the initial focus target: the first slot is marked AUTOFOCUS.
    let strip: Vec<FocusEntry<usize>> = (0..entry.len())
        .map(|i| FocusEntry {
            id: i,
            index: i,
            flags: if i == 0 {
                SlotFlags::ENABLED | SlotFlags::AUTOFOCUS
            } else {
                SlotFlags::ENABLED
            },
        })
        .collect();
    let initial = autofocus_target(&FocusStrip { slots: &strip });
    println!("initial focus          -> slot {initial:?}");

    apply("type '4' at slot 0", &mut entry, &handles, EntryEvent::Input { slot: 0, text: "4" });
    apply("type 'x' at slot 1", &mut entry, &handles, EntryEvent::Input { slot: 1, text: "x" });
    apply("type '2' at slot 1", &mut entry, &handles, EntryEvent::Input { slot: 1, text: "2" });
    apply(
        "arrow-left at slot 2",
        &mut entry,
        &handles,
        EntryEvent::Key { slot: 2, key: Key::Left },
    );
    apply(
        "backspace at slot 1",
        &mut entry,
        &handles,
        EntryEvent::Key { slot: 1, key: Key::Backspace },
    );
    apply(
        "paste '98 76-54' at 1",
        &mut entry,
        &handles,
        EntryEvent::Paste { slot: 1, text: "98 76-54" },
    );

    println!(
        "final: {:?}, complete: {}, focused: {:?}",
        entry.code().text(),
        entry.code().is_complete(),
        entry.focused()
    );
}
