// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slot sequence and its mutation operations.

use alloc::string::String;
use core::fmt;
use core::num::NonZeroUsize;

use smallvec::SmallVec;

/// Default number of slots when none is configured.
///
/// Six digits matches the most common one-time-code length.
pub const DEFAULT_LEN: NonZeroUsize = NonZeroUsize::new(6).unwrap();

/// Inline slot capacity. Codes longer than this spill to the heap.
const INLINE_SLOTS: usize = 8;

/// A fixed-length ordered sequence of single-digit slots.
///
/// Each slot holds either nothing or exactly one ASCII digit (`'0'`–`'9'`).
/// The sequence length is established at construction (or by
/// [`Code::set_len`]) and every slot access is bounds-checked: out-of-range
/// indices are no-ops for mutation and `None` for reads.
///
/// All mutation methods uphold two invariants:
///
/// - the sequence length is always exactly the configured `N`,
/// - no slot ever holds more than one character, and never a non-digit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Code {
    slots: SmallVec<[Option<char>; INLINE_SLOTS]>,
}

impl Code {
    /// Creates a code with `len` empty slots.
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        let mut slots = SmallVec::new();
        slots.resize(len.get(), None);
        Self { slots }
    }

    /// Number of slots in the sequence.
    #[allow(
        clippy::len_without_is_empty,
        reason = "The length is fixed and nonzero; content emptiness is `is_blank`"
    )]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Filters a direct-input string down to a single accepted digit.
    ///
    /// Accepts exactly one ASCII digit. Anything else is rejected outright:
    /// non-digits, the empty string, and — deliberately — input of length two
    /// or more, which is dropped entirely rather than truncated to its first
    /// character. Multi-character entry is the paste path's job
    /// ([`Code::distribute`]); reaching this filter with more than one
    /// character (IME composition, programmatic dispatch) is not a paste.
    #[must_use]
    pub fn accept(input: &str) -> Option<char> {
        let mut chars = input.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        first.is_ascii_digit().then_some(first)
    }

    /// Returns the digit held by `slot`, or `None` when the slot is empty or
    /// out of range.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<char> {
        self.slots.get(slot).copied().flatten()
    }

    /// Writes `digit` into `slot`, overwriting any previous value.
    ///
    /// Returns `false` without mutating when `slot` is out of range or
    /// `digit` is not an ASCII digit. Callers normally validate input through
    /// [`Code::accept`] first; the redundant check here keeps the slot
    /// invariant local to this type.
    pub fn set(&mut self, slot: usize, digit: char) -> bool {
        if !digit.is_ascii_digit() {
            debug_assert!(false, "Code::set expects an ASCII digit; got {digit:?}");
            return false;
        }
        match self.slots.get_mut(slot) {
            Some(s) => {
                *s = Some(digit);
                true
            }
            None => false,
        }
    }

    /// Empties `slot`, returning `true` if it previously held a digit.
    pub fn clear(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(s) => s.take().is_some(),
            None => false,
        }
    }

    /// Distributes pasted text into the sequence.
    ///
    /// Non-digit characters are stripped, the remainder is truncated to the
    /// sequence length, and the surviving digits are written starting at slot
    /// 0 — always slot 0, regardless of where the paste landed. Slots beyond
    /// the written range keep their previous values.
    ///
    /// Returns the number of digits written; `0` means the text contained no
    /// digits and nothing was mutated.
    pub fn distribute(&mut self, text: &str) -> usize {
        let mut written = 0;
        for ch in text
            .chars()
            .filter(char::is_ascii_digit)
            .take(self.slots.len())
        {
            self.slots[written] = Some(ch);
            written += 1;
        }
        written
    }

    /// Reconfigures the sequence length.
    ///
    /// Changing the length resets every slot to empty, discarding prior
    /// content. Setting the length it already has is a no-op.
    pub fn set_len(&mut self, len: NonZeroUsize) {
        if len.get() == self.slots.len() {
            return;
        }
        self.slots.clear();
        self.slots.resize(len.get(), None);
    }

    /// Empties every slot, keeping the configured length.
    pub fn reset(&mut self) {
        self.slots.fill(None);
    }

    /// Positional view of the sequence: one entry per slot, gaps preserved.
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Number of slots currently holding a digit.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns `true` when every slot holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns `true` when no slot holds a digit.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Concatenation of the filled slots, in order.
    ///
    /// Empty slots contribute nothing, so the result is a digit string of
    /// length [`Code::filled`]. Use [`Code::slots`] when positions matter.
    #[must_use]
    pub fn text(&self) -> String {
        self.slots.iter().flatten().collect()
    }
}

impl Default for Code {
    fn default() -> Self {
        Self::new(DEFAULT_LEN)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.slots.iter().flatten() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use core::num::NonZeroUsize;

    use super::{Code, DEFAULT_LEN};

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn new_code_has_n_empty_slots() {
        for n in 1..10 {
            let code = Code::new(len(n));
            assert_eq!(code.len(), n);
            assert!(code.is_blank());
            assert_eq!(code.slots().len(), n);
            assert!(code.slots().iter().all(Option::is_none));
        }
    }

    #[test]
    fn default_len_is_six() {
        let code = Code::default();
        assert_eq!(code.len(), DEFAULT_LEN.get());
    }

    #[test]
    fn accept_takes_single_digits_only() {
        assert_eq!(Code::accept("0"), Some('0'));
        assert_eq!(Code::accept("9"), Some('9'));
        assert_eq!(Code::accept("a"), None);
        assert_eq!(Code::accept(" "), None);
        assert_eq!(Code::accept(""), None);
    }

    #[test]
    fn accept_drops_multi_character_input_entirely() {
        // Length >= 2 is rejected, never truncated to its first digit.
        assert_eq!(Code::accept("12"), None);
        assert_eq!(Code::accept("1a"), None);
        assert_eq!(Code::accept("123456"), None);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut code = Code::new(len(4));
        assert!(code.set(2, '5'));
        assert_eq!(code.get(2), Some('5'));
        assert_eq!(code.get(1), None);
        assert_eq!(code.text(), "5");
    }

    #[test]
    fn set_out_of_range_is_a_no_op() {
        let mut code = Code::new(len(3));
        assert!(!code.set(3, '1'));
        assert!(code.is_blank());
    }

    #[test]
    fn clear_reports_prior_occupancy() {
        let mut code = Code::new(len(3));
        code.set(1, '4');
        assert!(code.clear(1));
        assert!(!code.clear(1));
        assert!(!code.clear(9));
        assert!(code.is_blank());
    }

    #[test]
    fn distribute_strips_non_digits_and_fills_from_zero() {
        let mut code = Code::new(len(6));
        let written = code.distribute("12a3");
        assert_eq!(written, 3);
        assert_eq!(
            code.slots(),
            &[Some('1'), Some('2'), Some('3'), None, None, None]
        );
        assert_eq!(code.text(), "123");
    }

    #[test]
    fn distribute_truncates_to_sequence_length() {
        let mut code = Code::new(len(6));
        let written = code.distribute("0123456789");
        assert_eq!(written, 6);
        assert!(code.is_complete());
        assert_eq!(code.text(), "012345");
    }

    #[test]
    fn distribute_overwrites_prefix_and_keeps_tail() {
        let mut code = Code::new(len(6));
        code.set(0, '9');
        code.set(4, '8');
        let written = code.distribute("12");
        assert_eq!(written, 2);
        assert_eq!(
            code.slots(),
            &[Some('1'), Some('2'), None, None, Some('8'), None]
        );
    }

    #[test]
    fn distribute_without_digits_mutates_nothing() {
        let mut code = Code::new(len(6));
        code.set(1, '7');
        let before = code.clone();
        assert_eq!(code.distribute("abc- !"), 0);
        assert_eq!(code, before);
    }

    #[test]
    fn set_len_change_resets_all_slots() {
        let mut code = Code::new(len(4));
        code.distribute("1234");
        assert!(code.is_complete());

        code.set_len(len(6));
        assert_eq!(code.len(), 6);
        assert!(code.is_blank());
    }

    #[test]
    fn set_len_same_length_keeps_content() {
        let mut code = Code::new(len(4));
        code.distribute("12");
        code.set_len(len(4));
        assert_eq!(code.text(), "12");
    }

    #[test]
    fn reset_empties_but_keeps_length() {
        let mut code = Code::new(len(5));
        code.distribute("987");
        code.reset();
        assert_eq!(code.len(), 5);
        assert!(code.is_blank());
    }

    #[test]
    fn text_and_display_skip_gaps() {
        let mut code = Code::new(len(5));
        code.set(0, '1');
        code.set(2, '2');
        code.set(4, '3');
        assert_eq!(code.text(), "123");
        assert_eq!(code.to_string(), "123");
        assert_eq!(code.filled(), 3);
    }

    #[test]
    fn single_slot_code() {
        let mut code = Code::new(len(1));
        assert!(code.set(0, '0'));
        assert!(code.is_complete());
        assert_eq!(code.distribute("456"), 1);
        assert_eq!(code.text(), "4");
    }
}
