// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palisade Code: the fixed-length digit slot sequence.
//!
//! This crate provides the data model for segmented code entry: an ordered
//! sequence of `N` single-character slots, each either empty or holding
//! exactly one ASCII digit. It is renderer-agnostic and knows nothing about
//! widgets, focus, or events; the companion crates layer those on top.
//!
//! The core pieces are:
//!
//! - [`Code`]: the slot sequence itself, with single-slot mutation
//!   ([`Code::set`], [`Code::clear`]), paste distribution
//!   ([`Code::distribute`]), and length reconfiguration ([`Code::set_len`]).
//! - [`Code::accept`]: the digit filter applied to direct input. It accepts
//!   exactly one ASCII digit and rejects everything else outright, including
//!   multi-character input, which is dropped rather than truncated.
//! - Projections: [`Code::slots`] preserves positions and gaps;
//!   [`Code::text`] (also the `Display` impl) concatenates the filled slots
//!   in order.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::num::NonZeroUsize;
//! use palisade_code::Code;
//!
//! let mut code = Code::new(NonZeroUsize::new(6).unwrap());
//!
//! // Direct input passes through the digit filter.
//! let digit = Code::accept("7").unwrap();
//! assert!(code.set(0, digit));
//!
//! // Pasted text is stripped of non-digits and distributed from slot 0.
//! let written = code.distribute("12a3");
//! assert_eq!(written, 3);
//! assert_eq!(code.text(), "123");
//! assert_eq!(code.get(3), None);
//! ```
//!
//! Invalid input never mutates the sequence: the filter and the mutation
//! methods report rejection through `Option`/`bool` returns and otherwise do
//! nothing. There is no error type.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod code;

pub use code::{Code, DEFAULT_LEN};
