// Copyright 2025 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Palisade crates. See the `examples/` directory of
//! this package.
