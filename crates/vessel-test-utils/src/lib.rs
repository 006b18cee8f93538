// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for vessel crates.
//!
//! [`Ledger`] hands out [`Tracked`] values and counts every creation, clone and
//! drop, so a test can assert that a container neither leaked nor dropped a
//! value twice. A ledger built with [`Ledger::with_clone_budget`] makes
//! `Clone` panic once the budget is spent, which drives unwinding paths.
//!
//! ## License
//!
//! GPL-3.0-only

mod tracked;

pub use tracked::{Ledger, Tracked};
