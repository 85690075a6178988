// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the jifelog-core crate.
//!
//! These tests drive the calendar controller through multi-step interactions:
//! navigating months, editing events and managing calendars.

mod config_driven;
mod event_lifecycle;
mod navigation;
