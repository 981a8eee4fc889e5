// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer: bridges the Dioxus UI to the pixelveil backend crates.
//
// `session` holds the load/transform/save steps as plain functions the UI can
// call and tests can exercise; `dialogs` wraps the native file and message
// dialogs.

pub mod dialogs;
pub mod session;
