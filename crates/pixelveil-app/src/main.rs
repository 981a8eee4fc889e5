// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixelveil: desktop image scrambler.
//
// Entry point. Initialises logging and app state, and launches the Dioxus UI.

mod pages;
mod services;
mod state;

use dioxus::prelude::*;

use pages::workbench::Workbench;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Pixelveil starting");

    dioxus::launch(app);
}

/// Root component.
fn app() -> Element {
    use_context_provider(|| Signal::new(state::AppState::default()));

    rsx! {
        document::Title { "Image Encrypt/Decrypt Tool" }
        div { class: "app-container",
            style: "display: flex; flex-direction: column; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",
            div { class: "page-content",
                style: "flex: 1; overflow-y: auto; padding: 16px;",
                Workbench {}
            }
        }
    }
}
