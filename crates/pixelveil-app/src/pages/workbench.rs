// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Workbench page: pick method, mode and key, open an image, run, save.

use dioxus::prelude::*;

use pixelveil_core::types::{Method, Mode};

use crate::services::{dialogs, session};
use crate::state::AppState;

#[component]
pub fn Workbench() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let method = state.read().method;
    let mode = state.read().mode;

    rsx! {
        div {
            h1 { "Image Encrypt/Decrypt Tool" }
            p { style: "color: #666;",
                "Scramble an image by reversing its pixels or XOR-ing them with a key. Run the same settings again to restore it."
            }

            // Method
            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                span { "Method:" }
                select {
                    style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                    value: method.label(),
                    onchange: move |evt| {
                        match evt.value().parse::<Method>() {
                            Ok(m) => state.write().method = m,
                            Err(e) => tracing::warn!(error = %e, "ignoring method selection"),
                        }
                    },
                    for m in Method::ALL {
                        option { value: m.label(), selected: m == method, "{m}" }
                    }
                }
            }

            // Mode
            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                span { "Mode:" }
                select {
                    style: "padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                    value: mode.label(),
                    onchange: move |evt| {
                        match evt.value().parse::<Mode>() {
                            Ok(m) => state.write().mode = m,
                            Err(e) => tracing::warn!(error = %e, "ignoring mode selection"),
                        }
                    },
                    for m in Mode::ALL {
                        option { value: m.label(), selected: m == mode, "{m}" }
                    }
                }
            }

            // Key
            div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
                span { "XOR Key (0\u{2013}255):" }
                input {
                    r#type: "text",
                    style: "width: 80px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px; text-align: right;",
                    disabled: !method.needs_key(),
                    value: "{state.read().key_text}",
                    oninput: move |evt| {
                        state.write().key_text = evt.value();
                    },
                }
            }

            // Open
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #007aff; color: #007aff; background: white; font-size: 16px; margin: 16px 0;",
                onclick: move |_| {
                    let Some(path) = dialogs::pick_input() else {
                        return;
                    };
                    let config = state.read().config.clone();
                    let opened = session::open_image(&path, &config).map(|img| {
                        let preview = session::preview_data_url(&img, config.preview_max_edge).ok();
                        (img, preview)
                    });
                    match opened {
                        Ok((img, preview)) => {
                            tracing::info!(path = %path.display(), "image opened");
                            let name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().to_string())
                                .unwrap_or_else(|| path.display().to_string());
                            let size = format!("{}\u{00D7}{}", img.width(), img.height());
                            let mut s = state.write();
                            s.input = Some(img);
                            s.input_path = Some(path);
                            s.preview = preview;
                            s.status_message = Some(format!("Opened {name} ({size})"));
                        }
                        Err(e) => {
                            dialogs::report_error(&e);
                            state.write().status_message = Some(format!("Failed to load image: {e}"));
                        }
                    }
                },
                "Open Image"
            }

            // Preview
            if let Some(ref url) = state.read().preview {
                div { style: "display: flex; justify-content: center; margin: 8px 0;",
                    img { src: "{url}", style: "max-width: 100%; border: 1px solid #e0e0e0; border-radius: 4px;" }
                }
            }
            if let Some(ref path) = state.read().input_path {
                p { style: "color: #888; font-size: 12px; text-align: center; word-break: break-all;",
                    "Source: {path.display()}"
                }
            }

            // Run
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #34c759; color: white; font-size: 16px; margin-top: 8px;",
                onclick: move |_| {
                    let (outcome, config) = {
                        let s = state.read();
                        (
                            session::run(s.input.as_ref(), s.method, s.mode, &s.key_text),
                            s.config.clone(),
                        )
                    };
                    let outcome = match outcome {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            dialogs::report_error(&e);
                            state.write().status_message = Some(format!("Operation failed: {e}"));
                            return;
                        }
                    };

                    // Cancelling the save dialog drops the result.
                    let Some(path) = dialogs::pick_output(&config.default_output_extension) else {
                        state.write().status_message = Some("Save cancelled.".into());
                        return;
                    };

                    match session::save_result(&outcome.result, &path, &config) {
                        Ok(written) => {
                            let preview = session::preview_data_url(&outcome.result, config.preview_max_edge).ok();
                            let message = session::completion_message(outcome.config.mode, &written);
                            {
                                let mut s = state.write();
                                s.preview = preview;
                                s.status_message = Some(message.replace('\n', " "));
                            }
                            dialogs::show_info("Success", &message);
                        }
                        Err(e) => {
                            dialogs::report_error(&e);
                            state.write().status_message = Some(format!("Operation failed: {e}"));
                        }
                    }
                },
                "Run"
            }

            // Status
            if let Some(ref msg) = state.read().status_message {
                p { style: "margin-top: 8px; color: #666; font-size: 14px; text-align: center;",
                    "{msg}"
                }
            }
        }
    }
}
