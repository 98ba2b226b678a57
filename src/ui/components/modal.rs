// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Generic modal window shell. Knows nothing about what it displays.

use eframe::egui;

/// Result of drawing the modal for one frame.
pub struct ModalOutput<R> {
    /// Value returned by the contents closure, if they were drawn.
    pub inner: Option<R>,
    /// The user asked to dismiss the modal (close control or Escape).
    pub close_requested: bool,
}

/// Show `add_contents` in a centered window while `is_open` is true.
pub fn show<R>(
    ctx: &egui::Context,
    title: &str,
    is_open: bool,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> ModalOutput<R> {
    if !is_open {
        return ModalOutput {
            inner: None,
            close_requested: false,
        };
    }

    let mut open = true;
    let response = egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, add_contents);
    let escape = ctx.input(|inp| inp.key_pressed(egui::Key::Escape));

    ModalOutput {
        inner: response.and_then(|r| r.inner),
        close_requested: !open || escape,
    }
}
