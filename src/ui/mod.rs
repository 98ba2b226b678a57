// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for managing student records.
//! Handles layout, wiring components to the MVU kernel, and the worker pool.

pub mod components;

use std::sync::Arc;

use eframe::egui;

use crate::api::Backend;
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::modal::{self, ModalOutput};
use crate::ui::components::record_form::{self, FormLayout, RecordFormMsg};
use crate::ui::components::record_table;

/// Stateful egui application for listing and editing student records.
pub struct RosterApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl RosterApp {
    /// Spawn the request workers and queue the initial record fetch.
    ///
    /// Workers wake the UI through `ctx` whenever a response arrives, so
    /// results show up without waiting for user input.
    pub fn new(ctx: egui::Context, backend: Arc<dyn Backend>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().max(2))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let backend = Arc::clone(&backend);
            let ctx = ctx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(backend.as_ref(), cmd);
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                    ctx.request_repaint();
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: vec![Msg::LoadRequested],
            cmd_tx,
            msg_rx,
        }
    }

    /// Apply queued messages to the model and hand resulting commands to the workers.
    fn process_inbox(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Preserve arrival order: the last list to arrive must win.
        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                log::debug!("Dispatching {cmd:?}");
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
    }
}

impl eframe::App for RosterApp {
    /// Required by eframe 0.34; rendering is driven by `update`, which eframe still calls.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: drains worker responses, updates the model, and renders
    /// the top bar, status line, inline form, record table, and edit modal.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);
        self.process_inbox();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Student Records");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_theme_controls(ui);
                    ui.separator();
                    self.render_refresh_button(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            self.render_inline_form(ui);
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            let table_msgs = record_table::view(ui, &self.model.records);
            self.inbox.extend(table_msgs.into_iter().map(Msg::Table));
        });

        self.render_edit_modal(ctx);

        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

/// Translate one frame of the edit modal into application messages.
fn edit_modal_messages(output: ModalOutput<Vec<RecordFormMsg>>) -> Vec<Msg> {
    let mut msgs: Vec<Msg> = output
        .inner
        .unwrap_or_default()
        .into_iter()
        .map(Msg::Form)
        .collect();
    if output.close_requested {
        msgs.push(Msg::CloseModal);
    }
    msgs
}

impl RosterApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_theme_controls(&mut self, ui: &mut egui::Ui) {
        ui.add_space(2.0);
        egui::widgets::global_theme_preference_switch(ui);
    }

    fn render_refresh_button(&mut self, ui: &mut egui::Ui) {
        if ui
            .button(egui_phosphor::regular::ARROW_CLOCKWISE)
            .on_hover_text("Reload records from the backend")
            .clicked()
        {
            self.inbox.push(Msg::LoadRequested);
        }
    }

    /// Always-visible form for adding a student (or updating the one being edited).
    fn render_inline_form(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            let msgs = record_form::view(ui, &self.model.draft, FormLayout::Inline);
            self.inbox.extend(msgs.into_iter().map(Msg::Form));
        });
    }

    /// Mirror the draft inside the edit modal while it is open.
    fn render_edit_modal(&mut self, ctx: &egui::Context) {
        let draft = &self.model.draft;
        let output = modal::show(ctx, "Edit student", self.model.modal_open, |ui| {
            record_form::view(ui, draft, FormLayout::Modal)
        });

        self.inbox.extend(edit_modal_messages(output));
    }

    /// Show in-flight request count while the workers are busy.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let count = self.model.records.len();
            ui.label(
                egui::RichText::new(format!("{count} student(s)"))
                    .color(egui::Color32::from_gray(68)),
            );
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} request(s) in flight",
                    self.model.pending_commands
                ));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draft::DraftMode;
    use crate::models::record::{Record, RecordId};

    #[test]
    fn close_intent_becomes_close_modal() {
        let msgs = edit_modal_messages(ModalOutput {
            inner: None,
            close_requested: true,
        });

        assert_eq!(msgs.len(), 1);
        assert!(matches!(msgs[0], Msg::CloseModal));
    }

    #[test]
    fn modal_form_edits_drive_the_shared_draft() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        mvu::update(
            &mut model,
            Msg::BeginEdit(Record {
                id: RecordId(5),
                name: "Citra".into(),
                class: "9C".into(),
                age: 14,
            }),
            &mut cmds,
        );

        let msgs = edit_modal_messages(ModalOutput {
            inner: Some(vec![RecordFormMsg::AgeChanged("15".into())]),
            close_requested: false,
        });
        assert!(matches!(
            msgs.as_slice(),
            [Msg::Form(RecordFormMsg::AgeChanged(_))]
        ));
        for msg in msgs {
            mvu::update(&mut model, msg, &mut cmds);
        }

        // The inline form renders from this same draft.
        assert_eq!(model.draft.age, "15");
        assert_eq!(model.draft.mode, DraftMode::Editing(RecordId(5)));
        assert_eq!(
            record_form::submit_label(&model.draft, FormLayout::Inline),
            "Update student"
        );
        assert!(model.modal_open);
        assert!(cmds.is_empty());
    }
}
