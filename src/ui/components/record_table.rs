// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Table listing every record with edit and delete actions.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::models::record::{Record, RecordId};

/// Row actions emitted by the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordTableMsg {
    Edit(Record),
    Delete(RecordId),
}

const ROW_HEIGHT: f32 = 26.0;

/// Render one row per record, in the order given.
pub fn view(ui: &mut egui::Ui, records: &[Record]) -> Vec<RecordTableMsg> {
    let mut msgs = Vec::new();

    if records.is_empty() {
        ui.label(
            egui::RichText::new("No students yet.")
                .italics()
                .color(egui::Color32::from_gray(110)),
        );
        return msgs;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto())
        .header(22.0, |mut header| {
            for title in ["Name", "Class", "Age", "Actions"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for record in records {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(&record.name);
                    });
                    row.col(|ui| {
                        ui.label(&record.class);
                    });
                    row.col(|ui| {
                        ui.label(record.age.to_string());
                    });
                    row.col(|ui| {
                        render_actions(ui, record, &mut msgs);
                    });
                });
            }
        });

    msgs
}

fn render_actions(ui: &mut egui::Ui, record: &Record, msgs: &mut Vec<RecordTableMsg>) {
    if ui
        .button(format!("{} Edit", egui_phosphor::regular::PENCIL_SIMPLE))
        .clicked()
    {
        msgs.push(RecordTableMsg::Edit(record.clone()));
    }

    if ui
        .button(
            egui::RichText::new(format!("{} Delete", egui_phosphor::regular::TRASH_SIMPLE))
                .color(egui::Color32::from_rgb(200, 70, 60)),
        )
        .on_hover_text(format!("Delete {}", record.name))
        .clicked()
    {
        msgs.push(RecordTableMsg::Delete(record.id));
    }
}
