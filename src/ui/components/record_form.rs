// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Record form component shared by the inline create form and the edit modal.

use eframe::egui;

use crate::models::draft::{Draft, Submission};

/// Messages emitted by the form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordFormMsg {
    NameChanged(String),
    ClassChanged(String),
    AgeChanged(String),
    Submit,
    Reset,
}

/// Where the form is drawn; decides layout and the submit label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormLayout {
    Inline,
    Modal,
}

/// Apply a message to the draft. Returns the backend call when a valid draft is submitted.
pub fn update(draft: &mut Draft, msg: RecordFormMsg) -> Option<Submission> {
    match msg {
        RecordFormMsg::NameChanged(text) => draft.name = text,
        RecordFormMsg::ClassChanged(text) => draft.class = text,
        RecordFormMsg::AgeChanged(text) => draft.age = text,
        RecordFormMsg::Reset => draft.clear(),
        RecordFormMsg::Submit => {
            return match draft.submission() {
                Ok(submission) => Some(submission),
                Err(err) => {
                    log::warn!("Submit ignored: {err}");
                    None
                }
            };
        }
    }
    None
}

pub fn submit_label(draft: &Draft, layout: FormLayout) -> &'static str {
    match (layout, draft.is_editing()) {
        (FormLayout::Modal, _) => "Save changes",
        (FormLayout::Inline, true) => "Update student",
        (FormLayout::Inline, false) => "Add student",
    }
}

/// Render the form and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, draft: &Draft, layout: FormLayout) -> Vec<RecordFormMsg> {
    let mut msgs = Vec::new();

    match layout {
        FormLayout::Inline => {
            ui.horizontal(|ui| {
                let width = ((ui.available_width() - 24.0) / 3.0).max(80.0);
                render_fields(ui, draft, width, &mut msgs);
            });
        }
        FormLayout::Modal => {
            let width = ui.available_width().max(240.0);
            render_fields(ui, draft, width, &mut msgs);
        }
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        render_submit(ui, draft, layout, &mut msgs);

        if layout == FormLayout::Inline
            && draft.is_editing()
            && ui
                .button(format!("{} Cancel edit", egui_phosphor::regular::X))
                .on_hover_text("Discard changes and go back to adding")
                .clicked()
        {
            msgs.push(RecordFormMsg::Reset);
        }
    });

    msgs
}

fn render_fields(ui: &mut egui::Ui, draft: &Draft, width: f32, msgs: &mut Vec<RecordFormMsg>) {
    let mut submit = false;

    let mut name = draft.name.clone();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut name)
            .hint_text("Name")
            .desired_width(width),
    );
    if resp.changed() {
        msgs.push(RecordFormMsg::NameChanged(name));
    }
    submit |= entered(ui, &resp);

    let mut class = draft.class.clone();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut class)
            .hint_text("Class")
            .desired_width(width),
    );
    if resp.changed() {
        msgs.push(RecordFormMsg::ClassChanged(class));
    }
    submit |= entered(ui, &resp);

    let mut age = draft.age.clone();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut age)
            .hint_text("Age")
            .desired_width(width),
    );
    if resp.changed() {
        // Number field: drop anything that is not a digit.
        age.retain(|c| c.is_ascii_digit());
        msgs.push(RecordFormMsg::AgeChanged(age));
    }
    submit |= entered(ui, &resp);

    if submit {
        msgs.push(RecordFormMsg::Submit);
    }
}

/// Enter pressed while the field had focus.
fn entered(ui: &egui::Ui, resp: &egui::Response) -> bool {
    resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter))
}

fn render_submit(
    ui: &mut egui::Ui,
    draft: &Draft,
    layout: FormLayout,
    msgs: &mut Vec<RecordFormMsg>,
) {
    let icon = if draft.is_editing() || layout == FormLayout::Modal {
        egui_phosphor::regular::FLOPPY_DISK
    } else {
        egui_phosphor::regular::PLUS
    };
    let button = egui::Button::new(format!("{icon} {}", submit_label(draft, layout)));

    if ui
        .add_enabled(draft.fields().is_ok(), button)
        .on_disabled_hover_text("Please fill in name, class, and age")
        .clicked()
    {
        msgs.push(RecordFormMsg::Submit);
    }
}
