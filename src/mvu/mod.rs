// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring record state, messages, and commands.

use crate::api::Backend;
use crate::models::draft::{Draft, Submission};
use crate::models::record::{Record, RecordFields, RecordId};
use crate::ui::components::record_form::{self, RecordFormMsg};
use crate::ui::components::record_table::RecordTableMsg;

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Records as last returned by the backend, in backend order.
    pub records: Vec<Record>,
    /// Form draft shared by the inline form and the edit modal.
    pub draft: Draft,
    /// Whether the edit modal is shown.
    pub modal_open: bool,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    LoadRequested,
    RecordsLoaded(Result<Vec<Record>, String>),
    BeginEdit(Record),
    CloseModal,
    DeleteRequested(RecordId),
    SaveCompleted(Result<(), String>),
    DeleteCompleted {
        id: RecordId,
        result: Result<(), String>,
    },
    Form(RecordFormMsg),
    Table(RecordTableMsg),
}

/// Commands represent side-effects executed off the UI thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    LoadRecords,
    CreateRecord(RecordFields),
    UpdateRecord(Record),
    DeleteRecord(RecordId),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::LoadRequested => cmds.push(Command::LoadRecords),
        Msg::RecordsLoaded(Ok(records)) => {
            log::info!("Loaded {} student record(s)", records.len());
            model.records = records;
        }
        Msg::RecordsLoaded(Err(err)) => log::error!("Error fetching records: {err}"),
        Msg::BeginEdit(record) => {
            model.draft = Draft::from_record(&record);
            model.modal_open = true;
        }
        Msg::CloseModal => model.modal_open = false,
        Msg::DeleteRequested(id) => cmds.push(Command::DeleteRecord(id)),
        Msg::Form(m) => {
            if let Some(submission) = record_form::update(&mut model.draft, m) {
                cmds.push(match submission {
                    Submission::Create(fields) => Command::CreateRecord(fields),
                    Submission::Update(record) => Command::UpdateRecord(record),
                });
            }
        }
        Msg::Table(RecordTableMsg::Edit(record)) => update(model, Msg::BeginEdit(record), cmds),
        Msg::Table(RecordTableMsg::Delete(id)) => update(model, Msg::DeleteRequested(id), cmds),
        Msg::SaveCompleted(Ok(())) => {
            model.draft.clear();
            model.modal_open = false;
            cmds.push(Command::LoadRecords);
        }
        // Keep the draft and modal so the user can retry.
        Msg::SaveCompleted(Err(err)) => log::error!("Error saving record: {err}"),
        Msg::DeleteCompleted { id, result } => match result {
            Ok(()) => {
                log::info!("Deleted record {id}");
                cmds.push(Command::LoadRecords);
            }
            Err(err) => log::error!("Error deleting record {id}: {err}"),
        },
    }
}

/// Execute a command against the backend and return the resulting message.
///
/// Blocks for the duration of the request; call from a worker thread.
pub fn run_command(backend: &dyn Backend, cmd: Command) -> Msg {
    match cmd {
        Command::LoadRecords => Msg::RecordsLoaded(backend.list().map_err(|e| e.to_string())),
        Command::CreateRecord(fields) => {
            Msg::SaveCompleted(backend.create(&fields).map_err(|e| e.to_string()))
        }
        Command::UpdateRecord(record) => {
            Msg::SaveCompleted(backend.update(&record).map_err(|e| e.to_string()))
        }
        Command::DeleteRecord(id) => Msg::DeleteCompleted {
            id,
            result: backend.delete(id).map_err(|e| e.to_string()),
        },
    }
}
