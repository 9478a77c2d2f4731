use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – column selector + distinct-value table
// ---------------------------------------------------------------------------

/// Render the left panel: the selection control and the distinct-value
/// table for the current selection.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Columns");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // ---- Column selector ----
    let columns = state.selectable_columns();
    let current = state.selected_column.clone().unwrap_or_default();
    let mut picked: Option<String> = None;

    ui.strong("Column");
    egui::ComboBox::from_id_salt("column_selector")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for col in &columns {
                if ui.selectable_label(current == *col, col).clicked() {
                    picked = Some(col.clone());
                }
            }
        });

    if let Some(col) = picked {
        if col != current {
            state.select_column(&col);
        }
    }

    ui.separator();

    // ---- Distinct values of the selected column ----
    let Some(output) = &state.output else {
        return;
    };
    let table = &output.table;

    ui.strong("Distinct values");
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .column(TableColumn::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong(&table.column_name);
            });
        })
        .body(|body| {
            body.rows(18.0, table.len(), |mut row| {
                let value = &table.values[row.index()];
                row.col(|ui| {
                    ui.label(value.to_string());
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: dataset summary and status message.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Deckhand");
        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} passengers, {} columns",
                ds.len(),
                ds.column_count()
            ));
        } else {
            ui.label("no dataset");
        }

        if let Some(col) = &state.selected_column {
            ui.separator();
            ui.label(format!("showing {col}"));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
