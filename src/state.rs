use crate::config::ExploreConfig;
use crate::data::model::Dataset;
use crate::explore::{self, RenderOutput};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is installed once at startup and never replaced; every
/// selection change runs one synchronous render whose output fully replaces
/// the previous one (last selection wins at the display layer).
pub struct AppState {
    /// Loaded dataset (None when the startup load failed).
    pub dataset: Option<Dataset>,

    /// Static exploration schema, resolved at startup.
    pub config: ExploreConfig,

    /// Currently selected column.
    pub selected_column: Option<String>,

    /// Output of the latest render call for the selection.
    pub output: Option<RenderOutput>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ExploreConfig) -> Self {
        Self {
            dataset: None,
            config,
            selected_column: None,
            output: None,
            status_message: None,
        }
    }

    /// Install the dataset loaded at startup and render the first
    /// selectable column that exists in it.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let first = self
            .config
            .selectable_columns
            .iter()
            .find(|c| dataset.has_column(c))
            .cloned();

        self.dataset = Some(dataset);
        self.status_message = None;
        if let Some(column) = first {
            self.select_column(&column);
        }
    }

    /// The selection-changed handler: one synchronous render whose result
    /// replaces the displayed output. An unknown column surfaces as an error
    /// message, never a silent default.
    pub fn select_column(&mut self, column: &str) {
        let Some(dataset) = &self.dataset else {
            return;
        };

        self.selected_column = Some(column.to_string());
        match explore::render(dataset, &self.config, column) {
            Ok(output) => {
                log::info!("rendered column '{column}'");
                self.output = Some(output);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("render failed: {e}");
                self.output = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Selector entries: configured columns present in the dataset.
    pub fn selectable_columns(&self) -> Vec<String> {
        let Some(dataset) = &self.dataset else {
            return Vec::new();
        };
        self.config
            .selectable_columns
            .iter()
            .filter(|c| dataset.has_column(c))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Column};
    use crate::explore::chart::ChartKind;

    fn state_with_dataset() -> AppState {
        let dataset = Dataset::from_columns(vec![
            Column::new(
                "Sex",
                vec![
                    CellValue::String("male".into()),
                    CellValue::String("female".into()),
                ],
            ),
            Column::new("Age", vec![CellValue::Float(22.0), CellValue::Float(30.0)]),
        ])
        .unwrap();
        let mut state = AppState::new(ExploreConfig::default());
        state.set_dataset(dataset);
        state
    }

    #[test]
    fn startup_selects_first_available_column() {
        let state = state_with_dataset();
        // "Survived" is configured first but absent; "Sex" is next.
        assert_eq!(state.selected_column.as_deref(), Some("Sex"));
        assert!(state.output.is_some());
    }

    #[test]
    fn selection_change_replaces_output() {
        let mut state = state_with_dataset();
        state.select_column("Age");
        let out = state.output.as_ref().unwrap();
        assert_eq!(out.primary.kind, ChartKind::Histogram);
        assert_eq!(state.selected_column.as_deref(), Some("Age"));
    }

    #[test]
    fn unknown_column_surfaces_error_and_clears_output() {
        let mut state = state_with_dataset();
        state.select_column("Destination");
        assert!(state.output.is_none());
        assert!(
            state
                .status_message
                .as_deref()
                .unwrap()
                .contains("Destination")
        );
    }

    #[test]
    fn selector_only_offers_columns_present_in_dataset() {
        let state = state_with_dataset();
        assert_eq!(state.selectable_columns(), vec!["Sex", "Age"]);
    }
}
