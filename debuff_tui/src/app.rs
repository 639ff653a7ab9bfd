//! Application state

use crate::simulation::RollSimulation;
use debuff_core::{
    config::load_models_config, default_models, Calculator, ModelPreset, ModelsConfig,
    StatField,
};
use rand::SeedableRng;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File the sampled curve is exported to
pub const EXPORT_PATH: &str = "debuff_curve.json";

/// Curve export error
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize curve: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Calculator,
    Models,
    Rolls,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Calculator, Tab::Models, Tab::Rolls, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Calculator => "Calculator",
            Tab::Models => "Models",
            Tab::Rolls => "Rolls",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub calculator: Calculator,
    pub presets: ModelsConfig,
    /// Where the presets came from (file path or "built-in")
    pub presets_source: String,
    pub active_preset: usize,
    pub selected_preset: usize,
    pub focused: StatField,
    pub accuracy_text: String,
    pub resistance_text: String,
    pub simulation: RollSimulation,
    pub rng: rand::rngs::StdRng,
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        let (presets, source) = Self::load_presets();
        Self::with_presets(presets, source)
    }

    pub fn with_presets(presets: ModelsConfig, presets_source: String) -> Self {
        // Presets are validated on load, so the domain is non-empty
        let domain = presets.domain().unwrap_or_default();
        let active_preset = presets.active_index();
        let calculator = Calculator::new(presets.active_model(), domain);
        let inputs = calculator.inputs();

        App {
            current_tab: Tab::Calculator,
            calculator,
            presets,
            presets_source,
            active_preset,
            selected_preset: active_preset,
            focused: StatField::Accuracy,
            accuracy_text: inputs.accuracy.to_string(),
            resistance_text: inputs.resistance.to_string(),
            simulation: RollSimulation::new(),
            rng: rand::rngs::StdRng::seed_from_u64(42),
            status: None,
        }
    }

    fn load_presets() -> (ModelsConfig, String) {
        // Try to load from a models.toml next to the binary's working dir
        let paths = [
            "models.toml",
            "config/models.toml",
            "debuff_core/config/models.toml",
            "../debuff_core/config/models.toml",
        ];

        for path in paths {
            if !Path::new(path).exists() {
                continue;
            }
            match load_models_config(Path::new(path)) {
                Ok(config) => {
                    tracing::info!(path, presets = config.models.len(), "loaded model presets");
                    return (config, path.to_string());
                }
                Err(e) => {
                    tracing::warn!(path, error = %e, "failed to load model presets");
                }
            }
        }

        tracing::info!("no models.toml found, using built-in presets");
        (default_models(), "built-in".to_string())
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = if self.current_tab == Tab::Help {
            Tab::Calculator
        } else {
            Tab::Help
        };
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Calculator => self.focused = self.focused.other(),
            Tab::Models => {
                if self.selected_preset > 0 {
                    self.selected_preset -= 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Calculator => self.focused = self.focused.other(),
            Tab::Models => {
                if self.selected_preset + 1 < self.presets.models.len() {
                    self.selected_preset += 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_left(&mut self) {
        match self.current_tab {
            Tab::Calculator => self.adjust_focused(-1),
            Tab::Rolls => self.simulation.fewer_attempts(),
            _ => {}
        }
    }

    pub fn on_right(&mut self) {
        match self.current_tab {
            Tab::Calculator => self.adjust_focused(1),
            Tab::Rolls => self.simulation.more_attempts(),
            _ => {}
        }
    }

    pub fn on_page_up(&mut self) {
        if self.current_tab == Tab::Calculator {
            self.adjust_focused(10);
        }
    }

    pub fn on_page_down(&mut self) {
        if self.current_tab == Tab::Calculator {
            self.adjust_focused(-10);
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Models => self.activate_selected_preset(),
            Tab::Rolls => self.roll(),
            _ => {}
        }
    }

    pub fn on_space(&mut self) {
        if self.current_tab == Tab::Rolls {
            self.roll();
        }
    }

    /// Typed character for the focused field
    pub fn on_char(&mut self, c: char) {
        if self.current_tab != Tab::Calculator {
            return;
        }
        if c.is_ascii_digit() || c == '-' || c == '+' {
            self.focused_text_mut().push(c);
            self.apply_focused_text();
        }
    }

    pub fn on_backspace(&mut self) {
        if self.current_tab != Tab::Calculator {
            return;
        }
        self.focused_text_mut().pop();
        self.apply_focused_text();
    }

    /// Clear the focused field
    pub fn on_delete(&mut self) {
        if self.current_tab != Tab::Calculator {
            return;
        }
        self.focused_text_mut().clear();
        self.apply_focused_text();
    }

    pub fn text(&self, field: StatField) -> &str {
        match field {
            StatField::Accuracy => &self.accuracy_text,
            StatField::Resistance => &self.resistance_text,
        }
    }

    fn text_mut(&mut self, field: StatField) -> &mut String {
        match field {
            StatField::Accuracy => &mut self.accuracy_text,
            StatField::Resistance => &mut self.resistance_text,
        }
    }

    fn focused_text_mut(&mut self) -> &mut String {
        let field = self.focused;
        self.text_mut(field)
    }

    fn apply_focused_text(&mut self) {
        let field = self.focused;
        let text = self.text(field).to_string();
        // Rejected edits stay visible in the field; the calculator keeps the
        // previous value and records the error
        let _ = self.calculator.set(field, &text);
    }

    fn adjust_focused(&mut self, delta: i32) {
        let field = self.focused;
        self.calculator.adjust(field, delta);
        self.sync_text(field);
    }

    fn sync_text(&mut self, field: StatField) {
        let value = self.calculator.inputs().get(field);
        *self.text_mut(field) = value.to_string();
    }

    /// Restore 100 / 100
    pub fn reset(&mut self) {
        self.calculator.reset();
        for field in StatField::all() {
            self.sync_text(*field);
        }
        self.status = Some("Inputs reset".to_string());
    }

    pub fn active_preset(&self) -> Option<&ModelPreset> {
        self.presets.models.get(self.active_preset)
    }

    pub fn active_label(&self) -> &str {
        self.active_preset().map(|p| p.label()).unwrap_or("model")
    }

    pub fn activate_selected_preset(&mut self) {
        let Some(preset) = self.presets.models.get(self.selected_preset) else {
            return;
        };
        let curve = preset.curve;
        let label = preset.label().to_string();

        self.calculator.set_model(curve);
        self.active_preset = self.selected_preset;
        tracing::info!(model = %label, "activated model preset");
        self.status = Some(format!("Active model: {}", label));
    }

    pub fn roll(&mut self) {
        let label = self.active_label().to_string();
        let run = self.simulation.run(&self.calculator, &label, &mut self.rng);
        self.status = Some(format!(
            "Rolled {} times: {} applied ({:.2}%)",
            run.summary.attempts,
            run.summary.applied,
            run.summary.observed_rate()
        ));
    }

    /// Write the sampled curve of the active model as JSON
    pub fn export_curve(&mut self) {
        match self.write_curve(Path::new(EXPORT_PATH)) {
            Ok(()) => {
                tracing::info!(path = EXPORT_PATH, "exported curve");
                self.status = Some(format!("Curve exported to {}", EXPORT_PATH));
            }
            Err(e) => {
                tracing::warn!(error = %e, "curve export failed");
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn write_curve(&self, path: &Path) -> Result<(), ExportError> {
        let json = self.calculator.curve().to_json()?;
        fs::write(path, json).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
