//! First-run setup wizard for configuration.

use crate::config::AppConfig;
use crate::db;
use eframe::egui::{self, Color32, RichText};
use std::sync::mpsc;

/// Connection test state.
#[derive(Default, Clone)]
pub enum ConnectionTestState {
    #[default]
    NotTested,
    Testing,
    Success,
    Failed(String),
}

/// Setup wizard state.
pub struct SetupWizard {
    /// Current step (0-2).
    pub current_step: usize,
    /// Configuration being built.
    pub config: AppConfig,
    /// Database connection test state.
    pub db_test_state: ConnectionTestState,
    /// Wizard completed flag.
    pub completed: bool,
    /// Port input as string for text editing.
    port_input: String,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupWizard {
    pub fn new() -> Self {
        let config = AppConfig::default();
        Self {
            current_step: 0,
            port_input: config.database.port.to_string(),
            config,
            db_test_state: ConnectionTestState::NotTested,
            completed: false,
        }
    }

    /// Check if user can proceed to next step.
    pub fn can_proceed(&self) -> bool {
        match self.current_step {
            0 => true, // Welcome - always can proceed
            1 => matches!(self.db_test_state, ConnectionTestState::Success),
            2 => true, // Confirmation
            _ => false,
        }
    }

    /// Get step title.
    fn step_title(&self) -> &'static str {
        match self.current_step {
            0 => "Welcome",
            1 => "Database Configuration",
            2 => "Confirmation",
            _ => "Setup",
        }
    }

    /// Total number of steps.
    const TOTAL_STEPS: usize = 3;
}

/// Setup wizard application.
pub struct SetupApp {
    pub wizard: SetupWizard,
    pub initial_error: Option<String>,
    pub rt: tokio::runtime::Runtime,
    db_test_rx: Option<mpsc::Receiver<Result<(), String>>>,
}

impl SetupApp {
    pub fn new(wizard: SetupWizard, initial_error: Option<String>) -> Self {
        Self {
            wizard,
            initial_error,
            rt: tokio::runtime::Runtime::new().expect("Failed to create tokio runtime"),
            db_test_rx: None,
        }
    }

    /// Test database connection asynchronously.
    fn start_db_test(&mut self) {
        let conn_str = self.wizard.config.database.connection_string();
        let (tx, rx) = mpsc::channel();
        self.db_test_rx = Some(rx);
        self.wizard.db_test_state = ConnectionTestState::Testing;

        self.rt.spawn(async move {
            let result = test_db_connection(&conn_str).await;
            let _ = tx.send(result);
        });
    }

    /// Check for async test results.
    fn poll_test_results(&mut self) {
        if let Some(rx) = &self.db_test_rx
            && let Ok(result) = rx.try_recv()
        {
            self.wizard.db_test_state = match result {
                Ok(()) => ConnectionTestState::Success,
                Err(e) => ConnectionTestState::Failed(e),
            };
            self.db_test_rx = None;
        }
    }

    /// Write the config next to the executable and mark the wizard done.
    fn finish(&mut self) {
        let path = AppConfig::default_path();
        match self.wizard.config.save(&path) {
            Ok(()) => {
                tracing::info!("Config saved to {:?}", path);
                self.wizard.completed = true;
            }
            Err(e) => {
                tracing::error!("Failed to save config: {}", e);
                self.initial_error = Some(e.to_string());
            }
        }
    }

    fn show_welcome_step(&mut self, ui: &mut egui::Ui) {
        ui.label("Welcome to SalesDesk.");
        ui.add_space(10.0);
        ui.label("This wizard configures the PostgreSQL database used to store sellers and departments.");

        if let Some(error) = &self.initial_error {
            ui.add_space(15.0);
            ui.colored_label(
                Color32::from_rgb(255, 100, 100),
                format!("Existing configuration problem: {error}"),
            );
        }
    }

    fn show_database_step(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("wizard_db_grid")
            .num_columns(2)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                ui.label("Host:");
                ui.text_edit_singleline(&mut self.wizard.config.database.host);
                ui.end_row();

                ui.label("Port:");
                if ui.text_edit_singleline(&mut self.wizard.port_input).changed()
                    && let Ok(port) = self.wizard.port_input.parse()
                {
                    self.wizard.config.database.port = port;
                }
                ui.end_row();

                ui.label("Database:");
                ui.text_edit_singleline(&mut self.wizard.config.database.name);
                ui.end_row();

                ui.label("Username:");
                ui.text_edit_singleline(&mut self.wizard.config.database.username);
                ui.end_row();

                ui.label("Password:");
                ui.add(egui::TextEdit::singleline(&mut self.wizard.config.database.password).password(true));
                ui.end_row();
            });

        ui.add_space(15.0);

        ui.horizontal(|ui| {
            let testing = matches!(self.wizard.db_test_state, ConnectionTestState::Testing);
            if ui.add_enabled(!testing, egui::Button::new("Test Connection")).clicked() {
                self.start_db_test();
            }

            ui.add_space(10.0);

            match &self.wizard.db_test_state {
                ConnectionTestState::NotTested => {}
                ConnectionTestState::Testing => {
                    ui.spinner();
                    ui.label("Testing...");
                }
                ConnectionTestState::Success => {
                    ui.colored_label(Color32::from_rgb(100, 200, 100), "Connection successful!");
                }
                ConnectionTestState::Failed(e) => {
                    ui.colored_label(Color32::from_rgb(255, 100, 100), format!("Failed: {e}"));
                }
            }
        });
    }

    fn show_confirmation_step(&mut self, ui: &mut egui::Ui) {
        ui.label("Review the configuration, then finish to save it.");
        ui.add_space(10.0);

        egui::Grid::new("wizard_confirm_grid")
            .num_columns(2)
            .spacing([20.0, 6.0])
            .show(ui, |ui| {
                ui.label("Host:");
                ui.label(&self.wizard.config.database.host);
                ui.end_row();

                ui.label("Port:");
                ui.label(self.wizard.config.database.port.to_string());
                ui.end_row();

                ui.label("Database:");
                ui.label(&self.wizard.config.database.name);
                ui.end_row();

                ui.label("Username:");
                ui.label(&self.wizard.config.database.username);
                ui.end_row();
            });

        ui.add_space(10.0);
        ui.weak("Restart the application after finishing to load the new configuration.");
    }
}

impl eframe::App for SetupApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async test results
        self.poll_test_results();

        // Request repaint while testing
        if matches!(self.wizard.db_test_state, ConnectionTestState::Testing) {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui.heading(RichText::new(self.wizard.step_title()).size(22.0));
            ui.label(
                RichText::new(format!(
                    "Step {} of {}",
                    self.wizard.current_step + 1,
                    SetupWizard::TOTAL_STEPS
                ))
                .weak(),
            );
            ui.add_space(10.0);
            ui.separator();
            ui.add_space(15.0);

            if self.wizard.completed {
                ui.colored_label(Color32::from_rgb(100, 200, 100), "Setup complete.");
                ui.add_space(10.0);
                ui.label("Close this window and start SalesDesk again.");
                return;
            }

            match self.wizard.current_step {
                0 => self.show_welcome_step(ui),
                1 => self.show_database_step(ui),
                _ => self.show_confirmation_step(ui),
            }

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if self.wizard.current_step > 0 && ui.button("Back").clicked() {
                    self.wizard.current_step -= 1;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let last_step = self.wizard.current_step + 1 == SetupWizard::TOTAL_STEPS;
                    let label = if last_step { "Finish" } else { "Next" };

                    if ui
                        .add_enabled(self.wizard.can_proceed(), egui::Button::new(label))
                        .clicked()
                    {
                        if last_step {
                            self.finish();
                        } else {
                            self.wizard.current_step += 1;
                        }
                    }
                });
            });
        });
    }
}

/// Test a connection string without keeping the connection.
async fn test_db_connection(conn_str: &str) -> Result<(), String> {
    let conn = db::connect(conn_str).await.map_err(|e| e.to_string())?;
    db::test_connection(&conn).await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_gates_on_db_test() {
        let mut wizard = SetupWizard::new();
        assert!(wizard.can_proceed());

        wizard.current_step = 1;
        assert!(!wizard.can_proceed());

        wizard.db_test_state = ConnectionTestState::Success;
        assert!(wizard.can_proceed());
    }
}
