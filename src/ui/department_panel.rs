//! Department management panel with full CRUD and export functionality.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, FILE_XLS, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget};
use super::components::{
    action_button, back_button, danger_action_button, field_error_label, panel_header, primary_button_with_icon,
    styled_button, styled_button_with_icon,
};
use crate::forms::department::NAME_MAX_LEN;
use crate::forms::SaveOutcome;
use crate::models::Department;

/// Show the department panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Manage Departments");

    // Toolbar
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Department").clicked() {
            app.department_dialog.open_with(Department::default());
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_departments();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_departments();
        }
    });

    ui.add_space(15.0);

    // Table
    show_table(app, ui);

    // Form dialog
    if app.department_dialog.is_open() {
        show_form_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    ui.label(format!("{} departments", app.departments.len()));
    ui.add_space(10.0);

    let mut pending_edit: Option<Department> = None;
    let mut pending_delete: Option<DeleteTarget> = None;

    ScrollArea::vertical().id_salt("department_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("departments_grid")
            .num_columns(3)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Id");
                ui.strong("Name");
                ui.strong("Actions");
                ui.end_row();

                // Data rows
                for dept in &app.departments {
                    ui.label(dept.id.map(|id| id.to_string()).unwrap_or("-".to_string()));
                    ui.label(&dept.name);

                    ui.horizontal(|ui| {
                        ui.add_space(8.0);
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            pending_edit = Some(dept.clone());
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked()
                            && let Some(id) = dept.id
                        {
                            pending_delete = Some(DeleteTarget::Department(id, dept.name.clone()));
                        }
                    });

                    ui.end_row();
                }
            });
    });

    if let Some(dept) = pending_edit {
        app.department_dialog.open_with(dept);
    }
    if let Some(target) = pending_delete {
        app.request_delete(target);
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.department_dialog.fields.is_editing {
        "Edit Department"
    } else {
        "Add Department"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(350.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("dept_form_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Id:");
                    ui.label(
                        app.department_dialog
                            .fields
                            .id
                            .map(|id| id.to_string())
                            .unwrap_or("-".to_string()),
                    );
                    ui.end_row();

                    ui.label("Name:");
                    ui.vertical(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut app.department_dialog.fields.name)
                                .desired_width(220.0)
                                .char_limit(NAME_MAX_LEN),
                        );
                        field_error_label(ui, app.department_dialog.errors.get("name"));
                    });
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.department_dialog.on_cancel();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        save_department(app);
                    }
                });
            });
        });
}

fn save_department(app: &mut App) {
    if app.department_dialog.on_save() == SaveOutcome::Saved {
        let name = app
            .department_dialog
            .entity()
            .map(|d| d.name.clone())
            .unwrap_or_default();
        app.success_message = Some(format!("Department '{}' saved", name));
        app.log_success(format!("Department '{}' saved", name));
    }
}
