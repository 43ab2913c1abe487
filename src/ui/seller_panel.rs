//! Seller management panel with full CRUD, search, and filter functionality.

use eframe::egui::{self, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, FILE_XLS, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget};
use super::components::{
    action_button, back_button, colors, danger_action_button, field_error_label, panel_header,
    primary_button_with_icon, styled_button, styled_button_with_icon,
};
use crate::forms::seller::{EMAIL_MAX_LEN, NAME_MAX_LEN};
use crate::forms::SaveOutcome;
use crate::models::Seller;

/// Show the seller panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Manage Sellers");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if primary_button_with_icon(ui, PLUS, "Add Seller").clicked() {
            app.seller_dialog.open_with(Seller::default());
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_sellers();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_sellers();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Search and filter
    ui.horizontal(|ui| {
        ui.label("Search:");
        ui.add(
            egui::TextEdit::singleline(&mut app.seller_search)
                .desired_width(200.0)
                .hint_text("Name or email..."),
        );

        ui.add_space(20.0);

        ui.label("Department:");
        egui::ComboBox::from_id_salt("seller_dept_filter")
            .width(180.0)
            .selected_text(
                app.seller_dept_filter
                    .and_then(|id| app.departments.iter().find(|d| d.id == Some(id)))
                    .map(|d| d.name.as_str())
                    .unwrap_or("All"),
            )
            .show_ui(ui, |ui| {
                if ui.selectable_label(app.seller_dept_filter.is_none(), "All").clicked() {
                    app.seller_dept_filter = None;
                }
                for dept in &app.departments {
                    if ui
                        .selectable_label(app.seller_dept_filter == dept.id, &dept.name)
                        .clicked()
                    {
                        app.seller_dept_filter = dept.id;
                    }
                }
            });

        // Clear filters button
        if !app.seller_search.is_empty() || app.seller_dept_filter.is_some() {
            ui.add_space(10.0);
            if styled_button(ui, "Clear").clicked() {
                app.seller_search.clear();
                app.seller_dept_filter = None;
            }
        }
    });

    ui.add_space(15.0);

    // Table
    show_table(app, ui);

    // Form dialog
    if app.seller_dialog.is_open() {
        show_form_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    // Filter sellers
    let filtered: Vec<_> = app
        .sellers
        .iter()
        .filter(|s| {
            let search_match = app.seller_search.is_empty()
                || s.name.to_lowercase().contains(&app.seller_search.to_lowercase())
                || s.email.to_lowercase().contains(&app.seller_search.to_lowercase());

            let dept_match = app.seller_dept_filter.is_none() || s.department_id == app.seller_dept_filter;

            search_match && dept_match
        })
        .collect();

    ui.label(format!("Showing {} of {} sellers", filtered.len(), app.sellers.len()));

    ui.add_space(10.0);

    let mut pending_edit: Option<Seller> = None;
    let mut pending_delete: Option<DeleteTarget> = None;

    ScrollArea::vertical().id_salt("seller_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("sellers_grid")
            .num_columns(7)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Id");
                ui.strong("Name");
                ui.strong("Email");
                ui.strong("Birth Date");
                ui.strong("Base Salary");
                ui.strong("Department");
                ui.strong("Actions");
                ui.end_row();

                // Data rows
                for seller in filtered {
                    ui.label(seller.id.map(|id| id.to_string()).unwrap_or("-".to_string()));
                    ui.label(&seller.name);
                    ui.label(&seller.email);
                    ui.label(seller.birth_date.to_string());
                    ui.label(format!("{:.2}", seller.base_salary));

                    let dept_name = seller
                        .department_id
                        .and_then(|id| app.departments.iter().find(|d| d.id == Some(id)))
                        .map(|d| d.name.as_str())
                        .unwrap_or("-");
                    ui.label(dept_name);

                    ui.horizontal(|ui| {
                        ui.add_space(8.0);
                        if action_button(ui, PENCIL, "Edit").clicked() {
                            pending_edit = Some(seller.clone());
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete").clicked()
                            && let Some(id) = seller.id
                        {
                            pending_delete = Some(DeleteTarget::Seller(id, seller.name.clone()));
                        }
                    });

                    ui.end_row();
                }
            });
    });

    if let Some(seller) = pending_edit {
        app.seller_dialog.open_with(seller);
    }
    if let Some(target) = pending_delete {
        app.request_delete(target);
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.seller_dialog.fields.is_editing {
        "Edit Seller"
    } else {
        "Add Seller"
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .default_width(450.0)
        .max_height(500.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(10.0);

            ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                egui::Grid::new("seller_form_grid")
                    .num_columns(2)
                    .spacing([20.0, 10.0])
                    .show(ui, |ui| {
                        ui.label("Id:");
                        ui.label(
                            app.seller_dialog
                                .fields
                                .id
                                .map(|id| id.to_string())
                                .unwrap_or("-".to_string()),
                        );
                        ui.end_row();

                        ui.label("Name:");
                        ui.vertical(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut app.seller_dialog.fields.name)
                                    .desired_width(250.0)
                                    .char_limit(NAME_MAX_LEN),
                            );
                            field_error_label(ui, app.seller_dialog.errors.get("name"));
                        });
                        ui.end_row();

                        ui.label("Email:");
                        ui.vertical(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut app.seller_dialog.fields.email)
                                    .desired_width(250.0)
                                    .char_limit(EMAIL_MAX_LEN),
                            );
                            field_error_label(ui, app.seller_dialog.errors.get("email"));
                        });
                        ui.end_row();

                        ui.label("Birth Date:");
                        ui.vertical(|ui| {
                            // Red text while the current input does not parse
                            let is_valid = app.seller_dialog.fields.birth_date_input.is_empty()
                                || app.seller_dialog.fields.birth_date.is_some();

                            let text_color = if is_valid {
                                ui.visuals().text_color()
                            } else {
                                colors::ERROR
                            };

                            let response = ui.add(
                                egui::TextEdit::singleline(&mut app.seller_dialog.fields.birth_date_input)
                                    .desired_width(120.0)
                                    .hint_text("YYYY-MM-DD")
                                    .text_color(text_color),
                            );

                            if response.changed() {
                                app.seller_dialog.fields.reparse_birth_date();
                            }

                            if !is_valid {
                                ui.colored_label(colors::ERROR, "Invalid date format");
                            } else {
                                ui.weak("Format: YYYY-MM-DD");
                            }
                            field_error_label(ui, app.seller_dialog.errors.get("birth_date"));
                        });
                        ui.end_row();

                        ui.label("Base Salary:");
                        ui.vertical(|ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut app.seller_dialog.fields.base_salary)
                                    .desired_width(120.0)
                                    .hint_text("0.00"),
                            );
                            field_error_label(ui, app.seller_dialog.errors.get("base_salary"));
                        });
                        ui.end_row();

                        ui.label("Department:");
                        egui::ComboBox::from_id_salt("seller_form_dept")
                            .width(250.0)
                            .selected_text(
                                app.seller_dialog
                                    .fields
                                    .department_id
                                    .and_then(|id| app.departments.iter().find(|d| d.id == Some(id)))
                                    .map(|d| d.name.as_str())
                                    .unwrap_or("None"),
                            )
                            .show_ui(ui, |ui| {
                                if ui
                                    .selectable_label(app.seller_dialog.fields.department_id.is_none(), "None")
                                    .clicked()
                                {
                                    app.seller_dialog.fields.department_id = None;
                                }
                                for dept in &app.departments {
                                    if ui
                                        .selectable_label(app.seller_dialog.fields.department_id == dept.id, &dept.name)
                                        .clicked()
                                    {
                                        app.seller_dialog.fields.department_id = dept.id;
                                    }
                                }
                            });
                        ui.end_row();
                    });
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if styled_button(ui, "Cancel").clicked() {
                    app.seller_dialog.on_cancel();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if primary_button_with_icon(ui, "", "Save").clicked() {
                        save_seller(app);
                    }
                });
            });
        });
}

fn save_seller(app: &mut App) {
    if app.seller_dialog.on_save() == SaveOutcome::Saved {
        let name = app.seller_dialog.entity().map(|s| s.name.clone()).unwrap_or_default();
        app.success_message = Some(format!("Seller '{}' saved", name));
        app.log_success(format!("Seller '{}' saved", name));
    }
}
