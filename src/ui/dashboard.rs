//! Dashboard panel with stats, navigation cards, and activity log.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{BUILDINGS, USERS};

use super::app::{App, LogLevel};
use super::components::dashboard_card;
use super::nav::Panel;

/// Show the dashboard panel.
///
/// Returns `Some(panel)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next_panel = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        // Header
        ui.label(RichText::new("SalesDesk").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("Seller and Department Management").size(14.0).weak());

        ui.add_space(30.0);

        // Stat cards row
        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 510.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            stat_card(ui, "Sellers", &app.sellers.len().to_string(), "Registered sellers");
            stat_card(
                ui,
                "Departments",
                &app.departments.len().to_string(),
                "Registered departments",
            );
            stat_card(
                ui,
                "Avg. Base Salary",
                &average_salary_label(app),
                "Across all sellers",
            );
        });

        ui.add_space(30.0);

        // Navigation cards row
        let available = ui.available_width();
        let num_cards = 2.0;
        let spacing = 30.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
        let card_height = card_width * 0.75;
        let card_size = egui::vec2(card_width, card_height);
        let total_width = card_width * num_cards + total_spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);

            if dashboard_card(ui, "Manage Departments", "Organize seller groups", BUILDINGS, card_size).clicked() {
                next_panel = Some(Panel::Departments);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Manage Sellers", "Seller records", USERS, card_size).clicked() {
                next_panel = Some(Panel::Sellers);
            }
        });

        ui.add_space(30.0);
    });

    // Recent activity
    show_activity_log(app, ui);

    next_panel
}

fn average_salary_label(app: &App) -> String {
    if app.sellers.is_empty() {
        return "-".to_string();
    }
    let total: f64 = app.sellers.iter().map(|s| s.base_salary).sum();
    format!("{:.2}", total / app.sellers.len() as f64)
}

fn stat_card(ui: &mut Ui, title: &str, value: &str, description: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(15))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(140.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).size(13.0).weak());
                ui.add_space(5.0);
                ui.label(RichText::new(value).size(26.0).strong());
                ui.add_space(5.0);
                ui.label(RichText::new(description).size(11.0).weak());
            });
        });
}

fn show_activity_log(app: &App, ui: &mut Ui) {
    let available_width = ui.available_width();

    ui.horizontal(|ui| {
        ui.add_space(10.0);

        egui::Frame::new()
            .fill(ui.style().visuals.extreme_bg_color)
            .inner_margin(Margin::same(15))
            .corner_radius(CornerRadius::same(8))
            .show(ui, |ui| {
                ui.set_min_width(available_width - 50.0);

                ui.label(RichText::new("Recent Activity").strong());
                ui.add_space(10.0);

                if app.log_messages.is_empty() {
                    ui.label(RichText::new("No activity yet").weak());
                    return;
                }

                ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                    for entry in app.log_messages.iter().rev() {
                        let color = match entry.level {
                            LogLevel::Info => ui.visuals().text_color(),
                            LogLevel::Success => Color32::from_rgb(100, 200, 100),
                            LogLevel::Warning => Color32::from_rgb(255, 200, 100),
                            LogLevel::Error => Color32::from_rgb(255, 100, 100),
                        };

                        ui.horizontal(|ui| {
                            ui.label(RichText::new(entry.timestamp.format("%H:%M:%S").to_string()).weak().size(11.0));
                            ui.colored_label(color, &entry.message);
                        });
                    }
                });
            });
    });
}
