//! Main application UI.

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout};
use sea_orm::DatabaseConnection;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::db;
use crate::error::AppError;
use crate::export;
use crate::forms::{DataChangeListener, DepartmentFields, FormController, SellerFields};
use crate::models::{Department, Seller};
use crate::services::{DepartmentService, SellerService};

use super::components::colors;
use super::nav::{Panel, ViewStack};
use super::{dashboard, department_panel, seller_panel};

/// Which entity a change notification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Department,
    Seller,
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    // Data loading
    DepartmentsLoaded(Vec<Department>),
    SellersLoaded(Vec<Seller>),
    LoadError(String),

    // Change notification from a form save; the list re-queries on receipt
    DataChanged(EntityKind),

    // Deletes
    DepartmentDeleted(i32),
    SellerDeleted(i32),
    OperationFailed(String),
}

/// Listener registered on a form dialog by the list screens.
///
/// On a successful save it posts a change notification to the UI channel;
/// the poll loop then re-queries the affected list.
pub struct ReloadNotifier {
    tx: mpsc::UnboundedSender<UiMessage>,
    kind: EntityKind,
}

impl ReloadNotifier {
    pub fn new(tx: mpsc::UnboundedSender<UiMessage>, kind: EntityKind) -> Self {
        Self { tx, kind }
    }
}

impl DataChangeListener for ReloadNotifier {
    fn on_data_changed(&mut self) {
        let _ = self.tx.send(UiMessage::DataChanged(self.kind));
    }
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub enum DeleteTarget {
    Department(i32, String),
    Seller(i32, String),
}

/// Main application state.
pub struct App {
    // Runtime and database
    pub rt: tokio::runtime::Runtime,
    pub pool: DatabaseConnection,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub nav: ViewStack,

    // Cached data
    pub departments: Vec<Department>,
    pub sellers: Vec<Seller>,

    // Loading state
    pub is_loading: bool,

    // Edit dialogs
    pub department_dialog: FormController<DepartmentFields>,
    pub seller_dialog: FormController<SellerFields>,

    // Search/filter state
    pub seller_search: String,
    pub seller_dept_filter: Option<i32>,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub about_open: bool,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Configuration
    pub config: AppConfig,
}

impl App {
    pub fn new(pool: DatabaseConnection, config: AppConfig, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = rt.handle().clone();

        // Wire each dialog with its service and a reload listener before it
        // can ever be shown.
        let mut department_dialog = FormController::new();
        department_dialog.set_service(Box::new(DepartmentService::new(handle.clone(), pool.clone())));
        department_dialog.subscribe_data_change_listener(Box::new(ReloadNotifier::new(
            tx.clone(),
            EntityKind::Department,
        )));

        let mut seller_dialog = FormController::new();
        seller_dialog.set_service(Box::new(SellerService::new(handle, pool.clone())));
        seller_dialog.subscribe_data_change_listener(Box::new(ReloadNotifier::new(tx.clone(), EntityKind::Seller)));

        let mut app = Self {
            rt,
            pool,
            tx,
            rx,
            nav: ViewStack::new(),
            departments: Vec::new(),
            sellers: Vec::new(),
            is_loading: false,
            department_dialog,
            seller_dialog,
            seller_search: String::new(),
            seller_dept_filter: None,
            show_delete_confirm: false,
            delete_target: None,
            error_message: None,
            success_message: None,
            about_open: false,
            log_messages: Vec::new(),
            config,
        };

        // Load initial data
        app.load_departments();
        app.load_sellers();

        app
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Load departments from database.
    pub fn load_departments(&mut self) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();
        self.is_loading = true;

        self.rt.spawn(async move {
            match db::department::list_all(&pool).await {
                Ok(depts) => {
                    let _ = tx.send(UiMessage::DepartmentsLoaded(depts));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadError(e.to_string()));
                }
            }
        });
    }

    /// Load sellers from database.
    pub fn load_sellers(&mut self) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();
        self.is_loading = true;

        self.rt.spawn(async move {
            match db::seller::list_all(&pool).await {
                Ok(sellers) => {
                    let _ = tx.send(UiMessage::SellersLoaded(sellers));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadError(e.to_string()));
                }
            }
        });
    }

    /// Delete a department.
    pub fn delete_department(&mut self, id: i32) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match db::department::delete(&pool, id).await {
                Ok(true) => {
                    let _ = tx.send(UiMessage::DepartmentDeleted(id));
                }
                Ok(false) => {
                    let _ = tx.send(UiMessage::OperationFailed("Department not found".to_string()));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Delete a seller.
    pub fn delete_seller(&mut self, id: i32) {
        let pool = self.pool.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match db::seller::delete(&pool, id).await {
                Ok(true) => {
                    let _ = tx.send(UiMessage::SellerDeleted(id));
                }
                Ok(false) => {
                    let _ = tx.send(UiMessage::OperationFailed("Seller not found".to_string()));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Export sellers to Excel.
    pub fn export_sellers(&mut self) {
        let default_name = export::generate_export_filename("sellers");
        let Some(path) = export::show_save_dialog(&default_name) else {
            return;
        };

        let result = export::export_sellers_to_excel(&self.sellers, &self.departments, &path)
            .map_err(|e| AppError::Export(e.to_string()));
        match result {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.log_success(format!("Exported sellers: {}", path.display()));
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.log_error(e.to_string());
            }
        }
    }

    /// Export departments to Excel.
    pub fn export_departments(&mut self) {
        let default_name = export::generate_export_filename("departments");
        let Some(path) = export::show_save_dialog(&default_name) else {
            return;
        };

        let result =
            export::export_departments_to_excel(&self.departments, &path).map_err(|e| AppError::Export(e.to_string()));
        match result {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.log_success(format!("Exported departments: {}", path.display()));
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                self.log_error(e.to_string());
            }
        }
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::DepartmentsLoaded(depts) => {
                    self.departments = depts;
                    self.is_loading = false;
                }
                UiMessage::SellersLoaded(sellers) => {
                    self.sellers = sellers;
                    self.is_loading = false;
                }
                UiMessage::LoadError(e) => {
                    self.error_message = Some(e.clone());
                    self.log_error(e);
                    self.is_loading = false;
                }
                UiMessage::DataChanged(EntityKind::Department) => {
                    self.load_departments();
                }
                UiMessage::DataChanged(EntityKind::Seller) => {
                    self.load_sellers();
                }
                UiMessage::DepartmentDeleted(id) => {
                    self.departments.retain(|d| d.id != Some(id));
                    self.success_message = Some("Department deleted".to_string());
                    self.log_success("Department deleted");
                }
                UiMessage::SellerDeleted(id) => {
                    self.sellers.retain(|s| s.id != Some(id));
                    self.success_message = Some("Seller deleted".to_string());
                    self.log_success("Seller deleted");
                }
                UiMessage::OperationFailed(e) => {
                    self.error_message = Some(e.clone());
                    self.log_error(e);
                }
            }
        }
    }

    /// Render menu bar.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Registration", |ui| {
                    if ui.button("Sellers").clicked() {
                        self.nav.reset();
                        self.nav.push(Panel::Sellers);
                        ui.close();
                    }
                    if ui.button("Departments").clicked() {
                        self.nav.reset();
                        self.nav.push(Panel::Departments);
                        ui.close();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.about_open = true;
                        ui.close();
                    }
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    ui.colored_label(colors::NEUTRAL, format!("Database: {}", self.config.database.name));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.is_loading {
                            ui.spinner();
                            ui.label("Loading...");
                        } else {
                            ui.label(format!(
                                "{} departments, {} sellers",
                                self.departments.len(),
                                self.sellers.len()
                            ));
                        }
                    });
                });
            });
    }

    /// Render the About dialog.
    fn show_about_dialog(&mut self, ctx: &egui::Context) {
        if !self.about_open {
            return;
        }

        let mut open = true;
        egui::Window::new("About SalesDesk")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.label(format!("SalesDesk {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(5.0);
                ui.label("Desktop data-entry app for managing sellers and departments.");
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    self.about_open = false;
                }
            });

        if !open {
            self.about_open = false;
        }
    }

    /// Render modal dialogs (error, success, delete confirmation, save alerts).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Persistence failure alerts from the edit dialogs. The form stays
        // open behind the alert.
        let mut dismiss_department_alert = false;
        if let Some(alert) = self.department_dialog.alert.clone() {
            show_save_error(ctx, &alert, &mut dismiss_department_alert);
        }
        if dismiss_department_alert {
            self.department_dialog.dismiss_alert();
        }

        let mut dismiss_seller_alert = false;
        if let Some(alert) = self.seller_dialog.alert.clone() {
            show_save_error(ctx, &alert, &mut dismiss_seller_alert);
        }
        if dismiss_seller_alert {
            self.seller_dialog.dismiss_alert();
        }

        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if self.show_delete_confirm
            && let Some(ref target) = self.delete_target.clone()
        {
            let (title, message) = match target {
                DeleteTarget::Department(_, name) => ("Delete Department", format!("Delete department '{}'?", name)),
                DeleteTarget::Seller(_, name) => ("Delete Seller", format!("Delete seller '{}'?", name)),
            };

            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                        if ui.button("Delete").clicked() {
                            self.confirm_delete();
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                    });
                });
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        if let Some(target) = self.delete_target.take() {
            match target {
                DeleteTarget::Department(id, name) => {
                    self.log_info(format!("Deleting department: {}", name));
                    self.delete_department(id);
                }
                DeleteTarget::Seller(id, name) => {
                    self.log_info(format!("Deleting seller: {}", name));
                    self.delete_seller(id);
                }
            }
        }
    }

    /// Ask for delete confirmation, or delete immediately when confirmation
    /// is disabled in the config.
    pub fn request_delete(&mut self, target: DeleteTarget) {
        if self.config.ui.confirm_on_delete {
            self.delete_target = Some(target);
            self.show_delete_confirm = true;
        } else {
            self.delete_target = Some(target);
            self.confirm_delete();
        }
    }
}

/// Modal alert for a persistence failure, in front of the open form.
fn show_save_error(ctx: &egui::Context, message: &str, dismissed: &mut bool) {
    egui::Window::new("Error saving object")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(colors::ERROR, message);
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                *dismissed = true;
            }
        });
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint while loads are in flight
        if self.is_loading {
            ctx.request_repaint();
        }

        // Menu bar
        self.show_menu_bar(ctx);

        // Status bar
        self.show_status_bar(ctx);

        // About dialog
        self.show_about_dialog(ctx);

        // Modal dialogs (error, success, delete confirmation)
        self.show_dialogs(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.nav.current() {
            Panel::Dashboard => {
                if let Some(next) = dashboard::show(self, ui) {
                    self.nav.push(next);
                }
            }
            Panel::Departments => {
                if department_panel::show(self, ui) {
                    self.nav.pop();
                }
            }
            Panel::Sellers => {
                if seller_panel::show(self, ui) {
                    self.nav.pop();
                }
            }
        });
    }
}
