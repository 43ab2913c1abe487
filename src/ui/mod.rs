//! GUI panels and application state.

pub mod app;
pub mod components;
pub mod dashboard;
pub mod department_panel;
pub mod nav;
pub mod seller_panel;
pub mod setup_wizard;

pub use app::App;
pub use nav::{Panel, ViewStack};
pub use setup_wizard::{SetupApp, SetupWizard};
