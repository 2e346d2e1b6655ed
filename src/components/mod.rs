//! UI Components
//!
//! Reusable Leptos components.

mod activity_panel;
mod color_picker;
mod confirm_button;
mod icon_picker;
mod service_item_card;
mod services_page;
mod status_dialog;
mod status_selector;
mod sub_service_row;
mod text_field;
mod title_bar;

pub use activity_panel::ActivityPanel;
pub use services_page::ServicesPage;
pub use status_dialog::StatusDialog;
pub use title_bar::TitleBar;
