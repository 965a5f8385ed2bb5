pub mod dash_panel;
pub mod level_panel;
pub mod settings_panel;
pub mod status_bar;
pub mod tap_panel;

pub use status_bar::render_status_bar;

use eframe::egui;

use super::dashboard::{DashboardApp, Page};

/// 渲染当前激活的页面
pub fn render_active_page(app: &mut DashboardApp, ctx: &egui::Context) {
    match app.active_page {
        Page::Dashboard => dash_panel::render_dash_panel(app, ctx),
        Page::Level => level_panel::render_level_panel(app, ctx),
        Page::Tap => tap_panel::render_tap_panel(app, ctx),
        Page::Settings => settings_panel::render_settings_panel(app, ctx),
    }
}
