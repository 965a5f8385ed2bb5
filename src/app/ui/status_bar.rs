use eframe::egui;

use crate::app::dashboard::{DashboardApp, Page};
use crate::types::ConnectionStatus;

pub fn render_status_bar(app: &mut DashboardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("status_bar")
        .min_height(40.0)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                let (status_text, status_color) = match app.state.status {
                    ConnectionStatus::Online => {
                        ("ONLINE", egui::Color32::from_rgb(0, 150, 0)) // 绿色
                    }
                    ConnectionStatus::Connecting => {
                        ("CONNECTING...", egui::Color32::from_rgb(255, 165, 0)) // 橙色
                    }
                    ConnectionStatus::Reconnecting => {
                        ("RECONNECTING...", egui::Color32::from_rgb(150, 0, 0)) // 红色
                    }
                };

                ui.colored_label(status_color, "●");
                ui.colored_label(status_color, status_text);

                ui.separator();

                for (page, label) in [
                    (Page::Dashboard, "Dashboard"),
                    (Page::Level, "Level"),
                    (Page::Tap, "Tap"),
                    (Page::Settings, "Settings"),
                ] {
                    if ui.selectable_label(app.active_page == page, label).clicked() {
                        app.active_page = page;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("History: {} samples", app.state.history.len()));
                });
            });
            ui.add_space(5.0);
        });
}
