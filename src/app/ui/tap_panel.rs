use eframe::egui;

use crate::app::dashboard::DashboardApp;

/// tap 页面：显示最近的 tap 文本，1500ms 后由状态层恢复为 WAITING
pub fn render_tap_panel(app: &mut DashboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);

            let color = match app.state.tap.text.as_str() {
                "YES" => egui::Color32::from_rgb(77, 255, 136),
                "NO" => egui::Color32::from_rgb(255, 77, 77),
                _ => egui::Color32::from_gray(120),
            };

            ui.label(
                egui::RichText::new(&app.state.tap.text)
                    .size(64.0)
                    .strong()
                    .color(color),
            );
        });
    });
}
