use eframe::egui;

use crate::app::dashboard::DashboardApp;
use crate::pipeline::visuals;

/// 水平仪页面：气泡位移 = 样本 (x, y) * 活动范围
pub fn render_level_panel(app: &mut DashboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);

            let desired = egui::vec2(320.0, 320.0);
            let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
            let center = response.rect.center();

            painter.circle_stroke(center, 150.0, egui::Stroke::new(2.0, egui::Color32::from_gray(90)));
            painter.circle_stroke(center, 20.0, egui::Stroke::new(1.0, egui::Color32::from_gray(70)));
            painter.line_segment(
                [
                    egui::pos2(center.x - 150.0, center.y),
                    egui::pos2(center.x + 150.0, center.y),
                ],
                egui::Stroke::new(1.0, egui::Color32::from_gray(50)),
            );
            painter.line_segment(
                [
                    egui::pos2(center.x, center.y - 150.0),
                    egui::pos2(center.x, center.y + 150.0),
                ],
                egui::Stroke::new(1.0, egui::Color32::from_gray(50)),
            );

            let (dx, dy) = app
                .state
                .latest
                .map(|s| visuals::level_offset(&s))
                .unwrap_or((0.0, 0.0));

            // 气泡限制在圆圈内
            let mut offset = egui::vec2(dx as f32, dy as f32);
            if offset.length() > 140.0 {
                offset *= 140.0 / offset.length();
            }
            painter.circle_filled(center + offset, 14.0, egui::Color32::from_rgb(77, 255, 136));

            match app.state.latest {
                Some(s) => ui.label(format!("X: {:.3} | Y: {:.3}", s.x, s.y)),
                None => ui.label("X: --- | Y: ---"),
            };
        });
    });
}
