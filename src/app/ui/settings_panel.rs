use eframe::egui;

use crate::app::dashboard::DashboardApp;
use crate::config::HitAxis;

/// 设置页：实时修改配置，管道在每次调用时读取当前值
pub fn render_settings_panel(app: &mut DashboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Impact");
        ui.add(
            egui::Slider::new(&mut app.config.impact.threshold, 0.0..=2.0)
                .text("Threshold")
                .suffix("G"),
        );

        egui::ComboBox::from_label("Trigger axis")
            .selected_text(app.config.impact.axis.label())
            .show_ui(ui, |ui| {
                for axis in HitAxis::ALL {
                    ui.selectable_value(&mut app.config.impact.axis, axis, axis.label());
                }
            });

        ui.horizontal(|ui| {
            ui.label("Impact clip:");
            ui.text_edit_singleline(&mut app.sound_path_input);
            if ui.button("Load").clicked() {
                if let Some(player) = &app.audio_player {
                    player.load_clip(app.sound_path_input.clone());
                    app.config.impact.sound_path = Some(app.sound_path_input.clone());
                }
            }
        });

        match &app.audio_player {
            Some(player) => match player.loaded_clip() {
                Some(name) => {
                    ui.colored_label(
                        egui::Color32::from_rgb(0, 150, 0),
                        format!("Loaded: {}", name),
                    );
                }
                None => {
                    ui.label("No clip loaded");
                }
            },
            None => {
                ui.colored_label(egui::Color32::from_rgb(150, 0, 0), "Audio output unavailable");
            }
        }

        ui.separator();
        ui.heading("Chart");
        ui.add(egui::Slider::new(&mut app.config.chart.max_points, 10..=1000).text("Window (samples)"));
        ui.add(egui::Slider::new(&mut app.config.chart.v_scale, 0.1..=5.0).text("Vertical scale"));

        ui.separator();
        ui.heading("Motion");
        ui.add(egui::Slider::new(&mut app.config.motion.lerp_factor, 0.01..=1.0).text("Smoothing"));
        ui.add(egui::Slider::new(&mut app.config.motion.sensitivity, 0.0..=3.0).text("Sensitivity"));
        ui.checkbox(&mut app.config.motion.invert_x, "Invert vertical");
        ui.checkbox(&mut app.config.motion.invert_y, "Invert horizontal");

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Save Config").clicked() {
                match app.config.save_to_file(crate::CONFIG_PATH) {
                    Ok(()) => app.save_status = "Configuration saved".to_string(),
                    Err(e) => app.save_status = format!("Save failed: {}", e),
                }
            }
            if !app.save_status.is_empty() {
                ui.label(&app.save_status);
            }
        });
    });
}
