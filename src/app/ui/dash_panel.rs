use std::time::Instant;

use eframe::egui;

use crate::app::dashboard::DashboardApp;
use crate::chart;
use crate::pipeline::visuals;

pub fn render_dash_panel(app: &mut DashboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        paint_parallax(app, ui);

        render_readouts(app, ui);
        ui.separator();
        render_device_tilt(app, ui);
        ui.separator();
        render_chart(app, ui);
    });
}

/// 背景视差光斑，偏移由平滑后的旋转状态导出
fn paint_parallax(app: &DashboardApp, ui: &egui::Ui) {
    let rect = ui.max_rect();
    let painter = ui.painter();

    let (bg_x, bg_y) = visuals::parallax_base(
        app.state.orientation.smoothed(),
        app.config.motion.bg_sensitivity,
    );

    let anchors = [
        (
            egui::pos2(
                rect.left() + rect.width() * 0.25,
                rect.top() + rect.height() * 0.30,
            ),
            90.0,
            egui::Color32::from_rgba_unmultiplied(77, 148, 255, 14),
        ),
        (
            egui::pos2(
                rect.left() + rect.width() * 0.75,
                rect.top() + rect.height() * 0.55,
            ),
            120.0,
            egui::Color32::from_rgba_unmultiplied(255, 77, 77, 10),
        ),
        (
            egui::pos2(
                rect.left() + rect.width() * 0.50,
                rect.top() + rect.height() * 0.80,
            ),
            70.0,
            egui::Color32::from_rgba_unmultiplied(77, 255, 136, 12),
        ),
    ];

    for ((fx, fy), (anchor, radius, color)) in visuals::ORB_FACTORS.iter().zip(anchors) {
        let offset = egui::vec2((bg_x * fx) as f32, (bg_y * fy) as f32);
        painter.circle_filled(anchor + offset, radius, color);
    }
}

/// 实时数值与通道仪表：clamp(0, 100, (v + 2) * 25)
fn render_readouts(app: &DashboardApp, ui: &mut egui::Ui) {
    let sample = app.state.latest;
    let colors = &app.config.chart.colors;

    ui.horizontal(|ui| {
        for (label, value, rgb) in [
            ("X", sample.map(|s| s.x), colors.x_axis),
            ("Y", sample.map(|s| s.y), colors.y_axis),
            ("Z", sample.map(|s| s.z), colors.z_axis),
        ] {
            let color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
            ui.vertical(|ui| {
                match value {
                    Some(v) => ui.colored_label(color, format!("{}: {:+.2}", label, v)),
                    None => ui.colored_label(color, format!("{}: --", label)),
                };

                let percent = visuals::gauge_percent(value.unwrap_or(0.0));
                ui.add(
                    egui::ProgressBar::new((percent / 100.0) as f32)
                        .desired_width(120.0)
                        .fill(color),
                );
            });
            ui.add_space(10.0);
        }
    });
}

/// 平滑后的姿态展示：roll 旋转矩形，pitch 压缩高度，冲击时短暂提亮
fn render_device_tilt(app: &DashboardApp, ui: &mut egui::Ui) {
    let (pitch, roll) = app.state.orientation.rotation(&app.config.motion);
    ui.label(format!("Pitch: {:+.1}°  Roll: {:+.1}°", pitch, roll));

    let desired = egui::vec2(ui.available_width(), 140.0);
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let center = response.rect.center();

    let squash = (pitch.to_radians().cos().abs() as f32).max(0.15);
    let half = egui::vec2(60.0, 40.0 * squash);
    let rot = egui::emath::Rot2::from_angle(roll.to_radians() as f32);
    let corners = [
        egui::vec2(-half.x, -half.y),
        egui::vec2(half.x, -half.y),
        egui::vec2(half.x, half.y),
        egui::vec2(-half.x, half.y),
    ];
    let points: Vec<egui::Pos2> = corners.iter().map(|&c| center + rot * c).collect();

    let fill = if app.state.flash_active(Instant::now()) {
        egui::Color32::from_gray(230) // 冲击闪光
    } else {
        egui::Color32::from_gray(60)
    };
    painter.add(egui::Shape::convex_polygon(
        points,
        fill,
        egui::Stroke::new(1.5, egui::Color32::from_gray(160)),
    ));
}

/// 滚动多通道折线图：每帧读取当前配置和历史快照，从不缓存
fn render_chart(app: &DashboardApp, ui: &mut egui::Ui) {
    let desired = egui::vec2(ui.available_width(), ui.available_height().max(160.0));
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, egui::CornerRadius::same(4), egui::Color32::from_gray(18));

    // 中线网格
    let center_y = rect.center().y;
    painter.line_segment(
        [
            egui::pos2(rect.left(), center_y),
            egui::pos2(rect.right(), center_y),
        ],
        egui::Stroke::new(1.0, egui::Color32::from_white_alpha(12)),
    );

    let chart_config = &app.config.chart;
    let visible = app.state.history.snapshot(chart_config.max_points);
    let Some(lines) = chart::channel_polylines(
        &visible,
        chart_config.max_points,
        rect.width() as f64,
        rect.height() as f64,
        chart_config.v_scale,
    ) else {
        return;
    };

    let channel_colors = [
        chart_config.colors.x_axis,
        chart_config.colors.y_axis,
        chart_config.colors.z_axis,
    ];
    for (points, rgb) in lines.iter().zip(channel_colors) {
        let path: Vec<egui::Pos2> = points
            .iter()
            .map(|p| egui::pos2(rect.left() + p[0] as f32, rect.top() + p[1] as f32))
            .collect();
        painter.add(egui::Shape::line(
            path,
            egui::Stroke::new(1.5, egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])),
        ));
    }
}
