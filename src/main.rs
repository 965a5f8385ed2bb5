mod app;
mod audio;
mod chart;
mod config;
mod logger;
mod pipeline;
mod stream;
mod types;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::bounded;
use eframe::egui;
use log::{error, info, warn};

use app::DashboardApp;
use config::AppConfig;

const CONFIG_PATH: &str = "config.toml";

fn main() {
    logger::init_logger();
    info!("Application starting");

    let config = AppConfig::load_or_default(CONFIG_PATH);

    let (frame_sender, frame_receiver) = bounded(config.stream.frame_channel_capacity);
    let (status_sender, status_receiver) = bounded(config.stream.status_channel_capacity);
    let shutdown_signal = Arc::new(AtomicBool::new(false));

    let stream_config = config.stream.clone();
    let stream_shutdown = Arc::clone(&shutdown_signal);
    let stream_handle = thread::spawn(move || {
        stream::run_stream_client(frame_sender, status_sender, stream_shutdown, &stream_config);
    });

    let options = eframe::NativeOptions {
        vsync: config.window.vsync,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(config.window.resizable),
        ..Default::default()
    };

    let window_title = config.window.title.clone();
    if let Err(e) = eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(config, frame_receiver, status_receiver)))),
    ) {
        error!("GUI failed: {}", e);
        std::process::exit(1);
    }

    // GUI 关闭后，发送关闭信号给流线程
    info!("GUI closed, signaling stream thread to shutdown");
    shutdown_signal.store(true, Ordering::Relaxed);

    match stream_handle.join() {
        Ok(()) => info!("Stream thread shut down gracefully"),
        Err(e) => warn!("Stream thread panicked: {:?}", e),
    }
}
