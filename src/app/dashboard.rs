use std::time::{Duration, Instant};

use eframe::{egui, Frame};
use log::{info, warn};

use crate::audio::ImpactPlayer;
use crate::config::AppConfig;
use crate::pipeline::visuals::FLASH_DURATION_MS;
use crate::types::StreamFrame;

use super::state::AppState;

/// 导航页面，对应原始界面的 dash/level/tap/sounds 四个标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Level,
    Tap,
    Settings,
}

pub struct DashboardApp {
    // 统一的状态管理
    pub state: AppState,

    // 实时配置，设置页是唯一写入方
    pub config: AppConfig,

    // 冲击音效播放器
    pub audio_player: Option<ImpactPlayer>,

    pub active_page: Page,
    pub sound_path_input: String,
    pub save_status: String,
}

impl DashboardApp {
    pub fn new(
        config: AppConfig,
        frame_receiver: crossbeam_channel::Receiver<StreamFrame>,
        status_receiver: crossbeam_channel::Receiver<crate::types::ConnectionStatus>,
    ) -> Self {
        // 初始化音频播放器
        let audio_player = match ImpactPlayer::new() {
            Ok(player) => {
                info!("Audio player initialized successfully");
                Some(player)
            }
            Err(e) => {
                warn!("Failed to initialize audio player: {}", e);
                None
            }
        };

        // 预加载配置里指定的冲击音效
        if let (Some(player), Some(path)) = (&audio_player, &config.impact.sound_path) {
            player.load_clip(path.clone());
        }

        let sound_path_input = config.impact.sound_path.clone().unwrap_or_default();

        Self {
            state: AppState::new(frame_receiver, status_receiver),
            config,
            audio_player,
            active_page: Page::Dashboard,
            sound_path_input,
            save_status: String::new(),
        }
    }

    /// 按到达顺序处理本帧积压的所有流事件
    fn process_stream_events(&mut self) {
        while let Ok(status) = self.state.status_receiver.try_recv() {
            self.state.status = status;
        }

        while let Ok(frame) = self.state.frame_receiver.try_recv() {
            match frame {
                StreamFrame::Data(sample) => {
                    self.state.latest = Some(sample);
                    self.state.orientation.update(&sample, &self.config.motion);

                    if let Some(g_force) =
                        self.state.impact.check(&sample, &self.config.impact)
                    {
                        info!(
                            "Impact detected: {:.3}G on {}",
                            g_force,
                            self.config.impact.axis.label()
                        );
                        if let Some(player) = &self.audio_player {
                            player.trigger();
                        }
                        self.state.flash_until =
                            Some(Instant::now() + Duration::from_millis(FLASH_DURATION_MS));
                    }

                    self.state.history.push(sample);
                }
                StreamFrame::Tap(tap) => {
                    info!("Tap event: {}", tap.text);
                    self.state.tap.show(tap.text, Instant::now());
                }
            }
        }

        self.state.tap.tick(Instant::now());
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        self.process_stream_events();

        super::ui::render_status_bar(self, ctx);
        super::ui::render_active_page(self, ctx);

        // 绘制循环持续自我重排，没有数据时也照常重绘
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
