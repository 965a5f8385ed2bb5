use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;

use crate::pipeline::visuals::TAP_DISPLAY_MS;
use crate::pipeline::{HistoryBuffer, ImpactDetector, OrientationFilter, SystemClock};
use crate::types::{ConnectionStatus, Sample, StreamFrame};

/// 应用状态管理模块
/// 管道状态全部集中在这里，由 GUI 线程独占持有，
/// 组件入口按引用接收当前配置，不缓存。

/// tap 事件显示状态：显示文本固定时长后恢复为中性标签
#[derive(Debug)]
pub struct TapDisplay {
    pub text: String,
    revert_at: Option<Instant>,
}

impl TapDisplay {
    pub fn new() -> Self {
        Self {
            text: "WAITING".to_string(),
            revert_at: None,
        }
    }

    pub fn show(&mut self, text: String, now: Instant) {
        self.text = text;
        self.revert_at = Some(now + Duration::from_millis(TAP_DISPLAY_MS));
    }

    /// 到期后恢复中性文本
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.revert_at {
            if now >= at {
                self.text = "WAITING".to_string();
                self.revert_at = None;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.revert_at.is_some()
    }
}

impl Default for TapDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// 统一的应用状态
pub struct AppState {
    pub status: ConnectionStatus,
    pub latest: Option<Sample>,
    pub orientation: OrientationFilter,
    pub impact: ImpactDetector<SystemClock>,
    pub history: HistoryBuffer,
    pub tap: TapDisplay,
    pub flash_until: Option<Instant>,
    pub frame_receiver: Receiver<StreamFrame>,
    pub status_receiver: Receiver<ConnectionStatus>,
}

impl AppState {
    pub fn new(
        frame_receiver: Receiver<StreamFrame>,
        status_receiver: Receiver<ConnectionStatus>,
    ) -> Self {
        Self {
            status: ConnectionStatus::Connecting,
            latest: None,
            orientation: OrientationFilter::new(),
            impact: ImpactDetector::new(SystemClock::new()),
            history: HistoryBuffer::new(),
            tap: TapDisplay::new(),
            flash_until: None,
            frame_receiver,
            status_receiver,
        }
    }

    /// 冲击闪光是否仍在显示
    pub fn flash_active(&self, now: Instant) -> bool {
        self.flash_until.map(|until| now < until).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_display_reverts_after_timeout() {
        let t0 = Instant::now();
        let mut tap = TapDisplay::new();
        assert_eq!(tap.text, "WAITING");

        tap.show("YES".to_string(), t0);
        assert!(tap.is_active());

        tap.tick(t0 + Duration::from_millis(1499));
        assert_eq!(tap.text, "YES");

        tap.tick(t0 + Duration::from_millis(1500));
        assert_eq!(tap.text, "WAITING");
        assert!(!tap.is_active());
    }

    #[test]
    fn new_tap_replaces_pending_one() {
        let t0 = Instant::now();
        let mut tap = TapDisplay::new();

        tap.show("YES".to_string(), t0);
        tap.show("NO".to_string(), t0 + Duration::from_millis(1000));

        // 第二个 tap 重新计时
        tap.tick(t0 + Duration::from_millis(2000));
        assert_eq!(tap.text, "NO");

        tap.tick(t0 + Duration::from_millis(2500));
        assert_eq!(tap.text, "WAITING");
    }
}
