use std::time::Instant;

use crate::config::{HitAxis, ImpactConfig};
use crate::types::Sample;

/// 冲击检测用的时钟抽象，测试中可手动推进时间
pub trait Clock {
    /// 单调毫秒计数，基准点任意
    fn now_ms(&self) -> u64;
}

/// 以进程内单调时钟为基准的系统时钟
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// 阈值加冷却窗口的冲击检测器。
/// 冷却按检查时的墙钟时间计算，与样本到达速率无关：
/// 一个冷却窗口内无论多少样本超过阈值，最多触发一次。
#[derive(Debug)]
pub struct ImpactDetector<C: Clock> {
    clock: C,
    last_hit_ms: Option<u64>,
}

impl<C: Clock> ImpactDetector<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_hit_ms: None,
        }
    }

    /// g-force 估计值：magnitude 模式取合成加速度相对静止 1g 的偏差，
    /// 其余模式取对应轴的绝对值
    pub fn g_force(sample: &Sample, axis: HitAxis) -> f64 {
        match axis {
            HitAxis::Magnitude => (sample.magnitude() - 1.0).abs(),
            HitAxis::X => sample.x.abs(),
            HitAxis::Y => sample.y.abs(),
            HitAxis::Z => sample.z.abs(),
        }
    }

    /// 超过阈值且冷却窗口已过时触发一次，返回触发时的 g-force。
    /// 时间戳在返回前更新，保证冷却窗口先于任何副作用关闭。
    pub fn check(&mut self, sample: &Sample, config: &ImpactConfig) -> Option<f64> {
        let g_force = Self::g_force(sample, config.axis);
        if g_force <= config.threshold {
            return None;
        }

        let now = self.clock.now_ms();
        if let Some(last) = self.last_hit_ms {
            if now.saturating_sub(last) < config.cooldown_ms {
                return None;
            }
        }

        self.last_hit_ms = Some(now);
        Some(g_force)
    }
}
