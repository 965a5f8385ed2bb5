use crate::config::MotionConfig;
use crate::types::Sample;

/// 一阶指数平滑的姿态滤波器。
/// 状态在进程启动时为 (0,0)，之后每个样本增量更新，从不重置。
#[derive(Debug, Default)]
pub struct OrientationFilter {
    pitch: f64,
    roll: f64,
}

impl OrientationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用一个新样本更新平滑状态
    pub fn update(&mut self, sample: &Sample, config: &MotionConfig) {
        // 用 |z| 而不是带符号的 z，避免 z 过零时 180° 跳变
        let mut target_pitch = (-sample.y).atan2(sample.z.abs()).to_degrees();
        let mut target_roll = sample.x.atan2(sample.z.abs()).to_degrees();

        if config.invert_x {
            target_pitch = -target_pitch;
        }
        if config.invert_y {
            target_roll = -target_roll;
        }

        // 每轴独立的一阶低通：state += (target - state) * lerp
        self.pitch += (target_pitch - self.pitch) * config.lerp_factor;
        self.roll += (target_roll - self.roll) * config.lerp_factor;
    }

    /// 原始平滑状态（度），背景视差以此为输入
    pub fn smoothed(&self) -> (f64, f64) {
        (self.pitch, self.roll)
    }

    /// 对外可见的旋转角：基础倾角 + 平滑状态 * 灵敏度
    pub fn rotation(&self, config: &MotionConfig) -> (f64, f64) {
        (
            config.base_tilt_x + self.pitch * config.sensitivity,
            config.base_tilt_y + self.roll * config.sensitivity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_config() -> MotionConfig {
        MotionConfig {
            lerp_factor: 0.15,
            sensitivity: 1.0,
            invert_x: false,
            invert_y: false,
            base_tilt_x: 0.0,
            base_tilt_y: 0.0,
            bg_sensitivity: 300.0,
        }
    }

    #[test]
    fn converges_geometrically_to_constant_target() {
        let config = plain_config();
        let sample = Sample::new(0.5, 0.3, 1.0);

        let target_pitch = (-0.3f64).atan2(1.0).to_degrees();
        let target_roll = 0.5f64.atan2(1.0).to_degrees();

        let mut filter = OrientationFilter::new();
        for _ in 0..20 {
            filter.update(&sample, &config);
        }

        let (pitch, roll) = filter.smoothed();
        assert!((pitch - target_pitch).abs() <= target_pitch.abs() * 0.05);
        assert!((roll - target_roll).abs() <= target_roll.abs() * 0.05);
    }

    #[test]
    fn abs_z_avoids_flip_at_zero_crossing() {
        let config = plain_config();

        let mut above = OrientationFilter::new();
        let mut below = OrientationFilter::new();
        above.update(&Sample::new(0.2, 0.1, 0.05), &config);
        below.update(&Sample::new(0.2, 0.1, -0.05), &config);

        // z 符号翻转不应改变目标角度
        assert_eq!(above.smoothed(), below.smoothed());
    }

    #[test]
    fn invert_flags_negate_each_axis_independently() {
        let mut config = plain_config();
        config.lerp_factor = 1.0;
        let sample = Sample::new(0.5, 0.3, 1.0);

        let mut plain = OrientationFilter::new();
        plain.update(&sample, &config);
        let (pitch, roll) = plain.smoothed();

        config.invert_x = true;
        let mut inverted = OrientationFilter::new();
        inverted.update(&sample, &config);
        let (inv_pitch, inv_roll) = inverted.smoothed();

        assert_eq!(inv_pitch, -pitch);
        assert_eq!(inv_roll, roll);
    }

    #[test]
    fn rotation_applies_base_tilt_and_sensitivity() {
        let mut config = plain_config();
        config.lerp_factor = 1.0;
        config.base_tilt_x = 80.0;
        config.sensitivity = 2.0;

        let mut filter = OrientationFilter::new();
        filter.update(&Sample::new(0.0, -0.5, 1.0), &config);

        let (pitch_state, _) = filter.smoothed();
        let (pitch, roll) = filter.rotation(&config);
        assert_eq!(pitch, 80.0 + pitch_state * 2.0);
        assert_eq!(roll, 0.0);
    }
}
