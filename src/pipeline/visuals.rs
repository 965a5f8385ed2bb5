use crate::types::Sample;

/// 水平仪气泡的像素位移范围
pub const LEVEL_RANGE: f64 = 120.0;

/// 冲击闪光持续时间（毫秒）
pub const FLASH_DURATION_MS: u64 = 100;

/// tap 文本显示时长（毫秒），到期后恢复中性标签
pub const TAP_DISPLAY_MS: u64 = 1500;

/// 三个背景光斑各自的偏移倍率
pub const ORB_FACTORS: [(f64, f64); 3] = [(-1.0, -1.0), (1.5, 1.5), (-0.8, -0.8)];

/// 通道仪表百分比：clamp(0, 100, (v + 2) * 25)
pub fn gauge_percent(value: f64) -> f64 {
    ((value + 2.0) * 25.0).clamp(0.0, 100.0)
}

/// 水平仪气泡偏移（px）
pub fn level_offset(sample: &Sample) -> (f64, f64) {
    (sample.x * LEVEL_RANGE, sample.y * LEVEL_RANGE)
}

/// 背景视差基础偏移，由平滑后的旋转状态导出；
/// 每个光斑再乘以各自的 ORB_FACTORS 倍率
pub fn parallax_base(smoothed: (f64, f64), bg_sensitivity: f64) -> (f64, f64) {
    let (pitch, roll) = smoothed;
    (roll * bg_sensitivity / 90.0, pitch * bg_sensitivity / 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_percent_maps_and_clamps() {
        assert_eq!(gauge_percent(0.0), 50.0);
        assert_eq!(gauge_percent(2.0), 100.0);
        assert_eq!(gauge_percent(-2.0), 0.0);
        // 超出范围的值被钳制在两端
        assert_eq!(gauge_percent(5.0), 100.0);
        assert_eq!(gauge_percent(-5.0), 0.0);
    }

    #[test]
    fn level_offset_scales_by_range() {
        let (dx, dy) = level_offset(&Sample::new(0.5, -0.25, 1.0));
        assert_eq!(dx, 60.0);
        assert_eq!(dy, -30.0);
    }

    #[test]
    fn parallax_base_swaps_axes_and_scales() {
        // 横向偏移来自 roll，纵向来自 pitch
        let (bg_x, bg_y) = parallax_base((45.0, 90.0), 300.0);
        assert_eq!(bg_x, 300.0);
        assert_eq!(bg_y, 150.0);
    }
}
