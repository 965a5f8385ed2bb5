use crate::types::Sample;

/// 图表一次绘制步骤的纯布局计算，每帧由渲染循环调用。
///
/// 把最近 max_points 个样本映射到绘制区域坐标：
///   x_i = i / (max_points - 1) * width
///   y   = center_y - v * amp，其中 amp = height / 4 * v_scale
///
/// 样本少于 2 个时返回 None（本帧不画线，循环照常重排）。
pub fn channel_polylines(
    visible: &[Sample],
    max_points: usize,
    width: f64,
    height: f64,
    v_scale: f64,
) -> Option<[Vec<[f64; 2]>; 3]> {
    if visible.len() < 2 {
        return None;
    }

    let max_points = max_points.max(2);
    let center_y = height / 2.0;
    let amp = height / 4.0 * v_scale;
    let step = width / (max_points - 1) as f64;

    let start = visible.len().saturating_sub(max_points);
    let window = &visible[start..];

    let mut lines: [Vec<[f64; 2]>; 3] = [
        Vec::with_capacity(window.len()),
        Vec::with_capacity(window.len()),
        Vec::with_capacity(window.len()),
    ];

    for (i, sample) in window.iter().enumerate() {
        let x = i as f64 * step;
        lines[0].push([x, center_y - sample.x * amp]);
        lines[1].push([x, center_y - sample.y * amp]);
        lines[2].push([x, center_y - sample.z * amp]);
    }

    Some(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_samples(n: usize) -> Vec<Sample> {
        (0..n).map(|_| Sample::new(1.0, 0.0, -1.0)).collect()
    }

    #[test]
    fn index_maps_to_exact_horizontal_span() {
        let samples = flat_samples(100);
        let lines = channel_polylines(&samples, 100, 500.0, 200.0, 1.0).unwrap();

        // index 0 -> x=0，index 99 -> x=width
        assert_eq!(lines[0][0][0], 0.0);
        assert!((lines[0][99][0] - 500.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_mapping_centers_and_scales() {
        let samples = flat_samples(10);
        let lines = channel_polylines(&samples, 10, 100.0, 200.0, 1.0).unwrap();

        // center_y=100, amp=50：x 通道值 1.0 -> y=50，z 通道值 -1.0 -> y=150
        assert_eq!(lines[0][0][1], 50.0);
        assert_eq!(lines[1][0][1], 100.0);
        assert_eq!(lines[2][0][1], 150.0);

        let scaled = channel_polylines(&samples, 10, 100.0, 200.0, 2.0).unwrap();
        assert_eq!(scaled[0][0][1], 0.0);
    }

    #[test]
    fn fewer_than_two_samples_draws_nothing() {
        assert!(channel_polylines(&[], 100, 500.0, 200.0, 1.0).is_none());
        assert!(channel_polylines(&flat_samples(1), 100, 500.0, 200.0, 1.0).is_none());
    }

    #[test]
    fn only_last_max_points_are_drawn() {
        let mut samples: Vec<Sample> = (0..150).map(|i| Sample::new(i as f64, 0.0, 0.0)).collect();
        samples[49].x = -999.0; // 窗口外
        let lines = channel_polylines(&samples, 100, 500.0, 200.0, 1.0).unwrap();

        assert_eq!(lines[0].len(), 100);
        // 窗口里的第一个点是样本 50
        let center_y = 100.0;
        let amp = 50.0;
        assert_eq!(lines[0][0][1], center_y - 50.0 * amp);
    }

    #[test]
    fn short_history_starts_from_left_edge() {
        let samples = flat_samples(5);
        let lines = channel_polylines(&samples, 100, 990.0, 200.0, 1.0).unwrap();

        assert_eq!(lines[0].len(), 5);
        assert_eq!(lines[0][0][0], 0.0);
        // 5 个点只占窗口左侧：步长 = width / (max_points - 1)
        assert!((lines[0][4][0] - 4.0 * 10.0).abs() < 1e-9);
    }
}
