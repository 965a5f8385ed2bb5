use std::collections::VecDeque;

use crate::types::Sample;

/// 历史缓冲区固定容量
pub const HISTORY_CAPACITY: usize = 1000;

/// 有界的样本历史：先进先出，溢出时丢弃最旧的样本。
/// 由摄取路径独占写入，渲染循环按帧粒度读取快照。
#[derive(Debug)]
pub struct HistoryBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// 追加样本，超容量时移除最旧的一个 - O(1)操作
    pub fn push(&mut self, sample: Sample) {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// 按到达顺序返回最近 n 个样本（历史不足 n 时返回全部）
    pub fn snapshot(&self, n: usize) -> Vec<Sample> {
        let skip = self.samples.len().saturating_sub(n);
        self.samples.iter().skip(skip).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(i: usize) -> Sample {
        Sample::new(i as f64, 0.0, 0.0)
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut buffer = HistoryBuffer::new();
        for i in 0..1500 {
            buffer.push(sample(i));
            assert!(buffer.len() <= HISTORY_CAPACITY);
        }
        assert_eq!(buffer.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn overflow_drops_oldest_keeps_arrival_order() {
        let mut buffer = HistoryBuffer::new();
        for i in 0..1500 {
            buffer.push(sample(i));
        }

        let all = buffer.snapshot(HISTORY_CAPACITY);
        assert_eq!(all.len(), HISTORY_CAPACITY);
        // 剩下的正好是最近的 1000 个，按到达顺序
        assert_eq!(all[0], sample(500));
        assert_eq!(all[999], sample(1499));
        for pair in all.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + 1.0);
        }
    }

    #[test]
    fn snapshot_returns_last_n_in_order() {
        let mut buffer = HistoryBuffer::new();
        for i in 0..50 {
            buffer.push(sample(i));
        }

        let tail = buffer.snapshot(10);
        assert_eq!(tail.len(), 10);
        assert_eq!(tail[0], sample(40));
        assert_eq!(tail[9], sample(49));
    }

    #[test]
    fn snapshot_larger_than_history_returns_everything() {
        let mut buffer = HistoryBuffer::new();
        for i in 0..5 {
            buffer.push(sample(i));
        }

        let all = buffer.snapshot(5000);
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], sample(0));
    }
}
