use super::Sample;

/// 离散的 tap 事件，携带要显示的标签文本（如 "YES"/"NO"）
#[derive(serde::Deserialize, Clone, Debug, PartialEq)]
pub struct TapEvent {
    pub text: String,
}

/// 推送通道上解析出的一帧，按类型分发给各消费者
#[derive(Clone, Debug)]
pub enum StreamFrame {
    Data(Sample),
    Tap(TapEvent),
}

/// 连接状态，只由流客户端的生命周期事件驱动
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    Online,
    Reconnecting,
}
