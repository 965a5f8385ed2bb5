use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::Sender;
use dotenv::dotenv;
use log::{error, info, warn};
use rumqttc::{Client, Event, MqttOptions, Packet, QoS};
use serde_json::Value;

use crate::config::StreamConfig;
use crate::types::{ConnectionStatus, Sample, StreamFrame, TapEvent};

/// 固定重连延迟：无退避增长，无重试上限
const RECONNECT_DELAY: Duration = Duration::from_millis(1000);

/// 流客户端线程主体。同一时刻只持有一条活动连接：
/// 连接出错时丢弃旧连接，等固定延迟后在下一轮循环重建。
pub fn run_stream_client(
    frame_sender: Sender<StreamFrame>,
    status_sender: Sender<ConnectionStatus>,
    shutdown_signal: Arc<AtomicBool>,
    config: &StreamConfig,
) {
    dotenv().ok(); // 加载 .env 文件

    let broker = env::var("BROKER_HOST").unwrap_or_else(|_| config.broker.clone());
    let port = env::var("BROKER_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(config.port);

    let _ = status_sender.send(ConnectionStatus::Connecting);

    'retry: loop {
        if shutdown_signal.load(Ordering::Relaxed) {
            info!("Stream thread received shutdown signal, exiting gracefully");
            break;
        }

        let mut options = MqttOptions::new(config.client_id.clone(), broker.clone(), port);
        options.set_keep_alive(Duration::from_secs(config.keep_alive_secs));

        let (client, mut connection) = Client::new(options, 10);
        if let Err(e) = client.subscribe(&config.topic, QoS::AtLeastOnce) {
            error!("Subscribe request failed: {}", e);
        }

        for event in connection.iter() {
            if shutdown_signal.load(Ordering::Relaxed) {
                info!("Stream thread received shutdown signal, exiting gracefully");
                break 'retry;
            }

            match event {
                Ok(Event::Incoming(Packet::ConnAck(_))) => {
                    info!("Stream online: {}:{} topic '{}'", broker, port, config.topic);
                    let _ = status_sender.send(ConnectionStatus::Online);
                }
                Ok(Event::Incoming(Packet::Publish(publish))) if publish.topic == config.topic => {
                    match parse_frame(&publish.payload) {
                        Ok(Some(frame)) => {
                            if frame_sender.send(frame).is_err() {
                                // 通道断开表示GUI已关闭，优雅退出
                                info!("Frame channel disconnected, stream thread exiting");
                                break 'retry;
                            }
                        }
                        Ok(None) => {} // 未定义的消息类型，按协议静默忽略
                        Err(e) => warn!("Invalid frame payload, skipping: {}", e),
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Stream connection error: {}", e);
                    // 丢弃失效连接，回到外层循环重建
                    break;
                }
            }
        }

        let _ = status_sender.send(ConnectionStatus::Reconnecting);
        thread::sleep(RECONNECT_DELAY);
    }
}

/// 通道帧信封：{"type":"data"|"tap","data":{...}}
#[derive(serde::Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    data: Value,
}

/// 解析一帧载荷。已知类型返回对应事件，未知类型返回 None，
/// 畸形载荷作为可恢复的单帧错误返回 Err 由调用方记录并跳过。
pub fn parse_frame(payload: &[u8]) -> Result<Option<StreamFrame>, String> {
    let payload_str =
        std::str::from_utf8(payload).map_err(|e| format!("Invalid UTF-8: {}", e))?;

    let envelope: Envelope =
        serde_json::from_str(payload_str).map_err(|e| format!("JSON parsing error: {}", e))?;

    match envelope.kind.as_str() {
        "data" => {
            let sample: Sample = serde_json::from_value(envelope.data)
                .map_err(|e| format!("Bad data payload: {}", e))?;
            Ok(Some(StreamFrame::Data(sample)))
        }
        "tap" => {
            let tap: TapEvent = serde_json::from_value(envelope.data)
                .map_err(|e| format!("Bad tap payload: {}", e))?;
            Ok(Some(StreamFrame::Tap(tap)))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_frame() {
        let payload = br#"{"type":"data","data":{"x":0.1,"y":-0.2,"z":0.98}}"#;
        match parse_frame(payload) {
            Ok(Some(StreamFrame::Data(sample))) => {
                assert_eq!(sample, Sample::new(0.1, -0.2, 0.98));
            }
            other => panic!("expected data frame, got {:?}", other.map(|f| f.is_some())),
        }
    }

    #[test]
    fn parses_tap_frame() {
        let payload = br#"{"type":"tap","data":{"text":"YES"}}"#;
        match parse_frame(payload) {
            Ok(Some(StreamFrame::Tap(tap))) => assert_eq!(tap.text, "YES"),
            other => panic!("expected tap frame, got {:?}", other.map(|f| f.is_some())),
        }
    }

    #[test]
    fn ignores_unknown_frame_type_silently() {
        let payload = br#"{"type":"heartbeat","data":{}}"#;
        assert!(matches!(parse_frame(payload), Ok(None)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_frame(b"not json at all").is_err());
        assert!(parse_frame(br#"{"type":"data"}"#).is_err());
    }

    #[test]
    fn rejects_data_frame_with_missing_fields() {
        let payload = br#"{"type":"data","data":{"x":0.1,"y":0.2}}"#;
        assert!(parse_frame(payload).is_err());
    }
}
