use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread::{self, JoinHandle};

use log::{info, warn};
use rodio::{Decoder, OutputStreamBuilder, Sink};

/// 冲击音效播放命令
#[derive(Debug)]
pub enum AudioCommand {
    LoadClip(PathBuf),
    Trigger,
    Shutdown,
}

/// 冲击音效播放器：后台工作线程持有音频输出，
/// 每次触发都从头播放当前加载的音效；未加载时触发为空操作。
pub struct ImpactPlayer {
    command_sender: mpsc::Sender<AudioCommand>,
    worker_handle: Option<JoinHandle<()>>,
    // 当前加载音效的文件名，None 表示未加载
    loaded_clip: Arc<Mutex<Option<String>>>,
}

impl ImpactPlayer {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let (command_sender, command_receiver) = mpsc::channel();
        let loaded_clip = Arc::new(Mutex::new(None));
        let worker_loaded = Arc::clone(&loaded_clip);

        // 启动音频工作线程
        let worker_handle = thread::spawn(move || {
            if let Err(e) = audio_worker_thread(command_receiver, worker_loaded) {
                warn!("Audio worker thread error: {}", e);
            }
        });

        Ok(ImpactPlayer {
            command_sender,
            worker_handle: Some(worker_handle),
            loaded_clip,
        })
    }

    /// 加载用户提供的音效文件
    pub fn load_clip(&self, path: impl Into<PathBuf>) {
        let _ = self.command_sender.send(AudioCommand::LoadClip(path.into()));
    }

    /// 触发一次冲击音效
    pub fn trigger(&self) {
        let _ = self.command_sender.send(AudioCommand::Trigger);
    }

    /// 当前加载音效的文件名，未加载时 None
    pub fn loaded_clip(&self) -> Option<String> {
        self.loaded_clip.lock().unwrap().clone()
    }
}

impl Drop for ImpactPlayer {
    fn drop(&mut self) {
        // 发送关闭命令
        let _ = self.command_sender.send(AudioCommand::Shutdown);

        // 等待工作线程结束
        if let Some(handle) = self.worker_handle.take() {
            let _ = handle.join();
        }
    }
}

/// 音频工作线程
fn audio_worker_thread(
    command_receiver: mpsc::Receiver<AudioCommand>,
    loaded_clip: Arc<Mutex<Option<String>>>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| format!("Failed to open default audio stream: {}", e))?;

    let mut clip_bytes: Option<Vec<u8>> = None;

    loop {
        match command_receiver.recv() {
            Ok(AudioCommand::LoadClip(path)) => match fs::read(&path) {
                Ok(bytes) => {
                    // 先试解码一次，坏文件直接拒绝
                    match Decoder::new(Cursor::new(bytes.clone())) {
                        Ok(_) => {
                            info!("Impact clip loaded: {}", path.display());
                            let name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_else(|| path.display().to_string());
                            *loaded_clip.lock().unwrap() = Some(name);
                            clip_bytes = Some(bytes);
                        }
                        Err(e) => warn!("Cannot decode impact clip {}: {}", path.display(), e),
                    }
                }
                Err(e) => warn!("Cannot read impact clip {}: {}", path.display(), e),
            },
            Ok(AudioCommand::Trigger) => {
                if let Some(bytes) = &clip_bytes {
                    match Decoder::new(Cursor::new(bytes.clone())) {
                        Ok(source) => {
                            let sink = Sink::connect_new(stream.mixer());
                            sink.append(source);
                            sink.play();
                            // 分离 sink，让音效自己播完
                            sink.detach();
                        }
                        Err(e) => warn!("Impact clip decode failed: {}", e),
                    }
                }
            }
            Ok(AudioCommand::Shutdown) | Err(_) => break,
        }
    }

    Ok(())
}
