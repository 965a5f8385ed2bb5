use log::{info, warn};
use serde::{Deserialize, Serialize};

/// 应用配置管理模块
/// 集中管理所有配置项，提供默认值和配置验证。
/// 所有组件通过引用读取当前配置，UI 面板是唯一的写入方。

/// 主配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub stream: StreamConfig,
    pub motion: MotionConfig,
    pub impact: ImpactConfig,
    pub chart: ChartConfig,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub resizable: bool,
    pub vsync: bool,
}

/// 推送通道配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    pub broker: String,
    pub port: u16,
    pub client_id: String,
    pub topic: String,
    pub keep_alive_secs: u64,
    pub frame_channel_capacity: usize,
    pub status_channel_capacity: usize,
}

/// 姿态平滑与视差配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// 平滑系数，(0,1]：0.01 很慢，1.0 等于不平滑
    pub lerp_factor: f64,
    /// 旋转灵敏度倍率
    pub sensitivity: f64,
    pub invert_x: bool,
    pub invert_y: bool,
    /// 基础倾角（度）
    pub base_tilt_x: f64,
    pub base_tilt_y: f64,
    /// 背景视差活动范围（px）
    pub bg_sensitivity: f64,
}

/// 冲击检测的触发轴；枚举保证同一时间只有一种模式生效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitAxis {
    #[serde(rename = "x")]
    X,
    #[serde(rename = "y")]
    Y,
    #[serde(rename = "z")]
    Z,
    #[serde(rename = "mag")]
    Magnitude,
}

impl HitAxis {
    pub const ALL: [HitAxis; 4] = [HitAxis::X, HitAxis::Y, HitAxis::Z, HitAxis::Magnitude];

    pub fn label(&self) -> &'static str {
        match self {
            HitAxis::X => "X",
            HitAxis::Y => "Y",
            HitAxis::Z => "Z",
            HitAxis::Magnitude => "Magnitude",
        }
    }
}

/// 冲击检测配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactConfig {
    pub axis: HitAxis,
    /// g-force 触发阈值
    pub threshold: f64,
    /// 两次触发之间的最小间隔（毫秒）
    pub cooldown_ms: u64,
    /// 启动时预加载的冲击音效文件
    pub sound_path: Option<String>,
}

/// 图表配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// 可见窗口的样本数
    pub max_points: usize,
    /// 纵向缩放倍率
    pub v_scale: f64,
    pub colors: ChartColors,
}

/// 图表通道颜色配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartColors {
    pub x_axis: [u8; 3],
    pub y_axis: [u8; 3],
    pub z_axis: [u8; 3],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            stream: StreamConfig::default(),
            motion: MotionConfig::default(),
            impact: ImpactConfig::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            title: "MotionDeck - Live Motion Telemetry".to_string(),
            resizable: true,
            vsync: true,
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            broker: "localhost".to_string(),
            port: 1883,
            client_id: "motiondeck-client-01".to_string(),
            topic: "events".to_string(),
            keep_alive_secs: 5,
            frame_channel_capacity: 5000,
            status_channel_capacity: 100,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            lerp_factor: 0.15,
            sensitivity: 1.0,
            invert_x: true,
            invert_y: false,
            base_tilt_x: 80.0,
            base_tilt_y: 0.0,
            bg_sensitivity: 300.0,
        }
    }
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            axis: HitAxis::X,
            threshold: 0.5,
            cooldown_ms: 300,
            sound_path: None,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_points: 200,
            v_scale: 1.0,
            colors: ChartColors::default(),
        }
    }
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            x_axis: [255, 77, 77],  // 红色
            y_axis: [77, 255, 136], // 绿色
            z_axis: [77, 148, 255], // 蓝色
        }
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;

        let config: AppConfig = toml::from_str(&content).map_err(ConfigError::ParseError)?;

        config.validate()?;
        Ok(config)
    }

    /// 加载配置，文件缺失或无效时回退到默认配置
    pub fn load_or_default<P: AsRef<std::path::Path>>(path: P) -> Self {
        match Self::load_from_file(&path) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.as_ref().display());
                config
            }
            Err(ConfigError::IoError(_)) => {
                info!("No config file at {}, using defaults", path.as_ref().display());
                Self::default()
            }
            Err(e) => {
                warn!("Invalid config file, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::SerializeError)?;

        std::fs::write(path, content).map_err(ConfigError::IoError)?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Window dimensions must be positive".to_string(),
            ));
        }

        if self.motion.lerp_factor <= 0.0 || self.motion.lerp_factor > 1.0 {
            return Err(ConfigError::ValidationError(
                "lerp_factor must be in (0, 1]".to_string(),
            ));
        }

        if self.motion.sensitivity < 0.0 {
            return Err(ConfigError::ValidationError(
                "sensitivity must be non-negative".to_string(),
            ));
        }

        if self.impact.threshold < 0.0 {
            return Err(ConfigError::ValidationError(
                "Impact threshold must be non-negative".to_string(),
            ));
        }

        if self.chart.max_points < 2 {
            return Err(ConfigError::ValidationError(
                "Chart window must hold at least 2 points".to_string(),
            ));
        }

        if self.chart.v_scale <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Chart vertical scale must be positive".to_string(),
            ));
        }

        if self.stream.frame_channel_capacity == 0 {
            return Err(ConfigError::ValidationError(
                "Frame channel capacity must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(toml::ser::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_lerp_factor_out_of_range() {
        let mut config = AppConfig::default();
        config.motion.lerp_factor = 0.0;
        assert!(config.validate().is_err());

        config.motion.lerp_factor = 1.5;
        assert!(config.validate().is_err());

        config.motion.lerp_factor = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_tiny_chart_window() {
        let mut config = AppConfig::default();
        config.chart.max_points = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_hit_axis_names_from_toml() {
        let toml_str = r#"
            axis = "mag"
            threshold = 0.5
            cooldown_ms = 300
        "#;
        let impact: ImpactConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(impact.axis, HitAxis::Magnitude);

        let toml_str = r#"
            axis = "z"
            threshold = 1.0
            cooldown_ms = 100
        "#;
        let impact: ImpactConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(impact.axis, HitAxis::Z);
    }
}
