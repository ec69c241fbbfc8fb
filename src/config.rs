use std::fs;

use macroquad::prelude::Conf;
use serde::Deserialize;
use thiserror::Error;

pub const SCREEN_W: f32 = 1280.0;
pub const SCREEN_H: f32 = 720.0;

// 游戏调参文件（数据驱动）
pub const CONFIG_PATH: &str = "data/game.json";

// 配置窗口标题、尺寸与可变大小选项
pub fn window_conf() -> Conf {
    let resizable = cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux"));
    Conf {
        window_title: "Parachute Catch".to_string(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        high_dpi: true,
        window_resizable: resizable,
        ..Default::default()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

// 整局调参，每个分组缺省时使用默认值，配置文件只需写要改的项
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub boat: BoatConfig,
    pub parachutist: ParachutistConfig,
    pub plane: PlaneConfig,
    pub spawn: SpawnConfig,
    pub rules: RulesConfig,
    pub assets: AssetPaths,
}

impl GameConfig {
    // 从JSON文件加载配置
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    // 校验会让游戏卡死或停止投放的取值
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("spawn.interval_ms", self.spawn.interval_ms)?;
        if !(self.spawn.release_window_ms >= 0.0 && self.spawn.release_window_ms.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "spawn.release_window_ms",
                reason: "must be finite and >= 0",
            });
        }
        if self.spawn.max_per_cycle == 0 {
            return Err(ConfigError::Invalid {
                field: "spawn.max_per_cycle",
                reason: "must be at least 1",
            });
        }
        positive("plane.initial_speed", self.plane.initial_speed as f64)?;
        positive("plane.max_speed", self.plane.max_speed as f64)?;
        positive("boat.initial_speed", self.boat.initial_speed as f64)?;
        positive("boat.max_speed", self.boat.max_speed as f64)?;
        positive("parachutist.fall_speed", self.parachutist.fall_speed as f64)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite and > 0",
        })
    }
}

// 船：尺寸与加速参数
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct BoatConfig {
    pub width: f32,
    pub height: f32,
    pub initial_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    // 船顶到画布底部的距离
    pub bottom_offset: f32,
}

impl Default for BoatConfig {
    fn default() -> Self {
        Self {
            width: 150.0,
            height: 60.0,
            initial_speed: 2.0,
            max_speed: 10.0,
            speed_increment: 0.1,
            bottom_offset: 80.0,
        }
    }
}

// 跳伞者：尺寸与下落速度
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParachutistConfig {
    pub width: f32,
    pub height: f32,
    pub fall_speed: f32,
}

impl Default for ParachutistConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 60.0,
            fall_speed: 2.0,
        }
    }
}

// 飞机：尺寸、高度与循环加速
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlaneConfig {
    pub width: f32,
    pub height: f32,
    pub y: f32,
    pub initial_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    // 跳伞者相对飞机的投放高度偏移
    pub drop_offset: f32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 50.0,
            y: 50.0,
            initial_speed: 2.0,
            max_speed: 5.0,
            speed_increment: 0.1,
            drop_offset: 50.0,
        }
    }
}

// 投放节奏
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub interval_ms: f64,
    // 同一轮投放间隔 = release_window_ms / 飞机速度
    pub release_window_ms: f64,
    pub max_per_cycle: u32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2000.0,
            release_window_ms: 2000.0,
            max_per_cycle: 3,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub lives: u32,
    pub score_per_catch: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            lives: 3,
            score_per_catch: 10,
        }
    }
}

// 贴图路径，缺失时对应精灵不绘制
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: String,
    pub sea: String,
    pub plane: String,
    pub boat: String,
    pub parachutist: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "assets/background.png".to_string(),
            sea: "assets/sea.png".to_string(),
            plane: "assets/plane.png".to_string(),
            boat: "assets/boat.png".to_string(),
            parachutist: "assets/parachutist.png".to_string(),
        }
    }
}
