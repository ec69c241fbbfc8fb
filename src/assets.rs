use std::path::Path;

use macroquad::logging::warn;
use macroquad::prelude::*;

use crate::config::AssetPaths;
use crate::render::Sprite;

// 游戏贴图，加载失败的一项保持为空
#[derive(Default)]
pub struct Sprites {
    background: Option<Texture2D>,
    sea: Option<Texture2D>,
    plane: Option<Texture2D>,
    boat: Option<Texture2D>,
    parachutist: Option<Texture2D>,
}

impl Sprites {
    pub async fn load(paths: &AssetPaths) -> Self {
        Self {
            background: load_sprite(&paths.background).await,
            sea: load_sprite(&paths.sea).await,
            plane: load_sprite(&paths.plane).await,
            boat: load_sprite(&paths.boat).await,
            parachutist: load_sprite(&paths.parachutist).await,
        }
    }

    pub fn get(&self, sprite: Sprite) -> Option<&Texture2D> {
        match sprite {
            Sprite::Background => self.background.as_ref(),
            Sprite::Sea => self.sea.as_ref(),
            Sprite::Plane => self.plane.as_ref(),
            Sprite::Boat => self.boat.as_ref(),
            Sprite::Parachutist => self.parachutist.as_ref(),
        }
    }
}

async fn load_sprite(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Linear);
            Some(texture)
        }
        Err(err) => {
            warn!("sprite {} not loaded: {:?}", path, err);
            None
        }
    }
}

// 加载UI字体，优先使用项目资源中的字体，其次尝试系统字体
pub async fn load_ui_font() -> Option<Font> {
    let candidates = [
        "assets/ui.ttf",
        "assets/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "C:/Windows/Fonts/arial.ttf",
    ];

    for path in candidates {
        if !Path::new(path).exists() {
            continue;
        }
        if let Ok(font) = load_ttf_font(path).await {
            return Some(font);
        }
    }

    None
}
