use macroquad::prelude::*;

use crate::assets::Sprites;
use crate::render::{Sprite, Surface};
use crate::ui::{draw_text_ui, Ui};

const CLEAR_COLOR: Color = WHITE;

// 基于 macroquad 的绘制目标
pub struct MacroquadSurface<'a> {
    sprites: &'a Sprites,
    ui: &'a Ui,
}

impl<'a> MacroquadSurface<'a> {
    pub fn new(sprites: &'a Sprites, ui: &'a Ui) -> Self {
        Self { sprites, ui }
    }
}

impl Surface for MacroquadSurface<'_> {
    fn clear(&mut self, area: Rect) {
        draw_rectangle(area.x, area.y, area.w, area.h, CLEAR_COLOR);
    }

    // 未加载的贴图直接跳过
    fn draw_image(&mut self, sprite: Sprite, dest: Rect) {
        let Some(texture) = self.sprites.get(sprite) else {
            return;
        };
        draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(dest.w, dest.h)),
                ..Default::default()
            },
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: u16, color: Color) {
        draw_text_ui(self.ui, text, x, y, size, color);
    }
}
