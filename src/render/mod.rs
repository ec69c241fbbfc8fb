use macroquad::prelude::*;

use crate::actors::boat::Boat;
use crate::actors::parachutist::Parachutist;

mod surface;

pub use surface::MacroquadSurface;

pub const SEA_HEIGHT: f32 = 40.0;
pub const HUD_FONT_SIZE: u16 = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sprite {
    Background,
    Sea,
    Plane,
    Boat,
    Parachutist,
}

// 单帧绘制目标，按调用顺序叠加图层
pub trait Surface {
    fn clear(&mut self, area: Rect);
    fn draw_image(&mut self, sprite: Sprite, dest: Rect);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: u16, color: Color);
}

// 背景铺满画布
pub fn draw_background(surface: &mut dyn Surface, canvas: Vec2) {
    surface.draw_image(Sprite::Background, Rect::new(0.0, 0.0, canvas.x, canvas.y));
}

// 海面贴在画布底部
pub fn draw_sea(surface: &mut dyn Surface, canvas: Vec2) {
    surface.draw_image(
        Sprite::Sea,
        Rect::new(0.0, canvas.y - SEA_HEIGHT, canvas.x, SEA_HEIGHT),
    );
}

pub fn draw_plane(surface: &mut dyn Surface, pos: Vec2, size: Vec2) {
    surface.draw_image(Sprite::Plane, Rect::new(pos.x, pos.y, size.x, size.y));
}

pub fn draw_boat(surface: &mut dyn Surface, boat: &Boat) {
    surface.draw_image(Sprite::Boat, boat.rect());
}

pub fn draw_parachutists(surface: &mut dyn Surface, parachutists: &[Parachutist]) {
    for parachutist in parachutists {
        surface.draw_image(Sprite::Parachutist, parachutist.rect());
    }
}

// 绘制HUD信息：分数与剩余生命
pub fn draw_hud(surface: &mut dyn Surface, score: u32, lives: u32) {
    surface.draw_text(&format!("Score: {score}"), 10.0, 20.0, HUD_FONT_SIZE, BLACK);
    surface.draw_text(&format!("Lives: {lives}"), 10.0, 50.0, HUD_FONT_SIZE, BLACK);
}
