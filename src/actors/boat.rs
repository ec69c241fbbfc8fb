use macroquad::prelude::*;

use crate::actors::parachutist::Parachutist;
use crate::config::BoatConfig;

// 玩家的船：沿画布底部移动，按住方向键越久越快
#[derive(Clone, Debug)]
pub struct Boat {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub canvas_width: f32,
    initial_speed: f32,
    max_speed: f32,
    speed_increment: f32,
}

impl Boat {
    pub fn new(pos: Vec2, canvas_width: f32, config: &BoatConfig) -> Self {
        Self {
            pos,
            size: vec2(config.width, config.height),
            speed: config.initial_speed,
            canvas_width,
            initial_speed: config.initial_speed,
            max_speed: config.max_speed,
            speed_increment: config.speed_increment,
        }
    }

    #[cfg(test)]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    // 向左移动，速度逐帧递增，不越过左边界
    pub fn move_left(&mut self) {
        self.accelerate();
        self.pos.x -= self.speed;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
    }

    // 向右移动，不越过右边界
    pub fn move_right(&mut self) {
        self.accelerate();
        self.pos.x += self.speed;
        if self.pos.x + self.size.x > self.canvas_width {
            self.pos.x = self.canvas_width - self.size.x;
        }
    }

    // 松开方向键时速度回到初始值
    pub fn reset_speed(&mut self) {
        self.speed = self.initial_speed;
    }

    fn accelerate(&mut self) {
        if self.speed < self.max_speed {
            self.speed = (self.speed + self.speed_increment).min(self.max_speed);
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    // 严格矩形重叠判定，仅边缘相贴不算接住
    pub fn catches(&self, parachutist: &Parachutist) -> bool {
        let boat = self.rect();
        let p = parachutist.rect();
        p.x < boat.x + boat.w && p.x + p.w > boat.x && p.y < boat.y + boat.h && p.y + p.h > boat.y
    }

    // 窗口尺寸变化时重设船的坐标与边界（坐标直接取传入的尺寸）
    pub fn update_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_width = width;
        self.pos.x = width;
        self.pos.y = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParachutistConfig;

    fn boat_at(x: f32) -> Boat {
        Boat::new(vec2(x, 500.0), 800.0, &BoatConfig::default())
    }

    fn parachutist_at(x: f32, y: f32) -> Parachutist {
        Parachutist::new(vec2(x, y), &ParachutistConfig::default())
    }

    #[test]
    fn test_move_left_clamps_to_zero() {
        let mut boat = boat_at(1.0);
        boat.move_left();
        assert_eq!(boat.pos.x, 0.0);
        boat.move_left();
        assert_eq!(boat.pos.x, 0.0);
    }

    #[test]
    fn test_move_right_clamps_to_canvas() {
        let mut boat = boat_at(649.0);
        boat.move_right();
        assert_eq!(boat.pos.x, 650.0);
    }

    #[test]
    fn test_speed_ramps_and_caps() {
        let mut boat = boat_at(400.0);
        boat.move_right();
        assert!((boat.speed - 2.1).abs() < 1e-5);
        for _ in 0..200 {
            boat.move_left();
            assert!(boat.speed <= boat.max_speed());
        }
        assert_eq!(boat.speed, 10.0);
        boat.reset_speed();
        assert_eq!(boat.speed, 2.0);
    }

    #[test]
    fn test_catches_overlap() {
        let boat = boat_at(100.0);
        assert!(boat.catches(&parachutist_at(120.0, 460.0)));
        // 只有部分重叠也算接住
        assert!(boat.catches(&parachutist_at(60.0, 450.0)));
        assert!(boat.catches(&parachutist_at(240.0, 555.0)));
    }

    #[test]
    fn test_catches_touching_edges() {
        let boat = boat_at(100.0);
        // 跳伞者底边正好贴在船顶
        assert!(!boat.catches(&parachutist_at(120.0, 440.0)));
        // 左右边贴边
        assert!(!boat.catches(&parachutist_at(50.0, 480.0)));
        assert!(!boat.catches(&parachutist_at(250.0, 480.0)));
    }

    #[test]
    fn test_catches_disjoint() {
        let boat = boat_at(100.0);
        assert!(!boat.catches(&parachutist_at(400.0, 480.0)));
        assert!(!boat.catches(&parachutist_at(120.0, 100.0)));
        assert!(!boat.catches(&parachutist_at(120.0, 600.0)));
    }

    #[test]
    fn test_update_canvas_size_uses_size_as_position() {
        let mut boat = boat_at(100.0);
        boat.update_canvas_size(512.0, 640.0);
        assert_eq!(boat.canvas_width, 512.0);
        assert_eq!(boat.pos, vec2(512.0, 640.0));
    }
}
