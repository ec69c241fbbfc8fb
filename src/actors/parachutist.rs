use macroquad::prelude::*;

use crate::config::ParachutistConfig;

// 跳伞者实体：从飞机下方匀速下落
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parachutist {
    pub pos: Vec2,
    pub size: Vec2,
    pub fall_speed: f32,
}

impl Parachutist {
    pub fn new(pos: Vec2, config: &ParachutistConfig) -> Self {
        Self {
            pos,
            size: vec2(config.width, config.height),
            fall_speed: config.fall_speed,
        }
    }

    // 每帧下落，不设下限
    pub fn update(&mut self) {
        self.pos.y += self.fall_speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falls_by_fall_speed() {
        let mut p = Parachutist::new(vec2(40.0, 100.0), &ParachutistConfig::default());
        p.update();
        p.update();
        assert_eq!(p.pos, vec2(40.0, 104.0));
        assert_eq!(p.rect(), Rect::new(40.0, 104.0, 50.0, 60.0));
    }
}
