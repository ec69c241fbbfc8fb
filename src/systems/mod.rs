use macroquad::prelude::*;

use crate::actors::boat::Boat;

// 当前帧按住的方向键
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

#[cfg(test)]
impl InputState {
    pub fn left() -> Self {
        Self {
            left: true,
            right: false,
        }
    }

    pub fn right() -> Self {
        Self {
            left: false,
            right: true,
        }
    }
}

// 读取当前帧的方向键状态（方向键或 A/D）
pub fn read_input() -> InputState {
    InputState {
        left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
    }
}

// 根据输入移动船，左键优先，无输入时速度复位
pub fn steer_boat(boat: &mut Boat, input: InputState) {
    if input.left {
        boat.move_left();
    } else if input.right {
        boat.move_right();
    } else {
        boat.reset_speed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoatConfig;

    #[test]
    fn test_left_wins_over_right() {
        let mut boat = Boat::new(vec2(300.0, 600.0), 1000.0, &BoatConfig::default());
        steer_boat(
            &mut boat,
            InputState {
                left: true,
                right: true,
            },
        );
        assert!(boat.pos.x < 300.0);
    }

    #[test]
    fn test_idle_resets_speed() {
        let mut boat = Boat::new(vec2(300.0, 600.0), 1000.0, &BoatConfig::default());
        for _ in 0..30 {
            steer_boat(&mut boat, InputState::right());
        }
        assert!(boat.speed > 2.0);
        let x = boat.pos.x;
        steer_boat(&mut boat, InputState::default());
        assert_eq!(boat.speed, 2.0);
        assert_eq!(boat.pos.x, x);
    }
}
