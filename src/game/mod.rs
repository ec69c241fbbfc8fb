use macroquad::logging::{debug, info, warn};
use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use crate::actors::boat::Boat;
use crate::actors::parachutist::Parachutist;
use crate::config::GameConfig;
use crate::render::{
    draw_background, draw_boat, draw_hud, draw_parachutists, draw_plane, draw_sea, Surface,
};
use crate::systems::{steer_boat, InputState};

pub mod spawn;

use spawn::SpawnSchedule;

pub type GameOverCallback = Box<dyn FnMut(u32)>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameState {
    Idle,
    Running,
    GameOver,
}

// 一局游戏：船、飞机、空中的跳伞者，以及分数、生命与投放计划
pub struct Game {
    config: GameConfig,
    pub canvas: Vec2,
    pub boat: Boat,
    pub parachutists: Vec<Parachutist>,
    pub score: u32,
    pub lives: u32,
    pub plane_pos: Vec2,
    pub plane_speed: f32,
    state: GameState,
    clock_ms: f64,
    spawns: SpawnSchedule,
    rng: StdRng,
    on_game_over: GameOverCallback,
}

impl Game {
    pub fn new<F>(config: GameConfig, canvas: Vec2, seed: u64, on_game_over: F) -> Self
    where
        F: FnMut(u32) + 'static,
    {
        let boat = Boat::new(
            vec2(canvas.x / 2.0, canvas.y - config.boat.bottom_offset),
            canvas.x,
            &config.boat,
        );
        let spawns = SpawnSchedule::new(&config.spawn);
        Self {
            canvas,
            boat,
            parachutists: Vec::new(),
            score: 0,
            lives: config.rules.lives,
            plane_pos: vec2(canvas.x, config.plane.y),
            plane_speed: config.plane.initial_speed,
            state: GameState::Idle,
            clock_ms: 0.0,
            spawns,
            rng: StdRng::seed_from_u64(seed),
            on_game_over: Box::new(on_game_over),
            config,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    #[cfg(test)]
    pub fn pending_spawns(&self) -> usize {
        self.spawns.pending()
    }

    // 首次开局：启动投放循环与主循环
    pub fn init(&mut self) {
        if self.state != GameState::Idle {
            warn!("init called in state {:?}, ignored", self.state);
            return;
        }
        self.spawns.start(self.clock_ms);
        self.state = GameState::Running;
        info!("round started on {}x{} canvas", self.canvas.x, self.canvas.y);
    }

    // 重开一局：清空待投放事件并复位全部状态
    pub fn reset_game(&mut self) {
        self.spawns.cancel();
        self.score = 0;
        self.lives = self.config.rules.lives;
        self.parachutists.clear();
        self.boat.pos.x = self.canvas.x / 2.0;
        self.boat.reset_speed();
        self.plane_pos.x = self.canvas.x;
        self.plane_speed = self.config.plane.initial_speed;
        self.spawns.start(self.clock_ms);
        self.state = GameState::Running;
        info!("round reset");
    }

    // 运行中的一帧：更新、渲染、判定结束；生命归零时回调一次最终分数，之后不再推进
    pub fn frame(&mut self, input: InputState, dt_ms: f64, surface: &mut dyn Surface) -> GameState {
        if self.state != GameState::Running {
            return self.state;
        }
        self.update(input, dt_ms);
        self.render(surface);
        if self.lives == 0 {
            self.state = GameState::GameOver;
            self.spawns.cancel();
            info!("game over, final score {}", self.score);
            (self.on_game_over)(self.score);
        }
        self.state
    }

    pub fn update(&mut self, input: InputState, dt_ms: f64) {
        self.clock_ms += dt_ms;
        self.release_parachutists();
        steer_boat(&mut self.boat, input);
        self.advance_plane();
        self.advance_parachutists();
    }

    // 投放事件到点时，只有飞机在屏幕范围内才真正生成跳伞者
    fn release_parachutists(&mut self) {
        let due = self
            .spawns
            .poll(self.clock_ms, self.plane_speed, &mut self.rng);
        for _ in 0..due {
            if self.plane_on_screen() {
                let pos = vec2(self.plane_pos.x, self.plane_pos.y + self.config.plane.drop_offset);
                self.parachutists
                    .push(Parachutist::new(pos, &self.config.parachutist));
            } else {
                debug!("release skipped, plane at x={}", self.plane_pos.x);
            }
        }
    }

    fn plane_on_screen(&self) -> bool {
        self.plane_pos.x > 0.0 && self.plane_pos.x < self.canvas.x - self.config.plane.width
    }

    // 飞机从右向左飞，完全出屏后回到右侧并加速
    fn advance_plane(&mut self) {
        let plane = &self.config.plane;
        self.plane_pos.x -= self.plane_speed;
        if self.plane_pos.x < -plane.width {
            self.plane_pos.x = self.canvas.x;
            if self.plane_speed < plane.max_speed {
                self.plane_speed = (self.plane_speed + plane.speed_increment).min(plane.max_speed);
            }
        }
    }

    // 先判定落出画布（扣命），否则再判定接住（加分）
    fn advance_parachutists(&mut self) {
        let falling = std::mem::take(&mut self.parachutists);
        let canvas_h = self.canvas.y;
        let boat = &self.boat;
        let mut missed = 0;
        let mut caught = 0;
        let survivors: Vec<Parachutist> = falling
            .into_iter()
            .filter_map(|mut p| {
                p.update();
                if p.pos.y > canvas_h {
                    missed += 1;
                    None
                } else if boat.catches(&p) {
                    caught += 1;
                    None
                } else {
                    Some(p)
                }
            })
            .collect();
        self.parachutists = survivors;
        self.lives = self.lives.saturating_sub(missed);
        self.score += caught * self.config.rules.score_per_catch;
    }

    // 清屏后按层级绘制：背景、海面、飞机、船、跳伞者、HUD
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear(Rect::new(0.0, 0.0, self.canvas.x, self.canvas.y));
        draw_background(surface, self.canvas);
        draw_sea(surface, self.canvas);
        draw_plane(
            surface,
            self.plane_pos,
            vec2(self.config.plane.width, self.config.plane.height),
        );
        draw_boat(surface, &self.boat);
        draw_parachutists(surface, &self.parachutists);
        draw_hud(surface, self.score, self.lives);
    }

    // 窗口尺寸变化：记录新画布尺寸并重设船的位置
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas = vec2(width, height);
        self.resize_boat_canvas();
    }

    pub fn resize_boat_canvas(&mut self) {
        self.boat.update_canvas_size(
            self.canvas.x / 2.0,
            self.canvas.y - self.config.boat.bottom_offset,
        );
    }
}
