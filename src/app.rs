use std::cell::Cell;
use std::rc::Rc;

use macroquad::logging::{info, warn};
use macroquad::prelude::*;

use crate::assets::{load_ui_font, Sprites};
use crate::config::{GameConfig, CONFIG_PATH};
use crate::game::{Game, GameState};
use crate::render::MacroquadSurface;
use crate::systems::read_input;
use crate::ui::{canvas_hint, check_device, draw_popup, draw_text_ui, Popup, Ui};

// 单帧最长计入时长，避免窗口失焦后一次性补发大量投放
const MAX_FRAME_MS: f64 = 250.0;

// 游戏主循环：加载配置与贴图，驱动弹窗、输入、更新与渲染
pub async fn run() {
    let config = GameConfig::load_from_file(CONFIG_PATH).unwrap_or_else(|err| {
        warn!("{}, using built-in tuning", err);
        GameConfig::default()
    });
    let hint = canvas_hint(&config);

    let ui = Ui {
        font: load_ui_font().await,
    };
    let sprites = Sprites::load(&config.assets).await;

    // 结束回调只记录分数，弹窗由主循环负责
    let final_score = Rc::new(Cell::new(None));
    let sink = Rc::clone(&final_score);

    let mut canvas = vec2(screen_width(), screen_height());
    let seed = (macroquad::miniquad::date::now() * 1000.0) as u64;
    let mut game = Game::new(config, canvas, seed, move |score| sink.set(Some(score)));

    // 触屏平台不支持键盘操作
    let touch_device = cfg!(any(target_os = "android", target_os = "ios"));
    let mut popup = Popup::welcome(check_device(canvas, touch_device));

    loop {
        let size = vec2(screen_width(), screen_height());
        if size != canvas {
            canvas = size;
            game.resize(size.x, size.y);
        }

        clear_background(WHITE);
        let mut surface = MacroquadSurface::new(&sprites, &ui);
        match game.state() {
            GameState::Running => {
                let dt_ms = (get_frame_time() as f64 * 1000.0).min(MAX_FRAME_MS);
                game.frame(read_input(), dt_ms, &mut surface);
            }
            // 结束后保留最后一帧画面
            GameState::GameOver => game.render(&mut surface),
            GameState::Idle => {
                popup = Popup::welcome(check_device(canvas, touch_device));
            }
        }

        if let Some(score) = final_score.take() {
            popup = Popup::game_over(score);
        }

        if popup.visible {
            draw_text_ui(&ui, &hint, 16.0, canvas.y - 16.0, 20, DARKGRAY);
        }
        if draw_popup(&ui, &popup, canvas) {
            popup = Popup::hidden();
            match game.state() {
                GameState::Idle => game.init(),
                GameState::GameOver => game.reset_game(),
                GameState::Running => info!("start pressed during a running round"),
            }
        }

        next_frame().await;
    }
}
