mod actors;
mod app;
mod assets;
mod config;
mod game;
mod render;
mod systems;
mod ui;

use crate::config::window_conf;

#[macroquad::main(window_conf)]
// 程序入口：初始化窗口配置并启动游戏主循环
async fn main() {
    app::run().await;
}
