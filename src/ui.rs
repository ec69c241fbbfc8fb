use macroquad::prelude::*;

use crate::config::GameConfig;

#[derive(Default)]
pub struct Ui {
    pub font: Option<Font>,
}

impl Ui {
    // 获取字体引用，便于统一绘制接口
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }
}

// 绘制UI文字，优先使用加载的字体
pub fn draw_text_ui(ui: &Ui, text: &str, x: f32, y: f32, size: u16, color: Color) {
    if let Some(font) = ui.font() {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: Some(font),
                font_size: size,
                color,
                ..Default::default()
            },
        );
    } else {
        draw_text(text, x, y, size as f32, color);
    }
}

pub fn measure_text_ui(ui: &Ui, text: &str, size: u16) -> TextDimensions {
    measure_text(text, ui.font(), size, 1.0)
}

// 在给定区域内水平居中绘制文字
pub fn draw_centered_text(ui: &Ui, text: &str, area: Rect, y: f32, size: u16, color: Color) {
    let dims = measure_text_ui(ui, text, size);
    draw_text_ui(ui, text, area.x + (area.w - dims.width) * 0.5, y, size, color);
}

pub const MIN_SCREEN_W: f32 = 1024.0;
pub const MIN_SCREEN_H: f32 = 400.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeviceIssue {
    Touch,
    ScreenTooSmall,
}

impl DeviceIssue {
    pub fn message(self) -> &'static str {
        match self {
            DeviceIssue::Touch => "Touch devices are not supported. Please use a desktop or laptop.",
            DeviceIssue::ScreenTooSmall => {
                "Screen is too small. Please resize your window or use a larger device."
            }
        }
    }
}

// 开局前的设备检查：触屏优先于尺寸
pub fn check_device(screen: Vec2, touch_seen: bool) -> Result<(), DeviceIssue> {
    if touch_seen {
        return Err(DeviceIssue::Touch);
    }
    if screen.x < MIN_SCREEN_W || screen.y < MIN_SCREEN_H {
        return Err(DeviceIssue::ScreenTooSmall);
    }
    Ok(())
}

// 弹窗：开局前、设备不支持时以及游戏结束后显示
#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub lines: Vec<String>,
    pub button: Option<&'static str>,
    pub visible: bool,
}

impl Popup {
    pub fn welcome(device: Result<(), DeviceIssue>) -> Self {
        match device {
            Ok(()) => Self {
                lines: vec!["Save as many parachutist possible!".to_string()],
                button: Some("Start Game"),
                visible: true,
            },
            Err(issue) => Self {
                lines: vec![issue.message().to_string()],
                button: None,
                visible: true,
            },
        }
    }

    pub fn game_over(score: u32) -> Self {
        Self {
            lines: vec!["Game over".to_string(), format!("You scored: {score}")],
            button: Some("Play Again"),
            visible: true,
        }
    }

    pub fn hidden() -> Self {
        Self {
            lines: Vec::new(),
            button: None,
            visible: false,
        }
    }
}

const PANEL_W: f32 = 560.0;
const PANEL_H: f32 = 240.0;
const BUTTON_W: f32 = 200.0;
const BUTTON_H: f32 = 48.0;

pub fn panel_rect(screen: Vec2) -> Rect {
    Rect::new(
        (screen.x - PANEL_W) * 0.5,
        (screen.y - PANEL_H) * 0.5,
        PANEL_W,
        PANEL_H,
    )
}

pub fn button_rect(screen: Vec2) -> Rect {
    let panel = panel_rect(screen);
    Rect::new(
        panel.x + (panel.w - BUTTON_W) * 0.5,
        panel.y + panel.h - BUTTON_H - 24.0,
        BUTTON_W,
        BUTTON_H,
    )
}

// 绘制弹窗，返回本帧是否按下按钮（鼠标点击或回车/空格）
pub fn draw_popup(ui: &Ui, popup: &Popup, screen: Vec2) -> bool {
    if !popup.visible {
        return false;
    }
    let panel = panel_rect(screen);
    draw_rectangle(0.0, 0.0, screen.x, screen.y, Color::new(0.0, 0.0, 0.0, 0.35));
    draw_rectangle(panel.x, panel.y, panel.w, panel.h, Color::new(1.0, 1.0, 1.0, 0.95));
    draw_rectangle_lines(panel.x, panel.y, panel.w, panel.h, 2.0, DARKGRAY);

    let mut y = panel.y + 64.0;
    for line in &popup.lines {
        draw_centered_text(ui, line, panel, y, 26, BLACK);
        y += 36.0;
    }

    let Some(label) = popup.button else {
        return false;
    };
    let button = button_rect(screen);
    let hovered = button.contains(mouse_position().into());
    let fill = if hovered { SKYBLUE } else { BLUE };
    draw_rectangle(button.x, button.y, button.w, button.h, fill);
    draw_centered_text(ui, label, button, button.y + 32.0, 24, WHITE);

    let clicked = hovered && is_mouse_button_pressed(MouseButton::Left);
    clicked || is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::Space)
}

pub fn canvas_hint(config: &GameConfig) -> String {
    format!(
        "Left/Right or A/D to steer. {} lives, {} points per catch.",
        config.rules.lives, config.rules.score_per_catch
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_check() {
        assert_eq!(check_device(vec2(1280.0, 720.0), false), Ok(()));
        assert_eq!(check_device(vec2(1024.0, 400.0), false), Ok(()));
        assert_eq!(
            check_device(vec2(1023.0, 720.0), false),
            Err(DeviceIssue::ScreenTooSmall)
        );
        assert_eq!(
            check_device(vec2(1280.0, 399.0), false),
            Err(DeviceIssue::ScreenTooSmall)
        );
        assert_eq!(check_device(vec2(800.0, 300.0), true), Err(DeviceIssue::Touch));
    }

    #[test]
    fn test_welcome_popup() {
        let ok = Popup::welcome(Ok(()));
        assert_eq!(ok.button, Some("Start Game"));
        assert_eq!(ok.lines, vec!["Save as many parachutist possible!".to_string()]);

        let blocked = Popup::welcome(Err(DeviceIssue::Touch));
        assert_eq!(blocked.button, None);
        assert!(blocked.lines[0].starts_with("Touch devices are not supported"));
    }

    #[test]
    fn test_game_over_popup() {
        let popup = Popup::game_over(120);
        assert_eq!(popup.lines, vec!["Game over".to_string(), "You scored: 120".to_string()]);
        assert_eq!(popup.button, Some("Play Again"));
        assert!(!Popup::hidden().visible);
    }

    #[test]
    fn test_button_inside_panel() {
        let screen = vec2(1280.0, 720.0);
        let panel = panel_rect(screen);
        let button = button_rect(screen);
        assert!(panel.contains(button.point()));
        assert!(panel.contains(button.point() + button.size()));
        assert_eq!(panel.center(), vec2(640.0, 360.0));
    }
}
