// 生成游戏使用的占位贴图到 assets/，尺寸与游戏内绘制尺寸一致

use std::fs;

use image::{Rgba, RgbaImage};

const OUT_DIR: &str = "assets";

type Rgba8 = [u8; 4];

const SKY_TOP: Rgba8 = [122, 186, 235, 255];
const SKY_BOTTOM: Rgba8 = [214, 236, 250, 255];
const SEA_DEEP: Rgba8 = [24, 86, 150, 255];
const SEA_FOAM: Rgba8 = [200, 232, 246, 255];
const HULL: Rgba8 = [150, 82, 40, 255];
const HULL_DARK: Rgba8 = [96, 50, 24, 255];
const SAIL: Rgba8 = [244, 242, 232, 255];
const FUSELAGE: Rgba8 = [198, 204, 214, 255];
const WING: Rgba8 = [140, 150, 166, 255];
const WINDOW: Rgba8 = [60, 110, 170, 255];
const CANOPY: Rgba8 = [226, 70, 60, 255];
const CANOPY_STRIPE: Rgba8 = [250, 226, 90, 255];
const ROPE: Rgba8 = [70, 70, 70, 255];
const SKIN: Rgba8 = [236, 196, 160, 255];
const SUIT: Rgba8 = [60, 120, 70, 255];

// 带透明度混合的画布
struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::new(width, height),
        }
    }

    fn blend(&mut self, x: i32, y: i32, src: Rgba8) {
        let (w, h) = self.img.dimensions();
        if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h {
            return;
        }
        let dst = self.img.get_pixel(x as u32, y as u32).0;
        let sa = src[3] as f32 / 255.0;
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        let out = if out_a <= 0.0 {
            [0, 0, 0, 0]
        } else {
            let mix = |s: u8, d: u8| ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a) as u8;
            [
                mix(src[0], dst[0]),
                mix(src[1], dst[1]),
                mix(src[2], dst[2]),
                (out_a * 255.0) as u8,
            ]
        };
        self.img.put_pixel(x as u32, y as u32, Rgba(out));
    }

    fn rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba8) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.blend(x, y, color);
            }
        }
    }

    fn ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba8) {
        self.ellipse_rows(cx, cy, rx, ry, cy + ry, color);
    }

    // 只填充椭圆上半部分
    fn dome(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba8) {
        self.ellipse_rows(cx, cy, rx, ry, cy, color);
    }

    fn ellipse_rows(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, last_row: i32, color: Rgba8) {
        let rx2 = (rx * rx).max(1) as f32;
        let ry2 = (ry * ry).max(1) as f32;
        for y in (cy - ry)..=last_row {
            for x in (cx - rx)..=(cx + rx) {
                let dx = (x - cx) as f32;
                let dy = (y - cy) as f32;
                if dx * dx / rx2 + dy * dy / ry2 <= 1.0 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    // 水平扫描线填充三角形
    fn triangle(&mut self, a: (i32, i32), b: (i32, i32), c: (i32, i32), color: Rgba8) {
        let min_y = a.1.min(b.1).min(c.1);
        let max_y = a.1.max(b.1).max(c.1);
        let edges = [(a, b), (b, c), (c, a)];
        for y in min_y..=max_y {
            let fy = y as f32 + 0.5;
            let mut xs: Vec<f32> = edges
                .iter()
                .filter(|((_, y0), (_, y1))| ((*y0 as f32) <= fy) != ((*y1 as f32) <= fy))
                .map(|((x0, y0), (x1, y1))| {
                    let t = (fy - *y0 as f32) / (*y1 - *y0) as f32;
                    *x0 as f32 + t * (*x1 - *x0) as f32
                })
                .collect();
            xs.sort_by(f32::total_cmp);
            if let [left, .., right] = xs.as_slice() {
                for x in left.round() as i32..=right.round() as i32 {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32), color: Rgba8) {
        let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).max(1);
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = from.0 as f32 + (to.0 - from.0) as f32 * t;
            let y = from.1 as f32 + (to.1 - from.1) as f32 * t;
            self.blend(x.round() as i32, y.round() as i32, color);
        }
    }

    fn save(self, name: &str) -> Result<(), String> {
        let path = format!("{OUT_DIR}/{name}");
        self.img
            .save(&path)
            .map_err(|e| format!("save {path} failed: {e}"))?;
        println!("wrote {path} ({}x{})", self.img.width(), self.img.height());
        Ok(())
    }
}

fn lerp(a: Rgba8, b: Rgba8, t: f32) -> Rgba8 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]), mix(a[3], b[3])]
}

// 天空渐变与几朵云
fn background() -> Canvas {
    let (w, h) = (640, 360);
    let mut canvas = Canvas::new(w, h);
    for y in 0..h as i32 {
        let t = y as f32 / (h - 1) as f32;
        canvas.rect(0, y, w as i32 - 1, y, lerp(SKY_TOP, SKY_BOTTOM, t));
    }
    let cloud = [255, 255, 255, 200];
    for (cx, cy) in [(120, 90), (360, 60), (520, 130)] {
        canvas.ellipse(cx, cy, 46, 16, cloud);
        canvas.ellipse(cx - 26, cy + 6, 26, 12, cloud);
        canvas.ellipse(cx + 28, cy + 4, 30, 13, cloud);
    }
    canvas
}

// 海面：深色底加一排浪花
fn sea() -> Canvas {
    let (w, h) = (640, 40);
    let mut canvas = Canvas::new(w, h);
    canvas.rect(0, 0, w as i32 - 1, h as i32 - 1, SEA_DEEP);
    for x in (0..w as i32).step_by(32) {
        canvas.ellipse(x + 16, 3, 14, 4, SEA_FOAM);
        canvas.line((x + 4, 14), (x + 20, 14), lerp(SEA_DEEP, SEA_FOAM, 0.4));
    }
    canvas
}

// 飞机机头朝左
fn plane() -> Canvas {
    let mut canvas = Canvas::new(100, 50);
    canvas.ellipse(50, 26, 44, 9, FUSELAGE);
    canvas.triangle((48, 26), (66, 26), (74, 4), WING);
    canvas.triangle((48, 28), (66, 28), (70, 46), WING);
    canvas.triangle((84, 24), (96, 24), (96, 8), WING);
    for x in (18..70).step_by(10) {
        canvas.ellipse(x, 24, 2, 2, WINDOW);
    }
    canvas.ellipse(10, 25, 4, 4, WINDOW);
    canvas
}

fn boat() -> Canvas {
    let mut canvas = Canvas::new(150, 60);
    canvas.triangle((74, 4), (74, 38), (120, 38), SAIL);
    canvas.triangle((70, 10), (70, 38), (36, 38), SAIL);
    canvas.rect(71, 2, 73, 40, HULL_DARK);
    canvas.triangle((0, 40), (150, 40), (128, 58), HULL);
    canvas.triangle((0, 40), (128, 58), (22, 58), HULL);
    canvas.line((4, 42), (146, 42), HULL_DARK);
    canvas
}

// 伞盖、伞绳与人
fn parachutist() -> Canvas {
    let mut canvas = Canvas::new(50, 60);
    canvas.dome(25, 16, 24, 15, CANOPY);
    canvas.rect(22, 2, 27, 16, CANOPY_STRIPE);
    for anchor in [2, 14, 36, 48] {
        canvas.line((anchor, 16), (25, 40), ROPE);
    }
    canvas.ellipse(25, 42, 4, 4, SKIN);
    canvas.rect(21, 46, 29, 54, SUIT);
    canvas.line((22, 55), (20, 59), SUIT);
    canvas.line((28, 55), (30, 59), SUIT);
    canvas
}

fn main() -> Result<(), String> {
    fs::create_dir_all(OUT_DIR).map_err(|e| format!("create {OUT_DIR} failed: {e}"))?;
    background().save("background.png")?;
    sea().save("sea.png")?;
    plane().save("plane.png")?;
    boat().save("boat.png")?;
    parachutist().save("parachutist.png")?;
    Ok(())
}
