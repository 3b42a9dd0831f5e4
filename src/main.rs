//! Veggie Slice entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent};

    use veggie_slice::consts::*;
    use veggie_slice::renderer::{Half, Surface, TextStyle, draw_frame};
    use veggie_slice::sim::{AssetPool, EffectKind, GameState, Sprite, TickInput, VegetableKind, slice_at, tick};
    use veggie_slice::{QualityPreset, Rect, Rgba, Settings};

    /// Image path for each sprite
    fn sprite_path(sprite: Sprite) -> &'static str {
        match sprite {
            Sprite::Vegetable(VegetableKind::Carrot) => "./images/carrot.png",
            Sprite::Vegetable(VegetableKind::Tomato) => "./images/tomato.png",
            Sprite::Vegetable(VegetableKind::Broccoli) => "./images/broccoli.png",
            Sprite::Vegetable(VegetableKind::Pepper) => "./images/pepper.png",
            Sprite::PowerUp(EffectKind::DoubleScore) => "./images/power_double.png",
            Sprite::PowerUp(EffectKind::SlowMotion) => "./images/power_slow.png",
            Sprite::PowerUp(EffectKind::InstantCombo) => "./images/power_combo.png",
            Sprite::Bomb => "./images/devonDaBomb.png",
        }
    }

    /// Canvas 2D implementation of the render surface
    struct CanvasSurface {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        images: HashMap<Sprite, HtmlImageElement>,
    }

    impl CanvasSurface {
        fn log_err(result: Result<(), JsValue>) {
            if let Err(e) = result {
                log::warn!("Canvas error: {:?}", e);
            }
        }
    }

    impl Surface for CanvasSurface {
        fn size(&self) -> Vec2 {
            Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }

        fn clear(&mut self) {
            let size = self.size();
            self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
        }

        fn draw_sprite(&mut self, sprite: Sprite, dst: Rect) {
            if let Some(img) = self.images.get(&sprite) {
                Self::log_err(self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    dst.min.x as f64,
                    dst.min.y as f64,
                    dst.size.x as f64,
                    dst.size.y as f64,
                ));
            }
        }

        fn draw_sprite_half(&mut self, sprite: Sprite, half: Half, pivot: Vec2, rotation: f32, dst: Rect) {
            let Some(img) = self.images.get(&sprite) else {
                return;
            };
            let src_w = img.natural_width() as f64 / 2.0;
            let src_h = img.natural_height() as f64;
            let src_x = match half {
                Half::Left => 0.0,
                Half::Right => src_w,
            };

            self.ctx.save();
            Self::log_err(self.ctx.translate(pivot.x as f64, pivot.y as f64));
            Self::log_err(self.ctx.rotate(rotation as f64));
            Self::log_err(
                self.ctx
                    .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                        img,
                        src_x,
                        0.0,
                        src_w,
                        src_h,
                        dst.min.x as f64,
                        dst.min.y as f64,
                        dst.size.x as f64,
                        dst.size.y as f64,
                    ),
            );
            self.ctx.restore();
        }

        fn tint_rect(&mut self, rect: Rect, color: Rgba) {
            Self::log_err(self.ctx.set_global_composite_operation("source-atop"));
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill_rect(
                rect.min.x as f64,
                rect.min.y as f64,
                rect.size.x as f64,
                rect.size.y as f64,
            );
            Self::log_err(self.ctx.set_global_composite_operation("source-over"));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
            self.ctx.begin_path();
            Self::log_err(self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            ));
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill();
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
            self.ctx.set_stroke_style_str(&color.css());
            self.ctx.set_line_width(width as f64);
            self.ctx.begin_path();
            self.ctx.move_to(from.x as f64, from.y as f64);
            self.ctx.line_to(to.x as f64, to.y as f64);
            self.ctx.stroke();
        }

        fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle) {
            self.ctx.set_font(&format!("{}px Arial", style.size_px));
            self.ctx.set_fill_style_str(&style.color.css());
            Self::log_err(self.ctx.fill_text(text, pos.x as f64, pos.y as f64));
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let input = TickInput {
                bounds: self.surface.size(),
            };
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &input);
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        fn render(&mut self) {
            draw_frame(&self.state, &mut self.surface, &self.settings);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Veggie Slice starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No #gameCanvas element");
                return;
            }
        };

        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = match canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into().ok())
        {
            Some(ctx) => ctx,
            None => {
                log::error!("Canvas 2D context unavailable");
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed);
        // Sprites become spawnable as their images finish loading
        state.assets = AssetPool::empty();
        log::info!("Game initialized with seed: {}", seed);

        let mut settings = Settings::load();
        let query = window.location().search().unwrap_or_default();
        if let Some(preset) = QualityPreset::from_query(&query) {
            settings.apply_preset(preset);
            settings.save();
        }
        log::info!("Quality preset: {}", settings.quality.as_str());

        let game = Rc::new(RefCell::new(Game {
            state,
            surface: CanvasSurface {
                canvas: canvas.clone(),
                ctx,
                images: HashMap::new(),
            },
            settings,
            accumulator: 0.0,
            last_time: 0.0,
        }));

        load_images(game.clone());
        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Veggie Slice running!");
    }

    fn load_images(game: Rc<RefCell<Game>>) {
        for sprite in Sprite::all() {
            let img = match HtmlImageElement::new() {
                Ok(img) => img,
                Err(e) => {
                    log::error!("Failed to create image: {:?}", e);
                    continue;
                }
            };

            let g = game.clone();
            let loaded = img.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                let mut g = g.borrow_mut();
                g.surface.images.insert(sprite, loaded.clone());
                g.state.assets.mark_loaded(sprite);
                log::info!("Loaded {:?}", sprite);
            });
            img.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            img.set_src(sprite_path(sprite));
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let point = Vec2::new(event.client_x() as f32, event.client_y() as f32);
            let mut g = game.borrow_mut();
            let report = slice_at(&mut g.state, point);
            if report.bombs > 0 {
                log::info!("Bomb! Score now {}", g.state.score);
            }
        });
        if let Err(e) = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref()) {
            log::warn!("Failed to attach mousemove listener, slicing disabled: {:?}", e);
        }
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let running = {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.state.is_running()
        };

        if running {
            request_animation_frame(game);
        } else {
            log::info!("Game over, loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Ticks in the headless demo run (two minutes of play)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u64 = 120 * veggie_slice::consts::TICKS_PER_SECOND;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use veggie_slice::{QualityPreset, Settings, Tuning};
    use veggie_slice::renderer::{DrawList, draw_frame};
    use veggie_slice::sim::{GameState, TickInput, slice_at, tick};

    env_logger::init();
    log::info!("Veggie Slice (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play");

    // Usage: veggie-slice [--quality=low|medium|high] [tuning.json]
    let mut preset = None;
    let mut tuning_path = None;
    for arg in std::env::args().skip(1) {
        match arg.strip_prefix("--quality=") {
            Some(name) => match QualityPreset::from_name(name) {
                Some(p) => preset = Some(p),
                None => {
                    log::error!("Unknown quality preset: {}", name);
                    std::process::exit(1);
                }
            },
            None => tuning_path = Some(arg),
        }
    }

    let tuning = match tuning_path {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("Failed to load tuning from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let mut settings = Settings::load();
    if let Some(preset) = preset {
        settings.apply_preset(preset);
        settings.save();
    }
    log::info!(
        "Quality preset: {}, splatter cap {}",
        settings.quality.as_str(),
        settings.max_splatters()
    );
    let mut surface = DrawList::new(1280.0, 720.0);
    let mut state = GameState::with_tuning(42, tuning);
    let input = TickInput {
        bounds: surface.size,
    };

    let mut slices = 0;
    let mut bombs = 0;
    for t in 0..DEMO_TICKS {
        tick(&mut state, &input);

        // Sweep the pointer across the upper half like a frantic player
        let phase = t as f32 * 0.05;
        let point = Vec2::new(
            (phase.sin() * 0.5 + 0.5) * input.bounds.x,
            (0.3 + 0.2 * (phase * 1.7).cos()) * input.bounds.y,
        );
        let report = slice_at(&mut state, point);
        slices += report.vegetables;
        bombs += report.bombs;

        draw_frame(&state, &mut surface, &settings);

        if t % (10 * veggie_slice::consts::TICKS_PER_SECOND) == 0 {
            log::info!(
                "tick {}: score {}, combo {}, live {}, draw calls {}",
                t,
                state.score,
                state.combo,
                state.live_entities(),
                surface.commands.len()
            );
        }
    }

    state.stop();
    println!(
        "Demo finished: score {}, max combo {}, {} slices, {} bombs",
        state.score, state.max_combo, slices, bombs
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
