//! Kickabout entry point
//!
//! Browser: canvas + WebGPU, driven by requestAnimationFrame.
//! Native: headless match replaying an input script.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement};

    use kickabout::consts::*;
    use kickabout::platform::web::WebInput;
    use kickabout::renderer::{RenderState, Renderer, ShapeBatch, TextAnchor};
    use kickabout::sim::Rect;
    use kickabout::{Color, FrameStatus, Game, Tuning};

    /// Batches on the CPU; the frame loop uploads once per animation frame
    struct WebRenderer {
        batch: ShapeBatch,
        gpu: RenderState,
        hud: Element,
        uploaded: u64,
    }

    impl Renderer for WebRenderer {
        fn fill_background(&mut self, color: Color) {
            self.batch.fill_background(color);
        }

        fn draw_rect(&mut self, rect: Rect, color: Color, outline: Option<f32>) {
            self.batch.draw_rect(rect, color, outline);
        }

        fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color, outline: Option<f32>) {
            self.batch.draw_circle(center, radius, color, outline);
        }

        fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32) {
            self.batch.draw_line(start, end, color, width);
        }

        fn draw_text(&mut self, text: &str, anchor: TextAnchor, color: Color) {
            self.batch.draw_text(text, anchor, color);
        }

        fn present(&mut self) {
            self.batch.present();
        }
    }

    impl WebRenderer {
        /// Push the latest presented batch to the GPU and the HUD
        fn flush(&mut self) {
            if self.batch.frames_presented == self.uploaded {
                return;
            }
            self.uploaded = self.batch.frames_presented;

            match self.gpu.render(&self.batch) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    self.gpu.resize(self.gpu.size.0, self.gpu.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
            self.update_hud();
        }

        /// One absolutely positioned element per text label
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            for (i, label) in self.batch.labels.iter().enumerate() {
                let id = format!("hud-label-{}", i);
                let el = match document.get_element_by_id(&id) {
                    Some(el) => el,
                    None => {
                        let Ok(el) = document.create_element("div") else {
                            continue;
                        };
                        el.set_id(&id);
                        let _ = self.hud.append_child(&el);
                        el
                    }
                };
                el.set_text_content(Some(&label.text));

                let Ok(el) = el.dyn_into::<HtmlElement>() else {
                    continue;
                };
                let style = el.style();
                let [r, g, b, _] = label.color;
                let _ = style.set_property("position", "absolute");
                let _ = style.set_property(
                    "color",
                    &format!("rgb({}, {}, {})", (r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8),
                );
                let (pos, side) = match label.anchor {
                    TextAnchor::TopLeft(pos) => (pos, "left"),
                    TextAnchor::TopRight(pos) => (Vec2::new(FIELD_WIDTH - pos.x, pos.y), "right"),
                };
                let _ = style.set_property(side, &format!("{}%", pos.x / FIELD_WIDTH * 100.0));
                let _ = style.set_property("top", &format!("{}%", pos.y / FIELD_HEIGHT * 100.0));
            }
        }
    }

    struct App {
        game: Game,
        input: WebInput,
        renderer: WebRenderer,
        accumulator: f32,
        last_time: f64,
    }

    impl App {
        /// Run as many fixed ticks as the elapsed time allows.
        /// Returns false once the game asked to quit.
        fn update(&mut self, dt: f32) -> bool {
            self.accumulator += dt.min(0.25);

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                if self.game.frame(&mut self.input, &mut self.renderer) == FrameStatus::Quit {
                    return false;
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            // Drop backlog instead of fast-forwarding later
            if substeps == MAX_SUBSTEPS {
                self.accumulator = 0.0;
            }

            self.renderer.flush();
            true
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Kickabout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        document.set_title(WINDOW_TITLE);

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let hud = document.get_element_by_id("hud").expect("no hud");

        let width = FIELD_WIDTH as u32;
        let height = FIELD_HEIGHT as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let gpu = RenderState::new(surface, &adapter, width, height).await;
        let input = WebInput::attach(&canvas);

        let app = Rc::new(RefCell::new(App {
            game: Game::new(Tuning::default()),
            input,
            renderer: WebRenderer {
                batch: ShapeBatch::new(),
                gpu,
                hud,
                uploaded: 0,
            },
            accumulator: 0.0,
            last_time: 0.0,
        }));

        request_animation_frame(app);

        log::info!("Kickabout running!");
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_running = {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            a.last_time = time;

            a.update(dt)
        };

        if keep_running {
            request_animation_frame(app);
        } else {
            log::info!("Kickabout stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use kickabout::consts::WINDOW_TITLE;
    use kickabout::platform::script::DEMO_SCRIPT;
    use kickabout::platform::{InputScript, ManualClock, ScriptedInput, SleepClock};
    use kickabout::renderer::ShapeBatch;
    use kickabout::{Game, Tuning};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Play a headless match from an input script", long_about = None)]
    struct Args {
        /// Input script JSON (defaults to the bundled kickoff demo)
        #[arg(long)]
        script: Option<PathBuf>,
        /// Physics tuning JSON
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Run as fast as possible instead of 60 fps
        #[arg(long)]
        unpaced: bool,
    }

    pub fn main() -> Result<()> {
        env_logger::init();
        let args = Args::parse();
        log::info!("{} (native, headless) starting...", WINDOW_TITLE);

        let tuning = match &args.tuning {
            Some(path) => {
                let json = fs::read_to_string(path).with_context(|| format!("read tuning {:?}", path))?;
                Tuning::from_json(&json).context("parse tuning")?
            }
            None => Tuning::default(),
        };

        let script_json = match &args.script {
            Some(path) => fs::read_to_string(path).with_context(|| format!("read script {:?}", path))?,
            None => DEMO_SCRIPT.to_string(),
        };
        let script = InputScript::from_json(&script_json).context("parse input script")?;
        log::info!("Script covers {} frames", script.len_frames());

        let mut input = ScriptedInput::new(script);
        let mut batch = ShapeBatch::new();
        let mut game = Game::new(tuning);

        let frames = if args.unpaced {
            game.run(&mut input, &mut batch, &mut ManualClock::new())
        } else {
            game.run(&mut input, &mut batch, &mut SleepClock::new())
        };

        let (p1, p2) = game.state().scores();
        println!("Played {} frames. Player 1: {}  Player 2: {}", frames, p1, p2);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
