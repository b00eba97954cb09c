//! ECS Balls entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::convert::Infallible;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement};

    use ecs_balls::Settings;
    use ecs_balls::renderer::{FrameView, Presenter, RenderError, RenderState, fps_label};
    use ecs_balls::sim::{Bounds, SimState, tick};

    /// WebGPU canvas plus the DOM text overlay for FPS
    struct WebPresenter {
        render_state: RenderState,
        fps_el: Option<HtmlElement>,
    }

    impl Presenter for WebPresenter {
        type Error = Infallible;

        fn present(&mut self, frame: &FrameView<'_>) -> Result<(), Infallible> {
            self.render_state.draw_or_recover(frame);
            if let Some(el) = &self.fps_el {
                el.set_text_content(Some(&fps_label(frame.fps)));
            }
            Ok(())
        }
    }

    /// Loop instance holding all state
    struct App {
        state: SimState,
        presenter: WebPresenter,
        canvas: HtmlCanvasElement,
    }

    impl App {
        /// Read the canvas size, resizing the backing store and surface on change
        fn sync_surface_size(&mut self) -> Bounds {
            let (width, height) = canvas_pixel_size(&self.canvas);
            if width != self.canvas.width() || height != self.canvas.height() {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
                self.presenter.render_state.resize(width, height);
                log::debug!("Surface resized to {}x{}", width, height);
            }
            Bounds::new(width as f32, height as f32)
        }

        fn frame(&mut self, time: f64) {
            let bounds = self.sync_surface_size();
            let stats = tick(&mut self.state, time, bounds);
            log::trace!("{:?}", stats);

            let view = FrameView::from_state(&self.state, bounds);
            let Ok(()) = self.presenter.present(&view);
        }
    }

    /// Canvas client size in device pixels
    fn canvas_pixel_size(canvas: &HtmlCanvasElement) -> (u32, u32) {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        (width, height)
    }

    async fn create_render_state(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
        circle_segments: u32,
    ) -> Result<RenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height, circle_segments).await
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("viewport")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::warn!("No #viewport canvas found, not starting");
            return;
        };

        // Write back the sanitized values so the stored copy stays loadable
        let settings = Settings::load();
        settings.save();

        let (width, height) = canvas_pixel_size(&canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        // No drawing context means no loop
        let render_state =
            match create_render_state(&canvas, width, height, settings.circle_segments).await {
                Ok(render_state) => render_state,
                Err(e) => {
                    log::warn!("Rendering unavailable, not starting: {}", e);
                    return;
                }
            };

        let fps_el = document
            .get_element_by_id("fps")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if !settings.show_fps {
            if let Some(el) = &fps_el {
                let _ = el.style().set_property("display", "none");
            }
        }

        let seed = js_sys::Date::now() as u64;
        let mut state = SimState::new(seed, settings.simulation.clone());
        let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
        state.start(now, Bounds::new(width as f32, height as f32));

        let app = Rc::new(RefCell::new(App {
            state,
            presenter: WebPresenter {
                render_state,
                fps_el: if settings.show_fps { fps_el } else { None },
            },
            canvas,
        }));

        log::info!("Hello, ecs!");

        request_animation_frame(app);
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ecs_balls::Settings;
    use ecs_balls::sim::{Bounds, SimState, tick};

    env_logger::init();
    log::info!("ECS Balls (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    // Synthetic 60 Hz host on an 800x600 surface
    const FRAME_MS: f64 = 1000.0 / 60.0;
    const FRAMES: u32 = 60 * 30;
    let bounds = Bounds::new(800.0, 600.0);

    let settings = Settings::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = SimState::new(seed, settings.simulation);
    state.start(0.0, bounds);

    let mut spawned = 0;
    let mut removed = 0;
    for frame in 1..=FRAMES {
        let stats = tick(&mut state, frame as f64 * FRAME_MS, bounds);
        spawned += stats.spawned.map_or(0, |_| 1);
        removed += stats.removed;

        if frame % 60 == 0 {
            log::info!(
                "t={:>3}s fps={} balls={}",
                frame / 60,
                stats.fps,
                stats.population
            );
        }
    }

    println!(
        "Ran {} frames: {} spawned, {} annihilated, {} alive",
        FRAMES,
        spawned,
        removed,
        state.store.count()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
