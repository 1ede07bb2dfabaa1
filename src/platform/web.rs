//! Browser host
//!
//! One `App` is created at startup and shared with the event closures through
//! `Rc<RefCell<_>>`. Everything runs on the page's event loop, so each handler
//! borrows the app, finishes, and releases it before the next event.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::now_ms;
use crate::driver::{Driver, LoopControl};
use crate::error::{Result, SetupError};
use crate::renderer::{HudOverlay, RenderState};

/// Element id of the drawing surface
pub const CANVAS_ID: &str = "canvas";

struct App {
    driver: Driver,
    render_state: RenderState,
    hud: HudOverlay,
    /// Pending animation frame, if the loop is running
    frame_id: Option<i32>,
}

impl App {
    /// Paint the current state
    fn paint(&mut self) {
        let frame = self.driver.build_frame();
        match self.render_state.render(&frame) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.render_state.size;
                self.render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
        self.hud.render(&frame);
    }
}

pub async fn run() -> Result<()> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or(SetupError::NoCanvas(CANVAS_ID))?
        .dyn_into()
        .map_err(|_| SetupError::NotACanvas(CANVAS_ID))?;

    // Pointer offsets are CSS pixels, so the backing store is kept 1:1
    let width = canvas.width().max(1);
    let height = canvas.height().max(1);
    log::info!("Surface {}x{}", width, height);

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
        ..Default::default()
    });

    let surface = instance
        .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        .map_err(|e| SetupError::Surface(e.to_string()))?;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .map_err(|e| SetupError::Adapter(e.to_string()))?;

    log::info!("Using adapter: {:?}", adapter.get_info().name);

    let render_state = RenderState::new(surface, &adapter, width, height).await?;

    let app = Rc::new(RefCell::new(App {
        driver: Driver::new(Vec2::new(width as f32, height as f32)),
        render_state,
        hud: HudOverlay::new(&document),
        frame_id: None,
    }));

    setup_input_handlers(&window, &canvas, app.clone());

    app.borrow_mut().paint();
    log::info!("Pilotlou running!");

    Ok(())
}

/// Pointer position relative to the canvas's top-left corner
fn canvas_point(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        (event.client_x() as f64 - rect.left()) as f32,
        (event.client_y() as f64 - rect.top()) as f32,
    )
}

fn setup_input_handlers(window: &web_sys::Window, canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
    // Mouse move - player follows the pointer while playing
    {
        let app = app.clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let point = canvas_point(&canvas_clone, &event);
            app.borrow_mut().driver.pointer_move(point);
        });
        let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Click anywhere on the page
    {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let point = canvas_point(&canvas_clone, &event);
            let control = app.borrow_mut().driver.click(point, now_ms());
            apply(&app, control);
        });
        let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Act on the driver's answer to an event
fn apply(app: &Rc<RefCell<App>>, control: LoopControl) {
    match control {
        LoopControl::Start | LoopControl::Continue => request_animation_frame(app.clone()),
        LoopControl::Stop => {
            let mut a = app.borrow_mut();
            if let Some(id) = a.frame_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
            a.paint();
        }
        LoopControl::Redraw => app.borrow_mut().paint(),
        LoopControl::Unchanged => {}
    }
}

fn request_animation_frame(app: Rc<RefCell<App>>) {
    let Some(window) = web_sys::window() else {
        log::error!("Window went away, frame loop halted");
        return;
    };
    let app_clone = app.clone();
    let closure = Closure::once(move |_time: f64| {
        game_loop(app_clone);
    });
    match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
        Ok(id) => app.borrow_mut().frame_id = Some(id),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
    closure.forget();
}

fn game_loop(app: Rc<RefCell<App>>) {
    let control = {
        let mut a = app.borrow_mut();
        a.frame_id = None;
        let control = a.driver.frame(now_ms());
        if control != LoopControl::Unchanged {
            a.paint();
        }
        control
    };

    // The loop stopped itself on game over; the frame is already painted
    if control == LoopControl::Continue {
        request_animation_frame(app);
    }
}
