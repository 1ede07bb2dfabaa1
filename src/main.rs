//! Pilotlou entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already set: {e}").into());
    }

    log::info!("Pilotlou starting...");

    pilotlou::platform::web::run().await.map_err(|e| {
        log::error!("Setup failed: {}", e);
        JsValue::from_str(&e.to_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session: start a run, hold the pointer still and report how long
/// the player survives.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pilotlou::Driver;
    use pilotlou::consts::DEFAULT_SURFACE;
    use pilotlou::platform::native::{FixedRateLoop, SessionReport};
    use pilotlou::platform::now_ms;

    env_logger::init();
    log::info!("Pilotlou (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    let mut driver = Driver::new(DEFAULT_SURFACE);
    let start = driver.state().player.rect.pos;
    driver.click(start, now_ms());

    // One minute at 60 Hz
    let frames = FixedRateLoop::default()
        .with_max_frames(60 * 60)
        .run(&mut driver, now_ms, |frame| {
            if let Some(time) = frame.text(pilotlou::renderer::HudSlot::Time) {
                log::trace!("{}", time.text);
            }
        });

    log::info!("Session ended after {} frames", frames);
    let report = SessionReport::from_driver(&driver);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize report: {}", e),
    }
}
