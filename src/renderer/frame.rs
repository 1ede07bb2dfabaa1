//! Display list for one frame
//!
//! `build_frame` is a pure projection of the game state: it reads nothing but
//! the state and mutates nothing, so it can run in any phase, including before
//! the first tick. Backends consume the resulting `Frame`.

use glam::Vec2;

use crate::colors;
use crate::consts::ARENA_MARGIN;
use crate::sim::{GamePhase, GameState, Rect};

/// Filled axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

impl From<&Rect> for FillRect {
    fn from(rect: &Rect) -> Self {
        Self {
            min: rect.min(),
            size: rect.dims,
            color: rect.color,
        }
    }
}

/// Where a piece of text goes on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudSlot {
    Time,
    Best,
    Banner,
    Prompt,
}

impl HudSlot {
    pub const ALL: [HudSlot; 4] = [HudSlot::Time, HudSlot::Best, HudSlot::Banner, HudSlot::Prompt];

    /// DOM element id of the slot
    pub fn element_id(&self) -> &'static str {
        match self {
            HudSlot::Time => "hud-time",
            HudSlot::Best => "hud-best",
            HudSlot::Banner => "hud-banner",
            HudSlot::Prompt => "hud-prompt",
        }
    }
}

/// A line of text, positioned by its left end on the baseline
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub slot: HudSlot,
    pub text: String,
    pub pos: Vec2,
    pub size_px: f32,
    pub color: [f32; 4],
}

impl TextItem {
    fn new(slot: HudSlot, text: impl Into<String>, x: f32, y: f32, size_px: f32, color: [f32; 4]) -> Self {
        Self {
            slot,
            text: text.into(),
            pos: Vec2::new(x, y),
            size_px,
            color,
        }
    }
}

/// Everything drawn in one frame, in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Surface size in pixels
    pub surface: Vec2,
    /// Color the whole surface is cleared to (visible as the margin)
    pub clear: [f32; 4],
    pub rects: Vec<FillRect>,
    pub texts: Vec<TextItem>,
}

impl Frame {
    /// Text for a HUD slot, if the frame shows anything there
    pub fn text(&self, slot: HudSlot) -> Option<&TextItem> {
        self.texts.iter().find(|t| t.slot == slot)
    }
}

/// Format milliseconds as seconds with three decimals
pub fn format_seconds(ms: f64) -> String {
    let secs = ms / 1000.0;
    format!("{:.3}", if secs.is_finite() { secs } else { 0.0 })
}

/// Build the display list for the current state
pub fn build_frame(state: &GameState) -> Frame {
    let surface = state.surface;

    let mut rects = Vec::with_capacity(state.enemies.len() + 2);
    rects.push(FillRect {
        min: Vec2::splat(ARENA_MARGIN),
        size: surface - Vec2::splat(ARENA_MARGIN * 2.0),
        color: colors::ARENA,
    });
    rects.extend(state.enemies.iter().map(|enemy| FillRect::from(&enemy.rect)));
    rects.push(FillRect::from(&state.player.rect));

    let mut texts = vec![
        TextItem::new(
            HudSlot::Time,
            format!("Time {}", format_seconds(state.last_elapsed_time)),
            25.0,
            35.0,
            30.0,
            colors::GREEN,
        ),
        TextItem::new(
            HudSlot::Best,
            format!("Best {}", format_seconds(state.best_time)),
            260.0,
            35.0,
            30.0,
            colors::RED,
        ),
    ];

    match state.phase {
        GamePhase::Waiting => {
            texts.push(TextItem::new(HudSlot::Prompt, "Click red guy to start!", 40.0, 435.0, 30.0, colors::GREEN));
        }
        GamePhase::Playing => {
            texts.push(TextItem::new(HudSlot::Prompt, "Click to pause!", 110.0, 435.0, 30.0, colors::GRAY));
        }
        GamePhase::Paused => {
            texts.push(TextItem::new(HudSlot::Prompt, "Click red guy to resume!", 40.0, 435.0, 30.0, colors::RED));
        }
        GamePhase::GameOver => {
            texts.push(TextItem::new(HudSlot::Banner, "Ded", 100.0, 200.0, 50.0, colors::RED));
            texts.push(TextItem::new(HudSlot::Prompt, "Click to start over.", 63.0, 435.0, 30.0, colors::RED));
        }
    }

    Frame {
        surface,
        clear: colors::MARGIN,
        rects,
        texts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_SURFACE;

    #[test]
    fn test_fresh_state_frame() {
        let state = GameState::new(DEFAULT_SURFACE);
        let frame = build_frame(&state);

        // Arena, four enemies, player last
        assert_eq!(frame.rects.len(), 6);
        assert_eq!(frame.rects[0].min, Vec2::splat(50.0));
        assert_eq!(frame.rects[0].size, Vec2::splat(400.0));
        assert_eq!(frame.rects[1].color, colors::ENEMY);
        assert_eq!(frame.rects[5].color, colors::PLAYER);
        assert_eq!(frame.rects[5].min, Vec2::new(230.0, 230.0));

        assert_eq!(frame.text(HudSlot::Time).map(|t| t.text.as_str()), Some("Time 0.000"));
        assert_eq!(frame.text(HudSlot::Best).map(|t| t.text.as_str()), Some("Best 0.000"));
        assert_eq!(
            frame.text(HudSlot::Prompt).map(|t| t.text.as_str()),
            Some("Click red guy to start!")
        );
        assert!(frame.text(HudSlot::Banner).is_none());
    }

    #[test]
    fn test_prompts_per_phase() {
        let mut state = GameState::new(DEFAULT_SURFACE);
        let cases = [
            (GamePhase::Playing, "Click to pause!", colors::GRAY),
            (GamePhase::Paused, "Click red guy to resume!", colors::RED),
            (GamePhase::GameOver, "Click to start over.", colors::RED),
        ];
        for (phase, prompt, color) in cases {
            state.phase = phase;
            let frame = build_frame(&state);
            let item = frame.text(HudSlot::Prompt).expect("prompt");
            assert_eq!(item.text, prompt);
            assert_eq!(item.color, color);
        }

        state.phase = GamePhase::GameOver;
        let banner = build_frame(&state).text(HudSlot::Banner).cloned().expect("banner");
        assert_eq!(banner.text, "Ded");
        assert_eq!(banner.size_px, 50.0);
    }

    #[test]
    fn test_hud_times_three_decimals() {
        let mut state = GameState::new(DEFAULT_SURFACE);
        state.last_elapsed_time = 12345.6;
        state.best_time = 20000.0;
        let frame = build_frame(&state);
        assert_eq!(frame.text(HudSlot::Time).map(|t| t.text.as_str()), Some("Time 12.346"));
        assert_eq!(frame.text(HudSlot::Best).map(|t| t.text.as_str()), Some("Best 20.000"));
    }

    #[test]
    fn test_build_frame_is_idempotent() {
        let mut state = GameState::new(DEFAULT_SURFACE);
        for phase in [GamePhase::Waiting, GamePhase::Playing, GamePhase::Paused, GamePhase::GameOver] {
            state.phase = phase;
            assert_eq!(build_frame(&state), build_frame(&state));
        }
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.0), "0.000");
        assert_eq!(format_seconds(999.0), "0.999");
        assert_eq!(format_seconds(f64::NAN), "0.000");
    }
}
