//! Per-frame scene description
//!
//! Plain data handed to an external renderer: everything is an axis-aligned
//! rectangle with a colour, in world pixels (origin top-left, y down).

use glam::Vec2;
use serde::Serialize;

use crate::renderer::colors::{self, Color};
use crate::sim::{GameState, ObstacleKind, Rect, SessionPhase};

/// Number of background stars
pub const STAR_COUNT: u32 = 80;
/// Number of sparkles drifting across the completion scene
pub const SPARKLE_COUNT: u32 = 40;

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub rect: Rect,
    pub color: Color,
}

impl Sprite {
    pub fn new(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self {
            rect: Rect::from_xywh(x, y, w, h),
            color,
        }
    }
}

/// An obstacle as the renderer sees it; the kind selects the visual style
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleSprite {
    pub kind: ObstacleKind,
    pub rect: Rect,
    pub color: Color,
}

/// Composition shown once the journey is finished
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionScene {
    pub background: Color,
    pub sparkles: Vec<Sprite>,
    /// Two figures and their linked arms
    pub figures: Vec<Sprite>,
}

/// Layer drawn over the playfield, selected by session phase
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Overlay {
    None,
    /// Full-screen dimming after a crash
    Dim(Sprite),
    /// Replaces the whole frame
    Completion(CompletionScene),
}

/// Everything needed to draw one frame, in draw order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub size: Vec2,
    pub background: Color,
    pub stars: Vec<Sprite>,
    pub obstacles: Vec<ObstacleSprite>,
    /// Body, nose, window
    pub player: [Sprite; 3],
    /// Completed fraction of the journey, in [0, 1]
    pub progress: f32,
    pub progress_track: Sprite,
    pub progress_fill: Sprite,
    pub overlay: Overlay,
}

impl Scene {
    /// Describe the current frame of a session
    pub fn build(state: &GameState) -> Self {
        let tuning = &state.tuning;
        let (w, h) = (tuning.world_width, tuning.world_height);
        let progress = state.journey.progress();

        let obstacles = state
            .obstacles
            .iter()
            .map(|o| ObstacleSprite {
                kind: o.kind,
                rect: o.rect(),
                color: obstacle_color(o.kind),
            })
            .collect();

        let overlay = match state.phase {
            SessionPhase::Active => Overlay::None,
            SessionPhase::Crashed => Overlay::Dim(Sprite::new(0.0, 0.0, w, h, colors::DIM)),
            SessionPhase::Completed => Overlay::Completion(completion_scene(w, h, state.clock_ms)),
        };

        let bar_width = w - 40.0;
        Self {
            size: Vec2::new(w, h),
            background: colors::BACKGROUND,
            stars: starfield(w, h),
            obstacles,
            player: craft(state.player.x, state.player.y),
            progress,
            progress_track: Sprite::new(20.0, h - 28.0, bar_width, 10.0, colors::PROGRESS_TRACK),
            progress_fill: Sprite::new(20.0, h - 28.0, bar_width * progress, 10.0, colors::ACCENT),
            overlay,
        }
    }

    /// Rectangles in draw order (background excluded)
    pub fn sprites(&self) -> Vec<Sprite> {
        if let Overlay::Completion(done) = &self.overlay {
            return done.sparkles.iter().chain(&done.figures).copied().collect();
        }

        let mut out = Vec::with_capacity(self.stars.len() + self.obstacles.len() + 6);
        out.extend_from_slice(&self.stars);
        out.extend(self.obstacles.iter().map(|o| Sprite {
            rect: o.rect,
            color: o.color,
        }));
        out.extend_from_slice(&self.player);
        out.push(self.progress_track);
        out.push(self.progress_fill);
        if let Overlay::Dim(dim) = &self.overlay {
            out.push(*dim);
        }
        out
    }

    /// Colour the frame is cleared to
    pub fn clear_color(&self) -> Color {
        match &self.overlay {
            Overlay::Completion(done) => done.background,
            _ => self.background,
        }
    }
}

pub fn obstacle_color(kind: ObstacleKind) -> Color {
    match kind {
        ObstacleKind::Cloud => colors::CLOUD,
        ObstacleKind::Bird => colors::BIRD,
        ObstacleKind::StormColumn => colors::STORM,
    }
}

/// Fixed star pattern; identical every frame
pub fn starfield(width: f32, height: f32) -> Vec<Sprite> {
    let w = (width as u32).max(1);
    let band = ((height as u32).saturating_sub(160)).max(1);
    (0..STAR_COUNT)
        .map(|i| {
            let x = (i * 97) % w;
            let y = (i * 53) % band + 20;
            Sprite::new(x as f32, y as f32, 2.0, 1.0, colors::STAR)
        })
        .collect()
}

/// The craft: body, nose and cockpit window around its centre
pub fn craft(x: f32, y: f32) -> [Sprite; 3] {
    [
        Sprite::new(x - 30.0, y - 14.0, 60.0, 28.0, colors::CRAFT_BODY),
        Sprite::new(x + 18.0, y - 12.0, 20.0, 24.0, colors::ACCENT),
        Sprite::new(x + 2.0, y - 6.0, 18.0, 12.0, colors::CRAFT_WINDOW),
    ]
}

fn completion_scene(width: f32, height: f32, clock_ms: f64) -> CompletionScene {
    let w = (width as u64).max(1);
    let band = ((height as u64).saturating_sub(200)).max(1);
    let drift = (clock_ms.max(0.0) / 30.0) as u64;

    let sparkles = (0..SPARKLE_COUNT as u64)
        .map(|i| {
            let x = (i * 137 + drift) % w;
            let y = (i * 71) % band + 40;
            Sprite::new(x as f32, y as f32, 1.0, 1.0, colors::SPARKLE)
        })
        .collect();

    let (cx, cy) = (width * 0.5, height * 0.5);
    let figures = vec![
        Sprite::new(cx - 60.0, cy - 20.0, 44.0, 64.0, colors::FIGURE_LEFT),
        Sprite::new(cx + 16.0, cy - 20.0, 44.0, 64.0, colors::FIGURE_RIGHT),
        Sprite::new(cx - 56.0, cy + 6.0, 56.0, 10.0, colors::ARMS),
        Sprite::new(cx + 4.0, cy + 6.0, 56.0, 10.0, colors::ARMS),
    ];

    CompletionScene {
        background: colors::COMPLETION_BACKGROUND,
        sparkles,
        figures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FrameDelta, Obstacle, TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_starfield_is_stable() {
        let a = starfield(960.0, 540.0);
        let b = starfield(960.0, 540.0);
        assert_eq!(a, b);
        assert_eq!(a.len(), 80);
        assert_eq!(a[1].rect.pos, Vec2::new(97.0, 73.0));
        assert!(a.iter().all(|s| s.rect.top() >= 20.0 && s.rect.top() < 400.0));
    }

    #[test]
    fn test_active_scene_has_no_overlay() {
        let mut state = GameState::new(1, Tuning::default());
        state.obstacles.insert(Obstacle {
            kind: ObstacleKind::Bird,
            pos: Vec2::new(600.0, 200.0),
            size: Vec2::new(44.0, 28.0),
            speed: 5.0,
        });
        let scene = Scene::build(&state);
        assert_eq!(scene.overlay, Overlay::None);
        assert_eq!(scene.obstacles.len(), 1);
        assert_eq!(scene.obstacles[0].color, colors::BIRD);
        assert_eq!(scene.progress, 0.0);
        assert_eq!(scene.progress_fill.rect.size.x, 0.0);
        let centre = scene.player[0].rect.center();
        assert!((centre - Vec2::new(state.player.x, state.player.y)).length() < 1e-3);
        assert_eq!(scene.clear_color(), colors::BACKGROUND);
        // stars + obstacle + craft + bar
        assert_eq!(scene.sprites().len(), 80 + 1 + 3 + 2);
    }

    #[test]
    fn test_progress_bar_tracks_journey() {
        let mut state = GameState::new(1, Tuning::default());
        state.journey.remaining = state.journey.total * 0.25;
        let scene = Scene::build(&state);
        assert!((scene.progress - 0.75).abs() < 1e-6);
        assert!((scene.progress_fill.rect.size.x - 920.0 * 0.75).abs() < 1e-3);
    }

    #[test]
    fn test_crashed_scene_dims() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = SessionPhase::Crashed;
        let scene = Scene::build(&state);
        match &scene.overlay {
            Overlay::Dim(dim) => assert_eq!(dim.rect, Rect::from_xywh(0.0, 0.0, 960.0, 540.0)),
            other => panic!("expected dim overlay, got {:?}", other),
        }
        assert_eq!(scene.sprites().last().map(|s| s.color), Some(colors::DIM));
    }

    #[test]
    fn test_completion_scene_animates_with_clock() {
        let tuning = Tuning {
            journey_total: 1.0,
            ..Default::default()
        };
        let mut state = GameState::new(1, tuning);
        let delta = FrameDelta::one_frame(&state.tuning);
        tick(&mut state, &TickInput::default(), delta);
        assert_eq!(state.phase, SessionPhase::Completed);

        let first = Scene::build(&state);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), delta);
        }
        let later = Scene::build(&state);

        let (Overlay::Completion(a), Overlay::Completion(b)) = (&first.overlay, &later.overlay) else {
            panic!("expected completion overlays");
        };
        assert_eq!(a.sparkles.len(), 40);
        assert_eq!(a.figures.len(), 4);
        assert_ne!(a.sparkles, b.sparkles);
        assert_eq!(first.progress, 1.0);
        assert_eq!(later.clear_color(), colors::COMPLETION_BACKGROUND);
        assert_eq!(later.sprites().len(), 44);
    }
}
