//! file: input.rs
//! author: Jacob Xie
//! date: 2025/12/21 09:47:10 Sunday
//! brief: screen layout and pointer-click to action mapping

use super::{Action, Phase, Point, Rect};

pub const OPTION_COUNT: usize = 4;

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;
const START_BUTTON_Y: f32 = 375.0;
const PLAY_AGAIN_BUTTON_Y: f32 = 325.0;
const MENU_BUTTON_Y: f32 = 395.0;
const PULSE_AMOUNT: f32 = 0.05;
const PULSE_PERIOD_MS: f32 = 200.0;
const OPTION_TOP: f32 = 250.0;
const OPTION_SPACING: f32 = 80.0;
const OPTION_WIDTH: f32 = 600.0;
const OPTION_HEIGHT: f32 = 60.0;
const SERVICE_BOX_TOP: f32 = 100.0;
const SERVICE_BOX_WIDTH: f32 = 300.0;
const SERVICE_BOX_HEIGHT: f32 = 100.0;
const SCORE_BOX_WIDTH: f32 = 180.0;
const SCORE_BOX_HEIGHT: f32 = 40.0;
const FEEDBACK_BOX_WIDTH: f32 = 400.0;
const FEEDBACK_BOX_HEIGHT: f32 = 200.0;

/// Oscillating scale applied to a button's size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pulse {
    pub amount: f32,
    pub period_ms: f32,
}

impl Pulse {
    pub fn factor(&self, now_ms: u64) -> f32 {
        let phase = now_ms as f64 / f64::from(self.period_ms);
        (1.0 + f64::from(self.amount) * phase.sin()) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonSpec {
    pub center: Point,
    pub width: f32,
    pub height: f32,
    pub pulse: Option<Pulse>,
}

impl ButtonSpec {
    fn fixed(center: Point) -> Self {
        Self {
            center,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            pulse: None,
        }
    }

    /// Bounds at `now_ms`, scaled about the center when pulsing. Drawing
    /// and hit testing both go through here.
    pub fn bounds(&self, now_ms: u64) -> Rect {
        let factor = self.pulse.map_or(1.0, |pulse| pulse.factor(now_ms));
        Rect::centered(self.center, self.width * factor, self.height * factor)
    }
}

/// Static geometry of every screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenLayout {
    pub start: ButtonSpec,
    pub play_again: ButtonSpec,
    pub menu: ButtonSpec,
    pub service_box: Rect,
    pub score_box: Rect,
    pub feedback_box: Rect,
    center_x: f32,
}

impl ScreenLayout {
    pub fn new(window_width: f32, window_height: f32) -> Self {
        let center_x = window_width / 2.0;
        Self {
            start: ButtonSpec {
                pulse: Some(Pulse {
                    amount: PULSE_AMOUNT,
                    period_ms: PULSE_PERIOD_MS,
                }),
                ..ButtonSpec::fixed(Point::new(center_x, START_BUTTON_Y))
            },
            play_again: ButtonSpec::fixed(Point::new(center_x, PLAY_AGAIN_BUTTON_Y)),
            menu: ButtonSpec::fixed(Point::new(center_x, MENU_BUTTON_Y)),
            service_box: Rect::new(
                center_x - SERVICE_BOX_WIDTH / 2.0,
                SERVICE_BOX_TOP,
                SERVICE_BOX_WIDTH,
                SERVICE_BOX_HEIGHT,
            ),
            score_box: Rect::new(
                window_width - SCORE_BOX_WIDTH - 20.0,
                10.0,
                SCORE_BOX_WIDTH,
                SCORE_BOX_HEIGHT,
            ),
            feedback_box: Rect::centered(
                Point::new(center_x, window_height / 2.0),
                FEEDBACK_BOX_WIDTH,
                FEEDBACK_BOX_HEIGHT,
            ),
            center_x,
        }
    }

    pub fn option_box(&self, index: usize) -> Rect {
        Rect::new(
            self.center_x - OPTION_WIDTH / 2.0,
            OPTION_TOP + index as f32 * OPTION_SPACING,
            OPTION_WIDTH,
            OPTION_HEIGHT,
        )
    }

    pub fn hit_regions(&self, now_ms: u64) -> HitRegions {
        HitRegions {
            start: self.start.bounds(now_ms),
            play_again: self.play_again.bounds(now_ms),
            menu: self.menu.bounds(now_ms),
            options: std::array::from_fn(|index| self.option_box(index)),
        }
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Clickable areas for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRegions {
    pub start: Rect,
    pub play_again: Rect,
    pub menu: Rect,
    pub options: [Rect; OPTION_COUNT],
}

pub fn resolve_click(phase: Phase, position: Point, regions: &HitRegions) -> Option<Action> {
    match phase {
        Phase::Menu => regions
            .start
            .contains(position)
            .then_some(Action::StartGame),
        Phase::Playing => regions
            .options
            .iter()
            .position(|rect| rect.contains(position))
            .map(Action::SelectOption),
        Phase::Feedback => None,
        Phase::GameOver => {
            if regions.play_again.contains(position) {
                Some(Action::StartGame)
            } else if regions.menu.contains(position) {
                Some(Action::ReturnToMenu)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // sin(314 / 200) ~ 1 and sin(942 / 200) ~ -1
    const GROWN_MS: u64 = 314;
    const SHRUNK_MS: u64 = 942;

    #[test]
    fn menu_start_button() {
        let regions = ScreenLayout::default().hit_regions(0);

        assert_eq!(
            resolve_click(Phase::Menu, Point::new(400.0, 375.0), &regions),
            Some(Action::StartGame)
        );
        assert_eq!(resolve_click(Phase::Menu, Point::new(10.0, 10.0), &regions), None);
    }

    #[test]
    fn pulse_grows_the_start_button() {
        let layout = ScreenLayout::default();
        let edge = Point::new(503.0, 375.0);

        assert_eq!(resolve_click(Phase::Menu, edge, &layout.hit_regions(0)), None);
        assert_eq!(
            resolve_click(Phase::Menu, edge, &layout.hit_regions(GROWN_MS)),
            Some(Action::StartGame)
        );
    }

    #[test]
    fn pulse_shrinks_the_start_button() {
        let layout = ScreenLayout::default();
        let edge = Point::new(497.0, 375.0);

        assert_eq!(
            resolve_click(Phase::Menu, edge, &layout.hit_regions(0)),
            Some(Action::StartGame)
        );
        assert_eq!(resolve_click(Phase::Menu, edge, &layout.hit_regions(SHRUNK_MS)), None);
    }

    #[test]
    fn fixed_buttons_ignore_time() {
        let layout = ScreenLayout::default();
        assert_eq!(layout.play_again.bounds(0), layout.play_again.bounds(GROWN_MS));
    }

    #[test]
    fn playing_maps_option_rows() {
        let regions = ScreenLayout::default().hit_regions(0);

        for index in 0..OPTION_COUNT {
            let y = 250.0 + index as f32 * 80.0 + 30.0;
            assert_eq!(
                resolve_click(Phase::Playing, Point::new(400.0, y), &regions),
                Some(Action::SelectOption(index))
            );
        }
        // gap between rows
        assert_eq!(resolve_click(Phase::Playing, Point::new(400.0, 320.0), &regions), None);
        // left of the boxes
        assert_eq!(resolve_click(Phase::Playing, Point::new(90.0, 280.0), &regions), None);
    }

    #[test]
    fn start_button_area_is_an_option_while_playing() {
        let regions = ScreenLayout::default().hit_regions(0);
        assert_eq!(
            resolve_click(Phase::Playing, Point::new(400.0, 375.0), &regions),
            Some(Action::SelectOption(1))
        );
    }

    #[test]
    fn feedback_ignores_clicks() {
        let regions = ScreenLayout::default().hit_regions(0);
        assert_eq!(resolve_click(Phase::Feedback, Point::new(400.0, 280.0), &regions), None);
    }

    #[test]
    fn game_over_buttons() {
        let regions = ScreenLayout::default().hit_regions(0);

        assert_eq!(
            resolve_click(Phase::GameOver, Point::new(400.0, 325.0), &regions),
            Some(Action::StartGame)
        );
        assert_eq!(
            resolve_click(Phase::GameOver, Point::new(400.0, 410.0), &regions),
            Some(Action::ReturnToMenu)
        );
        assert_eq!(resolve_click(Phase::GameOver, Point::new(400.0, 500.0), &regions), None);
    }
}
