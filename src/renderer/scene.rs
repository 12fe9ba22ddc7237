//! Frame description
//!
//! Turns a [`GameState`] into an ordered list of draw commands. Later commands
//! paint over earlier ones. Nothing here touches the browser, so the whole
//! frame layout is testable natively.

use glam::Vec2;

use crate::Rect;
use crate::consts::*;
use crate::platform::ImageId;
use crate::sim::{GamePhase, GameState, Obstacle};
use crate::ui;

/// CSS colors for game elements
pub mod colors {
    pub const BUTTON_FILL: &str = "#222";
    pub const BUTTON_BORDER: &str = "white";
    pub const BUTTON_LABEL: &str = "white";
    pub const OVERLAY: &str = "rgba(0,0,0,0.6)";
    pub const WATERMARK: &str = "white";
    pub const WATERMARK_SHADOW: &str = "black";
}

/// CSS fonts
pub mod fonts {
    pub const BUTTON: &str = "45px Arial";
    pub const WATERMARK: &str = "40px Arial";
}

const BUTTON_BORDER_WIDTH: f32 = 4.0;
/// Label baseline below the button top
const BUTTON_LABEL_BASELINE: f32 = 65.0;
const WATERMARK_SHADOW_BLUR: f32 = 12.0;

/// Drop shadow behind text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: &'static str,
    pub blur: f32,
}

/// One drawing operation
///
/// Text is always horizontally centred on `x`, with `y` as the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Image stretched into `dest`
    Image { image: ImageId, dest: Rect },
    /// Image stretched into `dest`, clipped to a circle
    CircleImage {
        image: ImageId,
        center: Vec2,
        radius: f32,
        dest: Rect,
    },
    FillRect { rect: Rect, color: &'static str },
    StrokeRect {
        rect: Rect,
        color: &'static str,
        line_width: f32,
    },
    Text {
        text: &'static str,
        x: f32,
        y: f32,
        font: &'static str,
        color: &'static str,
        shadow: Option<Shadow>,
    },
}

fn button(rect: Rect, label: &'static str) -> [DrawCommand; 3] {
    [
        DrawCommand::FillRect {
            rect,
            color: colors::BUTTON_FILL,
        },
        DrawCommand::StrokeRect {
            rect,
            color: colors::BUTTON_BORDER,
            line_width: BUTTON_BORDER_WIDTH,
        },
        DrawCommand::Text {
            text: label,
            x: rect.x + rect.w / 2.0,
            y: rect.y + BUTTON_LABEL_BASELINE,
            font: fonts::BUTTON,
            color: colors::BUTTON_LABEL,
            shadow: None,
        },
    ]
}

fn obstacle(o: &Obstacle) -> [DrawCommand; 2] {
    [
        DrawCommand::Image {
            image: ImageId::Obstacle,
            dest: o.top_rect(),
        },
        DrawCommand::Image {
            image: ImageId::Obstacle,
            dest: o.bottom_rect(),
        },
    ]
}

fn watermark() -> DrawCommand {
    DrawCommand::Text {
        text: WATERMARK,
        x: SCREEN_WIDTH / 2.0,
        y: WATERMARK_Y,
        font: fonts::WATERMARK,
        color: colors::WATERMARK,
        shadow: Some(Shadow {
            color: colors::WATERMARK_SHADOW,
            blur: WATERMARK_SHADOW_BLUR,
        }),
    }
}

/// Build the full frame for the current state
pub fn build_frame(state: &GameState) -> Vec<DrawCommand> {
    let screen = Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut frame = Vec::with_capacity(8 + state.obstacles.len() * 2);

    frame.push(DrawCommand::Image {
        image: ImageId::Background,
        dest: screen,
    });

    frame.push(DrawCommand::CircleImage {
        image: ImageId::Player,
        center: state.player.center(),
        radius: PLAYER_SIZE / 2.0,
        dest: state.player.bounds(),
    });

    for o in &state.obstacles {
        frame.extend(obstacle(o));
    }

    match state.phase {
        GamePhase::NotStarted => frame.extend(button(ui::start_button(), "START")),
        GamePhase::GameOver => {
            frame.push(DrawCommand::FillRect {
                rect: screen,
                color: colors::OVERLAY,
            });
            frame.push(DrawCommand::Image {
                image: ImageId::Popup,
                dest: ui::popup(),
            });
            frame.extend(button(ui::restart_button(), "RESTART"));
        }
        GamePhase::Running => {}
    }

    // Always last so it stays on top
    frame.push(watermark());

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(frame: &[DrawCommand]) -> Vec<&'static str> {
        frame
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(*text),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_start_screen() {
        let state = GameState::new(1);
        let frame = build_frame(&state);

        assert!(matches!(
            frame[0],
            DrawCommand::Image { image: ImageId::Background, .. }
        ));
        assert!(matches!(
            frame[1],
            DrawCommand::CircleImage { image: ImageId::Player, .. }
        ));
        // bg, player, 2 obstacle halves, 3 button parts, watermark
        assert_eq!(frame.len(), 8);
        assert_eq!(texts(&frame), vec!["START", WATERMARK]);
        assert_eq!(
            frame[4],
            DrawCommand::FillRect {
                rect: ui::start_button(),
                color: colors::BUTTON_FILL
            }
        );
    }

    #[test]
    fn test_running_has_no_overlay() {
        let mut state = GameState::new(1);
        state.start();
        let frame = build_frame(&state);
        assert_eq!(frame.len(), 5);
        assert_eq!(texts(&frame), vec![WATERMARK]);
    }

    #[test]
    fn test_game_over_layers() {
        let mut state = GameState::new(1);
        state.start();
        state.end_run();
        let frame = build_frame(&state);

        let overlay = frame
            .iter()
            .position(|c| matches!(c, DrawCommand::FillRect { color, .. } if *color == colors::OVERLAY))
            .unwrap();
        let popup = frame
            .iter()
            .position(|c| matches!(c, DrawCommand::Image { image: ImageId::Popup, .. }))
            .unwrap();
        let obstacles_end = frame
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Image { image: ImageId::Obstacle, .. }))
            .unwrap();

        assert!(obstacles_end < overlay);
        assert!(overlay < popup);
        assert_eq!(texts(&frame), vec!["RESTART", WATERMARK]);
        assert!(frame.contains(&DrawCommand::StrokeRect {
            rect: ui::restart_button(),
            color: colors::BUTTON_BORDER,
            line_width: 4.0,
        }));
    }

    #[test]
    fn test_watermark_always_last() {
        let mut state = GameState::new(1);
        for _ in 0..3 {
            let frame = build_frame(&state);
            assert_eq!(frame.last(), Some(&watermark()));
            match state.phase {
                GamePhase::NotStarted => {
                    state.start();
                }
                _ => state.end_run(),
            }
        }
    }

    #[test]
    fn test_player_circle_geometry() {
        let state = GameState::new(1);
        let frame = build_frame(&state);
        assert_eq!(
            frame[1],
            DrawCommand::CircleImage {
                image: ImageId::Player,
                center: Vec2::new(210.0, 560.0),
                radius: 60.0,
                dest: Rect::new(150.0, 500.0, 120.0, 120.0),
            }
        );
    }

    #[test]
    fn test_obstacle_halves() {
        let mut state = GameState::new(1);
        state.obstacles = vec![Obstacle {
            x: 300.0,
            top_height: 200.0,
        }];
        let frame = build_frame(&state);
        assert_eq!(
            frame[2],
            DrawCommand::Image {
                image: ImageId::Obstacle,
                dest: Rect::new(300.0, 0.0, 240.0, 200.0)
            }
        );
        assert_eq!(
            frame[3],
            DrawCommand::Image {
                image: ImageId::Obstacle,
                dest: Rect::new(300.0, 650.0, 240.0, 630.0)
            }
        );
    }

    #[test]
    fn test_button_label_position() {
        let [_, _, label] = button(ui::start_button(), "START");
        match label {
            DrawCommand::Text { x, y, font, .. } => {
                assert_eq!((x, y), (360.0, 855.0));
                assert_eq!(font, fonts::BUTTON);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
