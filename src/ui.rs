//! Screen layout for buttons and the game over popup
//!
//! Hit-testing and drawing both read from here so they can never disagree.

use crate::Rect;
use crate::consts::*;

/// Start button, below screen centre
pub fn start_button() -> Rect {
    Rect::new(
        SCREEN_WIDTH / 2.0 - BUTTON_WIDTH / 2.0,
        SCREEN_HEIGHT / 2.0 + START_BUTTON_OFFSET,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

/// Game over popup image, centred and lifted above the middle
pub fn popup() -> Rect {
    Rect::new(
        SCREEN_WIDTH / 2.0 - POPUP_SIZE / 2.0,
        SCREEN_HEIGHT / 2.0 - POPUP_SIZE / 2.0 - POPUP_LIFT,
        POPUP_SIZE,
        POPUP_SIZE,
    )
}

/// Restart button, placed under the popup
pub fn restart_button() -> Rect {
    let popup = popup();
    Rect::new(
        SCREEN_WIDTH / 2.0 - BUTTON_WIDTH / 2.0,
        popup.bottom() + RESTART_BUTTON_MARGIN,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_button() {
        assert_eq!(start_button(), Rect::new(210.0, 790.0, 300.0, 100.0));
    }

    #[test]
    fn test_popup_and_restart() {
        assert_eq!(popup(), Rect::new(185.0, 365.0, 350.0, 350.0));
        assert_eq!(restart_button(), Rect::new(210.0, 755.0, 300.0, 100.0));
    }

    #[test]
    fn test_buttons_on_screen() {
        for r in [start_button(), restart_button(), popup()] {
            assert!(r.x >= 0.0 && r.right() <= SCREEN_WIDTH);
            assert!(r.y >= 0.0 && r.bottom() <= SCREEN_HEIGHT);
        }
    }
}
