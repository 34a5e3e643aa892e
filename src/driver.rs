use crate::graphics::{RenderTarget, BACKGROUND};
use crate::math::advance_angle;
use crate::rotation::rotate_shape;
use crate::state::AnimationState;
use log::{debug, info};

/// Runs one frame: render, advance the angle, then commit a pending switch
pub fn tick<T: RenderTarget + ?Sized>(state: &mut AnimationState, target: &mut T) {
    rotate_shape(&mut state.shape, state.angle);
    render(state, target);

    state.angle = advance_angle(state.angle, state.step);

    if state.switch.take_pending() {
        state.shape.commit_rotated_as_base();
        info!(
            "pivot {:?} committed at ({:.2}, {:.2})",
            state.switch.active(),
            state.pivot().x,
            state.pivot().y
        );
        debug!("new base {:?}", state.shape.base());
    }
}

/// Ticks, or only redraws while paused; returns whether the animation advanced
///
/// Commands applied while paused, pivot requests included, wait for the
/// first tick after resuming.
pub fn frame<T: RenderTarget + ?Sized>(state: &mut AnimationState, target: &mut T) -> bool {
    if state.paused {
        render(state, target);
        false
    } else {
        tick(state, target);
        true
    }
}

/// Draws the current rotated polygon without advancing the animation
pub fn render<T: RenderTarget + ?Sized>(state: &AnimationState, target: &mut T) {
    target.clear(BACKGROUND);
    target.fill_polygon(state.shape.rotated(), state.color());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::Canvas;
    use crate::math::{assert_close, rotate_about};
    use crate::pivot::Pivot;
    use crate::state::Command;
    use crate::vertex::Vertex;
    use crossterm::style::Color;

    /// Records what the driver hands to the render target
    #[derive(Default)]
    struct Recorder {
        clears: usize,
        fills: Vec<(Vec<Vertex>, Color)>,
    }

    impl RenderTarget for Recorder {
        fn size(&self) -> (usize, usize) {
            (800, 600)
        }

        fn clear(&mut self, color: Color) {
            assert_eq!(color, BACKGROUND);
            self.clears += 1;
        }

        fn fill_polygon(&mut self, points: &[Vertex], color: Color) {
            self.fills.push((points.to_vec(), color));
        }
    }

    fn state() -> AnimationState {
        AnimationState::new(800.0, 600.0, 5.0, 2.0, Pivot::Red)
    }

    #[test]
    fn angle_after_n_ticks() {
        let mut state = state();
        let mut target = Recorder::default();
        for n in 1..=720u32 {
            tick(&mut state, &mut target);
            assert_eq!(state.angle, f64::from(n * 2 % 360), "tick {n}");
        }
    }

    #[test]
    fn angle_after_181_ticks_is_two() {
        let mut state = state();
        let mut target = Recorder::default();
        for _ in 0..181 {
            tick(&mut state, &mut target);
        }
        assert_eq!(state.angle, 2.0);
    }

    #[test]
    fn first_frame_draws_unrotated_square() {
        let mut state = state();
        let base = *state.shape.base();
        let mut target = Recorder::default();
        tick(&mut state, &mut target);
        assert_eq!(target.clears, 1);
        let (points, color) = &target.fills[0];
        assert_eq!(points.len(), 4);
        assert_eq!(*color, Pivot::Red.color());
        for (p, b) in points.iter().zip(base.iter()) {
            assert_close(*p, *b);
        }
    }

    #[test]
    fn frames_draw_rotation_about_pivot() {
        let mut state = state();
        let base = *state.shape.base();
        let pivot = state.pivot();
        let mut target = Recorder::default();
        for _ in 0..5 {
            tick(&mut state, &mut target);
        }
        // fifth frame was drawn at 8 degrees
        let (points, _) = target.fills.last().unwrap();
        for (p, b) in points.iter().zip(base.iter()) {
            assert_close(*p, rotate_about(*b, pivot, 8.0));
        }
        assert_eq!(state.shape.rotated().len(), state.shape.base().len());
    }

    #[test]
    fn switch_commits_after_the_frame_it_was_requested_in() {
        let mut state = state();
        let mut target = Recorder::default();
        for _ in 0..10 {
            tick(&mut state, &mut target);
        }
        let original_base = *state.shape.base();

        state.apply(Command::SelectPivot(Pivot::Blue));
        assert!(state.switch.is_pending());
        assert_eq!(*state.shape.base(), original_base);

        tick(&mut state, &mut target);
        let drawn = *state.shape.rotated();
        assert!(!state.switch.is_pending());
        assert_eq!(*state.shape.base(), drawn);
        assert_eq!(state.pivot(), drawn[2]);
        // the rotation keeps accumulating across the switch
        assert_eq!(state.angle, 22.0);
        // the frame carrying the request was drawn in the new color
        assert_eq!(target.fills.last().unwrap().1, Pivot::Blue.color());
    }

    #[test]
    fn next_frame_rotates_about_new_pivot() {
        let mut state = state();
        let mut target = Recorder::default();
        tick(&mut state, &mut target);
        state.apply(Command::SelectPivot(Pivot::White));
        tick(&mut state, &mut target);
        let pivot = state.pivot();

        tick(&mut state, &mut target);
        assert_close(state.shape.rotated()[3], pivot);
    }

    #[test]
    fn redundant_request_leaves_base_alone() {
        let mut state = state();
        let mut target = Recorder::default();
        tick(&mut state, &mut target);
        let base = *state.shape.base();
        state.apply(Command::SelectPivot(Pivot::Red));
        tick(&mut state, &mut target);
        assert_eq!(*state.shape.base(), base);
    }

    #[test]
    fn paused_frames_redraw_without_advancing() {
        let mut state = state();
        let mut target = Recorder::default();
        for _ in 0..3 {
            assert!(frame(&mut state, &mut target));
        }
        state.apply(Command::TogglePause);
        let drawn = *state.shape.rotated();
        for _ in 0..4 {
            assert!(!frame(&mut state, &mut target));
        }
        assert_eq!(state.angle, 6.0);
        assert_eq!(target.fills.len(), 7);
        assert_eq!(target.fills.last().unwrap().0, drawn.to_vec());
    }

    #[test]
    fn switch_requested_while_paused_waits_for_resume() {
        let mut state = state();
        let mut target = Recorder::default();
        frame(&mut state, &mut target);
        state.apply(Command::TogglePause);
        let base = *state.shape.base();

        state.apply(Command::SelectPivot(Pivot::Green));
        frame(&mut state, &mut target);
        frame(&mut state, &mut target);
        assert!(state.switch.is_pending());
        assert_eq!(*state.shape.base(), base);
        // the paused frame already shows the new color
        assert_eq!(target.fills.last().unwrap().1, Pivot::Green.color());

        state.apply(Command::TogglePause);
        assert!(frame(&mut state, &mut target));
        let drawn = *state.shape.rotated();
        assert!(!state.switch.is_pending());
        assert_eq!(*state.shape.base(), drawn);
        assert_eq!(state.pivot(), drawn[1]);
    }

    #[test]
    fn renders_onto_canvas() {
        let mut state = state();
        let mut canvas = Canvas::new(800, 600);
        tick(&mut state, &mut canvas);
        assert_eq!(canvas.pixel(400, 300), Pivot::Red.color());
        assert_eq!(canvas.pixel(10, 10), BACKGROUND);
    }
}
