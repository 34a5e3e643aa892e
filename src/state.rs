use crate::math::map_to_viewport;
use crate::pivot::{Pivot, PivotSwitch};
use crate::shape::ShapeStore;
use crate::vertex::{Polygon, Vertex};
use crossterm::style::Color;
use log::{debug, info};

/// Square corners in world space, in drawing order
pub const WORLD_SQUARE: [(f64, f64); 4] = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];

/// Input applied between ticks
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    SelectPivot(Pivot),
    TogglePause,
    ToggleDebug,
}

/// Application state
#[derive(Clone, Debug)]
pub struct AnimationState {
    /// Base and rotated square
    pub shape: ShapeStore,
    /// Active pivot and pending-switch flag
    pub switch: PivotSwitch,
    /// Current rotation angle in degrees
    pub angle: f64,
    /// Degrees added per tick
    pub step: f64,
    /// Simulation paused
    pub paused: bool,
    /// Enable debug mode
    pub debug: bool,
}

impl AnimationState {
    /// Maps the world square into a `width` x `height` display
    pub fn new(width: f64, height: f64, extent: f64, step: f64, pivot: Pivot) -> Self {
        let base: Polygon =
            WORLD_SQUARE.map(|(x, y)| map_to_viewport(x, y, extent, width, height));
        debug!("base square mapped to {base:?}");
        AnimationState {
            shape: ShapeStore::initialize(base, pivot.index()),
            switch: PivotSwitch::new(pivot),
            angle: 0.0,
            step,
            paused: false,
            debug: false,
        }
    }

    /// Fill color of the active pivot
    pub fn color(&self) -> Color {
        self.switch.active().color()
    }

    pub fn pivot(&self) -> Vertex {
        self.shape.pivot_vertex()
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SelectPivot(pivot) => {
                if self.switch.request(pivot) {
                    self.shape.set_pivot_index(pivot.index());
                    info!("pivot switch to {pivot:?} requested");
                } else {
                    debug!("pivot {pivot:?} already active");
                }
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                info!("paused: {}", self.paused);
            }
            Command::ToggleDebug => self.debug = !self.debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::assert_close;
    use crate::pivot::SwitchState;

    fn state() -> AnimationState {
        AnimationState::new(800.0, 600.0, 5.0, 2.0, Pivot::Red)
    }

    #[test]
    fn new_maps_square_into_viewport() {
        let state = state();
        let expected = [
            Vertex::new(320.0, 360.0),
            Vertex::new(480.0, 360.0),
            Vertex::new(480.0, 240.0),
            Vertex::new(320.0, 240.0),
        ];
        for (&got, &want) in state.shape.base().iter().zip(expected.iter()) {
            assert_close(got, want);
        }
        assert_close(state.pivot(), expected[0]);
        assert_eq!(state.angle, 0.0);
    }

    #[test]
    fn selecting_active_pivot_changes_nothing() {
        let mut state = state();
        state.apply(Command::SelectPivot(Pivot::Red));
        assert_eq!(state.switch.state(), SwitchState::Idle);
        assert_eq!(state.shape.pivot_index(), 0);
        assert_eq!(state.color(), Pivot::Red.color());
    }

    #[test]
    fn selecting_new_pivot_updates_color_immediately() {
        let mut state = state();
        let pivot_before = state.pivot();
        state.apply(Command::SelectPivot(Pivot::Green));
        assert!(state.switch.is_pending());
        assert_eq!(state.color(), Pivot::Green.color());
        assert_eq!(state.shape.pivot_index(), 1);
        // coordinates move only on commit
        assert_eq!(state.pivot(), pivot_before);
    }

    #[test]
    fn toggles_flip_flags() {
        let mut state = state();
        state.apply(Command::TogglePause);
        state.apply(Command::ToggleDebug);
        assert!(state.paused && state.debug);
        state.apply(Command::TogglePause);
        assert!(!state.paused);
    }
}
