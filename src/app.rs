use crate::args::Args;
use crate::driver::frame;
use crate::error::SketchError;
use crate::graphics::RenderTarget;
use crate::pivot::Pivot;
use crate::state::{AnimationState, Command};
use crate::terminal::TerminalSurface;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use std::io;
use std::time::{Duration, Instant};

/// What a key press asks the shell to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Apply(Command),
    Quit,
}

/// Maps a key event to an action; unknown keys and releases map to nothing
pub fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c) => match c {
            'q' | 'Q' => Some(Action::Quit),
            'p' | 'P' => Some(Action::Apply(Command::TogglePause)),
            'd' | 'D' => Some(Action::Apply(Command::ToggleDebug)),
            _ => Pivot::from_key(c).map(|p| Action::Apply(Command::SelectPivot(p))),
        },
        _ => None,
    }
}

/// Rolling frames-per-second counter
struct FpsCounter {
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl FpsCounter {
    fn new() -> Self {
        FpsCounter {
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    fn frame(&mut self) {
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }
    }
}

/// Terminal host driving the animation at a fixed cadence
pub struct App {
    surface: TerminalSurface,
    state: AnimationState,
    frame_duration: Duration,
    frame_limit: Option<u64>,
    frames: u64,
    fps: FpsCounter,
    quit: bool,
}

impl App {
    pub fn new(args: &Args) -> Result<Self, SketchError> {
        let surface = TerminalSurface::open()?;
        let (width, height) = surface.size();
        let mut state = AnimationState::new(
            width as f64,
            height as f64,
            args.extent,
            args.step,
            args.pivot,
        );
        state.debug = args.debug;
        info!(
            "starting on a {width}x{height} canvas: extent {}, step {}, {} fps, pivot {:?}",
            args.extent, args.step, args.fps, args.pivot
        );
        Ok(App {
            surface,
            state,
            frame_duration: Duration::from_secs(1) / args.fps,
            frame_limit: args.frames,
            frames: 0,
            fps: FpsCounter::new(),
            quit: false,
        })
    }

    /// Runs frames until quit or the frame limit; returns the frame count
    pub fn run(mut self) -> Result<u64, SketchError> {
        let mut next_frame = Instant::now();
        while !self.quit && self.frame_limit.map_or(true, |limit| self.frames < limit) {
            self.pump_events(next_frame)?;
            if self.quit {
                break;
            }
            next_frame += self.frame_duration;
            // Skip ahead instead of bursting after a stall
            let now = Instant::now();
            if next_frame < now {
                next_frame = now;
            }

            if frame(&mut self.state, &mut self.surface) {
                self.frames += 1;
            }
            self.fps.frame();
            self.draw()?;
        }
        info!("stopped after {} frames", self.frames);
        Ok(self.frames)
    }

    /// Applies input until `deadline`
    fn pump_events(&mut self, deadline: Instant) -> Result<(), SketchError> {
        let state = &mut self.state;
        let surface = &mut self.surface;
        let quit = &mut self.quit;
        pump_until(deadline, next_terminal_event, |event| {
            match event {
                Event::Key(key) => match key_action(&key) {
                    Some(Action::Quit) => *quit = true,
                    Some(Action::Apply(command)) => state.apply(command),
                    None => {}
                },
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                _ => {}
            }
            !*quit
        })?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), SketchError> {
        self.surface.present()?;
        if self.state.debug {
            let lines = debug_lines(&self.state, self.fps.fps);
            self.surface.overlay(&lines)?;
        }
        if self.state.paused {
            self.surface.banner("Paused")?;
        }
        Ok(())
    }
}

/// Waits up to `timeout` for a terminal event
fn next_terminal_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Hands events to `handle` until `deadline`, then drains what is already
/// queued; `handle` returns false to stop early
fn pump_until<N, H>(deadline: Instant, mut next: N, mut handle: H) -> io::Result<()>
where
    N: FnMut(Duration) -> io::Result<Option<Event>>,
    H: FnMut(Event) -> bool,
{
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let Some(event) = next(remaining)? else {
            return Ok(());
        };
        if !handle(event) {
            return Ok(());
        }
    }
}

/// Text shown by the debug overlay
fn debug_lines(state: &AnimationState, fps: f64) -> Vec<String> {
    let pivot = state.pivot();
    vec![
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        format!("Angle: {:.0}", state.angle),
        format!(
            "Pivot: {:?} #{} ({:.1}, {:.1})",
            state.switch.active(),
            state.shape.pivot_index(),
            pivot.x,
            pivot.y
        ),
        format!("Switch: {:?}", state.switch.state()),
        format!("FPS: {fps:.2}"),
    ]
}
