use crossterm::style::Color;

/// Vertex the square rotates about, named after the fill color it selects
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Pivot {
    #[value(name = "r")]
    Red,
    #[value(name = "g")]
    Green,
    #[value(name = "b")]
    Blue,
    #[value(name = "w")]
    White,
}

impl Pivot {
    /// Index of the pivot vertex in the polygon
    pub fn index(self) -> usize {
        match self {
            Pivot::Red => 0,
            Pivot::Green => 1,
            Pivot::Blue => 2,
            Pivot::White => 3,
        }
    }

    /// Fill color used while this pivot is active
    pub fn color(self) -> Color {
        match self {
            Pivot::Red => Color::Rgb { r: 0xD2, g: 0x34, b: 0x14 },
            Pivot::Green => Color::Rgb { r: 0x0E, g: 0x6B, b: 0x1B },
            Pivot::Blue => Color::Rgb { r: 0x3A, g: 0x14, b: 0xD2 },
            Pivot::White => Color::Rgb { r: 0xE5, g: 0xE5, b: 0xE5 },
        }
    }

    /// Pivot selected by a key press, if any
    pub fn from_key(key: char) -> Option<Pivot> {
        match key {
            'r' => Some(Pivot::Red),
            'g' => Some(Pivot::Green),
            'b' => Some(Pivot::Blue),
            'w' => Some(Pivot::White),
            _ => None,
        }
    }
}

/// Whether a pivot change is waiting for the end of a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwitchState {
    Idle,
    SwitchRequested,
}

/// Tracks the active pivot and the pending-switch flag
#[derive(Clone, Debug)]
pub struct PivotSwitch {
    active: Pivot,
    state: SwitchState,
}

impl PivotSwitch {
    pub fn new(active: Pivot) -> Self {
        PivotSwitch {
            active,
            state: SwitchState::Idle,
        }
    }

    pub fn active(&self) -> Pivot {
        self.active
    }

    pub fn state(&self) -> SwitchState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SwitchState::SwitchRequested
    }

    /// Selects `pivot`; returns false when it is already the active pivot
    pub fn request(&mut self, pivot: Pivot) -> bool {
        if pivot == self.active {
            return false;
        }
        self.active = pivot;
        self.state = SwitchState::SwitchRequested;
        true
    }

    /// Clears the pending flag; returns whether a switch was pending
    pub fn take_pending(&mut self) -> bool {
        let pending = self.is_pending();
        self.state = SwitchState::Idle;
        pending
    }
}
