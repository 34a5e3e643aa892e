use thiserror::Error;

/// Fatal failures of the terminal host
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("terminal IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine the terminal size")]
    TerminalUnavailable,

    #[error("terminal of {cols}x{rows} cells has no room to draw")]
    TerminalTooSmall { cols: u16, rows: u16 },
}
