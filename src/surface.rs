use crate::figure::Figure;
use std::io::Write;
use thiserror::Error;

/// Where a completed figure ends up. The hosting dashboard owns the actual
/// rendering; this crate only hands the artifact over.
pub trait Surface {
    fn display(&mut self, figure: &Figure) -> Result<(), SurfaceError>;
}

/// Serializes each displayed figure as pretty-printed JSON.
#[derive(Debug)]
pub struct JsonSurface<W> {
    writer: W,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Surface for JsonSurface<W> {
    fn display(&mut self, figure: &Figure) -> Result<(), SurfaceError> {
        serde_json::to_writer_pretty(&mut self.writer, figure)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to serialize figure: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write figure: {0}")]
    Io(#[from] std::io::Error),
}
