//! In-memory backend shared by application tests

use std::cell::{Cell, RefCell};

use super::ports::{BackendError, ClipboardBackend};

enum Mode {
    Available,
    Unavailable,
    Failing(String),
}

/// Clipboard backend that keeps its contents in memory and counts calls
pub struct FakeBackend {
    mode: Mode,
    contents: RefCell<Option<String>>,
    writes: Cell<usize>,
    reads: Cell<usize>,
}

impl FakeBackend {
    fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            contents: RefCell::new(None),
            writes: Cell::new(0),
            reads: Cell::new(0),
        }
    }

    pub fn available() -> Self {
        Self::with_mode(Mode::Available)
    }

    pub fn unavailable() -> Self {
        Self::with_mode(Mode::Unavailable)
    }

    pub fn failing(message: &str) -> Self {
        Self::with_mode(Mode::Failing(message.to_string()))
    }

    pub fn with_contents(text: &str) -> Self {
        let backend = Self::available();
        *backend.contents.borrow_mut() = Some(text.to_string());
        backend
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    fn check(&self) -> Result<(), BackendError> {
        match &self.mode {
            Mode::Available => Ok(()),
            Mode::Unavailable => Err(BackendError::Unavailable(
                "no clipboard utilities available".to_string(),
            )),
            Mode::Failing(message) => Err(BackendError::Failed(message.clone())),
        }
    }
}

impl ClipboardBackend for FakeBackend {
    fn name(&self) -> &str {
        "fake"
    }

    fn write(&self, text: &str) -> Result<(), BackendError> {
        self.writes.set(self.writes.get() + 1);
        self.check()?;
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn read(&self) -> Result<String, BackendError> {
        self.reads.set(self.reads.get() + 1);
        self.check()?;
        self.contents
            .borrow()
            .clone()
            .ok_or_else(|| BackendError::Failed("clipboard is empty".to_string()))
    }

    fn is_supported(&self) -> bool {
        !matches!(self.mode, Mode::Unavailable)
    }
}
