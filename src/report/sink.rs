use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Output sinks — where rendered text goes
// ============================================================================

/// Opaque text-writing capability. Writes are treated as infallible
/// synchronous appends.
pub trait OutputSink {
    fn write(&mut self, text: &str);
}

/// Writes to stdout for CLI and default reporter use.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&mut self, text: &str) {
        print!("{}", text);
    }
}

/// Collects output into a String for testing or programmatic capture.
#[derive(Default)]
pub struct BufferSink {
    buffer: String,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl OutputSink for BufferSink {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

/// Shared handle to a [`BufferSink`], so the caller can keep reading what a
/// reporter that owns the sink has written.
#[derive(Clone, Default)]
pub struct SharedSink(pub Rc<RefCell<BufferSink>>);

impl SharedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.0.borrow().as_str().to_string()
    }
}

impl OutputSink for SharedSink {
    fn write(&mut self, text: &str) {
        self.0.borrow_mut().write(text);
    }
}
