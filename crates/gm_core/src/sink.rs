//! Presentation sink boundary.
//!
//! The engine never prints. Everything human-facing goes through this
//! injected capability; the CLI installs a stdout sink, tests observe state
//! and occasionally the recorded lines. No output format is required.

/// Capability accepting formatted status lines.
pub trait PresentationSink {
    fn present(&mut self, line: &str);
}

/// Discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn present(&mut self, _line: &str) {}
}

/// Forwards presentation lines to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl PresentationSink for LogSink {
    fn present(&mut self, line: &str) {
        log::info!("{line}");
    }
}

/// Buffers presentation lines for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any recorded line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl PresentationSink for RecordingSink {
    fn present(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.present("first");
        sink.present("second");
        assert_eq!(sink.lines(), ["first", "second"]);
        assert!(sink.saw("sec"));
        assert!(!sink.saw("third"));
    }

    #[test]
    fn test_null_sink_accepts_anything() {
        let mut sink = NullSink;
        sink.present("dropped");
    }
}
