//! The interface through which the engine hands out its test cases.

use crate::{SinkError, TestCase};

/// Receives test cases in traversal order.
///
/// Cases nest: a case opened while another is open is one of its
/// expansions, and is closed before its parent.
pub trait TestCaseSink {
    fn open_case(&mut self, case: &TestCase) -> Result<(), SinkError>;

    fn emit_line(&mut self, index: usize, line: &str) -> Result<(), SinkError>;

    fn close_case(&mut self, index: usize) -> Result<(), SinkError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Open(usize),
    Line(usize, String),
    Close(usize),
}

/// Sink that keeps every case and event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    cases: Vec<TestCase>,
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Every emitted line, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match event {
            SinkEvent::Line(_, line) => Some(line.as_str()),
            _ => None,
        })
    }
}

impl TestCaseSink for RecordingSink {
    fn open_case(&mut self, case: &TestCase) -> Result<(), SinkError> {
        self.cases.push(case.clone());
        self.events.push(SinkEvent::Open(case.index));
        Ok(())
    }

    fn emit_line(&mut self, index: usize, line: &str) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Line(index, line.to_string()));
        Ok(())
    }

    fn close_case(&mut self, index: usize) -> Result<(), SinkError> {
        self.events.push(SinkEvent::Close(index));
        Ok(())
    }
}
