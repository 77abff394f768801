//! Renders test cases as a C++ test program.
//!
//! Each case becomes a brace-nested block, so the alias of a case is in
//! scope for every case built on top of it.

use declgen_core::{SinkError, TestCase, TestCaseSink};
use declgen_types::MEMBER_CLASS;
use std::io::Write;

pub struct CppTestWriter<W: Write> {
    out: W,
    /// Indices of the cases whose blocks are open, innermost last.
    open: Vec<usize>,
    /// Print a one-line summary of every case to stderr.
    trace: bool,
}

impl<W: Write> CppTestWriter<W> {
    pub fn new(out: W, trace: bool) -> Self {
        Self {
            out,
            open: Vec::new(),
            trace,
        }
    }

    /// Write the includes and open `main`, binding the seed to `A0`.
    pub fn begin(&mut self, header: &str, seed: &str) -> Result<(), SinkError> {
        writeln!(self.out, "#include <cassert>")?;
        writeln!(self.out, "#include <type_traits>")?;
        writeln!(self.out, "#include \"{header}\"")?;
        writeln!(self.out)?;
        writeln!(self.out, "struct {MEMBER_CLASS} {{}};")?;
        writeln!(self.out)?;
        writeln!(self.out, "int main() {{")?;
        writeln!(self.out, "\tusing A0 = {seed};")?;
        Ok(())
    }

    /// Close `main` and flush. Returns the underlying writer.
    pub fn finish(mut self) -> Result<W, SinkError> {
        if let Some(index) = self.open.last() {
            return Err(SinkError::Custom(format!(
                "case #{index} is still open at end of output"
            )));
        }
        writeln!(self.out, "}}")?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn indent(&self) -> String {
        "\t".repeat(self.open.len() + 1)
    }
}

impl<W: Write> TestCaseSink for CppTestWriter<W> {
    fn open_case(&mut self, case: &TestCase) -> Result<(), SinkError> {
        if self.trace {
            eprintln!(
                "{}: {} ## {}",
                case.canonical,
                case.description,
                case.declarator().unwrap_or("(duplicate)")
            );
        }
        writeln!(self.out, "{}{{", self.indent())?;
        self.open.push(case.index);
        Ok(())
    }

    fn emit_line(&mut self, _index: usize, line: &str) -> Result<(), SinkError> {
        writeln!(self.out, "{}{}", self.indent(), line)?;
        Ok(())
    }

    fn close_case(&mut self, index: usize) -> Result<(), SinkError> {
        match self.open.pop() {
            Some(open) if open == index => {}
            other => {
                return Err(SinkError::Custom(format!(
                    "closing case #{index} but the innermost open case is {other:?}"
                )));
            }
        }
        writeln!(self.out, "{}}}", self.indent())?;
        Ok(())
    }
}
