//! School report and reporting sinks.
//!
//! A sink consumes human-readable lines. The report writes exactly five
//! lines per call: school name, class count, total students, students at or
//! above the passing average, students below it.

use serde::Serialize;
use tracing::info;

use crate::students::PASSING_AVERAGE;

/// Consumer of human-readable report and dump lines.
pub trait ReportSink {
    fn emit(&mut self, line: &str);
}

/// Collects lines in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl ReportSink for MemorySink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Prints each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Emits each line as an `info` event under the `roster::report` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn emit(&mut self, line: &str) {
        info!(target: "roster::report", "{}", line);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolReport {
    pub school_name: String,
    pub class_count: usize,
    pub total_students: usize,
    /// Students whose average is at least the passing average.
    pub passing: usize,
    pub failing: usize,
}

impl SchoolReport {
    pub fn lines(&self) -> [String; 5] {
        [
            format!("School: {}", self.school_name),
            format!("Classes: {}", self.class_count),
            format!("Total students: {}", self.total_students),
            format!("Students with average >= {}: {}", PASSING_AVERAGE, self.passing),
            format!("Students with average < {}: {}", PASSING_AVERAGE, self.failing),
        ]
    }

    pub fn write_to(&self, sink: &mut dyn ReportSink) {
        for line in self.lines() {
            sink.emit(&line);
        }
    }
}
