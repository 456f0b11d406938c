//! JUnit XML Report Generator
//!
//! Renders a [`KatSummary`] as a JUnit test suite, one test case per record,
//! for CI systems that collect JUnit results.

use std::io::Write;

use crate::error::Result;
use crate::summary::{KatCase, KatSummary};

/// JUnit XML report generator
#[derive(Debug)]
pub struct JunitReport {
    /// Test suite name
    suite_name: String,
    /// Test class name
    class_name: String,
}

impl JunitReport {
    /// Create a new JUnit report generator
    #[must_use]
    pub fn new(suite_name: impl Into<String>) -> Self {
        let name = suite_name.into();
        Self {
            class_name: name.clone(),
            suite_name: name,
        }
    }

    /// Set the class name for test cases
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Generate JUnit XML from a summary
    ///
    /// # Errors
    ///
    /// Returns an error if XML generation fails.
    pub fn generate(&self, summary: &KatSummary) -> Result<String> {
        let mut output = Vec::new();
        self.write_xml(&mut output, summary)?;
        Ok(String::from_utf8_lossy(&output).to_string())
    }

    /// Write JUnit XML to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, path: &std::path::Path, summary: &KatSummary) -> Result<()> {
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        self.write_xml(&mut file, summary)?;
        file.flush()?;
        Ok(())
    }

    fn write_xml<W: Write>(&self, writer: &mut W, summary: &KatSummary) -> Result<()> {
        let time = summary.duration_ms.unwrap_or(0) as f64 / 1000.0;

        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            writer,
            r#"<testsuite name="{}" tests="{}" failures="{}" errors="0" skipped="0" time="{:.3}" timestamp="{}">"#,
            Self::escape_xml(&self.suite_name),
            summary.total,
            summary.failed,
            time,
            summary.generated_at.format("%Y-%m-%dT%H:%M:%S")
        )?;

        writeln!(writer, "  <properties>")?;
        writeln!(
            writer,
            r#"    <property name="kat.passed" value="{}"/>"#,
            summary.passed
        )?;
        writeln!(
            writer,
            r#"    <property name="kat.pass_rate" value="{:.2}"/>"#,
            summary.pass_rate()
        )?;
        writeln!(writer, "  </properties>")?;

        for case in &summary.cases {
            self.write_testcase(writer, case)?;
        }

        writeln!(writer, "</testsuite>")?;
        Ok(())
    }

    fn write_testcase<W: Write>(&self, writer: &mut W, case: &KatCase) -> Result<()> {
        if case.passed {
            writeln!(
                writer,
                r#"  <testcase classname="{}" name="{}"/>"#,
                Self::escape_xml(&self.class_name),
                Self::escape_xml(&case.name()),
            )?;
            return Ok(());
        }

        writeln!(
            writer,
            r#"  <testcase classname="{}" name="{}">"#,
            Self::escape_xml(&self.class_name),
            Self::escape_xml(&case.name()),
        )?;
        writeln!(
            writer,
            r#"    <failure message="computed does not match expected" type="KatMismatch">"#
        )?;
        writeln!(writer, "{}", Self::escape_xml(&case.to_string()))?;
        writeln!(writer, "    </failure>")?;
        writeln!(writer, "  </testcase>")?;
        Ok(())
    }

    /// Escape XML special characters
    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }
}

impl Default for JunitReport {
    fn default() -> Self {
        Self::new("ctr-kat")
    }
}
