//! Diagnostic rendering in tsc's `file:line:col - category TSxxxx` style.

use std::collections::HashMap;

use colored::Colorize;

use dtsj_common::diagnostics::{Diagnostic, DiagnosticCategory};
use dtsj_common::position::LineMap;

pub struct Reporter {
    color: bool,
    sources: HashMap<String, String>,
    line_maps: HashMap<String, LineMap>,
}

impl Reporter {
    pub fn new(color: bool) -> Reporter {
        Reporter {
            color,
            sources: HashMap::new(),
            line_maps: HashMap::new(),
        }
    }

    /// Register a file's source text so its diagnostics render with
    /// line/column locations and a snippet.
    pub fn add_source(&mut self, file: &str, source: &str) {
        self.line_maps.insert(file.to_string(), LineMap::new(source));
        self.sources.insert(file.to_string(), source.to_string());
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        match self.line_maps.get(&diagnostic.file) {
            Some(line_map) => {
                let position = line_map.position_at(diagnostic.start);
                output.push_str(&format!(
                    "{}:{}:{}",
                    diagnostic.file,
                    position.line + 1,
                    position.character + 1
                ));
            }
            None => output.push_str(&diagnostic.file),
        }

        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        output.push_str(&format!(" TS{}", diagnostic.code));
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(snippet) = self.format_snippet(diagnostic) {
            output.push_str(&snippet);
        }

        output
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = match category {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Message => "message",
        };
        if !self.color {
            return label.to_string();
        }
        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().to_string(),
        }
    }

    /// Source snippet with a tilde underline, matching tsc's output shape:
    ///
    /// ```text
    ///   2   declare function f(...a?: number[]): void;
    ///                          ~~~~~~~~~~~~~~~~
    /// ```
    fn format_snippet(&self, diagnostic: &Diagnostic) -> Option<String> {
        if diagnostic.length == 0 {
            return None;
        }
        let source = self.sources.get(&diagnostic.file)?;
        let line_map = self.line_maps.get(&diagnostic.file)?;
        let position = line_map.position_at(diagnostic.start);
        let line_text = source.lines().nth(position.line as usize)?;

        let column = position.character as usize;
        let span = (diagnostic.length as usize).min(line_text.len().saturating_sub(column));
        let underline = " ".repeat(column) + &"~".repeat(span.max(1));

        let gutter = format!("{:>4}  ", position.line + 1);
        Some(format!(
            "\n{gutter}{line_text}\n{}{underline}",
            " ".repeat(gutter.len())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_location_and_snippet() {
        let source = "declare var x: number;\ndeclare function f(): void;\n";
        let mut reporter = Reporter::new(false);
        reporter.add_source("main.d.ts", source);

        let diagnostic = Diagnostic::error("main.d.ts", 8, 3, "Unexpected 'var'.", 90001);
        let rendered = reporter.format_diagnostic(&diagnostic);
        assert!(rendered.starts_with("main.d.ts:1:9 - error TS90001: Unexpected 'var'."));
        assert!(rendered.contains("declare var x: number;"));
        assert!(rendered.contains("~~~"));
    }

    #[test]
    fn test_format_without_registered_source() {
        let reporter = Reporter::new(false);
        let diagnostic = Diagnostic::warning("other.d.ts", 0, 0, "skipped", 90001);
        assert_eq!(
            reporter.format_diagnostic(&diagnostic),
            "other.d.ts - warning TS90001: skipped"
        );
    }
}
