//! Status lines on stderr.
//!
//! Rendered documents may go to stdout, so progress and errors never do.

use std::path::Path;

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    label: Style,
    done: Style,
    warn: Style,
    fail: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().cyan(),
            done: Style::new().green().bold(),
            warn: Style::new().yellow(),
            fail: Style::new().red(),
        }
    }

    /// `<label>: <path>`, with the label highlighted.
    pub(crate) fn path(&self, label: &str, path: &Path) {
        let _ = self.term.write_line(&format!(
            "{} {}",
            self.label.apply_to(format!("{label}:")),
            path.display()
        ));
    }

    /// Final summary line (green).
    pub(crate) fn done(&self, msg: &str) {
        let _ = self.term.write_line(&self.done.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.warn.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.fail.apply_to(msg).to_string());
    }
}
