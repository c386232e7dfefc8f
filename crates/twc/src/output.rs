//! Styled status lines on stderr.
//!
//! Artifacts go to files, so everything the CLI says to the user goes to
//! stderr. Write failures are ignored: a closed terminal must not fail a build.

use console::{Style, Term};

/// Status line writer.
pub(crate) struct Output {
    term: Term,
    plain: Style,
    done: Style,
    caution: Style,
    failure: Style,
    heading: Style,
    muted: Style,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            plain: Style::new(),
            done: Style::new().green(),
            caution: Style::new().yellow(),
            failure: Style::new().red(),
            heading: Style::new().cyan().bold(),
            muted: Style::new().dim(),
        }
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(&self.plain, msg);
    }

    /// Artifact written or step completed.
    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.done, msg);
    }

    /// Recoverable problem; the command continues.
    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.caution, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.failure, msg);
    }

    /// Section title, e.g. the document name in `docs show`.
    pub(crate) fn highlight(&self, msg: &str) {
        self.line(&self.heading, msg);
    }

    /// Absent or secondary information.
    pub(crate) fn detail(&self, msg: &str) {
        self.line(&self.muted, msg);
    }
}
