//! Careers page: job cards and the application form

use crate::forms::FormDraft;

/// An open position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOpening {
    /// Role name, copied into the application form
    pub title: String,
    /// One-line summary on the collapsed card
    pub summary: String,
    /// Longer description shown when expanded
    pub details: Vec<String>,
}

impl JobOpening {
    /// Create an opening
    pub fn new(title: impl Into<String>, summary: impl Into<String>, details: &[&str]) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            details: details.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Positions listed on the careers page
pub fn default_openings() -> Vec<JobOpening> {
    vec![
        JobOpening::new(
            "Full Stack Developer",
            "Build web applications end to end",
            &["3+ years with a modern web stack", "REST API design", "SQL databases"],
        ),
        JobOpening::new(
            "Mobile App Developer",
            "Ship Android and iOS apps for our clients",
            &["Native or cross-platform experience", "Published apps a plus"],
        ),
        JobOpening::new(
            "UI/UX Designer",
            "Design interfaces people enjoy using",
            &["Portfolio required", "Prototyping and user research"],
        ),
        JobOpening::new(
            "QA Engineer",
            "Keep our releases solid",
            &["Manual and automated testing", "CI pipelines"],
        ),
    ]
}

/// Careers page state
#[derive(Debug, Clone)]
pub struct JobBoard {
    openings: Vec<JobOpening>,
    expanded: Option<usize>,
    form_open: bool,
    /// Application form fields
    pub form: FormDraft,
}

impl JobBoard {
    /// Create a board with the given openings
    pub fn new(openings: Vec<JobOpening>) -> Self {
        Self {
            openings,
            expanded: None,
            form_open: false,
            form: FormDraft::job_application(),
        }
    }

    /// Listed openings
    pub fn openings(&self) -> &[JobOpening] {
        &self.openings
    }

    /// Index of the expanded card, if any
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// A job card was clicked
    ///
    /// Clicks on a control inside the card (apply button, link) are ignored.
    /// Otherwise the card toggles and every other card collapses.
    pub fn expand_job(&mut self, index: usize, on_control: bool) {
        if on_control || index >= self.openings.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) { None } else { Some(index) };
    }

    /// Whether the application form is shown
    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Open the application form for a role
    pub fn show_application_form(&mut self, role: &str) {
        self.form.set_value("role", role);
        self.form_open = true;
    }

    /// Hide the application form and clear it
    pub fn close_application_form(&mut self) {
        self.form_open = false;
        self.form.reset();
    }
}

impl Default for JobBoard {
    fn default() -> Self {
        Self::new(default_openings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_one_at_a_time() {
        let mut board = JobBoard::default();
        assert_eq!(board.expanded(), None);

        board.expand_job(0, false);
        assert_eq!(board.expanded(), Some(0));

        board.expand_job(2, false);
        assert_eq!(board.expanded(), Some(2), "other cards collapse");

        board.expand_job(2, false);
        assert_eq!(board.expanded(), None, "second click collapses");
    }

    #[test]
    fn test_clicks_on_controls_ignored() {
        let mut board = JobBoard::default();
        board.expand_job(1, true);
        assert_eq!(board.expanded(), None);

        board.expand_job(99, false);
        assert_eq!(board.expanded(), None);
    }

    #[test]
    fn test_application_form_lifecycle() {
        let mut board = JobBoard::default();
        board.show_application_form("QA Engineer");
        assert!(board.is_form_open());
        assert_eq!(board.form.value("role"), "QA Engineer");

        board.form.set_value("name", "Lin");
        board.close_application_form();
        assert!(!board.is_form_open());
        assert_eq!(board.form.value("role"), "");
        assert_eq!(board.form.value("name"), "");
    }
}
