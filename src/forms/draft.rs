//! Editable form state

/// One input of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name, as sent to the backend
    pub key: &'static str,
    /// Label shown next to the input
    pub label: &'static str,
    /// Current value
    pub value: String,
    /// Whether the field is marked required
    pub required: bool,
    /// Read-only fields are filled programmatically and skipped by focus
    pub read_only: bool,
}

impl FormField {
    /// Create an editable field
    pub fn new(key: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            key,
            label,
            value: String::new(),
            required,
            read_only: false,
        }
    }

    /// Mark the field read-only
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// Live feedback for a field while the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldHighlight {
    /// Required and filled in
    Filled,
    /// Required and still blank
    Empty,
    /// Optional field, no feedback
    Neutral,
}

/// A set of fields with a focus cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    fields: Vec<FormField>,
    focus: usize,
}

impl FormDraft {
    /// Create a draft from fields; focus starts on the first editable field
    pub fn new(fields: Vec<FormField>) -> Self {
        let focus = fields.iter().position(|f| !f.read_only).unwrap_or(0);
        Self { fields, focus }
    }

    /// The contact form
    pub fn contact() -> Self {
        Self::new(vec![
            FormField::new("name", "Name", true),
            FormField::new("email", "Email", true),
            FormField::new("phone", "Phone", false),
            FormField::new("subject", "Subject", true),
            FormField::new("message", "Message", true),
        ])
    }

    /// The job application form; `role` is filled in when a job is picked
    pub fn job_application() -> Self {
        Self::new(vec![
            FormField::new("role", "Role", true).read_only(),
            FormField::new("name", "Full Name", true),
            FormField::new("email", "Email", true),
            FormField::new("phone", "Phone", true),
            FormField::new("experience", "Experience", true),
            FormField::new("message", "Cover Message", false),
            FormField::new("resume", "Resume File (path)", false),
        ])
    }

    /// All fields in display order
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Value of a field, empty when the key is unknown
    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Set a field's value, including read-only ones. Returns false for unknown keys.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Index of the focused field
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// The focused field
    pub fn focused(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    /// Move focus to the next editable field, wrapping around
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Move focus to the previous editable field, wrapping around
    pub fn focus_previous(&mut self) {
        self.step_focus(self.fields.len().saturating_sub(1));
    }

    fn step_focus(&mut self, step: usize) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        let mut index = self.focus;
        for _ in 0..len {
            index = (index + step) % len;
            if !self.fields[index].read_only {
                self.focus = index;
                return;
            }
        }
    }

    /// Type a character into the focused field
    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if !field.read_only {
                field.value.push(c);
            }
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if !field.read_only {
                field.value.pop();
            }
        }
    }

    /// Live highlight of a field
    pub fn highlight(&self, index: usize) -> FieldHighlight {
        match self.fields.get(index) {
            Some(field) if field.required && !field.value.trim().is_empty() => FieldHighlight::Filled,
            Some(field) if field.required => FieldHighlight::Empty,
            _ => FieldHighlight::Neutral,
        }
    }

    /// Clear every value and return focus to the first editable field
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = self.fields.iter().position(|f| !f.read_only).unwrap_or(0);
    }
}
