use visitor::{VisitorRecord, find_name, reason_required, validate_name, validate_reason};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("{0}")]
    Name(&'static str),

    #[error("{0}")]
    Reason(&'static str),
}

/// The guestbook form.
///
/// Holds the visitor list fetched when the form was opened; later signups
/// from other sessions are not seen until the form is opened again.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    visitors: Vec<VisitorRecord>,
    name: String,
    reason: String,
    matched: Option<usize>,
}

impl LoginForm {
    pub fn new(visitors: Vec<VisitorRecord>) -> Self {
        Self {
            visitors,
            ..Default::default()
        }
    }

    /// Updates the name and re-derives the match from the snapshot.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.matched = find_name(&self.name, self.visitors.iter().map(|v| v.name.as_str()));
    }

    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn visitors(&self) -> &[VisitorRecord] {
        &self.visitors
    }

    pub fn matched(&self) -> Option<&VisitorRecord> {
        self.matched.map(|idx| &self.visitors[idx])
    }

    pub fn reason_required(&self) -> bool {
        reason_required(self.matched())
    }

    /// Same rules the browser applies before letting the form submit.
    pub fn validate(&self) -> Result<(), FormError> {
        validate_name(&self.name).map_err(FormError::Name)?;
        validate_reason(&self.reason, self.reason_required()).map_err(FormError::Reason)?;
        Ok(())
    }

    pub fn submit_label(&self) -> &'static str {
        match self.matched {
            Some(_) => "Enter",
            None => "Submit",
        }
    }

    pub fn reason_placeholder(&self) -> &'static str {
        match self.matched {
            Some(_) => "(optional for returning visitors)",
            None => "Why are you visiting?",
        }
    }

    pub fn welcome_hint(&self) -> Option<&'static str> {
        self.matched.map(|_| "Welcome back! Reason is optional.")
    }
}
