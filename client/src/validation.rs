use crate::session::SessionId;
use std::fmt;
use std::path::Path;

/// A flow was triggered before its inputs were in place. Returned instead
/// of making a network call; the front-end decides how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    NoFileSelected,
    EmptyQuestion,
    NoSession,
}

impl Precondition {
    pub fn message(&self) -> &'static str {
        match self {
            Precondition::NoFileSelected => "Please select a file first.",
            Precondition::EmptyQuestion => "Please enter a question.",
            Precondition::NoSession => "Please upload a document first.",
        }
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Precondition {}

pub fn validate_upload(file: Option<&Path>) -> Result<&Path, Precondition> {
    file.ok_or(Precondition::NoFileSelected)
}

/// Question is checked before the session, matching the order the user
/// sees the prompts.
pub fn validate_query<'a>(
    question: &'a str,
    session: Option<&'a SessionId>,
) -> Result<(&'a str, &'a SessionId), Precondition> {
    let question = question.trim();
    if question.is_empty() {
        return Err(Precondition::EmptyQuestion);
    }
    let session = session.ok_or(Precondition::NoSession)?;
    Ok((question, session))
}
