//! Turns a query [`Answer`] into a structured [`DecisionView`].
//!
//! Every server-supplied string is bound to its own [`ViewNode`]; nothing is
//! spliced into markup, so front-ends decide how to present (and sanitize)
//! each field.

use crate::models::{Answer, ReferencedClause};
use regex::Regex;
use std::sync::LazyLock;

static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)rejected|not").unwrap());
static POSITIVE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)approved|covered").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionCategory {
    Positive,
    Negative,
    Neutral,
}

impl DecisionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            DecisionCategory::Positive => "approved",
            DecisionCategory::Negative => "rejected",
            DecisionCategory::Neutral => "info",
        }
    }
}

/// Keyword heuristic over the decision text. Negative keywords are checked
/// first so "Not Covered" and "Not approved" land in the negative bucket.
pub fn classify(decision: &str) -> DecisionCategory {
    if NEGATIVE.is_match(decision) {
        DecisionCategory::Negative
    } else if POSITIVE.is_match(decision) {
        DecisionCategory::Positive
    } else {
        DecisionCategory::Neutral
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClauseView {
    pub clause_number: String,
    pub document_name: String,
    pub text: String,
}

impl From<&ReferencedClause> for ClauseView {
    fn from(clause: &ReferencedClause) -> Self {
        Self {
            clause_number: clause.clause_label().to_string(),
            document_name: clause.document_name.clone(),
            text: clause.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionView {
    pub category: DecisionCategory,
    pub decision: String,
    pub justification: String,
    pub amount: Option<f64>,
    pub conditions: Option<String>,
    pub clauses: Vec<ClauseView>,
}

/// One display node. Labels are fixed text owned by the client; `text`
/// fields carry server data verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Decision { category: DecisionCategory, text: String },
    Field { label: &'static str, text: String },
    SectionHeading(&'static str),
    Clause {
        clause_number: String,
        document_name: String,
        text: String,
    },
}

pub fn render(answer: &Answer) -> DecisionView {
    let clauses = answer
        .referenced_clauses
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(ClauseView::from)
        .collect();

    DecisionView {
        category: classify(&answer.decision),
        decision: answer.decision.clone(),
        justification: answer.justification.clone(),
        amount: answer.amount,
        conditions: answer
            .conditions
            .as_ref()
            .filter(|c| !c.trim().is_empty())
            .cloned(),
        clauses,
    }
}

impl DecisionView {
    pub fn has_clauses(&self) -> bool {
        !self.clauses.is_empty()
    }

    /// Flattens the view in display order. Optional sections are omitted
    /// entirely when empty.
    pub fn nodes(&self) -> Vec<ViewNode> {
        let mut nodes = vec![
            ViewNode::Decision {
                category: self.category,
                text: self.decision.clone(),
            },
            ViewNode::Field {
                label: "Justification",
                text: self.justification.clone(),
            },
        ];

        if let Some(amount) = self.amount {
            nodes.push(ViewNode::Field {
                label: "Amount",
                text: format!("{:.2}", amount),
            });
        }

        if let Some(conditions) = &self.conditions {
            nodes.push(ViewNode::Field {
                label: "Conditions",
                text: conditions.clone(),
            });
        }

        if self.has_clauses() {
            nodes.push(ViewNode::SectionHeading("Referenced Clauses"));
            nodes.extend(self.clauses.iter().map(|c| ViewNode::Clause {
                clause_number: c.clause_number.clone(),
                document_name: c.document_name.clone(),
                text: c.text.clone(),
            }));
        }

        nodes
    }
}
