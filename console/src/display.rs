//! Terminal rendering for client state.
//!
//! Server text is written field by field through [`sanitize`], so a
//! decision or clause cannot smuggle escape sequences into the terminal.

use intelliquery_client::{ClientState, DecisionCategory, DecisionView, ResultsPanel, ViewNode};
use std::io::{self, Write};

/// Drops control characters other than newline and tab.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

fn badge(category: DecisionCategory) -> String {
    format!("[{}]", category.label().to_uppercase())
}

pub fn write_view<W: Write>(out: &mut W, view: &DecisionView) -> io::Result<()> {
    for node in view.nodes() {
        match node {
            ViewNode::Decision { category, text } => {
                writeln!(out, "Decision: {} {}", badge(category), sanitize(&text))?;
            }
            ViewNode::Field { label, text } => {
                writeln!(out, "{}: {}", label, sanitize(&text))?;
            }
            ViewNode::SectionHeading(title) => {
                writeln!(out)?;
                writeln!(out, "{}", title)?;
            }
            ViewNode::Clause {
                clause_number,
                document_name,
                text,
            } => {
                writeln!(
                    out,
                    "  - Clause {} ({})",
                    sanitize(&clause_number),
                    sanitize(&document_name)
                )?;
                for line in sanitize(&text).lines() {
                    writeln!(out, "    > {}", line)?;
                }
            }
        }
    }
    Ok(())
}

pub fn write_results<W: Write>(out: &mut W, results: &ResultsPanel) -> io::Result<()> {
    match results {
        ResultsPanel::Empty => Ok(()),
        ResultsPanel::Decision(view) => write_view(out, view),
        ResultsPanel::Error(message) => writeln!(out, "{}", sanitize(message)),
    }
}

pub fn write_status<W: Write>(out: &mut W, state: &ClientState) -> io::Result<()> {
    if !state.status.is_empty() {
        writeln!(out, "{}", sanitize(&state.status))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use intelliquery_client::{render, Answer, ReferencedClause};

    fn output(results: &ResultsPanel) -> String {
        let mut buf = Vec::new();
        write_results(&mut buf, results).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn sanitize_strips_escape_sequences() {
        assert_eq!(sanitize("Covered\x1b[2J\r"), "Covered[2J");
        assert_eq!(sanitize("line one\nline\ttwo"), "line one\nline\ttwo");
    }

    #[test]
    fn renders_decision_with_clauses_in_order() {
        let answer = Answer {
            decision: "Not Covered".to_string(),
            justification: "Cosmetic procedures are excluded.".to_string(),
            amount: None,
            conditions: None,
            referenced_clauses: Some(vec![
                ReferencedClause {
                    clause_number: Some("7.2".to_string()),
                    document_name: "policy.pdf".to_string(),
                    text: "Cosmetic surgery is excluded.".to_string(),
                },
                ReferencedClause {
                    clause_number: None,
                    document_name: "faq.txt".to_string(),
                    text: "See exclusions.".to_string(),
                },
            ]),
        };

        let text = output(&ResultsPanel::Decision(render(&answer)));

        assert!(text.starts_with("Decision: [REJECTED] Not Covered\n"));
        assert!(text.contains("Justification: Cosmetic procedures are excluded.\n"));
        assert!(!text.contains("Conditions:"));
        let first = text.find("Clause 7.2 (policy.pdf)").unwrap();
        let second = text.find("Clause N/A (faq.txt)").unwrap();
        assert!(first < second);
        assert!(text.contains("    > Cosmetic surgery is excluded.\n"));
    }

    #[test]
    fn renders_error_and_empty_panels() {
        assert_eq!(output(&ResultsPanel::Empty), "");
        assert_eq!(
            output(&ResultsPanel::Error("Error: bad\x07 file".to_string())),
            "Error: bad file\n"
        );
    }
}
