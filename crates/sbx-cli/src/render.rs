//! Text rendering of change sets and unmatched fields.

use colored::Colorize;
use serde_json::Value;

use sbx_diff::{ChangeSet, FieldChange};
use sbx_draft::UnmatchedFields;

/// Display form of a change-set value: strings bare, everything else as
/// compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn display_opt(value: Option<&Value>) -> String {
    value.map(display_value).unwrap_or_default()
}

/// One line per scalar field, one line per set member.
pub fn change_set_lines(change_set: &ChangeSet) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in change_set {
        match &entry.change {
            FieldChange::Scalar {
                old,
                new,
                show_diff,
            } => {
                if *show_diff {
                    lines.push(format!(
                        "  {}: {} → {}",
                        entry.field.bold(),
                        display_opt(old.as_ref()).red(),
                        display_opt(new.as_ref()).green()
                    ));
                } else {
                    lines.push(format!(
                        "  {}: {}",
                        entry.field.bold(),
                        display_opt(new.as_ref())
                    ));
                }
            }
            FieldChange::Set { added, removed } => {
                lines.push(format!("  {}:", entry.field.bold()));
                for value in added {
                    lines.push(format!("    {} {}", "+".green(), display_value(value)));
                }
                for value in removed {
                    lines.push(format!("    {} {}", "-".red(), display_value(value)));
                }
            }
        }
    }
    lines
}

pub fn unmatched_lines(unmatched: &UnmatchedFields) -> Vec<String> {
    unmatched
        .iter()
        .map(|u| format!("  {}: {}", u.field.yellow(), u.value))
        .collect()
}
