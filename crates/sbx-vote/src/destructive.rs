//! Classification of edits that remove or rename data.

use serde::{Deserialize, Serialize};

use sbx_types::{EditOperation, TargetType};

/// The parts of an edit that decide whether it is destructive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSummary {
    pub operation: EditOperation,
    pub target_type: TargetType,
    /// Name on the old side of the edit, if the name changed.
    #[serde(default)]
    pub old_name: Option<String>,
    /// Name on the new side of the edit, if the name changed.
    #[serde(default)]
    pub new_name: Option<String>,
    /// Whether scene credits keep the old name as a performance alias.
    #[serde(default)]
    pub set_modify_aliases: bool,
}

/// DESTROY and MERGE are always destructive. Renaming a performer is
/// destructive too unless existing scene credits keep the old name.
pub fn is_destructive(edit: &EditSummary) -> bool {
    if matches!(edit.operation, EditOperation::Destroy | EditOperation::Merge) {
        return true;
    }
    if edit.operation == EditOperation::Modify && edit.target_type == TargetType::Performer {
        if let Some(new_name) = edit.new_name.as_deref() {
            let old_name = edit.old_name.as_deref().map(str::trim).unwrap_or_default();
            return old_name != new_name && !edit.set_modify_aliases;
        }
    }
    false
}
