use std::path::Path;

use anyhow::{bail, Context};
use chrono::Utc;
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use sbx_diff::{compute_edit, EditChanges, EditDetails, EntityForm, OldEditDetails};
use sbx_draft::{reconcile, Draft};
use sbx_merge::MergeSet;
use sbx_types::{EditOperation, Entity, TargetType};
use sbx_vote::{
    is_destructive, net_vote_count, resolve_voting_threshold, EditSummary, EditTally, Vote,
    VoteConfig, VotePredictor,
};

use crate::cli::{
    Cli, Command, DiffArgs, MergeArgs, Operation, OutputFormat, PredictArgs, ReconcileArgs,
    ResolveArgs,
};
use crate::render::{change_set_lines, unmatched_lines};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Diff(args) => cmd_diff(args, cli.format),
        Command::Reconcile(args) => cmd_reconcile(args, cli.format),
        Command::Merge(args) => cmd_merge(args, cli.format),
        Command::Predict(args) => cmd_predict(args, cli.format),
        Command::Resolve(args) => cmd_resolve(args, cli.format),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_optional<T: DeserializeOwned>(path: Option<&Path>) -> anyhow::Result<Option<T>> {
    path.map(read_json).transpose()
}

fn load_config(path: Option<&Path>) -> anyhow::Result<VoteConfig> {
    match path {
        Some(path) => VoteConfig::load(path)
            .with_context(|| format!("failed to load vote config {}", path.display())),
        None => Ok(VoteConfig::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

impl From<Operation> for EditOperation {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Create => EditOperation::Create,
            Operation::Modify => EditOperation::Modify,
            Operation::Merge => EditOperation::Merge,
            Operation::Destroy => EditOperation::Destroy,
        }
    }
}

/// Old and new performer names, when the edit renames a performer.
fn performer_names(changes: &EditChanges) -> (Option<String>, Option<String>) {
    let old = match &changes.old {
        Some(OldEditDetails::Performer(old)) => old.name.clone(),
        _ => None,
    };
    let new = match &changes.new {
        Some(EditDetails::Performer(new)) => new.fields.name.clone(),
        _ => None,
    };
    (old, new)
}

pub(crate) fn summarize(
    changes: &EditChanges,
    target_type: TargetType,
    set_modify_aliases: bool,
) -> EditSummary {
    let (old_name, new_name) = performer_names(changes);
    EditSummary {
        operation: changes.operation,
        target_type,
        old_name,
        new_name,
        set_modify_aliases,
    }
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    let form: Option<EntityForm> = read_optional(args.form.as_deref())?;
    let original: Option<Entity> = read_optional(args.original.as_deref())?;
    let operation = EditOperation::from(args.operation);

    let target_type = match (&original, &form) {
        (Some(original), _) => original.target_type(),
        (None, Some(form)) => form.target_type(),
        (None, None) => bail!("{operation} needs --form or --original"),
    };

    let changes = compute_edit(operation, form.as_ref(), original.as_ref())
        .with_context(|| format!("cannot compute {operation} edit"))?;
    let destructive = is_destructive(&summarize(&changes, target_type, args.set_modify_aliases));

    match format {
        OutputFormat::Json => print_json(&json!({
            "target_type": target_type,
            "destructive": destructive,
            "edit": changes,
        })),
        OutputFormat::Text => {
            println!(
                "{} {} {}",
                operation.to_string().cyan().bold(),
                target_type,
                if destructive {
                    "(destructive)".red().to_string()
                } else {
                    String::new()
                }
            );
            if changes.change_set.is_empty() {
                println!("  {}", "no changes".dimmed());
            }
            for line in change_set_lines(&changes.change_set) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn cmd_reconcile(args: ReconcileArgs, format: OutputFormat) -> anyhow::Result<()> {
    let draft: Draft = read_json(&args.draft)?;
    let existing: Option<Entity> = read_optional(args.existing.as_deref())?;
    let reconciled = reconcile(&draft, existing.as_ref()).context("cannot reconcile draft")?;

    match format {
        OutputFormat::Json => print_json(&reconciled),
        OutputFormat::Text => {
            println!(
                "{} {} draft",
                "✓".green().bold(),
                reconciled.form.target_type()
            );
            println!("{}", serde_json::to_string_pretty(&reconciled.form)?);
            if !reconciled.unmatched.is_empty() {
                println!("{}", "Unmatched:".yellow().bold());
                for line in unmatched_lines(&reconciled.unmatched) {
                    println!("{line}");
                }
            }
            Ok(())
        }
    }
}

fn merge_report<T: sbx_merge::Mergeable, F: Serialize>(
    set: &MergeSet<T>,
    form: F,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let candidates = set.candidates();
    let set_merge_aliases = set.default_set_merge_aliases();
    match format {
        OutputFormat::Json => print_json(&json!({
            "sources": set.source_ids(),
            "candidates": candidates,
            "set_merge_aliases": set_merge_aliases,
            "form": form,
        })),
        OutputFormat::Text => {
            println!(
                "{} merging {} source(s) into {}",
                "✓".green().bold(),
                set.sources().len(),
                set.target().merge_name().cyan()
            );
            for alias in &candidates.alias_candidates {
                println!("  {} {}", "alias".dimmed(), alias);
            }
            for image in &candidates.image_candidates {
                println!("  {} {}", "image".dimmed(), image.url);
            }
            println!("  set merge aliases: {set_merge_aliases}");
            println!("{}", serde_json::to_string_pretty(&form)?);
            Ok(())
        }
    }
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let target: Entity = read_json(&args.target)?;
    let sources = args
        .sources
        .iter()
        .map(|p| read_json::<Entity>(p))
        .collect::<anyhow::Result<Vec<_>>>()?;

    macro_rules! collect_sources {
        ($variant:ident) => {
            sources
                .into_iter()
                .map(|s| match s {
                    Entity::$variant(inner) => Ok(inner),
                    other => bail!(
                        "cannot merge a {} into a {}",
                        other.target_type(),
                        TargetType::$variant
                    ),
                })
                .collect::<anyhow::Result<Vec<_>>>()?
        };
    }

    match target {
        Entity::Performer(target) => {
            let set = MergeSet::new(target, collect_sources!(Performer))?;
            merge_report(&set, set.seed_performer_form(), format)
        }
        Entity::Studio(target) => {
            let set = MergeSet::new(target, collect_sources!(Studio))?;
            merge_report(&set, set.seed_studio_form(), format)
        }
        Entity::Tag(target) => {
            let set = MergeSet::new(target, collect_sources!(Tag))?;
            merge_report(&set, set.seed_tag_form(), format)
        }
        Entity::Scene(_) => bail!("scenes cannot be merged"),
    }
}

fn cmd_predict(args: PredictArgs, format: OutputFormat) -> anyhow::Result<()> {
    let predictor = VotePredictor::new(load_config(args.config.as_deref())?);
    let mut tally: EditTally = read_json(&args.tally)?;
    if tally.expires_at.is_none() {
        tally.expires_at = predictor.expiration(&tally);
    }
    let prediction = predictor.predict_edit(&tally)?;

    match format {
        OutputFormat::Json => print_json(&prediction),
        OutputFormat::Text => {
            let verdict = if prediction.will_pass {
                "pass".green().bold()
            } else {
                "fail".red().bold()
            };
            println!(
                "Edit will {} at {}",
                verdict,
                prediction.qualifying_instant.to_rfc3339()
            );
            if predictor.is_short_voting_period(&tally) {
                println!("  {}", "shortened voting period".dimmed());
            }
            Ok(())
        }
    }
}

fn cmd_resolve(args: ResolveArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut tally: EditTally = read_json(&args.tally)?;
    let votes: Vec<Vote> = read_json(&args.votes)?;
    tally.vote_count = net_vote_count(&votes);

    let status = resolve_voting_threshold(&config, &tally, &votes, Utc::now());
    match format {
        OutputFormat::Json => print_json(&json!({
            "status": status,
            "vote_count": tally.vote_count,
        })),
        OutputFormat::Text => {
            let label = if status.is_pending() {
                status.to_string().yellow()
            } else if status.is_accepted() {
                status.to_string().green()
            } else {
                status.to_string().red()
            };
            println!("{} (net {:+})", label.bold(), tally.vote_count);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbx_diff::PerformerForm;
    use sbx_types::{EntityId, Performer};

    fn jane() -> Performer {
        Performer {
            id: EntityId::from_u128(1),
            name: "Jane".into(),
            ..Default::default()
        }
    }

    fn rename(to: &str) -> EditChanges {
        let form = EntityForm::Performer(PerformerForm {
            name: to.into(),
            ..PerformerForm::from_performer(&jane())
        });
        compute_edit(
            EditOperation::Modify,
            Some(&form),
            Some(&Entity::Performer(jane())),
        )
        .unwrap()
    }

    #[test]
    fn performer_rename_is_destructive_without_aliases() {
        let changes = rename("Jayne");
        assert!(is_destructive(&summarize(&changes, TargetType::Performer, false)));
        assert!(!is_destructive(&summarize(&changes, TargetType::Performer, true)));
    }

    #[test]
    fn unchanged_name_is_not_destructive() {
        let changes = rename("Jane");
        let summary = summarize(&changes, TargetType::Performer, false);
        assert_eq!(summary.new_name, None);
        assert!(!is_destructive(&summary));
    }

    #[test]
    fn destroy_summary_has_no_names() {
        let original = Entity::Performer(jane());
        let changes = compute_edit(EditOperation::Destroy, None, Some(&original)).unwrap();
        let summary = summarize(&changes, TargetType::Performer, false);
        assert_eq!(summary.old_name, None);
        assert!(is_destructive(&summary));
    }

    #[test]
    fn operation_maps_to_edit_operation() {
        assert_eq!(EditOperation::from(Operation::Merge), EditOperation::Merge);
        assert_eq!(EditOperation::from(Operation::Destroy), EditOperation::Destroy);
    }
}
