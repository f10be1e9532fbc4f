use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use kinetic_core::{KineticConfig, UuidGenerator};
use kinetic_ir::catalog::presets;
use kinetic_ir::options::range_options;
use kinetic_ir::{
    ActionType, AnimationAction, AnyAnimation, Axis, Document, RangeEdge, ScrollSource,
};
use kinetic_panel::{
    ActionSection, AnimationsList, EditHandle, EditOutcome, RangePanel, RecordingNotifier,
};

const DEFAULT_CONFIG: &str = "kinetic.toml";

#[derive(Parser)]
#[command(
    name = "kinetic",
    version,
    about = "Kinetic: scroll and view animation settings, headless",
    long_about = "Drives the Kinetic animation panel from the command line.\nActions and documents are JSON files; results are printed to stdout as JSON."
)]
struct Cli {
    /// Path to the config file (default: ./kinetic.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check an animation action file and print it normalized
    Validate {
        #[arg()]
        file: PathBuf,
    },

    /// List the starter animations for an action type
    Presets {
        #[arg(long = "type", default_value = "scroll")]
        action_type: ActionType,
    },

    /// List the timeline range names for an action type
    Ranges {
        #[arg(long = "type", default_value = "scroll")]
        action_type: ActionType,
    },

    /// List view-timeline subjects for the selected instance of a document
    Subjects {
        #[arg(long)]
        document: PathBuf,
    },

    /// Apply one panel edit to an action and print the result
    Edit {
        /// Animation action JSON file
        #[arg(long)]
        action: PathBuf,

        /// Builder document JSON file, needed by `set-subject`
        #[arg(long)]
        document: Option<PathBuf>,

        #[command(subcommand)]
        op: EditOp,
    },
}

#[derive(Subcommand)]
enum EditOp {
    /// Switch between scroll and view (drops all animations)
    SetType { action_type: ActionType },
    SetAxis { axis: Axis },
    /// Scroll container to follow (scroll actions only)
    SetSource { source: ScrollSource },
    /// Timeline subject: `self`, a timeline name, or an ancestor instance id
    SetSubject { subject: String },
    /// Append a starter animation, by index or name
    Add { preset: String },
    Remove { index: usize },
    /// Move the animation at `from` to position `to`
    Move {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
    /// Pick the range name where an animation starts
    RangeStart { index: usize, range: String },
    /// Pick the range name where an animation ends
    RangeEnd { index: usize, range: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // stdout carries JSON only; logs go to stderr without colors.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { file } => cmd_validate(&file),
        Commands::Presets { action_type } => print_json(&presets(action_type)),
        Commands::Ranges { action_type } => print_json(&range_options(action_type)),
        Commands::Subjects { document } => cmd_subjects(&document, &config),
        Commands::Edit {
            action,
            document,
            op,
        } => cmd_edit(&action, document.as_deref(), op, &config),
    }
}

fn load_config(path: Option<&Path>) -> Result<KineticConfig> {
    match path {
        Some(path) => KineticConfig::load_from_file(path)
            .with_context(|| format!("failed to load config: {}", path.display())),
        None if Path::new(DEFAULT_CONFIG).exists() => {
            KineticConfig::load_from_file(Path::new(DEFAULT_CONFIG))
                .with_context(|| format!("failed to load config: {}", DEFAULT_CONFIG))
        }
        None => Ok(KineticConfig::default()),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn read_action(path: &Path) -> Result<AnimationAction> {
    kinetic_ir::parse_action(read_json(path)?)
        .with_context(|| format!("invalid animation action: {}", path.display()))
}

fn read_document(path: &Path) -> Result<Document> {
    serde_json::from_value(read_json(path)?)
        .with_context(|| format!("invalid document: {}", path.display()))
}

fn cmd_validate(file: &Path) -> Result<()> {
    let value = read_json(file)?;
    let action: AnimationAction = serde_json::from_value(value)
        .map_err(|e| anyhow::anyhow!("Schema error in {}:\n  {}", file.display(), e))?;

    kinetic_ir::validate_action(&action).map_err(|errors| {
        let msgs: Vec<String> = errors.into_iter().map(|e| e.to_string()).collect();
        anyhow::anyhow!("Validation errors:\n  {}", msgs.join("\n  "))
    })?;

    tracing::info!("{} is a valid {} action", file.display(), action.action_type());
    print_json(&action)
}

fn cmd_subjects(document: &Path, config: &KineticConfig) -> Result<()> {
    let doc = read_document(document)?;
    let section = ActionSection::mount(&doc, &mut UuidGenerator, &config.panel);
    print_json(section.subjects())
}

fn cmd_edit(
    action_path: &Path,
    document_path: Option<&Path>,
    op: EditOp,
    config: &KineticConfig,
) -> Result<()> {
    let value = read_action(action_path)?;
    let mut notifier = RecordingNotifier::new();
    let mut committed = None;
    let mut on_change = |next: AnimationAction| committed = Some(next);
    let mut ids = UuidGenerator;

    let outcome = {
        let mut handle = EditHandle::<AnimationAction>::new(&mut notifier, &mut on_change);
        match op {
            EditOp::SetSubject { subject } => {
                let document_path =
                    document_path.context("set-subject needs --document <doc.json>")?;
                let mut doc = read_document(document_path)?;
                let before = doc.styles.clone();
                let section = ActionSection::mount(&doc, &mut ids, &config.panel);
                let subject = resolve_subject(&section, &subject);

                let outcome = section
                    .set_subject(&value, &subject, &mut doc, &mut ids, &mut handle)
                    .context("cannot declare the view timeline")?;
                if outcome.is_committed() && doc.styles != before {
                    write_document(document_path, &doc)?;
                }
                outcome
            }
            op => apply_op(&value, op, config, &mut handle)?,
        }
    };

    match (outcome, committed) {
        (EditOutcome::Committed, Some(next)) => print_json(&next),
        _ => {
            let message = notifier.last().unwrap_or("edit rejected");
            anyhow::bail!("{}", message)
        }
    }
}

fn apply_op(
    value: &AnimationAction,
    op: EditOp,
    config: &KineticConfig,
    handle: &mut EditHandle<'_, AnimationAction>,
) -> Result<EditOutcome> {
    let mut list = AnimationsList::new();

    let outcome = match op {
        EditOp::SetType { action_type } => ActionSection::set_type(value, action_type, handle),
        EditOp::SetAxis { axis } => ActionSection::set_axis(value, axis, handle),
        EditOp::SetSource { source } => ActionSection::set_source(value, source, handle),
        EditOp::Add { preset } => {
            let index = preset_index(value, &list, &preset)?;
            list.add(value, index, handle)
        }
        EditOp::Remove { index } => list.remove(value, index, handle),
        EditOp::Move { from, to } => list.sort(value, to, from, handle),
        EditOp::RangeStart { index, range } => {
            edit_range(value, index, RangeEdge::Start, &range, config, &list, handle)?
        }
        EditOp::RangeEnd { index, range } => {
            edit_range(value, index, RangeEdge::End, &range, config, &list, handle)?
        }
        EditOp::SetSubject { .. } => anyhow::bail!("set-subject needs --document <doc.json>"),
    };
    Ok(outcome)
}

/// The range panel edits one animation; the list stores it back.
fn edit_range(
    value: &AnimationAction,
    index: usize,
    edge: RangeEdge,
    range: &str,
    config: &KineticConfig,
    list: &AnimationsList,
    handle: &mut EditHandle<'_, AnimationAction>,
) -> Result<EditOutcome> {
    let animation = value
        .animation(index)
        .with_context(|| format!("no animation at index {} (action has {})", index, value.len()))?;

    let panel = RangePanel::new(&config.panel);
    let mut edited = None;
    let mut on_animation = |next: AnyAnimation| edited = Some(next);
    let mut notifier = RecordingNotifier::new();
    {
        let mut animation_handle = EditHandle::<AnyAnimation>::new(&mut notifier, &mut on_animation);
        panel.select(&animation, edge, range, &mut animation_handle);
    }

    match edited {
        Some(next) => Ok(list.update(value, index, next, handle)),
        None => {
            let message = notifier.last().unwrap_or("edit rejected");
            Ok(handle.reject(message, &format!("'{}' is not a {} range", range, value.action_type())))
        }
    }
}

/// Preset given by menu position or by name, case-insensitively.
fn preset_index(value: &AnimationAction, list: &AnimationsList, preset: &str) -> Result<usize> {
    if let Ok(index) = preset.parse::<usize>() {
        return Ok(index);
    }
    list.presets(value)
        .iter()
        .position(|candidate| candidate.name().eq_ignore_ascii_case(preset))
        .with_context(|| format!("unknown {} preset '{}'", value.action_type(), preset))
}

/// Subjects are synthesized per run, so ancestors may also be named by
/// instance id.
fn resolve_subject(section: &ActionSection, subject: &str) -> String {
    section
        .subjects()
        .iter()
        .find(|candidate| candidate.value == subject || candidate.instance_id.0 == subject)
        .map(|candidate| candidate.value.clone())
        .unwrap_or_else(|| subject.to_string())
}

fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let json = serde_json::to_string_pretty(doc).context("failed to serialize document")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("updated {}", path.display());
    Ok(())
}
