use apiroute_stage::{
    ReplaceMode, SourceCandidates, StageAction, StageOptions, list_generated_files,
};

use crate::cli::StageArgs;
use crate::error::Result;
use crate::ui;

pub fn execute(args: StageArgs) -> Result<()> {
    let candidates = if args.candidates.is_empty() {
        SourceCandidates::default()
    } else {
        SourceCandidates::new(args.candidates.iter().cloned())
    };

    let files = if args.all {
        let source = candidates.locate(&args.origin)?;
        list_generated_files(&source)?
    } else {
        args.files.clone()
    };
    if files.is_empty() {
        ui::warning("no files to stage");
    }

    let new_id = args.new_id.as_deref().unwrap_or(&args.old_id);
    let mode = if args.pattern {
        ReplaceMode::Pattern
    } else {
        ReplaceMode::Literal
    };

    let report = StageOptions::new()
        .candidates(candidates)
        .mode(mode)
        .rename(args.old_id.as_str(), new_id)
        .replicate(&args.origin, &args.target, &files)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for file in &report.files {
        match file.action {
            StageAction::Rewritten { replacements } => ui::info(&format!(
                "{} ({replacements} replacement{})",
                file.name.display(),
                if replacements == 1 { "" } else { "s" }
            )),
            StageAction::Copied => ui::info(&file.name.display().to_string()),
        }
    }
    ui::success(&format!(
        "staged {} file{} into {}",
        report.files.len(),
        if report.files.len() == 1 { "" } else { "s" },
        report.target.display()
    ));
    Ok(())
}
