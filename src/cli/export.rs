//! `export` command

use super::util::{parse_flag_arg, parse_output_arg, positional_args, write_output};
use side_export::templates::engine_with_override;
use side_export::{ExportConfig, Exporter, Project, Result};
use std::path::Path;

/// Config from `--config`, else `.side-export.yaml` next to the project
fn resolve_config(args: &[String], project_path: &Path) -> Result<ExportConfig> {
    if let Some(path) = parse_flag_arg(args, "--config", Some("-c")) {
        return ExportConfig::load(Path::new(&path));
    }
    let dir = project_path.parent().unwrap_or_else(|| Path::new("."));
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    Ok(ExportConfig::load_from_dir(dir)?.unwrap_or_default())
}

pub fn cmd_export(args: &[String]) -> Result<()> {
    let positional = positional_args(args);
    let Some(project_arg) = positional.first() else {
        return Err(
            "Usage: side-export export <project.side> [--suite NAME] [--output FILE] [--config FILE]"
                .into(),
        );
    };
    let project_path = Path::new(project_arg);
    let project = Project::load(project_path)?;
    let config = resolve_config(args, project_path)?;
    tracing::debug!(?config, "loaded config");

    let mut exporter = Exporter::with_config(config);
    if let Some(dir) = parse_flag_arg(args, "--template-dir", None) {
        exporter = exporter.with_engine(engine_with_override(Path::new(&dir))?);
    }

    let source = project_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| project_arg.to_string());
    let code = match parse_flag_arg(args, "--suite", None) {
        Some(suite) => exporter.render_suite(&project, &suite, &source)?,
        None => exporter.render_project(&project, &source)?,
    };

    write_output(&parse_output_arg(args), &code)
}
