use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use stylelink_core::ResolvedLinkMap;

use crate::commands::summary;
use crate::reader::read_project_files;

#[derive(Serialize)]
struct FileLinks {
    file: String,
    model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<ResolvedLinkMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Validate and resolve every project under `input_path`.
///
/// Projects that fail validation are reported and not resolved.
pub fn run_resolve(input_path: &Path, format: &str) -> Result<(String, usize)> {
    let files = read_project_files(input_path)?;

    let results: Vec<FileLinks> = files
        .iter()
        .map(|f| {
            let resolver = f.project.resolver();
            let (links, error) = match resolver.validate(&f.project.link_styles, &f.project.model)
            {
                Ok(()) => (Some(resolver.resolve(&f.project.link_styles)), None),
                Err(e) => (None, Some(e.to_string())),
            };
            FileLinks {
                file: f.path.clone(),
                model: f.project.model.name.clone(),
                links,
                error,
            }
        })
        .collect();

    let error_count = results.iter().filter(|r| r.error.is_some()).count();
    let file_count = results.len();

    if format == "json" {
        let output = serde_json::json!({
            "results": results,
            "summary": {
                "errors": error_count,
                "files": file_count,
            }
        });
        let json = serde_json::to_string_pretty(&output).context("JSON serialization error")?;
        return Ok((json, error_count));
    }

    let mut lines: Vec<String> = Vec::new();
    for r in &results {
        if let Some(message) = &r.error {
            lines.push(format!("{}: error: {}", r.file, message));
            continue;
        }
        lines.push(format!("{} ({})", r.file, r.model));
        if let Some(links) = &r.links {
            if links.is_empty() {
                lines.push("  (no links)".into());
            }
            for (style, targets) in links.iter() {
                lines.push(format!("  {style} -> {}", targets.join(", ")));
            }
        }
    }
    lines.push(summary(error_count, file_count));

    Ok((lines.join("\n"), error_count))
}
