use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::commands::summary;
use crate::reader::read_project_files;

#[derive(Serialize)]
struct FileValidation {
    file: String,
    model: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Validate every project under `input_path`; returns the output and the error count.
pub fn run_validate(input_path: &Path, format: &str) -> Result<(String, usize)> {
    let files = read_project_files(input_path)?;

    let results: Vec<FileValidation> = files
        .iter()
        .map(|f| {
            let error = f
                .project
                .resolver()
                .validate(&f.project.link_styles, &f.project.model)
                .err()
                .map(|e| e.to_string());
            FileValidation {
                file: f.path.clone(),
                model: f.project.model.name.clone(),
                valid: error.is_none(),
                error,
            }
        })
        .collect();

    let error_count = results.iter().filter(|r| !r.valid).count();
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
        match &r.error {
            Some(message) => lines.push(format!("{}: error: {}", r.file, message)),
            None => lines.push(format!("{}: ok ({})", r.file, r.model)),
        }
    }
    lines.push(summary(error_count, file_count));

    Ok((lines.join("\n"), error_count))
}
