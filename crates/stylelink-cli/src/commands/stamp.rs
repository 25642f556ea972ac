use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use stylelink_core::{link_form, link_media, Media};

use crate::commands::summary;
use crate::reader::{read_project_files, ProjectFile};

#[derive(Serialize)]
struct FileStamp {
    file: String,
    model: String,
    /// Stamped fields in form order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<StampedField>,
    media: Media,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct StampedField {
    name: String,
    attrs: BTreeMap<String, String>,
}

fn stamp_file(f: &ProjectFile) -> FileStamp {
    let resolver = f.project.resolver();
    let mut form = f.project.build_form(&resolver);
    let mut media = Media::default();
    link_media(&mut media, resolver.settings());

    let error = link_form(&resolver, &f.project.link_styles, &f.project.model, &mut form)
        .err()
        .map(|e| e.to_string());

    let fields = if error.is_some() {
        Vec::new()
    } else {
        form.fields
            .into_iter()
            .filter(|field| !field.widget.attrs.is_empty())
            .map(|field| StampedField {
                name: field.name,
                attrs: field.widget.attrs,
            })
            .collect()
    };

    FileStamp {
        file: f.path.clone(),
        model: f.project.model.name.clone(),
        fields,
        media,
        error,
    }
}

/// Build each project's form and print the widget attributes it receives.
pub fn run_stamp(input_path: &Path, format: &str) -> Result<(String, usize)> {
    let files = read_project_files(input_path)?;
    let results: Vec<FileStamp> = files.iter().map(stamp_file).collect();

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
        let width = r.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
        for field in &r.fields {
            for (attr, value) in &field.attrs {
                lines.push(format!("  {:width$}  {attr}={value}", field.name));
            }
        }
        for js in &r.media.js {
            lines.push(format!("  media: {js}"));
        }
    }
    lines.push(summary(error_count, file_count));

    Ok((lines.join("\n"), error_count))
}
