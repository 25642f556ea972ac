use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

use stylelink_core::Project;

/// Patterns recognised when scanning a directory.
const PROJECT_PATTERNS: &[&str] = &["**/*.links.yaml", "**/*.links.yml", "**/*.links.json"];

/// A parsed project file with the path it was read from.
pub struct ProjectFile {
    pub path: String,
    pub project: Project,
}

/// Read project files from a path (file or directory).
pub fn read_project_files(input_path: &Path) -> Result<Vec<ProjectFile>> {
    if !input_path.exists() {
        bail!("Path does not exist: {}", input_path.display());
    }

    if input_path.is_file() {
        return Ok(vec![read_project_file(input_path)?]);
    }

    if input_path.is_dir() {
        let files = scan_directory(input_path)?
            .iter()
            .map(|path| read_project_file(path))
            .collect::<Result<Vec<_>>>()?;
        if files.is_empty() {
            bail!(
                "No project files (*.links.yaml, *.links.yml, *.links.json) found at: {}",
                input_path.display()
            );
        }
        return Ok(files);
    }

    bail!(
        "Path is neither a file nor a directory: {}",
        input_path.display()
    )
}

fn read_project_file(path: &Path) -> Result<ProjectFile> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let project = if path.extension().is_some_and(|e| e == "json") {
        Project::from_json_str(&content)
            .with_context(|| format!("Invalid JSON project file {}", path.display()))?
    } else {
        Project::from_yaml_str(&content)
            .with_context(|| format!("Invalid YAML project file {}", path.display()))?
    };

    debug!(path = %path.display(), model = %project.model.name, "loaded project file");
    Ok(ProjectFile {
        path: path.to_string_lossy().to_string(),
        project,
    })
}

fn scan_directory(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for pattern in PROJECT_PATTERNS {
        let full_pattern = dir_path.join(pattern);
        let pattern_str = full_pattern.to_string_lossy().replace('\\', "/");
        let entries = glob::glob(&pattern_str)
            .with_context(|| format!("Invalid glob pattern '{pattern}'"))?;

        for entry in entries {
            let path = entry.context("Glob error")?;
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths.sort();
    Ok(paths)
}
