//! JSON API for embedding hosts.
//!
//! Every function takes a project document as a JSON string and returns a JSON
//! envelope `{ "success": bool, "data"?: ..., "error"?: "..." }`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::pipeline::{link_form, link_media};
use crate::project::Project;
use crate::types::*;

// ---------------------------------------------------------------------------
// Result types (serialized to JSON output)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidationOutput {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StampOutput {
    /// Field name → widget attributes, for fields that were stamped.
    pub fields: BTreeMap<String, BTreeMap<String, String>>,
    pub media: Media,
}

fn success<T: Serialize>(data: T) -> String {
    let result = FfiResult {
        success: true,
        data: Some(data),
        error: None,
    };
    serde_json::to_string(&result)
        .unwrap_or_else(|e| failure(format!("JSON serialization error: {e}")))
}

fn failure(error: String) -> String {
    let result = FfiResult::<()> {
        success: false,
        data: None,
        error: Some(error),
    };
    // A unit payload and a string always serialize.
    serde_json::to_string(&result).unwrap_or_default()
}

fn read_project(project_json: &str) -> Result<Project, String> {
    Project::from_json_str(project_json).map_err(|e| format!("Invalid input JSON: {e}"))
}

// ---------------------------------------------------------------------------
// Public FFI functions
// ---------------------------------------------------------------------------

/// Validate the project's `link_styles` and return the resolved link map.
pub fn resolve_to_json(project_json: &str) -> String {
    let project = match read_project(project_json) {
        Ok(p) => p,
        Err(e) => return failure(e),
    };
    let resolver = project.resolver();
    if let Err(e) = resolver.validate(&project.link_styles, &project.model) {
        return failure(e.to_string());
    }
    success(resolver.resolve(&project.link_styles))
}

/// Report whether the project's `link_styles` matches its model.
pub fn validate_to_json(project_json: &str) -> String {
    let project = match read_project(project_json) {
        Ok(p) => p,
        Err(e) => return failure(e),
    };
    let output = match project
        .resolver()
        .validate(&project.link_styles, &project.model)
    {
        Ok(()) => ValidationOutput {
            valid: true,
            error: None,
        },
        Err(e) => ValidationOutput {
            valid: false,
            error: Some(e.to_string()),
        },
    };
    success(output)
}

/// Run the full form stage and return the widget attributes it produced.
pub fn stamp_to_json(project_json: &str) -> String {
    let project = match read_project(project_json) {
        Ok(p) => p,
        Err(e) => return failure(e),
    };
    let resolver = project.resolver();
    let mut form = project.build_form(&resolver);
    if let Err(e) = link_form(&resolver, &project.link_styles, &project.model, &mut form) {
        return failure(e.to_string());
    }

    let mut media = Media::default();
    link_media(&mut media, resolver.settings());

    let fields = form
        .fields
        .into_iter()
        .filter(|f| !f.widget.attrs.is_empty())
        .map(|f| (f.name, f.widget.attrs))
        .collect();
    success(StampOutput { fields, media })
}
