use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

// ---------------------------------------------------------------------------
// Link specification (integrator-supplied)
// ---------------------------------------------------------------------------

/// One `link_styles` record: a style editor field and the content fields it previews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    #[serde(alias = "styles_field")]
    pub style_field: String,
    #[serde(default)]
    pub html_fields: Vec<String>,
}

impl LinkEntry {
    pub fn new<S, I, H>(style_field: S, html_fields: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = H>,
        H: Into<String>,
    {
        Self {
            style_field: style_field.into(),
            html_fields: html_fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered list of link entries, read once at configuration time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkSpec(pub Vec<LinkEntry>);

impl LinkSpec {
    pub fn entries(&self) -> &[LinkEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<LinkEntry>> for LinkSpec {
    fn from(entries: Vec<LinkEntry>) -> Self {
        Self(entries)
    }
}

// ---------------------------------------------------------------------------
// Model metadata
// ---------------------------------------------------------------------------

/// What kind of editor a model field backs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldCapability {
    CodeEditor,
    HtmlEditor,
    Other(String),
}

impl std::fmt::Display for FieldCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldCapability::CodeEditor => f.write_str("code editor"),
            FieldCapability::HtmlEditor => f.write_str("HTML editor"),
            FieldCapability::Other(type_name) => f.write_str(type_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl ModelField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// Field metadata for one model, as reported by the host data-modeling layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<ModelField>,
}

impl ModelMeta {
    pub fn new(name: impl Into<String>, fields: Vec<ModelField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Look up a field by its exact name.
    pub fn get_field(&self, name: &str) -> Option<&ModelField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// ---------------------------------------------------------------------------
// Resolved link map
// ---------------------------------------------------------------------------

/// Style field → ordered target fields, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLinkMap {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl ResolvedLinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target list for `style_field`, created empty if absent.
    pub fn entry(&mut self, style_field: &str) -> &mut Vec<String> {
        let idx = match self.index.get(style_field) {
            Some(&idx) => idx,
            None => {
                self.entries.push((style_field.to_string(), Vec::new()));
                self.index
                    .insert(style_field.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Append targets that are not already present under `style_field`.
    pub fn merge_unique<I>(&mut self, style_field: &str, targets: I)
    where
        I: IntoIterator<Item = String>,
    {
        let list = self.entry(style_field);
        for target in targets {
            if !list.contains(&target) {
                list.push(target);
            }
        }
    }

    /// Append targets as given, keeping duplicates.
    pub fn extend(&mut self, style_field: &str, targets: &[String]) {
        self.entry(style_field).extend(targets.iter().cloned());
    }

    pub fn get(&self, style_field: &str) -> Option<&[String]> {
        self.index
            .get(style_field)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ResolvedLinkMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (style_field, targets) in &self.entries {
            map.serialize_entry(style_field, targets)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Form surface (what the stamper writes to)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(default)]
    pub widget: Widget,
}

/// A constructed form: its fields in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub fields: Vec<FormField>,
}

impl Form {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: names
                .into_iter()
                .map(|name| FormField {
                    name: name.into(),
                    widget: Widget::default(),
                })
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Attribute value on a field's widget, if both exist.
    pub fn widget_attr(&self, field: &str, attr: &str) -> Option<&str> {
        self.field(field)
            .and_then(|f| f.widget.attrs.get(attr))
            .map(String::as_str)
    }
}

/// Static assets a page must load for the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub js: Vec<String>,
    #[serde(default)]
    pub css: Vec<String>,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Editor type names and asset paths; every key is optional in project files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkerSettings {
    pub code_editor_types: Vec<String>,
    pub html_editor_types: Vec<String>,
    pub media_js: String,
}

impl Default for LinkerSettings {
    fn default() -> Self {
        Self {
            code_editor_types: crate::catalogs::CODE_EDITOR_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            html_editor_types: crate::catalogs::HTML_EDITOR_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            media_js: crate::catalogs::PREVIEW_SCRIPT.to_string(),
        }
    }
}

impl LinkerSettings {
    /// Classify a model field type name.
    pub fn capability_of(&self, field_type: &str) -> FieldCapability {
        if self.code_editor_types.iter().any(|t| t == field_type) {
            FieldCapability::CodeEditor
        } else if self.html_editor_types.iter().any(|t| t == field_type) {
            FieldCapability::HtmlEditor
        } else {
            FieldCapability::Other(field_type.to_string())
        }
    }

    /// Type name used in error messages for a required capability.
    pub fn expected_type_name(&self, capability: &FieldCapability) -> String {
        let names = match capability {
            FieldCapability::CodeEditor => &self.code_editor_types,
            FieldCapability::HtmlEditor => &self.html_editor_types,
            FieldCapability::Other(name) => return name.clone(),
        };
        match names.as_slice() {
            [] => capability.to_string(),
            [only] => only.clone(),
            many => many.join(" or "),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_entry_accepts_styles_field_alias() {
        let entry: LinkEntry =
            serde_json::from_str(r#"{"styles_field": "css", "html_fields": ["body"]}"#).unwrap();
        assert_eq!(entry, LinkEntry::new("css", ["body"]));
    }

    #[test]
    fn link_entry_html_fields_default_empty() {
        let entry: LinkEntry = serde_json::from_str(r#"{"style_field": "css"}"#).unwrap();
        assert!(entry.html_fields.is_empty());
    }

    #[test]
    fn resolved_map_keeps_insertion_order() {
        let mut map = ResolvedLinkMap::new();
        map.merge_unique("b", vec!["x".to_string()]);
        map.merge_unique("a", vec!["y".to_string()]);
        map.merge_unique("b", vec!["x".to_string(), "z".to_string()]);

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(map.get("b").unwrap(), ["x", "z"]);
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"b":["x","z"],"a":["y"]}"#);
    }

    #[test]
    fn settings_classify_types() {
        let settings = LinkerSettings::default();
        assert_eq!(settings.capability_of("MonacoField"), FieldCapability::CodeEditor);
        assert_eq!(settings.capability_of("HTMLField"), FieldCapability::HtmlEditor);
        assert_eq!(
            settings.capability_of("TextField"),
            FieldCapability::Other("TextField".into())
        );
        assert_eq!(
            settings.expected_type_name(&FieldCapability::CodeEditor),
            "MonacoField"
        );
    }
}
