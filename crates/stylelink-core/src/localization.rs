//! Per-language field metadata supplied by an optional translation layer.
//!
//! A translatable base field `body` is stored as one column per language
//! (`body_en`, `body_fr`, ...). The catalog answers two questions: which names
//! are translatable bases, and which base/language a localized name belongs to.

use serde::{Deserialize, Serialize};

use crate::types::ModelMeta;

/// Build the localized column name for `base` in `lang`.
///
/// `id` is spelled `ind` so `<base>_id` never reads as a foreign key column.
pub fn localized_fieldname(base: &str, lang: &str) -> String {
    let lang = if lang == "id" { "ind" } else { lang };
    format!("{base}_{}", lang.replace('-', "_"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCatalog {
    /// Supported language codes, in display order.
    pub languages: Vec<String>,
    /// Falls back to the first entry of `languages` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    /// Translatable base field names, in declaration order.
    #[serde(default)]
    pub translatable: Vec<String>,
}

impl FieldCatalog {
    pub fn new<L, T, S1, S2>(languages: L, default_language: Option<&str>, translatable: T) -> Self
    where
        L: IntoIterator<Item = S1>,
        T: IntoIterator<Item = S2>,
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            default_language: default_language.map(String::from),
            translatable: translatable.into_iter().map(Into::into).collect(),
        }
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language
            .as_deref()
            .or_else(|| self.languages.first().map(String::as_str))
    }

    /// The configured default language when it is not one of `languages`.
    pub fn unsupported_default_language(&self) -> Option<&str> {
        self.default_language
            .as_deref()
            .filter(|lang| !self.languages.iter().any(|l| l == lang))
    }

    /// True for bare translatable base names only, not for their variants.
    pub fn is_translatable(&self, name: &str) -> bool {
        self.translatable.iter().any(|t| t == name)
    }

    /// All localized variants of `base`, in language order.
    pub fn variants(&self, base: &str) -> Vec<String> {
        self.languages
            .iter()
            .map(|lang| localized_fieldname(base, lang))
            .collect()
    }

    /// Split a localized name into `(base, language)`.
    ///
    /// Bases are tried in declaration order, so the first matching base wins
    /// when two combinations spell the same name.
    pub fn detect(&self, name: &str) -> Option<(&str, &str)> {
        for base in &self.translatable {
            if !name.starts_with(base.as_str()) {
                continue;
            }
            for lang in &self.languages {
                if localized_fieldname(base, lang) == name {
                    return Some((base.as_str(), lang.as_str()));
                }
            }
        }
        None
    }

    /// Base name of `name`, or `name` itself when it is not a localized variant.
    pub fn base_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.detect(name).map_or(name, |(base, _)| base)
    }

    /// Field names a translation-aware admin form exposes for `model`:
    /// translatable bases are replaced by their variants.
    pub fn form_field_names(&self, model: &ModelMeta) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for field in &model.fields {
            let expanded = if self.is_translatable(&field.name) {
                self.variants(&field.name)
            } else {
                vec![field.name.clone()]
            };
            for name in expanded {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModelField;

    fn catalog() -> FieldCatalog {
        FieldCatalog::new(["en", "fr", "pt-br"], None, ["styles", "body"])
    }

    #[test]
    fn localized_name_normalizes_language() {
        assert_eq!(localized_fieldname("body", "en"), "body_en");
        assert_eq!(localized_fieldname("body", "pt-br"), "body_pt_br");
        assert_eq!(localized_fieldname("body", "id"), "body_ind");
    }

    #[test]
    fn detect_localized_names() {
        let c = catalog();
        assert_eq!(c.detect("styles_fr"), Some(("styles", "fr")));
        assert_eq!(c.detect("body_pt_br"), Some(("body", "pt-br")));
        assert_eq!(c.detect("body"), None);
        assert_eq!(c.detect("body_de"), None);
        assert_eq!(c.detect("note_en"), None);
    }

    #[test]
    fn base_name_strips_known_suffix_only() {
        let c = catalog();
        assert_eq!(c.base_name("styles_en"), "styles");
        assert_eq!(c.base_name("styles"), "styles");
        assert_eq!(c.base_name("note_en"), "note_en");
    }

    #[test]
    fn default_language_falls_back_to_first() {
        assert_eq!(catalog().default_language(), Some("en"));
        let c = FieldCatalog::new(["en", "fr"], Some("fr"), ["body"]);
        assert_eq!(c.default_language(), Some("fr"));
        let empty = FieldCatalog::new(Vec::<String>::new(), None, ["body"]);
        assert_eq!(empty.default_language(), None);
    }

    #[test]
    fn unsupported_default_language_detected() {
        let c = FieldCatalog::new(["en", "fr"], Some("de"), ["body"]);
        assert_eq!(c.unsupported_default_language(), Some("de"));
        assert_eq!(catalog().unsupported_default_language(), None);
        let c = FieldCatalog::new(["en", "fr"], Some("fr"), ["body"]);
        assert_eq!(c.unsupported_default_language(), None);
    }

    #[test]
    fn form_field_names_expand_translatable() {
        let model = ModelMeta::new(
            "Article",
            vec![
                ModelField::new("title", "CharField"),
                ModelField::new("styles", "MonacoField"),
                ModelField::new("body", "HTMLField"),
            ],
        );
        let c = FieldCatalog::new(["en", "fr"], None, ["styles", "body"]);
        assert_eq!(
            c.form_field_names(&model),
            vec!["title", "styles_en", "styles_fr", "body_en", "body_fr"]
        );
    }
}
