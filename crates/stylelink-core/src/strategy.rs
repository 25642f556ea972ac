//! Link expansion strategies.
//!
//! Whether a translation layer is present is decided once, when the resolver
//! is built: [`PlainLinks`] copies the configuration verbatim, [`LocalizedLinks`]
//! expands it across languages.

use tracing::debug;

use crate::localization::{localized_fieldname, FieldCatalog};
use crate::types::{LinkEntry, LinkSpec, ResolvedLinkMap};

pub trait LinkStrategy: Send + Sync {
    /// Base model field behind a (possibly localized) form field name.
    fn base_name<'a>(&'a self, field: &'a str) -> &'a str;

    /// Expand a link specification into concrete form field names.
    fn resolve(&self, spec: &LinkSpec) -> ResolvedLinkMap;

    fn catalog(&self) -> Option<&FieldCatalog> {
        None
    }
}

// ---------------------------------------------------------------------------
// No translation layer
// ---------------------------------------------------------------------------

/// Every field is its own sole variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLinks;

impl LinkStrategy for PlainLinks {
    fn base_name<'a>(&'a self, field: &'a str) -> &'a str {
        field
    }

    fn resolve(&self, spec: &LinkSpec) -> ResolvedLinkMap {
        let mut map = ResolvedLinkMap::new();
        for entry in spec.entries() {
            // Entries sharing a style field concatenate as-is.
            map.extend(&entry.style_field, &entry.html_fields);
        }
        map
    }
}

// ---------------------------------------------------------------------------
// Translation layer present
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LocalizedLinks {
    catalog: FieldCatalog,
}

impl LocalizedLinks {
    pub fn new(catalog: FieldCatalog) -> Self {
        Self { catalog }
    }

    /// Target name for `html` when linked to a style field in `lang`.
    /// Untranslatable fields are kept only if `keep_plain` is set; variants
    /// pinned to another language are never linked.
    fn target_in(&self, html: &str, lang: &str, keep_plain: bool) -> Option<String> {
        let html_lang = self.catalog.detect(html).map(|(_, l)| l);
        if html_lang == Some(lang) {
            return Some(html.to_string());
        }
        if self.catalog.is_translatable(html) {
            return Some(localized_fieldname(html, lang));
        }
        if html_lang.is_none() && keep_plain {
            return Some(html.to_string());
        }
        None
    }

    fn link_localized(&self, entry: &LinkEntry, lang: &str, map: &mut ResolvedLinkMap) {
        let targets: Vec<String> = entry
            .html_fields
            .iter()
            .filter_map(|html| self.target_in(html, lang, true))
            .collect();
        debug!(style = %entry.style_field, ?targets, "linked localized style field");
        map.merge_unique(&entry.style_field, targets);
    }

    fn link_per_language(&self, entry: &LinkEntry, map: &mut ResolvedLinkMap) {
        let default_lang = self.catalog.default_language();
        for lang in &self.catalog.languages {
            // Untranslatable targets have a single column; attach it to one expansion only.
            let keep_plain = default_lang == Some(lang.as_str());
            let targets: Vec<String> = entry
                .html_fields
                .iter()
                .filter_map(|html| self.target_in(html, lang, keep_plain))
                .collect();
            if targets.is_empty() {
                continue;
            }
            let style = localized_fieldname(&entry.style_field, lang);
            debug!(%style, ?targets, "expanded translatable style field");
            map.merge_unique(&style, targets);
        }
    }

    fn link_to_all_languages(&self, entry: &LinkEntry, map: &mut ResolvedLinkMap) {
        let mut targets: Vec<String> = Vec::new();
        for html in &entry.html_fields {
            if self.catalog.is_translatable(html) {
                targets.extend(self.catalog.variants(html));
            } else {
                targets.push(html.clone());
            }
        }
        debug!(style = %entry.style_field, ?targets, "linked untranslatable style field");
        map.merge_unique(&entry.style_field, targets);
    }
}

impl LinkStrategy for LocalizedLinks {
    fn base_name<'a>(&'a self, field: &'a str) -> &'a str {
        self.catalog.base_name(field)
    }

    fn resolve(&self, spec: &LinkSpec) -> ResolvedLinkMap {
        let mut map = ResolvedLinkMap::new();
        for entry in spec.entries() {
            if let Some((_, lang)) = self.catalog.detect(&entry.style_field) {
                self.link_localized(entry, lang, &mut map);
            } else if self.catalog.is_translatable(&entry.style_field) {
                self.link_per_language(entry, &mut map);
            } else {
                self.link_to_all_languages(entry, &mut map);
            }
        }
        map
    }

    fn catalog(&self) -> Option<&FieldCatalog> {
        Some(&self.catalog)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
