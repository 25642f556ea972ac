use tracing::trace;

use crate::catalogs::{ATTR_SOURCE_FOR, ATTR_TARGET_OF};
use crate::types::{Form, ResolvedLinkMap};

/// Outcome of one stamping pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StampReport {
    /// Style fields that received a `data-style-source-for` attribute.
    pub sources: usize,
    /// Content fields that received a `data-style-target-of` attribute.
    pub targets: usize,
    /// Map entries skipped because the style field or all targets are absent.
    pub skipped: usize,
}

/// Write link attributes onto the widgets of `form`.
///
/// Forms may expose a subset of the model's fields, so links that point at
/// fields the form lacks are dropped rather than reported.
pub fn stamp(form: &mut Form, links: &ResolvedLinkMap) -> StampReport {
    let mut report = StampReport::default();

    for (style_field, html_fields) in links.iter() {
        if !form.contains(style_field) {
            trace!(style_field, "style field not on form, skipping");
            report.skipped += 1;
            continue;
        }

        let present: Vec<&str> = html_fields
            .iter()
            .map(String::as_str)
            .filter(|name| form.contains(name))
            .collect();
        if present.is_empty() {
            trace!(style_field, "no linked fields on form, skipping");
            report.skipped += 1;
            continue;
        }

        if let Some(field) = form.field_mut(style_field) {
            field
                .widget
                .attrs
                .insert(ATTR_SOURCE_FOR.to_string(), encode_names(&present));
            report.sources += 1;
        }

        for html_field in present {
            if let Some(field) = form.field_mut(html_field) {
                field
                    .widget
                    .attrs
                    .insert(ATTR_TARGET_OF.to_string(), style_field.to_string());
                report.targets += 1;
            }
        }
    }

    report
}

/// JSON array of field names, as read by the preview script.
fn encode_names(names: &[&str]) -> String {
    serde_json::Value::from(names.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(entries: &[(&str, &[&str])]) -> ResolvedLinkMap {
        let mut map = ResolvedLinkMap::new();
        for (style, targets) in entries {
            map.merge_unique(style, targets.iter().map(|t| t.to_string()));
        }
        map
    }

    #[test]
    fn stamps_source_and_target() {
        let mut form = Form::from_names(["styles_en", "body_en", "intro_en"]);
        let report = stamp(&mut form, &links(&[("styles_en", &["body_en", "intro_en"])]));

        assert_eq!(
            form.widget_attr("styles_en", ATTR_SOURCE_FOR),
            Some(r#"["body_en","intro_en"]"#)
        );
        assert_eq!(form.widget_attr("body_en", ATTR_TARGET_OF), Some("styles_en"));
        assert_eq!(form.widget_attr("intro_en", ATTR_TARGET_OF), Some("styles_en"));
        assert_eq!(
            report,
            StampReport {
                sources: 1,
                targets: 2,
                skipped: 0
            }
        );
    }

    #[test]
    fn encodes_names_as_json_array() {
        assert_eq!(encode_names(&["a", "b\"c"]), r#"["a","b\"c"]"#);
        assert_eq!(encode_names(&[]), "[]");
        let parsed: Vec<String> = serde_json::from_str(&encode_names(&["x_en", "y"])).unwrap();
        assert_eq!(parsed, vec!["x_en", "y"]);
    }

    #[test]
    fn filters_targets_missing_from_form() {
        let mut form = Form::from_names(["styles_en", "body_en"]);
        stamp(&mut form, &links(&[("styles_en", &["body_en", "body_fr"])]));
        assert_eq!(
            form.widget_attr("styles_en", ATTR_SOURCE_FOR),
            Some(r#"["body_en"]"#)
        );
    }

    #[test]
    fn skips_missing_style_field() {
        let mut form = Form::from_names(["body_fr"]);
        let report = stamp(&mut form, &links(&[("styles_fr", &["body_fr"])]));
        assert_eq!(report.skipped, 1);
        assert!(form.field("body_fr").unwrap().widget.attrs.is_empty());
    }

    #[test]
    fn skips_entries_without_present_targets() {
        let mut form = Form::from_names(["css"]);
        let report = stamp(&mut form, &links(&[("css", &["content"]), ("other", &[])]));
        assert_eq!(report.skipped, 2);
        assert!(form.field("css").unwrap().widget.attrs.is_empty());
    }

    #[test]
    fn later_style_field_overwrites_back_reference() {
        let mut form = Form::from_names(["a", "b", "body"]);
        stamp(&mut form, &links(&[("a", &["body"]), ("b", &["body"])]));
        assert_eq!(form.widget_attr("body", ATTR_TARGET_OF), Some("b"));
    }
}
