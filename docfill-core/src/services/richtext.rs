use serde_json::{Map, Value};

use crate::model::context::{Context, ContextValue};
use crate::model::field::{classify, FieldKind};
use crate::parsers::bold;

/// Replaces the strings of rich-text fields with styled runs.
///
/// Only the top level is inspected, plus the items of list fields. A field
/// whose value does not have the shape its kind expects is copied as-is.
pub fn rewrite(context: &Map<String, Value>) -> Context {
    let mut out = Context::new();

    for (key, value) in context {
        let rewritten = match (classify(key), value) {
            (FieldKind::RichTextList, Value::Array(items)) => {
                ContextValue::List(items.iter().map(rewrite_item).collect())
            }
            (FieldKind::RichTextScalar, Value::String(s)) => ContextValue::Styled(bold::parse(s)),
            _ => ContextValue::Plain(value.clone()),
        };

        if !matches!(rewritten, ContextValue::Plain(_)) {
            tracing::debug!(field = %key, "rewrote rich-text field");
        }

        out.insert(key.clone(), rewritten);
    }

    out
}

fn rewrite_item(item: &Value) -> ContextValue {
    match item {
        Value::String(s) => ContextValue::Styled(bold::parse(s)),
        other => ContextValue::Plain(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    fn run_pairs(value: &ContextValue) -> Vec<(String, bool)> {
        value
            .as_styled()
            .expect("styled value")
            .runs()
            .iter()
            .map(|r| (r.text.clone(), r.bold))
            .collect()
    }

    #[test]
    fn summary_list_items_become_styled_text() {
        let input = object(json!({
            "SUMMARY": ["Built **scalable** systems", "Led team"]
        }));
        let out = rewrite(&input);

        let items = out["SUMMARY"].as_list().expect("list");
        assert_eq!(items.len(), 2);
        assert_eq!(
            run_pairs(&items[0]),
            vec![
                ("Built ".to_string(), false),
                ("scalable".to_string(), true),
                (" systems".to_string(), false),
            ]
        );
        assert_eq!(run_pairs(&items[1]), vec![("Led team".to_string(), false)]);
    }

    #[test]
    fn unclassified_fields_are_untouched() {
        let input = object(json!({ "OTHER_FIELD": "**bold**", "N": 3, "O": {"a": [1]} }));
        let out = rewrite(&input);

        assert_eq!(out["OTHER_FIELD"], ContextValue::Plain(json!("**bold**")));
        assert_eq!(out["N"], ContextValue::Plain(json!(3)));
        assert_eq!(out["O"], ContextValue::Plain(json!({"a": [1]})));
    }

    #[test]
    fn scalar_field_holding_null_passes_through() {
        let input = object(json!({ "ENGAGEMENT_SUMMARY_SS": null }));
        let out = rewrite(&input);
        assert_eq!(out["ENGAGEMENT_SUMMARY_SS"], ContextValue::Plain(Value::Null));
    }

    #[test]
    fn scalar_field_string_is_translated() {
        let input = object(json!({ "ENGAGEMENT_SUMMARY_CH": "Owned **delivery**" }));
        let out = rewrite(&input);
        assert_eq!(
            run_pairs(&out["ENGAGEMENT_SUMMARY_CH"]),
            vec![("Owned ".to_string(), false), ("delivery".to_string(), true)]
        );
    }

    #[test]
    fn mismatched_shapes_pass_through() {
        let input = object(json!({
            "ENGAGEMENT_SUMMARY_SM": ["**x**"],
            "RESPONSIBILITIES_CH": "**x**",
        }));
        let out = rewrite(&input);
        assert_eq!(out["ENGAGEMENT_SUMMARY_SM"], ContextValue::Plain(json!(["**x**"])));
        assert_eq!(out["RESPONSIBILITIES_CH"], ContextValue::Plain(json!("**x**")));
    }

    #[test]
    fn list_keeps_length_and_null_positions() {
        let input = object(json!({
            "RESPONSIBILITIES_SS": [null, "**a**", 7, {"k": "v"}, ["**n**"], null]
        }));
        let out = rewrite(&input);
        let items = out["RESPONSIBILITIES_SS"].as_list().expect("list");

        assert_eq!(items.len(), 6);
        assert_eq!(items[0], ContextValue::Plain(Value::Null));
        assert!(items[1].as_styled().is_some());
        assert_eq!(items[2], ContextValue::Plain(json!(7)));
        assert_eq!(items[3], ContextValue::Plain(json!({"k": "v"})));
        // nested lists are not descended into
        assert_eq!(items[4], ContextValue::Plain(json!(["**n**"])));
        assert_eq!(items[5], ContextValue::Plain(Value::Null));
    }

    #[test]
    fn key_set_is_preserved() {
        let input = object(json!({
            "SUMMARY": [],
            "ENGAGEMENT_SUMMARY_SS": "",
            "NAME": "Ada",
            "EMPTY": null,
        }));
        let out = rewrite(&input);

        let in_keys: BTreeSet<&String> = input.keys().collect();
        let out_keys: BTreeSet<&String> = out.keys().collect();
        assert_eq!(in_keys, out_keys);
        assert_eq!(out["SUMMARY"], ContextValue::List(Vec::new()));
        assert!(out["ENGAGEMENT_SUMMARY_SS"].as_styled().is_some_and(|t| t.is_empty()));
    }

    #[test]
    fn styled_values_serialize_as_runs() {
        let input = object(json!({ "SUMMARY": ["a **b**", null] }));
        let out = rewrite(&input);
        let json = serde_json::to_value(&out).expect("serialize");

        assert_eq!(
            json,
            json!({
                "SUMMARY": [
                    {"runs": [
                        {"text": "a ", "bold": false, "font": "Calibri", "size": 22},
                        {"text": "b", "bold": true, "font": "Calibri", "size": 22}
                    ]},
                    null
                ]
            })
        );
    }
}
