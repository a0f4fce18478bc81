//! Helpers for rendering loosely typed content records.

use chrono::NaiveDate;
use maud::{html, Markup};
use serde_json::Value;

/// A string field of a record.
pub fn text<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

/// A list field of a record, empty when absent or not a list.
pub fn list<'a>(record: &'a Value, key: &str) -> &'a [Value] {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// `2024-03-09` becomes `March 09, 2024`; anything else is returned unchanged.
pub fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|parsed| parsed.format("%B %d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// First `max` characters of `s`.
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// `key_findings` becomes `Key Findings`.
pub fn humanize(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders any JSON value: strings as paragraphs, lists as `ul`, maps as titled blocks.
pub fn value(value: &Value) -> Markup {
    match value {
        Value::Null => html! {},
        Value::Bool(flag) => html! { p { (if *flag { "Yes" } else { "No" }) } },
        Value::Number(number) => html! { p { (number.to_string()) } },
        Value::String(s) => paragraphs(s),
        Value::Array(items) => html! {
            ul.content-list {
                @for item in items {
                    li { (list_item(item)) }
                }
            }
        },
        Value::Object(map) => html! {
            @for (key, nested) in map {
                section.content-block {
                    h3 { (humanize(key)) }
                    (self::value(nested))
                }
            }
        },
    }
}

/// Renders every field of `record` except those in `shown`.
pub fn remaining_fields(record: &Value, shown: &[&str]) -> Markup {
    match record.as_object() {
        Some(map) => html! {
            @for (key, nested) in map.iter().filter(|(key, _)| !shown.contains(&key.as_str())) {
                section.content-block {
                    h2 { (humanize(key)) }
                    (value(nested))
                }
            }
        },
        None => value(record),
    }
}

fn paragraphs(s: &str) -> Markup {
    html! {
        @for paragraph in s.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            p { (paragraph) }
        }
    }
}

/// List entries are usually plain strings or `{title, description}` cards.
fn list_item(item: &Value) -> Markup {
    match item {
        Value::String(s) => html! { (s) },
        Value::Object(_) if text(item, "title").is_some() => html! {
            strong { (text(item, "title").unwrap_or_default()) }
            @if let Some(description) = text(item, "description") {
                " " span.description { (description) }
            }
        },
        other => value(other),
    }
}
