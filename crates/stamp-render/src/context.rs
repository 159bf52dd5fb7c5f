//! Binding map data into a template context.
//!
//! Each [`stamp_map::Value`] is matched once here: scalars become template
//! strings and lists become sequences, so templates can write
//! `{{ name }}` and `{% for tag in tags %}` alike.

use std::collections::BTreeMap;

use minijinja::Value;
use stamp_map::DataMapping;

/// Converts a map value into a template value.
pub fn template_value(value: &stamp_map::Value) -> Value {
    match value {
        stamp_map::Value::Scalar(s) => Value::from(s.as_str()),
        stamp_map::Value::List(items) => Value::from(items.clone()),
    }
}

/// Builds the top-level template context from a mapping.
pub fn bind(data: &DataMapping) -> BTreeMap<String, Value> {
    data.iter()
        .map(|(key, value)| (key.clone(), template_value(value)))
        .collect()
}
