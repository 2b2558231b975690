//! Lossless reading of engine documents into the typed option model.
//!
//! The engine accepts shapes the typed model does not describe, such as dash
//! arrays, image symbols or a fractional `smooth`. A known key whose value
//! does not fit its typed field is kept verbatim in the owning struct's
//! `extra` map instead of failing the whole document.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Option structs carrying a flattened map of fields the typed model skips.
pub trait ExtraFields: Serialize + DeserializeOwned {
    fn extra(&self) -> &Map<String, Value>;

    fn extra_mut(&mut self) -> &mut Map<String, Value>;

    /// Drops untyped entries shadowed by a typed field that is now set.
    fn drop_shadowed_extra(&mut self) {
        if self.extra().is_empty() {
            return;
        }
        let extra = std::mem::take(self.extra_mut());
        let typed = serde_json::to_value(&*self);
        *self.extra_mut() = extra;
        if let Ok(Value::Object(typed)) = typed {
            self.extra_mut().retain(|key, _| !typed.contains_key(key));
        }
    }
}

/// Identity used to pair component entries across documents.
pub trait ComponentId {
    fn component_id(&self) -> Option<&str>;
}

macro_rules! impl_extra_fields {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ExtraFields for $ty {
                fn extra(&self) -> &Map<String, Value> {
                    &self.extra
                }

                fn extra_mut(&mut self) -> &mut Map<String, Value> {
                    &mut self.extra
                }
            }
        )+
    };
}

impl_extra_fields!(
    super::ChartOption,
    super::XAxisOption,
    super::YAxisOption,
    super::SeriesOption,
    super::LineStyle,
    super::ItemStyle,
    super::Encode,
    super::DatasetOption,
    super::LegendOption,
    super::GridOption,
    super::TooltipOption,
    super::ToolboxFeature,
    super::ToolboxOption,
    super::DataZoomOption,
);

/// Reads `object` into `T`; keys whose values do not fit the typed field
/// land in `extra` unchanged.
///
/// Every typed field is optional, so each key is checked on its own.
pub(crate) fn from_object<T: ExtraFields>(object: Map<String, Value>) -> serde_json::Result<T> {
    let whole = Value::Object(object);
    if let Ok(typed) = T::deserialize(&whole) {
        return Ok(typed);
    }
    let Value::Object(object) = whole else {
        return T::deserialize(whole);
    };

    let mut accepted = Map::new();
    let mut rejected = Map::new();
    for (key, value) in object {
        let single = Value::Object(Map::from_iter([(key.clone(), value.clone())]));
        if T::deserialize(&single).is_ok() {
            accepted.insert(key, value);
        } else {
            rejected.insert(key, value);
        }
    }

    let mut typed = T::deserialize(Value::Object(accepted))?;
    typed.extra_mut().extend(rejected);
    Ok(typed)
}

fn object_of<T, E>(value: Value) -> Result<T, E>
where
    T: ExtraFields,
    E: serde::de::Error,
{
    match value {
        Value::Object(object) => from_object(object).map_err(E::custom),
        other => Err(E::custom(format!("expected an object, found `{other}`"))),
    }
}

/// Component list: a single object or an array of objects, `null` as empty.
pub(crate) fn components<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ExtraFields,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.into_iter().map(object_of::<T, D::Error>).collect(),
        item => Ok(vec![object_of(item)?]),
    }
}

/// Nested style object; anything but an object stays raw in the parent.
pub(crate) fn nested<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: ExtraFields,
{
    object_of(Value::deserialize(deserializer)?).map(Some)
}

pub(crate) fn object_map<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: ExtraFields,
{
    Map::<String, Value>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, value)| object_of(value).map(|typed| (key, typed)))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::option::{LineStyle, SeriesOption};

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(object) => object,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn mismatched_known_keys_stay_raw() {
        let series: SeriesOption = from_object(object(json!({
            "id": "a",
            "smooth": 0.4,
            "symbol": "image://x.png",
            "lineStyle": { "color": "#123456", "type": [5, 10] }
        })))
        .expect("lenient series");

        assert_eq!(series.id.as_deref(), Some("a"));
        assert_eq!(series.smooth, None);
        assert_eq!(series.extra["smooth"], 0.4);
        assert_eq!(series.extra["symbol"], "image://x.png");

        let style = series.line_style.as_ref().expect("line style");
        assert_eq!(style.color.as_deref(), Some("#123456"));
        assert_eq!(style.extra["type"], json!([5, 10]));
    }

    #[test]
    fn typed_write_drops_shadowed_raw_value() {
        let mut style: LineStyle =
            from_object(object(json!({ "type": [5, 10], "cap": "round" }))).expect("style");
        style.line_type = Some(crate::option::LineType::Dotted);
        style.drop_shadowed_extra();

        assert!(!style.extra.contains_key("type"));
        assert_eq!(style.extra["cap"], "round");
    }
}
