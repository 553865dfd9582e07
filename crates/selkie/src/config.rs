//! JSON configuration with dotted-path access.

use crate::error::{Error, Result};
use selkie_layout::BundleOptions;
use selkie_vis::{FlowOptions, FlowPasses};
use serde_json::{Map, Value};

const DEFAULT_MAX_PASSES: usize = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Config(Value);

impl Default for Config {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl Config {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|err| Error::config(format!("config is not valid JSON: {err}")))?;
        if !value.is_object() {
            return Err(Error::config("config root must be a JSON object"));
        }
        Ok(Self(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn get(&self, dotted_path: &str) -> Option<&Value> {
        dotted_path
            .split('.')
            .try_fold(&self.0, |cur, segment| cur.as_object()?.get(segment))
    }

    /// Stores `value` at `dotted_path`, turning the root and any non-object step into an object.
    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        let (parents, leaf): (Vec<&str>, &str) = match dotted_path.rsplit_once('.') {
            Some((parents, leaf)) => (parents.split('.').collect(), leaf),
            None => (Vec::new(), dotted_path),
        };
        let mut table = as_table(&mut self.0);
        for segment in parents {
            table = as_table(table.entry(segment).or_insert(Value::Null));
        }
        table.insert(leaf.to_string(), value);
    }

    /// Objects merge key by key; anything else in `overlay` replaces what is there.
    pub fn deep_merge(&mut self, overlay: &Value) {
        merge_into(&mut self.0, overlay);
    }

    fn typed<'a, T>(
        &'a self,
        key: &str,
        expected: &str,
        read: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        read(value)
            .map(Some)
            .ok_or_else(|| Error::config(format!("`{key}` must be {expected}, got {value}")))
    }
}

fn as_table(value: &mut Value) -> &mut Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => {
            *other = Value::Object(Map::new());
            as_table(other)
        }
    }
}

fn merge_into(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                merge_into(base.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

/// Engine knobs resolved from a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EngineOptions {
    pub flow: FlowOptions,
    pub bundle: BundleOptions,
}

impl EngineOptions {
    /// Reads `flow.*` and `bundle.*`. Missing keys keep their defaults; unknown keys are ignored.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut out = Self::default();

        if let Some(eager) = config.typed("flow.eagerMarking", "a boolean", Value::as_bool)? {
            out.flow.eager_marking = eager;
        }

        let max_passes = config
            .typed("flow.maxPasses", "a positive integer", Value::as_u64)?
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .unwrap_or(DEFAULT_MAX_PASSES);
        if max_passes == 0 {
            return Err(Error::config("`flow.maxPasses` must be at least 1"));
        }
        out.flow.passes = match config.typed("flow.passes", "a string", Value::as_str)? {
            None | Some("single") => FlowPasses::Single,
            Some("untilStable") => FlowPasses::UntilStable { max_passes },
            Some(other) => {
                return Err(Error::config(format!(
                    "`flow.passes` must be \"single\" or \"untilStable\", got {other:?}"
                )));
            }
        };

        for (key, field, positive) in [
            ("bundle.spacing", &mut out.bundle.spacing, true),
            ("bundle.curveTension", &mut out.bundle.curve_tension, false),
            ("bundle.deflate", &mut out.bundle.deflate, false),
        ] {
            let Some(v) = config.typed(key, "a number", Value::as_f64)? else {
                continue;
            };
            if !v.is_finite() {
                return Err(Error::config(format!("`{key}` must be finite")));
            }
            // Lanes are laid out `spacing` apart inside the portal segment.
            if positive && v <= 0.0 {
                return Err(Error::config(format!("`{key}` must be positive, got {v}")));
            }
            *field = v;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dotted_paths_create_intermediate_objects() {
        let mut c = Config::default();
        c.set_value("flow.eagerMarking", json!(false));
        c.set_value("bundle.spacing", json!(0.5));
        c.set_value("top", json!(1));
        assert_eq!(c.get("flow.eagerMarking"), Some(&json!(false)));
        assert_eq!(c.get("bundle.spacing"), Some(&json!(0.5)));
        assert_eq!(c.get("top"), Some(&json!(1)));
        assert_eq!(c.get("flow.passes"), None);
        assert_eq!(c.get("top.nested"), None);
    }

    #[test]
    fn set_value_replaces_scalar_steps() {
        let mut c = Config::from_value(json!({"flow": 3}));
        c.set_value("flow.passes", json!("single"));
        assert_eq!(c.as_value(), &json!({"flow": {"passes": "single"}}));
    }

    #[test]
    fn deep_merge_overrides_leaves_and_keeps_siblings() {
        let mut c = Config::from_value(json!({"flow": {"eagerMarking": true, "maxPasses": 4}}));
        c.deep_merge(&json!({"flow": {"eagerMarking": false}}));
        assert_eq!(
            c.as_value(),
            &json!({"flow": {"eagerMarking": false, "maxPasses": 4}})
        );
    }

    #[test]
    fn set_value_replaces_non_object_roots() {
        let mut c = Config::from_value(json!(3));
        c.set_value("a.b", json!(1));
        assert_eq!(c.as_value(), &json!({"a": {"b": 1}}));
    }
}
