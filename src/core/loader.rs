use std::{
    borrow::Cow,
    collections::{HashMap, HashSet},
    convert::{TryFrom, TryInto},
};

pub struct InputParams {
    params: HashMap<String, InputParamsValue>,
    name: Cow<'static, str>,
    visited_names: HashSet<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputParamsValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Array(Vec<InputParamsValue>),
}

macro_rules! params_get {
    ( $( ( $name:ident, $type:ty, $variant:ident, $hint:expr ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[allow(dead_code)]
                pub fn [<get_ $name>](&mut self, key: &str) -> anyhow::Result<$type> {
                    if let Some(value) = self.params.get(key) {
                        if let InputParamsValue::$variant(value) = value {
                            self.visited_names.insert(key.to_owned());
                            return Ok(value.clone());
                        }
                        anyhow::bail!(format!("{} - '{}' should be {}", self.name, key, $hint));
                    }
                    anyhow::bail!(format!("{} - there is no '{}' field", self.name, key));
                }

                #[allow(dead_code)]
                pub fn [<get_ $name _or>](&mut self, key: &str, fallback: $type) -> $type {
                    if let Ok(value) = self.[<get_ $name>](key) {
                        value
                    } else {
                        fallback
                    }
                }

                /// Reads the first of `keys` that is present, for fields renamed across
                /// metadata revisions.
                #[allow(dead_code)]
                pub fn [<get_ $name _any>](&mut self, keys: &[&str]) -> anyhow::Result<$type> {
                    match self.first_present(keys) {
                        Some(key) => self.[<get_ $name>](key),
                        None => anyhow::bail!(format!(
                            "{} - there is none of the fields {:?}",
                            self.name, keys
                        )),
                    }
                }
            }
        )+
    };
}

impl InputParams {
    pub fn set_name(&mut self, name: Cow<'static, str>) {
        self.name = name;
    }

    #[allow(dead_code)]
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn first_present<'a>(&self, keys: &[&'a str]) -> Option<&'a str> {
        keys.iter().copied().find(|key| self.contains_key(key))
    }

    params_get! {
        (int, i64, Int, "integer"),
        (float, f64, Float, "float"),
        (bool, bool, Bool, "boolean"),
        (str, String, String, "string"),
    }

    /// A single-character string such as `"["`.
    pub fn get_glyph(&mut self, key: &str) -> anyhow::Result<char> {
        let value = self.get_str(key)?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(glyph), None) => Ok(glyph),
            _ => anyhow::bail!(format!(
                "{} - '{}' should be a single character, got '{}'",
                self.name, key, value
            )),
        }
    }

    /// An integer, or a string holding one with digit groups separated by spaces
    /// (`"-1 000 000"`).
    pub fn get_loose_int(&mut self, key: &str) -> anyhow::Result<i64> {
        let is_text = match self.params.get(key) {
            Some(InputParamsValue::Int(_)) => false,
            Some(InputParamsValue::String(_)) => true,
            Some(_) => anyhow::bail!(format!("{} - '{}' should be integer", self.name, key)),
            None => anyhow::bail!(format!("{} - there is no '{}' field", self.name, key)),
        };
        if is_text {
            self.get_grouped_int(key)
        } else {
            self.get_int(key)
        }
    }

    /// A string holding an integer, digit groups separated by spaces.
    pub fn get_grouped_int(&mut self, key: &str) -> anyhow::Result<i64> {
        let value = self.get_str(key)?;
        let compact: String = value.chars().filter(|c| *c != ' ').collect();
        compact.parse::<i64>().map_err(|_| {
            anyhow::anyhow!(format!(
                "{} - '{}' should be an integer, got '{}'",
                self.name, key, value
            ))
        })
    }

    pub fn check_unused_keys(&self) {
        for k in self.params.keys() {
            if !k.starts_with('#') && !self.visited_names.contains(k) {
                log::warn!("{} - unused key '{}'", self.name, k);
            }
        }
    }
}

impl TryFrom<&serde_json::Value> for InputParamsValue {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => {
                anyhow::bail!("can't convert to InputParamsValue from null json")
            }
            serde_json::Value::Bool(v) => Ok(Self::Bool(*v)),
            serde_json::Value::Number(v) => {
                if let Some(v) = v.as_i64() {
                    Ok(Self::Int(v))
                } else if let Some(v) = v.as_f64() {
                    Ok(Self::Float(v))
                } else {
                    anyhow::bail!("can't convert number {} to InputParamsValue", v)
                }
            }
            serde_json::Value::String(v) => Ok(Self::String(v.clone())),
            serde_json::Value::Array(arr) => {
                let mut values = Vec::<InputParamsValue>::with_capacity(arr.len());
                for v in arr {
                    match v.try_into() {
                        Ok(v) => values.push(v),
                        Err(e) => anyhow::bail!(format!("can't convert array element: {}", e)),
                    }
                }
                Ok(Self::Array(values))
            }
            serde_json::Value::Object(_) => {
                anyhow::bail!("can't convert to InputParamsValue from object json")
            }
        }
    }
}

impl TryFrom<&serde_json::Map<String, serde_json::Value>> for InputParams {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Map<String, serde_json::Value>) -> Result<Self, Self::Error> {
        let mut params = HashMap::<String, InputParamsValue>::with_capacity(value.len());
        for (k, v) in value {
            match v.try_into() {
                Ok(v) => {
                    params.insert(k.clone(), v);
                }
                Err(e) => anyhow::bail!(format!("can't convert member '{}': {}", k, e)),
            }
        }
        Ok(Self {
            params,
            name: Cow::Borrowed(""),
            visited_names: HashSet::new(),
        })
    }
}

impl TryFrom<&serde_json::Value> for InputParams {
    type Error = anyhow::Error;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        if let serde_json::Value::Object(value) = value {
            value.try_into()
        } else {
            anyhow::bail!("can't convert to InputParams from non-object json value");
        }
    }
}
