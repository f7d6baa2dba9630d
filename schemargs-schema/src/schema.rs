//! Validated schema types.

use indexmap::IndexMap;
use schemargs_core::{ArgType, Value};
use serde::{Deserialize, Serialize};

use crate::{DefaultValue, EntryDescription, SchemaDescription};

/// A validated argument specification.
///
/// The default value always has the declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub arg_type: ArgType,
    pub default_value: Value,
    pub required: bool,
}

impl ArgumentSpec {
    /// A spec with the type's zero value as default.
    pub fn new(arg_type: ArgType) -> Self {
        Self {
            arg_type,
            default_value: arg_type.zero_value(),
            required: false,
        }
    }
}

/// A validated schema, keyed by argument name in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    entries: IndexMap<char, ArgumentSpec>,
}

impl Schema {
    pub(crate) fn from_entries(entries: IndexMap<char, ArgumentSpec>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: char) -> Option<&ArgumentSpec> {
        self.entries.get(&name)
    }

    pub fn contains(&self, name: char) -> bool {
        self.entries.contains_key(&name)
    }

    /// Iterate entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &ArgumentSpec)> {
        self.entries.iter().map(|(name, spec)| (*name, spec))
    }

    /// Names of the required entries, in source order.
    pub fn required(&self) -> impl Iterator<Item = char> + '_ {
        self.iter()
            .filter(|(_, spec)| spec.required)
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The description this schema validates from.
    ///
    /// Defaults are always written out, so validating the result yields an
    /// equal schema.
    pub fn to_description(&self) -> SchemaDescription {
        let entries = self
            .iter()
            .map(|(name, spec)| {
                let entry = EntryDescription {
                    type_name: spec.arg_type.as_str().to_string(),
                    default_value: Some(DefaultValue::Typed(spec.default_value.clone())),
                    required: spec.required,
                };
                (name.to_string(), entry)
            })
            .collect();
        SchemaDescription { entries }
    }
}

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_description().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let description = SchemaDescription::deserialize(deserializer)?;
        crate::validate(&description).map_err(|e| D::Error::custom(e))
    }
}
