//! Resolved argument values.

use std::fmt;

use schemargs_core::{ArgType, Value};
use serde::{Serialize, ser::SerializeMap};

use crate::{Error, Result};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Given on the command line.
    Explicit,
    /// Substituted from the schema default.
    Default,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Explicit => "explicit",
            Origin::Default => "default",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name/value pair produced from a token or a schema default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArgument {
    pub name: char,
    pub value: Value,
    pub origin: Origin,
}

impl ResolvedArgument {
    pub fn explicit(name: char, value: Value) -> Self {
        Self {
            name,
            value,
            origin: Origin::Explicit,
        }
    }

    pub fn defaulted(name: char, value: Value) -> Self {
        Self {
            name,
            value,
            origin: Origin::Default,
        }
    }
}

/// Resolved arguments, unique by name.
///
/// Explicit arguments come first in command-line order, followed by
/// substituted defaults in schema order.
///
/// Serializes as a map from name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedArgumentSet {
    args: Vec<ResolvedArgument>,
}

impl ResolvedArgumentSet {
    pub(crate) fn push(&mut self, arg: ResolvedArgument) {
        debug_assert!(!self.contains(arg.name));
        self.args.push(arg);
    }

    pub fn contains(&self, name: char) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: char) -> Option<&ResolvedArgument> {
        self.args.iter().find(|arg| arg.name == name)
    }

    /// Value of the argument `name`.
    pub fn value_of(&self, name: char) -> Result<&Value> {
        self.get(name)
            .map(|arg| &arg.value)
            .ok_or(Error::ArgumentNotFound { name })
    }

    pub fn bool_of(&self, name: char) -> Result<bool> {
        let value = self.value_of(name)?;
        value
            .as_bool()
            .ok_or_else(|| wrong_type(name, ArgType::Boolean, value))
    }

    pub fn int_of(&self, name: char) -> Result<i64> {
        let value = self.value_of(name)?;
        value
            .as_int()
            .ok_or_else(|| wrong_type(name, ArgType::Integer, value))
    }

    pub fn str_of(&self, name: char) -> Result<&str> {
        let value = self.value_of(name)?;
        value
            .as_str()
            .ok_or_else(|| wrong_type(name, ArgType::String, value))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedArgument> {
        self.args.iter()
    }

    /// Arguments given on the command line.
    pub fn explicit(&self) -> impl Iterator<Item = &ResolvedArgument> {
        self.iter().filter(|arg| arg.origin == Origin::Explicit)
    }

    /// Arguments filled in from schema defaults.
    pub fn defaults(&self) -> impl Iterator<Item = &ResolvedArgument> {
        self.iter().filter(|arg| arg.origin == Origin::Default)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

fn wrong_type(name: char, requested: ArgType, value: &Value) -> Error {
    Error::WrongType {
        name,
        requested,
        actual: value.arg_type(),
    }
}

impl<'a> IntoIterator for &'a ResolvedArgumentSet {
    type Item = &'a ResolvedArgument;
    type IntoIter = std::slice::Iter<'a, ResolvedArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ResolvedArgumentSet {
    type Item = ResolvedArgument;
    type IntoIter = std::vec::IntoIter<ResolvedArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

impl Serialize for ResolvedArgumentSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for arg in &self.args {
            map.serialize_entry(&arg.name, &arg.value)?;
        }
        map.end()
    }
}
