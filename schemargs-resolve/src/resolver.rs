//! Token scanning and default substitution.

use schemargs_core::{ArgType, FLAG_MARKER, Value};
use schemargs_schema::Schema;
use tracing::{debug, trace};

use crate::{Error, ResolvedArgument, ResolvedArgumentSet, Result};

/// Resolves command-line tokens against a schema.
///
/// A resolver holds no state between calls; each [`Resolver::resolve`]
/// builds its own result.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    schema: &'a Schema,
}

impl<'a> Resolver<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Resolve `tokens` into typed values.
    ///
    /// Explicit flags are returned in command-line order, followed by
    /// defaults for every absent optional entry in schema order. Tokens that
    /// are not flags and are not consumed as a value are ignored.
    pub fn resolve<I>(&self, tokens: I) -> Result<ResolvedArgumentSet>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut resolved = ResolvedArgumentSet::default();
        let mut tokens = tokens.into_iter();

        while let Some(token) = tokens.next() {
            let token = token.as_ref();
            let Some(name) = flag_name(token)? else {
                debug!(token, "ignoring non-flag token");
                continue;
            };

            let spec = self
                .schema
                .get(name)
                .ok_or_else(|| Error::UndefinedArgument {
                    token: token.to_string(),
                })?;

            if resolved.contains(name) {
                return Err(Error::DuplicateArgument { name });
            }

            let value = match spec.arg_type {
                ArgType::Boolean => Value::Boolean(true),
                ArgType::String => {
                    Value::String(next_value(&mut tokens, name, spec.arg_type)?)
                }
                ArgType::Integer => {
                    let raw = next_value(&mut tokens, name, spec.arg_type)?;
                    Value::Integer(parse_integer(name, raw)?)
                }
            };

            trace!(name = %name, value = %value, "resolved flag");
            resolved.push(ResolvedArgument::explicit(name, value));
        }

        for (name, spec) in self.schema.iter() {
            if resolved.contains(name) {
                continue;
            }
            if spec.required {
                return Err(Error::MissingRequiredArgument { name });
            }
            trace!(name = %name, value = %spec.default_value, "substituted default");
            resolved.push(ResolvedArgument::defaulted(name, spec.default_value.clone()));
        }

        debug!(
            explicit = resolved.explicit().count(),
            total = resolved.len(),
            "resolved arguments"
        );
        Ok(resolved)
    }
}

/// Resolve `tokens` against `schema`.
pub fn resolve<I>(schema: &Schema, tokens: I) -> Result<ResolvedArgumentSet>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Resolver::new(schema).resolve(tokens)
}

/// Name of the flag `token` denotes, or `None` if it is not a flag.
///
/// Marker tokens that are not exactly two characters (`-`, `--name`, `-lp`)
/// can never name a schema entry, and neither can `--`.
fn flag_name(token: &str) -> Result<Option<char>> {
    let Some(rest) = token.strip_prefix(FLAG_MARKER) else {
        return Ok(None);
    };

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(name), None) if name != FLAG_MARKER => Ok(Some(name)),
        _ => Err(Error::UndefinedArgument {
            token: token.to_string(),
        }),
    }
}

/// Take the token following flag `name` as its value.
fn next_value<I>(tokens: &mut I, name: char, expected: ArgType) -> Result<String>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    tokens
        .next()
        .map(|value| value.as_ref().to_string())
        .ok_or(Error::MissingValue { name, expected })
}

fn parse_integer(name: char, raw: String) -> Result<i64> {
    raw.parse::<i64>().map_err(|source| Error::InvalidInteger {
        name,
        value: raw.clone(),
        source,
    })
}
