// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI file parser.

use crate::domain::{ConfigError, FieldName, FieldValue, LoadedFields, Result};
use crate::ports::ConfigParser;
use ini::{Ini, ParseOption};
use std::collections::BTreeMap;

/// Name of the section whose keys every other section inherits.
pub const DEFAULT_SECTION: &str = "DEFAULT";

const MAX_INTERPOLATION_DEPTH: usize = 10;

/// INI parser implementation.
///
/// Fields are whole sections: `[server]` with `host = localhost` becomes the
/// field `server` holding the map `{"host": "localhost"}`, never a field `host`.
///
/// Parsing rules:
///
/// - keys are case-insensitive and stored lowercased; section names keep their case
/// - `=` and `:` both separate keys from values; values are strings, without
///   quote or escape processing
/// - an indented line continues the previous value; lines are joined with `\n`
///   and stripped of surrounding whitespace
/// - keys of the `[DEFAULT]` section are inherited by every other section that
///   does not set them, and `DEFAULT` itself is not a field
/// - `%(name)s` expands to the value of `name` in the same section (defaults
///   included) and `%%` is a literal `%`; any other `%`, an unknown name or a
///   reference chain deeper than ten levels is a parse error
/// - a key before the first section header, a repeated section or a repeated
///   key within one section is a parse error
///
/// # Examples
///
/// ```rust
/// use greenhorn::adapters::IniParser;
/// use greenhorn::ports::ConfigParser;
///
/// let fields = IniParser::new().parse("[server]\nhost=localhost\n").unwrap();
/// let server = fields.get("server").unwrap();
/// assert_eq!(server.get("host").and_then(|v| v.as_str()), Some("localhost"));
/// assert!(fields.get("host").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }

    fn parse_error(message: String) -> ConfigError {
        ConfigError::SourceParse {
            format: "ini".to_string(),
            message,
            source: None,
        }
    }

    fn join_lines(value: &str) -> String {
        value.lines().map(str::trim).collect::<Vec<_>>().join("\n")
    }

    /// Expands `%(name)s` references in `value` against the section's keys.
    fn interpolate(
        section: &str,
        key: &str,
        value: &str,
        vars: &BTreeMap<String, String>,
        depth: usize,
    ) -> Result<String> {
        if depth > MAX_INTERPOLATION_DEPTH {
            return Err(Self::parse_error(format!(
                "interpolation of '{}' in section '{}' nests deeper than {} levels",
                key, section, MAX_INTERPOLATION_DEPTH
            )));
        }

        let mut expanded = String::with_capacity(value.len());
        let mut rest = value;
        while let Some(pos) = rest.find('%') {
            expanded.push_str(&rest[..pos]);
            let tail = &rest[pos + 1..];

            if let Some(after) = tail.strip_prefix('%') {
                expanded.push('%');
                rest = after;
                continue;
            }

            let reference = tail
                .strip_prefix('(')
                .and_then(|r| r.find(')').map(|end| (&r[..end], &r[end + 1..])))
                .filter(|(name, after)| !name.is_empty() && after.starts_with('s'));
            let Some((name, after)) = reference else {
                return Err(Self::parse_error(format!(
                    "bad interpolation syntax in '{}' of section '{}': {}",
                    key, section, value
                )));
            };

            let name = name.to_lowercase();
            let replacement = vars.get(&name).ok_or_else(|| {
                Self::parse_error(format!(
                    "'{}' in section '{}' references unknown key '{}'",
                    key, section, name
                ))
            })?;
            if replacement.contains('%') {
                expanded.push_str(&Self::interpolate(section, key, replacement, vars, depth + 1)?);
            } else {
                expanded.push_str(replacement);
            }
            rest = &after[1..];
        }
        expanded.push_str(rest);
        Ok(expanded)
    }

    /// Collects a section's keys, lowercased, rejecting duplicates.
    fn collect_section(
        section: &str,
        properties: &ini::Properties,
    ) -> Result<BTreeMap<String, String>> {
        let mut entries = BTreeMap::new();
        for (key, value) in properties.iter() {
            let key = key.to_lowercase();
            if entries.insert(key.clone(), Self::join_lines(value)).is_some() {
                return Err(Self::parse_error(format!(
                    "duplicate key '{}' in section '{}'",
                    key, section
                )));
            }
        }
        Ok(entries)
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str) -> Result<LoadedFields> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            enabled_indented_mutiline_value: true,
            ..ParseOption::default()
        };
        let document =
            Ini::load_from_str_opt(content, options).map_err(|e| ConfigError::source_parse("ini", e))?;

        let mut defaults = BTreeMap::new();
        let mut seen_defaults = false;
        let mut sections: Vec<(String, BTreeMap<String, String>)> = Vec::new();

        for (section, properties) in document.iter() {
            match section {
                None => {
                    if let Some((key, _)) = properties.iter().next() {
                        return Err(Self::parse_error(format!(
                            "key '{}' appears before the first section header",
                            key
                        )));
                    }
                }
                Some(DEFAULT_SECTION) => {
                    if seen_defaults {
                        return Err(Self::parse_error(format!(
                            "duplicate section '{}'",
                            DEFAULT_SECTION
                        )));
                    }
                    defaults = Self::collect_section(DEFAULT_SECTION, properties)?;
                    seen_defaults = true;
                }
                Some(name) => {
                    if sections.iter().any(|(existing, _)| existing == name) {
                        return Err(Self::parse_error(format!("duplicate section '{}'", name)));
                    }
                    sections.push((name.to_string(), Self::collect_section(name, properties)?));
                }
            }
        }

        tracing::debug!(
            "Parsed {} INI sections ({} inherited default keys)",
            sections.len(),
            defaults.len()
        );

        let mut fields = LoadedFields::new();
        for (name, entries) in sections {
            let mut merged = defaults.clone();
            merged.extend(entries);

            let mut map = BTreeMap::new();
            for (key, value) in &merged {
                let value = Self::interpolate(&name, key, value, &merged, 1)?;
                map.insert(key.clone(), FieldValue::String(value));
            }
            fields.insert(FieldName::from(name), FieldValue::Map(map));
        }
        Ok(fields)
    }
}
