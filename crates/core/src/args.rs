//! Schema-less `-x value` argument resolution.
//!
//! Tokens are scanned once into a map from flag letter to value. Lookups
//! take the default at query time, so an empty map is valid and unknown
//! tokens are silently ignored.

use std::collections::BTreeMap;
use std::fmt;

/// Flag letter to value, last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
    values: BTreeMap<char, String>,
}

impl ArgMap {
    /// Build the map from the raw tokens (program name excluded).
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(|t| t.as_ref().to_string()).collect();
        let mut values = BTreeMap::new();

        let mut i = 0;
        while i < tokens.len() {
            let Some(flag) = flag_name(&tokens[i]) else {
                i += 1;
                continue;
            };

            match tokens.get(i + 1) {
                Some(next) if flag_name(next).is_none() => {
                    values.insert(flag, next.clone());
                    i += 2;
                }
                // Trailing flag, or directly followed by another flag
                _ => {
                    values.insert(flag, String::new());
                    i += 1;
                }
            }
        }

        Self { values }
    }

    /// Value for `flag`, or `default` when the flag was never given.
    pub fn get<'a>(&'a self, flag: char, default: &'a str) -> &'a str {
        self.values.get(&flag).map(String::as_str).unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for ArgMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (flag, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{flag}: {value:?}")?;
        }
        f.write_str("}")
    }
}

/// `-` followed by exactly one ASCII letter.
fn flag_name(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// What the `-t` flag asks the run entry to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestSelector {
    /// Launch the executable, no tests.
    None,
    /// Run every discovered test binary.
    All,
    /// Run `bin/Debug/<unit>_tests/<unit>_tests`.
    Unit(String),
}

impl TestSelector {
    pub fn from_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "false" | "0" | "no" | "off" => TestSelector::None,
            "" | "true" | "all" | "1" | "*" => TestSelector::All,
            _ => TestSelector::Unit(value.trim().to_string()),
        }
    }

    pub fn from_args(args: &ArgMap) -> Self {
        Self::from_value(args.get('t', "false"))
    }
}
