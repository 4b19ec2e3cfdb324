use std::collections::HashMap;

use crate::error::{MalformedLine, MalformedReason};

/// One `KEY=VALUE` pair from a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

/// Parsed contents of a `.env` file.
///
/// Keys are unique: a repeated key keeps the value of its last occurrence
/// and the position of its first one. Rejected lines are collected in
/// `malformed` and never abort the parse.
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    entries: Vec<Entry>,
    malformed: Vec<MalformedLine>,
}

impl EnvFile {
    pub fn parse(contents: &str) -> Self {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

        let mut file = Self::default();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (index, raw) in contents.lines().enumerate() {
            match parse_line(raw) {
                Ok(None) => {}
                Ok(Some(entry)) => match positions.get(&entry.key) {
                    Some(&pos) => file.entries[pos].value = entry.value,
                    None => {
                        positions.insert(entry.key.clone(), file.entries.len());
                        file.entries.push(entry);
                    }
                },
                Err(reason) => file.malformed.push(MalformedLine {
                    line: index + 1,
                    reason,
                }),
            }
        }

        file
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn malformed(&self) -> &[MalformedLine] {
        &self.malformed
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `Ok(None)` for blank and comment lines.
fn parse_line(raw: &str) -> Result<Option<Entry>, MalformedReason> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (key, value) = line
        .split_once('=')
        .ok_or(MalformedReason::MissingSeparator)?;

    let key = strip_export(key.trim());
    if key.is_empty() {
        return Err(MalformedReason::EmptyKey);
    }
    if key.contains(char::is_whitespace) {
        return Err(MalformedReason::InvalidKey);
    }

    let value = parse_value(value.trim())?;
    if key.contains('\0') || value.contains('\0') {
        return Err(MalformedReason::NulByte);
    }

    Ok(Some(Entry {
        key: key.to_owned(),
        value: value.to_owned(),
    }))
}

/// `export FOO` -> `FOO`. A key that is literally `export` is left alone.
fn strip_export(key: &str) -> &str {
    key.strip_prefix("export")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
        .unwrap_or(key)
}

/// Strips one layer of matching `'` or `"` quotes and any trailing
/// `# comment`.
///
/// After a closing quote only whitespace or a comment may follow. In an
/// unquoted value a `#` starts a comment only when whitespace precedes it,
/// so `COLOR=#ff0000` keeps its value.
fn parse_value(value: &str) -> Result<&str, MalformedReason> {
    let Some(quote) = value.chars().next().filter(|c| *c == '"' || *c == '\'') else {
        return Ok(strip_inline_comment(value));
    };

    let close = value[1..]
        .find(quote)
        .map(|i| i + 1)
        .ok_or(MalformedReason::UnterminatedQuote)?;

    let rest = value[close + 1..].trim_start();
    if rest.is_empty() || rest.starts_with('#') {
        Ok(&value[1..close])
    } else {
        Err(MalformedReason::TrailingText)
    }
}

fn strip_inline_comment(value: &str) -> &str {
    let mut prev_is_space = false;
    for (i, c) in value.char_indices() {
        if c == '#' && prev_is_space {
            return value[..i].trim_end();
        }
        prev_is_space = c.is_whitespace();
    }
    value
}
