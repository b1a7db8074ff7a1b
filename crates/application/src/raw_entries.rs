//! Parser for textual `key=value` body entries.
//!
//! Syntax accepted for url-encoded bodies:
//! - entries are separated by newlines or `&`
//! - `key=value` or `key: value`, whichever separator comes first
//! - a leading `#` marks the entry inactive
//! - blank entries are skipped, keys and values are trimmed

use thiserror::Error;

/// A single parsed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Whether the entry is enabled
    pub active: bool,
    /// Entry key, unresolved
    pub key: String,
    /// Entry value, unresolved
    pub value: String,
}

impl RawEntry {
    /// Creates an active entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            active: true,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Raw entry parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RawEntryError {
    /// An entry has neither `=` nor `:`.
    #[error("entry {index} has no key/value separator: {entry:?}")]
    MissingSeparator {
        /// Zero-based index of the offending entry
        index: usize,
        /// The entry text
        entry: String,
    },
}

/// Parses raw body text into entries.
///
/// # Errors
///
/// Returns [`RawEntryError::MissingSeparator`] for the first non-blank entry
/// without a separator.
pub fn parse_raw_entries(raw: &str) -> Result<Vec<RawEntry>, RawEntryError> {
    raw.split(['\n', '&'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .filter_map(|(index, entry)| parse_entry(index, entry).transpose())
        .collect()
}

fn parse_entry(index: usize, entry: &str) -> Result<Option<RawEntry>, RawEntryError> {
    let (active, body) = entry
        .strip_prefix('#')
        .map_or((true, entry), |rest| (false, rest.trim_start()));

    if body.is_empty() {
        return Ok(None);
    }

    let Some(split_at) = body.find(['=', ':']) else {
        return Err(RawEntryError::MissingSeparator {
            index,
            entry: entry.to_string(),
        });
    };

    Ok(Some(RawEntry {
        active,
        key: body[..split_at].trim().to_string(),
        value: body[split_at + 1..].trim().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_ampersand_separated() {
        let entries = parse_raw_entries("a=1&b=2").unwrap_or_default();
        assert_eq!(entries, vec![RawEntry::new("a", "1"), RawEntry::new("b", "2")]);
    }

    #[test]
    fn test_parse_newline_separated_with_colon_syntax() {
        let entries = parse_raw_entries("name: Ada\r\ncity = London\n").unwrap_or_default();
        assert_eq!(
            entries,
            vec![RawEntry::new("name", "Ada"), RawEntry::new("city", "London")]
        );
    }

    #[test]
    fn test_first_separator_wins() {
        let entries = parse_raw_entries("token: a=b\nurl=http://x").unwrap_or_default();
        assert_eq!(entries[0], RawEntry::new("token", "a=b"));
        assert_eq!(entries[1], RawEntry::new("url", "http://x"));
    }

    #[test]
    fn test_hash_marks_inactive() {
        let entries = parse_raw_entries("#debug=true\n# trace: 1").unwrap_or_default();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| !e.active));
        assert_eq!(entries[1].key, "trace");
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let entries = parse_raw_entries("\n\n a=1 \n&&\n#\n").unwrap_or_default();
        assert_eq!(entries, vec![RawEntry::new("a", "1")]);
    }

    #[test]
    fn test_empty_key_and_value_are_kept() {
        let entries = parse_raw_entries("=orphan\nflag=").unwrap_or_default();
        assert_eq!(
            entries,
            vec![RawEntry::new("", "orphan"), RawEntry::new("flag", "")]
        );
    }

    #[test]
    fn test_missing_separator_fails() {
        assert_eq!(
            parse_raw_entries("a=1\nbroken"),
            Err(RawEntryError::MissingSeparator {
                index: 1,
                entry: "broken".to_string()
            })
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_raw_entries(""), Ok(Vec::new()));
    }
}
