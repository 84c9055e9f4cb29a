use super::{HistoryEntry, HistoryError};

/// Parse `git log --pretty=format:%h,%ae` output into entries.
///
/// One trailing newline is dropped before splitting into lines. Each line is
/// split on its first comma. Empty input yields no entries.
///
/// # Errors
/// Returns [`HistoryError::MissingSeparator`] for a line without a comma.
pub fn parse_log(text: &str) -> Result<Vec<HistoryEntry>, HistoryError> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    if text.is_empty() {
        return Ok(Vec::new());
    }

    text.split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            line.split_once(',')
                .map(|(sha, email)| HistoryEntry::new(sha, email))
                .ok_or_else(|| HistoryError::MissingSeparator {
                    line: line.to_string(),
                })
        })
        .collect()
}
