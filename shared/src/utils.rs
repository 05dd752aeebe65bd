use crate::constants::LABEL_SEPARATOR;
use crate::types::AccountLabel;

/// Split `"a; b;;c"` into labels `a`, `b`, `c`.
pub fn parse_labels(text: &str) -> Vec<AccountLabel> {
    text.split(LABEL_SEPARATOR)
        .map(|row| row.trim())
        .filter(|row| !row.is_empty())
        .map(AccountLabel::from)
        .collect()
}

pub fn labels_to_string(labels: &[AccountLabel]) -> String {
    labels.iter()
        .map(|row| row.text.as_str())
        .collect::<Vec<_>>()
        .join(&format!("{LABEL_SEPARATOR} "))
}
