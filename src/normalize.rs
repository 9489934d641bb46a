//! Text canonicalization for idiom comparison

/// Characters removed outright during normalization.
///
/// Apostrophes are deleted rather than replaced with a space so that
/// "it's" and "its" compare equal.
const STRIPPED: [char; 9] = ['\'', '\u{2018}', '\u{2019}', '.', ',', '!', '?', ';', ':'];

/// Canonicalize text for comparison.
///
/// Lowercases, drops apostrophes and `. , ! ? ; :`, and collapses runs of
/// whitespace into single spaces. Idempotent: `normalize_text(normalize_text(x))
/// == normalize_text(x)`.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let stripped: String = lowered.chars().filter(|c| !STRIPPED.contains(c)).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of characters (not bytes) in `text`
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
