use crate::common::*;

static WORD_PATTERN: once_lazy<Regex> = once_lazy::new(|| {
    Regex::new(r"\w[\w']+").unwrap_or_else(|e| panic!("[text_utils] invalid word pattern: {:?}", e))
});

/* Words carrying no meaning on their own in a title corpus */
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "am", "an", "and", "are", "as", "at", "be", "but", "by",
    "can", "did", "do", "does", "for", "from", "had", "has", "have", "he", "her", "his", "how",
    "i", "if", "in", "into", "is", "it", "it's", "its", "me", "my", "no", "not", "of", "on",
    "or", "our", "out", "she", "so", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "to", "too", "up", "us", "was", "we", "were", "what", "when",
    "where", "which", "who", "why", "will", "with", "you", "your",
];

#[doc = r#"
    Minutes of a movie duration cell.

    The leading digits are parsed and the non-numeric suffix is dropped, so
    `"90 min"` and `"90min"` both give `90`.

    # Errors
    The cell does not start with a number or the number overflows `u32`.
"#]
pub fn parse_duration_minutes(raw: &str) -> anyhow::Result<u32> {
    let trimmed: &str = raw.trim();
    let digits_end: usize = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits: &str = &trimmed[..digits_end];

    if digits.is_empty() {
        return Err(anyhow!(
            "[parse_duration_minutes] '{}' does not start with a number",
            raw
        ));
    }

    digits
        .parse::<u32>()
        .with_context(|| format!("[parse_duration_minutes] '{}' is out of range", raw))
}

#[doc = r#"
    Coerces a release year cell to an integer.

    Spreadsheet exports sometimes write years as floats (`"2019.0"`); a float
    with no fractional part is accepted, anything else is an error.
"#]
pub fn parse_release_year(raw: &str) -> anyhow::Result<i32> {
    let trimmed: &str = raw.trim();

    if let Ok(year) = trimmed.parse::<i32>() {
        return Ok(year);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < i32::MAX as f64 => {
            Ok(value as i32)
        }
        _ => Err(anyhow!(
            "[parse_release_year] '{}' is not an integer year",
            raw
        )),
    }
}

#[doc = "Trimmed, non-empty tokens of a comma-separated cell"]
pub fn split_tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|token| !token.is_empty())
}

#[doc = "Lower-cased words of a free-text cell with stop words removed"]
pub fn corpus_words(raw: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(raw)
        .map(|found| found.as_str().to_lowercase())
        .map(|word| word.trim_end_matches('\'').to_string())
        .filter(|word| word.chars().count() > 1 && !STOPWORDS.contains(&word.as_str()))
        .collect()
}
