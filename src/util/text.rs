// src/util/text.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INLINE_SPACE_REGEX: Regex =
        Regex::new(r"[ \t\u{a0}]+").expect("Failed to compile inline whitespace regex");
    static ref BLANK_LINES_REGEX: Regex =
        Regex::new(r"\n{3,}").expect("Failed to compile blank line regex");
}

/// Local cleanup for OCR output when the AI service is unavailable.
///
/// This function:
/// 1. Normalizes line endings to `\n`
/// 2. Collapses runs of spaces and tabs into one space
/// 3. Trims every line
/// 4. Collapses runs of blank lines into a single blank line
/// 5. Trims the whole text
///
/// # Examples
///
/// ```
/// use notify_notes::util::text::normalize_whitespace;
///
/// let cleaned = normalize_whitespace("Hello    world\r\n\r\n\r\nbye ");
/// assert_eq!(cleaned, "Hello world\n\nbye");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let lines: Vec<String> = unified
        .lines()
        .map(|line| INLINE_SPACE_REGEX.replace_all(line, " ").trim().to_string())
        .collect();

    BLANK_LINES_REGEX
        .replace_all(&lines.join("\n"), "\n\n")
        .trim()
        .to_string()
}

/// First non-empty line of `text`, cut to `width` characters with an ellipsis.
///
/// # Examples
///
/// ```
/// use notify_notes::util::text::preview;
///
/// assert_eq!(preview("\n  Groceries\nmilk", 20), "Groceries");
/// assert_eq!(preview("abcdefgh", 5), "abcd…");
/// ```
pub fn preview(text: &str, width: usize) -> String {
    let line = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    if line.chars().count() <= width {
        return line.to_string();
    }

    let mut cut: String = line.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
