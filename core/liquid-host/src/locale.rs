//! POSIX locale parsing.

/// Normalizes a POSIX locale value such as `en_US.UTF-8` or `de_DE@euro`
/// into `en_US` / `de_DE`. `C` and `POSIX` carry no language and yield `None`.
pub fn parse_locale(raw: &str) -> Option<String> {
    let tag = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Some(tag.replace('-', "_"))
}

/// Language part of a normalized locale (`en_US` → `en`).
pub fn language_of(locale: &str) -> String {
    locale
        .split('_')
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

/// First usable locale from the standard environment variables.
pub(crate) fn from_env() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| parse_locale(&value))
}
