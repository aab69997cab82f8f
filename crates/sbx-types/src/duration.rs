use once_cell::sync::Lazy;
use regex::Regex;

static DURATION_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(?:(?:(\d+):)?([0-5]?\d):)?([0-5]?\d)$").ok());

/// Parse `s`, `m:ss` or `h:mm:ss` into whole seconds.
///
/// Returns `None` for blank or malformed text, and for a zero duration.
pub fn parse_duration(text: &str) -> Option<u32> {
    let re = DURATION_RE.as_ref()?;
    let caps = re.captures(text.trim())?;
    let part = |i: usize| -> Option<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let total = part(1)?
        .checked_mul(3600)?
        .checked_add(part(2)? * 60)?
        .checked_add(part(3)?)?;
    (total > 0).then_some(total)
}

/// Format seconds as `mm:ss`, or `h:mm:ss` past the hour.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
