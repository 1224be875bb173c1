//! Catalog duration tokens (`PT#H#M#S`) and their clock-style display form.

/// Parses a `PT#H#M#S` token into whole seconds.
///
/// Each component is optional but must appear in hour, minute, second order. Returns `None` for
/// anything else, including an empty `PT`.
pub fn parse_duration_token(token: &str) -> Option<u32> {
    let rest = token.trim().strip_prefix("PT")?;
    if rest.is_empty() {
        return None;
    }

    let mut total: u32 = 0;
    let mut digits = String::new();
    let mut last_rank = 0;
    for ch in rest.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
            continue;
        }
        let (rank, scale) = match ch {
            'H' => (1, 3600),
            'M' => (2, 60),
            'S' => (3, 1),
            _ => return None,
        };
        if rank <= last_rank || digits.is_empty() {
            return None;
        }
        let value: u32 = digits.parse().ok()?;
        total = total.checked_add(value.checked_mul(scale)?)?;
        digits.clear();
        last_rank = rank;
    }
    if !digits.is_empty() {
        return None;
    }
    Some(total)
}

/// Formats whole seconds as `H:MM:SS` when at least an hour, else `M:SS`.
pub fn format_duration_seconds(total: u32) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Formats a duration token for display, or returns an empty string when it cannot be parsed.
pub fn format_duration(token: &str) -> String {
    parse_duration_token(token)
        .map(format_duration_seconds)
        .unwrap_or_default()
}
