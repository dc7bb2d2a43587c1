//! Shared formatting utilities for renderers.

use crate::data::VideoRef;

/// Convert `M:SS` or `H:MM:SS` to whole seconds. Anything else is 0.
pub fn timestamp_to_seconds(timestamp: &str) -> u64 {
    let parts: Option<Vec<u64>> = timestamp
        .split(':')
        .map(|p| p.trim().parse::<u64>().ok())
        .collect();

    let total = match parts.as_deref() {
        Some(&[minutes, seconds]) => minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds)),
        Some(&[hours, minutes, seconds]) => hours
            .checked_mul(3600)
            .zip(minutes.checked_mul(60))
            .and_then(|(h, m)| h.checked_add(m))
            .and_then(|hm| hm.checked_add(seconds)),
        _ => None,
    };
    total.unwrap_or(0)
}

/// Video URL, deep-linked to the start timestamp when there is one.
pub fn video_href(video: &VideoRef) -> String {
    match video.start_time.as_deref() {
        Some(start) if !start.is_empty() => {
            format!("{}&t={}s", video.url, timestamp_to_seconds(start))
        },
        _ => video.url.clone(),
    }
}

/// `start - end`, `start`, or nothing.
pub fn timestamp_range(video: &VideoRef) -> Option<String> {
    let start = video.start_time.as_deref().filter(|s| !s.is_empty())?;
    match video.end_time.as_deref().filter(|s| !s.is_empty()) {
        Some(end) => Some(format!("{} - {}", start, end)),
        None => Some(start.to_string()),
    }
}

/// `1 Sutram`, `3 Sutrams`. Only counts above one take the plural.
pub fn count_label(count: usize, singular: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, singular)
    } else {
        format!("{} {}", count, singular)
    }
}
