const TAG_PREVIEW: usize = 10;

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Statistics arrive as numeric strings and may be missing entirely.
pub fn format_count(count: Option<&str>) -> String {
    match count.map(str::parse::<u64>) {
        None => "0".to_string(),
        Some(Ok(n)) => format_number(n),
        Some(Err(_)) => count.unwrap_or_default().to_string(),
    }
}

/// First tags to show in the table and how many were left out.
pub fn tag_preview(tags: Option<&[String]>) -> (&[String], usize) {
    let tags = tags.unwrap_or_default();
    let shown = &tags[..tags.len().min(TAG_PREVIEW)];
    (shown, tags.len() - shown.len())
}
