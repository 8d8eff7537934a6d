/// 将星标数量格式化为紧凑形式, e.g. `1234` -> `1.2k`
pub fn format_star_count(count: u64) -> String {
    match count {
        c if c < 1_000 => c.to_string(),
        // 999_950 would round up to "1000.0k"
        c if c < 999_950 => compact(c as f64 / 1_000.0, "k"),
        c => compact(c as f64 / 1_000_000.0, "M"),
    }
}

fn compact(value: f64, suffix: &str) -> String {
    let formatted = format!("{:.1}", value);
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{}{}", trimmed, suffix)
}
