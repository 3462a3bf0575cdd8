/// Splits a combined `YYYY-MM-DDTHH:MM` value into its date and time-of-day parts.
///
/// The value is cut at fixed character positions (0..10 and 11..16) and never
/// reformatted; a short value yields whatever it actually holds.
pub fn split_interview_time(raw: &str) -> (String, String) {
    (char_slice(raw, 0, 10), char_slice(raw, 11, 16))
}

fn char_slice(raw: &str, start: usize, end: usize) -> String {
    raw.chars().skip(start).take(end.saturating_sub(start)).collect()
}
