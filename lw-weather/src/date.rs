/// Turns `YYYY-MM-DD` into `DD.MM.YYYY`.
/// Segments are only reordered, the date itself is never validated.
pub fn format_date_eu(iso_date: &str) -> String {
    let mut segments: Vec<&str> = iso_date.split('-').collect();
    segments.reverse();
    segments.join(".")
}
