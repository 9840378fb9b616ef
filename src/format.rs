/// Kilometers with one decimal from 1000 m upward, whole meters below.
pub fn format_distance(meters: f64) -> String {
    if meters >= 1000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{:.0} meters", meters)
    }
}

pub fn render_line(name: &str, meters: f64) -> String {
    format!("{}: {}", name, format_distance(meters))
}
