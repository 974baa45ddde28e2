use std::time::Duration;

/// Format as `MM:SS.cc`, or `H:MM:SS.cc` once an hour has passed.
pub fn format_elapsed(d: Duration) -> String {
    let ms = d.as_millis();
    let cs = (ms % 1000) / 10;
    let total_secs = ms / 1000;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    if h > 0 {
        format!("{}:{:02}:{:02}.{:02}", h, m, s, cs)
    } else {
        format!("{:02}:{:02}.{:02}", m, s, cs)
    }
}
