use std::time::Duration;

/// Shown when a track's length could not be determined.
pub const DURATION_UNAVAILABLE: &str = "Duración no disponible";

/// Format a track duration as display text ("3 minutos 45 segundos").
///
/// Zero maps to [`DURATION_UNAVAILABLE`]; durations of an hour or more drop
/// the seconds part.
pub fn format_track_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    if total_secs == 0 {
        return DURATION_UNAVAILABLE.to_string();
    }

    let mins = total_secs / 60;
    let secs = total_secs % 60;

    if mins == 0 {
        format!("{secs} segundos")
    } else if mins < 60 {
        format!(
            "{} minuto{} {} segundo{}",
            mins,
            if mins > 1 { "s" } else { "" },
            secs,
            if secs != 1 { "s" } else { "" },
        )
    } else {
        let hours = mins / 60;
        let remaining = mins % 60;
        format!(
            "{} hora{} {} minuto{}",
            hours,
            if hours > 1 { "s" } else { "" },
            remaining,
            if remaining > 1 { "s" } else { "" },
        )
    }
}

/// Format a byte count for the file-selection info line ("2.5 MB").
///
/// Powers of 1024, at most two decimals, trailing zeros trimmed.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    let exp = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exp as i32);

    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    format!("{text} {}", UNITS[exp])
}
