//! Duration formatting helpers
//!
//! Durations travel as signed microsecond counts and are rendered as
//! `[D ]HH:MM:SS[.ffffff]`. The day count carries the sign, the remainder
//! is always positive: `-1 23:59:59` is one second before zero.

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_DAY: i64 = 86_400 * MICROS_PER_SECOND;

/// Render a microsecond duration as `[D ]HH:MM:SS[.ffffff]`
pub fn format_duration(micros: i64) -> String {
    let days = micros.div_euclid(MICROS_PER_DAY);
    let rem = micros.rem_euclid(MICROS_PER_DAY);

    let total_seconds = rem / MICROS_PER_SECOND;
    let fraction = rem % MICROS_PER_SECOND;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut out = format!("{:02}:{:02}:{:02}", hours, minutes, seconds);
    if days != 0 {
        out = format!("{} {}", days, out);
    }
    if fraction != 0 {
        out.push_str(&format!(".{:06}", fraction));
    }
    out
}

/// Parse a `[D ]HH:MM:SS[.ffffff]` string back into microseconds
pub fn parse_duration(s: &str) -> Option<i64> {
    let s = s.trim();
    let (days, clock) = match s.split_once(' ') {
        Some((d, rest)) => (d.parse::<i64>().ok()?, rest.trim()),
        None => (0, s),
    };

    let (hms, fraction) = match clock.split_once('.') {
        Some((hms, frac)) => {
            if frac.is_empty() || frac.len() > 6 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            // right-pad to microseconds: ".5" is 500000us
            let padded = format!("{:0<6}", frac);
            (hms, padded.parse::<i64>().ok()?)
        }
        None => (clock, 0),
    };

    let mut parts = hms.split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds: i64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return None;
    }
    if hours < 0 {
        return None;
    }

    let clock_micros = ((hours * 3600 + minutes * 60 + seconds) * MICROS_PER_SECOND) + fraction;
    days.checked_mul(MICROS_PER_DAY)?.checked_add(clock_micros)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours_only() {
        assert_eq!(format_duration(2 * 3600 * MICROS_PER_SECOND), "02:00:00");
        assert_eq!(format_duration(0), "00:00:00");
    }

    #[test]
    fn test_format_with_days_and_fraction() {
        let micros = MICROS_PER_DAY + (3 * 3600 + 4 * 60 + 5) * MICROS_PER_SECOND + 250;
        assert_eq!(format_duration(micros), "1 03:04:05.000250");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_duration(-MICROS_PER_SECOND), "-1 23:59:59");
        assert_eq!(format_duration(-MICROS_PER_DAY), "-1 00:00:00");
    }

    #[test]
    fn test_parse_accepts_formatted_output() {
        for micros in [
            0,
            90 * MICROS_PER_SECOND,
            3 * MICROS_PER_DAY + 17,
            -MICROS_PER_SECOND,
        ] {
            assert_eq!(parse_duration(&format_duration(micros)), Some(micros));
        }
    }

    #[test]
    fn test_parse_short_fraction() {
        assert_eq!(parse_duration("00:00:01.5"), Some(1_500_000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_duration("soon"), None);
        assert_eq!(parse_duration("01:61:00"), None);
        assert_eq!(parse_duration("01:00"), None);
        assert_eq!(parse_duration("00:00:01."), None);
    }
}
