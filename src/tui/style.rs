//! Color theme and progress bars.
//!
//! Dark violet / red / grey / blue palette, with the usual green/yellow/red
//! escalation for threshold-colored values.

use crossterm::style::{Color, Stylize};

use crate::config::{PROGRESS_BAR_EMPTY, PROGRESS_BAR_FILLED, PROGRESS_BAR_LENGTH, Thresholds};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::AnsiValue(92); // dark violet
    pub const ALERT: Color = Color::Red;
    pub const DIM: Color = Color::DarkGrey;
    pub const INFO: Color = Color::Blue;

    // Status escalation
    pub const OK: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const CRITICAL: Color = Color::Red;
}

/// Wraps text in the given foreground color.
pub fn paint(text: impl std::fmt::Display, color: Color) -> String {
    format!("{}", text.to_string().with(color))
}

/// Bold text.
pub fn bold(text: impl std::fmt::Display) -> String {
    format!("{}", text.to_string().bold())
}

/// Status color for a percentage against a threshold pair: below warning is
/// ok, warning up to critical is warning, critical and above is critical.
pub fn threshold_color(percent: f64, thresholds: Thresholds) -> Color {
    if percent >= thresholds.critical {
        Theme::CRITICAL
    } else if percent >= thresholds.warning {
        Theme::WARNING
    } else {
        Theme::OK
    }
}

/// Renders a colored progress bar with a trailing percentage.
///
/// A zero `max` reports 0%, never a division error; values beyond `max`
/// clamp to 100%.
pub fn progress_bar(value: f64, max: f64, thresholds: Thresholds) -> String {
    let percent = if max <= 0.0 {
        0.0
    } else {
        ((value / max) * 100.0).clamp(0.0, 100.0)
    };

    let filled = ((PROGRESS_BAR_LENGTH as f64) * percent / 100.0) as usize;
    let filled = filled.min(PROGRESS_BAR_LENGTH);
    let mut bar = String::new();
    for _ in 0..filled {
        bar.push(PROGRESS_BAR_FILLED);
    }
    for _ in filled..PROGRESS_BAR_LENGTH {
        bar.push(PROGRESS_BAR_EMPTY);
    }

    let color = threshold_color(percent, thresholds);
    format!("{} {}", paint(&bar, color), paint(format!("{:.1}%", percent), color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CPU_THRESHOLDS, DISK_THRESHOLDS, MEMORY_THRESHOLDS};

    #[test]
    fn test_threshold_escalation() {
        // cpu 95, memory 50, disk 10: only the CPU bar escalates.
        assert_eq!(threshold_color(95.0, CPU_THRESHOLDS), Theme::CRITICAL);
        assert_eq!(threshold_color(50.0, MEMORY_THRESHOLDS), Theme::OK);
        assert_eq!(threshold_color(10.0, DISK_THRESHOLDS), Theme::OK);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(threshold_color(69.9, CPU_THRESHOLDS), Theme::OK);
        assert_eq!(threshold_color(70.0, CPU_THRESHOLDS), Theme::WARNING);
        assert_eq!(threshold_color(89.9, CPU_THRESHOLDS), Theme::WARNING);
        assert_eq!(threshold_color(90.0, CPU_THRESHOLDS), Theme::CRITICAL);
    }

    #[test]
    fn test_progress_bar_zero_max() {
        let bar = progress_bar(100.0, 0.0, MEMORY_THRESHOLDS);
        assert!(bar.contains("0.0%"));
        assert!(!bar.contains(crate::config::PROGRESS_BAR_FILLED));
    }

    #[test]
    fn test_progress_bar_full() {
        let bar = progress_bar(150.0, 100.0, CPU_THRESHOLDS);
        assert!(bar.contains("100.0%"));
        assert!(!bar.contains(crate::config::PROGRESS_BAR_EMPTY));
    }

    #[test]
    fn test_progress_bar_half() {
        let bar = progress_bar(50.0, 100.0, CPU_THRESHOLDS);
        assert!(bar.contains("50.0%"));
        let filled = bar.chars().filter(|c| *c == crate::config::PROGRESS_BAR_FILLED).count();
        assert_eq!(filled, crate::config::PROGRESS_BAR_LENGTH / 2);
    }
}
