use std::collections::HashSet;

/// When a critter can be caught, relative to the current hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timing {
    pub available_now: bool,
    pub available_all_day: bool,
    /// No hours listed at all.
    pub never_available: bool,
    /// Next hour it appears. Meaningful only when not available now.
    pub available_at: u32,
    /// First hour it is gone. Meaningful only when available now.
    pub available_until: u32,
    pub current_hour: u32,
}

impl Timing {
    pub fn compute(hours: &[u32], current_hour: u32) -> Self {
        let current_hour = current_hour % 24;
        let set: HashSet<u32> = hours.iter().map(|h| h % 24).collect();

        if set.len() == 24 {
            return Self {
                available_now: true,
                available_all_day: true,
                current_hour,
                ..Default::default()
            };
        }

        if set.is_empty() {
            return Self {
                never_available: true,
                current_hour,
                ..Default::default()
            };
        }

        let available_now = set.contains(&current_hour);
        let mut timing = Self {
            available_now,
            current_hour,
            ..Default::default()
        };

        let next = (current_hour..current_hour + 24)
            .map(|h| h % 24)
            .find(|h| set.contains(h) != available_now);
        if let Some(hour) = next {
            if available_now {
                timing.available_until = hour;
            } else {
                timing.available_at = hour;
            }
        }
        timing
    }

    pub fn display_at(&self) -> String {
        display_hour(self.available_at)
    }

    pub fn display_until(&self) -> String {
        display_hour(self.available_until)
    }

    pub fn describe(&self) -> String {
        if self.available_all_day {
            "all day".to_string()
        } else if self.available_now {
            format!("now, until {}", self.display_until())
        } else if self.never_available {
            "never".to_string()
        } else {
            format!("from {}", self.display_at())
        }
    }
}

/// 12-hour clock label for an hour of the day.
pub fn display_hour(hour: u32) -> String {
    match hour {
        0 => "12AM".to_string(),
        12 => "12PM".to_string(),
        h if h > 12 => format!("{}PM", h - 12),
        h => format!("{}AM", h),
    }
}
