//! Localized strings for the weekly schedules screen.

/// Weekday labels. The center's school week runs Sunday through Thursday.
#[derive(Debug, Clone)]
pub struct ScheduleDayStrings {
    pub sunday: &'static str,
    pub monday: &'static str,
    pub tuesday: &'static str,
    pub wednesday: &'static str,
    pub thursday: &'static str,
    pub friday: &'static str,
    pub saturday: &'static str,
}

impl ScheduleDayStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "sunday" => Some(self.sunday),
            "monday" => Some(self.monday),
            "tuesday" => Some(self.tuesday),
            "wednesday" => Some(self.wednesday),
            "thursday" => Some(self.thursday),
            "friday" => Some(self.friday),
            "saturday" => Some(self.saturday),
            _ => None,
        }
    }
}

/// Schedules screen strings
#[derive(Debug, Clone)]
pub struct SchedulesStrings {
    pub title: &'static str,
    pub weekly_schedule: &'static str,
    pub add_session: &'static str,
    pub day: &'static str,
    pub time: &'static str,
    pub circle: &'static str,
    pub teacher: &'static str,
    pub room: &'static str,

    /// Shown when a new session overlaps an existing one.
    /// Placeholders: {{day}}, {{time}}
    pub session_conflict: &'static str,

    pub empty_day: &'static str,

    pub days: ScheduleDayStrings,
}

impl SchedulesStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "weekly_schedule",
        "add_session",
        "day",
        "time",
        "circle",
        "teacher",
        "room",
        "session_conflict",
        "empty_day",
        "days.sunday",
        "days.monday",
        "days.tuesday",
        "days.wednesday",
        "days.thursday",
        "days.friday",
        "days.saturday",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key.split_once('.') {
            None => match key {
                "title" => Some(self.title),
                "weekly_schedule" => Some(self.weekly_schedule),
                "add_session" => Some(self.add_session),
                "day" => Some(self.day),
                "time" => Some(self.time),
                "circle" => Some(self.circle),
                "teacher" => Some(self.teacher),
                "room" => Some(self.room),
                "session_conflict" => Some(self.session_conflict),
                "empty_day" => Some(self.empty_day),
                _ => None,
            },
            Some(("days", rest)) => self.days.get(rest),
            Some(_) => None,
        }
    }
}

/// Arabic schedules strings (default language)
pub const ARABIC_STRINGS: SchedulesStrings = SchedulesStrings {
    title: "الجداول",
    weekly_schedule: "الجدول الأسبوعي",
    add_session: "إضافة جلسة",
    day: "اليوم",
    time: "الوقت",
    circle: "الحلقة",
    teacher: "المعلم",
    room: "القاعة",
    session_conflict: "يوجد تعارض مع جلسة أخرى يوم {{day}} الساعة {{time}}",
    empty_day: "لا توجد جلسات في هذا اليوم",
    days: ScheduleDayStrings {
        sunday: "الأحد",
        monday: "الاثنين",
        tuesday: "الثلاثاء",
        wednesday: "الأربعاء",
        thursday: "الخميس",
        friday: "الجمعة",
        saturday: "السبت",
    },
};

/// English schedules strings
pub const ENGLISH_STRINGS: SchedulesStrings = SchedulesStrings {
    title: "Schedules",
    weekly_schedule: "Weekly Schedule",
    add_session: "Add Session",
    day: "Day",
    time: "Time",
    circle: "Circle",
    teacher: "Teacher",
    room: "Room",
    session_conflict: "Conflicts with another session on {{day}} at {{time}}",
    empty_day: "No sessions on this day",
    days: ScheduleDayStrings {
        sunday: "Sunday",
        monday: "Monday",
        tuesday: "Tuesday",
        wednesday: "Wednesday",
        thursday: "Thursday",
        friday: "Friday",
        saturday: "Saturday",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_in_both_languages() {
        for key in SchedulesStrings::KEYS {
            assert!(ARABIC_STRINGS.get(key).is_some(), "ar missing {}", key);
            assert!(ENGLISH_STRINGS.get(key).is_some(), "en missing {}", key);
        }
    }

    #[test]
    fn test_session_conflict_placeholders() {
        for strings in [&ARABIC_STRINGS, &ENGLISH_STRINGS] {
            assert!(strings.session_conflict.contains("{{day}}"));
            assert!(strings.session_conflict.contains("{{time}}"));
        }
    }

    #[test]
    fn test_weekday_lookup() {
        assert_eq!(ARABIC_STRINGS.get("days.friday"), Some("الجمعة"));
        assert_eq!(ENGLISH_STRINGS.get("days.friday"), Some("Friday"));
    }
}
