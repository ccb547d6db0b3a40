//! Localized strings for the daily attendance screen.

/// Attendance screen strings
#[derive(Debug, Clone)]
pub struct AttendanceStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub select_date: &'static str,
    pub select_circle: &'static str,
    pub mark_all_present: &'static str,

    pub present: &'static str,
    pub absent: &'static str,
    pub late: &'static str,
    pub excused: &'static str,

    pub attendance_rate: &'static str,

    /// Day summary line. Placeholders: {present}, {total}
    pub daily_summary: &'static str,

    pub saved: &'static str,
    pub no_students: &'static str,
}

impl AttendanceStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "select_date",
        "select_circle",
        "mark_all_present",
        "present",
        "absent",
        "late",
        "excused",
        "attendance_rate",
        "daily_summary",
        "saved",
        "no_students",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "title" => Some(self.title),
            "subtitle" => Some(self.subtitle),
            "select_date" => Some(self.select_date),
            "select_circle" => Some(self.select_circle),
            "mark_all_present" => Some(self.mark_all_present),
            "present" => Some(self.present),
            "absent" => Some(self.absent),
            "late" => Some(self.late),
            "excused" => Some(self.excused),
            "attendance_rate" => Some(self.attendance_rate),
            "daily_summary" => Some(self.daily_summary),
            "saved" => Some(self.saved),
            "no_students" => Some(self.no_students),
            _ => None,
        }
    }
}

/// Arabic attendance strings (default language)
pub const ARABIC_STRINGS: AttendanceStrings = AttendanceStrings {
    title: "الحضور والغياب",
    subtitle: "تسجيل حضور الطلاب اليومي حسب الحلقة",
    select_date: "اختر التاريخ",
    select_circle: "اختر الحلقة",
    mark_all_present: "تحديد الجميع حاضرين",
    present: "حاضر",
    absent: "غائب",
    late: "متأخر",
    excused: "مستأذن",
    attendance_rate: "نسبة الحضور",
    daily_summary: "حضر {present} من أصل {total}",
    saved: "تم حفظ سجل الحضور",
    no_students: "لا يوجد طلاب في هذه الحلقة",
};

/// English attendance strings
pub const ENGLISH_STRINGS: AttendanceStrings = AttendanceStrings {
    title: "Attendance",
    subtitle: "Record daily student attendance by circle",
    select_date: "Select date",
    select_circle: "Select circle",
    mark_all_present: "Mark all present",
    present: "Present",
    absent: "Absent",
    late: "Late",
    excused: "Excused",
    attendance_rate: "Attendance rate",
    daily_summary: "{present} of {total} present",
    saved: "Attendance record saved",
    no_students: "No students in this circle",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_in_both_languages() {
        for key in AttendanceStrings::KEYS {
            assert!(ARABIC_STRINGS.get(key).is_some(), "ar missing {}", key);
            assert!(ENGLISH_STRINGS.get(key).is_some(), "en missing {}", key);
        }
    }

    #[test]
    fn test_daily_summary_placeholders() {
        for strings in [&ARABIC_STRINGS, &ENGLISH_STRINGS] {
            assert!(strings.daily_summary.contains("{present}"));
            assert!(strings.daily_summary.contains("{total}"));
        }
    }
}
