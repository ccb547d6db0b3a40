//! Localized strings for the Quran circles management screen.

/// Form-section strings for creating and editing a circle
#[derive(Debug, Clone)]
pub struct CirclesFormStrings {
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub teacher: &'static str,
    pub capacity: &'static str,
    pub period: &'static str,
    pub save_success: &'static str,
}

impl CirclesFormStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "name" => Some(self.name),
            "name_placeholder" => Some(self.name_placeholder),
            "teacher" => Some(self.teacher),
            "capacity" => Some(self.capacity),
            "period" => Some(self.period),
            "save_success" => Some(self.save_success),
            _ => None,
        }
    }
}

/// Circles screen strings
#[derive(Debug, Clone)]
pub struct CirclesStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_circle: &'static str,
    pub edit_circle: &'static str,

    pub period_morning: &'static str,
    pub period_evening: &'static str,

    /// Occupancy badge. Placeholders: {enrolled}, {capacity}
    pub occupancy: &'static str,

    pub students_in_circle: &'static str,
    pub no_teacher_assigned: &'static str,
    pub empty: &'static str,

    pub form: CirclesFormStrings,
}

impl CirclesStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "add_circle",
        "edit_circle",
        "period_morning",
        "period_evening",
        "occupancy",
        "students_in_circle",
        "no_teacher_assigned",
        "empty",
        "form.name",
        "form.name_placeholder",
        "form.teacher",
        "form.capacity",
        "form.period",
        "form.save_success",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key.split_once('.') {
            None => match key {
                "title" => Some(self.title),
                "subtitle" => Some(self.subtitle),
                "add_circle" => Some(self.add_circle),
                "edit_circle" => Some(self.edit_circle),
                "period_morning" => Some(self.period_morning),
                "period_evening" => Some(self.period_evening),
                "occupancy" => Some(self.occupancy),
                "students_in_circle" => Some(self.students_in_circle),
                "no_teacher_assigned" => Some(self.no_teacher_assigned),
                "empty" => Some(self.empty),
                _ => None,
            },
            Some(("form", rest)) => self.form.get(rest),
            Some(_) => None,
        }
    }
}

/// Arabic circles strings (default language)
pub const ARABIC_STRINGS: CirclesStrings = CirclesStrings {
    title: "الحلقات",
    subtitle: "إدارة حلقات التحفيظ وتوزيع الطلاب",
    add_circle: "إضافة حلقة",
    edit_circle: "تعديل الحلقة",
    period_morning: "الفترة الصباحية",
    period_evening: "الفترة المسائية",
    occupancy: "{enrolled} من {capacity} طالب",
    students_in_circle: "طلاب الحلقة",
    no_teacher_assigned: "لم يُعيَّن معلم بعد",
    empty: "لا توجد حلقات",
    form: CirclesFormStrings {
        name: "اسم الحلقة",
        name_placeholder: "مثال: حلقة الإمام عاصم",
        teacher: "المعلم",
        capacity: "السعة",
        period: "الفترة",
        save_success: "تم حفظ الحلقة",
    },
};

/// English circles strings
pub const ENGLISH_STRINGS: CirclesStrings = CirclesStrings {
    title: "Quran Circles",
    subtitle: "Manage memorization circles and student placement",
    add_circle: "Add Circle",
    edit_circle: "Edit Circle",
    period_morning: "Morning Period",
    period_evening: "Evening Period",
    occupancy: "{enrolled} of {capacity} students",
    students_in_circle: "Circle Students",
    no_teacher_assigned: "No teacher assigned yet",
    empty: "No circles",
    form: CirclesFormStrings {
        name: "Circle Name",
        name_placeholder: "e.g. Imam Asim Circle",
        teacher: "Teacher",
        capacity: "Capacity",
        period: "Period",
        save_success: "Circle saved",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_in_both_languages() {
        for key in CirclesStrings::KEYS {
            assert!(ARABIC_STRINGS.get(key).is_some(), "ar missing {}", key);
            assert!(ENGLISH_STRINGS.get(key).is_some(), "en missing {}", key);
        }
    }

    #[test]
    fn test_occupancy_placeholders() {
        for strings in [&ARABIC_STRINGS, &ENGLISH_STRINGS] {
            assert!(strings.occupancy.contains("{enrolled}"));
            assert!(strings.occupancy.contains("{capacity}"));
        }
    }
}
