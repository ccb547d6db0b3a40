//! Localized strings for the settings screen.

/// Settings screen strings
#[derive(Debug, Clone)]
pub struct SettingsStrings {
    pub title: &'static str,
    pub general: &'static str,
    pub center_name: &'static str,
    pub language_label: &'static str,
    pub language_arabic: &'static str,
    pub language_english: &'static str,
    pub academic_year: &'static str,
    pub term_start: &'static str,
    pub term_end: &'static str,
    pub notifications: &'static str,
    pub enable_notifications: &'static str,
    pub theme: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub saved: &'static str,
}

impl SettingsStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "general",
        "center_name",
        "language_label",
        "language_arabic",
        "language_english",
        "academic_year",
        "term_start",
        "term_end",
        "notifications",
        "enable_notifications",
        "theme",
        "theme_light",
        "theme_dark",
        "saved",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "title" => Some(self.title),
            "general" => Some(self.general),
            "center_name" => Some(self.center_name),
            "language_label" => Some(self.language_label),
            "language_arabic" => Some(self.language_arabic),
            "language_english" => Some(self.language_english),
            "academic_year" => Some(self.academic_year),
            "term_start" => Some(self.term_start),
            "term_end" => Some(self.term_end),
            "notifications" => Some(self.notifications),
            "enable_notifications" => Some(self.enable_notifications),
            "theme" => Some(self.theme),
            "theme_light" => Some(self.theme_light),
            "theme_dark" => Some(self.theme_dark),
            "saved" => Some(self.saved),
            _ => None,
        }
    }
}

/// Arabic settings strings (default language)
pub const ARABIC_STRINGS: SettingsStrings = SettingsStrings {
    title: "الإعدادات",
    general: "عام",
    center_name: "اسم المركز",
    language_label: "لغة الواجهة",
    language_arabic: "العربية",
    language_english: "English",
    academic_year: "العام الدراسي",
    term_start: "بداية الفصل",
    term_end: "نهاية الفصل",
    notifications: "الإشعارات",
    enable_notifications: "تفعيل الإشعارات",
    theme: "المظهر",
    theme_light: "فاتح",
    theme_dark: "داكن",
    saved: "تم حفظ الإعدادات",
};

/// English settings strings
pub const ENGLISH_STRINGS: SettingsStrings = SettingsStrings {
    title: "Settings",
    general: "General",
    center_name: "Center Name",
    language_label: "Interface Language",
    language_arabic: "العربية",
    language_english: "English",
    academic_year: "Academic Year",
    term_start: "Term Start",
    term_end: "Term End",
    notifications: "Notifications",
    enable_notifications: "Enable notifications",
    theme: "Theme",
    theme_light: "Light",
    theme_dark: "Dark",
    saved: "Settings saved",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_in_both_languages() {
        for key in SettingsStrings::KEYS {
            assert!(ARABIC_STRINGS.get(key).is_some(), "ar missing {}", key);
            assert!(ENGLISH_STRINGS.get(key).is_some(), "en missing {}", key);
        }
    }

    #[test]
    fn test_language_options_are_native_names_in_both() {
        // The language picker shows native names regardless of UI language
        assert_eq!(ARABIC_STRINGS.language_arabic, ENGLISH_STRINGS.language_arabic);
        assert_eq!(ARABIC_STRINGS.language_english, ENGLISH_STRINGS.language_english);
    }
}
