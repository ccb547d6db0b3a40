//! Localized strings for the teachers management screen.

/// Form-section strings for adding and editing a teacher
#[derive(Debug, Clone)]
pub struct TeachersFormStrings {
    pub name: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub specialization: &'static str,
    pub specialization_placeholder: &'static str,

    /// Toast after saving. Placeholders: {{name}}
    pub save_success: &'static str,
}

impl TeachersFormStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "name" => Some(self.name),
            "phone" => Some(self.phone),
            "email" => Some(self.email),
            "specialization" => Some(self.specialization),
            "specialization_placeholder" => Some(self.specialization_placeholder),
            "save_success" => Some(self.save_success),
            _ => None,
        }
    }
}

/// Confirmation dialogs of the teachers screen
#[derive(Debug, Clone)]
pub struct TeachersDialogStrings {
    pub delete_title: &'static str,

    /// Placeholders: {{name}}
    pub delete_description: &'static str,
}

impl TeachersDialogStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "delete_title" => Some(self.delete_title),
            "delete_description" => Some(self.delete_description),
            _ => None,
        }
    }
}

/// Teachers screen strings
#[derive(Debug, Clone)]
pub struct TeachersStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_teacher: &'static str,
    pub edit_teacher: &'static str,

    /// Stat card label. Placeholders: {count}
    pub total_teachers: &'static str,

    pub qualification: &'static str,
    pub ijazah: &'static str,
    pub hire_date: &'static str,

    /// Circles column. Placeholders: {count}
    pub assigned_circles: &'static str,

    pub form: TeachersFormStrings,
    pub dialog: TeachersDialogStrings,
}

impl TeachersStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "add_teacher",
        "edit_teacher",
        "total_teachers",
        "qualification",
        "ijazah",
        "hire_date",
        "assigned_circles",
        "form.name",
        "form.phone",
        "form.email",
        "form.specialization",
        "form.specialization_placeholder",
        "form.save_success",
        "dialog.delete_title",
        "dialog.delete_description",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key.split_once('.') {
            None => match key {
                "title" => Some(self.title),
                "subtitle" => Some(self.subtitle),
                "add_teacher" => Some(self.add_teacher),
                "edit_teacher" => Some(self.edit_teacher),
                "total_teachers" => Some(self.total_teachers),
                "qualification" => Some(self.qualification),
                "ijazah" => Some(self.ijazah),
                "hire_date" => Some(self.hire_date),
                "assigned_circles" => Some(self.assigned_circles),
                _ => None,
            },
            Some(("form", rest)) => self.form.get(rest),
            Some(("dialog", rest)) => self.dialog.get(rest),
            Some(_) => None,
        }
    }
}

/// Arabic teachers strings (default language)
pub const ARABIC_STRINGS: TeachersStrings = TeachersStrings {
    title: "المعلمون",
    subtitle: "إدارة معلمي الحلقات ومؤهلاتهم",
    add_teacher: "إضافة معلم",
    edit_teacher: "تعديل بيانات المعلم",
    total_teachers: "إجمالي المعلمين: {count}",
    qualification: "المؤهل",
    ijazah: "الإجازة",
    hire_date: "تاريخ التعيين",
    assigned_circles: "{count} حلقة",
    form: TeachersFormStrings {
        name: "اسم المعلم",
        phone: "رقم الجوال",
        email: "البريد الإلكتروني",
        specialization: "التخصص",
        specialization_placeholder: "مثال: القراءات العشر",
        save_success: "تم حفظ بيانات المعلم {{name}}",
    },
    dialog: TeachersDialogStrings {
        delete_title: "حذف معلم",
        delete_description: "هل أنت متأكد من حذف المعلم {{name}}؟ سيتم إلغاء ارتباطه بجميع الحلقات.",
    },
};

/// English teachers strings
pub const ENGLISH_STRINGS: TeachersStrings = TeachersStrings {
    title: "Teachers",
    subtitle: "Manage circle teachers and their qualifications",
    add_teacher: "Add Teacher",
    edit_teacher: "Edit Teacher",
    total_teachers: "Total teachers: {count}",
    qualification: "Qualification",
    ijazah: "Ijazah",
    hire_date: "Hire Date",
    assigned_circles: "{count} circles",
    form: TeachersFormStrings {
        name: "Teacher Name",
        phone: "Phone Number",
        email: "Email",
        specialization: "Specialization",
        specialization_placeholder: "e.g. The Ten Qira'at",
        save_success: "Saved teacher {{name}}",
    },
    dialog: TeachersDialogStrings {
        delete_title: "Delete Teacher",
        delete_description: "Are you sure you want to delete {{name}}? They will be unassigned from all circles.",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves_in_both_languages() {
        for key in TeachersStrings::KEYS {
            assert!(ARABIC_STRINGS.get(key).is_some(), "ar missing {}", key);
            assert!(ENGLISH_STRINGS.get(key).is_some(), "en missing {}", key);
        }
    }

    #[test]
    fn test_assigned_circles_placeholder() {
        assert!(ARABIC_STRINGS.assigned_circles.contains("{count}"));
        assert!(ENGLISH_STRINGS.assigned_circles.contains("{count}"));
    }
}
