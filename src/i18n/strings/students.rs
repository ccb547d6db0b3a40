//! Localized strings for the students management screen.

// ==================== Form Section ====================

/// Form-section strings for adding and editing a student
#[derive(Debug, Clone)]
pub struct StudentsFormStrings {
    pub name: &'static str,
    pub name_placeholder: &'static str,
    pub birth_date: &'static str,
    pub circle: &'static str,
    pub level: &'static str,
    pub guardian_name: &'static str,
    pub guardian_phone: &'static str,
    pub notes: &'static str,

    /// Toast after saving. Placeholders: {{name}}
    pub save_success: &'static str,
}

impl StudentsFormStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "name" => Some(self.name),
            "name_placeholder" => Some(self.name_placeholder),
            "birth_date" => Some(self.birth_date),
            "circle" => Some(self.circle),
            "level" => Some(self.level),
            "guardian_name" => Some(self.guardian_name),
            "guardian_phone" => Some(self.guardian_phone),
            "notes" => Some(self.notes),
            "save_success" => Some(self.save_success),
            _ => None,
        }
    }
}

// ==================== Table Section ====================

/// Column headers and empty state of the students table
#[derive(Debug, Clone)]
pub struct StudentsTableStrings {
    pub name: &'static str,
    pub circle: &'static str,
    pub level: &'static str,
    pub attendance_rate: &'static str,
    pub last_exam: &'static str,
    pub empty: &'static str,
}

impl StudentsTableStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "name" => Some(self.name),
            "circle" => Some(self.circle),
            "level" => Some(self.level),
            "attendance_rate" => Some(self.attendance_rate),
            "last_exam" => Some(self.last_exam),
            "empty" => Some(self.empty),
            _ => None,
        }
    }
}

// ==================== Dialog Section ====================

/// Confirmation dialogs of the students screen
#[derive(Debug, Clone)]
pub struct StudentsDialogStrings {
    pub delete_title: &'static str,

    /// Placeholders: {{name}}
    pub delete_description: &'static str,
}

impl StudentsDialogStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "delete_title" => Some(self.delete_title),
            "delete_description" => Some(self.delete_description),
            _ => None,
        }
    }
}

// ==================== Screen ====================

/// Students screen strings
#[derive(Debug, Clone)]
pub struct StudentsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_student: &'static str,
    pub edit_student: &'static str,

    /// Stat card label. Placeholders: {count}
    pub total_students: &'static str,

    pub memorization_level: &'static str,
    pub current_surah: &'static str,
    pub enrollment_date: &'static str,
    pub status_active: &'static str,
    pub status_suspended: &'static str,

    pub form: StudentsFormStrings,
    pub table: StudentsTableStrings,
    pub dialog: StudentsDialogStrings,
}

impl StudentsStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "add_student",
        "edit_student",
        "total_students",
        "memorization_level",
        "current_surah",
        "enrollment_date",
        "status_active",
        "status_suspended",
        "form.name",
        "form.name_placeholder",
        "form.birth_date",
        "form.circle",
        "form.level",
        "form.guardian_name",
        "form.guardian_phone",
        "form.notes",
        "form.save_success",
        "table.name",
        "table.circle",
        "table.level",
        "table.attendance_rate",
        "table.last_exam",
        "table.empty",
        "dialog.delete_title",
        "dialog.delete_description",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key.split_once('.') {
            None => match key {
                "title" => Some(self.title),
                "subtitle" => Some(self.subtitle),
                "add_student" => Some(self.add_student),
                "edit_student" => Some(self.edit_student),
                "total_students" => Some(self.total_students),
                "memorization_level" => Some(self.memorization_level),
                "current_surah" => Some(self.current_surah),
                "enrollment_date" => Some(self.enrollment_date),
                "status_active" => Some(self.status_active),
                "status_suspended" => Some(self.status_suspended),
                _ => None,
            },
            Some(("form", rest)) => self.form.get(rest),
            Some(("table", rest)) => self.table.get(rest),
            Some(("dialog", rest)) => self.dialog.get(rest),
            Some(_) => None,
        }
    }
}

/// Arabic students strings (default language)
pub const ARABIC_STRINGS: StudentsStrings = StudentsStrings {
    title: "الطلاب",
    subtitle: "إدارة طلاب الحلقات ومتابعة مستوياتهم",
    add_student: "إضافة طالب",
    edit_student: "تعديل بيانات الطالب",
    total_students: "إجمالي الطلاب: {count}",
    memorization_level: "مستوى الحفظ",
    current_surah: "السورة الحالية",
    enrollment_date: "تاريخ الالتحاق",
    status_active: "نشط",
    status_suspended: "موقوف",
    form: StudentsFormStrings {
        name: "اسم الطالب",
        name_placeholder: "أدخل الاسم الثلاثي",
        birth_date: "تاريخ الميلاد",
        circle: "الحلقة",
        level: "المستوى",
        guardian_name: "اسم ولي الأمر",
        guardian_phone: "جوال ولي الأمر",
        notes: "ملاحظات",
        save_success: "تم حفظ بيانات الطالب {{name}}",
    },
    table: StudentsTableStrings {
        name: "الاسم",
        circle: "الحلقة",
        level: "المستوى",
        attendance_rate: "نسبة الحضور",
        last_exam: "آخر اختبار",
        empty: "لا يوجد طلاب مسجلون بعد",
    },
    dialog: StudentsDialogStrings {
        delete_title: "حذف طالب",
        delete_description: "هل أنت متأكد من حذف الطالب {{name}}؟ لا يمكن التراجع عن هذا الإجراء.",
    },
};

/// English students strings
pub const ENGLISH_STRINGS: StudentsStrings = StudentsStrings {
    title: "Students",
    subtitle: "Manage circle students and track their progress",
    add_student: "Add Student",
    edit_student: "Edit Student",
    total_students: "Total students: {count}",
    memorization_level: "Memorization Level",
    current_surah: "Current Surah",
    enrollment_date: "Enrollment Date",
    status_active: "Active",
    status_suspended: "Suspended",
    form: StudentsFormStrings {
        name: "Student Name",
        name_placeholder: "Enter the full name",
        birth_date: "Birth Date",
        circle: "Circle",
        level: "Level",
        guardian_name: "Guardian Name",
        guardian_phone: "Guardian Phone",
        notes: "Notes",
        save_success: "Saved student {{name}}",
    },
    table: StudentsTableStrings {
        name: "Name",
        circle: "Circle",
        level: "Level",
        attendance_rate: "Attendance Rate",
        last_exam: "Last Exam",
        empty: "No students enrolled yet",
    },
    dialog: StudentsDialogStrings {
        delete_title: "Delete Student",
        delete_description: "Are you sure you want to delete {{name}}? This action cannot be undone.",
    },
};
