//! Localized strings for the exams screen.

/// Form-section strings for scheduling and grading an exam
#[derive(Debug, Clone)]
pub struct ExamsFormStrings {
    pub student: &'static str,
    pub exam_type: &'static str,
    pub from_surah: &'static str,
    pub to_surah: &'static str,
    pub date: &'static str,
    pub score_placeholder: &'static str,
    pub save_success: &'static str,
}

impl ExamsFormStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "student" => Some(self.student),
            "exam_type" => Some(self.exam_type),
            "from_surah" => Some(self.from_surah),
            "to_surah" => Some(self.to_surah),
            "date" => Some(self.date),
            "score_placeholder" => Some(self.score_placeholder),
            "save_success" => Some(self.save_success),
            _ => None,
        }
    }
}

/// Aggregate statistics shown above the exams table
#[derive(Debug, Clone)]
pub struct ExamsSummaryStrings {
    /// Placeholders: {score}
    pub average_score: &'static str,

    /// Placeholders: {rate}
    pub pass_rate: &'static str,
}

impl ExamsSummaryStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "average_score" => Some(self.average_score),
            "pass_rate" => Some(self.pass_rate),
            _ => None,
        }
    }
}

/// Exams screen strings
#[derive(Debug, Clone)]
pub struct ExamsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_exam: &'static str,

    pub type_memorization: &'static str,
    pub type_revision: &'static str,
    pub type_final: &'static str,

    pub score: &'static str,
    pub max_score: &'static str,
    pub passing_score: &'static str,
    pub result_pass: &'static str,
    pub result_fail: &'static str,
    pub scheduled_for: &'static str,
    pub graded_by: &'static str,

    pub form: ExamsFormStrings,
    pub summary: ExamsSummaryStrings,
}

impl ExamsStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "add_exam",
        "type_memorization",
        "type_revision",
        "type_final",
        "score",
        "max_score",
        "passing_score",
        "result_pass",
        "result_fail",
        "scheduled_for",
        "graded_by",
        "form.student",
        "form.exam_type",
        "form.from_surah",
        "form.to_surah",
        "form.date",
        "form.score_placeholder",
        "form.save_success",
        "summary.average_score",
        "summary.pass_rate",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key.split_once('.') {
            None => match key {
                "title" => Some(self.title),
                "subtitle" => Some(self.subtitle),
                "add_exam" => Some(self.add_exam),
                "type_memorization" => Some(self.type_memorization),
                "type_revision" => Some(self.type_revision),
                "type_final" => Some(self.type_final),
                "score" => Some(self.score),
                "max_score" => Some(self.max_score),
                "passing_score" => Some(self.passing_score),
                "result_pass" => Some(self.result_pass),
                "result_fail" => Some(self.result_fail),
                "scheduled_for" => Some(self.scheduled_for),
                "graded_by" => Some(self.graded_by),
                _ => None,
            },
            Some(("form", rest)) => self.form.get(rest),
            Some(("summary", rest)) => self.summary.get(rest),
            Some(_) => None,
        }
    }
}

/// Arabic exams strings (default language)
pub const ARABIC_STRINGS: ExamsStrings = ExamsStrings {
    title: "الاختبارات",
    subtitle: "جدولة اختبارات الحفظ والمراجعة وتسجيل النتائج",
    add_exam: "إضافة اختبار",
    type_memorization: "اختبار حفظ",
    type_revision: "اختبار مراجعة",
    type_final: "اختبار نهائي",
    score: "الدرجة",
    max_score: "الدرجة العظمى",
    passing_score: "درجة النجاح",
    result_pass: "ناجح",
    result_fail: "راسب",
    scheduled_for: "موعد الاختبار",
    graded_by: "المقيّم",
    form: ExamsFormStrings {
        student: "الطالب",
        exam_type: "نوع الاختبار",
        from_surah: "من سورة",
        to_surah: "إلى سورة",
        date: "التاريخ",
        score_placeholder: "أدخل الدرجة من 100",
        save_success: "تم حفظ نتيجة الاختبار",
    },
    summary: ExamsSummaryStrings {
        average_score: "متوسط الدرجات: {score}",
        pass_rate: "نسبة النجاح: {rate}",
    },
};

/// English exams strings
pub const ENGLISH_STRINGS: ExamsStrings = ExamsStrings {
    title: "Exams",
    subtitle: "Schedule memorization and revision exams and record results",
    add_exam: "Add Exam",
    type_memorization: "Memorization Exam",
    type_revision: "Revision Exam",
    type_final: "Final Exam",
    score: "Score",
    max_score: "Maximum Score",
    passing_score: "Passing Score",
    result_pass: "Pass",
    result_fail: "Fail",
    scheduled_for: "Scheduled For",
    graded_by: "Graded By",
    form: ExamsFormStrings {
        student: "Student",
        exam_type: "Exam Type",
        from_surah: "From Surah",
        to_surah: "To Surah",
        date: "Date",
        score_placeholder: "Enter a score out of 100",
        save_success: "Exam result saved",
    },
    summary: ExamsSummaryStrings {
        average_score: "Average score: {score}",
        pass_rate: "Pass rate: {rate}",
    },
};
