//! Shared UI strings used across every screen of the admin panel.

/// Common strings shared by all feature areas
#[derive(Debug, Clone)]
pub struct CommonStrings {
    /// Application name shown in the header and window title
    pub app_name: &'static str,

    pub loading: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub edit: &'static str,
    pub add: &'static str,
    pub search: &'static str,
    pub filter: &'static str,
    pub actions: &'static str,
    pub confirm: &'static str,
    pub back: &'static str,
    pub next: &'static str,
    pub previous: &'static str,
    pub close: &'static str,
    pub yes: &'static str,
    pub no: &'static str,

    /// Shown when a table or list has nothing to display
    pub no_results: &'static str,

    /// Generic validation message for a required form field
    pub required_field: &'static str,

    /// Generic failure toast
    pub error_generic: &'static str,

    /// Generic success toast
    pub success_generic: &'static str,

    /// Pagination indicator. Placeholders: {current}, {total}
    pub page_indicator: &'static str,

    /// Bulk-selection counter. Placeholders: {count}
    pub selected_count: &'static str,
}

impl CommonStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "app_name",
        "loading",
        "save",
        "cancel",
        "delete",
        "edit",
        "add",
        "search",
        "filter",
        "actions",
        "confirm",
        "back",
        "next",
        "previous",
        "close",
        "yes",
        "no",
        "no_results",
        "required_field",
        "error_generic",
        "success_generic",
        "page_indicator",
        "selected_count",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "app_name" => Some(self.app_name),
            "loading" => Some(self.loading),
            "save" => Some(self.save),
            "cancel" => Some(self.cancel),
            "delete" => Some(self.delete),
            "edit" => Some(self.edit),
            "add" => Some(self.add),
            "search" => Some(self.search),
            "filter" => Some(self.filter),
            "actions" => Some(self.actions),
            "confirm" => Some(self.confirm),
            "back" => Some(self.back),
            "next" => Some(self.next),
            "previous" => Some(self.previous),
            "close" => Some(self.close),
            "yes" => Some(self.yes),
            "no" => Some(self.no),
            "no_results" => Some(self.no_results),
            "required_field" => Some(self.required_field),
            "error_generic" => Some(self.error_generic),
            "success_generic" => Some(self.success_generic),
            "page_indicator" => Some(self.page_indicator),
            "selected_count" => Some(self.selected_count),
            _ => None,
        }
    }
}

/// Arabic common strings (default language)
pub const ARABIC_STRINGS: CommonStrings = CommonStrings {
    app_name: "مركز تحفيظ القرآن الكريم",
    loading: "جارٍ التحميل...",
    save: "حفظ",
    cancel: "إلغاء",
    delete: "حذف",
    edit: "تعديل",
    add: "إضافة",
    search: "بحث",
    filter: "تصفية",
    actions: "إجراءات",
    confirm: "تأكيد",
    back: "رجوع",
    next: "التالي",
    previous: "السابق",
    close: "إغلاق",
    yes: "نعم",
    no: "لا",
    no_results: "لا توجد نتائج",
    required_field: "هذا الحقل مطلوب",
    error_generic: "حدث خطأ، حاول مرة أخرى",
    success_generic: "تمت العملية بنجاح",
    page_indicator: "صفحة {current} من {total}",
    selected_count: "تم تحديد {count}",
};

/// English common strings
pub const ENGLISH_STRINGS: CommonStrings = CommonStrings {
    app_name: "Quran Memorization Center",
    loading: "Loading...",
    save: "Save",
    cancel: "Cancel",
    delete: "Delete",
    edit: "Edit",
    add: "Add",
    search: "Search",
    filter: "Filter",
    actions: "Actions",
    confirm: "Confirm",
    back: "Back",
    next: "Next",
    previous: "Previous",
    close: "Close",
    yes: "Yes",
    no: "No",
    no_results: "No results found",
    required_field: "This field is required",
    error_generic: "Something went wrong, please try again",
    success_generic: "Operation completed successfully",
    page_indicator: "Page {current} of {total}",
    selected_count: "{count} selected",
};
