//! Localized strings for the announcements screen.

/// Form-section strings for composing an announcement
#[derive(Debug, Clone)]
pub struct AnnouncementsFormStrings {
    pub title_label: &'static str,
    pub body: &'static str,
    pub publish_date: &'static str,
    pub audience: &'static str,
    pub save_success: &'static str,
}

impl AnnouncementsFormStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "title_label" => Some(self.title_label),
            "body" => Some(self.body),
            "publish_date" => Some(self.publish_date),
            "audience" => Some(self.audience),
            "save_success" => Some(self.save_success),
            _ => None,
        }
    }
}

/// Confirmation dialogs of the announcements screen
#[derive(Debug, Clone)]
pub struct AnnouncementsDialogStrings {
    pub delete_title: &'static str,

    /// Placeholders: {{title}}
    pub delete_description: &'static str,

    pub publish_confirm: &'static str,
}

impl AnnouncementsDialogStrings {
    fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "delete_title" => Some(self.delete_title),
            "delete_description" => Some(self.delete_description),
            "publish_confirm" => Some(self.publish_confirm),
            _ => None,
        }
    }
}

/// Announcements screen strings
#[derive(Debug, Clone)]
pub struct AnnouncementsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_announcement: &'static str,
    pub edit_announcement: &'static str,
    pub pinned: &'static str,
    pub published_on: &'static str,

    pub audience_all: &'static str,
    pub audience_teachers: &'static str,
    pub audience_guardians: &'static str,

    pub form: AnnouncementsFormStrings,
    pub dialog: AnnouncementsDialogStrings,
}

impl AnnouncementsStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "add_announcement",
        "edit_announcement",
        "pinned",
        "published_on",
        "audience_all",
        "audience_teachers",
        "audience_guardians",
        "form.title_label",
        "form.body",
        "form.publish_date",
        "form.audience",
        "form.save_success",
        "dialog.delete_title",
        "dialog.delete_description",
        "dialog.publish_confirm",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key.split_once('.') {
            None => match key {
                "title" => Some(self.title),
                "subtitle" => Some(self.subtitle),
                "add_announcement" => Some(self.add_announcement),
                "edit_announcement" => Some(self.edit_announcement),
                "pinned" => Some(self.pinned),
                "published_on" => Some(self.published_on),
                "audience_all" => Some(self.audience_all),
                "audience_teachers" => Some(self.audience_teachers),
                "audience_guardians" => Some(self.audience_guardians),
                _ => None,
            },
            Some(("form", rest)) => self.form.get(rest),
            Some(("dialog", rest)) => self.dialog.get(rest),
            Some(_) => None,
        }
    }
}

/// Arabic announcements strings (default language)
pub const ARABIC_STRINGS: AnnouncementsStrings = AnnouncementsStrings {
    title: "الإعلانات",
    subtitle: "نشر التعاميم والأخبار لمنسوبي المركز",
    add_announcement: "إضافة إعلان",
    edit_announcement: "تعديل الإعلان",
    pinned: "مثبّت",
    published_on: "تاريخ النشر",
    audience_all: "الجميع",
    audience_teachers: "المعلمون",
    audience_guardians: "أولياء الأمور",
    form: AnnouncementsFormStrings {
        title_label: "عنوان الإعلان",
        body: "نص الإعلان",
        publish_date: "تاريخ النشر",
        audience: "الفئة المستهدفة",
        save_success: "تم نشر الإعلان",
    },
    dialog: AnnouncementsDialogStrings {
        delete_title: "حذف إعلان",
        delete_description: "هل أنت متأكد من حذف الإعلان \"{{title}}\"؟",
        publish_confirm: "هل تريد نشر هذا الإعلان الآن؟",
    },
};

/// English announcements strings
pub const ENGLISH_STRINGS: AnnouncementsStrings = AnnouncementsStrings {
    title: "Announcements",
    subtitle: "Publish circulars and news for the center's community",
    add_announcement: "Add Announcement",
    edit_announcement: "Edit Announcement",
    pinned: "Pinned",
    published_on: "Published On",
    audience_all: "Everyone",
    audience_teachers: "Teachers",
    audience_guardians: "Guardians",
    form: AnnouncementsFormStrings {
        title_label: "Announcement Title",
        body: "Announcement Body",
        publish_date: "Publish Date",
        audience: "Audience",
        save_success: "Announcement published",
    },
    dialog: AnnouncementsDialogStrings {
        delete_title: "Delete Announcement",
        delete_description: "Are you sure you want to delete \"{{title}}\"?",
        publish_confirm: "Publish this announcement now?",
    },
};
