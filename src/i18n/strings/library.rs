//! Localized strings for the resource library screen.

/// Library screen strings
#[derive(Debug, Clone)]
pub struct LibraryStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_resource: &'static str,

    pub type_book: &'static str,
    pub type_audio: &'static str,
    pub type_video: &'static str,

    pub author: &'static str,
    pub reciter: &'static str,
    pub category: &'static str,
    pub download: &'static str,
    pub preview: &'static str,

    /// Placeholders: {count}
    pub total_resources: &'static str,

    pub search_placeholder: &'static str,
    pub empty: &'static str,
}

impl LibraryStrings {
    /// Flattened dotted keys of every leaf in this domain.
    pub const KEYS: &'static [&'static str] = &[
        "title",
        "subtitle",
        "add_resource",
        "type_book",
        "type_audio",
        "type_video",
        "author",
        "reciter",
        "category",
        "download",
        "preview",
        "total_resources",
        "search_placeholder",
        "empty",
    ];

    /// Resolve a dotted key by explicit structural traversal.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        match key {
            "title" => Some(self.title),
            "subtitle" => Some(self.subtitle),
            "add_resource" => Some(self.add_resource),
            "type_book" => Some(self.type_book),
            "type_audio" => Some(self.type_audio),
            "type_video" => Some(self.type_video),
            "author" => Some(self.author),
            "reciter" => Some(self.reciter),
            "category" => Some(self.category),
            "download" => Some(self.download),
            "preview" => Some(self.preview),
            "total_resources" => Some(self.total_resources),
            "search_placeholder" => Some(self.search_placeholder),
            "empty" => Some(self.empty),
            _ => None,
        }
    }
}

/// Arabic library strings (default language)
pub const ARABIC_STRINGS: LibraryStrings = LibraryStrings {
    title: "المكتبة",
    subtitle: "مصادر تعليمية للطلاب والمعلمين",
    add_resource: "إضافة مصدر",
    type_book: "كتاب",
    type_audio: "تسجيل صوتي",
    type_video: "مقطع مرئي",
    author: "المؤلف",
    reciter: "القارئ",
    category: "التصنيف",
    download: "تحميل",
    preview: "معاينة",
    total_resources: "عدد المصادر: {count}",
    search_placeholder: "ابحث عن كتاب أو تسجيل...",
    empty: "لا توجد مصادر في المكتبة بعد",
};

/// English library strings
pub const ENGLISH_STRINGS: LibraryStrings = LibraryStrings {
    title: "Library",
    subtitle: "Educational resources for students and teachers",
    add_resource: "Add Resource",
    type_book: "Book",
    type_audio: "Audio Recording",
    type_video: "Video",
    author: "Author",
    reciter: "Reciter",
    category: "Category",
    download: "Download",
    preview: "Preview",
    total_resources: "Total resources: {count}",
    search_placeholder: "Search for a book or recording...",
    empty: "No resources in the library yet",
};
