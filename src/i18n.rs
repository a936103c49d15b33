//! Localized UI strings.
//!
//! Lithuanian is the default page language; English is the only other one.
//! Unknown language codes are a configuration error, not a silent switch.

/// Page language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Lt,
    En,
}

impl Language {
    /// Parse a language tag by its primary subtag (`lt`, `lt-LT`, `en_US`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let primary = raw.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "lt" => Some(Self::Lt),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Lt => "lt",
            Self::En => "en",
        }
    }
}

/// Every string the loader renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    Loading,
    LoadFailed,
    NoDocuments,
    ViewDocument,
    StatusApproved,
    StatusPending,
    StatusRejected,
    StatusDraft,
    TypeThesis,
    TypeRecommendation,
    TypeVideo,
    TypeSourceCode,
}

/// Look up the text for `message` in `lang`.
#[must_use]
pub fn text(lang: Language, message: Message) -> &'static str {
    match lang {
        Language::Lt => lt(message),
        Language::En => en(message),
    }
}

fn lt(message: Message) -> &'static str {
    match message {
        Message::Loading => "Kraunama...",
        Message::LoadFailed => "Klaida kraunant dokumentus",
        Message::NoDocuments => "Nėra dokumentų",
        Message::ViewDocument => "Peržiūrėti",
        Message::StatusApproved => "Patvirtinta",
        Message::StatusPending => "Laukia",
        Message::StatusRejected => "Atmesta",
        Message::StatusDraft => "Juodraštis",
        Message::TypeThesis => "Darbas",
        Message::TypeRecommendation => "Rekomendacija",
        Message::TypeVideo => "Video",
        Message::TypeSourceCode => "Kodas",
    }
}

fn en(message: Message) -> &'static str {
    match message {
        Message::Loading => "Loading...",
        Message::LoadFailed => "Failed to load documents",
        Message::NoDocuments => "No documents",
        Message::ViewDocument => "View",
        Message::StatusApproved => "Approved",
        Message::StatusPending => "Pending",
        Message::StatusRejected => "Rejected",
        Message::StatusDraft => "Draft",
        Message::TypeThesis => "Thesis",
        Message::TypeRecommendation => "Recommendation",
        Message::TypeVideo => "Video",
        Message::TypeSourceCode => "Source code",
    }
}

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;
