use serde::{Deserialize, Serialize};

/// One displayable unit within a deck.
///
/// The document carries a string `type` tag. The tag is resolved here,
/// at parse time, so every downstream consumer dispatches on a closed
/// enum instead of re-checking strings per render. An unrecognized or
/// absent tag folds into `Content`.
///
/// Every field on every variant is optional by contract: a missing
/// headline, bullet list, or note means "render nothing for that
/// element", never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Slide {
    Title(TitleSlide),
    Section(SectionSlide),
    Content(ContentSlide),
    BeforeAfter(BeforeAfterSlide),
    Closing(ClosingSlide),
}

/// Slide variant discriminant, for listings and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideKind {
    Title,
    Section,
    Content,
    BeforeAfter,
    Closing,
}

impl SlideKind {
    /// Tag string as it appears in deck documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Section => "section",
            SlideKind::Content => "content",
            SlideKind::BeforeAfter => "beforeAfter",
            SlideKind::Closing => "closing",
        }
    }
}

/// Opening hero slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TitleSlide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Divider slide between chapters; never carries bullets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionSlide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Standard body slide, the fallback for unknown tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContentSlide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Two-column comparison. An absent side is still rendered as a panel
/// with a fallback title and an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BeforeAfterSlide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<ComparePanel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<ComparePanel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Final slide.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClosingSlide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One side of a before/after comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparePanel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
}

impl Slide {
    pub fn kind(&self) -> SlideKind {
        match self {
            Slide::Title(_) => SlideKind::Title,
            Slide::Section(_) => SlideKind::Section,
            Slide::Content(_) => SlideKind::Content,
            Slide::BeforeAfter(_) => SlideKind::BeforeAfter,
            Slide::Closing(_) => SlideKind::Closing,
        }
    }

    pub fn headline(&self) -> Option<&str> {
        match self {
            Slide::Title(s) => s.headline.as_deref(),
            Slide::Section(s) => s.headline.as_deref(),
            Slide::Content(s) => s.headline.as_deref(),
            Slide::BeforeAfter(s) => s.headline.as_deref(),
            Slide::Closing(s) => s.headline.as_deref(),
        }
    }

    /// Speaker annotation: presenter-only channel, never body text.
    pub fn note(&self) -> Option<&str> {
        match self {
            Slide::Title(s) => s.note.as_deref(),
            Slide::Section(s) => s.note.as_deref(),
            Slide::Content(s) => s.note.as_deref(),
            Slide::BeforeAfter(s) => s.note.as_deref(),
            Slide::Closing(s) => s.note.as_deref(),
        }
    }
}

impl<'de> Deserialize<'de> for Slide {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawSlide::deserialize(deserializer)?;
        Ok(raw.into())
    }
}

/// Wire shape of a slide before the tag is resolved. Unknown keys are
/// ignored so author tooling can carry extra annotations.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSlide {
    #[serde(rename = "type")]
    kind: Option<String>,
    headline: Option<String>,
    subheadline: Option<String>,
    bullets: Vec<String>,
    note: Option<String>,
    left: Option<ComparePanel>,
    right: Option<ComparePanel>,
}

impl From<RawSlide> for Slide {
    fn from(raw: RawSlide) -> Self {
        match raw.kind.as_deref() {
            Some("title") => Slide::Title(TitleSlide {
                headline: raw.headline,
                subheadline: raw.subheadline,
                bullets: raw.bullets,
                note: raw.note,
            }),
            Some("section") => Slide::Section(SectionSlide {
                headline: raw.headline,
                subheadline: raw.subheadline,
                note: raw.note,
            }),
            Some("beforeAfter") => Slide::BeforeAfter(BeforeAfterSlide {
                headline: raw.headline,
                subheadline: raw.subheadline,
                left: raw.left,
                right: raw.right,
                note: raw.note,
            }),
            Some("closing") => Slide::Closing(ClosingSlide {
                headline: raw.headline,
                subheadline: raw.subheadline,
                bullets: raw.bullets,
                note: raw.note,
            }),
            // "content", unknown tags, and missing tags all land here
            _ => Slide::Content(ContentSlide {
                headline: raw.headline,
                subheadline: raw.subheadline,
                bullets: raw.bullets,
                note: raw.note,
            }),
        }
    }
}
