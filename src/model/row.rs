//! Content row types.
//!
//! A [`ContentRow`] is one line of the uploaded structured file describing a
//! single renderable element. The wire field names are the backend's Spanish
//! column names; they are mapped to English struct fields with serde renames.

use serde::{Deserialize, Serialize};

/// One row of blog content as delivered by the backend.
///
/// Rows arrive pre-sorted by intended display order. All fields except the
/// publication number may be absent; a missing date suppresses the
/// publication header only, never the content block itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRow {
    /// Day of the month (e.g., 21).
    #[serde(rename = "dia", default)]
    pub day: Option<i64>,

    /// Month name as written in the source file (e.g., "Octubre").
    #[serde(rename = "mes", default)]
    pub month: Option<String>,

    /// Four-digit year.
    #[serde(rename = "ano", default)]
    pub year: Option<i64>,

    /// Publication this row belongs to.
    #[serde(rename = "numero_publicacion", default)]
    pub publication: i64,

    /// Raw content type code (T, ST, P, I, or anything else).
    #[serde(rename = "tipo_contenido", default)]
    pub content_type: Option<String>,

    /// Text content, or the image URL for image rows.
    #[serde(rename = "contenido", default)]
    pub content: Option<String>,

    /// Free-text style string, passed through to the renderer verbatim.
    #[serde(rename = "estilo", default)]
    pub style: Option<String>,
}

impl ContentRow {
    /// Create a row with the given publication, type code, and content.
    pub fn new(publication: i64, content_type: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            day: None,
            month: None,
            year: None,
            publication,
            content_type: Some(content_type.into()),
            content: Some(content.into()),
            style: None,
        }
    }

    /// Set the publication date.
    pub fn with_date(mut self, day: i64, month: impl Into<String>, year: i64) -> Self {
        self.day = Some(day);
        self.month = Some(month.into());
        self.year = Some(year);
        self
    }

    /// Set the style string.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Get the normalized content type of this row.
    pub fn kind(&self) -> ContentType {
        ContentType::parse(self.content_type.as_deref())
    }

    /// Get the publication date if day, month, and year are all present.
    pub fn publication_date(&self) -> Option<PublicationDate> {
        match (self.day, self.month.as_ref(), self.year) {
            (Some(day), Some(month), Some(year)) => Some(PublicationDate {
                day,
                month: month.clone(),
                year,
            }),
            _ => None,
        }
    }
}

/// A complete publication date carried by a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationDate {
    /// Day of the month.
    pub day: i64,
    /// Month name as written in the source file.
    pub month: String,
    /// Four-digit year.
    pub year: i64,
}

/// Normalized content type of a row.
///
/// The raw `tipo_contenido` code is normalized once at the boundary via
/// [`ContentType::parse`]; everything downstream matches on this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// `T` — main title, rendered as a level-1 heading.
    Title,
    /// `ST` — subtitle, rendered as a level-3 heading.
    Subtitle,
    /// `P` — paragraph.
    Paragraph,
    /// `I` — image, with the row content interpreted as a URL.
    Image,
    /// Any other code, including a missing one.
    Other,
}

impl ContentType {
    /// The known types in their fixed display order.
    pub const DISPLAY_ORDER: [ContentType; 4] = [
        ContentType::Title,
        ContentType::Subtitle,
        ContentType::Paragraph,
        ContentType::Image,
    ];

    /// Parse a raw type code, case-insensitively.
    ///
    /// Unknown codes, empty strings, and `None` all map to [`ContentType::Other`].
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return ContentType::Other;
        };
        match raw.trim().to_uppercase().as_str() {
            "T" => ContentType::Title,
            "ST" => ContentType::Subtitle,
            "P" => ContentType::Paragraph,
            "I" => ContentType::Image,
            _ => ContentType::Other,
        }
    }

    /// The short code for this type, as written in source files.
    pub fn code(&self) -> &'static str {
        match self {
            ContentType::Title => "T",
            ContentType::Subtitle => "ST",
            ContentType::Paragraph => "P",
            ContentType::Image => "I",
            ContentType::Other => "?",
        }
    }

    /// The fixed human label used in upload summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Title => "Titles (T)",
            ContentType::Subtitle => "Subtitles (ST)",
            ContentType::Paragraph => "Paragraphs (P)",
            ContentType::Image => "Images (I)",
            ContentType::Other => "Other",
        }
    }
}
