//! Upload response types and result summarization.
//!
//! The backend parses the uploaded file and answers with per-type element
//! counts; this module turns that response into the fixed-order display
//! summary and carries the file extension precondition the upload flow
//! checks before calling the backend at all.

use serde::{Deserialize, Serialize};

use crate::model::ContentType;

/// File extensions the upload flow accepts.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["csv", "xlsx", "xls"];

/// Backend response to a processed upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Identifier of the stored record.
    #[serde(rename = "registro_id")]
    pub record_id: i64,

    /// Total number of elements the backend processed.
    #[serde(rename = "elementos_procesados")]
    pub elements_processed: u64,

    /// Per-type element counts. Missing keys mean zero.
    #[serde(rename = "tipos_contenido", default)]
    pub type_counts: TypeCounts,
}

/// Element counts keyed by the closed set of known content types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCounts {
    /// Number of title rows.
    #[serde(rename = "T", default)]
    pub titles: u64,

    /// Number of subtitle rows.
    #[serde(rename = "ST", default)]
    pub subtitles: u64,

    /// Number of paragraph rows.
    #[serde(rename = "P", default)]
    pub paragraphs: u64,

    /// Number of image rows.
    #[serde(rename = "I", default)]
    pub images: u64,
}

impl TypeCounts {
    /// Get the count for a known content type.
    ///
    /// [`ContentType::Other`] has no counter and always reports zero.
    pub fn get(&self, kind: ContentType) -> u64 {
        match kind {
            ContentType::Title => self.titles,
            ContentType::Subtitle => self.subtitles,
            ContentType::Paragraph => self.paragraphs,
            ContentType::Image => self.images,
            ContentType::Other => 0,
        }
    }

    /// Sum of all known-type counts.
    pub fn total(&self) -> u64 {
        self.titles + self.subtitles + self.paragraphs + self.images
    }
}

/// Display model for a processed upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSummary {
    /// Identifier of the stored record.
    pub record_id: i64,

    /// Total number of elements the backend processed.
    pub elements_processed: u64,

    /// Non-zero counts in fixed display order (T, ST, P, I).
    pub lines: Vec<SummaryLine>,
}

impl UploadSummary {
    /// Check that the known-type counts account for every processed element.
    pub fn is_consistent(&self) -> bool {
        self.lines.iter().map(|line| line.count).sum::<u64>() == self.elements_processed
    }
}

/// One display line of an upload summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    /// Content type the line reports.
    pub kind: ContentType,

    /// Fixed human label for the type.
    pub label: String,

    /// Number of elements of this type.
    pub count: u64,
}

/// Summarize an upload response for display.
///
/// Pure presence-filtering: the non-zero counts are listed in the fixed
/// order T, ST, P, I with their fixed labels. Zero and absent counts are
/// omitted; the input order of the response plays no part.
pub fn summarize(response: &UploadResponse) -> UploadSummary {
    let lines: Vec<SummaryLine> = ContentType::DISPLAY_ORDER
        .iter()
        .filter_map(|kind| {
            let count = response.type_counts.get(*kind);
            (count > 0).then(|| SummaryLine {
                kind: *kind,
                label: kind.label().to_string(),
                count,
            })
        })
        .collect();

    let summary = UploadSummary {
        record_id: response.record_id,
        elements_processed: response.elements_processed,
        lines,
    };
    if !summary.is_consistent() {
        log::warn!(
            "upload record {} reports {} elements but type counts sum to {}",
            summary.record_id,
            summary.elements_processed,
            response.type_counts.total()
        );
    }
    summary
}

/// Check the upload precondition: the file name has a supported extension.
///
/// The comparison is case-insensitive. Names without an extension are
/// rejected.
pub fn is_supported_file(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(stem, extension)| {
            !stem.is_empty()
                && SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| extension.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}
