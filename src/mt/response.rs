//! Typed model of the `translate_a/single` response
//!
//! The endpoint answers with a loosely typed nested array:
//!
//! ```text
//! [
//!   [["Bonjour", "Hello", null, null, 10], ...],        // segments
//!   [["interjection", ["bonjour", "salut"], ...], ...],   // word entries, or null
//!   "en",
//!   ...
//! ]
//! ```
//!
//! The value is validated once by [`TranslationResponse::from_value`]. After
//! that, flattening cannot fail.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use xtranslate::mt::flatten_response;
//!
//! let raw = json!([[["Bonjour"]], [["interjection", ["hello"]]]]);
//! assert_eq!(flatten_response(&raw).unwrap(), "Bonjour\ninterjection: hello");
//! ```

use crate::mt::error::{MtError, MtResult};
use serde_json::Value;

/// One fragment of the primary translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
}

/// A source word with its alternative translations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// Part of speech or lemma, e.g. "noun"
    pub lemma: String,
    pub alternatives: Vec<String>,
}

/// Decoded translation response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResponse {
    pub segments: Vec<Segment>,
    /// `None` when the API sent no dictionary section
    pub words: Option<Vec<WordEntry>>,
}

impl TranslationResponse {
    /// Validate a raw JSON document and build the typed response
    ///
    /// # Errors
    ///
    /// Returns `MtError::MalformedResponse` if the top level is not a non-empty
    /// array, or if the segment or word-entry sections have the wrong shape.
    pub fn from_value(value: &Value) -> MtResult<Self> {
        let top = value.as_array().ok_or_else(|| {
            MtError::MalformedResponse("top-level value is not an array".to_string())
        })?;

        let segments = match top.first() {
            Some(section) => parse_segments(section)?,
            None => {
                return Err(MtError::MalformedResponse(
                    "missing text section at index 0".to_string(),
                ));
            }
        };
        let words = parse_words(top.get(1))?;

        Ok(Self { segments, words })
    }

    /// Primary translation: segment texts concatenated without separator
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Word breakdown, one `\n<lemma>: <alt>, <alt>` line per entry, lower-cased
    pub fn word_breakdown(&self) -> String {
        let Some(words) = &self.words else {
            return String::new();
        };

        let mut out = String::new();
        for entry in words {
            out.push('\n');
            out.push_str(&entry.lemma);
            out.push_str(": ");
            out.push_str(&entry.alternatives.join(", "));
        }
        out.to_lowercase()
    }

    /// Display string: primary translation followed by the word breakdown
    pub fn render(&self) -> String {
        let mut out = self.text();
        out.push_str(&self.word_breakdown());
        out
    }
}

fn parse_segments(section: &Value) -> MtResult<Vec<Segment>> {
    let items = section.as_array().ok_or_else(|| {
        MtError::MalformedResponse("text section is not an array".to_string())
    })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let fields = item.as_array().ok_or_else(|| {
                MtError::MalformedResponse(format!("segment {}: not an array", i))
            })?;
            match fields.first() {
                Some(Value::String(text)) => Ok(Segment { text: text.clone() }),
                Some(_) => Err(MtError::MalformedResponse(format!(
                    "segment {}: first element is not a string",
                    i
                ))),
                None => Err(MtError::MalformedResponse(format!("segment {}: empty", i))),
            }
        })
        .collect()
}

fn parse_words(section: Option<&Value>) -> MtResult<Option<Vec<WordEntry>>> {
    let items = match section {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(MtError::MalformedResponse(
                "word section is neither null nor an array".to_string(),
            ));
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_word_entry(i, item))
        .collect::<MtResult<Vec<_>>>()
        .map(Some)
}

fn parse_word_entry(index: usize, item: &Value) -> MtResult<WordEntry> {
    let malformed =
        |what: &str| MtError::MalformedResponse(format!("word entry {}: {}", index, what));

    let fields = item.as_array().ok_or_else(|| malformed("not an array"))?;
    if fields.len() < 2 {
        return Err(malformed("expected lemma and alternatives"));
    }

    let lemma = fields[0]
        .as_str()
        .ok_or_else(|| malformed("lemma is not a string"))?
        .to_string();

    let alternatives = fields[1]
        .as_array()
        .ok_or_else(|| malformed("alternatives are not an array"))?
        .iter()
        .map(|alt| {
            alt.as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed("alternative is not a string"))
        })
        .collect::<MtResult<Vec<_>>>()?;

    Ok(WordEntry {
        lemma,
        alternatives,
    })
}

/// Concatenate the first string of every segment in the text section
///
/// `segments` is element 0 of the raw response.
pub fn flatten_text(segments: &Value) -> MtResult<String> {
    let segments = parse_segments(segments)?;
    Ok(segments.into_iter().map(|s| s.text).collect())
}

/// Render the word-breakdown section, or `""` when it is absent or null
///
/// `words` is element 1 of the raw response.
pub fn flatten_words(words: Option<&Value>) -> MtResult<String> {
    let response = TranslationResponse {
        segments: Vec::new(),
        words: parse_words(words)?,
    };
    Ok(response.word_breakdown())
}

/// Decode a whole response and render it for display
pub fn flatten_response(value: &Value) -> MtResult<String> {
    TranslationResponse::from_value(value).map(|r| r.render())
}
