//! The parsed cheatsheet document model and its JSON serializer.
//!
//! A [`Document`] is the result of one parse: front-matter [`Metadata`]
//! plus an ordered tree of [`Section`]s (H2), each holding subsection
//! [`Section`]s (H3), each holding [`Card`]s. Ownership is strictly
//! tree-shaped; nothing is shared or mutated after construction.
//!
//! The JSON wire shape is fixed by the consuming renderer:
//!
//! ```json
//! {
//!   "metadata": { "title": "...", "tags": ["..."] },
//!   "sections": [{
//!     "title": "...", "level": 2, "cards": [],
//!     "subsections": [{
//!       "title": "...", "level": 3,
//!       "cards": [{ "title": "...", "body": "...", "footer": "...",
//!                   "spanConfig": "...", "isShortcutsCard": false }],
//!       "subsections": []
//!     }]
//!   }]
//! }
//! ```

use refsheet_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Metadata
// ============================================================================

/// Front-matter metadata for a cheatsheet document.
///
/// The recognized keys are fixed fields; anything else the author puts in
/// the front-matter block lands in `extra` and survives serialization.
/// A default `Metadata` serializes to `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Authoring or publication date, passed through as text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Background styling hint for the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Free-form tag list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Category list.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Introductory blurb shown above the first section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,

    /// Renderer plugin names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Unrecognized front-matter keys, preserved as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Metadata {
    /// Returns `true` if no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.background.is_none()
            && self.tags.is_empty()
            && self.categories.is_empty()
            && self.intro.is_none()
            && self.plugins.is_empty()
            && self.extra.is_empty()
    }
}

// ============================================================================
// KeyboardShortcut
// ============================================================================

/// One row of a keyboard-shortcut table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardShortcut {
    /// Raw key-combination text, e.g. `"Cmd Shift A"`.
    pub shortcut: String,
    /// Free-text description of what the combination does.
    pub action: String,
}

impl KeyboardShortcut {
    /// Create a shortcut row from its two cells.
    pub fn new(shortcut: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            shortcut: shortcut.into(),
            action: action.into(),
        }
    }
}

// ============================================================================
// Card
// ============================================================================

/// Payload distinguishing plain cards from keyboard-shortcut cards.
///
/// Modeling this as a sum type makes `isShortcutsCard` structurally
/// guaranteed: shortcut rows exist exactly when the card is a shortcuts
/// card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardKind {
    /// Ordinary code-plus-explanation card.
    Plain,
    /// Card backed by a parsed keyboard-shortcut table.
    Shortcuts(Vec<KeyboardShortcut>),
}

/// The atomic renderable unit: one subsection's worth of content.
///
/// Serializes to the renderer's wire shape with `isShortcutsCard` and an
/// optional `shortcuts` array derived from [`CardKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CardWire", into = "CardWire")]
pub struct Card {
    /// Card title, defaulting to the owning subsection's title.
    pub title: String,
    /// Primary content: a fenced code block or composite prose + code.
    pub body: String,
    /// Secondary explanatory content.
    pub footer: String,
    /// Grid layout hint from the heading annotation, e.g. `col-span-2`.
    pub span_config: String,
    /// Plain or shortcuts payload.
    pub kind: CardKind,
}

impl Card {
    /// Returns `true` for keyboard-shortcut cards.
    pub fn is_shortcuts_card(&self) -> bool {
        matches!(self.kind, CardKind::Shortcuts(_))
    }

    /// Shortcut rows, present only on shortcut cards.
    pub fn shortcuts(&self) -> Option<&[KeyboardShortcut]> {
        match &self.kind {
            CardKind::Plain => None,
            CardKind::Shortcuts(rows) => Some(rows),
        }
    }
}

/// Wire representation of a [`Card`], matching the renderer contract.
///
/// Field order here defines the JSON field order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardWire {
    title: String,
    body: String,
    footer: String,
    span_config: String,
    is_shortcuts_card: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shortcuts: Option<Vec<KeyboardShortcut>>,
}

impl From<Card> for CardWire {
    fn from(card: Card) -> Self {
        let (is_shortcuts_card, shortcuts) = match card.kind {
            CardKind::Plain => (false, None),
            CardKind::Shortcuts(rows) => (true, Some(rows)),
        };
        Self {
            title: card.title,
            body: card.body,
            footer: card.footer,
            span_config: card.span_config,
            is_shortcuts_card,
            shortcuts,
        }
    }
}

impl From<CardWire> for Card {
    fn from(wire: CardWire) -> Self {
        let kind = if wire.is_shortcuts_card {
            CardKind::Shortcuts(wire.shortcuts.unwrap_or_default())
        } else {
            CardKind::Plain
        };
        Self {
            title: wire.title,
            body: wire.body,
            footer: wire.footer,
            span_config: wire.span_config,
            kind,
        }
    }
}

// ============================================================================
// Section / Document
// ============================================================================

/// One heading block: an H2 section or an H3 subsection.
///
/// Only two levels of nesting are modeled; subsections always carry an
/// empty `subsections` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text with any trailing `{...}` annotation stripped.
    pub title: String,
    /// Heading level: 2 for sections, 3 for subsections.
    pub level: u8,
    /// Cards owned directly by this heading (empty at section level).
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Nested subsections (empty at subsection level).
    #[serde(default)]
    pub subsections: Vec<Section>,
}

impl Section {
    /// Create an empty section at the given level.
    pub fn new(title: impl Into<String>, level: u8) -> Self {
        Self {
            title: title.into(),
            level,
            cards: Vec::new(),
            subsections: Vec::new(),
        }
    }
}

/// The parse result for one cheatsheet input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Decoded front-matter metadata (empty mapping if absent or invalid).
    #[serde(default)]
    pub metadata: Metadata,
    /// Ordered H2 sections covering the document body.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Document {
    /// Serialize the document tree to JSON.
    ///
    /// An `indent` of 0 produces compact output; any other value
    /// pretty-prints with that many spaces per level. Field order is
    /// deterministic and follows the type definitions, so the output
    /// round-trips through [`Document::from_json`].
    ///
    /// # Example
    ///
    /// ```
    /// use refsheet_content::document::Document;
    ///
    /// let doc = Document::default();
    /// assert_eq!(doc.to_json(0).unwrap(), r#"{"metadata":{},"sections":[]}"#);
    /// ```
    pub fn to_json(&self, indent: usize) -> Result<String> {
        if indent == 0 {
            return serde_json::to_string(self).map_err(|e| Error::serialization(e.to_string()));
        }

        let indent_str = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent_str.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .map_err(|e| Error::serialization(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Decode a document from its JSON serialization.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::serialization(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
