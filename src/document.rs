//! JSON-LD extraction and auditing for rendered HTML pages
//!
//! Pulls every `<script type="application/ld+json">` block out of a page,
//! flattens arrays and `@graph` containers, and checks each item against the
//! registered kinds.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::gsc::GscReport;
use crate::thing::Thing;
use crate::types::EntityKind;

/// Default cap on extracted items.
const MAX_JSON_LD_BLOCKS: usize = 100;

fn json_ld_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap())
}

/// One JSON-LD item found on a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLdBlock {
    /// The first `@type` name of the item
    pub schema_type: String,

    /// The item as found, including its own `@context` if any
    pub value: JsonValue,
}

impl JsonLdBlock {
    /// Parse the content of one script element.
    ///
    /// Invalid JSON yields no items.
    pub fn parse(content: &str) -> Vec<Self> {
        match serde_json::from_str::<JsonValue>(content) {
            Ok(node) => Self::extract_from_value(node),
            Err(err) => {
                warn!(error = %err, "skipping malformed JSON-LD block");
                Vec::new()
            }
        }
    }

    fn extract_from_value(node: JsonValue) -> Vec<Self> {
        let values = match node {
            JsonValue::Array(items) => items,
            JsonValue::Object(mut obj) => match obj.remove("@graph") {
                Some(JsonValue::Array(graph)) => graph,
                Some(other) => {
                    obj.insert("@graph".to_string(), other);
                    vec![JsonValue::Object(obj)]
                }
                None => vec![JsonValue::Object(obj)],
            },
            _ => return Vec::new(),
        };

        values
            .into_iter()
            .filter_map(|value| {
                let schema_type = match &value["@type"] {
                    JsonValue::String(s) => s.clone(),
                    JsonValue::Array(names) => names.first()?.as_str()?.to_string(),
                    _ => return None,
                };
                Some(Self { schema_type, value })
            })
            .collect()
    }

    /// The registered kind matching the item's `@type`, if any.
    pub fn kind(&self) -> Option<EntityKind> {
        EntityKind::from_type_value(&self.value["@type"])
    }
}

/// Options for [`StructuredDataDocument::audit`].
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Rebuild each item through validation before checking GSC
    /// requirements (default: true)
    pub strict: bool,

    /// Maximum number of items audited (default: 100)
    pub max_blocks: usize,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            strict: true,
            max_blocks: MAX_JSON_LD_BLOCKS,
        }
    }
}

impl AuditOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn max_blocks(mut self, max: usize) -> Self {
        self.max_blocks = max;
        self
    }
}

/// Result of auditing one item.
#[derive(Debug)]
pub enum AuditOutcome {
    /// No registered kind matches the item's `@type`
    Unrecognized,
    /// The item does not pass property validation
    Invalid(Error),
    /// The item validated; GSC findings attached
    Checked(GscReport),
}

#[derive(Debug)]
pub struct AuditEntry {
    pub schema_type: String,
    pub outcome: AuditOutcome,
}

impl AuditEntry {
    /// Recognized, valid and meeting every GSC requirement.
    pub fn is_clean(&self) -> bool {
        matches!(&self.outcome, AuditOutcome::Checked(report) if report.is_valid())
    }
}

/// All JSON-LD items of an HTML page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StructuredDataDocument {
    pub blocks: Vec<JsonLdBlock>,
}

impl StructuredDataDocument {
    /// Extract JSON-LD from an HTML string.
    ///
    /// # Example
    /// ```
    /// use structured_data::StructuredDataDocument;
    ///
    /// let html = r#"<script type="application/ld+json">{"@type": "Dataset"}</script>"#;
    /// let document = StructuredDataDocument::from_html(html);
    /// assert_eq!(document.blocks[0].schema_type, "Dataset");
    /// ```
    pub fn from_html(html: &str) -> Self {
        Self::from_html_limited(html, MAX_JSON_LD_BLOCKS)
    }

    pub fn from_html_limited(html: &str, max_blocks: usize) -> Self {
        let document = Html::parse_document(html);
        let blocks: Vec<JsonLdBlock> = document
            .select(json_ld_selector())
            .flat_map(|element| {
                let content = element.text().collect::<String>();
                JsonLdBlock::parse(&content)
            })
            .take(max_blocks)
            .collect();
        debug!(blocks = blocks.len(), "extracted JSON-LD blocks");
        Self { blocks }
    }

    /// Extract JSON-LD from an HTML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_html(&content))
    }

    /// Check every item against the registered kinds.
    pub fn audit(&self, options: &AuditOptions) -> Vec<AuditEntry> {
        self.blocks
            .iter()
            .take(options.max_blocks)
            .map(|block| AuditEntry {
                schema_type: block.schema_type.clone(),
                outcome: Self::audit_block(block, options),
            })
            .collect()
    }

    fn audit_block(block: &JsonLdBlock, options: &AuditOptions) -> AuditOutcome {
        let Some(kind) = block.kind() else {
            debug!(schema_type = %block.schema_type, "no registered kind");
            return AuditOutcome::Unrecognized;
        };
        if !options.strict {
            return AuditOutcome::Checked(kind.validate_gsc(&block.value));
        }
        match Thing::from_json_ld(&block.value) {
            Ok(thing) => AuditOutcome::Checked(thing.validate_gsc(&block.value)),
            Err(err) => {
                debug!(schema_type = %block.schema_type, error = %err, "item failed validation");
                AuditOutcome::Invalid(err)
            }
        }
    }
}
