//! `<script type="application/ld+json">` output

use crate::error::Result;
use crate::thing::Thing;

/// Formatting options for [`Thing::to_json_ld_script_with`].
#[derive(Debug, Clone)]
pub struct ScriptOptions {
    /// Indent the JSON body (default: true)
    pub pretty: bool,

    /// Escape `</` as `<\/` so string content cannot close the script element
    /// (default: true)
    pub escape_closing_tags: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            escape_closing_tags: true,
        }
    }
}

impl ScriptOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn escape_closing_tags(mut self, escape: bool) -> Self {
        self.escape_closing_tags = escape;
        self
    }
}

impl Thing {
    /// Render the entity as an embeddable JSON-LD script element.
    pub fn to_json_ld_script(&self) -> Result<String> {
        self.to_json_ld_script_with(&ScriptOptions::default())
    }

    pub fn to_json_ld_script_with(&self, options: &ScriptOptions) -> Result<String> {
        let data = self.to_dict();
        let mut body = if options.pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };
        if options.escape_closing_tags {
            body = body.replace("</", "<\\/");
        }
        Ok(format!(r#"<script type="application/ld+json">{body}</script>"#))
    }
}
