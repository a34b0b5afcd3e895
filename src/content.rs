//! Static blog entries shown in the content modal.
//!
//! The table is embedded at compile time from `content/blog.json` and decoded
//! once on first access. It is never mutated afterwards.

use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error};

const BLOG_JSON: &str = include_str!("../content/blog.json");

static BLOG_TABLE: Lazy<BlogTable> = Lazy::new(|| match BlogTable::from_json(BLOG_JSON) {
    Ok(table) => {
        debug!(entries = table.len(), "Decoded blog table");
        table
    }
    Err(err) => {
        error!("Embedded blog table is unusable: {err:#}");
        BlogTable::default()
    }
});

/// A single entry of the blog table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogEntry {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Trusted HTML fragment rendered verbatim.
    pub content: String,
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    #[serde(flatten)]
    entry: BlogEntry,
}

#[derive(Deserialize)]
struct RawTable {
    entries: Vec<RawEntry>,
}

/// Read-only lookup of blog entries keyed by content id.
#[derive(Debug, Default)]
pub struct BlogTable {
    entries: HashMap<String, BlogEntry>,
}

impl BlogTable {
    pub fn from_json(data: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(data).context("Failed to decode blog table")?;
        let mut entries = HashMap::with_capacity(raw.entries.len());
        for RawEntry { id, entry } in raw.entries {
            if entries.insert(id.clone(), entry).is_some() {
                bail!("duplicate blog id {id:?}");
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: &str) -> Option<&BlogEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Look up an entry in the embedded table.
pub fn lookup(id: &str) -> Option<&'static BlogEntry> {
    BLOG_TABLE.get(id)
}

/// Build the modal body markup for an entry.
pub fn render_modal_body(entry: &BlogEntry) -> String {
    let title = escape_html(&entry.title);
    let header_image = entry
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}" class="modal-header-image">"#,
                escape_html(src),
                title
            )
        })
        .unwrap_or_default();

    format!(
        "{header_image}\n<h2 class=\"modal-title\">{title}</h2>\n<div class=\"modal-text\">\n{}\n</div>",
        entry.content
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
