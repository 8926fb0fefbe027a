//! The normalized hero record used by the catalog, grid and modal.

use serde::{Deserialize, Serialize};

/// One character entry.
///
/// Empty strings mean "absent" for every optional field, which keeps the
/// record flat and cheap to clone into UI state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Display name (never empty once in a catalog)
    pub name: String,
    /// Absolute image URL, or empty before image resolution
    pub image: String,
    /// Role/class, may be empty
    pub role: String,
    /// Wiki page URL
    pub wiki: String,
    /// Free-form description
    pub desc: String,
    /// Voice line audio URL
    pub voice: String,
}

impl Record {
    /// A bare record: placeholder image and a synthesized wiki link.
    pub fn named(name: impl Into<String>, placeholder: &str, wiki_base: &str) -> Self {
        let name = name.into();
        let wiki = wiki_url(wiki_base, &name);
        Self {
            name,
            image: placeholder.to_string(),
            wiki,
            ..Self::default()
        }
    }

    /// `"Role: <role>"`, with an em dash when unknown.
    pub fn role_label(&self) -> String {
        if self.role.is_empty() {
            "Role: —".to_string()
        } else {
            format!("Role: {}", self.role)
        }
    }

    /// The description, or a generated placeholder sentence.
    pub fn description(&self) -> String {
        if self.desc.is_empty() {
            format!("Information about {} (limited data).", self.name)
        } else {
            self.desc.clone()
        }
    }

    /// The stored wiki link, or one synthesized from the name.
    pub fn wiki_link(&self, wiki_base: &str) -> String {
        if self.wiki.is_empty() {
            wiki_url(wiki_base, &self.name)
        } else {
            self.wiki.clone()
        }
    }

    pub fn has_voice(&self) -> bool {
        !self.voice.is_empty()
    }
}

/// Percent-encode a URI component.
///
/// Matches the browser's `encodeURIComponent`, which also leaves
/// `! ' ( ) *` alone (`urlencoding` escapes them).
pub fn encode_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// Wiki page URL for a hero name.
pub fn wiki_url(wiki_base: &str, name: &str) -> String {
    format!("{}{}", wiki_base, encode_component(name))
}
