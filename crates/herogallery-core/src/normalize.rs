//! Source normalizer.
//!
//! Endpoints disagree on payload shape and field names, so every payload is
//! squeezed through [`Normalizer::normalize`] into a uniform `Vec<Record>`.
//!
//! ## Accepted shapes (tried in order)
//!
//! ```text
//! [ ... ]                 bare array
//! { "data":   [ ... ] }   wrapped in `data`
//! { "heroes": [ ... ] }   wrapped in `heroes`
//! ```
//!
//! Anything else yields `None`. A recognized shape whose elements all get
//! dropped yields `Some(vec![])`; callers treat both as "try the next
//! source", but the two stay distinguishable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::record::{wiki_url, Record};

/// Ordered candidate keys per logical field.
///
/// The first key holding a usable value wins. Extending a list is a config
/// change, not a code change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAliases {
    pub name: Vec<String>,
    pub image: Vec<String>,
    pub role: Vec<String>,
    pub wiki: Vec<String>,
    pub desc: Vec<String>,
    pub voice: Vec<String>,
}

fn keys(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self {
            name: keys(&["name", "hero", "title", "hero_name"]),
            image: keys(&["image", "icon", "avatar", "image_url", "img", "thumbnail"]),
            role: keys(&["role", "type", "class"]),
            wiki: keys(&["wiki", "link"]),
            desc: keys(&["desc", "description"]),
            voice: keys(&["voice"]),
        }
    }
}

/// Converts raw JSON payloads into records.
#[derive(Debug, Clone)]
pub struct Normalizer {
    aliases: FieldAliases,
    placeholder: String,
    wiki_base: String,
}

impl Normalizer {
    pub fn new(
        aliases: FieldAliases,
        placeholder: impl Into<String>,
        wiki_base: impl Into<String>,
    ) -> Self {
        Self {
            aliases,
            placeholder: placeholder.into(),
            wiki_base: wiki_base.into(),
        }
    }

    /// Normalize a payload, or `None` if its shape is not recognized.
    pub fn normalize(&self, payload: &Value) -> Option<Vec<Record>> {
        let list = Self::extract_list(payload)?;
        Some(list.iter().filter_map(|item| self.map_item(item)).collect())
    }

    fn extract_list(payload: &Value) -> Option<&Vec<Value>> {
        if let Some(list) = payload.as_array() {
            return Some(list);
        }
        ["data", "heroes"]
            .iter()
            .find_map(|key| payload.get(key).and_then(Value::as_array))
    }

    fn map_item(&self, item: &Value) -> Option<Record> {
        match item {
            Value::String(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(Record::named(name, &self.placeholder, &self.wiki_base))
            }
            Value::Object(obj) => self.map_object(obj),
            _ => None,
        }
    }

    fn map_object(&self, obj: &Map<String, Value>) -> Option<Record> {
        let name = first_text(obj, &self.aliases.name)?;
        let name = name.trim().to_string();
        if name.is_empty() {
            return None;
        }

        // Relative paths can't be resolved against an unknown origin
        let image = first_text(obj, &self.aliases.image)
            .filter(|url| url.starts_with("http"))
            .unwrap_or_default();

        let wiki = first_text(obj, &self.aliases.wiki)
            .unwrap_or_else(|| wiki_url(&self.wiki_base, &name));

        Some(Record {
            image,
            role: first_text(obj, &self.aliases.role).unwrap_or_default(),
            wiki,
            desc: first_text(obj, &self.aliases.desc).unwrap_or_default(),
            voice: first_text(obj, &self.aliases.voice).unwrap_or_default(),
            name,
        })
    }
}

/// First alias holding a non-blank string (numbers are stringified).
fn first_text(obj: &Map<String, Value>, aliases: &[String]) -> Option<String> {
    aliases.iter().find_map(|key| match obj.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PH: &str = "https://placeholder.test/hero.png";
    const WIKI: &str = "https://wiki.test/wiki/";

    fn normalizer() -> Normalizer {
        Normalizer::new(FieldAliases::default(), PH, WIKI)
    }

    #[test]
    fn test_bare_array_of_strings() {
        let out = normalizer().normalize(&json!(["Miya", "Layla"])).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].name, "Miya");
        assert_eq!(out[0].image, PH);
        assert_eq!(out[1].wiki, "https://wiki.test/wiki/Layla");
    }

    #[test]
    fn test_data_wrapper() {
        let out = normalizer()
            .normalize(&json!({ "data": [{ "hero_name": "Tigreal", "class": "Tank" }] }))
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Tigreal");
        assert_eq!(out[0].role, "Tank");
    }

    #[test]
    fn test_heroes_wrapper() {
        let out = normalizer()
            .normalize(&json!({ "heroes": [{ "title": "Fanny" }] }))
            .unwrap();
        assert_eq!(out[0].name, "Fanny");
    }

    #[test]
    fn test_unrecognized_shapes_are_none() {
        let n = normalizer();
        assert!(n.normalize(&json!({ "items": [] })).is_none());
        assert!(n.normalize(&json!("Miya")).is_none());
        assert!(n.normalize(&json!(42)).is_none());
        assert!(n.normalize(&json!({ "data": { "name": "Miya" } })).is_none());
        assert!(n.normalize(&Value::Null).is_none());
    }

    #[test]
    fn test_object_without_name_is_dropped() {
        let out = normalizer().normalize(&json!([{ "foo": 1 }])).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_array_is_some_empty() {
        assert_eq!(normalizer().normalize(&json!([])), Some(vec![]));
    }

    #[test]
    fn test_alias_priority() {
        let out = normalizer()
            .normalize(&json!([{ "hero": "B", "name": "A", "icon": "https://x/i.png", "image": "" }]))
            .unwrap();
        assert_eq!(out[0].name, "A");
        // Empty `image` is skipped in favour of the next alias
        assert_eq!(out[0].image, "https://x/i.png");
    }

    #[test]
    fn test_blank_alias_falls_through() {
        let out = normalizer()
            .normalize(&json!([{ "name": "   ", "hero": "Miya", "role": " ", "class": "Marksman" }]))
            .unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Miya");
        assert_eq!(out[0].role, "Marksman");
    }

    #[test]
    fn test_relative_image_is_discarded() {
        let out = normalizer()
            .normalize(&json!([{ "name": "Zilong", "image": "images/x.png" }]))
            .unwrap();
        assert_eq!(out[0].image, "");
    }

    #[test]
    fn test_link_field_used_for_wiki() {
        let out = normalizer()
            .normalize(&json!([
                { "name": "Alucard", "link": "https://other.wiki/Alucard" },
                { "name": "Chang'e" }
            ]))
            .unwrap();
        assert_eq!(out[0].wiki, "https://other.wiki/Alucard");
        assert_eq!(out[1].wiki, "https://wiki.test/wiki/Chang'e");
    }

    #[test]
    fn test_mixed_and_junk_elements() {
        let out = normalizer()
            .normalize(&json!(["Nana", null, 7, "", { "name": "" }, { "name": 101 }]))
            .unwrap();
        let names: Vec<_> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Nana", "101"]);
    }

    #[test]
    fn test_desc_and_voice_carried() {
        let out = normalizer()
            .normalize(&json!([{ "name": "Eudora", "description": "Lightning", "voice": "https://v/e.mp3" }]))
            .unwrap();
        assert_eq!(out[0].desc, "Lightning");
        assert!(out[0].has_voice());
    }

    #[test]
    fn test_custom_aliases() {
        let mut aliases = FieldAliases::default();
        aliases.name.push("displayName".to_string());
        let n = Normalizer::new(aliases, PH, WIKI);
        let out = n.normalize(&json!([{ "displayName": "Valir" }])).unwrap();
        assert_eq!(out[0].name, "Valir");
    }
}
