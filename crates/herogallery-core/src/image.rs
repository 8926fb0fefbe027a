//! Image resolution.
//!
//! Records without an image get a best-effort CDN guess derived from the
//! name. The guess is never verified; whoever displays it holds an
//! [`ImageSlot`] that swaps to the placeholder when the surface reports a
//! load error.

use crate::record::{encode_component, Record};

/// Reduce a name to a CDN file stem.
///
/// Keeps ASCII letters, digits, `_`, `-` and spaces; every other character
/// is dropped. Runs of spaces become a single `_`.
///
/// ```
/// use herogallery_core::image::slugify;
/// assert_eq!(slugify("X.Borg"), "XBorg");
/// assert_eq!(slugify("Yi  Sun-shin"), "Yi_Sun-shin");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c == ' ' {
            if !in_space {
                slug.push('_');
            }
            in_space = true;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}

/// `<cdn_base><slug>.png`
pub fn cdn_url(cdn_base: &str, slug: &str) -> String {
    format!("{}{}.png", cdn_base, encode_component(slug))
}

/// Fills in missing images with CDN guesses.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    cdn_base: String,
}

impl ImageResolver {
    pub fn new(cdn_base: impl Into<String>) -> Self {
        Self {
            cdn_base: cdn_base.into(),
        }
    }

    /// Return `record` with a non-empty `image`.
    ///
    /// Records that already have an image pass through untouched, so this
    /// is idempotent.
    pub fn resolve(&self, mut record: Record) -> Record {
        if record.image.is_empty() {
            record.image = cdn_url(&self.cdn_base, &slugify(&record.name));
        }
        record
    }

    pub fn resolve_all(&self, records: Vec<Record>) -> Vec<Record> {
        records.into_iter().map(|r| self.resolve(r)).collect()
    }
}

/// An unverified image hint plus its placeholder fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    hint: String,
    placeholder: String,
    failed: bool,
}

impl ImageSlot {
    pub fn new(hint: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            hint: hint.into(),
            placeholder: placeholder.into(),
            failed: false,
        }
    }

    /// A slot that always shows the placeholder.
    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self::new(String::new(), placeholder)
    }

    /// The URL the surface should display right now.
    pub fn src(&self) -> &str {
        if self.failed || self.hint.is_empty() {
            &self.placeholder
        } else {
            &self.hint
        }
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Record a load error. Returns `true` if `src()` changed as a result;
    /// a failing placeholder returns `false` so the surface stops retrying.
    pub fn mark_failed(&mut self) -> bool {
        if self.src() == self.placeholder {
            return false;
        }
        self.failed = true;
        true
    }
}

/// The slot a grid tile or the modal shows for `record`.
pub fn display_slot(record: &Record, images_enabled: bool, placeholder: &str) -> ImageSlot {
    if images_enabled && !record.image.is_empty() {
        ImageSlot::new(record.image.clone(), placeholder)
    } else {
        ImageSlot::placeholder(placeholder)
    }
}
