//! Detail modal state machine.
//!
//! ```text
//!            open(i)                 animate_in(gen)
//! Closed ───────────► OpenStatic ────────────────► OpenAnimated
//!   ▲                      │                          ▲     │
//!   │ close / Escape       │ open(j)    pointer_leave │     │ pointer_move
//!   └──────────────────────┴──────────────────────────┴─ OpenTilted
//! ```
//!
//! The modal keeps a snapshot of the record it was opened with, so a
//! catalog rebuild can never make it read through a stale index. The
//! gallery still calls [`DetailModal::invalidate`] on rebuild.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::image::{display_slot, ImageSlot};
use crate::record::Record;

/// Pointer-to-rotation scale factors, in degrees at the surface edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltSensitivity {
    /// Max Y-axis rotation, driven by horizontal offset
    pub horizontal_deg: f64,
    /// Max X-axis rotation, driven by vertical offset (sign inverted)
    pub vertical_deg: f64,
    /// Constant scale applied while open
    pub scale: f64,
}

impl Default for TiltSensitivity {
    fn default() -> Self {
        Self {
            horizontal_deg: 8.0,
            vertical_deg: 6.0,
            scale: 1.02,
        }
    }
}

/// A 3D card orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl Tilt {
    pub const NEUTRAL: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.02,
    };

    pub fn neutral(scale: f64) -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) scale({})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

/// Client-space bounding box of the modal surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Rotation for a pointer at client `(x, y)` over `rect`.
///
/// The offset from the center is normalized to the half-extent and scaled
/// by the sensitivity; there is no explicit clamp, so a pointer exactly on
/// an edge gives the full sensitivity. A zero-sized rect yields neutral.
pub fn tilt_from_pointer(x: f64, y: f64, rect: Rect, sensitivity: TiltSensitivity) -> Tilt {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Tilt::neutral(sensitivity.scale);
    }
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    let dx = x - (rect.left + half_w);
    let dy = y - (rect.top + half_h);
    Tilt {
        rotate_x: dy / half_h * -sensitivity.vertical_deg,
        rotate_y: dx / half_w * sensitivity.horizontal_deg,
        scale: sensitivity.scale,
    }
}

/// What the voice button should do for a record.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceAction {
    Play { url: String, volume: f32 },
    Unavailable { message: String },
}

pub fn voice_action(record: &Record, volume: f32) -> VoiceAction {
    if record.has_voice() {
        VoiceAction::Play {
            url: record.voice.clone(),
            volume,
        }
    } else {
        VoiceAction::Unavailable {
            message: "Voice not available for this hero.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    /// Content populated, entry animation pending
    OpenStatic,
    /// Entry animation applied
    OpenAnimated,
    /// Pointer is driving the tilt
    OpenTilted,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }
}

/// Display fields for the open record.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub index: usize,
    pub name: String,
    pub image: ImageSlot,
    pub role_label: String,
    pub description: String,
    pub wiki: String,
    pub voice: VoiceAction,
}

impl ModalView {
    fn from_record(
        index: usize,
        record: &Record,
        images_enabled: bool,
        placeholder: &str,
        wiki_base: &str,
        volume: f32,
    ) -> Self {
        Self {
            index,
            name: record.name.clone(),
            image: display_slot(record, images_enabled, placeholder),
            role_label: record.role_label(),
            description: record.description(),
            wiki: record.wiki_link(wiki_base),
            voice: voice_action(record, volume),
        }
    }
}

/// Detail modal.
#[derive(Debug, Clone)]
pub struct DetailModal {
    state: ModalState,
    view: Option<ModalView>,
    tilt: Tilt,
    /// Bumped on every open so stale animation timers can be ignored
    generation: u64,
    sensitivity: TiltSensitivity,
    placeholder: String,
    wiki_base: String,
    volume: f32,
}

impl DetailModal {
    pub fn new(
        sensitivity: TiltSensitivity,
        placeholder: impl Into<String>,
        wiki_base: impl Into<String>,
        volume: f32,
    ) -> Self {
        Self {
            state: ModalState::Closed,
            view: None,
            tilt: Tilt::neutral(sensitivity.scale),
            generation: 0,
            sensitivity,
            placeholder: placeholder.into(),
            wiki_base: wiki_base.into(),
            volume,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether the entry animation flag is set.
    pub fn is_animated(&self) -> bool {
        matches!(self.state, ModalState::OpenAnimated | ModalState::OpenTilted)
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    pub fn index(&self) -> Option<usize> {
        self.view.as_ref().map(|v| v.index)
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Open (or re-open) for `catalog[index]`.
    ///
    /// Returns `false` and changes nothing if `index` is out of range.
    pub fn open(&mut self, index: usize, catalog: &[Record], images_enabled: bool) -> bool {
        let Some(record) = catalog.get(index) else {
            debug!(index, len = catalog.len(), "Ignoring open for invalid index");
            return false;
        };
        self.view = Some(ModalView::from_record(
            index,
            record,
            images_enabled,
            &self.placeholder,
            &self.wiki_base,
            self.volume,
        ));
        self.tilt = Tilt::neutral(self.sensitivity.scale);
        self.state = ModalState::OpenStatic;
        self.generation = self.generation.wrapping_add(1);
        debug!(index, name = %record.name, "Modal opened");
        true
    }

    /// Apply the entry animation, if `generation` is still current.
    pub fn animate_in(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.state != ModalState::OpenStatic {
            return false;
        }
        self.state = ModalState::OpenAnimated;
        true
    }

    /// Recompute the tilt from a pointer position inside the surface.
    pub fn pointer_move(&mut self, x: f64, y: f64, rect: Rect) {
        if !self.is_open() {
            return;
        }
        self.tilt = tilt_from_pointer(x, y, rect, self.sensitivity);
        if self.state == ModalState::OpenAnimated {
            self.state = ModalState::OpenTilted;
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.is_open() {
            return;
        }
        self.tilt = Tilt::neutral(self.sensitivity.scale);
        if self.state == ModalState::OpenTilted {
            self.state = ModalState::OpenAnimated;
        }
    }

    /// Close from any state. Safe to call when already closed.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!(index = ?self.index(), "Modal closed");
        }
        self.state = ModalState::Closed;
        self.view = None;
        self.tilt = Tilt::neutral(self.sensitivity.scale);
    }

    /// Global key handler; returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    /// The catalog was rebuilt; indices may now point elsewhere.
    pub fn invalidate(&mut self) {
        self.close();
    }

    /// The displayed image failed to load. Returns `true` if it changed.
    pub fn image_failed(&mut self) -> bool {
        self.view
            .as_mut()
            .map(|v| v.image.mark_failed())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PH: &str = "https://ph.test/p.png";
    const WIKI: &str = "https://wiki.test/";

    fn modal() -> DetailModal {
        DetailModal::new(TiltSensitivity::default(), PH, WIKI, 0.85)
    }

    fn catalog() -> Vec<Record> {
        vec![
            Record {
                name: "Miya".to_string(),
                image: "https://img.test/miya.png".to_string(),
                role: "Marksman".to_string(),
                ..Record::default()
            },
            Record {
                name: "Eudora".to_string(),
                image: "https://img.test/eudora.png".to_string(),
                voice: "https://voice.test/eudora.mp3".to_string(),
                ..Record::default()
            },
        ]
    }

    #[test]
    fn test_neutral_transform() {
        assert_eq!(
            Tilt::NEUTRAL.css_transform(),
            "rotateX(0deg) rotateY(0deg) scale(1.02)"
        );
    }

    #[test]
    fn test_tilt_center_is_neutral() {
        let rect = Rect::new(100.0, 50.0, 200.0, 400.0);
        let tilt = tilt_from_pointer(200.0, 250.0, rect, TiltSensitivity::default());
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn test_tilt_edges_and_signs() {
        let rect = Rect::new(0.0, 0.0, 200.0, 400.0);
        let s = TiltSensitivity::default();

        // Right edge, vertical center
        let right = tilt_from_pointer(200.0, 200.0, rect, s);
        assert_eq!(right.rotate_y, 8.0);
        assert_eq!(right.rotate_x, 0.0);

        // Bottom edge: vertical axis has opposite sign
        let bottom = tilt_from_pointer(100.0, 400.0, rect, s);
        assert_eq!(bottom.rotate_x, -6.0);

        // Top-left quadrant
        let tl = tilt_from_pointer(50.0, 100.0, rect, s);
        assert_eq!(tl.rotate_y, -4.0);
        assert_eq!(tl.rotate_x, 3.0);
    }

    #[test]
    fn test_degenerate_rect() {
        let tilt = tilt_from_pointer(5.0, 5.0, Rect::default(), TiltSensitivity::default());
        assert_eq!(tilt, Tilt::NEUTRAL);
    }

    #[test]
    fn test_open_populates_view() {
        let mut m = modal();
        assert!(m.open(0, &catalog(), true));
        assert_eq!(m.state(), ModalState::OpenStatic);

        let view = m.view().unwrap();
        assert_eq!(view.name, "Miya");
        assert_eq!(view.role_label, "Role: Marksman");
        assert_eq!(view.description, "Information about Miya (limited data).");
        assert_eq!(view.wiki, "https://wiki.test/Miya");
        assert_eq!(view.image.src(), "https://img.test/miya.png");
        assert!(matches!(view.voice, VoiceAction::Unavailable { .. }));
        assert_eq!(m.tilt(), Tilt::NEUTRAL);
    }

    #[test]
    fn test_open_invalid_index_is_noop() {
        let mut m = modal();
        assert!(!m.open(7, &catalog(), true));
        assert_eq!(m.state(), ModalState::Closed);
        assert!(m.view().is_none());
    }

    #[test]
    fn test_full_lifecycle() {
        let mut m = modal();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

        m.open(1, &catalog(), true);
        assert!(m.animate_in(m.generation()));
        assert_eq!(m.state(), ModalState::OpenAnimated);

        m.pointer_move(100.0, 50.0, rect);
        assert_eq!(m.state(), ModalState::OpenTilted);
        assert_eq!(m.tilt().rotate_y, 8.0);

        m.pointer_leave();
        assert_eq!(m.state(), ModalState::OpenAnimated);
        assert_eq!(m.tilt(), Tilt::NEUTRAL);

        m.close();
        assert_eq!(m.state(), ModalState::Closed);
        assert!(!m.is_animated());
    }

    #[test]
    fn test_stale_animation_is_ignored() {
        let mut m = modal();
        m.open(0, &catalog(), true);
        let stale = m.generation();
        m.open(1, &catalog(), true);
        assert!(!m.animate_in(stale));
        assert_eq!(m.state(), ModalState::OpenStatic);
        assert!(m.animate_in(m.generation()));
    }

    #[test]
    fn test_reopen_resets_tilt() {
        let mut m = modal();
        m.open(0, &catalog(), true);
        m.animate_in(m.generation());
        m.pointer_move(0.0, 0.0, Rect::new(0.0, 0.0, 10.0, 10.0));
        m.open(1, &catalog(), true);
        assert_eq!(m.state(), ModalState::OpenStatic);
        assert_eq!(m.tilt(), Tilt::NEUTRAL);
        assert_eq!(m.index(), Some(1));
    }

    #[test]
    fn test_escape_closes_from_every_open_state() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        for steps in 0..3 {
            let mut m = modal();
            m.open(0, &catalog(), true);
            if steps >= 1 {
                m.animate_in(m.generation());
            }
            if steps >= 2 {
                m.pointer_move(1.0, 1.0, rect);
            }
            assert!(m.handle_key("Escape"));
            assert_eq!(m.state(), ModalState::Closed);
        }
        let mut closed = modal();
        assert!(!closed.handle_key("Escape"));
        assert!(!closed.handle_key("Enter"));
    }

    #[test]
    fn test_pointer_ignored_when_closed() {
        let mut m = modal();
        m.pointer_move(0.0, 0.0, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(m.tilt(), Tilt::NEUTRAL);
        assert_eq!(m.state(), ModalState::Closed);
    }

    #[test]
    fn test_voice_action() {
        let records = catalog();
        assert_eq!(
            voice_action(&records[1], 0.85),
            VoiceAction::Play {
                url: "https://voice.test/eudora.mp3".to_string(),
                volume: 0.85
            }
        );
        assert!(matches!(
            voice_action(&records[0], 0.85),
            VoiceAction::Unavailable { .. }
        ));
    }

    #[test]
    fn test_image_failure_swaps_placeholder() {
        let mut m = modal();
        m.open(0, &catalog(), true);
        assert!(m.image_failed());
        assert_eq!(m.view().unwrap().image.src(), PH);
        assert!(!m.image_failed());
    }
}
