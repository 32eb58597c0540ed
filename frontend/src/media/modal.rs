//! Single-session media overlay state.
//!
//! A page owns one [`ModalController`] and hands it down; nothing else
//! mutates the session. Opening while open replaces the session, and the
//! scroll lock is engaged once on the first open and released once on
//! close no matter how many close triggers fire.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use super::identifier::{ResolvedMediaIdentifier, Variant};

pub const EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Query flags for an embedded player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedParams {
    pub autoplay: bool,
    pub muted: bool,
    pub controls: bool,
    pub looped: bool,
}

impl EmbedParams {
    pub fn modal(muted: bool) -> Self {
        Self { autoplay: true, muted, controls: true, looped: false }
    }

    /// Background reel: silent, chrome-less, on repeat.
    pub fn hero() -> Self {
        Self { autoplay: true, muted: true, controls: false, looped: true }
    }

    pub fn url(&self, embed_base_url: &str, id: &str) -> String {
        let mut query = vec![
            format!("autoplay={}", u8::from(self.autoplay)),
            format!("mute={}", u8::from(self.muted)),
            "modestbranding=1".to_string(),
            "rel=0".to_string(),
            "playsinline=1".to_string(),
        ];
        if !self.controls {
            query.push("controls=0".to_string());
        }
        if self.looped {
            // looping a single video needs it listed as its own playlist
            query.push("loop=1".to_string());
            query.push(format!("playlist={}", urlencoding::encode(id)));
        }
        format!("{}?{}", embed_base_url, query.join("&"))
    }
}

pub fn embed_url(id: &str) -> String {
    format!("{}/{}", EMBED_BASE, id)
}

/// What a card hands to the page when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRequest {
    pub identifier: ResolvedMediaIdentifier,
    pub title: String,
}

impl PlayRequest {
    pub fn new(identifier: ResolvedMediaIdentifier, title: impl Into<String>) -> Self {
        Self { identifier, title: title.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalSession {
    pub identifier: ResolvedMediaIdentifier,
    pub title: String,
    pub embed_url: String,
    pub muted: bool,
    /// Bumped whenever the player must be torn down and mounted again.
    pub player_key: u64,
}

impl ModalSession {
    pub fn player_src(&self) -> String {
        EmbedParams::modal(self.muted).url(&self.embed_url, &self.identifier.id)
    }

    pub fn variant(&self) -> Variant {
        self.identifier.variant
    }
}

pub trait ScrollLock {
    fn engage(&mut self);
    fn release(&mut self);
}

#[derive(Debug)]
pub struct ModalController<L: ScrollLock> {
    session: Option<ModalSession>,
    lock: L,
    locked: bool,
    next_key: u64,
}

impl<L: ScrollLock> ModalController<L> {
    pub fn new(lock: L) -> Self {
        Self { session: None, lock, locked: false, next_key: 0 }
    }

    pub fn session(&self) -> Option<&ModalSession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Replaces any open session. Every open starts muted so autoplay is
    /// allowed, with a fresh player key.
    pub fn open(&mut self, request: PlayRequest) {
        let embed_url = embed_url(&request.identifier.id);
        self.open_with_embed(request, embed_url);
    }

    pub fn open_with_embed(&mut self, request: PlayRequest, embed_url: String) {
        if let Some(previous) = &self.session {
            log::debug!("replacing modal session {}", previous.identifier.id);
        }
        let player_key = self.bump_key();
        self.session = Some(ModalSession {
            identifier: request.identifier,
            title: request.title,
            embed_url,
            muted: true,
            player_key,
        });
        if !self.locked {
            self.lock.engage();
            self.locked = true;
        }
    }

    /// Returns false when nothing is open.
    pub fn unmute(&mut self) -> bool {
        if self.session.is_none() {
            return false;
        }
        let player_key = self.bump_key();
        match self.session.as_mut() {
            Some(session) => {
                session.muted = false;
                session.player_key = player_key;
                true
            }
            None => false,
        }
    }

    /// Returns false when already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.session.take().is_some();
        if self.locked {
            self.lock.release();
            self.locked = false;
        }
        was_open
    }

    fn bump_key(&mut self) -> u64 {
        self.next_key += 1;
        self.next_key
    }
}

impl<L: ScrollLock> Drop for ModalController<L> {
    fn drop(&mut self) {
        if self.locked {
            self.lock.release();
        }
    }
}

/// Hides `<body>` overflow and restores whatever was there before.
#[derive(Debug, Default)]
pub struct BodyScrollLock {
    previous: Option<String>,
}

impl ScrollLock for BodyScrollLock {
    fn engage(&mut self) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        self.previous = style.get_property_value("overflow").ok();
        if let Err(err) = style.set_property("overflow", "hidden") {
            log::warn!("could not lock page scroll: {:?}", err);
        }
    }

    fn release(&mut self) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let previous = self.previous.take().unwrap_or_default();
        if let Err(err) = body.style().set_property("overflow", &previous) {
            log::warn!("could not release page scroll: {:?}", err);
        }
    }
}

/// Page-level access to the one controller. Cloned handles share the
/// controller; equality follows the session snapshot so children re-render
/// when it changes.
#[derive(Clone)]
pub struct ModalHandle {
    controller: Rc<RefCell<ModalController<BodyScrollLock>>>,
    session: Option<ModalSession>,
    revision: UseStateHandle<u64>,
}

impl PartialEq for ModalHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller) && self.session == other.session
    }
}

impl ModalHandle {
    pub fn session(&self) -> Option<&ModalSession> {
        self.session.as_ref()
    }

    pub fn open(&self, request: PlayRequest) {
        log::info!("opening player for {}", request.identifier.id);
        self.controller.borrow_mut().open(request);
        self.refresh();
    }

    pub fn close(&self) {
        if self.controller.borrow_mut().close() {
            self.refresh();
        }
    }

    pub fn unmute(&self) {
        if self.controller.borrow_mut().unmute() {
            self.refresh();
        }
    }

    fn refresh(&self) {
        self.revision.set(*self.revision + 1);
    }
}

/// Owns the page's controller. The scroll lock is released when the page
/// unmounts, via the controller's `Drop`.
#[hook]
pub fn use_media_modal() -> ModalHandle {
    let controller = use_mut_ref(|| ModalController::new(BodyScrollLock::default()));
    let revision = use_state(|| 0u64);
    let session = controller.borrow().session().cloned();
    ModalHandle { controller, session, revision }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct LockLog {
        engaged: u32,
        released: u32,
    }

    impl LockLog {
        fn held(&self) -> bool {
            self.engaged > self.released
        }
    }

    #[derive(Debug, Clone, Default)]
    struct CountingLock(Rc<RefCell<LockLog>>);

    impl ScrollLock for CountingLock {
        fn engage(&mut self) {
            self.0.borrow_mut().engaged += 1;
        }
        fn release(&mut self) {
            self.0.borrow_mut().released += 1;
        }
    }

    fn request(id: &str, variant: Variant) -> PlayRequest {
        PlayRequest::new(ResolvedMediaIdentifier { id: id.to_string(), variant }, format!("Clip {}", id))
    }

    #[test]
    fn open_starts_muted_and_locks_scroll() {
        let lock = CountingLock::default();
        let mut modal = ModalController::new(lock.clone());
        modal.open(request("abc123XYZ9", Variant::Standard));

        let session = modal.session().expect("open session");
        assert!(session.muted);
        assert_eq!(session.embed_url, "https://www.youtube.com/embed/abc123XYZ9");
        assert!(lock.0.borrow().held());
    }

    #[test]
    fn second_open_replaces_without_unlocking() {
        let lock = CountingLock::default();
        let mut modal = ModalController::new(lock.clone());
        modal.open(request("firstClip1", Variant::Standard));
        let first_key = modal.session().map(|s| s.player_key);
        modal.unmute();
        modal.open(request("secondClip", Variant::ShortForm));

        let session = modal.session().expect("open session");
        assert_eq!(session.identifier.id, "secondClip");
        assert!(session.muted);
        assert_ne!(Some(session.player_key), first_key);

        let log = lock.0.borrow();
        assert_eq!(log.engaged, 1);
        assert_eq!(log.released, 0);
    }

    #[test]
    fn double_close_releases_once() {
        let lock = CountingLock::default();
        let mut modal = ModalController::new(lock.clone());
        modal.open(request("abc123XYZ9", Variant::Standard));

        assert!(modal.close());
        assert!(!modal.close());
        assert!(!modal.is_open());

        let log = lock.0.borrow();
        assert_eq!(log.engaged, 1);
        assert_eq!(log.released, 1);
    }

    #[test]
    fn close_when_never_opened_touches_nothing() {
        let lock = CountingLock::default();
        let mut modal = ModalController::new(lock.clone());
        assert!(!modal.close());
        assert_eq!(lock.0.borrow().released, 0);
    }

    #[test]
    fn unmute_remounts_player() {
        let mut modal = ModalController::new(CountingLock::default());
        assert!(!modal.unmute());

        modal.open(request("abc123XYZ9", Variant::Standard));
        let before = modal.session().map(|s| s.player_key);
        assert!(modal.unmute());

        let session = modal.session().expect("open session");
        assert!(!session.muted);
        assert_ne!(Some(session.player_key), before);
        assert!(session.player_src().contains("mute=0"));
    }

    #[test]
    fn dropping_open_controller_releases_lock() {
        let lock = CountingLock::default();
        {
            let mut modal = ModalController::new(lock.clone());
            modal.open(request("abc123XYZ9", Variant::Standard));
        }
        assert!(!lock.0.borrow().held());
    }

    #[test]
    fn session_variant_follows_identifier() {
        let mut modal = ModalController::new(CountingLock::default());
        modal.open(request("shortClip1", Variant::ShortForm));
        assert_eq!(modal.session().map(|s| s.variant()), Some(Variant::ShortForm));
    }

    #[test]
    fn modal_player_query_flags() {
        let src = EmbedParams::modal(true).url("https://www.youtube.com/embed/abc123XYZ9", "abc123XYZ9");
        assert_eq!(
            src,
            "https://www.youtube.com/embed/abc123XYZ9?autoplay=1&mute=1&modestbranding=1&rel=0&playsinline=1"
        );
    }

    #[test]
    fn hero_player_loops_itself() {
        let src = EmbedParams::hero().url(&embed_url("zSEaA7X4THw"), "zSEaA7X4THw");
        assert!(src.contains("controls=0"));
        assert!(src.contains("loop=1"));
        assert!(src.ends_with("playlist=zSEaA7X4THw"));
    }
}
