//! Progressive thumbnail resolution.
//!
//! A thumbnail is resolved by probing resolution tiers one at a time,
//! highest fidelity first. Each probe settles as loaded, failed or timed
//! out before the next one starts, so a lower tier can never overtake a
//! higher one. The candidate list always ends in a tier the host serves
//! for every video, and that tier is used when every probe fails.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::{self, Either, LocalBoxFuture};
use futures::FutureExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use super::identifier::ResolvedMediaIdentifier;

pub const THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Missing high tiers are served as a 120px "no thumbnail" image rather
/// than an error.
const PLACEHOLDER_MAX_WIDTH: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThumbnailTier {
    Default,
    Medium,
    High,
    Standard,
    MaxRes,
}

impl ThumbnailTier {
    /// Platform tiers from highest to lowest fidelity.
    pub const DESCENDING: [ThumbnailTier; 5] = [
        ThumbnailTier::MaxRes,
        ThumbnailTier::Standard,
        ThumbnailTier::High,
        ThumbnailTier::Medium,
        ThumbnailTier::Default,
    ];

    pub fn file_stem(&self) -> &'static str {
        match self {
            ThumbnailTier::MaxRes => "maxresdefault",
            ThumbnailTier::Standard => "sddefault",
            ThumbnailTier::High => "hqdefault",
            ThumbnailTier::Medium => "mqdefault",
            ThumbnailTier::Default => "default",
        }
    }

    /// Served for every valid identifier.
    pub fn is_guaranteed(&self) -> bool {
        matches!(self, ThumbnailTier::High | ThumbnailTier::Medium | ThumbnailTier::Default)
    }

    pub fn url_for(&self, id: &str) -> String {
        format!("{}/{}/{}.jpg", THUMBNAIL_BASE, id, self.file_stem())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedThumbnail {
    pub identifier: ResolvedMediaIdentifier,
    pub url: String,
    pub tier: ThumbnailTier,
}

/// Ordered candidates for one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailCandidateList {
    identifier: ResolvedMediaIdentifier,
    tiers: Vec<ThumbnailTier>,
}

impl ThumbnailCandidateList {
    /// Preferred tier first, then every lower platform tier down to the
    /// first guaranteed one.
    pub fn new(identifier: ResolvedMediaIdentifier, preferred: ThumbnailTier) -> Self {
        let mut tiers = vec![preferred];
        if !preferred.is_guaranteed() {
            for tier in ThumbnailTier::DESCENDING.iter().copied().filter(|t| *t < preferred) {
                tiers.push(tier);
                if tier.is_guaranteed() {
                    break;
                }
            }
        }
        Self { identifier, tiers }
    }

    pub fn tiers(&self) -> &[ThumbnailTier] {
        &self.tiers
    }

    pub fn fallback(&self) -> ThumbnailTier {
        // non-empty and guaranteed-terminated by construction
        *self.tiers.last().unwrap_or(&ThumbnailTier::High)
    }

    fn resolved(&self, tier: ThumbnailTier) -> ResolvedThumbnail {
        ResolvedThumbnail {
            identifier: self.identifier.clone(),
            url: tier.url_for(&self.identifier.id),
            tier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Loaded { natural_width: u32 },
    Failed,
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeAttempt {
    pub tier: ThumbnailTier,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SequenceState {
    Probing(usize),
    Settled(ResolvedThumbnail),
}

/// Walks a candidate list one attempt at a time.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    candidates: ThumbnailCandidateList,
    state: SequenceState,
}

impl ProbeSequence {
    pub fn new(candidates: ThumbnailCandidateList) -> Self {
        Self { candidates, state: SequenceState::Probing(0) }
    }

    /// The attempt waiting for an outcome, if still probing.
    pub fn current(&self) -> Option<ProbeAttempt> {
        match self.state {
            SequenceState::Probing(index) => self.candidates.tiers.get(index).map(|tier| ProbeAttempt {
                tier: *tier,
                url: tier.url_for(&self.candidates.identifier.id),
            }),
            SequenceState::Settled(_) => None,
        }
    }

    /// Feeds the outcome of [`current`](Self::current) and returns the
    /// result once the sequence settles.
    pub fn record(&mut self, outcome: ProbeOutcome) -> Option<ResolvedThumbnail> {
        let index = match &self.state {
            SequenceState::Probing(index) => *index,
            SequenceState::Settled(done) => return Some(done.clone()),
        };
        let tier = self.candidates.tiers[index];

        let accepted = match outcome {
            ProbeOutcome::Loaded { natural_width } => {
                tier == ThumbnailTier::Default || natural_width > PLACEHOLDER_MAX_WIDTH
            }
            ProbeOutcome::Failed | ProbeOutcome::TimedOut => false,
        };

        if accepted {
            return Some(self.settle(tier));
        }
        if index + 1 < self.candidates.tiers.len() {
            self.state = SequenceState::Probing(index + 1);
            None
        } else {
            log::debug!(
                "all thumbnail probes failed for {}, using {}",
                self.candidates.identifier.id,
                self.candidates.fallback().file_stem()
            );
            Some(self.settle(self.candidates.fallback()))
        }
    }

    fn settle(&mut self, tier: ThumbnailTier) -> ResolvedThumbnail {
        let done = self.candidates.resolved(tier);
        self.state = SequenceState::Settled(done.clone());
        done
    }
}

/// Loads an image and reports how it went. Dropping the returned future
/// abandons the probe.
pub trait ImageProbe {
    fn load(&self, url: &str) -> LocalBoxFuture<'static, ProbeOutcome>;
}

pub trait ProbeClock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Never fails: exhausting the candidates yields the guaranteed tier.
pub async fn resolve_thumbnail<P, C>(
    probe: &P,
    clock: &C,
    identifier: ResolvedMediaIdentifier,
    preferred: ThumbnailTier,
    timeout: Duration,
) -> ResolvedThumbnail
where
    P: ImageProbe + ?Sized,
    C: ProbeClock + ?Sized,
{
    let candidates = ThumbnailCandidateList::new(identifier, preferred);
    let fallback = candidates.resolved(candidates.fallback());
    let mut sequence = ProbeSequence::new(candidates);

    while let Some(attempt) = sequence.current() {
        let outcome = match future::select(probe.load(&attempt.url), clock.sleep(timeout)).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(((), _)) => ProbeOutcome::TimedOut,
        };
        if let Some(done) = sequence.record(outcome) {
            return done;
        }
    }
    fallback
}

#[derive(Debug)]
pub struct SlotTicket {
    generation: u64,
}

impl SlotTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Holds the settled thumbnail for one mounted card and rejects results
/// from superseded probe runs.
#[derive(Debug, Default)]
pub struct ResolutionSlot {
    generation: u64,
    settled: Option<ResolvedThumbnail>,
}

impl ResolutionSlot {
    /// Starts a run for `identifier`, or returns `None` when that
    /// identifier is already settled.
    pub fn begin(&mut self, identifier: &ResolvedMediaIdentifier) -> Option<SlotTicket> {
        if self.settled.as_ref().map(|s| &s.identifier) == Some(identifier) {
            return None;
        }
        self.generation += 1;
        self.settled = None;
        Some(SlotTicket { generation: self.generation })
    }

    /// Stores `result` if `ticket` is still the latest run.
    pub fn settle(&mut self, ticket: &SlotTicket, result: ResolvedThumbnail) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.settled = Some(result);
        true
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// The settled thumbnail, but only when it belongs to `identifier`.
    pub fn settled_for(&self, identifier: &ResolvedMediaIdentifier) -> Option<&ResolvedThumbnail> {
        self.settled.as_ref().filter(|s| &s.identifier == identifier)
    }
}

/// Probes through a detached `<img>` element.
pub struct BrowserImageProbe;

/// Keeps the handlers alive while a probe is pending and detaches them
/// when the probe settles or is abandoned.
struct PendingImage {
    image: HtmlImageElement,
    _onload: Closure<dyn FnMut()>,
    _onerror: Closure<dyn FnMut()>,
}

impl Drop for PendingImage {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

impl ImageProbe for BrowserImageProbe {
    fn load(&self, url: &str) -> LocalBoxFuture<'static, ProbeOutcome> {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(_) => return future::ready(ProbeOutcome::Failed).boxed_local(),
        };

        let (tx, rx) = oneshot::channel::<ProbeOutcome>();
        let tx = Rc::new(RefCell::new(Some(tx)));

        let onload = {
            let tx = tx.clone();
            let image = image.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(ProbeOutcome::Loaded { natural_width: image.natural_width() });
                }
            })
        };
        let onerror = Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(ProbeOutcome::Failed);
            }
        });

        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        image.set_src(url);

        let pending = PendingImage { image, _onload: onload, _onerror: onerror };
        async move {
            let outcome = rx.await.unwrap_or(ProbeOutcome::Failed);
            drop(pending);
            outcome
        }
        .boxed_local()
    }
}

pub struct GlooClock;

impl ProbeClock for GlooClock {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).boxed_local()
    }
}

/// Resolves a thumbnail once `enabled` turns true and keeps the result
/// for as long as the identifier stays the same.
#[hook]
pub fn use_resolved_thumbnail(
    identifier: ResolvedMediaIdentifier,
    preferred: ThumbnailTier,
    enabled: bool,
) -> Option<ResolvedThumbnail> {
    let slot = use_mut_ref(ResolutionSlot::default);
    let revision = use_state(|| 0u64);

    {
        let slot = slot.clone();
        use_effect_with_deps(
            move |(identifier, preferred, enabled)| {
                let ticket = if *enabled { slot.borrow_mut().begin(identifier) } else { None };
                if let Some(ticket) = ticket {
                    let identifier = identifier.clone();
                    let preferred = *preferred;
                    let slot = slot.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let done = resolve_thumbnail(
                            &BrowserImageProbe,
                            &GlooClock,
                            identifier,
                            preferred,
                            PROBE_TIMEOUT,
                        )
                        .await;
                        if slot.borrow_mut().settle(&ticket, done) {
                            revision.set(ticket.generation());
                        }
                    });
                }
                move || slot.borrow_mut().invalidate()
            },
            (identifier.clone(), preferred, enabled),
        );
    }

    let settled = slot.borrow().settled_for(&identifier).cloned();
    settled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::identifier::Variant;
    use futures::executor::block_on;
    use std::collections::HashMap;

    fn ident(id: &str) -> ResolvedMediaIdentifier {
        ResolvedMediaIdentifier { id: id.to_string(), variant: Variant::Standard }
    }

    /// Answers from a table; unknown urls fail. Records every url it is
    /// asked to load.
    struct ScriptedProbe {
        answers: HashMap<String, ProbeOutcome>,
        hang: Vec<String>,
        seen: RefCell<Vec<String>>,
    }

    impl ScriptedProbe {
        fn new() -> Self {
            Self { answers: HashMap::new(), hang: Vec::new(), seen: RefCell::new(Vec::new()) }
        }

        fn answer(mut self, id: &str, tier: ThumbnailTier, outcome: ProbeOutcome) -> Self {
            self.answers.insert(tier.url_for(id), outcome);
            self
        }

        fn hang_on(mut self, id: &str, tier: ThumbnailTier) -> Self {
            self.hang.push(tier.url_for(id));
            self
        }
    }

    impl ImageProbe for ScriptedProbe {
        fn load(&self, url: &str) -> LocalBoxFuture<'static, ProbeOutcome> {
            self.seen.borrow_mut().push(url.to_string());
            if self.hang.iter().any(|u| u == url) {
                return future::pending().boxed_local();
            }
            let outcome = self.answers.get(url).copied().unwrap_or(ProbeOutcome::Failed);
            future::ready(outcome).boxed_local()
        }
    }

    /// Fires immediately, so any probe that is not already settled loses.
    struct InstantClock;

    impl ProbeClock for InstantClock {
        fn sleep(&self, _: Duration) -> LocalBoxFuture<'static, ()> {
            future::ready(()).boxed_local()
        }
    }

    struct NeverClock;

    impl ProbeClock for NeverClock {
        fn sleep(&self, _: Duration) -> LocalBoxFuture<'static, ()> {
            future::pending().boxed_local()
        }
    }

    const HD: ProbeOutcome = ProbeOutcome::Loaded { natural_width: 1280 };

    #[test]
    fn candidate_list_ends_in_guaranteed_tier() {
        let list = ThumbnailCandidateList::new(ident("abc123XYZ9"), ThumbnailTier::MaxRes);
        assert_eq!(
            list.tiers(),
            &[ThumbnailTier::MaxRes, ThumbnailTier::Standard, ThumbnailTier::High]
        );
        assert!(list.fallback().is_guaranteed());

        let list = ThumbnailCandidateList::new(ident("abc123XYZ9"), ThumbnailTier::Medium);
        assert_eq!(list.tiers(), &[ThumbnailTier::Medium]);
    }

    #[test]
    fn tier_urls_follow_host_layout() {
        assert_eq!(
            ThumbnailTier::MaxRes.url_for("abc123XYZ9"),
            "https://img.youtube.com/vi/abc123XYZ9/maxresdefault.jpg"
        );
    }

    #[test]
    fn missing_high_tier_falls_through_to_hq() {
        let probe = ScriptedProbe::new()
            .answer("abc123XYZ9", ThumbnailTier::MaxRes, ProbeOutcome::Failed)
            .answer("abc123XYZ9", ThumbnailTier::Standard, ProbeOutcome::Failed)
            .answer("abc123XYZ9", ThumbnailTier::High, ProbeOutcome::Loaded { natural_width: 480 });
        let done = block_on(resolve_thumbnail(
            &probe,
            &NeverClock,
            ident("abc123XYZ9"),
            ThumbnailTier::MaxRes,
            PROBE_TIMEOUT,
        ));
        assert_eq!(done.tier, ThumbnailTier::High);
        assert_eq!(done.url, "https://img.youtube.com/vi/abc123XYZ9/hqdefault.jpg");
    }

    #[test]
    fn placeholder_image_counts_as_missing() {
        let probe = ScriptedProbe::new()
            .answer("abc123XYZ9", ThumbnailTier::MaxRes, ProbeOutcome::Loaded { natural_width: 120 })
            .answer("abc123XYZ9", ThumbnailTier::Standard, ProbeOutcome::Loaded { natural_width: 640 });
        let done = block_on(resolve_thumbnail(
            &probe,
            &NeverClock,
            ident("abc123XYZ9"),
            ThumbnailTier::MaxRes,
            PROBE_TIMEOUT,
        ));
        assert_eq!(done.tier, ThumbnailTier::Standard);
    }

    #[test]
    fn first_success_in_priority_order_wins() {
        let probe = ScriptedProbe::new()
            .answer("abc123XYZ9", ThumbnailTier::MaxRes, HD)
            .answer("abc123XYZ9", ThumbnailTier::Standard, HD)
            .answer("abc123XYZ9", ThumbnailTier::High, HD);
        let done = block_on(resolve_thumbnail(
            &probe,
            &NeverClock,
            ident("abc123XYZ9"),
            ThumbnailTier::MaxRes,
            PROBE_TIMEOUT,
        ));
        assert_eq!(done.tier, ThumbnailTier::MaxRes);
        // later candidates are never touched once one succeeds
        assert_eq!(probe.seen.borrow().len(), 1);
    }

    #[test]
    fn probes_run_strictly_in_sequence() {
        let probe = ScriptedProbe::new().answer("abc123XYZ9", ThumbnailTier::High, HD);
        block_on(resolve_thumbnail(
            &probe,
            &NeverClock,
            ident("abc123XYZ9"),
            ThumbnailTier::MaxRes,
            PROBE_TIMEOUT,
        ));
        let expected: Vec<String> = [ThumbnailTier::MaxRes, ThumbnailTier::Standard, ThumbnailTier::High]
            .iter()
            .map(|t| t.url_for("abc123XYZ9"))
            .collect();
        assert_eq!(*probe.seen.borrow(), expected);
    }

    #[test]
    fn hanging_probe_times_out_and_advances() {
        let probe = ScriptedProbe::new()
            .hang_on("abc123XYZ9", ThumbnailTier::MaxRes)
            .answer("abc123XYZ9", ThumbnailTier::Standard, HD);
        let done = block_on(resolve_thumbnail(
            &probe,
            &InstantClock,
            ident("abc123XYZ9"),
            ThumbnailTier::MaxRes,
            PROBE_TIMEOUT,
        ));
        // a settled probe is polled before the timer, so the ready answer wins
        assert_eq!(done.tier, ThumbnailTier::Standard);
    }

    #[test]
    fn everything_failing_resolves_to_fallback() {
        let probe = ScriptedProbe::new()
            .hang_on("abc123XYZ9", ThumbnailTier::MaxRes)
            .hang_on("abc123XYZ9", ThumbnailTier::Standard)
            .hang_on("abc123XYZ9", ThumbnailTier::High);
        let done = block_on(resolve_thumbnail(
            &probe,
            &InstantClock,
            ident("abc123XYZ9"),
            ThumbnailTier::MaxRes,
            PROBE_TIMEOUT,
        ));
        assert_eq!(done.tier, ThumbnailTier::High);
        assert_eq!(done.url, ThumbnailTier::High.url_for("abc123XYZ9"));
    }

    #[test]
    fn sequence_reports_settled_result_again() {
        let mut sequence =
            ProbeSequence::new(ThumbnailCandidateList::new(ident("abc123XYZ9"), ThumbnailTier::High));
        let first = sequence.record(ProbeOutcome::TimedOut);
        assert_eq!(first.as_ref().map(|t| t.tier), Some(ThumbnailTier::High));
        assert!(sequence.current().is_none());
        assert_eq!(sequence.record(HD), first);
    }

    #[test]
    fn stale_run_cannot_overwrite_newer_identifier() {
        let mut slot = ResolutionSlot::default();
        let old = slot.begin(&ident("oldVideo01")).expect("fresh slot");
        let new = slot.begin(&ident("newVideo02")).expect("identifier changed");

        let old_result = ThumbnailCandidateList::new(ident("oldVideo01"), ThumbnailTier::High)
            .resolved(ThumbnailTier::High);
        let new_result = ThumbnailCandidateList::new(ident("newVideo02"), ThumbnailTier::High)
            .resolved(ThumbnailTier::High);

        assert!(slot.settle(&new, new_result.clone()));
        assert!(!slot.settle(&old, old_result));
        assert_eq!(slot.settled_for(&ident("newVideo02")), Some(&new_result));
    }

    #[test]
    fn settled_identifier_is_not_probed_again() {
        let mut slot = ResolutionSlot::default();
        let ticket = slot.begin(&ident("abc123XYZ9")).expect("fresh slot");
        let result = ThumbnailCandidateList::new(ident("abc123XYZ9"), ThumbnailTier::High)
            .resolved(ThumbnailTier::High);
        assert!(slot.settle(&ticket, result));
        assert!(slot.begin(&ident("abc123XYZ9")).is_none());
    }

    #[test]
    fn previous_thumbnail_is_not_shown_for_new_identifier() {
        let mut slot = ResolutionSlot::default();
        let ticket = slot.begin(&ident("firstVid01")).expect("fresh slot");
        let first = ThumbnailCandidateList::new(ident("firstVid01"), ThumbnailTier::High)
            .resolved(ThumbnailTier::High);
        assert!(slot.settle(&ticket, first.clone()));

        // the render for the new identifier happens before its effect runs
        assert!(slot.settled_for(&ident("secondVid2")).is_none());
        assert_eq!(slot.settled_for(&ident("firstVid01")), Some(&first));

        assert!(slot.begin(&ident("secondVid2")).is_some());
        assert!(slot.settled_for(&ident("secondVid2")).is_none());
        assert!(slot.settled_for(&ident("firstVid01")).is_none());
    }

    #[test]
    fn invalidated_run_is_ignored() {
        let mut slot = ResolutionSlot::default();
        let ticket = slot.begin(&ident("abc123XYZ9")).expect("fresh slot");
        slot.invalidate();
        let result = ThumbnailCandidateList::new(ident("abc123XYZ9"), ThumbnailTier::High)
            .resolved(ThumbnailTier::High);
        assert!(!slot.settle(&ticket, result));
        assert!(slot.settled_for(&ident("abc123XYZ9")).is_none());
    }
}
