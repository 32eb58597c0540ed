//! Deferred mounting of heavy media.
//!
//! Cards start `Unmounted` and flip to `InView` once the element comes
//! within [`PRELOAD_MARGIN`] of the viewport, or straight away when the
//! card is eager. The flip is one-shot; the observer is disconnected as
//! soon as it fires and again on unmount.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const PRELOAD_MARGIN: &str = "300px";
const VISIBILITY_THRESHOLD: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    Unmounted,
    InView,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountConfig {
    pub eager: bool,
}

/// What the gate wants done after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEffect {
    None,
    Observe,
    Disconnect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountGate {
    state: MountState,
    observing: bool,
}

impl MountGate {
    pub fn new(config: MountConfig) -> Self {
        let state = if config.eager { MountState::InView } else { MountState::Unmounted };
        Self { state, observing: false }
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    pub fn should_mount(&self) -> bool {
        self.state != MountState::Unmounted
    }

    /// Called once the element exists.
    pub fn attach(&mut self) -> GateEffect {
        if self.state == MountState::Unmounted && !self.observing {
            self.observing = true;
            GateEffect::Observe
        } else {
            GateEffect::None
        }
    }

    pub fn proximity(&mut self, intersecting: bool) -> GateEffect {
        if !intersecting || self.state != MountState::Unmounted {
            return GateEffect::None;
        }
        self.state = MountState::InView;
        self.release()
    }

    /// The underlying resource finished loading.
    pub fn loaded(&mut self) {
        if self.state == MountState::InView {
            self.state = MountState::Loaded;
        }
    }

    pub fn detach(&mut self) -> GateEffect {
        self.release()
    }

    fn release(&mut self) -> GateEffect {
        if self.observing {
            self.observing = false;
            GateEffect::Disconnect
        } else {
            GateEffect::None
        }
    }
}

pub struct ViewportGate {
    pub state: MountState,
    pub on_loaded: Callback<()>,
}

impl ViewportGate {
    pub fn should_mount(&self) -> bool {
        self.state != MountState::Unmounted
    }

    pub fn is_loaded(&self) -> bool {
        self.state == MountState::Loaded
    }
}

struct Watch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn observe(
    element: &Element,
    on_change: impl Fn(bool) + 'static,
) -> Result<Watch, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            on_change(intersecting);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(PRELOAD_MARGIN);
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok(Watch { observer, _callback: callback })
}

/// Drives a [`MountGate`] from an `IntersectionObserver` on `node`.
#[hook]
pub fn use_viewport_gate(node: NodeRef, config: MountConfig) -> ViewportGate {
    let gate = use_mut_ref(|| MountGate::new(config));
    let state = use_state(|| gate.borrow().state());

    {
        let gate = gate.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let watch: Rc<RefCell<Option<Watch>>> = Rc::new(RefCell::new(None));

                if gate.borrow_mut().attach() == GateEffect::Observe {
                    match node.cast::<Element>() {
                        Some(element) => {
                            let on_change = {
                                let gate = gate.clone();
                                let watch = watch.clone();
                                let state = state.clone();
                                move |intersecting: bool| {
                                    let effect = gate.borrow_mut().proximity(intersecting);
                                    if effect == GateEffect::Disconnect {
                                        // the closure is running, so it is dropped on unmount instead
                                        if let Some(w) = watch.borrow().as_ref() {
                                            w.observer.disconnect();
                                        }
                                        state.set(gate.borrow().state());
                                    }
                                }
                            };
                            match observe(&element, on_change) {
                                Ok(w) => *watch.borrow_mut() = Some(w),
                                Err(err) => {
                                    log::warn!("proximity observer unavailable, mounting now: {:?}", err);
                                    gate.borrow_mut().proximity(true);
                                    state.set(gate.borrow().state());
                                }
                            }
                        }
                        None => {
                            gate.borrow_mut().proximity(true);
                            state.set(gate.borrow().state());
                        }
                    }
                }

                move || {
                    gate.borrow_mut().detach();
                    if let Some(w) = watch.borrow_mut().take() {
                        w.observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let on_loaded = {
        let gate = gate.clone();
        let state = state.clone();
        Callback::from(move |_| {
            gate.borrow_mut().loaded();
            state.set(gate.borrow().state());
        })
    };

    ViewportGate { state: *state, on_loaded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eager_gate_mounts_without_observing() {
        let mut gate = MountGate::new(MountConfig { eager: true });
        assert!(gate.should_mount());
        assert_eq!(gate.attach(), GateEffect::None);
        assert_eq!(gate.detach(), GateEffect::None);
    }

    #[test]
    fn lazy_gate_waits_for_proximity() {
        let mut gate = MountGate::new(MountConfig { eager: false });
        assert!(!gate.should_mount());
        assert_eq!(gate.attach(), GateEffect::Observe);
        assert_eq!(gate.proximity(false), GateEffect::None);
        assert_eq!(gate.state(), MountState::Unmounted);
        assert_eq!(gate.proximity(true), GateEffect::Disconnect);
        assert_eq!(gate.state(), MountState::InView);
    }

    #[test]
    fn proximity_is_one_shot() {
        let mut gate = MountGate::new(MountConfig { eager: false });
        gate.attach();
        gate.proximity(true);
        // the element leaving the margin again does not unmount it
        assert_eq!(gate.proximity(false), GateEffect::None);
        assert_eq!(gate.proximity(true), GateEffect::None);
        assert!(gate.should_mount());
        assert_eq!(gate.attach(), GateEffect::None);
    }

    #[test]
    fn unmount_before_trigger_tears_down_observer() {
        let mut gate = MountGate::new(MountConfig { eager: false });
        gate.attach();
        assert_eq!(gate.detach(), GateEffect::Disconnect);
        assert_eq!(gate.detach(), GateEffect::None);
    }

    #[test]
    fn load_only_follows_in_view() {
        let mut gate = MountGate::new(MountConfig { eager: false });
        gate.loaded();
        assert_eq!(gate.state(), MountState::Unmounted);
        gate.attach();
        gate.proximity(true);
        gate.loaded();
        assert_eq!(gate.state(), MountState::Loaded);
    }
}
