use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const NOTICE_MILLIS: u32 = 1_600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// A short-lived inline message. Showing a new one cancels the pending
/// dismissal of the previous one.
#[derive(Clone)]
pub struct NoticeHandle {
    current: UseStateHandle<Option<Notice>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl NoticeHandle {
    pub fn current(&self) -> Option<&Notice> {
        (*self.current).as_ref()
    }

    pub fn show(&self, kind: NoticeKind, text: impl Into<String>) {
        self.current.set(Some(Notice { kind, text: text.into() }));
        let current = self.current.clone();
        let timeout = Timeout::new(NOTICE_MILLIS, move || current.set(None));
        // replacing the old Timeout drops it, which cancels it
        *self.timer.borrow_mut() = Some(timeout);
    }
}

#[hook]
pub fn use_notice() -> NoticeHandle {
    let current = use_state(|| None::<Notice>);
    let timer = use_mut_ref(|| None::<Timeout>);
    NoticeHandle { current, timer }
}

#[derive(Properties, PartialEq)]
pub struct NoticeViewProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeView)]
pub fn notice_view(props: &NoticeViewProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let class = match notice.kind {
        NoticeKind::Success => "inline-notice success",
        NoticeKind::Failure => "inline-notice failure",
    };
    html! {
        <span class={class} role="status" aria-live="polite">{ &notice.text }</span>
    }
}
