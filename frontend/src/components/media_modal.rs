use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icons::{CloseIcon, WhatsAppIcon};
use crate::media::ModalHandle;

#[derive(Properties, PartialEq)]
pub struct MediaModalProps {
    pub modal: ModalHandle,
    pub contact_link: String,
}

/// Overlay player for the page's single modal session. Closed by Escape,
/// the close button or a click on the backdrop.
#[function_component(MediaModal)]
pub fn media_modal(props: &MediaModalProps) -> Html {
    {
        let modal = props.modal.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && modal.session().is_some() {
                modal.close();
            }
        });
    }

    let Some(session) = props.modal.session() else {
        return html! {};
    };

    let close = {
        let modal = props.modal.clone();
        Callback::from(move |_: MouseEvent| modal.close())
    };
    let unmute = {
        let modal = props.modal.clone();
        Callback::from(move |_: MouseEvent| modal.unmute())
    };
    let variant = session.variant();

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true" aria-label={session.title.clone()} onclick={close.clone()}>
            <style>
                {r#"
                .modal-overlay { position: fixed; inset: 0; z-index: 60; display: flex; align-items: center; justify-content: center; padding: 1rem; background: rgba(0,0,0,0.8); backdrop-filter: blur(6px); }
                .modal-content { position: relative; width: 100%; max-width: 960px; background: #000; border-radius: 14px; overflow: hidden; box-shadow: 0 40px 120px rgba(0,0,0,0.6); }
                .modal-content.aspect-9-16 { max-width: 380px; }
                .modal-frame { position: relative; height: 0; }
                .modal-frame iframe { position: absolute; inset: 0; width: 100%; height: 100%; border: 0; }
                .modal-bar { display: flex; align-items: center; justify-content: space-between; gap: 0.75rem; padding: 0.6rem 0.9rem; color: #fff; font-size: 0.9rem; }
                .modal-actions { display: flex; gap: 0.5rem; }
                .modal-actions button, .modal-actions a { display: inline-flex; align-items: center; gap: 0.35rem; border: none; border-radius: 999px; padding: 0.35rem 0.8rem; background: rgba(255,255,255,0.12); color: #fff; cursor: pointer; text-decoration: none; }
                "#}
            </style>
            <div class={classes!("modal-content", variant.aspect_class())} onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-frame" style={format!("padding-bottom: {};", variant.aspect_padding())}>
                    <iframe
                        key={session.player_key.to_string()}
                        src={session.player_src()}
                        title={session.title.clone()}
                        allow="autoplay; encrypted-media; picture-in-picture"
                        allowfullscreen=true
                    />
                </div>
                <div class="modal-bar">
                    <span class="modal-title">{ &session.title }</span>
                    <div class="modal-actions">
                        if session.muted {
                            <button onclick={unmute}>{"Unmute"}</button>
                        }
                        <a href={props.contact_link.clone()} target="_blank" rel="noopener noreferrer">
                            <WhatsAppIcon size={16} />{"Enquire"}
                        </a>
                        <button onclick={close} aria-label="Close player"><CloseIcon size={18} /></button>
                    </div>
                </div>
            </div>
        </div>
    }
}
