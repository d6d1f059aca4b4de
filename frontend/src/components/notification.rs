use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a notice stays on screen before it hides itself.
const NOTIFICATION_TIMEOUT_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient status message. Each notice gets a fresh id so that showing a
/// new one while another is visible replaces it outright; there is no queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
    pub kind: NoticeKind,
}

#[derive(Properties, PartialEq)]
pub struct NotificationBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NotificationBanner)]
pub fn notification_banner(props: &NotificationBannerProps) -> Html {
    // Re-arm the auto-hide timer whenever the displayed notice changes. The
    // effect cleanup cancels the previous timer, so an old notice's timeout
    // can never cut a newer notice short.
    {
        let on_dismiss = props.on_dismiss.clone();
        let notice_id = props.notice.as_ref().map(|n| n.id);
        use_effect_with(notice_id, move |id| {
            let timeout = id.map(|_| {
                Timeout::new(NOTIFICATION_TIMEOUT_MS, move || on_dismiss.emit(()))
            });
            move || drop(timeout)
        });
    }

    let Some(notice) = &props.notice else {
        return html! {};
    };

    let (bg, border) = match notice.kind {
        NoticeKind::Success => ("bg-green-600/20 text-green-400", "border-green-600"),
        NoticeKind::Error => ("bg-red-600/20 text-red-400", "border-red-600"),
    };

    let on_click_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={format!("fixed top-4 right-4 z-50 flex items-center space-x-3 px-4 py-3 rounded-lg border {} {}", border, bg)}>
            <span class="text-sm font-medium">{&notice.text}</span>
            <button onclick={on_click_dismiss} class="hover:text-white">
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                </svg>
            </button>
        </div>
    }
}
