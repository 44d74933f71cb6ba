use crate::pages::members::password::utils::{BadgeTone, StatusBadge};
use leptos::*;

fn badge_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Success => {
            "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium bg-status-success-bg text-status-success-text border-status-success-border"
        }
        BadgeTone::Warning => {
            "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium bg-status-warning-bg text-status-warning-text border-status-warning-border"
        }
        BadgeTone::Danger => {
            "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium bg-status-error-bg text-status-error-text border-status-error-border"
        }
        BadgeTone::Info => {
            "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium bg-status-info-bg text-status-info-text border-status-info-border"
        }
    }
}

#[component]
pub fn StatusBadges(#[prop(into)] badges: Signal<Vec<StatusBadge>>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            {move || {
                badges
                    .get()
                    .into_iter()
                    .map(|badge| {
                        view! {
                            <span class=badge_class(badge.tone()) data-badge=badge.key()>
                                {badge.label()}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
