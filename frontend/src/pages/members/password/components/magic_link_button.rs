use crate::{
    api::{ApiClient, ApiError, MemberRef},
    pages::members::password::{
        actions::send_member_magic_link, repository::PasswordManagementRepository,
    },
    state::notifications::use_notifier,
};
use leptos::*;
use std::rc::Rc;

#[component]
pub fn MagicLinkButton(
    #[prop(into)] member_number: String,
    #[prop(into)] member_name: String,
) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = PasswordManagementRepository::new_with_client(Rc::new(api));
    let notifier = use_notifier();
    let member = MemberRef {
        member_number,
        member_name,
    };

    let send_action: Action<(), Result<(), ApiError>> = create_action(move |_: &()| {
        let repo = repository.clone();
        let member = member.clone();
        async move { send_member_magic_link(&repo, &notifier, &member).await }
    });
    let pending = send_action.pending();

    view! {
        <button
            type="button"
            class="inline-flex items-center rounded-md border border-border px-3 py-1.5 text-sm font-medium text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
            disabled=move || pending.get()
            on:click=move |_| send_action.dispatch(())
        >
            {move || if pending.get() { "Sending..." } else { "Send Magic Link" }}
        </button>
    }
}
