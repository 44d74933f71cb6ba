use super::{
    password::PasswordManagementSection,
    view_model::{use_member_account_view_model, MemberAccountViewModel},
};
use crate::{
    api::MemberCredentialStatus,
    components::{
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner},
    },
    utils::time::format_timestamp,
};
use leptos::*;
use leptos_meta::Title;

#[component]
fn MemberSummary(status: MemberCredentialStatus) -> impl IntoView {
    let password_set = status
        .password_set_at
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "never".to_string());

    view! {
        <div class="space-y-1">
            <h2 class="text-2xl font-semibold text-fg">{status.member_name}</h2>
            <p class="text-sm text-fg-muted">{format!("Member #{}", status.member_number)}</p>
            <p class="text-xs text-fg-muted">{format!("Password last set: {}", password_set)}</p>
        </div>
    }
}

#[component]
pub fn MemberAccountContent(vm: MemberAccountViewModel) -> impl IntoView {
    let status_resource = vm.status_resource;
    let refresh = vm.refresh;

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-6">
            {move || match status_resource.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(err)) => {
                    view! { <InlineErrorMessage error=Signal::derive(move || Some(err.clone()))/> }
                        .into_view()
                }
                Some(Ok(status)) => {
                    view! {
                        <MemberSummary status=status.clone()/>
                        <PasswordManagementSection
                            status=status
                            on_unlocked=refresh
                            on_password_reset=refresh
                        />
                    }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
pub fn MemberAccountPage() -> impl IntoView {
    let vm = use_member_account_view_model();
    let member_number = vm.member_number;

    view! {
        <Title text=move || format!("Member {}", member_number.get())/>
        <Layout>
            <MemberAccountContent vm=vm/>
        </Layout>
    }
}
