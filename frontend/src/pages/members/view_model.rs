use super::repository::MemberAccountRepository;
use crate::api::{ApiClient, ApiError, MemberCredentialStatus};
use leptos::*;
use leptos_router::use_params_map;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct MemberAccountViewModel {
    pub member_number: Memo<String>,
    pub reload: RwSignal<u32>,
    pub status_resource: Resource<(String, u32), Result<MemberCredentialStatus, ApiError>>,
    /// Handed to child panels so they can request a refetch after a change.
    pub refresh: Callback<()>,
}

pub fn use_member_account_view_model() -> MemberAccountViewModel {
    let params = use_params_map();
    let member_number =
        create_memo(move |_| params.with(|p| p.get("member_number").cloned().unwrap_or_default()));
    member_account_view_model(member_number)
}

pub fn member_account_view_model(member_number: Memo<String>) -> MemberAccountViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = MemberAccountRepository::new_with_client(Rc::new(api));

    let reload = create_rw_signal(0u32);
    let status_resource = create_local_resource(
        move || (member_number.get(), reload.get()),
        move |(number, _reload)| {
            let repo = repository.clone();
            async move { repo.fetch_credential_status(&number).await }
        },
    );

    let refresh = Callback::new(move |_: ()| {
        log::debug!("refreshing member credential status");
        reload.update(|value| *value = value.wrapping_add(1));
    });

    MemberAccountViewModel {
        member_number,
        reload,
        status_resource,
        refresh,
    }
}
