use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal shell; the caller owns the open flag and closes it from `on_close`.
#[component]
pub fn ModalDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let title_text = Signal::derive(move || title.get());
    let children = store_value(children);

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title_text.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_dialog_renders_title_and_body_when_open() {
        let html = render_to_string(move || {
            view! {
                <ModalDialog
                    is_open=Signal::derive(|| true)
                    title="Reset password"
                    on_close=Callback::new(|_| {})
                >
                    <p>"dialog body"</p>
                </ModalDialog>
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("Reset password"));
        assert!(html.contains("dialog body"));
    }

    #[test]
    fn modal_dialog_renders_nothing_when_closed() {
        let html = render_to_string(move || {
            view! {
                <ModalDialog
                    is_open=Signal::derive(|| false)
                    title="Reset password"
                    on_close=Callback::new(|_| {})
                >
                    <p>"dialog body"</p>
                </ModalDialog>
            }
        });
        assert!(!html.contains("dialog body"));
    }
}
