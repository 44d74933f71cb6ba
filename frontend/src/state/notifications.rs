use leptos::*;
use uuid::Uuid;

/// Toasts kept on screen at once; older ones fall off the end.
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Transient messages, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastStack {
    items: Vec<Toast>,
}

impl ToastStack {
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(
            0,
            Toast {
                id,
                kind,
                title: title.into(),
                description: description.into(),
            },
        );
        self.items.truncate(MAX_TOASTS);
        id
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sink for user-facing, non-blocking messages.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, title: &str, description: &str);

    fn success(&self, title: &str, description: &str) {
        self.notify(ToastKind::Success, title, description);
    }

    fn error(&self, title: &str, description: &str) {
        self.notify(ToastKind::Error, title, description);
    }
}

#[derive(Clone, Copy)]
pub struct ToastNotifier {
    pub toasts: RwSignal<ToastStack>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(ToastStack::default()),
        }
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|stack| {
            stack.dismiss(id);
        });
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, title: &str, description: &str) {
        self.toasts.update(|stack| {
            stack.push(kind, title, description);
        });
    }
}

pub fn provide_notifier() -> ToastNotifier {
    let notifier = ToastNotifier::new();
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> ToastNotifier {
    use_context::<ToastNotifier>().unwrap_or_default()
}
