//! Toast notifications
//!
//! A [`Toaster`] is provided once by the app and shared through context.
//! Only the newest toast is shown; pushing another replaces it.

use leptos::*;
use site_core::{Notifier, Toast};

const TOAST_LIMIT: usize = 1;

#[cfg(feature = "hydrate")]
const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Reactive toast store
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// Create a toaster and make it available to descendants
    pub fn provide() -> Self {
        let toaster = Self::new();
        provide_context(toaster);
        toaster
    }

    /// Show a toast, returning its id
    pub fn push(&self, toast: Toast) -> u64 {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);

        self.toasts.update(|toasts| {
            toasts.insert(0, ToastEntry { id, toast });
            toasts.truncate(TOAST_LIMIT);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|entry| entry.id != id));
    }

    pub fn current(&self) -> Vec<ToastEntry> {
        self.toasts.get()
    }

    #[cfg(feature = "hydrate")]
    fn schedule_dismiss(&self, id: u64) {
        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_DURATION);
    }

    #[cfg(not(feature = "hydrate"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, toast: Toast) {
        let id = self.push(toast);
        self.schedule_dismiss(id);
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed top-0 z-[100] flex max-h-screen w-full flex-col-reverse p-4 sm:bottom-0 sm:right-0 sm:top-auto sm:flex-col md:max-w-[420px]">
            <For
                each=move || toaster.current()
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let id = entry.id;
                    let class = if entry.toast.is_destructive() {
                        "flex w-full items-start justify-between gap-4 rounded-md border border-red-600 bg-red-600 p-6 pr-8 text-white shadow-lg"
                    } else {
                        "flex w-full items-start justify-between gap-4 rounded-md border bg-white p-6 pr-8 text-gray-900 shadow-lg"
                    };

                    view! {
                        <div role="status" aria-live="polite" class=class>
                            <div class="grid gap-1">
                                <div class="text-sm font-semibold">{entry.toast.title}</div>
                                <div class="text-sm opacity-90">{entry.toast.description}</div>
                            </div>
                            <button
                                class="rounded-md p-1 opacity-70 hover:opacity-100"
                                aria-label="Close"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
