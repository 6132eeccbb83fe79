//! Books Page
//!
//! Catalog grid with the create/edit dialog. Add, Edit and Delete only
//! render for signed-in users.

use leptos::*;

use bookhive::{BookListController, DraftField, Lifecycle};

use crate::components::{BookCardView, BookDialog, Loading, Toast};
use crate::state::{AppServices, SessionState};

#[component]
pub fn BooksPage(services: AppServices, session: SessionState) -> impl IntoView {
    let lifecycle = Lifecycle::new();
    let controller =
        BookListController::new(services.api.clone(), session.context(), lifecycle.clone());

    let state = create_rw_signal(controller.state());
    controller.subscribe(move |s| state.set(s.clone()));
    on_cleanup(move || lifecycle.end());

    // Fetch the catalog on mount
    let mounting = controller.clone();
    spawn_local(async move {
        mounting.mount().await;
    });

    let authenticated = session.is_authenticated();
    let loading = create_memo(move |_| state.with(|s| s.is_loading()));
    let cards = create_memo(move |_| state.with(|s| s.cards(authenticated.get())));
    let draft = Signal::derive(move || state.with(|s| s.dialog.clone()));
    let heading = Signal::derive(move || state.with(|s| s.dialog_title()));
    let notification = create_memo(move |_| state.with(|s| s.notifier.current().cloned()));

    let c = controller.clone();
    let on_edit = Callback::new(move |id: u64| {
        let book = state.with_untracked(|s| s.books.iter().find(|b| b.id == id).cloned());
        if let Some(book) = book {
            c.open_edit(&book);
        }
    });

    let c = controller.clone();
    let on_delete = Callback::new(move |id: u64| {
        let c = c.clone();
        spawn_local(async move {
            c.delete(id).await;
        });
    });

    let c = controller.clone();
    let on_input = Callback::new(move |(field, value): (DraftField, String)| {
        c.edit_draft(field, value);
    });

    let c = controller.clone();
    let on_save = Callback::new(move |_: ()| {
        let c = c.clone();
        spawn_local(async move {
            c.save().await;
        });
    });

    let c = controller.clone();
    let on_cancel = Callback::new(move |_: ()| c.cancel());

    let c = controller.clone();
    let on_dismiss = Callback::new(move |id: u64| c.dismiss_notification(id));

    let c = controller.clone();
    let on_close = Callback::new(move |_: ()| c.close_notification());

    let add = controller.clone();

    view! {
        <div class="container mx-auto max-w-6xl px-4 py-10">
            <h1 class="text-4xl font-bold mb-2">"Books Library"</h1>
            <hr class="mb-6 border-gray-300" />

            <Show when=move || authenticated.get()>
                {
                    let add = add.clone();
                    view! {
                        <button
                            class="mb-6 px-4 py-2 rounded bg-green-700 hover:bg-green-800 text-white shadow"
                            on:click=move |_| add.open_create()
                        >
                            "➕ Add Book"
                        </button>
                    }
                }
            </Show>

            {move || if loading.get() {
                view! { <Loading /> }.into_view()
            } else {
                view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                        <For
                            each=move || cards.get()
                            key=|card| card.clone()
                            children=move |card| view! {
                                <BookCardView card=card on_edit=on_edit on_delete=on_delete />
                            }
                        />
                    </div>
                }.into_view()
            }}

            <BookDialog
                draft=draft
                heading=heading
                on_input=on_input
                on_save=on_save
                on_cancel=on_cancel
            />

            <Toast
                notification=notification
                timeout_ms=services.notification_timeout_ms()
                on_dismiss=on_dismiss
                on_close=on_close
            />
        </div>
    }
}
