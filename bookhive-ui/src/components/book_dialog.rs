//! Book Dialog Component
//!
//! Modal form for creating or editing a book.

use leptos::*;

use bookhive::{BookDraft, DraftField};

/// Create/edit dialog; hidden while `draft` is `None`
#[component]
pub fn BookDialog(
    #[prop(into)]
    draft: Signal<Option<BookDraft>>,
    #[prop(into)]
    heading: Signal<&'static str>,
    on_input: Callback<(DraftField, String)>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let field_value = move |field: DraftField| {
        draft.with(|d| {
            d.as_ref()
                .map(|d| match field {
                    DraftField::Title => d.title.clone(),
                    DraftField::Author => d.author.clone(),
                })
                .unwrap_or_default()
        })
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_save.call(());
    };

    view! {
        <Show when=move || draft.with(|d| d.is_some())>
            <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-40">
                <form
                    on:submit=on_submit
                    class="bg-white rounded-lg shadow-xl w-full max-w-md p-6 space-y-4"
                >
                    <h2 class="text-xl font-semibold">{move || heading.get()}</h2>

                    <label class="block">
                        <span class="text-sm text-gray-600">"Title"</span>
                        <input
                            type="text"
                            name="title"
                            autofocus=true
                            class="mt-1 w-full rounded border border-gray-300 px-3 py-2 focus:border-green-700 focus:outline-none"
                            prop:value=move || field_value(DraftField::Title)
                            on:input=move |ev| on_input.call((DraftField::Title, event_target_value(&ev)))
                        />
                    </label>

                    <label class="block">
                        <span class="text-sm text-gray-600">"Author"</span>
                        <input
                            type="text"
                            name="author"
                            class="mt-1 w-full rounded border border-gray-300 px-3 py-2 focus:border-green-700 focus:outline-none"
                            prop:value=move || field_value(DraftField::Author)
                            on:input=move |ev| on_input.call((DraftField::Author, event_target_value(&ev)))
                        />
                    </label>

                    <div class="flex justify-end space-x-2 pt-2">
                        <button
                            type="button"
                            class="px-4 py-2 rounded text-gray-700 hover:bg-gray-100"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-4 py-2 rounded bg-green-700 hover:bg-green-800 text-white"
                        >
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
