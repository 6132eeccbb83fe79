//! Book and document cards.

use leptos::*;

use bookhive::{Book, BookCard, DocumentRef};

/// Catalog card with optional Edit/Delete controls
#[component]
pub fn BookCardView(
    card: BookCard,
    on_edit: Callback<u64>,
    on_delete: Callback<u64>,
) -> impl IntoView {
    let id = card.id;

    view! {
        <div class="bg-white rounded-lg shadow-md p-4">
            <h3 class="text-lg font-semibold">{card.title}</h3>
            <p class="text-sm text-gray-500">{card.byline}</p>
            {card.show_controls.then(|| view! {
                <div class="mt-4 flex space-x-2">
                    <button
                        class="px-3 py-1 text-sm rounded border border-green-700 text-green-700 hover:bg-green-50"
                        on:click=move |_| on_edit.call(id)
                    >
                        "Edit"
                    </button>
                    <button
                        class="px-3 py-1 text-sm rounded border border-red-600 text-red-600 hover:bg-red-50"
                        on:click=move |_| on_delete.call(id)
                    >
                        "Delete"
                    </button>
                </div>
            })}
        </div>
    }
}

/// Read-only recommendation card, set apart with an accent border
#[component]
pub fn RecommendationCard(book: Book) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-lg p-4 border-l-8 border-green-700">
            <h3 class="text-lg font-medium">{book.title}</h3>
            <p class="text-sm text-gray-500">"by " {book.author}</p>
        </div>
    }
}

/// Plain catalog card for the dashboard
#[component]
pub fn CatalogCard(book: Book) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <h3 class="text-lg font-medium">{book.title}</h3>
            <p class="text-sm text-gray-500">"by " {book.author}</p>
        </div>
    }
}

/// PDF with a download link opening in a new tab
#[component]
pub fn DocumentCard(document: DocumentRef) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <p class="font-medium mb-3">{document.name}</p>
            <a
                href=document.url
                target="_blank"
                rel="noopener noreferrer"
                class="block w-full text-center bg-green-700 hover:bg-green-800 text-white rounded py-2"
            >
                "Download ⬇️"
            </a>
        </div>
    }
}
