//! Profile Page
//!
//! Renders the signed-in user straight from the session.

use leptos::*;

use bookhive::ProfileView;

use crate::state::SessionState;

#[component]
pub fn ProfilePage(session: SessionState) -> impl IntoView {
    let snapshot = session.session();

    view! {
        {move || match snapshot.with(ProfileView::from_session) {
            ProfileView::Gate { message } => view! {
                <div class="container mx-auto px-4 py-20">
                    <h2 class="text-2xl">{message}</h2>
                </div>
            }.into_view(),
            ProfileView::Card { name, email, picture } => view! {
                <div class="container mx-auto max-w-md px-4 py-20">
                    <div class="bg-white rounded-lg shadow-md p-8 flex flex-col items-center space-y-4">
                        <img src=picture alt=name.clone() class="w-20 h-20 rounded-full" />
                        <h2 class="text-2xl">{name}</h2>
                        <p class="text-sm text-gray-600">{email}</p>
                    </div>
                </div>
            }.into_view(),
        }}
    }
}
