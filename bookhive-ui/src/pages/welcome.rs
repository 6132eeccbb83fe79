//! Welcome Page

use leptos::*;

use bookhive::Welcome;

#[component]
pub fn WelcomePage() -> impl IntoView {
    let copy = Welcome::new();

    view! {
        <div class="bg-green-50 min-h-screen py-20">
            <div class="container mx-auto max-w-3xl px-4 text-center">
                <h1 class="text-5xl font-bold mb-6">{copy.headline}</h1>
                <p class="text-xl text-gray-600">{copy.tagline}</p>
            </div>
        </div>
    }
}
