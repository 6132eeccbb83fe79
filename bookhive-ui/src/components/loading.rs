//! Loading Component

use leptos::*;

/// Centered loading spinner
#[component]
pub fn Loading(
    #[prop(default = "min-h-[30vh]")]
    min_height: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex items-center justify-center {}", min_height)>
            <div class="w-10 h-10 border-4 border-green-200 border-t-green-700 rounded-full animate-spin" />
        </div>
    }
}
