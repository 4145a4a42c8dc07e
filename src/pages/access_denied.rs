use leptos::prelude::*;

#[component]
pub fn AccessDeniedScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center p-4">
            <div class="bg-white rounded-lg border border-gray-200 p-8 max-w-md text-center">
                <div class="w-16 h-16 mx-auto mb-4 bg-red-100 rounded-full flex items-center justify-center">
                    <span class="text-2xl">"\u{1F512}"</span>
                </div>
                <h1 class="text-xl font-semibold text-gray-900 mb-2">"Access denied"</h1>
                <p class="text-sm text-gray-600 mb-4">
                    "This app is available to invited users only. Ask an administrator to add your Telegram login to the allowed list, then reopen the app."
                </p>
                <p class="text-xs text-gray-500">
                    "Open the app through the Telegram Mini App so it can see who you are."
                </p>
            </div>
        </div>
    }
}
