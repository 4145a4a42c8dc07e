use leptos::prelude::*;

use crate::models::User;

#[component]
pub fn ProfileScreen(
    user: User,
    #[prop(into)] on_logout: Callback<()>,
    #[prop(into)] on_open_admin: Callback<()>,
) -> impl IntoView {
    let initial = user
        .name
        .chars()
        .next()
        .or_else(|| user.telegram_username.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let is_admin = user.is_admin;

    view! {
        <div>
            <div class="bg-white border-b border-gray-200 px-4 py-4 sticky top-0 z-10">
                <h1 class="text-2xl font-semibold text-gray-900">"Profile"</h1>
            </div>

            <div class="p-4 space-y-6">
                <div class="bg-white rounded-lg border border-gray-200 p-4">
                    <div class="flex items-center gap-4">
                        <div class="w-14 h-14 bg-blue-600 rounded-full flex items-center justify-center">
                            <span class="text-xl font-semibold text-white">{initial}</span>
                        </div>
                        <div>
                            <div class="flex items-center gap-2">
                                <h2 class="text-lg font-semibold text-gray-900">
                                    {format!("{} {}", user.name, user.surname).trim().to_string()}
                                </h2>
                                {is_admin.then(|| view! {
                                    <span class="px-2 py-0.5 rounded-full text-xs bg-purple-100 text-purple-800">"Admin"</span>
                                })}
                            </div>
                            {(!user.telegram_username.is_empty()).then(|| view! {
                                <p class="text-sm text-gray-600">{format!("@{}", user.telegram_username)}</p>
                            })}
                        </div>
                    </div>
                </div>

                <div class="bg-white rounded-lg border border-gray-200 divide-y divide-gray-100">
                    {is_admin.then(|| view! {
                        <button
                            class="w-full px-4 py-3 text-left text-purple-700 hover:bg-purple-50"
                            on:click=move |_| on_open_admin.run(())
                        >
                            "Admin panel"
                        </button>
                    })}
                    <button
                        class="w-full px-4 py-3 text-left text-red-600 hover:bg-red-50"
                        on:click=move |_| on_logout.run(())
                    >
                        "Log out"
                    </button>
                </div>
            </div>
        </div>
    }
}
