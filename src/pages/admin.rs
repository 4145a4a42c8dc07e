use leptos::prelude::*;

use crate::api;
use crate::models::DirectoryUser;

/// A directory row plus whether a local edit is still waiting for a server
/// endpoint that can persist it. The booking service has no role-update or
/// delete endpoint yet, so those edits stay pending rather than pretending
/// to have succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DirectoryEntry {
    user: DirectoryUser,
    unsynced: bool,
}

#[component]
pub fn AdminPanel(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let (entries, set_entries) = create_signal(Vec::<DirectoryEntry>::new());
    let (is_loading, set_is_loading) = create_signal(true);
    let (new_login, set_new_login) = create_signal(String::new());
    let (is_adding, set_is_adding) = create_signal(false);
    let (notice, set_notice) = create_signal::<Option<String>>(None);

    let fetch_users = move || {
        set_is_loading.set(true);
        leptos::task::spawn_local(async move {
            match api::fetch_users().await {
                Ok(users) => set_entries.set(
                    users
                        .into_iter()
                        .map(|user| DirectoryEntry {
                            user,
                            unsynced: false,
                        })
                        .collect(),
                ),
                Err(err) => {
                    set_notice.set(Some(format!("Could not load users: {err}")));
                    set_entries.set(Vec::new());
                }
            }
            set_is_loading.set(false);
        });
    };
    fetch_users();

    let handle_add = move |_| {
        if is_adding.get() {
            return;
        }
        let clean = new_login.get().trim().trim_start_matches('@').to_string();
        if clean.is_empty() {
            set_notice.set(Some("Enter a Telegram login".to_string()));
            return;
        }
        if entries
            .get()
            .iter()
            .any(|entry| entry.user.username == clean)
        {
            set_notice.set(Some("That user is already on the list".to_string()));
            return;
        }
        set_is_adding.set(true);
        leptos::task::spawn_local(async move {
            match api::add_user(&clean, false).await {
                Ok(()) => {
                    set_notice.set(Some(format!("@{clean} can now sign in")));
                    set_new_login.set(String::new());
                    fetch_users();
                }
                Err(err) => set_notice.set(Some(format!("Could not add user: {err}"))),
            }
            set_is_adding.set(false);
        });
    };

    let handle_toggle_admin = move |username: String| {
        let mut is_now_admin = false;
        set_entries.update(|all| {
            for entry in all.iter_mut() {
                if entry.user.username == username {
                    entry.user.is_admin = !entry.user.is_admin;
                    entry.unsynced = true;
                    is_now_admin = entry.user.is_admin;
                }
            }
        });
        let change = if is_now_admin {
            "now an admin"
        } else {
            "no longer an admin"
        };
        set_notice.set(Some(format!(
            "@{username} is {change} (not yet saved on the server)"
        )));
    };

    let handle_remove = move |username: String| {
        let is_admin = entries
            .get()
            .iter()
            .any(|entry| entry.user.username == username && entry.user.is_admin);
        if is_admin {
            set_notice.set(Some("Admins cannot be removed".to_string()));
            return;
        }
        set_entries.update(|all| all.retain(|entry| entry.user.username != username));
        set_notice.set(Some(format!(
            "@{username} removed (not yet saved on the server)"
        )));
    };

    let admin_count = create_memo(move |_| {
        entries
            .get()
            .iter()
            .filter(|entry| entry.user.is_admin)
            .count()
    });
    let unsynced_count = create_memo(move |_| {
        entries.get().iter().filter(|entry| entry.unsynced).count()
    });

    view! {
        <div>
            <div class="bg-white border-b border-gray-200 px-4 py-3 sticky top-0 z-10">
                <div class="flex items-center gap-3">
                    <button
                        class="p-2 -ml-2 text-gray-700 hover:text-gray-900"
                        on:click=move |_| on_back.run(())
                    >
                        "\u{2190}"
                    </button>
                    <div>
                        <h1 class="text-xl font-semibold text-gray-900">"Admin panel"</h1>
                        <p class="text-sm text-gray-600">"Manage who can use the app"</p>
                    </div>
                </div>
            </div>

            <div class="p-4 space-y-6">
                <div class="bg-white rounded-lg border border-gray-200 p-4">
                    <h3 class="font-semibold text-gray-900 mb-3">"Overview"</h3>
                    <div class="grid grid-cols-3 gap-4 text-center">
                        <div>
                            <div class="text-2xl font-semibold text-blue-600">
                                {move || if is_loading.get() { "...".to_string() } else { entries.get().len().to_string() }}
                            </div>
                            <div class="text-xs text-gray-600">"Users"</div>
                        </div>
                        <div>
                            <div class="text-2xl font-semibold text-purple-600">
                                {move || if is_loading.get() { "...".to_string() } else { admin_count.get().to_string() }}
                            </div>
                            <div class="text-xs text-gray-600">"Admins"</div>
                        </div>
                        <div>
                            <div class="text-2xl font-semibold text-amber-600">
                                {move || unsynced_count.get().to_string()}
                            </div>
                            <div class="text-xs text-gray-600">"Unsynced edits"</div>
                        </div>
                    </div>
                </div>

                <div class="bg-white rounded-lg border border-gray-200 p-4">
                    <h3 class="font-semibold text-gray-900 mb-1">"Add a user"</h3>
                    <p class="text-sm text-gray-600 mb-3">
                        "Only logins on this list can sign in. Enter the Telegram login with or without the @."
                    </p>
                    <div class="flex gap-2">
                        <input
                            type="text"
                            class="flex-1 px-3 py-2 border border-gray-300 rounded-md"
                            placeholder="username or @username"
                            prop:value=new_login
                            on:input=move |ev| set_new_login.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    handle_add(());
                                }
                            }
                        />
                        <button
                            class="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50"
                            disabled=move || is_adding.get()
                            on:click=move |_| handle_add(())
                        >
                            {move || if is_adding.get() { "Adding..." } else { "Add" }}
                        </button>
                    </div>
                </div>

                {move || notice.get().map(|message| view! {
                    <p class="text-sm text-amber-700">{message}</p>
                })}

                <div class="bg-white rounded-lg border border-gray-200 p-4">
                    <h3 class="font-semibold text-gray-900 mb-3">"Allowed users"</h3>
                    {move || {
                        if is_loading.get() {
                            return view! {
                                <div class="flex items-center justify-center py-8">
                                    <div class="w-6 h-6 border-2 border-blue-600 border-t-transparent rounded-full animate-spin mr-3"></div>
                                    <span class="text-gray-600">"Loading users..."</span>
                                </div>
                            }
                            .into_any();
                        }
                        let all = entries.get();
                        if all.is_empty() {
                            return view! {
                                <p class="text-center text-gray-500 py-8">"No users found"</p>
                            }
                            .into_any();
                        }
                        all.into_iter()
                            .map(|entry| {
                                let username = entry.user.username.clone();
                                let toggle_name = username.clone();
                                let remove_name = username.clone();
                                let initial = username
                                    .chars()
                                    .next()
                                    .map(|c| c.to_uppercase().to_string())
                                    .unwrap_or_default();
                                let is_admin = entry.user.is_admin;
                                view! {
                                    <div class="flex items-center justify-between py-3 border-b border-gray-100 last:border-b-0">
                                        <div class="flex items-center gap-3">
                                            <div class="w-10 h-10 bg-blue-600 rounded-full flex items-center justify-center">
                                                <span class="text-sm font-semibold text-white">{initial}</span>
                                            </div>
                                            <div>
                                                <div class="flex items-center gap-2">
                                                    <p class="font-medium text-gray-900">{format!("@{username}")}</p>
                                                    {is_admin.then(|| view! {
                                                        <span class="px-2 py-0.5 rounded-full text-xs bg-purple-100 text-purple-800">"Admin"</span>
                                                    })}
                                                    {entry.unsynced.then(|| view! {
                                                        <span class="px-2 py-0.5 rounded-full text-xs bg-amber-100 text-amber-800">"Unsynced"</span>
                                                    })}
                                                </div>
                                                <p class="text-sm text-gray-600">"Telegram user"</p>
                                            </div>
                                        </div>
                                        <div class="flex items-center gap-2">
                                            <button
                                                class="px-3 py-1.5 text-sm border border-gray-200 rounded-md text-blue-600 hover:bg-blue-50"
                                                on:click=move |_| handle_toggle_admin(toggle_name.clone())
                                            >
                                                {if is_admin { "Revoke admin" } else { "Make admin" }}
                                            </button>
                                            {(!is_admin).then(|| view! {
                                                <button
                                                    class="px-3 py-1.5 text-sm border border-red-200 rounded-md text-red-600 hover:bg-red-50"
                                                    on:click=move |_| handle_remove(remove_name.clone())
                                                >
                                                    "Remove"
                                                </button>
                                            })}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
