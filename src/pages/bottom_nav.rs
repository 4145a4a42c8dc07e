use leptos::prelude::*;

use crate::app::Screen;

const TABS: [(Screen, &str, &str); 3] = [
    (Screen::Home, "\u{1F3E0}", "Rooms"),
    (Screen::Bookings, "\u{1F4C5}", "Bookings"),
    (Screen::Profile, "\u{1F464}", "Profile"),
];

#[component]
pub fn BottomNavigation(
    active: ReadSignal<Screen>,
    booking_count: Memo<usize>,
    #[prop(into)] on_change: Callback<Screen>,
) -> impl IntoView {
    view! {
        <nav class="fixed bottom-0 inset-x-0 bg-white border-t border-gray-200 flex">
            {TABS
                .iter()
                .map(|(screen, icon, label)| {
                    let screen = *screen;
                    // The room-detail screen belongs to the rooms tab.
                    let is_active = move || {
                        let current = active.get();
                        current == screen || (screen == Screen::Home && current == Screen::Room)
                    };
                    view! {
                        <button
                            class=move || if is_active() {
                                "flex-1 py-2 text-center text-blue-600"
                            } else {
                                "flex-1 py-2 text-center text-gray-500"
                            }
                            on:click=move |_| on_change.run(screen)
                        >
                            <span class="relative inline-block text-xl">
                                {*icon}
                                {move || {
                                    let count = booking_count.get();
                                    (screen == Screen::Bookings && count > 0).then(|| view! {
                                        <span class="absolute -top-1 -right-3 px-1.5 rounded-full text-xs text-white bg-blue-600">
                                            {count}
                                        </span>
                                    })
                                }}
                            </span>
                            <span class="block text-xs">{*label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
