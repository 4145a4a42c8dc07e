use chrono::NaiveDate;
use leptos::prelude::*;

use crate::api;
use crate::models::{Booking, User};
use crate::slots;

fn booking_end(booking: &Booking) -> Option<chrono::NaiveDateTime> {
    let date = NaiveDate::parse_from_str(&booking.date, "%Y-%m-%d").ok()?;
    slots::slot_end_datetime(date, &booking.end_time)
}

fn friendly_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => slots::date_label(slots::now_local(), date),
        Err(_) => date_str.to_string(),
    }
}

#[component]
pub fn BookingsScreen(
    user: User,
    local_bookings: Memo<Vec<Booking>>,
    #[prop(into)] on_cancel: Callback<String>,
) -> impl IntoView {
    let (server_bookings, set_server_bookings) = create_signal(Vec::<Booking>::new());
    let (is_loading, set_is_loading) = create_signal(true);
    let (notice, set_notice) = create_signal::<Option<String>>(None);

    let user_name = user.booking_name().to_string();
    leptos::task::spawn_local(async move {
        if user_name.is_empty() {
            set_is_loading.set(false);
            return;
        }
        match api::fetch_upcoming_bookings(&user_name).await {
            Ok(list) => set_server_bookings.set(list),
            Err(err) => set_notice.set(Some(format!("Could not load bookings: {err}"))),
        }
        set_is_loading.set(false);
    });

    // Server list wins; the session-local records are only a fallback for
    // bookings made before the server list loads.
    let visible = create_memo(move |_| {
        let from_server = server_bookings.get();
        if from_server.is_empty() {
            local_bookings.get()
        } else {
            from_server
        }
    });

    let split = create_memo(move |_| {
        let now = slots::now_local();
        let mut upcoming = Vec::new();
        let mut past = Vec::new();
        for booking in visible.get() {
            match booking_end(&booking) {
                Some(end) if end > now => upcoming.push(booking),
                Some(_) => past.push(booking),
                // Unparseable dates stay visible rather than vanishing.
                None => upcoming.push(booking),
            }
        }
        (upcoming, past)
    });

    let handle_cancel = move |booking: Booking| {
        on_cancel.run(booking.id.clone());
        set_notice.set(Some(format!("Booking for {} cancelled", booking.room_name)));
    };

    view! {
        <div>
            <div class="bg-white border-b border-gray-200 px-4 py-4 sticky top-0 z-10">
                <h1 class="text-2xl font-semibold text-gray-900">"My bookings"</h1>
                <p class="text-sm text-gray-600">"Your upcoming and past room reservations"</p>
            </div>

            <div class="p-4 space-y-6">
                {move || notice.get().map(|message| view! {
                    <p class="text-sm text-amber-600">{message}</p>
                })}

                {move || if is_loading.get() {
                    view! {
                        <div class="bg-white rounded-lg border border-gray-200 p-8 text-center">
                            <div class="w-8 h-8 border-2 border-blue-600 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
                            <p class="text-sm text-gray-600">"Loading your bookings..."</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div class="hidden"></div> }.into_any()
                }}

                <div>
                    <div class="flex items-center justify-between mb-4">
                        <h2 class="text-lg font-semibold text-gray-900">"Upcoming"</h2>
                        {move || {
                            let count = split.get().0.len();
                            (count > 0).then(|| view! {
                                <span class="px-2 py-0.5 rounded-full text-xs text-white bg-blue-600">
                                    {count}
                                </span>
                            })
                        }}
                    </div>
                    {move || {
                        let upcoming = split.get().0;
                        if upcoming.is_empty() {
                            view! {
                                <div class="bg-white rounded-lg border border-gray-200 p-8 text-center">
                                    <h3 class="font-medium text-gray-900 mb-2">"No upcoming bookings"</h3>
                                    <p class="text-sm text-gray-600">"Book a room to see your reservations here"</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            upcoming
                                .into_iter()
                                .map(|booking| {
                                    let for_cancel = booking.clone();
                                    view! {
                                        <div class="bg-white rounded-lg border border-gray-200 p-4 mb-3">
                                            <div class="flex items-start justify-between">
                                                <div>
                                                    <div class="flex items-center gap-2 mb-2">
                                                        <h3 class="font-semibold text-gray-900">{booking.room_name.clone()}</h3>
                                                        <span class="px-2 py-0.5 rounded-full text-xs bg-green-100 text-green-800">"Active"</span>
                                                    </div>
                                                    <p class="text-sm text-gray-600">{friendly_date(&booking.date)}</p>
                                                    <p class="text-sm text-gray-600">
                                                        {format!("{} - {}", booking.start_time, booking.end_time)}
                                                    </p>
                                                </div>
                                                <button
                                                    class="px-3 py-1.5 text-sm text-red-600 border border-red-200 rounded-md hover:bg-red-50"
                                                    on:click=move |_| handle_cancel(for_cancel.clone())
                                                >
                                                    "Cancel"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>

                {move || {
                    let past = split.get().1;
                    (!past.is_empty()).then(|| view! {
                        <div>
                            <div class="flex items-center justify-between mb-4">
                                <h2 class="text-lg font-semibold text-gray-900">"Past"</h2>
                                <span class="px-2 py-0.5 rounded-full text-xs bg-gray-200 text-gray-700">
                                    {past.len()}
                                </span>
                            </div>
                            {past
                                .iter()
                                .map(|booking| view! {
                                    <div class="bg-white rounded-lg border border-gray-200 p-4 mb-3 opacity-75">
                                        <div class="flex items-center gap-2 mb-2">
                                            <h3 class="font-semibold text-gray-700">{booking.room_name.clone()}</h3>
                                            <span class="px-2 py-0.5 rounded-full text-xs bg-gray-200 text-gray-700">"Finished"</span>
                                        </div>
                                        <p class="text-sm text-gray-500">{friendly_date(&booking.date)}</p>
                                        <p class="text-sm text-gray-500">
                                            {format!("{} - {}", booking.start_time, booking.end_time)}
                                        </p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    })
                }}

                <div class="bg-white rounded-lg border border-gray-200 p-4">
                    <h3 class="font-medium text-gray-900 mb-3">"Summary"</h3>
                    <div class="grid grid-cols-2 gap-4 text-center">
                        <div>
                            <div class="text-2xl font-semibold text-blue-600">
                                {move || split.get().0.len()}
                            </div>
                            <div class="text-xs text-gray-600">"Upcoming"</div>
                        </div>
                        <div>
                            <div class="text-2xl font-semibold text-gray-600">
                                {move || split.get().1.len()}
                            </div>
                            <div class="text-xs text-gray-600">"Finished"</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
