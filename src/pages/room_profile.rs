use leptos::prelude::*;

use crate::api::{self, ApiError};
use crate::models::{CreateBookingRequest, Room, User};
use crate::slots::{self, BookingDraft};

/// Feedback shown under the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormNotice {
    Error(String),
    Success(String),
}

const AMENITIES: [(&str, &str); 4] = [
    ("\u{1F3A4}", "Audio system"),
    ("\u{1F4BE}", "Whiteboard"),
    ("\u{1F4F1}", "Video calls"),
    ("\u{2744}\u{FE0F}", "Air conditioning"),
];

#[component]
pub fn RoomProfile(
    room: Room,
    user: User,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_booked: Callback<(String, String, String, String)>,
) -> impl IntoView {
    let now = slots::now_local();
    let today = slots::local_date_string(now);
    let date_options = slots::date_options(now);

    let (draft, set_draft) = create_signal(BookingDraft::for_date(today));
    let (is_submitting, set_is_submitting) = create_signal(false);
    let (notice, set_notice) = create_signal::<Option<FormNotice>>(None);

    // Re-read the clock whenever the draft changes so slot lists never show
    // stale "today" filtering after the page has been open for a while.
    let start_options = create_memo(move |_| {
        let selected = draft.get().date.unwrap_or_default();
        slots::start_time_options(slots::now_local(), &selected)
    });
    let end_options = create_memo(move |_| {
        let selected = draft.get().date.unwrap_or_default();
        slots::end_time_options(slots::now_local(), &selected)
    });

    let handle_date_change = move |ev| {
        set_draft.update(|current| current.select_date(event_target_value(&ev)));
        set_notice.set(None);
    };
    let handle_start_change = move |ev| {
        set_draft.update(|current| current.select_start(event_target_value(&ev)));
    };
    let handle_end_change = move |ev| {
        set_draft.update(|current| current.select_end(event_target_value(&ev)));
    };

    let room_id = room.id.clone();
    let user_name = user.booking_name().to_string();

    let handle_book = move |_| {
        if is_submitting.get() {
            return;
        }
        let current = draft.get();
        if let Err(err) = slots::validate_draft(&current) {
            set_notice.set(Some(FormNotice::Error(err.to_string())));
            return;
        }
        let (Some(date), Some(start_time), Some(end_time)) =
            (current.date, current.start_time, current.end_time)
        else {
            return;
        };
        if user_name.is_empty() {
            set_notice.set(Some(FormNotice::Error(
                "Could not determine the current user".to_string(),
            )));
            return;
        }

        let request = CreateBookingRequest {
            room_id: room_id.clone(),
            date,
            start_time,
            end_time,
            user_name: user_name.clone(),
        };
        set_is_submitting.set(true);
        set_notice.set(None);

        leptos::task::spawn_local(async move {
            match api::create_booking(&request).await {
                Ok(()) => {
                    set_notice.set(Some(FormNotice::Success("Room booked".to_string())));
                    on_booked.run((
                        request.room_id,
                        request.date,
                        request.start_time,
                        request.end_time,
                    ));
                }
                Err(ApiError::Conflict { booked_by }) => {
                    // Back to slot selection; the chosen date stays.
                    set_notice.set(Some(FormNotice::Error(format!(
                        "Already booked by {booked_by}"
                    ))));
                    set_draft.update(|current| current.clear_times());
                }
                Err(err) => {
                    set_notice.set(Some(FormNotice::Error(format!("Booking failed: {err}"))));
                }
            }
            set_is_submitting.set(false);
        });
    };

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
                    <h1 class="text-xl font-semibold text-gray-900">"Room details"</h1>
                </div>
            </div>

            <div class="p-4 space-y-6">
                <div class="bg-white rounded-lg border border-gray-200 overflow-hidden">
                    <div class="relative">
                        <img src=room.image.clone() alt=room.name.clone() class="w-full h-64 object-cover"/>
                        <span class=if room.is_occupied {
                            "absolute top-4 right-4 px-2 py-1 rounded-full text-xs font-medium text-white bg-red-500"
                        } else {
                            "absolute top-4 right-4 px-2 py-1 rounded-full text-xs font-medium text-white bg-green-500"
                        }>
                            {if room.is_occupied { "Occupied" } else { "Available" }}
                        </span>
                    </div>
                    <div class="p-4">
                        <h2 class="text-2xl font-semibold text-gray-900 mb-2">{room.name.clone()}</h2>
                        <p class="text-gray-600 mb-4">{room.description.clone()}</p>
                        <p class="text-sm text-gray-600">{format!("Capacity: {} people", room.capacity)}</p>
                        {room.current_booking.clone().map(|current| view! {
                            <div class="mt-4 p-3 bg-red-50 border border-red-200 rounded-lg">
                                <p class="text-sm font-medium text-red-800">"Occupied right now"</p>
                                <p class="text-sm text-red-600 mt-1">
                                    {format!("{} \u{2022} {} - {}", current.user, current.start_time, current.end_time)}
                                </p>
                            </div>
                        })}
                    </div>
                </div>

                <div class="bg-white rounded-lg border border-gray-200">
                    <div class="p-4 border-b border-gray-100">
                        <h3 class="font-semibold text-gray-900">"Book this room"</h3>
                        <p class="text-sm text-gray-600">"Choose a date and time"</p>
                    </div>
                    <div class="p-4 space-y-4">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-2">"Date"</label>
                            <select
                                class="w-full px-3 py-2 border border-gray-300 rounded-md bg-white"
                                prop:value=move || draft.get().date.unwrap_or_default()
                                on:change=handle_date_change
                            >
                                {date_options
                                    .iter()
                                    .map(|option| view! {
                                        <option value=option.value.clone()>{option.label.clone()}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">"Start time"</label>
                                <select
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md bg-white"
                                    prop:value=move || draft.get().start_time.unwrap_or_default()
                                    on:change=handle_start_change
                                >
                                    <option value="">"Start"</option>
                                    {move || start_options
                                        .get()
                                        .into_iter()
                                        .map(|option| view! {
                                            <option value=option.value.clone()>{option.label.clone()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-2">"End time"</label>
                                <select
                                    class="w-full px-3 py-2 border border-gray-300 rounded-md bg-white"
                                    prop:value=move || draft.get().end_time.unwrap_or_default()
                                    on:change=handle_end_change
                                >
                                    <option value="">"End"</option>
                                    {move || end_options
                                        .get()
                                        .into_iter()
                                        .map(|option| view! {
                                            <option value=option.value.clone()>{option.label.clone()}</option>
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        {move || notice.get().map(|notice| match notice {
                            FormNotice::Error(message) => view! {
                                <p class="text-sm text-red-600">{message}</p>
                            }
                            .into_any(),
                            FormNotice::Success(message) => view! {
                                <p class="text-sm text-emerald-600">{message}</p>
                            }
                            .into_any(),
                        })}

                        <button
                            class="w-full px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled=move || is_submitting.get() || !draft.get().is_complete()
                            on:click=handle_book
                        >
                            {move || if is_submitting.get() { "Booking..." } else { "Book room" }}
                        </button>
                    </div>
                </div>

                <div class="bg-white rounded-lg border border-gray-200">
                    <div class="p-4 border-b border-gray-100">
                        <h3 class="font-semibold text-gray-900">"Amenities"</h3>
                    </div>
                    <div class="p-4 grid grid-cols-2 gap-3">
                        {AMENITIES
                            .iter()
                            .map(|(icon, label)| view! {
                                <div class="flex items-center gap-2 text-sm text-gray-600">
                                    <span class="text-lg">{*icon}</span>
                                    <span>{*label}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
