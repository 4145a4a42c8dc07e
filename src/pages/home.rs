use leptos::prelude::*;

use crate::models::Room;

#[component]
pub fn HomeScreen(
    rooms: ReadSignal<Vec<Room>>,
    #[prop(into)] on_room_select: Callback<Room>,
) -> impl IntoView {
    view! {
        <div>
            <div class="bg-white border-b border-gray-200 px-4 py-4 sticky top-0 z-10">
                <h1 class="text-2xl font-semibold text-gray-900">"Meeting rooms"</h1>
                <p class="text-sm text-gray-600">"Pick a room to see details and book it"</p>
            </div>

            <div class="p-4 space-y-4">
                {move || {
                    let list = rooms.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-center text-gray-500 py-8">"No rooms available"</p>
                        }
                        .into_any()
                    } else {
                        list.into_iter()
                            .map(|room| view! { <RoomCard room=room on_room_select=on_room_select/> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn RoomCard(room: Room, on_room_select: Callback<Room>) -> impl IntoView {
    let selected = room.clone();
    let badge_class = if room.is_occupied {
        "px-2 py-0.5 rounded-full text-xs font-medium text-white bg-red-500"
    } else {
        "px-2 py-0.5 rounded-full text-xs font-medium text-white bg-green-500"
    };

    view! {
        <div
            class="bg-white rounded-lg border border-gray-200 overflow-hidden cursor-pointer hover:shadow-md transition-shadow"
            on:click=move |_| on_room_select.run(selected.clone())
        >
            <img src=room.image.clone() alt=room.name.clone() class="w-full h-40 object-cover"/>
            <div class="p-4">
                <div class="flex items-center justify-between mb-1">
                    <h3 class="font-semibold text-gray-900">{room.name.clone()}</h3>
                    <span class=badge_class>
                        {if room.is_occupied { "Occupied" } else { "Available" }}
                    </span>
                </div>
                <p class="text-sm text-gray-600 mb-2">{room.description.clone()}</p>
                <p class="text-sm text-gray-600">{format!("Capacity: {} people", room.capacity)}</p>
                {room.current_booking.clone().map(|current| view! {
                    <p class="text-sm text-red-600 mt-2">
                        {format!("{} \u{2022} {} - {}", current.user, current.start_time, current.end_time)}
                    </p>
                })}
            </div>
        </div>
    }
}
