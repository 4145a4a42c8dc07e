use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{FlatRoutes, Route, Router},
    StaticSegment,
};

use crate::api;
use crate::models::{Booking, BookingStatus, Room, User};
use crate::pages::access_denied::AccessDeniedScreen;
use crate::pages::admin::AdminPanel;
use crate::pages::bookings::BookingsScreen;
use crate::pages::bottom_nav::BottomNavigation;
use crate::pages::home::HomeScreen;
use crate::pages::profile::ProfileScreen;
use crate::pages::room_profile::RoomProfile;
use crate::session;
use crate::telegram;

/// Which screen the bottom navigation is showing. The admin panel sits on
/// top of these as an overlay, and the access-denied screen replaces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Room,
    Bookings,
    Profile,
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Coworking Rooms"/>
        <Router>
            <FlatRoutes fallback=|| "Page not found.">
                <Route path=StaticSegment("") view=MainScreen/>
            </FlatRoutes>
        </Router>
    }
}

#[component]
fn MainScreen() -> impl IntoView {
    let (screen, set_screen) = create_signal(Screen::Home);
    let (current_user, set_current_user) = create_signal::<Option<User>>(None);
    let (access_checked, set_access_checked) = create_signal(false);
    let (show_admin, set_show_admin) = create_signal(false);
    let (rooms, set_rooms) = create_signal(Vec::<Room>::new());
    let (selected_room, set_selected_room) = create_signal::<Option<Room>>(None);
    let (bookings, set_bookings) = create_signal(Vec::<Booking>::new());

    // Restore a persisted session, otherwise authorize the Telegram
    // identity against the access-control directory.
    leptos::task::spawn_local(async move {
        if let Some(user) = session::load_current_user() {
            set_current_user.set(Some(user));
            set_access_checked.set(true);
            return;
        }

        let Some(identity) = telegram::current_telegram_user() else {
            set_access_checked.set(true);
            return;
        };

        match api::check_access(&identity.username).await {
            Ok(result) if result.allowed => {
                let user = User {
                    id: identity.username.clone(),
                    name: result.name.unwrap_or(identity.first_name),
                    surname: result.surname.unwrap_or(identity.last_name),
                    telegram_username: identity.username,
                    is_admin: result.is_admin,
                };
                session::save_current_user(&user);
                set_current_user.set(Some(user));
            }
            Ok(_) => {}
            Err(err) => {
                // Treat a failed check as no access.
                leptos::logging::error!("access check failed: {err}");
            }
        }
        set_access_checked.set(true);
    });

    leptos::task::spawn_local(async move {
        match api::fetch_rooms().await {
            Ok(list) => set_rooms.set(list),
            Err(err) => leptos::logging::error!("failed to load rooms: {err}"),
        }
    });

    let handle_room_select = Callback::new(move |room: Room| {
        set_selected_room.set(Some(room));
        set_screen.set(Screen::Room);
    });

    // The server already accepted the booking; keep a session-local record
    // so the bookings screen has something to show immediately.
    let handle_booked =
        Callback::new(move |(room_id, date, start_time, end_time): (String, String, String, String)| {
            let Some(user) = current_user.get_untracked() else {
                return;
            };
            let room_name = selected_room
                .get_untracked()
                .filter(|room| room.id == room_id)
                .map(|room| room.name)
                .unwrap_or_else(|| "Room".to_string());
            let booking = Booking {
                id: chrono::Local::now().timestamp_millis().to_string(),
                room_id,
                room_name,
                user_id: user.id,
                date,
                start_time,
                end_time,
                status: BookingStatus::Active,
            };
            set_bookings.update(|all| all.push(booking));
            set_screen.set(Screen::Bookings);
        });

    let handle_cancel = Callback::new(move |booking_id: String| {
        set_bookings.update(|all| {
            for booking in all.iter_mut() {
                if booking.id == booking_id {
                    booking.status = BookingStatus::Cancelled;
                }
            }
        });
    });

    let handle_logout = Callback::new(move |_: ()| {
        session::clear_current_user();
        set_current_user.set(None);
        set_show_admin.set(false);
    });

    let active_bookings = create_memo(move |_| {
        let user_id = current_user.get().map(|user| user.id);
        bookings
            .get()
            .into_iter()
            .filter(|booking| {
                Some(&booking.user_id) == user_id.as_ref()
                    && booking.status == BookingStatus::Active
            })
            .collect::<Vec<_>>()
    });
    let booking_count = create_memo(move |_| active_bookings.get().len());

    view! {
        <div class="min-h-screen bg-gray-50 pb-16">
            {move || {
                if !access_checked.get() {
                    return view! { <LoadingScreen/> }.into_any();
                }
                let Some(user) = current_user.get() else {
                    return view! { <AccessDeniedScreen/> }.into_any();
                };
                if show_admin.get() && user.is_admin {
                    return view! {
                        <AdminPanel on_back=Callback::new(move |_: ()| set_show_admin.set(false))/>
                    }
                    .into_any();
                }
                match screen.get() {
                    Screen::Home => view! {
                        <HomeScreen rooms=rooms on_room_select=handle_room_select/>
                    }
                    .into_any(),
                    Screen::Room => match selected_room.get() {
                        Some(room) => view! {
                            <RoomProfile
                                room=room
                                user=user
                                on_back=Callback::new(move |_: ()| set_screen.set(Screen::Home))
                                on_booked=handle_booked
                            />
                        }
                        .into_any(),
                        None => view! {
                            <HomeScreen rooms=rooms on_room_select=handle_room_select/>
                        }
                        .into_any(),
                    },
                    Screen::Bookings => view! {
                        <BookingsScreen
                            user=user
                            local_bookings=active_bookings
                            on_cancel=handle_cancel
                        />
                    }
                    .into_any(),
                    Screen::Profile => view! {
                        <ProfileScreen
                            user=user
                            on_logout=handle_logout
                            on_open_admin=Callback::new(move |_: ()| set_show_admin.set(true))
                        />
                    }
                    .into_any(),
                }
            }}
            {move || {
                if access_checked.get() && current_user.get().is_some() && !show_admin.get() {
                    view! {
                        <BottomNavigation
                            active=screen
                            booking_count=booking_count
                            on_change=Callback::new(move |next: Screen| set_screen.set(next))
                        />
                    }
                    .into_any()
                } else {
                    view! { <div class="hidden"></div> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <div class="w-8 h-8 border-2 border-blue-600 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
                <p class="text-gray-500">"Loading..."</p>
            </div>
        </div>
    }
}
