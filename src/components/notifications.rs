//! Notification Toasts
//!
//! Appended to `<body>`; each toast is removed by the context's timer.

use leptos::prelude::*;

use crate::context::use_shop;

#[component]
pub fn Notifications() -> impl IntoView {
    let ctx = use_shop();

    view! {
        <For
            each=move || ctx.notifications()
            key=|notification| notification.id
            children=|notification| view! { <div class="notification">{notification.message}</div> }
        />
    }
}
