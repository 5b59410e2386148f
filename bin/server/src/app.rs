//! Main Leptos application component and routing.

use crate::auth::provide_auth;
use crate::notifications::{NotificationToasts, provide_notifications};
use crate::pages::{DashboardPage, LoginPage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use samcast_admin_login::LOGIN_PATH;

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_notifications();
    provide_auth();

    view! {
        <Title text="SamCast Admin"/>
        <Router>
            <NotificationToasts/>
            <main class="container">
                <Routes fallback=|| "Página não encontrada.".into_view()>
                    <Route path=path!("/") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/dashboard") view=DashboardPage/>
                </Routes>
            </main>
        </Router>
    }
}
