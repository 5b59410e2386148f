//! Landing page after sign-in.

use leptos::prelude::*;

/// Dashboard placeholder. The panel's own pages mount below this route.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1>"Painel Administrativo"</h1>
            <p>"Bem-vindo ao painel administrativo."</p>
        </div>
    }
}
