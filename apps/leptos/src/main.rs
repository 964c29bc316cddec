//! CareLink donor portal, client-side rendered.

mod api;
mod centers;

use centers::CentersPage;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <main class="portal">
            <CentersPage/>
        </main>
    }
}
