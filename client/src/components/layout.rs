//! Public page shell: navbar, routed outlet, footer.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::footer::Footer;
use super::navbar::Navbar;

/// Wraps every public route; the matched child route renders in `<Outlet/>`.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <main class="layout__content">
                <Outlet/>
            </main>
            <Footer/>
        </div>
    }
}
