//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `/login` and `/register` render standalone. Every other route nests under
//! the `Layout` parent route, which renders navbar + footer around an
//! `<Outlet/>`. The wildcard child is declared last so every specific path
//! wins over it.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::auth::{LocalAuthClient, SharedAuthClient};
use crate::net::storage::BrowserStorage;
use crate::pages::{
    about::AboutPage, artisan::ArtisanPage, contact::ContactPage, events::EventsPage, gallery::GalleryPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage, services::ServicesPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth: SharedAuthClient = Arc::new(LocalAuthClient::new(BrowserStorage));
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/taaru.css"/>
        <Title text="Taaru Sénégal"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("artisan"), ParamSegment("id")) view=ArtisanPage/>
                    <Route path=StaticSegment("evenements") view=EventsPage/>
                    <Route path=StaticSegment("galeries") view=GalleryPage/>
                    <Route path=StaticSegment("a-propos") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("formations") view=NotFoundPage/>
                    <Route path=WildcardSegment("any") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
