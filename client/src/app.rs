//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::auth_provider::AuthProvider;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toast::Toast;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, section::SectionPage};
use crate::routes::{DASHBOARD, GOODS_RECEIPTS, INVOICE_CREATE, INVOICES, LOGIN_PATH, NEWS, REPORTS, USERS};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
///
/// Provides the auth context above the router so every guarded route and the
/// chrome read the same session state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/invoice-portal.css"/>
        <Title text="Invoice Portal"/>

        <AuthProvider>
            <Router>
                <Toast/>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <ProtectedRoute route=DASHBOARD><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("invoices")
                        view=|| view! { <ProtectedRoute route=INVOICES><SectionPage route=INVOICES/></ProtectedRoute> }
                    />
                    <Route
                        path=(StaticSegment("invoices"), StaticSegment("create"))
                        view=|| {
                            view! {
                                <ProtectedRoute route=INVOICE_CREATE>
                                    <SectionPage route=INVOICE_CREATE/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("goods-receipts")
                        view=|| {
                            view! {
                                <ProtectedRoute route=GOODS_RECEIPTS>
                                    <SectionPage route=GOODS_RECEIPTS/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("reports")
                        view=|| view! { <ProtectedRoute route=REPORTS><SectionPage route=REPORTS/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("users")
                        view=|| view! { <ProtectedRoute route=USERS><SectionPage route=USERS/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("news")
                        view=|| view! { <ProtectedRoute route=NEWS><SectionPage route=NEWS/></ProtectedRoute> }
                    />
                </Routes>
            </Router>
        </AuthProvider>
    }
}
