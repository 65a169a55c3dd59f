use crate::dashboards::OverviewDashboard;
use crate::domain::a001_bot_event::ui::list::BotEventList;
use crate::domain::a002_ip_aggregate::ui::list::IpList;
use crate::domain::a003_path_aggregate::ui::list::PathList;
use crate::domain::a004_attack::ui::list::AttackList;
use crate::domain::a005_submission::ui::list::AdminSubmissions;
use crate::layout::Shell;
use crate::usecases::u101_contact_bait::ContactBait;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-header__title">"Page not found"</h1>
            <a href="/">"Back to the dashboard"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/bot-event-list") view=BotEventList />
                    <Route path=path!("/ip-list") view=IpList />
                    <Route path=path!("/path-list") view=PathList />
                    <Route path=path!("/attack-list") view=AttackList />
                    <Route path=path!("/admin") view=AdminSubmissions />
                    // Decoy paths advertised in the sitemap all render the same bait form.
                    <Route path=path!("/contact") view=ContactBait />
                    <Route path=path!("/feedback") view=ContactBait />
                    <Route path=path!("/company") view=ContactBait />
                    <Route path=path!("/search") view=ContactBait />
                    <Route path=path!("/query") view=ContactBait />
                    <Route path=path!("/lookup") view=ContactBait />
                    <Route path=path!("/filter") view=ContactBait />
                    <Route path=path!("/send-message") view=ContactBait />
                </Routes>
            </Shell>
        </Router>
    }
}
