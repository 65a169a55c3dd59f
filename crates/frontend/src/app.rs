use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Every page reads the API base from context.
    provide_context(ApiConfig::from_build_env());

    view! {
        <AppRoutes />
    }
}
