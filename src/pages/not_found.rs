use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_page_mount;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_page_mount("Route:NotFound");

    html! {
        <div class="page-center">
            <div class="page-center-content">
                <h1 class="not-found-code">{"404"}</h1>
                <p class="not-found-title">{"Page not found"}</p>
                <p class="muted">{"The page you're looking for doesn't exist or has moved."}</p>
                <Link<Route> to={Route::Home} classes="btn btn-primary">
                    {"Go home"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found-code {
                    font-size: 4rem;
                    font-weight: 700;
                    color: var(--primary);
                }
                .page-center-content .muted {
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
