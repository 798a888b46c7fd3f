use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn};
use web_sys::window;

mod blog;
mod config;
mod content;
mod dom;
mod error;
mod hooks;
mod visual;

mod components {
    pub mod cursor;
    pub mod loading;
    pub mod navbar;
    pub mod reveal;
    pub mod theme;
    pub mod toast;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod projects;
    pub mod skills;
    pub mod testimonials;
    pub mod timeline;
}
mod pages {
    pub mod blog;
    pub mod blog_post;
    pub mod home;
    pub mod not_found;
}

use components::{
    cursor::CustomCursor,
    loading::{LoadingAnimation, PageLoader},
    navbar::Navbar,
    toast::ToastProvider,
};
use dom::EventListener;
use error::{install_panic_hook, ErrorBoundary};
use pages::{blog::Blog, blog_post::BlogPostPage, home::Home, not_found::NotFound};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:id")]
    BlogPost { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { id } => {
            info!("Rendering BlogPost page for {}", id);
            html! { <BlogPostPage {id} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

fn document_loaded() -> bool {
    window()
        .and_then(|w| w.document())
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(true)
}

#[function_component]
fn App() -> Html {
    let booting = use_state_eq(|| !document_loaded());

    {
        let booting = booting.clone();
        use_effect_with_deps(
            move |_| {
                // The overlay stays up until the window load event.
                let listener = window().and_then(|window| {
                    let booting = booting.clone();
                    EventListener::new(&window, "load", move |_| booting.set(false))
                        .map_err(|err| warn!("Boot overlay listener failed: {}", err))
                        .ok()
                });
                if listener.is_none() {
                    booting.set(false);
                }
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <BrowserRouter>
            <ToastProvider>
                <CustomCursor />
                <Navbar />
                <ErrorBoundary>
                    <Suspense fallback={html! { <PageLoader /> }}>
                        <Switch<Route> render={switch} />
                    </Suspense>
                </ErrorBoundary>
                <LoadingAnimation is_loading={*booting} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Panics end in the static recovery panel instead of a frozen page
    install_panic_hook();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolve(path: &str) -> Option<Route> {
        Route::recognize(path).or_else(Route::not_found_route)
    }

    #[test]
    fn blog_routes_resolve() {
        assert_eq!(resolve("/blog"), Some(Route::Blog));
        assert_eq!(
            resolve("/blog/future-of-web-development"),
            Some(Route::BlogPost {
                id: "future-of-web-development".into()
            })
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(resolve("/does/not/exist"), Some(Route::NotFound));
        assert_eq!(resolve("/projects"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Blog.to_path(), "/blog");
        assert_eq!(
            Route::BlogPost { id: "does-not-exist".into() }.to_path(),
            "/blog/does-not-exist"
        );
    }
}
