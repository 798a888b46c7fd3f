use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme::ThemeToggle;
use crate::content::SectionId;
use crate::dom::{scroll_to_section, EventListener};
use crate::Route;

/// Scroll offset past which the bar gets its solid background.
const SCROLLED_AFTER: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Blog,
    Section(SectionId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavItem {
    pub fn href(&self) -> String {
        match self.target {
            NavTarget::Home => Route::Home.to_path(),
            NavTarget::Blog => Route::Blog.to_path(),
            NavTarget::Section(section) => format!("/#{}", section.anchor()),
        }
    }

    pub fn is_active(&self, current: Option<&Route>) -> bool {
        match (self.target, current) {
            (NavTarget::Home, Some(Route::Home)) => true,
            (NavTarget::Blog, Some(Route::Blog | Route::BlogPost { .. })) => true,
            _ => false,
        }
    }
}

pub fn nav_items() -> [NavItem; 7] {
    [
        NavItem { label: "Home", target: NavTarget::Home },
        NavItem { label: "About", target: NavTarget::Section(SectionId::About) },
        NavItem { label: "Skills", target: NavTarget::Section(SectionId::Skills) },
        NavItem { label: "Timeline", target: NavTarget::Section(SectionId::Timeline) },
        NavItem { label: "Projects", target: NavTarget::Section(SectionId::Projects) },
        NavItem { label: "Blog", target: NavTarget::Blog },
        NavItem { label: "Contact", target: NavTarget::Section(SectionId::Contact) },
    ]
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let route = use_route::<Route>();
    let navigator = use_navigator();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().and_then(|window| {
                    let target = window.clone();
                    EventListener::new(&target, "scroll", move |_| {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(offset > SCROLLED_AFTER);
                    })
                    .map_err(|err| warn!("Navbar scroll tracking off: {}", err))
                    .ok()
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go = {
        let menu_open = menu_open.clone();
        let on_home = route == Some(Route::Home);
        Callback::from(move |(e, target): (MouseEvent, NavTarget)| {
            e.prevent_default();
            menu_open.set(false);
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            match target {
                NavTarget::Home => navigator.push(&Route::Home),
                NavTarget::Blog => navigator.push(&Route::Blog),
                NavTarget::Section(section) if on_home => scroll_to_section(section.anchor()),
                NavTarget::Section(section) => {
                    navigator.push(&Route::Home);
                    // Give the home page a moment to mount before scrolling.
                    Timeout::new(100, move || scroll_to_section(section.anchor())).forget();
                }
            }
        })
    };

    let links = |extra: &'static str| -> Html {
        nav_items()
            .into_iter()
            .map(|item| {
                let go = go.clone();
                let onclick = Callback::from(move |e: MouseEvent| go.emit((e, item.target)));
                html! {
                    <a
                        href={item.href()}
                        class={classes!("nav-link", extra, item.is_active(route.as_ref()).then(|| "active"))}
                        {onclick}
                    >
                        {item.label}
                    </a>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Portfolio"}
                </Link<Route>>

                <div class="nav-right">
                    { links("") }
                </div>

                <div class="nav-actions">
                    <ThemeToggle />
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        {
                            if *menu_open {
                                html! { <span class="burger-close">{"✕"}</span> }
                            } else {
                                html! { <><span></span><span></span><span></span></> }
                            }
                        }
                    </button>
                </div>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { links("mobile") }
                </div>
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: color-mix(in srgb, var(--background) 90%, transparent);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: var(--foreground);
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .nav-link {
                    color: var(--foreground);
                    text-decoration: none;
                    padding: 0.5rem 0.75rem;
                    border-radius: 6px;
                    transition: color 0.2s ease, background 0.2s ease;
                }
                .nav-link:hover {
                    background: var(--muted);
                }
                .nav-link.active {
                    color: var(--primary);
                }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    justify-content: center;
                    gap: 4px;
                    width: 2.5rem;
                    height: 2.5rem;
                    background: none;
                    border: none;
                    color: var(--foreground);
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    height: 2px;
                    width: 1.5rem;
                    background: var(--foreground);
                }
                .burger-menu .burger-close {
                    height: auto;
                    width: auto;
                    background: none;
                    font-size: 1.25rem;
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    padding: 0.5rem 1rem 1rem;
                    background: var(--background);
                }
                .nav-link.mobile {
                    width: 100%;
                }
                .theme-toggle {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 6px;
                    border: none;
                    background: none;
                    color: var(--foreground);
                    font-size: 1.1rem;
                    cursor: pointer;
                }
                .theme-toggle:hover {
                    background: var(--muted);
                }
                @media (max-width: 768px) {
                    .nav-right {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn items_in_display_order() {
        let labels: Vec<_> = nav_items().iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            vec!["Home", "About", "Skills", "Timeline", "Projects", "Blog", "Contact"]
        );
    }

    #[test]
    fn hrefs_point_at_pages_and_anchors() {
        let hrefs: Vec<_> = nav_items().iter().map(NavItem::href).collect();
        assert_eq!(
            hrefs,
            vec!["/", "/#about", "/#skills", "/#timeline", "/#projects", "/blog", "/#contact"]
        );
    }

    #[test]
    fn blog_stays_active_on_posts() {
        let blog = nav_items()[5];
        let post = Route::BlogPost { id: "any".into() };
        assert!(blog.is_active(Some(&Route::Blog)));
        assert!(blog.is_active(Some(&post)));
        assert!(!blog.is_active(Some(&Route::Home)));
        assert!(!nav_items()[1].is_active(Some(&Route::Home)));
    }
}
