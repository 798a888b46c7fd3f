use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::blog::{posts, BlogPost};
use crate::error::use_error_reporter;
use crate::hooks::use_page_mount;
use crate::Route;

/// The embedded posts. A parse failure goes to the error boundary once and
/// the page renders empty meanwhile.
#[hook]
pub fn use_posts() -> Option<Rc<[BlogPost]>> {
    let reporter = use_error_reporter();
    use_effect_with_deps(
        move |_| {
            if let Err(err) = posts() {
                reporter.report(err);
            }
            || ()
        },
        (),
    );
    posts().ok()
}

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: Vec<String>,
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    html! {
        <div class="badges">
            { for props.tags.iter().map(|tag| html! { <span key={tag.clone()} class="badge">{tag}</span> }) }
        </div>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    use_page_mount("Route:Blog");
    let posts = use_posts();

    html! {
        <div class="page">
            <div class="container page-enter">
                <h1 class="page-title">{"Blog"}</h1>
                <div class="posts-grid">
                    {
                        posts.iter().flat_map(|posts| posts.iter()).map(|post| html! {
                            <article key={post.id.clone()} class="post-card">
                                <Link<Route> to={Route::BlogPost { id: post.id.clone() }} classes="post-link">
                                    <div class="post-cover">
                                        <img src={post.image.clone()} alt={post.title.clone()} loading="lazy" />
                                        <div class="post-shade"></div>
                                    </div>
                                    <div class="post-meta muted">
                                        <span>{post.short_date()}</span>
                                        <span>{"•"}</span>
                                        <span>{&post.author}</span>
                                    </div>
                                    <h2 class="post-title">{&post.title}</h2>
                                    <p class="muted post-excerpt">{&post.excerpt}</p>
                                    <TagList tags={post.tags.clone()} />
                                </Link<Route>>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .posts-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .post-link {
                    display: block;
                    color: inherit;
                    text-decoration: none;
                }
                .post-cover {
                    position: relative;
                    overflow: hidden;
                    border-radius: 8px;
                    aspect-ratio: 16 / 9;
                    margin-bottom: 1rem;
                }
                .post-cover img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .post-card:hover .post-cover img {
                    transform: scale(1.1);
                }
                .post-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, color-mix(in srgb, var(--background) 80%, transparent), transparent);
                }
                .post-meta {
                    display: flex;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }
                .post-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                    transition: color 0.2s ease;
                }
                .post-card:hover .post-title {
                    color: var(--primary);
                }
                .post-excerpt {
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                    margin-bottom: 0.75rem;
                }
                "#}
            </style>
        </div>
    }
}
