use yew::prelude::*;
use yew_router::prelude::*;

use crate::blog::find_post;
use crate::hooks::use_page_mount;
use crate::pages::blog::{use_posts, TagList};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub id: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    use_page_mount("Route:BlogPost");
    let posts = use_posts();

    let Some(post) = posts.as_deref().and_then(|posts| find_post(posts, &props.id)) else {
        return html! {
            <div class="page-center">
                <div class="page-center-content">
                    <h1 class="not-found-title">{"Post not found"}</h1>
                    <Link<Route> to={Route::Blog} classes="btn btn-primary">
                        {"← Back to Blog"}
                    </Link<Route>>
                </div>
            </div>
        };
    };

    html! {
        <div class="page">
            <div class="container page-enter">
                <Link<Route> to={Route::Blog} classes="btn btn-ghost back-link">
                    {"← Back to Blog"}
                </Link<Route>>
                <article class="post-body">
                    <div class="post-hero">
                        <img src={post.image.clone()} alt={post.title.clone()} />
                        <div class="post-shade"></div>
                    </div>
                    <div class="post-meta muted">
                        <span>{post.long_date()}</span>
                        <span>{"•"}</span>
                        <span>{&post.author}</span>
                    </div>
                    <h1 class="page-title">{&post.title}</h1>
                    <TagList tags={post.tags.clone()} />
                    <div class="prose">
                        { for post.paragraphs().map(|paragraph| html! { <p>{paragraph}</p> }) }
                    </div>
                </article>
            </div>
            <style>
                {r#"
                .back-link {
                    margin-bottom: 2rem;
                }
                .post-body {
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .post-hero {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    border-radius: 8px;
                    overflow: hidden;
                    margin-bottom: 2rem;
                }
                .post-hero img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
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
                    margin-bottom: 1rem;
                }
                .post-body .badges {
                    margin-bottom: 2rem;
                }
                .prose p {
                    font-size: 1.125rem;
                    line-height: 1.8;
                    margin-bottom: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
