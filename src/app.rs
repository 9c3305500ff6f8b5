mod avatar;
mod contact;
mod experience;
mod hero;
mod nav_bar;
mod projects;
mod section_header;
mod tags;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{site_content, ContentModel};
use contact::Contact;
use experience::Experience;
use hero::Hero;
use nav_bar::NavBar;
use projects::Projects;

const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Orbitron:wght@400;700&family=Rajdhani:wght@300;500;700&family=Share+Tech+Mono&family=Inter:wght@300;400;600&display=swap";
const ICONS_HREF: &str = "https://unpkg.com/lucide-static@0.469.0/font/lucide.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="stylesheet" href=FONTS_HREF />
                <link rel="stylesheet" href=ICONS_HREF />
                <link rel="stylesheet" id="leptos" href="/pkg/orbital-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground font-sans selection:bg-cyan selection:text-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let name = site_content().profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Routes fallback=|| "Signal lost. Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Orbital Command" />
        <Page content=site_content().clone() />
    }
}

/// The whole page in its fixed vertical order.
#[component]
pub fn Page(content: ContentModel) -> impl IntoView {
    let ContentModel {
        profile,
        skills,
        experience,
        education,
        projects,
    } = content;
    let brand = brand_mark(&profile.id);
    let footer_name = profile.name.clone();
    let contact = profile.contact.clone();

    view! {
        <div class="min-h-screen">
            <NavBar brand />
            <main>
                <Hero profile />
                <Experience entries=experience education skills />
                <Projects projects />
                <Contact contact />
            </main>
            <Footer name=footer_name />
        </div>
    }
}

#[component]
fn Footer(name: String) -> impl IntoView {
    view! {
        <footer class="bg-deep py-8 text-center border-t border-cyan/10">
            <div class="flex justify-center items-center gap-2 mb-2">
                <i class="icon-wifi text-cyan animate-pulse"></i>
                <span class="text-cyan font-mono text-xs">"SIGNAL STABLE"</span>
            </div>
            <p class="text-foreground/40 font-rajdhani text-sm uppercase tracking-widest">
                {format!(
                    "© {} {}. System Version {}.",
                    env!("BUILD_YEAR"),
                    name,
                    env!("CARGO_PKG_VERSION"),
                )}
            </p>
        </footer>
    }
}

/// Renders a view to HTML under a server owner, the way `leptos_axum` does for
/// each request, so `is_server()` holds and browser-only listeners are skipped.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn render_html<V>(build: impl FnOnce() -> V) -> String
where
    V: IntoView + 'static,
{
    use hydration_context::SsrSharedContext;
    use leptos::tachys::view::RenderHtml;
    use std::sync::Arc;

    Owner::new_root(Some(Arc::new(SsrSharedContext::new()))).with(|| build().to_html())
}

/// `JSG-001` is shown as `JSG`.
fn brand_mark(id: &str) -> String {
    id.split('-').next().unwrap_or_default().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_mark() {
        assert_eq!(brand_mark("JSG-001"), "JSG");
        assert_eq!(brand_mark("solo"), "SOLO");
        assert_eq!(brand_mark(""), "");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_page_render_is_deterministic() {
        let render = || render_html(|| view! { <Page content=site_content().clone() /> });
        let first = render();
        let second = render();

        assert_eq!(first, second);
        let hero = first.find("id=\"hero\"").unwrap();
        let experience = first.find("id=\"experience\"").unwrap();
        let projects = first.find("id=\"projects\"").unwrap();
        let contact = first.find("id=\"contact\"").unwrap();
        assert!(hero < experience && experience < projects && projects < contact);
        assert!(first.contains("SIGNAL STABLE"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_empty_content_still_renders() {
        let html = render_html(|| view! { <Page content=ContentModel::default() /> });
        assert!(html.contains("id=\"skills\""));
        assert!(html.contains("id=\"projects\""));
    }
}
