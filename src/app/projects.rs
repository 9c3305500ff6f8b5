use leptos::{either::Either, prelude::*};

use super::{section_header::SectionHeader, tags::TagList};
use crate::{
    content::ProjectEntry,
    display::{project_cards, LinkAffordance, ProjectCard},
};

#[component]
pub fn Projects(projects: Vec<ProjectEntry>) -> impl IntoView {
    let cards = project_cards(&projects).collect::<Vec<_>>();

    view! {
        <section id="projects" class="py-24 bg-background border-t border-cyan/10">
            <div class="max-w-7xl mx-auto px-4">
                <SectionHeader title="Project Database" subtitle="Deployed Applications & Research" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {cards.into_iter().map(|card| view! { <ProjectTile card /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectTile(card: ProjectCard) -> impl IntoView {
    let ProjectCard {
        id_label,
        title,
        role,
        year,
        stack,
        desc,
        status_label,
        tier,
        link,
    } = card;
    let new_tab = link.opens_new_context();

    view! {
        <article class="bg-panel border border-cyan/20 flex flex-col relative group overflow-hidden transition-transform duration-300 hover:-translate-y-1">
            <div class="absolute inset-0 bg-cyan/5 opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div>
            <div class="bg-cyan/10 p-3 border-b border-cyan/20 flex justify-between items-center backdrop-blur-sm">
                <span class="text-cyan text-xs font-mono uppercase">{id_label}</span>
                <span class=format!(
                    "status-badge text-[10px] font-bold uppercase px-2 py-0.5 rounded-sm {}",
                    tier.badge_class(),
                )>{status_label}</span>
            </div>
            <div class="p-6 flex-grow flex flex-col relative z-10">
                <h3 class="text-white font-orbitron font-bold text-lg mb-1">{title}</h3>
                <p class="text-cyan/60 text-xs font-mono mb-4">{role}</p>
                <TagList
                    tags=stack
                    container_class="mb-4 flex flex-wrap gap-2"
                    tag_class="px-1.5 py-0.5 bg-background text-foreground text-[10px] font-mono border border-foreground/20"
                />
                <p class="text-foreground/70 font-sans text-sm leading-relaxed mb-6 flex-grow">
                    {desc}
                </p>
                <div class="pt-4 border-t border-foreground/10 flex justify-between items-center mt-auto">
                    <span class="text-foreground/40 font-mono text-xs">{year}</span>
                    {match link {
                        LinkAffordance::External(href) => {
                            Either::Left(
                                view! {
                                    <a
                                        href=href
                                        target=new_tab.then_some("_blank")
                                        rel=new_tab.then_some("noreferrer")
                                        class="flex items-center gap-1 text-cyan font-bold hover:text-white transition-colors text-xs font-orbitron uppercase tracking-wider"
                                    >
                                        "Initialize"
                                        <i class="icon-external-link"></i>
                                    </a>
                                },
                            )
                        }
                        LinkAffordance::Unavailable => {
                            Either::Right(
                                view! {
                                    <span
                                        class="text-foreground/30 text-xs italic flex items-center gap-1 cursor-not-allowed"
                                        aria-disabled="true"
                                    >
                                        "Offline"
                                        <i class="icon-database"></i>
                                    </span>
                                },
                            )
                        }
                    }}
                </div>
            </div>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::render_html, content::ProjectStatus, display::StatusTier};

    fn project(link: Option<&str>, status: &str) -> ProjectEntry {
        ProjectEntry {
            id: 4,
            title: "Factory to Greenspace".to_string(),
            role: "Urban Planner".to_string(),
            year: "Fall 2025".to_string(),
            stack: vec!["Urban Policy".to_string(), "Smart Growth".to_string()],
            desc: "Convert an abandoned cement factory.".to_string(),
            link: link.map(str::to_string),
            status: ProjectStatus::from(status.to_string()),
        }
    }

    fn render(project: &ProjectEntry) -> String {
        let card = ProjectCard::from(project);
        render_html(|| view! { <ProjectTile card /> })
    }

    #[test]
    fn test_missing_link_renders_placeholder() {
        let html = render(&project(None, "Completed"));

        assert!(!html.contains("<a "));
        assert!(html.contains("Offline"));
        assert!(html.contains("cursor-not-allowed"));
        assert!(html.contains("ID: 004"));
    }

    #[test]
    fn test_present_link_renders_anchor() {
        let html = render(&project(Some("https://floridaopengov.com"), "Live"));

        assert!(html.contains("<a "));
        assert!(html.contains("https://floridaopengov.com"));
        assert!(html.contains("target=\"_blank\""));
        assert!(!html.contains("cursor-not-allowed"));
    }

    #[test]
    fn test_in_page_link_stays_in_tab() {
        let html = render(&project(Some("#hero"), "Live"));

        assert!(html.contains("href=\"#hero\""));
        assert!(!html.contains("target="));
        assert!(!html.contains("noreferrer"));
    }

    #[test]
    fn test_status_badge_variants() {
        let active = StatusTier::Active.badge_class();
        let pending = StatusTier::Pending.badge_class();

        for status in ["Completed", "Live"] {
            let html = render(&project(None, status));
            assert!(html.contains(active), "{status} should be active");
        }
        for status in ["In Progress", "Offline", "Sunset"] {
            let html = render(&project(None, status));
            assert!(html.contains(pending), "{status} should be pending");
            assert!(html.contains(status));
        }
    }

    #[test]
    fn test_empty_stack_keeps_container() {
        let mut p = project(None, "Completed");
        p.stack.clear();
        let html = render(&p);
        assert!(html.contains("mb-4 flex flex-wrap gap-2"));
    }
}
