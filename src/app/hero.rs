use leptos::prelude::*;

use super::avatar::Avatar;
use crate::{content::Profile, display::split_name};

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let (lead, surname) = split_name(&profile.name);
    let Profile {
        name,
        title,
        status,
        tagline,
        avatar,
        contact,
        ..
    } = profile;

    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center justify-center bg-background overflow-hidden pt-20"
        >
            <div class="absolute inset-0 z-0 opacity-20 hud-grid"></div>
            <div class="absolute inset-0 bg-gradient-to-b from-transparent via-cyan/5 to-transparent z-0 animate-scanline pointer-events-none"></div>

            <div class="relative z-10 max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-12 items-center">
                <div class="order-2 md:order-1 text-left">
                    <div class="flex items-center gap-2 mb-4">
                        <span class="px-2 py-1 bg-cyan/10 border border-cyan text-cyan text-xs font-mono">
                            "SYSTEM STATUS: "
                            {status.label()}
                        </span>
                        <span class="h-px w-12 bg-cyan/50"></span>
                    </div>
                    <h1 class="text-5xl md:text-7xl font-orbitron font-bold text-white mb-2 tracking-tighter">
                        {lead.map(|lead| view! { {lead} <br /> })}
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan to-azure">
                            {surname}
                        </span>
                    </h1>
                    <h2 class="text-xl md:text-2xl font-rajdhani text-foreground mb-6 uppercase tracking-widest border-l-4 border-cyan pl-4">
                        {title}
                    </h2>
                    <p class="text-foreground/70 max-w-lg text-lg mb-8 font-rajdhani leading-relaxed">
                        "//" {tagline}
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="#projects"
                            class="group relative px-8 py-3 bg-cyan/10 text-cyan font-orbitron font-bold border border-cyan hover:bg-cyan hover:text-black transition-all overflow-hidden clip-corner"
                        >
                            <span class="relative z-10 flex items-center gap-2">
                                "INITIATE PROTOCOLS" <i class="icon-chevron-right"></i>
                            </span>
                        </a>
                        <a
                            href=contact.linkedin
                            target="_blank"
                            rel="noreferrer"
                            class="px-8 py-3 bg-transparent text-foreground font-orbitron font-bold border border-foreground/30 hover:border-cyan hover:text-cyan transition-all flex items-center gap-2 clip-corner"
                        >
                            "LINKEDIN" <i class="icon-external-link"></i>
                        </a>
                    </div>
                </div>
                <div class="order-1 md:order-2">
                    <Avatar src=avatar alt=name />
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{
        app::render_html,
        content::{ContactEndpoints, SystemStatus},
    };

    fn profile(avatar: Option<&str>) -> Profile {
        Profile {
            name: "Juan S. Gutierrez".to_string(),
            title: "Data Strategist".to_string(),
            id: "JSG-001".to_string(),
            status: SystemStatus::Online,
            tagline: "Converting data into actionable intelligence.".to_string(),
            avatar: avatar.map(str::to_string),
            contact: ContactEndpoints {
                email: "jsg@example.com".to_string(),
                linkedin: "https://www.linkedin.com/in/jsg/".to_string(),
                github: None,
            },
        }
    }

    #[test]
    fn test_hero_renders_profile() {
        let html =
            render_html(|| view! { <Hero profile=profile(Some("https://example.com/me.jpg")) /> });

        assert!(html.contains("SYSTEM STATUS: "));
        assert!(html.contains("ONLINE"));
        assert!(html.contains("JUAN S."));
        assert!(html.contains("GUTIERREZ"));
        assert!(html.contains("https://example.com/me.jpg"));
        assert!(html.contains("https://www.linkedin.com/in/jsg/"));
    }

    #[test]
    fn test_hero_without_avatar_shows_placeholder() {
        let html = render_html(|| view! { <Hero profile=profile(None) /> });
        assert!(!html.contains("<img"));
        assert!(html.contains("icon-user"));
    }
}
