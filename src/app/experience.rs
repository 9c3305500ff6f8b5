use leptos::prelude::*;

use super::{section_header::SectionHeader, tags::TagList};
use crate::{
    content::{Education, ExperienceEntry, SkillEntry},
    display::{skill_rows, timeline, SkillRow, TimelineBlock},
};

#[component]
pub fn Experience(
    entries: Vec<ExperienceEntry>,
    education: Option<Education>,
    skills: Vec<SkillEntry>,
) -> impl IntoView {
    let blocks = timeline(&entries).collect::<Vec<_>>();
    let rows = skill_rows(&skills).collect::<Vec<_>>();

    view! {
        <section id="experience" class="py-24 bg-background relative">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeader title="System Log" subtitle="Professional Experience & Education" />
                <div class="grid md:grid-cols-12 gap-12">
                    <div class="md:col-span-7 space-y-8">
                        <h3 class="text-xl font-orbitron text-cyan mb-6 flex items-center gap-2">
                            <i class="icon-terminal"></i>
                            "EXECUTION HISTORY"
                        </h3>
                        <ol id="timeline" class="border-l border-cyan/20 pl-6 space-y-12">
                            {blocks
                                .into_iter()
                                .map(|block| view! { <TimelineItem block /> })
                                .collect_view()}
                        </ol>
                    </div>
                    <div class="md:col-span-5 space-y-12">
                        {education.map(|education| view! { <EducationPanel education /> })}
                        <SkillsPanel rows />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(block: TimelineBlock) -> impl IntoView {
    view! {
        <li class="relative group" data-position=block.position.to_string()>
            <div class="absolute -left-[29px] top-1 w-3 h-3 bg-background border border-cyan group-hover:bg-cyan transition-colors"></div>
            <div class="bg-panel p-6 border border-cyan/10 hover:border-cyan/50 transition-all clip-corner-sm">
                <div class="flex justify-between items-start mb-2 flex-wrap gap-2">
                    <h4 class="text-lg font-bold text-white font-orbitron">{block.role}</h4>
                    <span class="text-cyan text-xs font-mono border border-cyan/30 px-2 py-1 bg-cyan/5">
                        {block.date}
                    </span>
                </div>
                <div class="text-foreground/60 text-sm mb-4 font-rajdhani uppercase tracking-wider">
                    {block.org}
                </div>
                <p class="text-foreground/80 text-sm leading-relaxed font-sans mb-4">
                    {block.desc}
                </p>
                <TagList
                    tags=block.tags
                    container_class="flex flex-wrap gap-2 pt-4 border-t border-cyan/10"
                    tag_class="text-[10px] px-2 py-1 bg-cyan/5 text-cyan/70 font-mono border border-cyan/20"
                />
            </div>
        </li>
    }
}

#[component]
fn EducationPanel(education: Education) -> impl IntoView {
    let Education {
        institution,
        degree,
        minors,
        gpa,
        certifications,
    } = education;
    let certifications = (!certifications.is_empty()).then(|| certifications.join(", "));

    view! {
        <div id="education">
            <h3 class="text-xl font-orbitron text-cyan mb-6 flex items-center gap-2">
                <i class="icon-layers"></i>
                "KNOWLEDGE BASE"
            </h3>
            <div class="bg-panel p-6 border border-cyan/10 relative clip-corner-sm">
                <div class="absolute top-0 right-0 p-2 opacity-20 text-cyan text-5xl">
                    <i class="icon-cpu"></i>
                </div>
                <h4 class="text-lg font-bold text-white font-orbitron">{institution}</h4>
                <p class="text-cyan font-bold font-rajdhani uppercase text-sm mt-1">{degree}</p>
                <div class="mt-4 text-foreground/70 text-sm space-y-2 font-mono">
                    {minors.map(|minors| view! { <EducationRow label="MINORS" value=minors /> })}
                    {gpa.map(|gpa| view! { <EducationRow label="GPA" value=gpa /> })}
                    {certifications
                        .map(|certs| {
                            view! {
                                <div class="pt-1">
                                    <span class="block mb-1 text-xs uppercase opacity-50">
                                        "Certifications"
                                    </span>
                                    <span class="text-white">{certs}</span>
                                </div>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn EducationRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between border-b border-foreground/10 pb-1">
            <span>{label}</span>
            <span class="text-white">{value}</span>
        </div>
    }
}

#[component]
fn SkillsPanel(rows: Vec<SkillRow>) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-orbitron text-cyan mb-6 flex items-center gap-2">
                <i class="icon-cpu"></i>
                "MODULES"
            </h3>
            <ul id="skills" class="grid grid-cols-1 gap-3">
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <li class="flex items-center justify-between p-3 bg-panel border-l-2 border-cyan/30 hover:border-cyan hover:bg-cyan/5 transition-all">
                                <div class="flex items-center gap-3">
                                    <i class=format!("text-cyan {}", row.icon_class)></i>
                                    <div class="text-white font-rajdhani font-bold">{row.name}</div>
                                </div>
                                <div class="text-foreground/40 text-xs font-mono uppercase">
                                    {row.category}
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::render_html;

    fn job(role: &str, skills: &[&str]) -> ExperienceEntry {
        ExperienceEntry {
            role: role.to_string(),
            org: "DeVoe L. Moore Center".to_string(),
            date: "Aug 2025 - Present".to_string(),
            desc: "Cleaned raw data.".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn render(entries: Vec<ExperienceEntry>, skills: Vec<SkillEntry>) -> String {
        render_html(|| view! { <Experience entries education=None skills /> })
    }

    #[test]
    fn test_blocks_follow_input_order() {
        let roles = ["Zeta Intern", "Alpha Analyst", "Mu Assistant"];
        let html = render(roles.iter().map(|r| job(r, &["SQL"])).collect(), vec![]);

        let positions = roles
            .iter()
            .map(|r| html.find(r).expect("every role should render"))
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_skills_renders_container() {
        let html = render(vec![job("Outreach Chair", &[])], vec![]);

        assert!(html.contains("id=\"skills\""));
        assert!(html.contains("Outreach Chair"));
        assert!(!html.contains("id=\"education\""));
    }
}
