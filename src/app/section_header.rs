use leptos::prelude::*;

#[component]
pub fn SectionHeader(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <div class="mb-12 relative">
            <div class="flex items-center gap-4 mb-2">
                <div class="h-px w-8 bg-cyan"></div>
                <h2 class="text-3xl md:text-4xl font-orbitron font-bold text-white tracking-widest uppercase">
                    {title}
                </h2>
                <div class="flex-grow h-px bg-gradient-to-r from-cyan to-transparent"></div>
            </div>
            <p class="text-cyan/70 font-rajdhani text-lg pl-12 uppercase tracking-wider">
                {subtitle}
            </p>
        </div>
    }
}
