use leptos::{ev, prelude::*};
use leptos_use::use_media_query;

use crate::nav::{NavState, NAV_LINKS, WIDE_VIEWPORT_QUERY};

const LINK_CLASS: &str = "text-foreground hover:text-cyan hover:bg-cyan/10 transition-all duration-200 font-rajdhani px-3 py-2 rounded-sm text-sm font-bold uppercase tracking-widest border border-transparent hover:border-cyan/30";
const MOBILE_LINK_CLASS: &str = "text-foreground hover:text-cyan block px-3 py-2 text-base font-bold font-rajdhani uppercase tracking-widest";

/// `initial` seeds the header flags before the first scroll reading.
#[component]
pub fn NavBar(brand: String, #[prop(optional)] initial: NavState) -> impl IntoView {
    let nav = RwSignal::new(initial);
    let wide_viewport = use_media_query(WIDE_VIEWPORT_QUERY);

    let read_offset = || window().scroll_y().unwrap_or_default();

    // page may already be scrolled when hydrating
    Effect::new(move |_| {
        nav.maybe_update(|n| n.observe_scroll(read_offset()));
    });

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        nav.maybe_update(|n| n.observe_scroll(read_offset()));
    });
    on_cleanup(move || scroll_handle.remove());

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 w-full z-50 transition-all duration-300 border-b {}",
                nav.get().header_class(),
            )
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    <a href="#hero" class="flex-shrink-0 flex items-center gap-2">
                        <i class="icon-activity text-cyan text-2xl animate-pulse"></i>
                        <span class="font-orbitron text-white text-xl font-bold tracking-wider">
                            {brand}
                            <span class="text-cyan">"_SYS"</span>
                        </span>
                    </a>
                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-8">
                            {NAV_LINKS
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a href=link.href class=LINK_CLASS>
                                            {link.name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="md:hidden">
                        <button
                            type="button"
                            class="text-cyan hover:text-white p-2 text-2xl"
                            aria-label="Toggle navigation"
                            aria-expanded=move || nav.get().is_menu_open().to_string()
                            on:click=move |_| nav.update(NavState::toggle_menu)
                        >
                            <i class=move || {
                                if nav.get().is_menu_open() { "icon-x" } else { "icon-menu" }
                            }></i>
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || nav.get().menu_visible(wide_viewport.get())>
                <div id="mobile-menu" class="md:hidden bg-background border-b border-cyan/30">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class=MOBILE_LINK_CLASS
                                        on:click=move |_| nav.update(NavState::close)
                                    >
                                        {link.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
