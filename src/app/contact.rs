use leptos::prelude::*;

use super::section_header::SectionHeader;
use crate::{content::ContactEndpoints, display::display_handle};

const FIELD_CLASS: &str = "w-full bg-background border border-cyan/30 p-2 text-white focus:outline-none focus:border-cyan font-mono text-sm";

#[component]
pub fn Contact(contact: ContactEndpoints) -> impl IntoView {
    let ContactEndpoints {
        email,
        linkedin,
        github,
    } = contact;
    let mailto = format!("mailto:{email}");
    let linkedin_handle = display_handle(&linkedin);

    view! {
        <section id="contact" class="py-24 bg-deep relative overflow-hidden">
            <div class="absolute inset-x-0 bottom-0 h-full opacity-20 pointer-events-none hud-floor"></div>
            <div class="max-w-4xl mx-auto px-4 relative z-10">
                <SectionHeader title="Comms Array" subtitle="Establish Connection" />
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8">
                        <p class="text-foreground font-rajdhani text-xl leading-relaxed">
                            "\"Transmission lines open. Ready to convert data into strategy.\""
                        </p>
                        <div class="space-y-4">
                            <Endpoint href=mailto icon="icon-mail" label=email external=false />
                            <Endpoint href=linkedin icon="icon-linkedin" label=linkedin_handle />
                            {github
                                .map(|github| {
                                    let handle = display_handle(&github);
                                    view! { <Endpoint href=github icon="icon-github" label=handle /> }
                                })}
                        </div>
                    </div>
                    <TransmitForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Endpoint(
    href: String,
    icon: &'static str,
    label: String,
    #[prop(default = true)] external: bool,
) -> impl IntoView {
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            class="flex items-center gap-4 text-foreground hover:text-cyan transition-colors group"
        >
            <div class="p-3 bg-panel border border-cyan/30 group-hover:border-cyan transition-all text-2xl">
                <i class=icon></i>
            </div>
            <span class="font-mono text-sm">{label}</span>
        </a>
    }
}

/// Decorative only. Nothing is wired to receive the packet, so submission is
/// swallowed and the button never submits.
#[component]
fn TransmitForm() -> impl IntoView {
    view! {
        <div class="bg-panel/80 p-8 border border-cyan/20 backdrop-blur-md clip-corner">
            <h4 class="text-cyan font-orbitron mb-6 text-sm uppercase tracking-widest border-b border-cyan/20 pb-2">
                "Send Encrypted Packet"
            </h4>
            <form class="space-y-4" on:submit=|ev| ev.prevent_default()>
                <div class="space-y-1">
                    <label for="sender_id" class="text-foreground/60 font-mono text-xs">
                        "SENDER_ID"
                    </label>
                    <input id="sender_id" name="sender_id" type="text" class=FIELD_CLASS />
                </div>
                <div class="space-y-1">
                    <label for="frequency" class="text-foreground/60 font-mono text-xs">
                        "FREQUENCY (EMAIL)"
                    </label>
                    <input id="frequency" name="frequency" type="email" class=FIELD_CLASS />
                </div>
                <div class="space-y-1">
                    <label for="payload" class="text-foreground/60 font-mono text-xs">
                        "PAYLOAD"
                    </label>
                    <textarea
                        id="payload"
                        name="payload"
                        rows="4"
                        class=format!("{FIELD_CLASS} resize-none")
                    ></textarea>
                </div>
                <button
                    type="button"
                    aria-disabled="true"
                    title="Transmission offline"
                    class="w-full py-3 bg-cyan text-black font-orbitron font-bold hover:bg-white transition-colors uppercase tracking-widest mt-4"
                >
                    "Transmit Data"
                </button>
            </form>
        </div>
    }
}
