use leptos::{either::Either, prelude::*};

#[component]
pub fn Avatar(src: Option<String>, alt: String) -> impl IntoView {
    view! {
        <div class="relative flex justify-center">
            <div class="absolute inset-0 border border-cyan/20 rounded-full animate-[spin_10s_linear_infinite]"></div>
            <div class="absolute inset-4 border border-cyan/40 rounded-full border-dashed animate-[spin_15s_linear_infinite_reverse]"></div>
            <div class="relative w-64 h-64 md:w-80 md:h-80 rounded-full overflow-hidden border-4 border-cyan/50 shadow-[0_0_40px_rgba(0,240,255,0.3)] bg-background">
                {match src {
                    Some(src) => {
                        Either::Left(
                            view! {
                                <img
                                    src=src
                                    alt=alt
                                    class="w-full h-full object-cover opacity-90 hover:opacity-100 transition-opacity"
                                />
                            },
                        )
                    }
                    None => {
                        Either::Right(
                            view! {
                                <div class="w-full h-full flex items-center justify-center text-cyan/40 text-8xl">
                                    <i class="icon-user"></i>
                                </div>
                            },
                        )
                    }
                }}
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-cyan/10 to-transparent animate-scanline pointer-events-none"></div>
            </div>
        </div>
    }
}
