use leptos::{ev, html, prelude::*};

use crate::content::{Persona, SocialLink, SOCIAL_LINKS};

#[component]
pub fn OverviewSection(node_ref: NodeRef<html::Section>) -> impl IntoView {
    let (hovering_bg, set_hovering_bg) = signal(false);
    let (online, set_online) = signal(false);
    let persona = move || Persona::for_online(online.get());
    let toggle_persona = move |_: ev::MouseEvent| set_online.update(|o| *o = !*o);

    view! {
        <section
            id="overview"
            node_ref=node_ref
            class="relative min-h-screen overflow-hidden"
            on:mouseenter=move |_| set_hovering_bg.set(true)
            on:mouseleave=move |_| set_hovering_bg.set(false)
        >
            <div
                class=move || {
                    if hovering_bg.get() {
                        "absolute inset-0 w-full h-full transition-all duration-700 ease-in-out opacity-40 scale-105"
                    } else {
                        "absolute inset-0 w-full h-full transition-all duration-700 ease-in-out opacity-25 scale-100"
                    }
                }
                style="background-image: url('/hero-background.png'); background-size: cover; background-position: center;"
            >
                <div class="absolute inset-0 bg-black/70"></div>
            </div>

            <div class="relative z-10 min-h-screen flex items-center px-8 py-40">
                <div class="w-full max-w-8xl mx-auto flex flex-col md:flex-row items-center justify-center gap-12 md:gap-20">
                    <div
                        class="flex-shrink-0 transform hover:scale-105 transition-transform duration-500 cursor-pointer"
                        on:click=toggle_persona
                    >
                        <div class="w-64 h-64 md:w-96 md:h-96 rounded-full border-8 border-neutral-800/50 overflow-hidden shadow-2xl ring-4 ring-neutral-700/30 ring-offset-8 ring-offset-[#0a0a0a]">
                            <img
                                src=move || persona().image
                                alt=move || persona().name
                                class="w-full h-full object-cover"
                                width="384"
                                height="384"
                            />
                        </div>
                    </div>

                    <div class="flex flex-col items-center md:items-start gap-4 text-center md:text-left">
                        <h1
                            class="text-6xl md:text-8xl font-bold bg-gradient-to-r from-neutral-200 to-neutral-400 bg-clip-text text-transparent drop-shadow-lg cursor-pointer transition-opacity duration-500"
                            on:click=toggle_persona
                        >
                            {move || persona().name}
                        </h1>
                        <div class="space-y-3">
                            <p class="text-2xl md:text-3xl text-neutral-300">"18 years old."</p>
                            <p class="text-2xl md:text-3xl text-neutral-300">
                                "software developer, "
                                <span class="italic text-neutral-400">"in development."</span>
                            </p>
                            <p class="text-2xl md:text-3xl text-neutral-300">
                                <span class="font-bold text-neutral-200">"curious"</span>
                                ", "
                                <span class="font-bold text-neutral-200">"open-minded"</span>
                                ", and "
                                <span class="font-bold text-neutral-200">"ambitious"</span>
                                "."
                            </p>
                        </div>
                        <p class="font-mono italic text-lg mt-6 text-neutral-400">
                            "what's more to give?"
                        </p>
                        <div class="pointer-events-auto flex gap-6 mt-8">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| view! { <SocialAnchor link large=true /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Social link used both in the hero and the contact section.
#[component]
pub fn SocialAnchor(link: &'static SocialLink, #[prop(optional)] large: bool) -> impl IntoView {
    let (class, icon_class, label_class) = if large {
        (
            "flex items-center gap-2 text-neutral-400 hover:text-neutral-200 transition-colors duration-200",
            "text-2xl",
            "text-lg font-medium",
        )
    } else {
        (
            "flex items-center gap-2 text-neutral-400 hover:text-neutral-200 transition-colors duration-200 p-2 rounded-lg hover:bg-neutral-800/30",
            "text-xl",
            "font-medium",
        )
    };
    view! {
        <a href=link.href target="_blank" rel="noopener noreferrer" class=class aria-label=link.label>
            <i class=format!("{} {icon_class}", link.icon)></i>
            <span class=label_class>{link.label}</span>
        </a>
    }
}
