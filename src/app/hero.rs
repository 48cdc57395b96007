use leptos::prelude::*;

use super::{components::IconView, tracker::SectionTracker};
use crate::{
    data::{PROFILE, SOCIALS, STATS},
    icons::Icon,
    theme::Theme,
};

#[component]
pub fn Hero() -> impl IntoView {
    let tracker = expect_context::<SectionTracker>();
    let theme = expect_context::<Theme>();
    let animation = theme.style().animation.class();

    view! {
        <section
            id="hero"
            class="relative min-h-screen flex flex-col justify-center items-center overflow-hidden"
        >
            <div class="absolute top-[-10%] left-[-10%] w-[500px] h-[500px] bg-primary/20 rounded-full blur-[120px]"></div>
            <div class="absolute bottom-[-10%] right-[-10%] w-[500px] h-[500px] bg-accent/20 rounded-full blur-[120px]"></div>
            <div class="w-full max-w-7xl mx-auto px-6 lg:px-12 py-20 relative z-10 flex flex-col items-center text-center">
                <div class="relative w-64 h-64 md:w-80 md:h-80 mb-12">
                    <div class="absolute inset-[-20px] rounded-full bg-gradient-to-br from-primary via-accent to-primary opacity-40 blur-3xl"></div>
                    <img
                        src=PROFILE.image
                        alt=PROFILE.name
                        class="relative w-full h-full object-cover rounded-full border-4 border-primary"
                    />
                </div>
                <div class=format!("space-y-6 {animation}")>
                    <p class="text-primary font-mono text-xl md:text-2xl tracking-[0.2em] uppercase">
                        "Hello, I'm"
                    </p>
                    <h1 class="text-6xl md:text-7xl lg:text-8xl font-bold font-heading tracking-tight">
                        {PROFILE.name}
                    </h1>
                    <p class="text-xl md:text-2xl font-light text-muted">
                        "aka " <span class="text-primary font-medium">{PROFILE.alias}</span>
                    </p>
                    <p class="text-muted text-lg md:text-2xl max-w-3xl mx-auto leading-relaxed font-light">
                        {PROFILE.tagline}
                    </p>
                </div>
                <div class="flex gap-4 mt-12">
                    {SOCIALS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=social.name
                                    class="p-4 rounded-full bg-surface text-2xl hover:bg-primary/20 hover:scale-110 transition-all duration-300"
                                >
                                    <IconView icon=social.icon() />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col md:flex-row gap-6 md:gap-10 justify-center mt-16 items-center">
                    <a
                        href=PROFILE.resume_url
                        target="_blank"
                        class="flex items-center gap-3 text-muted text-lg md:text-2xl hover:text-primary transition-colors"
                    >
                        <IconView icon=Icon::FileText />
                        <span>"View Resume"</span>
                    </a>
                    <a
                        href=PROFILE.location_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-3 text-muted text-lg md:text-2xl hover:text-primary transition-colors"
                    >
                        <IconView icon=Icon::MapPin />
                        <span>{PROFILE.location}</span>
                    </a>
                </div>
            </div>
            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-3xl text-muted hover:text-primary transition-colors animate-bounce"
                aria-label="Scroll to projects"
                on:click=move |_| tracker.activate("projects")
            >
                <IconView icon=Icon::ChevronDown />
            </button>
        </section>
    }
}

/// Terminal-style "system stats" strip under the hero.
#[component]
pub fn StatsStrip() -> impl IntoView {
    view! {
        <div class="w-full max-w-7xl mx-auto my-20 p-6 border border-muted/20 bg-surface backdrop-blur-sm relative overflow-hidden">
            <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-primary via-accent to-primary opacity-50"></div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="flex flex-col space-y-2 p-2 rounded-sm hover:bg-foreground/5 transition-colors cursor-default">
                                <div class="flex items-center space-x-2 text-muted text-sm uppercase tracking-widest font-mono">
                                    <IconView icon=Icon::from_key(stat.icon) />
                                    <span>{stat.label}</span>
                                </div>
                                <div class="flex items-baseline space-x-2">
                                    <span class="text-4xl md:text-5xl font-bold font-mono">
                                        {stat.value}
                                    </span>
                                    <span class="text-xl text-muted whitespace-nowrap">
                                        {stat.detail}
                                    </span>
                                </div>
                                <div class="w-full h-1 bg-foreground/10 rounded-full mt-2 overflow-hidden">
                                    <div class="h-full w-full bg-primary"></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
