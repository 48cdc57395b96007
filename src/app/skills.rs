use leptos::prelude::*;

use super::components::{IconView, SectionHeading};
use crate::data::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="relative py-24">
            <div class="w-full max-w-7xl mx-auto px-6 lg:px-12">
                <SectionHeading lead="Skills &" highlight="Technologies" />
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="group rounded-2xl p-6 bg-surface border border-muted/10 hover:border-primary/30 transition-all duration-300">
                                    <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-primary/20 to-accent/20 flex items-center justify-center mb-4 text-2xl group-hover:scale-110 transition-transform">
                                        <IconView icon=skill.icon() />
                                    </div>
                                    <h3 class="font-bold text-lg mb-2">{skill.name}</h3>
                                    <p class="text-muted text-sm leading-relaxed">
                                        {skill.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
