use leptos::prelude::*;

use super::components::SectionHeading;
use crate::data::CERTIFICATIONS;

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section id="certifications" class="relative py-24">
            <div class="w-full max-w-7xl mx-auto px-6 lg:px-12">
                <SectionHeading lead="My" highlight="Certifications" />
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {CERTIFICATIONS
                        .iter()
                        .map(|cert| {
                            view! {
                                <div class="group h-full rounded-3xl p-8 text-center bg-surface border border-muted/10 hover:border-primary/30 transition-all duration-300 flex flex-col items-center">
                                    <img
                                        src=cert.image
                                        alt=cert.title
                                        class="w-32 h-32 mb-8 object-contain group-hover:scale-105 transition-transform duration-300"
                                    />
                                    <h3 class="font-bold text-xl mb-4 group-hover:text-primary transition-colors">
                                        {cert.title}
                                    </h3>
                                    <p class="text-muted text-sm leading-relaxed mb-8 flex-grow">
                                        {cert.description}
                                    </p>
                                    <a
                                        href=cert.link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center justify-center gap-2 px-6 py-2.5 rounded-full border border-muted/20 text-sm font-medium hover:bg-primary hover:text-background transition-all duration-300 w-full"
                                    >
                                        "View details »"
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
