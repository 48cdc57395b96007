use leptos::{html, prelude::*};
use leptos_use::{use_element_hover, use_interval_fn};

use super::components::{IconView, SectionHeading};
use crate::{
    data::{preview_image, Project, PROJECTS},
    icons::Icon,
    spy::{Carousel, AUTO_ADVANCE_MS},
};

#[component]
pub fn Projects() -> impl IntoView {
    let (carousel, set_carousel) = signal(Carousel::new(PROJECTS.len()));
    let spotlight_ref = NodeRef::<html::Div>::new();
    let is_hovered = use_element_hover(spotlight_ref);

    Effect::new(move |_| {
        let hovered = is_hovered.get();
        set_carousel.update(|c| c.set_hovered(hovered));
    });

    let _ = use_interval_fn(move || set_carousel.update(Carousel::tick), AUTO_ADVANCE_MS);

    view! {
        <section id="projects" class="relative py-24 overflow-hidden">
            <div class="w-full max-w-7xl mx-auto px-6 lg:px-12 relative z-10">
                <SectionHeading lead="Featured" highlight="Projects" />
                <div node_ref=spotlight_ref class="relative mb-16">
                    {move || {
                        let project = PROJECTS[carousel.get().index()];
                        view! { <Spotlight project /> }
                    }}
                    <div class="flex items-center justify-center gap-4 mt-6">
                        <button
                            class="px-3 py-1 rounded-full bg-surface hover:bg-primary/20"
                            aria-label="Previous project"
                            on:click=move |_| set_carousel.update(Carousel::prev)
                        >
                            "‹"
                        </button>
                        {(0..PROJECTS.len())
                            .map(|i| {
                                view! {
                                    <button
                                        aria-label=format!("Show project {}", i + 1)
                                        class=move || {
                                            if carousel.get().index() == i {
                                                "w-3 h-3 rounded-full bg-primary"
                                            } else {
                                                "w-3 h-3 rounded-full bg-muted/40 hover:bg-muted"
                                            }
                                        }
                                        on:click=move |_| set_carousel.update(|c| c.select(i))
                                    ></button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="px-3 py-1 rounded-full bg-surface hover:bg-primary/20"
                            aria-label="Next project"
                            on:click=move |_| set_carousel.update(Carousel::next)
                        >
                            "›"
                        </button>
                    </div>
                </div>
                <div class="grid md:grid-cols-2 gap-10 lg:gap-14">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| view! { <ProjectCard index=i project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Spotlight(project: Project) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8 items-center rounded-3xl bg-surface p-6 border border-muted/10">
            <img
                src=preview_image(project.image)
                alt=project.title
                class="w-full aspect-[16/10] object-cover rounded-2xl"
            />
            <div>
                <p class="text-sm uppercase tracking-widest text-primary mb-2">"Spotlight"</p>
                <h3 class="text-3xl font-bold font-heading mb-4">{project.title}</h3>
                <p class="text-muted leading-relaxed mb-6">{project.description}</p>
                <ProjectLink project />
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    view! {
        <div id=format!("project-{index}") class="group h-full rounded-3xl overflow-hidden bg-surface border border-muted/10 hover:border-primary/30 transition-all duration-500">
            <div class="relative aspect-[16/10] overflow-hidden">
                <img
                    src=preview_image(project.image)
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
            </div>
            <div class="p-8 space-y-4">
                <h3 class="font-bold text-2xl font-heading group-hover:text-primary transition-colors">
                    {project.title}
                </h3>
                <p class="text-muted leading-relaxed">{project.description}</p>
                <ProjectLink project />
            </div>
        </div>
    }
}

#[component]
fn ProjectLink(project: Project) -> impl IntoView {
    let icon = if project.is_source_link() {
        Icon::Github
    } else {
        Icon::ExternalLink
    };
    view! {
        <a
            href=project.link
            target="_blank"
            rel="noopener noreferrer"
            class="inline-flex items-center gap-2 px-6 py-3 rounded-full bg-primary text-background font-medium hover:scale-105 transition-all duration-300"
        >
            <IconView icon />
            {project.link_label}
        </a>
    }
}
