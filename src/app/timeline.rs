use leptos::{either::Either, prelude::*};

use super::components::{IconView, SectionHeading};
use crate::data::{EducationItem, ExperienceItem, EDUCATION, EXPERIENCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Experience,
    Education,
}

#[component]
pub fn Timeline() -> impl IntoView {
    let (tab, set_tab) = signal(Tab::Experience);

    let tab_button = move |this: Tab, label: &'static str| {
        view! {
            <button
                class=move || {
                    if tab.get() == this {
                        "px-8 py-2 rounded-md text-sm font-medium transition-all bg-foreground text-primary shadow-md"
                    } else {
                        "px-8 py-2 rounded-md text-sm font-medium transition-all text-foreground/90 hover:text-foreground"
                    }
                }
                aria-pressed=move || (tab.get() == this).to_string()
                on:click=move |_| set_tab.set(this)
            >
                {label}
            </button>
        }
    };

    view! {
        <section id="experience" class="relative py-24 flex flex-col items-center overflow-hidden">
            <div class="w-full max-w-7xl mx-auto px-6 lg:px-12 relative z-10">
                <SectionHeading lead="Experience &" highlight="Education" />
                <div class="flex justify-center mb-12">
                    <div class="inline-flex rounded-lg p-1 bg-primary/80">
                        {tab_button(Tab::Experience, "My Experience")}
                        {tab_button(Tab::Education, "Education")}
                    </div>
                </div>
                <div class="space-y-8 relative">
                    <div class="hidden md:block absolute left-1/2 top-0 bottom-0 w-0.5 bg-gradient-to-b from-primary via-accent to-muted -translate-x-1/2"></div>
                    {move || match tab.get() {
                        Tab::Experience => {
                            Either::Left(
                                EXPERIENCE
                                    .iter()
                                    .enumerate()
                                    .map(|(i, item)| {
                                        view! {
                                            <TimelineEntry index=i>
                                                <ExperienceCard item=*item />
                                            </TimelineEntry>
                                        }
                                    })
                                    .collect_view(),
                            )
                        }
                        Tab::Education => {
                            Either::Right(
                                EDUCATION
                                    .iter()
                                    .enumerate()
                                    .map(|(i, item)| {
                                        view! {
                                            <TimelineEntry index=i>
                                                <EducationCard item=*item />
                                            </TimelineEntry>
                                        }
                                    })
                                    .collect_view(),
                            )
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// Alternates sides on wide screens, with a numbered dot on the spine.
#[component]
fn TimelineEntry(index: usize, children: Children) -> impl IntoView {
    let row_class = if index % 2 == 0 {
        "flex items-center gap-8 md:flex-row-reverse"
    } else {
        "flex items-center gap-8"
    };
    view! {
        <div class="relative">
            <div class=row_class>
                <div class="flex-1">{children()}</div>
                <div class="relative z-10 hidden md:flex w-10 h-10 rounded-full bg-primary text-background items-center justify-center">
                    <span class="text-sm">{index + 1}</span>
                </div>
                <div class="hidden md:block flex-1"></div>
            </div>
        </div>
    }
}

#[component]
fn ExperienceCard(item: ExperienceItem) -> impl IntoView {
    view! {
        <div class="rounded-2xl p-6 bg-surface border border-muted/10 hover:border-primary/30 transition-all duration-300">
            <div class="flex gap-4">
                <div class="w-14 h-14 flex-shrink-0 bg-white rounded-lg overflow-hidden flex items-center justify-center shadow-md">
                    <img src=item.logo alt=item.company class="w-10 h-10 object-contain" />
                </div>
                <div>
                    <h3 class="font-semibold text-lg">{item.role}</h3>
                    <p class="text-muted text-sm mb-3">{item.company} " · " {item.period}</p>
                    <ul class="text-muted text-sm space-y-1 list-disc pl-4">
                        {item
                            .accomplishments
                            .iter()
                            .map(|a| view! { <li>{*a}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EducationCard(item: EducationItem) -> impl IntoView {
    view! {
        <div class="rounded-2xl p-6 bg-surface border border-muted/10 hover:border-primary/30 transition-all duration-300">
            <div class="flex gap-4">
                <div class="w-14 h-14 flex-shrink-0 bg-white rounded-lg overflow-hidden flex items-center justify-center shadow-md text-2xl">
                    {match item.logo {
                        Some(logo) => {
                            Either::Left(
                                view! {
                                    <img
                                        src=logo
                                        alt=item.institution
                                        class="w-10 h-10 object-contain"
                                    />
                                },
                            )
                        }
                        None => Either::Right(view! { <IconView icon=item.icon() /> }),
                    }}
                </div>
                <div>
                    <h3 class="font-semibold text-lg">{item.degree}</h3>
                    <p class="text-muted text-sm mb-3">
                        {item.institution} " · " {item.period}
                    </p>
                    <ul class="text-muted text-sm space-y-1 list-disc pl-4">
                        {item.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}
