use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::data::PROFILE;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text="Privacy" />
        <div class="min-h-screen bg-black text-white">
            <div class="relative z-10 max-w-4xl mx-auto px-6 py-20">
                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 text-zinc-500 hover:text-orange-500 transition-colors mb-12 text-sm tracking-widest"
                >
                    "← BACK"
                </A>
                <h1 class="text-[12vw] md:text-[8vw] leading-none mb-12 font-bold">"PRIVACY"</h1>
                <div class="space-y-10 text-zinc-400">
                    <PolicySection title="INTRODUCTION">
                        "Welcome to " <strong class="text-orange-500">"the-whiz.dev"</strong>
                        ". I value your privacy and believe in transparency. This policy explains how I handle your data (spoiler: I don't)."
                    </PolicySection>
                    <PolicySection title="NO DATA COLLECTION">
                        "This website is a static portfolio designed to showcase my work. I do "
                        <strong class="text-white">"not"</strong>
                        " collect, store, or process any personal data from visitors. There are no forms to fill out, and no accounts to create."
                    </PolicySection>
                    <PolicySection title="NO COOKIES">
                        "I do " <strong class="text-white">"not"</strong>
                        " use cookies or any third-party tracking scripts. The only thing kept is the name of the last design you viewed, stored in your browser's local storage. It never leaves your device."
                    </PolicySection>
                    <PolicySection title="EXTERNAL LINKS">
                        "This website contains links to external sites (such as GitHub, LinkedIn, and project demos). I am not responsible for the content or privacy practices of these other sites. Please read the privacy statements of any site that collects personally identifiable information."
                    </PolicySection>
                    <PolicySection title="CONTACT">
                        "If you have any questions about this (very short) privacy policy, reach out via email at: "
                        <a
                            href=format!("mailto:{}", PROFILE.email)
                            class="text-orange-500 hover:underline"
                        >
                            {PROFILE.email}
                        </a>
                    </PolicySection>
                    <div class="pt-8 border-t border-zinc-800 text-sm text-zinc-600">
                        "Last Updated: January 2026"
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PolicySection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section>
            <h2 class="text-xl text-white font-bold mb-4">{title}</h2>
            <p class="leading-relaxed">{children()}</p>
        </section>
    }
}
