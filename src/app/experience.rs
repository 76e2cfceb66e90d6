use leptos::{html, prelude::*};

use super::content::{ExperienceEntry, CERTIFICATIONS, EXPERIENCE, RESUME_FILENAME, RESUME_PATH};
use super::icons::{Icon, IconGlyph};
use super::reveal::{reveal_class, use_reveal};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref id="experience" class="section-padding bg-white dark:bg-dark-800">
            <div class="container-custom">
                <div class=move || reveal_class("text-center mb-16", revealed.get())>
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-gray-100 mb-4">
                        "Experience & Education"
                    </h2>
                    <div class="w-24 h-1 bg-primary-600 mx-auto mb-8"></div>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "My professional journey and educational background that shaped my expertise "
                        "in software development and technology."
                    </p>
                </div>

                <div class=move || reveal_class("text-center mb-12", revealed.get())>
                    <a
                        href=RESUME_PATH
                        download=RESUME_FILENAME
                        class="inline-flex items-center gap-3 px-8 py-4 btn-primary font-medium text-lg shadow-lg hover:shadow-xl"
                    >
                        <IconGlyph icon=Icon::Download />
                        "Download Resume"
                    </a>
                </div>

                <div class=move || reveal_class("space-y-8 mb-16", revealed.get())>
                    {EXPERIENCE.iter().map(experience_card).collect_view()}
                </div>

                <div class=move || reveal_class("", revealed.get())>
                    <h3 class="text-2xl font-semibold text-gray-900 dark:text-gray-100 text-center mb-8">
                        "Certifications"
                    </h3>
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {CERTIFICATIONS
                            .iter()
                            .map(|cert| {
                                view! {
                                    <div class="card p-6 hover:shadow-xl transition-all duration-300">
                                        <h4 class="font-semibold text-gray-900 dark:text-gray-100 mb-2">
                                            {cert.name}
                                        </h4>
                                        <p class="text-gray-600 dark:text-gray-300 text-sm mb-1">
                                            {cert.issuer}
                                        </p>
                                        <div class="flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
                                            <span>{cert.year}</span>
                                            <span class="font-mono">{cert.credential}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

fn experience_card(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class="card p-6 hover:shadow-xl transition-all duration-300">
            <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-4 mb-4">
                <div class="flex items-start gap-4">
                    <div class="p-3 bg-primary-100 dark:bg-primary-900 rounded-lg text-primary-600 dark:text-primary-400">
                        <IconGlyph icon=entry.kind.icon() />
                    </div>
                    <div>
                        <h3 class="text-xl font-semibold text-gray-900 dark:text-gray-100">
                            {entry.title}
                        </h3>
                        <p class="text-primary-600 dark:text-primary-400 font-medium">
                            {entry.organization}
                        </p>
                        <div class="flex items-center gap-2 text-sm text-gray-500 dark:text-gray-400 mt-1">
                            <IconGlyph icon=Icon::Location />
                            {entry.location}
                        </div>
                    </div>
                </div>
                <div class="shrink-0 text-sm font-bold text-gray-600 dark:text-gray-300">
                    {entry.period}
                </div>
            </div>

            <p class="text-gray-600 dark:text-gray-300 mb-4">{entry.description}</p>

            <ul class="space-y-1 mb-4">
                {entry
                    .achievements
                    .iter()
                    .map(|achievement| {
                        view! {
                            <li class="flex items-start gap-2 text-sm text-gray-600 dark:text-gray-300">
                                <div class="w-1.5 h-1.5 bg-primary-600 rounded-full mt-1.5 shrink-0"></div>
                                {*achievement}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="flex flex-wrap gap-2">
                {entry
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="px-3 py-1 bg-gray-100 dark:bg-dark-700 text-gray-700 dark:text-gray-300 text-xs rounded-full">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
