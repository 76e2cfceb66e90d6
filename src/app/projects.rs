use leptos::{html, prelude::*};

use super::content::{ProjectEntry, GITHUB_REPOS_URL};
use super::filter::{visible_projects, CategoryFilter};
use super::icons::{Icon, IconGlyph};
use super::reveal::{reveal_class, use_reveal};

fn filter_button_class(active: bool) -> &'static str {
    if active {
        "px-6 py-2 rounded-full transition-all duration-200 border bg-primary-600 text-white border-primary-600"
    } else {
        "px-6 py-2 rounded-full transition-all duration-200 border bg-white dark:bg-dark-700 text-gray-700 dark:text-gray-300 hover:bg-primary-100 dark:hover:bg-dark-600 border-gray-200 dark:border-dark-600"
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);
    let (filter, set_filter) = signal(CategoryFilter::default());

    view! {
        <section node_ref=section_ref id="projects" class="section-padding bg-gray-50 dark:bg-dark-900">
            <div class="container-custom">
                <div class=move || reveal_class("text-center mb-16", revealed.get())>
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-gray-100 mb-4">
                        "Featured Projects"
                    </h2>
                    <div class="w-24 h-1 bg-primary-600 mx-auto mb-8"></div>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "A collection of projects showcasing my skills in web development, machine "
                        "learning, and software engineering across different technologies and domains."
                    </p>
                </div>

                <div class=move || reveal_class("flex flex-wrap justify-center gap-4 mb-12", revealed.get())>
                    {CategoryFilter::options()
                        .map(|option| {
                            view! {
                                <button
                                    type="button"
                                    class=move || filter_button_class(filter.get() == option)
                                    on:click=move |_| set_filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                {move || {
                    let items = visible_projects(filter.get());
                    if items.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-gray-600 dark:text-gray-400 text-lg">
                                    "No projects found in this category."
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                                {items.into_iter().map(project_card).collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}

                <div class=move || reveal_class("text-center mt-12", revealed.get())>
                    <a
                        href=GITHUB_REPOS_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-8 py-3 btn-primary font-medium"
                    >
                        <IconGlyph icon=Icon::GitHub />
                        "View More on GitHub"
                    </a>
                </div>
            </div>
        </section>
    }
}

fn project_card(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <div class="card overflow-hidden h-full hover:shadow-2xl transition-all duration-300 flex flex-col">
            <div class="w-full h-48 bg-gradient-to-br from-primary-600 to-primary-800 flex items-center justify-center text-white text-6xl opacity-90">
                <IconGlyph icon=project.icon />
            </div>

            <div class="p-6 flex flex-col flex-grow">
                <div class="flex items-center justify-between mb-3">
                    <span class="text-sm font-medium text-primary-600 dark:text-primary-400">
                        {project.category.label()}
                    </span>
                </div>
                <h3 class="text-xl font-semibold text-gray-900 dark:text-gray-100 mb-3">
                    {project.title}
                </h3>
                <p class="text-gray-600 dark:text-gray-300 mb-4 flex-grow">{project.description}</p>

                <div class="flex flex-wrap gap-2 mb-4 min-h-[60px]">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-primary-100 dark:bg-dark-700 text-gray-900 dark:text-gray-100 text-xs rounded-full border border-primary-200 dark:border-dark-600 h-fit">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="flex gap-3 mt-auto">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex-1 flex items-center justify-center gap-2 px-4 py-2 bg-primary-600 hover:bg-primary-700 text-white rounded-lg transition-colors duration-200 text-sm font-medium shadow-md hover:shadow-lg"
                    >
                        <IconGlyph icon=Icon::GitHub />
                        "Code"
                    </a>
                    {project
                        .live
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 flex items-center justify-center gap-2 px-4 py-2 bg-amber-500 hover:bg-amber-600 text-white rounded-lg transition-colors duration-200 text-sm font-medium shadow-md hover:shadow-lg"
                                >
                                    <IconGlyph icon=Icon::ExternalLink />
                                    "Live Demo"
                                </a>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
