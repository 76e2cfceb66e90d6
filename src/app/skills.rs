use leptos::{html, prelude::*};

use super::content::{SKILL_GROUPS, TOOLS};
use super::icons::IconGlyph;
use super::reveal::{reveal_class, use_reveal};

fn group_button_class(active: bool) -> &'static str {
    if active {
        "flex items-center gap-2 px-6 py-3 rounded-lg font-medium transition-all duration-200 bg-primary-600 text-white shadow-lg"
    } else {
        "flex items-center gap-2 px-6 py-3 rounded-lg font-medium transition-all duration-200 bg-white dark:bg-dark-700 text-gray-700 dark:text-gray-300 hover:bg-primary-100 dark:hover:bg-dark-600"
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);
    // non-persisted toggle; reload starts back at the first group
    let (active, set_active) = signal(0usize);

    view! {
        <section node_ref=section_ref id="skills" class="section-padding bg-gray-50 dark:bg-dark-900">
            <div class="container-custom">
                <div class=move || reveal_class("text-center mb-16", revealed.get())>
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-gray-100 mb-4">
                        "Skills & Tools"
                    </h2>
                    <div class="w-24 h-1 bg-primary-600 mx-auto mb-8"></div>
                    <p class="text-lg text-gray-600 dark:text-gray-300 max-w-3xl mx-auto">
                        "A comprehensive overview of my technical skills and the tools I use to "
                        "build exceptional software solutions."
                    </p>
                </div>

                <div class=move || reveal_class("flex flex-wrap justify-center gap-4 mb-12", revealed.get())>
                    {SKILL_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(i, group)| {
                            view! {
                                <button
                                    type="button"
                                    class=move || group_button_class(active.get() == i)
                                    on:click=move |_| set_active.set(i)
                                >
                                    <IconGlyph icon=group.icon />
                                    {group.title}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-16">
                    {move || {
                        SKILL_GROUPS[active.get()]
                            .skills
                            .iter()
                            .map(|skill| {
                                view! {
                                    <div class="card p-6 hover:shadow-xl transition-all duration-300">
                                        <div class="flex items-center gap-4">
                                            <div class="p-3 rounded-lg bg-gray-100 dark:bg-dark-700 text-3xl">
                                                <IconGlyph icon=skill.icon />
                                            </div>
                                            <h3 class="font-semibold text-lg text-gray-900 dark:text-gray-100">
                                                {skill.name}
                                            </h3>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <div class=move || reveal_class("", revealed.get())>
                    <h3 class="text-2xl font-semibold text-gray-900 dark:text-gray-100 text-center mb-8">
                        "Tools & Technologies"
                    </h3>
                    <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                        {TOOLS
                            .iter()
                            .map(|tool| {
                                view! {
                                    <div class="card p-4 text-center hover:shadow-lg transition-all duration-300">
                                        <h4 class="font-medium text-gray-900 dark:text-gray-100 mb-1">
                                            {tool.name}
                                        </h4>
                                        <p class="text-sm text-gray-500 dark:text-gray-400">
                                            {tool.category}
                                        </p>
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
