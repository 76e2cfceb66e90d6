use leptos::{html, prelude::*};

use super::content::{INTERESTS, STATS, VALUES};
use super::reveal::{reveal_class, use_reveal};

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section node_ref=section_ref id="about" class="section-padding bg-white dark:bg-dark-800">
            <div class="container-custom">
                <div class=move || reveal_class("text-center mb-16", revealed.get())>
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-gray-100 mb-4">
                        "About Me"
                    </h2>
                    <div class="w-24 h-1 bg-primary-600 mx-auto mb-8"></div>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class=move || reveal_class("", revealed.get())>
                        <h3 class="text-2xl font-semibold text-gray-900 dark:text-gray-100 mb-6">
                            "Computer Science Graduate & Aspiring Developer"
                        </h3>
                        <div class="space-y-4 text-gray-600 dark:text-gray-300">
                            <p>
                                "My name is Apostolos Bletsas and I graduated from Democritus University "
                                "of Thrace with a passion for technology and a keen interest in software "
                                "development and AI. I am a hardworking person and I work great in a team."
                            </p>
                            <p>
                                "I am open to collaborations and opportunities that allow me to apply and "
                                "expand my knowledge. I am on a mission to transform my academic expertise "
                                "into a successful and fulfilling career in software development."
                            </p>
                            <p>
                                "With experience in customer service, completed army service, and teaching, "
                                "I bring strong interpersonal skills and adaptability to every project."
                            </p>
                        </div>

                        <div class="mt-8">
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-4">
                                "What I Value"
                            </h4>
                            <div class="grid grid-cols-2 gap-4">
                                {VALUES
                                    .iter()
                                    .map(|value| {
                                        view! {
                                            <div class="flex items-center gap-2 text-gray-600 dark:text-gray-300">
                                                <div class="w-2 h-2 bg-primary-600 rounded-full"></div>
                                                {*value}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class=move || reveal_class("space-y-8", revealed.get())>
                        <div class="grid grid-cols-2 gap-6">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center p-6 card hover:shadow-xl transition-all duration-300">
                                            <div class="text-3xl font-bold text-primary-600 dark:text-primary-400 mb-2">
                                                {stat.number}
                                            </div>
                                            <div class="text-gray-600 dark:text-gray-300 font-medium">
                                                {stat.label}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="card p-6">
                            <h4 class="text-lg font-semibold text-gray-900 dark:text-gray-100 mb-4">
                                "Beyond Coding"
                            </h4>
                            <div class="space-y-3">
                                {INTERESTS
                                    .iter()
                                    .map(|interest| {
                                        view! {
                                            <div class="flex items-center gap-3 text-gray-600 dark:text-gray-300">
                                                <div class="w-2 h-2 bg-primary-600 rounded-full"></div>
                                                <span>{*interest}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
