use leptos::prelude::*;
use truthlens_core::sections::Section;

static LESSONS: [(&str, &str); 4] = [
    (
        "Check the source",
        "Who published it, and do other outlets report the same thing? Anonymous screenshots are not sources.",
    ),
    (
        "Watch for emotional hooks",
        "Outrage, fear and urgency are the oldest tricks for getting a post shared before it is read.",
    ),
    (
        "Look for the date",
        "Old stories resurface during new crises. A real photo from 2015 can still mislead in 2025.",
    ),
    (
        "Reverse the image",
        "A reverse image search shows where a picture first appeared and what it originally showed.",
    ),
];

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=Section::Education.id() data-section=Section::Education.id() class="education">
            <div class="container">
                <h2 class="section-title">"Spot it yourself"</h2>
                <p class="section-description">
                    "Four habits that catch most misinformation before any tool does."
                </p>
                <div class="lesson-grid">
                    {LESSONS
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <article class="lesson-card">
                                    <h3 class="lesson-title">{*title}</h3>
                                    <p class="lesson-body">{*body}</p>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
