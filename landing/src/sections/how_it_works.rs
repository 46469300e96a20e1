use leptos::prelude::*;
use truthlens_core::sections::Section;

use crate::providers::Tooltip;

struct Step {
    title: &'static str,
    body: &'static str,
    hint: &'static str,
}

static STEPS: [Step; 3] = [
    Step {
        title: "Paste",
        body: "Drop in any claim, headline or message you are unsure about.",
        hint: "Text only for now; images are analyzed in the dashboard.",
    },
    Step {
        title: "Analyze",
        body: "Forensic analysis flags emotional manipulation, missing sources and known hoaxes.",
        hint: "Runs on the TruthLens dashboard, not in your browser.",
    },
    Step {
        title: "Verify",
        body: "Get a credibility score plus the sources you can check yourself.",
        hint: "Scores are a starting point, not a verdict.",
    },
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id=Section::HowItWorks.id() data-section=Section::HowItWorks.id() class="how-it-works">
            <div class="container">
                <h2 class="section-title">"How it works"</h2>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(idx, step)| {
                            view! {
                                <li class="step">
                                    <span class="step-number">{idx + 1}</span>
                                    <Tooltip label=step.hint>
                                        <h3 class="step-title">{step.title}</h3>
                                    </Tooltip>
                                    <p class="step-body">{step.body}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
