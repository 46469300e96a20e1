use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use truthlens_core::QueryClient;
use truthlens_core::sections::Section;

/// Query key for the trending topic list.
pub const TRENDING_TOPICS_KEY: &str = "trending-topics";

/// One trending misinformation topic and how often it was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendTopic {
    pub topic: String,
    pub count: u32,
}

/// Shown until the dashboard pushes live numbers into the query cache.
fn baseline_topics() -> Vec<TrendTopic> {
    [
        ("Health Misinformation", 45),
        ("Political Claims", 32),
        ("Science Denial", 28),
        ("Social Media Rumors", 21),
        ("Economic Misinformation", 18),
    ]
    .into_iter()
    .map(|(topic, count)| TrendTopic {
        topic: topic.to_string(),
        count,
    })
    .collect()
}

fn trending_topics(client: &QueryClient) -> Vec<TrendTopic> {
    let cached = client.get_or_insert_with(TRENDING_TOPICS_KEY, || {
        serde_json::to_value(baseline_topics()).unwrap_or_default()
    });
    match serde_json::from_value(cached) {
        Ok(topics) => topics,
        Err(e) => {
            tracing::warn!(error = %e, "malformed trending topics in cache");
            client.invalidate(TRENDING_TOPICS_KEY);
            baseline_topics()
        }
    }
}

/// Percentage width of each bar relative to the busiest topic.
fn bar_widths(topics: &[TrendTopic]) -> Vec<u32> {
    let max = topics.iter().map(|t| t.count).max().unwrap_or(0);
    topics
        .iter()
        .map(|t| if max == 0 { 0 } else { t.count * 100 / max })
        .collect()
}

#[component]
pub fn Trends() -> impl IntoView {
    let client = expect_context::<QueryClient>();
    let topics = trending_topics(&client);
    let widths = bar_widths(&topics);

    view! {
        <section id=Section::Trends.id() data-section=Section::Trends.id() class="trends">
            <div class="container">
                <h2 class="section-title">"What's spreading right now"</h2>
                <ul class="trend-list">
                    {topics
                        .into_iter()
                        .zip(widths)
                        .map(|(topic, width)| {
                            view! {
                                <li class="trend">
                                    <span class="trend-topic">{topic.topic}</span>
                                    <span class="trend-bar" style=format!("width: {width}%")></span>
                                    <span class="trend-count">{topic.count} " flagged"</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
