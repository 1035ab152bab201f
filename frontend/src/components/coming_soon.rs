use leptos::*;

pub const DEFAULT_COMING_SOON: &str =
    "This feature is currently under development and will be available soon.";

/// Placeholder for sections that are not built yet.
#[component]
pub fn ComingSoonPage(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    let description = description.unwrap_or_else(|| DEFAULT_COMING_SOON.to_string());

    view! {
        <section class="coming-soon">
            <div class="card coming-soon-card">
                <div class="coming-soon-icon">"🚧"</div>
                <h2>{title}</h2>
                <p class="muted">{description}</p>
                <a href="/upload" class="button button-outline">"← Back to Upload"</a>
            </div>
        </section>
    }
}
