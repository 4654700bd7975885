use crate::shared::icons::icon;
use leptos::prelude::*;

/// Trimmed query, or `None` when there is nothing to search for.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Search button that opens a popover with the query input.
#[component]
pub fn SearchBar(
    #[prop(into, default = "Search...".to_string())] placeholder: String,
    /// Called with the trimmed, non-empty query on submit
    on_search: Callback<String>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(q) = normalize_query(&query.get_untracked()) {
            on_search.run(q);
        }
    };

    view! {
        <div class="popover-anchor">
            <button
                class="top-header__icon-btn"
                aria-label="search"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("search")}
            </button>
            <Show when=move || open.get()>
                <div class="popover-backdrop" on:click=move |_| open.set(false)></div>
                <div class="popover search-bar">
                    <form class="search-bar__form" on:submit=on_submit>
                        <input
                            class="search-bar__input"
                            type="text"
                            placeholder=placeholder.clone()
                            aria-label="search"
                            autofocus=true
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <Show when=move || !query.get().is_empty()>
                            <button
                                type="button"
                                class="top-header__icon-btn"
                                aria-label="clear"
                                on:click=move |_| query.set(String::new())
                            >
                                {icon("x")}
                            </button>
                        </Show>
                        <button type="submit" class="top-header__icon-btn" aria-label="search">
                            {icon("search")}
                        </button>
                    </form>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  tolstoy "), Some("tolstoy".to_string()));
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(""), None);
    }
}
