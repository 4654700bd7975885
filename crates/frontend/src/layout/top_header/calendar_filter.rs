use crate::app::use_config;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a001_book_order::DateRange;
use contracts::shared::format::format_date;
use leptos::prelude::*;

/// Value of an `<input type="date">`; empty or malformed input means no date.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Short description of the applied range, `None` when nothing is set.
pub fn range_label(range: &DateRange, locale: &str) -> Option<String> {
    if range.is_empty() {
        return None;
    }
    let fmt = |d: Option<NaiveDate>| d.map(|d| format_date(d, locale));
    match (fmt(range.start_date), fmt(range.end_date)) {
        (None, None) => None,
        (Some(start), None) => Some(format!("From {}", start)),
        (None, Some(end)) => Some(format!("Until {}", end)),
        (Some(start), Some(end)) => Some(format!("{} - {}", start, end)),
    }
}

/// Date range filter in a popover; Apply emits the range, Clear emits an empty one.
#[component]
pub fn CalendarFilter(on_date_range_change: Callback<DateRange>) -> impl IntoView {
    let locale = use_config().order.locale;
    let open = RwSignal::new(false);
    let draft = RwSignal::new(DateRange::default());
    let applied = RwSignal::new(DateRange::default());

    let apply = move |_| {
        let range = draft.get_untracked();
        applied.set(range);
        on_date_range_change.run(range);
        open.set(false);
    };

    let clear = move |_| {
        draft.set(DateRange::default());
        applied.set(DateRange::default());
        on_date_range_change.run(DateRange::default());
    };

    view! {
        <div class="popover-anchor">
            <button
                class="top-header__icon-btn"
                class:top-header__icon-btn--active=move || !applied.get().is_empty()
                aria-label="calendar filter"
                title=move || range_label(&applied.get(), &locale).unwrap_or_else(|| "Filter by date".to_string())
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("calendar")}
            </button>
            <Show when=move || open.get()>
                <div class="popover-backdrop" on:click=move |_| open.set(false)></div>
                <div class="popover calendar-filter">
                    <div class="calendar-filter__title">"Filter by Date Range"</div>
                    <label class="calendar-filter__field">
                        <span>"Start Date"</span>
                        <input
                            type="date"
                            prop:value=move || date_input_value(draft.get().start_date)
                            on:input=move |ev| {
                                let date = parse_date_input(&event_target_value(&ev));
                                draft.update(|r| r.start_date = date);
                            }
                        />
                    </label>
                    <label class="calendar-filter__field">
                        <span>"End Date"</span>
                        <input
                            type="date"
                            prop:min=move || date_input_value(draft.get().start_date)
                            prop:value=move || date_input_value(draft.get().end_date)
                            on:input=move |ev| {
                                let date = parse_date_input(&event_target_value(&ev));
                                draft.update(|r| r.end_date = date);
                            }
                        />
                    </label>
                    <div class="calendar-filter__actions">
                        <button class="button button--text" on:click=clear>"Clear"</button>
                        <button
                            class="button button--primary"
                            disabled=move || draft.get().is_empty()
                            on:click=apply
                        >
                            "Apply"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("15/03/2024"), None);
    }

    #[test]
    fn test_range_label() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 15);
        let end = NaiveDate::from_ymd_opt(2024, 3, 20);
        assert_eq!(range_label(&DateRange::default(), "en-US"), None);
        assert_eq!(
            range_label(&DateRange { start_date: start, end_date: end }, "en-US").as_deref(),
            Some("Mar 15, 2024 - Mar 20, 2024")
        );
        assert_eq!(
            range_label(&DateRange { start_date: start, end_date: None }, "de-DE").as_deref(),
            Some("From 15.03.2024")
        );
    }

    #[test]
    fn test_input_value_roundtrip_format() {
        assert_eq!(date_input_value(NaiveDate::from_ymd_opt(2024, 1, 5)), "2024-01-05");
        assert_eq!(date_input_value(None), "");
    }
}
