use dashboard_core::{DateFilter, DurationFilter, SortOrder};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Event;
use yew::{function_component, html, Callback, Html, Properties};

// Helper to read "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

fn on_select<T: 'static>(
    callback: &Callback<T>,
    from_key: fn(&str) -> Option<T>,
) -> Callback<Event> {
    let callback = callback.clone();
    Callback::from(move |e: Event| {
        if let Some(value) = event_value(&e).as_deref().and_then(from_key) {
            callback.emit(value);
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct SearchOptionsProps {
    pub date_filter: DateFilter,
    pub sort_order: SortOrder,
    pub duration_filter: DurationFilter,
    pub on_date_filter_change: Callback<DateFilter>,
    pub on_sort_order_change: Callback<SortOrder>,
    pub on_duration_filter_change: Callback<DurationFilter>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(SearchOptionsDropdowns)]
pub fn search_options(props: &SearchOptionsProps) -> Html {
    let on_date_change = on_select(&props.on_date_filter_change, DateFilter::from_key);
    let on_sort_change = on_select(&props.on_sort_order_change, SortOrder::from_key);
    let on_duration_change =
        on_select(&props.on_duration_filter_change, DurationFilter::from_key);

    html! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
            <label class="flex flex-col text-sm text-gray-600">
                { "Published" }
                <select class="mt-1 p-2 border border-gray-300 rounded-md"
                        onchange={on_date_change}
                        disabled={props.disabled}>
                    {
                        for DateFilter::all_variants().into_iter().map(|f| html! {
                            <option value={f.key()} selected={f == props.date_filter}>
                                { f.display_name() }
                            </option>
                        })
                    }
                </select>
            </label>

            <label class="flex flex-col text-sm text-gray-600">
                { "Sort by" }
                <select class="mt-1 p-2 border border-gray-300 rounded-md"
                        onchange={on_sort_change}
                        disabled={props.disabled}>
                    {
                        for SortOrder::all_variants().into_iter().map(|o| html! {
                            <option value={o.key()} selected={o == props.sort_order}>
                                { o.display_name() }
                            </option>
                        })
                    }
                </select>
            </label>

            <label class="flex flex-col text-sm text-gray-600">
                { "Length" }
                <select class="mt-1 p-2 border border-gray-300 rounded-md"
                        onchange={on_duration_change}
                        disabled={props.disabled}>
                    {
                        for DurationFilter::all_variants().into_iter().map(|d| html! {
                            <option value={d.key()} selected={d == props.duration_filter}>
                                { d.display_name() }
                            </option>
                        })
                    }
                </select>
            </label>
        </div>
    }
}
