use crate::search::search_options::SearchOptionsDropdowns;
use dashboard_core::{DateFilter, DurationFilter, SearchIntent, SortOrder};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchHeaderProps {
    pub loading: bool,
    pub on_search: Callback<SearchIntent>,
}

#[function_component(SearchHeader)]
pub fn search_header(props: &SearchHeaderProps) -> Html {
    let current_input = use_state(String::new);
    let date_filter = use_state(DateFilter::default);
    let sort_order = use_state(SortOrder::default);
    let duration_filter = use_state(DurationFilter::default);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    // Filters only update local state; nothing is fetched until submit.
    let on_date_filter_change = {
        let date_filter = date_filter.clone();
        Callback::from(move |f: DateFilter| date_filter.set(f))
    };
    let on_sort_order_change = {
        let sort_order = sort_order.clone();
        Callback::from(move |o: SortOrder| sort_order.set(o))
    };
    let on_duration_filter_change = {
        let duration_filter = duration_filter.clone();
        Callback::from(move |d: DurationFilter| duration_filter.set(d))
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        let date_filter = date_filter.clone();
        let sort_order = sort_order.clone();
        let duration_filter = duration_filter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search.emit(SearchIntent {
                query_text: (*current_input).clone(),
                date_filter: *date_filter,
                duration_filter: *duration_filter,
                sort_order: *sort_order,
                page_cursor: None,
            });
        })
    };

    html! {
        <form onsubmit={on_submit} class="bg-white p-6 rounded-xl shadow-sm border border-gray-200 mb-6 space-y-4">
            <div class="flex">
                <input
                    type="text"
                    class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-red-500"
                    placeholder="Search YouTube videos..."
                    value={(*current_input).clone()}
                    oninput={on_input}
                    disabled={props.loading}
                />
                <button
                    type="submit"
                    class="bg-red-600 text-white px-6 rounded-r-lg hover:bg-red-700 focus:outline-none disabled:opacity-50"
                    disabled={props.loading}
                >
                    { if props.loading { "Searching..." } else { "Search" } }
                </button>
            </div>
            <SearchOptionsDropdowns
                date_filter={*date_filter}
                sort_order={*sort_order}
                duration_filter={*duration_filter}
                on_date_filter_change={on_date_filter_change}
                on_sort_order_change={on_sort_order_change}
                on_duration_filter_change={on_duration_filter_change}
                disabled={props.loading}
            />
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageControlsProps {
    pub page_number: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(PageControls)]
pub fn page_controls(props: &PageControlsProps) -> Html {
    let on_prev = props.on_prev.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());

    html! {
        <div class="flex items-center space-x-2">
            <button
                onclick={on_prev}
                disabled={!props.can_prev}
                class="px-3 py-1.5 border border-gray-300 rounded-md bg-white text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {"Previous"}
            </button>
            <span class="px-2 text-sm text-gray-500">
                {format!("Page {}", props.page_number)}
            </span>
            <button
                onclick={on_next}
                disabled={!props.can_next}
                class="px-3 py-1.5 border border-gray-300 rounded-md bg-white text-sm font-medium text-gray-700 hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {"Next"}
            </button>
        </div>
    }
}
