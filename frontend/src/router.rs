use crate::env_variable_utils::get_app_name;
use crate::search::api::execute_search;
use crate::search::components::{PageControls, SearchHeader};
use crate::sidebar::Sidebar;
use crate::video_table::VideoTable;
use dashboard_core::session::{PendingSearch, Session};
use dashboard_core::SearchIntent;
use std::cell::RefCell;
use std::rc::Rc;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Dashboard /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-red-600 hover:underline">
                        {"Go back to search"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn spawn_search(
    pending: Option<PendingSearch>,
    session: &Rc<RefCell<Session>>,
    refresh: &UseForceUpdateHandle,
) {
    let Some(pending) = pending else {
        return;
    };
    let session = session.clone();
    let refresh = refresh.clone();
    refresh.force_update();
    wasm_bindgen_futures::spawn_local(async move {
        execute_search(pending, session, refresh).await;
    });
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session = use_mut_ref(Session::new);
    let refresh = use_force_update();

    let on_save_api_key = {
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |key: String| {
            let saved = session.borrow_mut().set_api_key(&key);
            refresh.force_update();
            saved
        })
    };

    let on_search = {
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |intent: SearchIntent| {
            let submitted = session.borrow_mut().submit_search(intent);
            match submitted {
                Ok(pending) => spawn_search(Some(pending), &session, &refresh),
                Err(e) if e.is_precondition() => alert(&e.to_string()),
                Err(e) => log::error!("Search could not start: {e}"),
            }
        })
    };

    let on_next = {
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            let pending = session.borrow_mut().next_page();
            spawn_search(pending, &session, &refresh);
        })
    };

    let on_prev = {
        let session = session.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            let pending = session.borrow_mut().prev_page();
            spawn_search(pending, &session, &refresh);
        })
    };

    let state = session.borrow();
    let page_controls = html! {
        <PageControls
            page_number={state.page_number()}
            can_prev={state.can_go_prev()}
            can_next={state.can_go_next()}
            on_prev={on_prev.clone()}
            on_next={on_next.clone()}
        />
    };

    html! {
        <div class="flex flex-col md:flex-row min-h-screen bg-gray-50">
            <Sidebar
                app_name={get_app_name()}
                has_api_key={state.api_key().is_some()}
                on_save_api_key={on_save_api_key}
            />

            <main class="flex-1 md:ml-80 p-4 md:p-8">
                <div class="max-w-7xl mx-auto">
                    <div class="mb-8">
                        <h2 class="text-2xl font-bold text-gray-900">{"Video Search"}</h2>
                        <p class="text-gray-500 text-sm mt-1">
                            {"Search by keyword, narrow by date and length, and compare channels."}
                        </p>
                    </div>

                    <SearchHeader loading={state.is_loading()} on_search={on_search} />

                    if let Some(message) = state.error() {
                        <div class="mb-6 bg-red-50 border-l-4 border-red-500 p-4 rounded-md">
                            <h3 class="text-sm font-medium text-red-800">{"Something went wrong"}</h3>
                            <p class="text-sm text-red-700 mt-1">{message}</p>
                        </div>
                    }

                    <div class="mb-4 flex justify-between items-center">
                        <h3 class="text-lg font-semibold text-gray-800">
                            {"Results"}
                            <span class="text-sm font-normal text-gray-500 ml-2">
                                {format!("(up to {} per page, about {} total)",
                                    dashboard_core::config::PAGE_SIZE,
                                    state.page().total_results)}
                            </span>
                        </h3>
                        {page_controls.clone()}
                    </div>

                    <VideoTable
                        records={state.records().to_vec()}
                        api_key={state.api_key().map(String::from)}
                    />

                    if !state.records().is_empty() {
                        <div class="mt-6 flex justify-center">
                            {page_controls}
                        </div>
                    }
                </div>
            </main>
        </div>
    }
}
