use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub app_name: AttrValue,
    pub has_api_key: bool,
    /// Returns whether the key was accepted.
    pub on_save_api_key: Callback<String, bool>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let key_input = use_state(String::new);
    let saved = use_state(|| false);

    let on_key_input = {
        let key_input = key_input.clone();
        let saved = saved.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            key_input.set(input_value);
            saved.set(false);
        })
    };

    let on_save = {
        let key_input = key_input.clone();
        let saved = saved.clone();
        let on_save_api_key = props.on_save_api_key.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            saved.set(on_save_api_key.emit((*key_input).clone()));
        })
    };

    html! {
        <aside class="w-full md:w-80 bg-slate-900 text-white flex flex-col h-auto md:h-screen md:fixed md:left-0 md:top-0 shadow-xl z-20">
            <div class="p-6 border-b border-slate-700">
                <h1 class="text-xl font-bold tracking-tight">{ props.app_name.clone() }</h1>
            </div>

            <form onsubmit={on_save} class="p-6 flex-1">
                <label class="block text-slate-400 text-sm font-medium mb-2" for="apiKey">
                    {"YouTube Data API Key"}
                </label>
                <input
                    id="apiKey"
                    type="password"
                    class="w-full bg-slate-800 border border-slate-700 text-white text-sm rounded-lg block p-2.5 placeholder-slate-500"
                    placeholder="Paste your API key"
                    value={(*key_input).clone()}
                    oninput={on_key_input}
                />
                <p class="text-xs text-slate-500 mt-2">
                    {
                        if props.has_api_key {
                            "A key is set for this session."
                        } else {
                            "A valid API key is required to search."
                        }
                    }
                </p>
                <button
                    type="submit"
                    class={classes!(
                        "w-full", "mt-4", "py-2.5", "px-4", "rounded-lg", "font-medium", "text-white",
                        if *saved { "bg-green-600" } else { "bg-red-600 hover:bg-red-700" }
                    )}
                >
                    { if *saved { "Saved" } else { "Save API Key" } }
                </button>

                <div class="mt-8 border-t border-slate-700 pt-6">
                    <ul class="text-xs text-slate-400 space-y-2 list-disc list-inside">
                        <li>{"Keep an eye on your daily quota."}</li>
                        <li>{"The key is kept in memory only and is gone on reload."}</li>
                        <li>{"Each search costs a listing call plus a details call."}</li>
                    </ul>
                </div>
            </form>
        </aside>
    }
}
