use crate::export::download_csv;
use crate::search::api::load_comments;
use crate::utils::{format_count, format_number, tag_preview};
use dashboard_core::comments::{CommentPanel, CommentState};
use dashboard_core::format::{format_date, format_duration};
use dashboard_core::{CommentRecord, DashboardError, VideoRecord};
use web_sys::HtmlImageElement;
use yew::prelude::*;

const AVATAR_FALLBACK: &str = "https://www.gravatar.com/avatar?d=mp";

#[derive(Properties, PartialEq)]
pub struct VideoTableProps {
    pub records: Vec<VideoRecord>,
    pub api_key: Option<String>,
}

#[function_component(VideoTable)]
pub fn video_table(props: &VideoTableProps) -> Html {
    let panel = use_mut_ref(CommentPanel::new);
    let refresh = use_force_update();

    // A new search or page replaces the rows; comments of the old rows go too.
    {
        let panel = panel.clone();
        let refresh = refresh.clone();
        let record_ids: Vec<String> = props.records.iter().map(|r| r.id.clone()).collect();
        use_effect_with(record_ids, move |_| {
            if panel.borrow_mut().collapse() {
                refresh.force_update();
            }
            || ()
        });
    }

    let on_toggle_comments = {
        let panel = panel.clone();
        let refresh = refresh.clone();
        let api_key = props.api_key.clone();
        Callback::from(move |video_id: String| {
            let to_fetch = panel.borrow_mut().toggle(&video_id);

            if let Some(video_id) = to_fetch {
                match api_key.clone() {
                    Some(api_key) => {
                        let panel = panel.clone();
                        let refresh = refresh.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            load_comments(api_key, video_id, panel, refresh).await;
                        });
                    }
                    None => {
                        panel
                            .borrow_mut()
                            .finish(&video_id, Err(DashboardError::MissingApiKey));
                    }
                }
            }
            refresh.force_update();
        })
    };

    let on_export = {
        let records = props.records.clone();
        Callback::from(move |_: MouseEvent| {
            if records.is_empty() {
                return;
            }
            if let Err(e) = download_csv(&records) {
                log::error!("CSV export failed: {:?}", e);
            }
        })
    };

    if props.records.is_empty() {
        return html! {
            <div class="bg-white rounded-xl shadow-sm p-12 text-center border border-gray-200">
                <div class="text-gray-400 mb-2">{"No results."}</div>
                <div class="text-sm text-gray-500">{"Try another query or different filters."}</div>
            </div>
        };
    }

    let panel = panel.borrow();

    html! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
            <div class="p-4 border-b border-gray-200 bg-gray-50 flex justify-between items-center">
                <span class="text-sm text-gray-500 font-medium">
                    {format!("{} videos", props.records.len())}
                </span>
                <button
                    onclick={on_export}
                    class="px-3 py-1.5 bg-white border border-gray-300 text-gray-700 rounded-md text-xs font-medium hover:bg-gray-50 hover:text-green-700"
                >
                    {"Download CSV"}
                </button>
            </div>

            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase w-32">{"Thumbnail"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Video"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase w-40">{"Stats"}</th>
                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Tags"}</th>
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        { for props.records.iter().map(|record| html! {
                            <VideoRow
                                key={record.id.clone()}
                                record={record.clone()}
                                comments={panel.state_for(&record.id).cloned()}
                                on_toggle_comments={on_toggle_comments.clone()}
                            />
                        })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoRowProps {
    pub record: VideoRecord,
    /// `Some` while this row's comment panel is open.
    pub comments: Option<CommentState>,
    pub on_toggle_comments: Callback<String>,
}

#[function_component(VideoRow)]
pub fn video_row(props: &VideoRowProps) -> Html {
    let record = &props.record;
    let expanded = props.comments.is_some();
    let duration = format_duration(record.duration.as_deref());
    let (tags, hidden_tags) = tag_preview(record.tags.as_deref());

    let on_toggle = {
        let video_id = record.id.clone();
        props.on_toggle_comments.reform(move |_: MouseEvent| video_id.clone())
    };

    html! {
        <>
            <tr class={if expanded { "bg-red-50" } else { "hover:bg-gray-50" }}>
                <td class="px-6 py-4 whitespace-nowrap align-top">
                    <div class="h-20 w-36 relative rounded-md overflow-hidden bg-gray-200">
                        if let Some(src) = record.thumbnails.preferred() {
                            <img class="h-full w-full object-cover" src={src.to_string()} alt={record.title.clone()} />
                        }
                        <div class="absolute bottom-1 right-1 bg-black/80 text-white text-[10px] px-1 py-0.5 rounded">
                            {duration.clone()}
                        </div>
                    </div>
                </td>

                <td class="px-6 py-4 align-top">
                    <div class="flex flex-col space-y-1">
                        <a href={record.watch_url()} target="_blank" rel="noopener noreferrer"
                           class="text-sm font-semibold text-gray-900 hover:text-red-600 line-clamp-2">
                            {&record.title}
                        </a>
                        <div class="text-xs text-gray-500">
                            <span class="font-medium text-gray-700">{"Channel: "}</span>
                            <a href={record.channel_url()} target="_blank" rel="noopener noreferrer"
                               class="hover:underline hover:text-red-600">
                                {&record.channel_title}
                            </a>
                        </div>
                        <div class="text-xs text-gray-400">
                            {format!("Published: {}", format_date(&record.published_at))}
                        </div>
                    </div>
                </td>

                <td class="px-6 py-4 whitespace-nowrap align-top">
                    <div class="flex flex-col space-y-2 text-sm text-gray-500">
                        <span title="Duration">{format!("⏱️ {duration}")}</span>
                        <span title="Views">{format!("👁️ {}", format_count(record.view_count.as_deref()))}</span>
                        <span title="Comments">{format!("💬 {}", format_count(record.comment_count.as_deref()))}</span>
                        <button
                            onclick={on_toggle}
                            class={classes!(
                                "mt-2", "text-xs", "px-2", "py-1", "rounded", "border",
                                if expanded { "bg-red-100 text-red-700 border-red-200" } else { "bg-white text-gray-600 border-gray-300" }
                            )}
                        >
                            { if expanded { "Hide comments ▲" } else { "Show comments ▼" } }
                        </button>
                    </div>
                </td>

                <td class="px-6 py-4 align-top">
                    <div class="flex flex-wrap gap-1.5 max-h-24 overflow-y-auto">
                        if tags.is_empty() {
                            <span class="text-xs text-gray-400 italic">{"No tags"}</span>
                        } else {
                            { for tags.iter().map(|tag| html! {
                                <span class="px-2 py-0.5 rounded text-xs font-medium bg-slate-100 text-slate-600 border border-slate-200">
                                    {format!("#{tag}")}
                                </span>
                            })}
                        }
                        if hidden_tags > 0 {
                            <span class="text-xs text-gray-400 ml-1">{format!("+{hidden_tags} more")}</span>
                        }
                    </div>
                </td>
            </tr>

            if let Some(state) = &props.comments {
                <tr class="bg-gray-50/50">
                    <td colspan="4" class="px-6 py-4">
                        <CommentList state={state.clone()} />
                    </td>
                </tr>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct CommentListProps {
    pub state: CommentState,
}

#[function_component(CommentList)]
pub fn comment_list(props: &CommentListProps) -> Html {
    let body = match &props.state {
        CommentState::Loading => html! {
            <div class="flex justify-center py-4 text-sm text-gray-400">{"Loading comments..."}</div>
        },
        CommentState::Failed(message) => html! {
            <div class="text-sm text-red-500 py-2 px-3 bg-red-50 rounded border border-red-100">
                {message}
            </div>
        },
        CommentState::Loaded(comments) if comments.is_empty() => html! {
            <div class="text-sm text-gray-500 italic py-2">{"No comments to show."}</div>
        },
        CommentState::Loaded(comments) => html! {
            <div class="space-y-4">
                { for comments.iter().map(comment_item) }
            </div>
        },
    };

    html! {
        <div class="bg-white rounded-lg border border-gray-200 p-4 shadow-inner">
            <h4 class="text-sm font-bold text-gray-800 mb-3">{"Top comments"}</h4>
            {body}
        </div>
    }
}

fn comment_item(comment: &CommentRecord) -> Html {
    // Broken avatar URLs are common; swap in a placeholder.
    let on_avatar_error = Callback::from(|e: Event| {
        e.target_unchecked_into::<HtmlImageElement>()
            .set_src(AVATAR_FALLBACK);
    });

    html! {
        <div key={comment.id.clone()} class="flex gap-3 pb-3 border-b border-gray-100 last:border-0 last:pb-0">
            <div class="flex-shrink-0">
                if let Some(src) = &comment.author_profile_image_url {
                    <img src={src.clone()} alt={comment.author_display_name.clone()}
                         class="w-8 h-8 rounded-full" onerror={on_avatar_error} />
                } else {
                    <div class="w-8 h-8 rounded-full bg-gray-200"></div>
                }
            </div>
            <div class="flex-1">
                <div class="flex items-center justify-between mb-1">
                    <span class="text-xs font-semibold text-gray-900">{&comment.author_display_name}</span>
                    <span class="text-xs text-gray-400">{format_date(&comment.published_at)}</span>
                </div>
                <p class="text-sm text-gray-700 whitespace-pre-wrap">{&comment.text_display}</p>
                <div class="mt-1 text-xs text-gray-400">
                    {format!("👍 {}", format_number(comment.like_count))}
                </div>
            </div>
        </div>
    }
}
