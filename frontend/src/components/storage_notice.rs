use shared::StorageNotice;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StorageNoticeBannerProps {
    pub notice: Option<StorageNotice>,
    pub on_dismiss: Callback<()>,
}

/// Warning strip for load/save problems. Renders nothing when all is well.
#[function_component(StorageNoticeBanner)]
pub fn storage_notice_banner(props: &StorageNoticeBannerProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };
    let on_dismiss = props.on_dismiss.clone();

    html! {
        <div class="form-message error storage-notice">
            <span>{notice.to_string()}</span>
            <button class="btn btn-link" onclick={Callback::from(move |_| on_dismiss.emit(()))}>
                {"Dismiss"}
            </button>
        </div>
    }
}
