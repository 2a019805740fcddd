use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: u32,
    pub total_pages: u64,
    pub total_items: u64,
    pub on_page_change: Callback<u32>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Page numbers with 0 standing for an ellipsis.
fn visible_pages(current: u64, total_pages: u64) -> Vec<u64> {
    let max_visible = 5;
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }

    let mut pages = vec![1];
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);
    if start > 2 {
        pages.push(0);
    }
    pages.extend(start..=end);
    if end < total_pages - 1 {
        pages.push(0);
    }
    pages.push(total_pages);
    pages
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = props.total_pages;
    if total_pages <= 1 {
        return html! {};
    }

    let current = props.current_page;
    let go_to = |page: u32| {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_page_change.emit(page);
        })
    };

    html! {
        <div class="flex justify-center items-center gap-2 my-4">
            <button
                class="btn btn-sm"
                disabled={props.disabled || current <= 1}
                onclick={go_to(current.saturating_sub(1).max(1))}
            >
                <i class="fas fa-chevron-left"></i>
            </button>

            {for visible_pages(u64::from(current), total_pages).into_iter().map(|page| {
                if page == 0 {
                    html! { <span class="px-2">{"..."}</span> }
                } else {
                    let page = u32::try_from(page).unwrap_or(u32::MAX);
                    html! {
                        <button
                            class={classes!("btn", "btn-sm", (page == current).then_some("btn-primary"))}
                            disabled={props.disabled}
                            onclick={go_to(page)}
                        >
                            {page}
                        </button>
                    }
                }
            })}

            <button
                class="btn btn-sm"
                disabled={props.disabled || u64::from(current) >= total_pages}
                onclick={go_to(current.saturating_add(1))}
            >
                <i class="fas fa-chevron-right"></i>
            </button>

            <div class="ml-4 text-sm text-base-content/70">
                {format!("Page {} of {} ({} items)", current, total_pages, props.total_items)}
            </div>
        </div>
    }
}
