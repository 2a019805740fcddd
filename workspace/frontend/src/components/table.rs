use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use polaris::table::TableView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PolarisTableProps {
    pub view: TableView<Html>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or(AttrValue::Static("No records found"))]
    pub empty_message: AttrValue,
    /// Last failure; replaces an empty table until the next load.
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Renders a projected [`TableView`]; rows are replaced by a spinner while
/// loading and by `empty_message` when there are none.
#[function_component(PolarisTable)]
pub fn polaris_table(props: &PolarisTableProps) -> Html {
    if let (Some(message), false, true) = (&props.error, props.loading, props.view.is_empty()) {
        return html! { <ErrorDisplay message={message.clone()} on_retry={props.on_retry.clone()} /> };
    }

    let columns = props.view.headers.len().max(1);

    let body = if props.loading {
        html! {
            <tr>
                <td colspan={columns.to_string()}><LoadingSpinner /></td>
            </tr>
        }
    } else if props.view.is_empty() {
        html! {
            <tr>
                <td colspan={columns.to_string()} class="text-center py-8 text-base-content/60">
                    {&props.empty_message}
                </td>
            </tr>
        }
    } else {
        html! {
            {for props.view.rows.iter().enumerate().map(|(index, row)| html! {
                <tr key={index} class="hover">
                    {for row.iter().map(|cell| html! {
                        <td key={cell.key} class={cell.align.class()}>{cell.content.clone()}</td>
                    })}
                </tr>
            })}
        }
    };

    html! {
        <div class="overflow-x-auto bg-base-100 rounded-box shadow">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        {for props.view.headers.iter().map(|header| html! {
                            <th key={header.key} class={header.align.class()}>{header.label}</th>
                        })}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
