use polaris::notify::{Notifier, ToastKind};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Success => "fas fa-check-circle",
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

impl From<ToastKind> for ToastType {
    fn from(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Info => ToastType::Info,
            ToastKind::Success => ToastType::Success,
            ToastKind::Warning => ToastType::Warning,
            ToastKind::Error => ToastType::Error,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastType)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.add_toast.emit((message, ToastType::Success));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastType::Error));
    }
}

/// Bridges core notifications into the toast stack.
pub struct ToastNotifier {
    add_toast: Callback<(String, ToastType)>,
}

impl ToastNotifier {
    pub fn new(context: &ToastContext) -> Self {
        Self {
            add_toast: context.add_toast.clone(),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, message: String) {
        self.add_toast.emit((message, kind.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
    /// Auto-dismiss delay
    #[prop_or(5000)]
    pub duration_ms: u32,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);
    let dispatcher = list.dispatcher();
    let duration_ms = props.duration_ms;

    // Memoized so the context stays stable across toast updates
    let add_toast = use_memo(duration_ms, {
        let dispatcher = dispatcher.clone();
        move |duration_ms| {
            let duration_ms = *duration_ms;
            Callback::from(move |(message, toast_type): (String, ToastType)| {
                let id = {
                    let mut next = next_id.borrow_mut();
                    *next += 1;
                    *next
                };
                dispatcher.dispatch(ToastAction::Add(Toast {
                    id,
                    message,
                    toast_type,
                }));

                let dispatcher = dispatcher.clone();
                gloo_timers::callback::Timeout::new(duration_ms, move || {
                    dispatcher.dispatch(ToastAction::Remove(id));
                })
                .forget();
            })
        }
    });

    let remove_toast = use_memo((), move |_| {
        Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Remove(id)))
    });

    let context = ToastContext {
        add_toast: (*add_toast).clone(),
        remove_toast: (*remove_toast).clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = (*remove_toast).clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
