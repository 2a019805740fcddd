#[cfg(test)]
pub mod test_utils {
    use crate::http::{ApiClient, HttpRequest, HttpResponse, Method, Transport, TransportError};
    use crate::navigation::Navigator;
    use crate::notify::{Confirm, ConfirmPrompt, Notifier, ToastKind};
    use crate::resource::Resource;
    use crate::session::SessionStore;
    use crate::storage::{KeyValueStore, MemoryStore, keys};
    use crate::store::{EntityStore, StoreContext};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const BASE_URL: &str = "http://backend.test/v1";

    enum Reply {
        Respond(HttpResponse),
        Fail(String),
    }

    /// Scripted backend keyed by method and path (query included). Unscripted
    /// routes answer 404.
    #[derive(Default)]
    pub struct MockTransport {
        routes: RefCell<HashMap<(Method, String), Reply>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
            let body = if body.is_null() {
                String::new()
            } else {
                body.to_string()
            };
            self.routes.borrow_mut().insert(
                (method, path.to_string()),
                Reply::Respond(HttpResponse::new(status, body)),
            );
        }

        pub fn respond_text(&self, method: Method, path: &str, status: u16, body: &str) {
            self.routes.borrow_mut().insert(
                (method, path.to_string()),
                Reply::Respond(HttpResponse::new(status, body)),
            );
        }

        pub fn fail(&self, method: Method, path: &str, message: &str) {
            self.routes
                .borrow_mut()
                .insert((method, path.to_string()), Reply::Fail(message.to_string()));
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn count(&self, method: Method, path: &str) -> usize {
            let url = format!("{}{}", BASE_URL, path);
            self.requests
                .borrow()
                .iter()
                .filter(|r| r.method == method && r.url == url)
                .count()
        }

        pub fn last(&self) -> Option<HttpRequest> {
            self.requests.borrow().last().cloned()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            let path = request
                .url
                .strip_prefix(BASE_URL)
                .unwrap_or(&request.url)
                .to_string();
            let key = (request.method, path);
            self.requests.borrow_mut().push(request);

            match self.routes.borrow().get(&key) {
                Some(Reply::Respond(response)) => Ok(response.clone()),
                Some(Reply::Fail(message)) => Err(TransportError(message.clone())),
                None => Ok(HttpResponse::new(404, r#"{"error":"route not scripted"}"#)),
            }
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        toasts: RefCell<Vec<(ToastKind, String)>>,
    }

    impl RecordingNotifier {
        pub fn toasts(&self) -> Vec<(ToastKind, String)> {
            self.toasts.borrow().clone()
        }

        pub fn of_kind(&self, kind: ToastKind) -> Vec<String> {
            self.toasts
                .borrow()
                .iter()
                .filter(|(k, _)| *k == kind)
                .map(|(_, message)| message.clone())
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, kind: ToastKind, message: String) {
            self.toasts.borrow_mut().push((kind, message));
        }
    }

    #[derive(Default)]
    pub struct RecordingNavigator {
        pub redirects: Cell<usize>,
    }

    impl Navigator for RecordingNavigator {
        fn redirect_to_login(&self) {
            self.redirects.set(self.redirects.get() + 1);
        }
    }

    /// Answers every prompt with a fixed choice.
    pub struct ScriptedConfirm {
        pub answer: Cell<bool>,
        pub prompts: RefCell<Vec<ConfirmPrompt>>,
    }

    impl ScriptedConfirm {
        pub fn new(answer: bool) -> Self {
            Self {
                answer: Cell::new(answer),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl Confirm for ScriptedConfirm {
        async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
            self.prompts.borrow_mut().push(prompt.clone());
            self.answer.get()
        }
    }

    /// Everything a store needs, wired to in-memory doubles. Starts signed in
    /// with credential `test-token`.
    pub struct Harness {
        pub transport: Rc<MockTransport>,
        pub notifier: Rc<RecordingNotifier>,
        pub navigator: Rc<RecordingNavigator>,
        pub confirm: Rc<ScriptedConfirm>,
        pub storage: Rc<MemoryStore>,
        pub session: Rc<SessionStore>,
        pub client: ApiClient,
    }

    impl Harness {
        pub fn new() -> Self {
            let storage = Rc::new(MemoryStore::with_entries([(keys::AUTH_TOKEN, "test-token")]));
            let session = Rc::new(SessionStore::new(storage.clone()));
            let transport = Rc::new(MockTransport::default());
            let navigator = Rc::new(RecordingNavigator::default());
            let client = ApiClient::new(
                BASE_URL,
                transport.clone(),
                session.clone(),
                navigator.clone(),
            );

            Self {
                transport,
                notifier: Rc::new(RecordingNotifier::default()),
                navigator,
                confirm: Rc::new(ScriptedConfirm::new(true)),
                storage,
                session,
                client,
            }
        }

        pub fn context(&self) -> StoreContext {
            StoreContext::new(
                self.client.clone(),
                self.notifier.clone(),
                self.confirm.clone(),
            )
        }

        pub fn store<R: Resource>(&self, resource: R) -> EntityStore<R> {
            EntityStore::new(resource, self.context())
        }

        pub fn credential(&self) -> Option<String> {
            self.storage.get(keys::AUTH_TOKEN)
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// Honors `RUST_LOG`, defaulting to WARN. Returns a guard; keep it alive
    /// for the duration of the test.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|value| value.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_default(subscriber)
    }
}
