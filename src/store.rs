//! Generic list/create/edit/delete state for one registry.
//!
//! Every registry screen drives an [`EntityStore`] parameterised by its
//! [`Resource`]. The store owns the list, pagination, the loading/saving
//! flags, the list-or-form mode and the row being edited; UI code subscribes
//! and re-renders on each change.

use crate::error::{ApiError, Result};
use crate::http::ApiClient;
use crate::notify::{Confirm, Notifier};
use crate::observable::{Observable, Subscription};
use crate::resource::{ListPage, Mutation, Resource};
use std::rc::Rc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// Page size assumed when a list response omits `limit`.
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    List,
    /// Form open; creating unless `editing` is set.
    Create,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<Row> {
    pub items: Vec<Row>,
    pub page: u32,
    pub total: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub mode: Mode,
    pub editing: Option<Row>,
}

impl<Row> Default for ListState<Row> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total: 0,
            limit: DEFAULT_PAGE_LIMIT,
            total_pages: 0,
            loading: false,
            saving: false,
            error: None,
            mode: Mode::List,
            editing: None,
        }
    }
}

impl<Row> ListState<Row> {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

/// Collaborators shared by every store of the app.
#[derive(Clone)]
pub struct StoreContext {
    pub client: ApiClient,
    pub notifier: Rc<dyn Notifier>,
    pub confirm: Rc<dyn Confirm>,
    pub default_page_limit: u64,
}

impl StoreContext {
    pub fn new(client: ApiClient, notifier: Rc<dyn Notifier>, confirm: Rc<dyn Confirm>) -> Self {
        Self {
            client,
            notifier,
            confirm,
            default_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_default_page_limit(mut self, limit: u64) -> Self {
        self.default_page_limit = limit.max(1);
        self
    }
}

pub struct EntityStore<R: Resource> {
    resource: R,
    context: StoreContext,
    state: Observable<ListState<R::Row>>,
    cancel: CancellationToken,
}

impl<R: Resource> EntityStore<R> {
    pub fn new(resource: R, context: StoreContext) -> Self {
        let state = ListState {
            limit: context.default_page_limit,
            ..ListState::default()
        };
        Self {
            resource,
            context,
            state: Observable::new(state),
            cancel: CancellationToken::new(),
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn notifier(&self) -> &Rc<dyn Notifier> {
        &self.context.notifier
    }

    pub fn state(&self) -> ListState<R::Row> {
        self.state.get()
    }

    pub fn mode(&self) -> Mode {
        self.state.with(|s| s.mode)
    }

    pub fn subscribe(&self, listener: impl Fn(&ListState<R::Row>) + 'static) -> Subscription {
        self.state.subscribe(listener)
    }

    /// Open an empty form.
    pub fn begin_create(&self) {
        self.state.update(|s| {
            s.mode = Mode::Create;
            s.editing = None;
            s.error = None;
        });
    }

    /// Open the form seeded from `row`.
    pub fn begin_edit(&self, row: R::Row) {
        self.state.update(|s| {
            s.mode = Mode::Create;
            s.editing = Some(row);
            s.error = None;
        });
    }

    /// Back to the list without saving.
    pub fn cancel_edit(&self) {
        self.state.update(|s| {
            s.mode = Mode::List;
            s.editing = None;
        });
    }

    /// Like [`begin_edit`](Self::begin_edit), but first fetches the full
    /// record when the resource has a detail route.
    #[instrument(skip_all, fields(resource = R::LABEL))]
    pub async fn open_editor(&self, row: R::Row) -> Result<()> {
        self.ensure_active()?;
        let id = self.resource.row_id(&row);
        let Some(path) = self.resource.detail_path(&id) else {
            self.begin_edit(row);
            return Ok(());
        };

        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        let result = ApiClient::with_cancellation(&self.cancel, self.context.client.get(&path)).await;
        match result {
            Ok(detail) => {
                let row = self.resource.row_with_detail(row, &detail);
                self.state.update(|s| {
                    s.loading = false;
                    s.mode = Mode::Create;
                    s.editing = Some(row);
                });
                Ok(())
            }
            Err(ApiError::Cancelled) => Err(ApiError::Cancelled),
            Err(err) => {
                self.state.update(|s| s.loading = false);
                self.report_failure(&err);
                Err(err)
            }
        }
    }

    /// Form draft for the current mode: seeded from the edited row, or empty.
    pub fn draft(&self) -> R::Form {
        self.state.with(|s| match &s.editing {
            Some(row) => self.resource.form_from_row(row),
            None => R::Form::default(),
        })
    }

    /// Fetch `page` (or the current page). No clamping against
    /// `total_pages`; the server decides what an out-of-range page holds.
    #[instrument(skip(self), fields(resource = R::LABEL))]
    pub async fn load(&self, page: Option<u32>) -> Result<()> {
        self.ensure_active()?;
        let page = page.unwrap_or_else(|| self.state.with(|s| s.page));
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
            s.page = page;
        });

        let path = self.resource.list_path(page);
        let result = ApiClient::with_cancellation(&self.cancel, self.context.client.get(&path)).await;
        match result {
            Ok(body) => {
                let listing = ListPage::from_body(body);
                let limit = match listing.limit {
                    Some(limit) if limit > 0 => limit,
                    _ => {
                        if listing.total.is_some() {
                            warn!(
                                "{} list reported a total but no limit, assuming {}",
                                R::LABEL,
                                self.context.default_page_limit
                            );
                        }
                        self.context.default_page_limit
                    }
                };
                let total = listing.total.unwrap_or(0);
                let items: Vec<R::Row> = listing
                    .records
                    .iter()
                    .map(|record| self.resource.row_from_record(record))
                    .collect();

                info!(
                    "Loaded {} {} rows (page {}, total {})",
                    items.len(),
                    R::LABEL,
                    listing.page.unwrap_or(page),
                    total
                );
                self.state.update(|s| {
                    s.items = items;
                    s.total = total;
                    s.limit = limit;
                    s.total_pages = total.div_ceil(limit);
                    if let Some(reported) = listing.page {
                        s.page = reported;
                    }
                    s.loading = false;
                });
                Ok(())
            }
            Err(ApiError::Cancelled) => {
                debug!("{} load cancelled", R::LABEL);
                Err(ApiError::Cancelled)
            }
            Err(err) => {
                self.state.update(|s| {
                    s.items.clear();
                    s.loading = false;
                });
                self.report_failure(&err);
                Err(err)
            }
        }
    }

    #[instrument(skip_all, fields(resource = R::LABEL))]
    pub async fn create(&self, form: &R::Form) -> Result<()> {
        let request = self.resource.create_request(form);
        self.mutate(request, format!("{} created successfully", R::LABEL))
            .await
    }

    #[instrument(skip(self, form), fields(resource = R::LABEL))]
    pub async fn update(&self, id: &str, form: &R::Form) -> Result<()> {
        let request = self.resource.update_request(id, form);
        self.mutate(request, format!("{} updated successfully", R::LABEL))
            .await
    }

    /// Update when a row is being edited, create otherwise.
    pub async fn save(&self, form: &R::Form) -> Result<()> {
        let editing_id = self
            .state
            .with(|s| s.editing.as_ref().map(|row| self.resource.row_id(row)));
        match editing_id {
            Some(id) if !id.is_empty() => self.update(&id, form).await,
            _ => self.create(form).await,
        }
    }

    /// Delete `row` after confirmation. `Ok(false)` when the user declined.
    /// Failures only toast; the list is left as it was.
    #[instrument(skip_all, fields(resource = R::LABEL))]
    pub async fn remove(&self, row: &R::Row) -> Result<bool> {
        self.ensure_active()?;
        let prompt = self.resource.delete_prompt(row);
        if !self.context.confirm.confirm(&prompt).await {
            debug!("{} delete declined", R::LABEL);
            return Ok(false);
        }
        self.ensure_active()?;

        let mutation = self.resource.delete_request(row);
        self.state.update(|s| {
            s.saving = true;
            s.error = None;
        });
        match self.execute(mutation).await {
            Ok(()) => {
                self.state.update(|s| s.saving = false);
                self.context
                    .notifier
                    .success(&format!("{} deleted successfully", R::LABEL));
                self.reload().await;
                Ok(true)
            }
            Err(ApiError::Cancelled) => Err(ApiError::Cancelled),
            Err(err) => {
                error!("{} delete failed: {}", R::LABEL, err);
                self.state.update(|s| s.saving = false);
                self.context.notifier.error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Cancel in-flight requests; every later call returns
    /// [`ApiError::Cancelled`] without touching state.
    pub fn teardown(&self) {
        debug!("Tearing down {} store", R::LABEL);
        self.cancel.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }

    async fn mutate(&self, request: Result<Mutation>, success_message: String) -> Result<()> {
        self.ensure_active()?;
        self.state.update(|s| {
            s.saving = true;
            s.error = None;
        });

        let result = match request {
            Ok(mutation) => self.execute(mutation).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                self.context.notifier.success(&success_message);
                self.state.update(|s| {
                    s.saving = false;
                    s.mode = Mode::List;
                    s.editing = None;
                });
                self.reload().await;
                Ok(())
            }
            Err(ApiError::Cancelled) => Err(ApiError::Cancelled),
            Err(err) => {
                self.state.update(|s| s.saving = false);
                self.report_failure(&err);
                Err(err)
            }
        }
    }

    async fn execute(&self, mutation: Mutation) -> Result<()> {
        let Mutation { method, path, body } = mutation;
        ApiClient::with_cancellation(&self.cancel, self.context.client.send(method, &path, body))
            .await
            .map(|_| ())
    }

    /// Follow-up refresh after a successful mutation. Its own failure is
    /// already reported by `load`.
    async fn reload(&self) {
        if let Err(err) = self.load(None).await {
            debug!("{} refresh after mutation failed: {}", R::LABEL, err);
        }
    }

    fn report_failure(&self, err: &ApiError) {
        let message = err.to_string();
        error!("{} request failed: {}", R::LABEL, message);
        self.state.update(|s| s.error = Some(message.clone()));
        self.context.notifier.error(&message);
    }

    fn ensure_active(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            Err(ApiError::Cancelled)
        } else {
            Ok(())
        }
    }
}
