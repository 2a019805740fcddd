#[cfg(test)]
mod integration_tests {
    use crate::auth::{AuthError, AuthService};
    use crate::error::ApiError;
    use crate::form::{SubmitOutcome, submit_form};
    use crate::http::{
        ApiClient, CancellationToken, HttpRequest, HttpResponse, Method, Transport, TransportError,
    };
    use crate::notify::ToastKind;
    use crate::resources::{Customers, Projects, SalesInvoices, SalesOrders};
    use crate::session::SessionStore;
    use crate::storage::{KeyValueStore, MemoryStore, keys};
    use crate::store::{EntityStore, Mode, StoreContext};
    use crate::test_utils::test_utils::{Harness, RecordingNavigator, init_test_tracing};
    use async_trait::async_trait;
    use common::{CustomerForm, LoginForm};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    const CUSTOMERS: &str = "/customer/get-all-customer";
    const UPSERT: &str = "/customer/add-update-customer";

    fn acme() -> serde_json::Value {
        json!({
            "id": "C1",
            "customername": "Acme",
            "customerorg": "Ops",
            "address": "Mumbai",
            "tinnumber": "123"
        })
    }

    fn acme_form() -> CustomerForm {
        CustomerForm {
            id: None,
            name: "Acme".into(),
            org: "Ops".into(),
            location: "Mumbai".into(),
            tin: "123".into(),
        }
    }

    fn customer_list(harness: &Harness) {
        harness.transport.respond(
            Method::Get,
            CUSTOMERS,
            200,
            json!({
                "data": [
                    acme(),
                    {"_id": "C2", "customername": "Globex", "customerorg": "HQ",
                     "address": "Pune", "tinnumber": "456"}
                ],
                "total": 2,
                "limit": 10,
                "page": 1
            }),
        );
    }

    #[tokio::test]
    async fn test_load_populates_items() {
        let _guard = init_test_tracing();
        let harness = Harness::new();
        customer_list(&harness);
        let store = harness.store(Customers);

        store.load(None).await.unwrap();

        let state = store.state();
        assert_eq!(state.items.len(), 2);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.total, 2);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.items[1].id, "C2");
    }

    #[tokio::test]
    async fn test_customer_record_maps_to_row() {
        let harness = Harness::new();
        harness
            .transport
            .respond(Method::Get, CUSTOMERS, 200, json!([acme()]));
        let store = harness.store(Customers);

        store.load(None).await.unwrap();

        let row = &store.state().items[0];
        assert_eq!(row.id, "C1");
        assert_eq!(row.name, "Acme");
        assert_eq!(row.org, "Ops");
        assert_eq!(row.location, "Mumbai");
        assert_eq!(row.tin, "123");
    }

    #[tokio::test]
    async fn test_load_failure_empties_items_and_toasts() {
        let harness = Harness::new();
        customer_list(&harness);
        let store = harness.store(Customers);
        store.load(None).await.unwrap();

        harness.transport.respond(
            Method::Get,
            CUSTOMERS,
            500,
            json!({"message": "Database unavailable"}),
        );
        let result = store.load(None).await;

        assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
        let state = store.state();
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Database unavailable"));
        assert_eq!(
            harness.notifier.of_kind(ToastKind::Error),
            vec!["Database unavailable".to_string()]
        );
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let harness = Harness::new();
        customer_list(&harness);
        let store = harness.store(Customers);

        store.load(None).await.unwrap();
        let first = store.state();
        store.load(None).await.unwrap();

        assert_eq!(store.state(), first);
        assert_eq!(harness.transport.count(Method::Get, CUSTOMERS), 2);
    }

    #[tokio::test]
    async fn test_network_failure_is_reported() {
        let harness = Harness::new();
        harness
            .transport
            .fail(Method::Get, CUSTOMERS, "connection refused");
        let store = harness.store(Customers);

        let err = store.load(None).await.unwrap_err();

        assert_eq!(err, ApiError::Network("connection refused".to_string()));
        assert_eq!(store.state().error.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_unparseable_error_body_gets_status_text() {
        let harness = Harness::new();
        harness
            .transport
            .respond_text(Method::Get, CUSTOMERS, 502, "<html>Bad Gateway</html>");
        let store = harness.store(Customers);

        let err = store.load(None).await.unwrap_err();

        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[tokio::test]
    async fn test_pagination_comes_from_server() {
        let harness = Harness::new();
        harness.transport.respond(
            Method::Get,
            "/project/get-all-project?page=2",
            200,
            json!({"data": [{"id": "p11"}], "total": 25, "limit": 10, "page": 2}),
        );
        let store = harness.store(Projects);

        store.load(Some(2)).await.unwrap();

        let state = store.state();
        assert_eq!(state.page, 2);
        assert_eq!(state.total, 25);
        assert_eq!(state.total_pages, 3);
    }

    #[tokio::test]
    async fn test_page_beyond_total_pages_is_still_requested() {
        let harness = Harness::new();
        harness.transport.respond(
            Method::Get,
            "/project/get-all-project?page=1",
            200,
            json!({"data": [{"id": "p1"}], "total": 5, "limit": 10, "page": 1}),
        );
        harness.transport.respond(
            Method::Get,
            "/project/get-all-project?page=9",
            200,
            json!({"data": [], "total": 5, "limit": 10, "page": 9}),
        );
        let store = harness.store(Projects);
        store.load(None).await.unwrap();
        assert_eq!(store.state().total_pages, 1);

        store.load(Some(9)).await.unwrap();

        assert_eq!(
            harness
                .transport
                .count(Method::Get, "/project/get-all-project?page=9"),
            1
        );
        let state = store.state();
        assert_eq!(state.page, 9);
        assert!(state.items.is_empty());
    }

    #[tokio::test]
    async fn test_missing_limit_uses_default_page_size() {
        let harness = Harness::new();
        harness.transport.respond(
            Method::Get,
            "/project/get-all-project?page=1",
            200,
            json!({"data": [{"id": "p1"}], "total": 21}),
        );
        let store = harness.store(Projects);

        store.load(None).await.unwrap();

        let state = store.state();
        assert_eq!(state.limit, 10);
        assert_eq!(state.total_pages, 3);

        let custom = EntityStore::new(Projects, harness.context().with_default_page_limit(25));
        custom.load(None).await.unwrap();
        assert_eq!(custom.state().total_pages, 1);
    }

    #[tokio::test]
    async fn test_missing_total_means_no_pages() {
        let harness = Harness::new();
        harness
            .transport
            .respond(Method::Get, CUSTOMERS, 200, json!([acme()]));
        let store = harness.store(Customers);

        store.load(None).await.unwrap();

        let state = store.state();
        assert_eq!(state.total, 0);
        assert_eq!(state.total_pages, 0);
        assert_eq!(state.items.len(), 1);
    }

    #[tokio::test]
    async fn test_create_returns_to_list_and_reloads_once() {
        let harness = Harness::new();
        customer_list(&harness);
        harness
            .transport
            .respond(Method::Post, UPSERT, 200, json!({"message": "Customer saved"}));
        let store = harness.store(Customers);
        store.begin_create();
        assert_eq!(store.mode(), Mode::Create);

        store.create(&acme_form()).await.unwrap();

        let state = store.state();
        assert_eq!(state.mode, Mode::List);
        assert!(!state.saving);
        assert_eq!(state.editing, None);
        assert_eq!(harness.transport.count(Method::Get, CUSTOMERS), 1);
        assert_eq!(
            harness.notifier.of_kind(ToastKind::Success),
            vec!["Customer created successfully".to_string()]
        );

        let requests = harness.transport.requests();
        let post = &requests[0];
        assert_eq!(post.method, Method::Post);
        assert_eq!(post.header_value("content-type"), Some("application/json"));
        assert_eq!(
            post.body.as_ref().unwrap(),
            &json!({
                "id": "",
                "customername": "Acme",
                "customerorg": "Ops",
                "address": "Mumbai",
                "tinnumber": "123"
            })
        );
    }

    #[tokio::test]
    async fn test_save_while_editing_updates_existing_customer() {
        let harness = Harness::new();
        customer_list(&harness);
        harness
            .transport
            .respond(Method::Post, UPSERT, 200, json!({"message": "ok"}));
        let store = harness.store(Customers);
        store.load(None).await.unwrap();

        let row = store.state().items[0].clone();
        store.begin_edit(row);
        let mut form = store.draft();
        assert_eq!(form.name, "Acme");
        form.location = "Delhi".into();

        store.save(&form).await.unwrap();

        assert_eq!(store.mode(), Mode::List);
        assert_eq!(harness.transport.count(Method::Get, CUSTOMERS), 2);
        let post = harness
            .transport
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Post)
            .unwrap();
        let body = post.body.unwrap();
        assert_eq!(body["id"], "C1");
        assert_eq!(body["address"], "Delhi");
        assert_eq!(
            harness.notifier.of_kind(ToastKind::Success),
            vec!["Customer updated successfully".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failed_save_keeps_form_open() {
        let harness = Harness::new();
        harness.transport.respond(
            Method::Post,
            UPSERT,
            409,
            json!({"error": "TIN already registered"}),
        );
        let store = harness.store(Customers);
        store.begin_create();

        let result = store.save(&acme_form()).await;

        assert!(result.is_err());
        let state = store.state();
        assert_eq!(state.mode, Mode::Create);
        assert!(!state.saving);
        assert_eq!(state.error.as_deref(), Some("TIN already registered"));
        assert_eq!(harness.transport.count(Method::Get, CUSTOMERS), 0);
        assert_eq!(
            harness.notifier.of_kind(ToastKind::Error),
            vec!["TIN already registered".to_string()]
        );
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_without_network() {
        let harness = Harness::new();
        let store = harness.store(Customers);
        store.begin_create();
        let form = CustomerForm {
            name: String::new(),
            ..acme_form()
        };

        let outcome = submit_form(&store, &form).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Customer name is required".to_string())
        );
        assert!(harness.transport.requests().is_empty());
        assert_eq!(
            harness.notifier.of_kind(ToastKind::Error),
            vec!["Customer name is required".to_string()]
        );
        let state = store.state();
        assert_eq!(state.error, None);
        assert_eq!(state.mode, Mode::Create);
    }

    #[tokio::test]
    async fn test_valid_form_submits_through_store() {
        let harness = Harness::new();
        customer_list(&harness);
        harness
            .transport
            .respond(Method::Post, UPSERT, 201, serde_json::Value::Null);
        let store = harness.store(Customers);

        let outcome = submit_form(&store, &acme_form()).await;

        assert!(outcome.is_saved());
        assert_eq!(store.state().items.len(), 2);
    }

    #[tokio::test]
    async fn test_remove_after_confirmation() {
        let harness = Harness::new();
        customer_list(&harness);
        harness
            .transport
            .respond(Method::Delete, "/customer/delete-customer", 200, json!({}));
        let store = harness.store(Customers);
        store.load(None).await.unwrap();
        let row = store.state().items[0].clone();

        assert!(store.remove(&row).await.unwrap());

        let prompts = harness.confirm.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].message.contains("Acme"));
        let delete = harness
            .transport
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Delete)
            .unwrap();
        assert_eq!(delete.body, Some(json!({"id": "C1"})));
        assert_eq!(harness.transport.count(Method::Get, CUSTOMERS), 2);
        assert_eq!(
            harness.notifier.of_kind(ToastKind::Success),
            vec!["Customer deleted successfully".to_string()]
        );
    }

    #[tokio::test]
    async fn test_declined_remove_sends_nothing() {
        let harness = Harness::new();
        customer_list(&harness);
        harness.confirm.answer.set(false);
        let store = harness.store(Customers);
        store.load(None).await.unwrap();
        let row = store.state().items[0].clone();

        assert!(!store.remove(&row).await.unwrap());

        assert_eq!(
            harness.transport.count(Method::Delete, "/customer/delete-customer"),
            0
        );
        assert!(harness.notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_failed_remove_only_toasts() {
        let harness = Harness::new();
        customer_list(&harness);
        harness.transport.respond(
            Method::Delete,
            "/customer/delete-customer",
            400,
            json!({"message": "Customer has open projects"}),
        );
        let store = harness.store(Customers);
        store.load(None).await.unwrap();
        let before = store.state();

        let err = store.remove(&before.items[0]).await.unwrap_err();

        assert_eq!(err.to_string(), "Customer has open projects");
        let after = store.state();
        assert_eq!(after.items, before.items);
        assert_eq!(after.error, None);
        assert_eq!(harness.transport.count(Method::Get, CUSTOMERS), 1);
        assert_eq!(
            harness.notifier.of_kind(ToastKind::Error),
            vec!["Customer has open projects".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unauthorized_delete_logs_out_once() {
        let harness = Harness::new();
        customer_list(&harness);
        harness.session.set_user(Some(common::AuthUser::from_email("ops@polaris.test")));
        harness.transport.respond(
            Method::Delete,
            "/customer/delete-customer",
            401,
            json!({"error": "token expired"}),
        );
        let store = harness.store(Customers);
        store.load(None).await.unwrap();
        let row = store.state().items[0].clone();

        let err = store.remove(&row).await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized("token expired".to_string()));
        assert_eq!(harness.navigator.redirects.get(), 1);
        assert_eq!(harness.credential(), None);
        assert!(!harness.storage.contains(keys::AUTH_USER));
        assert!(harness.session.user().is_none());
    }

    #[tokio::test]
    async fn test_bearer_token_is_attached() {
        let harness = Harness::new();
        customer_list(&harness);
        let store = harness.store(Customers);

        store.load(None).await.unwrap();

        let request = harness.transport.last().unwrap();
        assert_eq!(request.url, "http://backend.test/v1/customer/get-all-customer");
        assert_eq!(
            request.header_value("authorization"),
            Some("Bearer test-token")
        );
        assert_eq!(request.header_value("content-type"), None);

        harness.session.clear_credential();
        store.load(None).await.unwrap();
        assert_eq!(harness.transport.last().unwrap().header_value("authorization"), None);
    }

    #[tokio::test]
    async fn test_subscribers_see_loading_then_loaded() {
        let harness = Harness::new();
        customer_list(&harness);
        let store = harness.store(Customers);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = store.subscribe(move |state| {
            sink.borrow_mut().push((state.loading, state.items.len()));
        });

        store.load(None).await.unwrap();

        assert_eq!(*seen.borrow(), vec![(true, 0), (false, 2)]);
        drop(subscription);
        store.load(None).await.unwrap();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_loading_and_saving_never_overlap() {
        let harness = Harness::new();
        customer_list(&harness);
        harness
            .transport
            .respond(Method::Post, UPSERT, 200, json!({"message": "ok"}));
        let store = harness.store(Customers);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _subscription = store.subscribe(move |state| {
            sink.borrow_mut().push((state.loading, state.saving));
        });

        store.create(&acme_form()).await.unwrap();

        let seen = seen.borrow();
        assert!(seen.iter().all(|(loading, saving)| !(*loading && *saving)));
        assert!(seen.contains(&(false, true)));
        assert!(seen.contains(&(true, false)));
        assert_eq!(seen.last(), Some(&(false, false)));
    }

    #[tokio::test]
    async fn test_error_clears_when_next_request_starts() {
        let harness = Harness::new();
        harness
            .transport
            .respond(Method::Get, CUSTOMERS, 503, json!({"message": "Try again"}));
        let store = harness.store(Customers);
        assert!(store.load(None).await.is_err());
        assert_eq!(store.state().error.as_deref(), Some("Try again"));

        customer_list(&harness);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _subscription = store.subscribe(move |state| {
            sink.borrow_mut().push((state.loading, state.error.clone()));
        });
        store.load(None).await.unwrap();

        assert_eq!(seen.borrow()[0], (true, None));
        let state = store.state();
        assert_eq!(state.error, None);
        assert_eq!(state.items.len(), 2);
    }

    #[tokio::test]
    async fn test_open_editor_fetches_sales_order_detail() {
        let harness = Harness::new();
        harness.transport.respond(
            Method::Get,
            "/salesorder/get-all-sales-order",
            200,
            json!({"salesOrders": [{"id": "so1", "project_name": "Tower A", "status": "approved"}]}),
        );
        harness.transport.respond(
            Method::Get,
            "/salesorder/get-sales-order-by-id/so1",
            200,
            json!({"salesOrder": {
                "id": "so1",
                "projectId": "p1",
                "customerId": "c1",
                "items": [{"airconId": "a1", "qty": 3, "uom": "unit", "price": 21000}]
            }}),
        );
        let store = harness.store(SalesOrders);
        store.load(None).await.unwrap();
        let row = store.state().items[0].clone();

        store.open_editor(row).await.unwrap();

        let state = store.state();
        assert_eq!(state.mode, Mode::Create);
        assert!(state.is_editing());
        let draft = store.draft();
        assert_eq!(draft.project_id, "p1");
        assert_eq!(draft.status, "approved");
        assert_eq!(draft.items[0].quantity, "3");
    }

    #[tokio::test]
    async fn test_edited_invoice_is_saved_with_totals() {
        let harness = Harness::new();
        harness.transport.respond(
            Method::Get,
            "/supplier/invoice/get-all",
            200,
            json!({"invoices": [{"_id": "si1", "invoice_no": "INV-7", "grand_total": 1008}]}),
        );
        harness.transport.respond(
            Method::Get,
            "/supplier/invoice-get-by-id/si1",
            200,
            json!({"invoice": {
                "_id": "si1",
                "supplier_id": "s1",
                "project_id": "p1",
                "invoice_no": "INV-7",
                "invoice_date": "2024-05-01T00:00:00Z",
                "due_date": "2024-06-01T00:00:00Z",
                "items": [{"description": "Cassette", "qty": 1, "unit": "set", "unit_price": 900}],
                "vat": 108
            }}),
        );
        harness
            .transport
            .respond(Method::Put, "/supplier/invoice-edit", 200, json!({"message": "ok"}));
        let store = harness.store(SalesInvoices);
        store.load(None).await.unwrap();
        store.open_editor(store.state().items[0].clone()).await.unwrap();

        let mut draft = store.draft();
        draft.items[0].qty = "2".into();
        store.save(&draft).await.unwrap();

        let put = harness
            .transport
            .requests()
            .into_iter()
            .find(|r| r.method == Method::Put)
            .unwrap();
        let body = put.body.unwrap();
        assert_eq!(body["id"], "si1");
        assert_eq!(body["total_sales"], 1800.0);
        assert_eq!(body["vat"], 216.0);
        assert_eq!(body["grand_total"], 2016.0);
        assert_eq!(store.mode(), Mode::List);
        assert_eq!(
            harness.notifier.of_kind(ToastKind::Success),
            vec!["Invoice updated successfully".to_string()]
        );
    }

    #[test]
    fn test_cancel_edit_returns_to_list() {
        let harness = Harness::new();
        let store = harness.store(Customers);
        store.begin_create();
        store.cancel_edit();
        assert_eq!(store.mode(), Mode::List);
        assert_eq!(store.draft(), CustomerForm::default());
    }

    #[tokio::test]
    async fn test_teardown_prevents_new_requests() {
        let harness = Harness::new();
        customer_list(&harness);
        let store = harness.store(Customers);

        store.teardown();

        assert_eq!(store.load(None).await, Err(ApiError::Cancelled));
        assert_eq!(store.create(&acme_form()).await, Err(ApiError::Cancelled));
        assert!(harness.transport.requests().is_empty());
        assert!(!store.state().loading);
        assert!(store.is_torn_down());
    }

    /// Never answers, so only cancellation can finish a request.
    struct PendingTransport;

    #[async_trait(?Send)]
    impl Transport for PendingTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
            futures::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_teardown_cancels_in_flight_load() {
        let harness = Harness::new();
        let client = ApiClient::new(
            "http://backend.test/v1",
            Rc::new(PendingTransport),
            harness.session.clone(),
            harness.navigator.clone(),
        );
        let context = StoreContext::new(client, harness.notifier.clone(), harness.confirm.clone());
        let store = EntityStore::new(Customers, context);

        let (result, _) = futures::join!(store.load(None), async { store.teardown() });

        assert_eq!(result, Err(ApiError::Cancelled));
        assert_eq!(store.state().error, None);
        assert!(harness.notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_sign_in_stores_token_and_user() {
        let storage = Rc::new(MemoryStore::new());
        let harness = Harness::new();
        let session = Rc::new(SessionStore::new(storage.clone()));
        let navigator = Rc::new(RecordingNavigator::default());
        let client = ApiClient::new(
            "http://backend.test/v1",
            harness.transport.clone(),
            session.clone(),
            navigator.clone(),
        );
        harness.transport.respond(
            Method::Post,
            "/auth/sign-in-email",
            200,
            json!({"message": "Signed in", "token": "jwt-abc"}),
        );
        let auth = AuthService::new(client);

        let user = auth
            .sign_in(&LoginForm {
                email: " ops@polaris.test ".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();

        assert_eq!(user.email, "ops@polaris.test");
        assert_eq!(storage.get(keys::AUTH_TOKEN).as_deref(), Some("jwt-abc"));
        assert_eq!(session.user().unwrap().email, "ops@polaris.test");
        let request = harness.transport.last().unwrap();
        assert_eq!(request.header_value("authorization"), None);
        assert_eq!(request.body.unwrap()["email"], "ops@polaris.test");

        auth.sign_out();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(navigator.redirects.get(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_sign_in_leaves_session_alone() {
        let harness = Harness::new();
        harness.session.clear();
        harness.transport.respond(
            Method::Post,
            "/auth/sign-in-email",
            200,
            json!({"message": "Signed in", "token": "jwt-abc"}),
        );
        let auth = AuthService::new(harness.client.clone());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = auth
            .sign_in_until(
                &LoginForm {
                    email: "ops@polaris.test".into(),
                    password: "secret".into(),
                },
                &cancel,
            )
            .await;

        assert_eq!(result, Err(AuthError::Api(ApiError::Cancelled)));
        assert!(harness.transport.requests().is_empty());
        assert!(!harness.session.is_authenticated());
        assert!(harness.session.user().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_validation_and_rejection() {
        let harness = Harness::new();
        let auth = AuthService::new(harness.client.clone());

        let invalid = auth
            .sign_in(&LoginForm {
                email: "not-an-email".into(),
                password: "secret".into(),
            })
            .await;
        assert_eq!(
            invalid,
            Err(AuthError::Invalid("Enter a valid email address".to_string()))
        );
        assert!(harness.transport.requests().is_empty());

        harness.transport.respond(
            Method::Post,
            "/auth/sign-in-email",
            400,
            json!({"error": "Invalid email or password"}),
        );
        let rejected = auth
            .sign_in(&LoginForm {
                email: "ops@polaris.test".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(rejected.to_string(), "Invalid email or password");
    }
}
