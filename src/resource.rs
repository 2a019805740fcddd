//! Per-entity bindings consumed by the generic [`EntityStore`].
//!
//! A [`Resource`] knows the entity's list route, how to turn backend records
//! into rows and how to turn a form into create/update/delete requests. The
//! store does everything else.
//!
//! [`EntityStore`]: crate::store::EntityStore

use crate::error::{ApiError, Result};
use crate::http::Method;
use crate::notify::ConfirmPrompt;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use validator::Validate;

pub trait Resource: 'static {
    type Row: Clone + PartialEq + Debug + 'static;
    type Form: Validate + Clone + Default + PartialEq + Debug + 'static;

    /// Singular display label, e.g. "Sales order".
    const LABEL: &'static str;
    /// Form fields in display order; the first failing one is reported.
    const FORM_FIELDS: &'static [&'static str];

    fn list_path(&self, page: u32) -> String;
    fn row_from_record(&self, record: &Value) -> Self::Row;
    fn row_id(&self, row: &Self::Row) -> String;
    fn form_from_row(&self, row: &Self::Row) -> Self::Form;

    fn create_request(&self, form: &Self::Form) -> Result<Mutation>;
    fn update_request(&self, id: &str, form: &Self::Form) -> Result<Mutation>;
    fn delete_request(&self, row: &Self::Row) -> Mutation;

    fn delete_prompt(&self, row: &Self::Row) -> ConfirmPrompt {
        ConfirmPrompt::delete(Self::LABEL, &self.row_id(row))
    }

    /// Route returning the full record before editing, when the list row is
    /// only a summary.
    fn detail_path(&self, _id: &str) -> Option<String> {
        None
    }

    fn row_with_detail(&self, row: Self::Row, _detail: &Value) -> Self::Row {
        row
    }
}

/// A write request: method, path and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl Mutation {
    pub fn post<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(encode(body)?),
        })
    }

    pub fn put<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self> {
        Ok(Self {
            method: Method::Put,
            path: path.into(),
            body: Some(encode(body)?),
        })
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    /// DELETE whose route expects `{"id": id}` in the body.
    pub fn delete_by_body_id(path: impl Into<String>, id: &str) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: Some(serde_json::json!({ "id": id })),
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

/// One page of a list response.
///
/// Accepts `{data, total, limit, page}`, a bare array, `{items: [...]}` or
/// any object whose first array-valued field, in wire order, holds the records.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListPage {
    pub records: Vec<Value>,
    pub total: Option<u64>,
    pub limit: Option<u64>,
    pub page: Option<u32>,
}

impl ListPage {
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Array(records) => Self {
                records,
                ..Self::default()
            },
            Value::Object(mut map) => {
                let total = map.get("total").and_then(number);
                let limit = map.get("limit").and_then(number);
                let page = map
                    .get("page")
                    .and_then(number)
                    .and_then(|p| u32::try_from(p).ok());

                let key = ["data", "items"]
                    .into_iter()
                    .find(|key| map.get(*key).is_some_and(Value::is_array))
                    .map(str::to_string)
                    .or_else(|| {
                        map.iter()
                            .find(|(_, value)| value.is_array())
                            .map(|(key, _)| key.clone())
                    });

                let records = match key.and_then(|key| map.remove(&key)) {
                    Some(Value::Array(records)) => records,
                    _ => Vec::new(),
                };

                Self {
                    records,
                    total,
                    limit,
                    page,
                }
            }
            _ => Self::default(),
        }
    }
}

/// Non-negative integer from a number or numeric string.
fn number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
