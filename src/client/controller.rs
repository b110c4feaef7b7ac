//! Generic list controller backing every management tab.
//!
//! One state machine instantiated per resource: Loading until the first
//! fetch resolves, then Ready with an in-memory collection; an editor holds
//! a draft while adding or editing. Failures end the operation; the admin
//! re-attempts manually.

use chrono::Utc;
use serde_json::Value;

use super::resources::ResourceAdapter;
use super::ApiClient;

/// Input names coerced to numbers instead of strings.
const NUMERIC_FIELDS: &[&str] = &["amount", "price", "stock_quantity", "max_attendees"];

/// Input names cleared to null when the field is emptied.
const NULLABLE_ON_EMPTY: &[&str] = &["max_attendees"];

/// Whether the editor holds a brand-new draft or a copy of an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Adding,
    Editing,
}

#[derive(Debug, Clone)]
struct EditorState<R> {
    mode: EditorMode,
    draft: R,
}

/// Per-resource controller mediating between the resource client and a view.
pub struct ListController<A: ResourceAdapter> {
    client: ApiClient,
    items: Vec<A::Record>,
    editor: Option<EditorState<A::Record>>,
    loading: bool,
    error: Option<String>,
    last_alert: Option<String>,
}

impl<A: ResourceAdapter> ListController<A> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            editor: None,
            loading: true,
            error: None,
            last_alert: None,
        }
    }

    /// Initial fetch. On failure the view shows a generic banner; the
    /// underlying error is only logged.
    pub async fn mount(&mut self) {
        self.loading = true;
        match self.client.list::<A>().await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error fetching {}: {}", A::NAME, e);
                self.error = Some(format!("An error occurred while fetching {}", A::NAME));
            }
        }
        self.loading = false;
    }

    /// Open the editor with a fresh draft. No backend call is made until save.
    pub fn add(&mut self) {
        let provisional_id = Utc::now().timestamp_millis().to_string();
        self.editor = Some(EditorState {
            mode: EditorMode::Adding,
            draft: A::draft(provisional_id),
        });
    }

    /// Open the editor with a copy of an existing record.
    pub fn edit(&mut self, record: &A::Record) {
        self.editor = Some(EditorState {
            mode: EditorMode::Editing,
            draft: record.clone(),
        });
    }

    /// Close the editor without saving.
    pub fn cancel(&mut self) {
        self.editor = None;
    }

    /// Persist the draft. On success the returned record is spliced into the
    /// collection and the editor closes; on failure the editor stays open
    /// and an alert is recorded. No automatic retry.
    pub async fn save(&mut self) {
        let Some(editor) = self.editor.clone() else {
            return;
        };

        match editor.mode {
            EditorMode::Adding => match self.client.create::<A>(&editor.draft).await {
                Some(created) => {
                    self.items.push(created);
                    self.editor = None;
                }
                None => {
                    self.last_alert = Some(format!("Failed to add {}", A::LABEL));
                }
            },
            EditorMode::Editing => match self.client.update::<A>(&editor.draft).await {
                Some(updated) => {
                    let id = A::id(&updated).to_string();
                    for item in &mut self.items {
                        if A::id(item) == id {
                            *item = updated.clone();
                        }
                    }
                    self.editor = None;
                }
                None => {
                    self.last_alert = Some(format!("Failed to update {}", A::LABEL));
                }
            },
        }
    }

    /// Delete after confirmation. A declined prompt makes no backend call;
    /// a failed delete records an alert and leaves the collection unchanged.
    pub async fn remove<F>(&mut self, id: &str, confirm: F)
    where
        F: FnOnce(&str) -> bool,
    {
        let prompt = format!("Are you sure you want to delete this {}?", A::LABEL);
        if !confirm(&prompt) {
            return;
        }

        if self.client.delete::<A>(id).await {
            self.items.retain(|item| A::id(item) != id);
        } else {
            self.last_alert = Some(format!("Failed to delete {}", A::LABEL));
        }
    }

    /// Generic field setter keyed by input name. Numeric inputs are coerced;
    /// an emptied max_attendees becomes null.
    pub fn set_field(&mut self, name: &str, raw: &str) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        let Ok(mut value) = serde_json::to_value(&editor.draft) else {
            return;
        };
        let Some(fields) = value.as_object_mut() else {
            return;
        };

        let new_value = if NULLABLE_ON_EMPTY.contains(&name) && raw.is_empty() {
            Value::Null
        } else if NUMERIC_FIELDS.contains(&name) {
            parse_number(raw)
        } else {
            Value::String(raw.to_string())
        };
        fields.insert(name.to_string(), new_value);

        match serde_json::from_value(value) {
            Ok(draft) => editor.draft = draft,
            Err(e) => tracing::warn!("Ignoring field update for {}: {}", name, e),
        }
    }

    // ---- View accessors ----

    pub fn items(&self) -> &[A::Record] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editor_mode(&self) -> Option<EditorMode> {
        self.editor.as_ref().map(|e| e.mode)
    }

    pub fn draft(&self) -> Option<&A::Record> {
        self.editor.as_ref().map(|e| &e.draft)
    }

    /// Consume the pending alert, if any.
    pub fn take_alert(&mut self) -> Option<String> {
        self.last_alert.take()
    }
}

fn parse_number(raw: &str) -> Value {
    if let Ok(int) = raw.parse::<i64>() {
        return Value::from(int);
    }
    match raw.parse::<f64>() {
        Ok(float) => serde_json::Number::from_f64(float)
            .map(Value::Number)
            .unwrap_or_else(|| Value::from(0)),
        Err(_) => Value::from(0),
    }
}
