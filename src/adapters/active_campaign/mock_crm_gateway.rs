//! Mock CRM gateway for testing.
//!
//! Records every call and supports per-method error injection, so tests can
//! assert both what was forwarded and how delivery failures are absorbed.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{CrmGateway, DeliveryError, LeadContact};

/// Mock CRM gateway.
///
/// # Example
///
/// ```ignore
/// let crm = MockCrmGateway::new();
/// crm.set_method_error("upsert_contact", DeliveryError::network("down"));
///
/// // ... exercise the submit handler ...
///
/// assert!(crm.was_called("upsert_contact"));
/// assert!(!crm.was_called("ensure_tag"));
/// ```
#[derive(Clone)]
pub struct MockCrmGateway {
    inner: Arc<Mutex<MockState>>,
}

struct MockState {
    /// Id returned by `upsert_contact`; `None` simulates a response without one.
    contact_id: Option<String>,

    /// Tag ids handed out so far, by tag name.
    tags: HashMap<String, String>,

    /// Whether `ensure_tag` reports the id it created.
    report_tag_ids: bool,

    /// Errors by method name.
    method_errors: HashMap<String, DeliveryError>,

    /// Errors for `ensure_tag` by tag name.
    tag_errors: HashMap<String, DeliveryError>,

    /// Contacts received.
    contacts: Vec<LeadContact>,

    /// Track method calls for assertions.
    call_log: Vec<CrmCall>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            contact_id: Some("1".to_string()),
            tags: HashMap::new(),
            report_tag_ids: true,
            method_errors: HashMap::new(),
            tag_errors: HashMap::new(),
            contacts: Vec::new(),
            call_log: Vec::new(),
        }
    }
}

/// Recorded method call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmCall {
    pub method: String,
    pub args: Vec<String>,
}

impl Default for MockCrmGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCrmGateway {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Id to return from `upsert_contact`.
    pub fn set_contact_id(&self, id: Option<&str>) {
        self.inner.lock().unwrap().contact_id = id.map(str::to_string);
    }

    /// Make `ensure_tag` succeed without reporting an id.
    pub fn hide_tag_ids(&self) {
        self.inner.lock().unwrap().report_tag_ids = false;
    }

    /// Set an error for a specific method.
    pub fn set_method_error(&self, method: &str, error: DeliveryError) {
        self.inner
            .lock()
            .unwrap()
            .method_errors
            .insert(method.to_string(), error);
    }

    /// Fail `ensure_tag` for one tag name only.
    pub fn set_tag_error(&self, tag: &str, error: DeliveryError) {
        self.inner
            .lock()
            .unwrap()
            .tag_errors
            .insert(tag.to_string(), error);
    }

    /// Contacts received so far.
    pub fn contacts(&self) -> Vec<LeadContact> {
        self.inner.lock().unwrap().contacts.clone()
    }

    /// Get all recorded method calls.
    pub fn calls(&self) -> Vec<CrmCall> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Check if a method was called.
    pub fn was_called(&self, method: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .any(|c| c.method == method)
    }

    /// Number of calls made to a method.
    pub fn call_count(&self, method: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .call_log
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    fn record(state: &mut MockState, method: &str, args: Vec<String>) -> Result<(), DeliveryError> {
        state.call_log.push(CrmCall {
            method: method.to_string(),
            args,
        });
        match state.method_errors.get(method) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CrmGateway for MockCrmGateway {
    async fn upsert_contact(&self, contact: &LeadContact) -> Result<Option<String>, DeliveryError> {
        let mut state = self.inner.lock().unwrap();
        Self::record(&mut state, "upsert_contact", vec![contact.email.clone()])?;
        state.contacts.push(contact.clone());
        Ok(state.contact_id.clone())
    }

    async fn ensure_tag(&self, tag: &str) -> Result<Option<String>, DeliveryError> {
        let mut state = self.inner.lock().unwrap();
        Self::record(&mut state, "ensure_tag", vec![tag.to_string()])?;
        if let Some(err) = state.tag_errors.get(tag) {
            return Err(err.clone());
        }
        let next_id = (state.tags.len() + 1).to_string();
        let id = state.tags.entry(tag.to_string()).or_insert(next_id).clone();
        Ok(state.report_tag_ids.then_some(id))
    }

    async fn tag_contact(&self, contact_id: &str, tag_id: &str) -> Result<(), DeliveryError> {
        let mut state = self.inner.lock().unwrap();
        Self::record(
            &mut state,
            "tag_contact",
            vec![contact_id.to_string(), tag_id.to_string()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> LeadContact {
        LeadContact {
            email: "a@example.com".into(),
            first_name: "A".into(),
            primary_archetype: "bold".into(),
            secondary_archetype: String::new(),
            quiz_result: "You're mostly Bold.".into(),
            quiz_date: "2024-01-01".into(),
        }
    }

    #[tokio::test]
    async fn records_contacts_and_calls() {
        let crm = MockCrmGateway::new();
        let id = crm.upsert_contact(&contact()).await.unwrap();
        assert_eq!(id.as_deref(), Some("1"));
        assert_eq!(crm.contacts().len(), 1);
        assert!(crm.was_called("upsert_contact"));
    }

    #[tokio::test]
    async fn ensure_tag_reuses_ids() {
        let crm = MockCrmGateway::new();
        let a = crm.ensure_tag("Style: Bold").await.unwrap();
        let b = crm.ensure_tag("Secondary: Natural").await.unwrap();
        let again = crm.ensure_tag("Style: Bold").await.unwrap();
        assert_eq!(a, again);
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn injected_errors_are_returned() {
        let crm = MockCrmGateway::new();
        crm.set_method_error("tag_contact", DeliveryError::network("down"));
        assert!(crm.tag_contact("1", "2").await.is_err());
        assert_eq!(crm.call_count("tag_contact"), 1);
    }
}
