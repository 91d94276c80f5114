// File: src/submit.rs
// Purpose: Form payload and the submission seam

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Named field values of a submitted form, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    pub fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Delivers a validated form somewhere.
///
/// Runs on the browser's single thread, hence the non-`Send` future.
pub trait Submitter {
    fn submit<'a>(&'a self, payload: &'a FormPayload) -> LocalBoxFuture<'a, Result<()>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use futures::executor::block_on;
    use futures::FutureExt;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording {
        seen: RefCell<Vec<FormPayload>>,
        fail: bool,
    }

    impl Submitter for Recording {
        fn submit<'a>(&'a self, payload: &'a FormPayload) -> LocalBoxFuture<'a, Result<()>> {
            async move {
                self.seen.borrow_mut().push(payload.clone());
                if self.fail {
                    Err(Error::Submit("backend unavailable".to_string()))
                } else {
                    Ok(())
                }
            }
            .boxed_local()
        }
    }

    #[test]
    fn test_payload_lookup() {
        let mut payload = FormPayload::new();
        payload.push("email", "a@b.co");
        payload.push("email", "second@b.co");
        assert_eq!(payload.get("email"), Some("a@b.co"));
        assert_eq!(payload.get("phone"), None);
        assert_eq!(payload.len(), 2);
    }

    #[test]
    fn test_submitter_seam() {
        let mut payload = FormPayload::new();
        payload.push("name", "Jan");

        let ok = Recording::default();
        assert!(block_on(ok.submit(&payload)).is_ok());
        assert_eq!(ok.seen.borrow().len(), 1);

        let failing = Recording { fail: true, ..Recording::default() };
        let err = block_on(failing.submit(&payload)).unwrap_err();
        assert_eq!(err.to_string(), "Submission failed: backend unavailable");
    }
}
