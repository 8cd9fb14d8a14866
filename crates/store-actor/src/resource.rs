//! # Remote Resource Shape
//!
//! Every remote-backed slice (catalog, feed, history, order lookup) holds
//! its data in the same three-field shape: the data itself, a loading flag,
//! and an optional error message. [`Remote`] packages that shape together
//! with the three lifecycle transitions so each slice applies them
//! identically.
//!
//! The lifecycle is stale-while-revalidate: starting a fetch never blanks
//! previously loaded data, and a failure leaves it untouched too. Only a
//! successful settlement replaces it.

/// State of one remote-backed resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Remote<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Remote<T> {
    /// Pending: a request is in flight. Data is kept as-is.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Fulfilled: the request settled with a payload.
    pub fn resolve(&mut self, data: T) {
        self.loading = false;
        self.error = None;
        self.data = data;
    }

    /// Rejected: the request settled with a failure. Data is kept as-is.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_keeps_stale_data() {
        let mut res = Remote {
            data: vec![1, 2, 3],
            loading: false,
            error: Some("old failure".to_string()),
        };
        res.begin();
        assert!(res.loading);
        assert_eq!(res.error, None);
        assert_eq!(res.data, vec![1, 2, 3]);
    }

    #[test]
    fn resolve_replaces_data_and_clears_error() {
        let mut res = Remote::<Vec<i32>>::default();
        res.begin();
        res.resolve(vec![7]);
        assert!(!res.loading);
        assert_eq!(res.error, None);
        assert_eq!(res.data, vec![7]);
    }

    #[test]
    fn fail_records_message_and_keeps_data() {
        let mut res = Remote {
            data: vec![1],
            loading: true,
            error: None,
        };
        res.fail("boom");
        assert!(!res.loading);
        assert_eq!(res.error.as_deref(), Some("boom"));
        assert_eq!(res.data, vec![1]);
    }

    #[test]
    fn reapplying_a_settlement_is_idempotent() {
        // A late duplicate settlement (no cancellation in this store) must
        // be harmless to re-apply.
        let mut res = Remote::<Vec<i32>>::default();
        res.resolve(vec![9]);
        res.resolve(vec![9]);
        assert_eq!(res.data, vec![9]);
        assert!(!res.loading);
    }
}
