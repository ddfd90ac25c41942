//! The converter form's state machine.
//!
//! `ConverterState` is plain data with no Dioxus types in it, so every
//! transition can be driven directly from tests. The `use_converter` hook
//! wraps it in a `Signal` for the screen.

use api::ConversionClient;
use api::ConversionError;
use api::ConversionRequest;
use api::Currency;

/// Shown for every failed submission, whatever the cause.
pub const CONVERSION_FAILED_MESSAGE: &str = "Failed to convert. Please ensure the backend is running on port 8080 and check the console for details.";

/// The user-editable fields of the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            amount: "100".to_string(),
            from: Currency::USD,
            to: Currency::ETB,
        }
    }
}

impl FormState {
    /// Snapshots the fields into the query sent to the endpoint.
    pub fn to_request(&self) -> ConversionRequest {
        ConversionRequest::new(self.amount.clone(), self.from, self.to)
    }
}

/// A single field edit coming from the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldEdit {
    Amount(String),
    From(Currency),
    To(Currency),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::EnumIs)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
}

/// A submission that has been started but not settled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingConversion {
    pub generation: u64,
    pub request: ConversionRequest,
}

/// The outcome of a `PendingConversion`.
#[derive(Debug)]
pub struct Settlement {
    pub generation: u64,
    pub request: ConversionRequest,
    pub outcome: Result<f64, ConversionError>,
}

/// Form fields plus the derived result/error/loading state.
///
/// `result` and `error` are never both non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ConverterState {
    form: FormState,
    result: String,
    error: String,
    phase: Phase,
    // Generation of the most recent submission. Settlements carrying any
    // other value are stale.
    generation: u64,
}

impl ConverterState {
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_pending()
    }

    /// Label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "Converting..."
        } else {
            "Convert"
        }
    }

    /// Applies a field edit. Allowed while a request is in flight.
    pub fn edit(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Amount(amount) => self.form.amount = amount,
            FieldEdit::From(currency) => self.form.from = currency,
            FieldEdit::To(currency) => self.form.to = currency,
        }
        self.error.clear();
    }

    /// Starts a submission from any phase.
    ///
    /// Clears both outputs, enters `Pending` and returns the request to send.
    /// Any submission still in flight becomes stale.
    pub fn submit(&mut self) -> PendingConversion {
        self.generation += 1;
        self.phase = Phase::Pending;
        self.result.clear();
        self.error.clear();

        PendingConversion {
            generation: self.generation,
            request: self.form.to_request(),
        }
    }

    /// Applies a settlement. Returns `false` if it was stale and ignored.
    pub fn settle(&mut self, settlement: Settlement) -> bool {
        if settlement.generation != self.generation {
            dioxus_logger::tracing::debug!(
                "discarding stale conversion {} (latest is {})",
                settlement.generation,
                self.generation
            );
            return false;
        }

        match settlement.outcome {
            Ok(converted) => {
                self.result = settlement.request.describe_result(converted);
                self.error.clear();
            }
            Err(e) => {
                dioxus_logger::tracing::warn!("Conversion error: {}", e);
                self.result.clear();
                self.error = CONVERSION_FAILED_MESSAGE.to_string();
            }
        }
        self.phase = Phase::Idle;
        true
    }
}

/// Sends a pending conversion through `client` and packages the outcome.
pub async fn perform_conversion<C: ConversionClient>(
    client: &C,
    pending: PendingConversion,
) -> Settlement {
    let outcome = client.convert(&pending.request).await;
    Settlement {
        generation: pending.generation,
        request: pending.request,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Stands in for the backend. Records every request it receives.
    enum Reply {
        Converted(f64),
        Status(u16),
        Malformed,
        Unreachable,
    }

    struct FakeClient {
        reply: Reply,
        seen: RefCell<Vec<ConversionRequest>>,
    }

    impl FakeClient {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ConversionClient for FakeClient {
        async fn convert(&self, request: &ConversionRequest) -> Result<f64, ConversionError> {
            self.seen.borrow_mut().push(request.clone());
            match self.reply {
                Reply::Converted(value) => Ok(value),
                Reply::Status(code) => Err(ConversionError::Status(code)),
                Reply::Malformed => Err(ConversionError::MalformedBody("null".to_string())),
                Reply::Unreachable => {
                    // A request that cannot be built fails before any I/O.
                    let err = reqwest::Client::new()
                        .get("not a url")
                        .send()
                        .await
                        .unwrap_err();
                    Err(err.into())
                }
            }
        }
    }

    async fn submit_with(state: &mut ConverterState, client: &FakeClient) -> bool {
        let pending = state.submit();
        let settlement = perform_conversion(client, pending).await;
        state.settle(settlement)
    }

    #[test]
    fn initial_state() {
        let state = ConverterState::default();
        assert_eq!(state.form().amount, "100");
        assert_eq!(state.form().from, Currency::USD);
        assert_eq!(state.form().to, Currency::ETB);
        assert_eq!(state.result(), "");
        assert_eq!(state.error(), "");
        assert!(!state.is_loading());
        assert_eq!(state.submit_label(), "Convert");
    }

    #[tokio::test]
    async fn field_edit_clears_error() {
        let mut state = ConverterState::default();
        submit_with(&mut state, &FakeClient::new(Reply::Status(500))).await;
        assert_eq!(state.error(), CONVERSION_FAILED_MESSAGE);

        state.edit(FieldEdit::To(Currency::EUR));
        assert_eq!(state.error(), "");
        assert_eq!(state.form().to, Currency::EUR);

        submit_with(&mut state, &FakeClient::new(Reply::Malformed)).await;
        state.edit(FieldEdit::Amount("250".to_string()));
        assert_eq!(state.error(), "");
        assert_eq!(state.form().amount, "250");
    }

    #[tokio::test]
    async fn submission_clears_prior_outputs() {
        let mut state = ConverterState::default();
        submit_with(&mut state, &FakeClient::new(Reply::Converted(5_650_000.0))).await;
        assert!(!state.result().is_empty());

        let pending = state.submit();
        assert_eq!(state.result(), "");
        assert_eq!(state.error(), "");
        assert!(state.is_loading());
        assert!(state.phase().is_pending());
        assert_eq!(state.submit_label(), "Converting...");
        assert_eq!(pending.request, ConversionRequest::new("100", Currency::USD, Currency::ETB));
    }

    #[tokio::test]
    async fn success_is_formatted_with_grouping() {
        let mut state = ConverterState::default();
        let client = FakeClient::new(Reply::Converted(5_650_000.0));

        assert!(submit_with(&mut state, &client).await);

        assert_eq!(state.result(), "100 USD = 5,650,000 ETB");
        assert_eq!(state.error(), "");
        assert!(!state.is_loading());
        assert_eq!(
            client.seen.borrow().as_slice(),
            [ConversionRequest::new("100", Currency::USD, Currency::ETB)]
        );
    }

    #[tokio::test]
    async fn every_failure_kind_shows_the_same_message() {
        for reply in [Reply::Status(502), Reply::Status(404), Reply::Malformed, Reply::Unreachable] {
            let mut state = ConverterState::default();
            submit_with(&mut state, &FakeClient::new(reply)).await;

            assert_eq!(state.error(), CONVERSION_FAILED_MESSAGE);
            assert_eq!(state.result(), "");
            assert!(!state.is_loading());
        }
    }

    #[tokio::test]
    async fn result_and_error_are_mutually_exclusive() {
        let mut state = ConverterState::default();
        let replies = [
            Reply::Converted(1.5),
            Reply::Status(503),
            Reply::Converted(2.0),
            Reply::Malformed,
        ];
        for reply in replies {
            submit_with(&mut state, &FakeClient::new(reply)).await;
            assert!(state.result().is_empty() != state.error().is_empty());
        }
    }

    #[tokio::test]
    async fn resubmission_is_idempotent() {
        let mut state = ConverterState::default();
        let client = FakeClient::new(Reply::Converted(91.25));

        submit_with(&mut state, &client).await;
        let first = state.result().to_string();
        submit_with(&mut state, &client).await;

        assert_eq!(state.result(), first);
        assert_eq!(first, "100 USD = 91.25 ETB");
        assert_eq!(client.seen.borrow().len(), 2);
    }

    #[tokio::test]
    async fn stale_settlement_is_discarded() {
        let mut state = ConverterState::default();
        let slow = FakeClient::new(Reply::Converted(1.0));
        let fast = FakeClient::new(Reply::Converted(2.0));

        let first = state.submit();
        state.edit(FieldEdit::Amount("200".to_string()));
        let second = state.submit();

        let latest = perform_conversion(&fast, second).await;
        assert!(state.settle(latest));
        assert_eq!(state.result(), "200 USD = 2 ETB");

        let stale = perform_conversion(&slow, first).await;
        assert!(!state.settle(stale));
        assert_eq!(state.result(), "200 USD = 2 ETB");
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn loading_persists_until_latest_submission_settles() {
        let mut state = ConverterState::default();
        let client = FakeClient::new(Reply::Status(500));

        let first = state.submit();
        let second = state.submit();

        assert!(!state.settle(perform_conversion(&client, first).await));
        assert!(state.is_loading());
        assert_eq!(state.error(), "");

        assert!(state.settle(perform_conversion(&client, second).await));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn result_describes_submitted_values_not_later_edits() {
        let mut state = ConverterState::default();
        let client = FakeClient::new(Reply::Converted(5_650_000.0));

        let pending = state.submit();
        assert!(state.is_loading());
        state.edit(FieldEdit::Amount("5".to_string()));
        state.edit(FieldEdit::From(Currency::GBP));
        assert!(state.is_loading());

        state.settle(perform_conversion(&client, pending).await);
        assert_eq!(state.result(), "100 USD = 5,650,000 ETB");
        assert_eq!(state.form().amount, "5");
    }

    #[tokio::test]
    async fn same_currency_is_forwarded() {
        let mut state = ConverterState::default();
        state.edit(FieldEdit::From(Currency::JPY));
        state.edit(FieldEdit::To(Currency::JPY));
        let client = FakeClient::new(Reply::Converted(100.0));

        submit_with(&mut state, &client).await;

        assert_eq!(
            client.seen.borrow()[0],
            ConversionRequest::new("100", Currency::JPY, Currency::JPY)
        );
        assert_eq!(state.result(), "100 JPY = 100 JPY");
    }
}
