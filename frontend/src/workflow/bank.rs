//! Bank connection collector behind the connection modal.
//!
//! While a connect request is pending the form is frozen: field edits and
//! the close action are ignored until the request resolves.

use crate::services::DataSource;
use crate::types::{
    AppResult, Bank, BankConnectionRequest, BankCredentials, ConnectBankResponse,
    ConnectionOutcome, ValidationError,
};

/// Editable fields of the connection form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BankConnectionFields {
    pub bank: Option<Bank>,
    pub account_number: String,
    pub username: String,
    pub account_id: String,
    pub api_key: String,
}

impl BankConnectionFields {
    /// Build the request body, dropping blank optional credentials.
    pub fn to_request(&self) -> Result<BankConnectionRequest, ValidationError> {
        let bank = self.bank.ok_or(ValidationError::MissingBank)?;
        let account_number = self.account_number.trim();
        if account_number.is_empty() {
            return Err(ValidationError::MissingBankAccountNumber);
        }

        Ok(BankConnectionRequest {
            bank_name: bank,
            account_number: account_number.to_string(),
            credentials: BankCredentials {
                username: optional(&self.username),
                account_id: optional(&self.account_id),
                api_key: optional(&self.api_key),
            },
        })
    }
}

impl BankConnectionFields {
    /// Current text of a free-form field.
    pub fn value(&self, field: BankField) -> &str {
        match field {
            BankField::AccountNumber => &self.account_number,
            BankField::Username => &self.username,
            BankField::AccountId => &self.account_id,
            BankField::ApiKey => &self.api_key,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

/// Which field an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BankField {
    AccountNumber,
    Username,
    AccountId,
    ApiKey,
}

/// How a resolved connect request ended.
#[derive(Clone, Debug, PartialEq)]
pub enum ConnectOutcome {
    /// Link established or awaiting verification; the modal closed.
    Linked(ConnectBankResponse),
    /// Request failed; the message is shown in the modal.
    Failed(String),
}

impl ConnectOutcome {
    /// Text for the transient notification.
    pub fn notification(&self) -> String {
        match self {
            ConnectOutcome::Linked(_) => "Bank connected successfully!".to_string(),
            ConnectOutcome::Failed(message) => format!("Connection failed: {}", message),
        }
    }

    /// Analysis route to navigate to, only for a fully connected link.
    pub fn navigation_target(&self) -> Option<String> {
        match self {
            ConnectOutcome::Linked(response) if response.status == ConnectionOutcome::Connected => {
                Some(format!("/analysis?connectionId={}", response.connection_id))
            }
            _ => None,
        }
    }
}

/// Modal state: open flag, fields, pending flag and last error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BankConnectionForm {
    fields: BankConnectionFields,
    open: bool,
    connecting: bool,
    error: Option<String>,
}

impl BankConnectionForm {
    pub fn fields(&self) -> &BankConnectionFields {
        &self.fields
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and reset the form. Ignored while connecting.
    pub fn close(&mut self) -> bool {
        if self.connecting {
            return false;
        }
        self.fields = BankConnectionFields::default();
        self.error = None;
        self.open = false;
        true
    }

    pub fn select_bank(&mut self, bank: Option<Bank>) {
        if !self.connecting {
            self.fields.bank = bank;
        }
    }

    pub fn set_field(&mut self, field: BankField, value: impl Into<String>) {
        if self.connecting {
            return;
        }
        let value = value.into();
        match field {
            BankField::AccountNumber => self.fields.account_number = value,
            BankField::Username => self.fields.username = value,
            BankField::AccountId => self.fields.account_id = value,
            BankField::ApiKey => self.fields.api_key = value,
        }
    }

    /// Validate and enter the connecting state.
    ///
    /// Fails with the field error when required fields are missing, or
    /// returns `Ok(None)` when a request is already pending.
    pub fn begin_connect(&mut self) -> Result<Option<BankConnectionRequest>, ValidationError> {
        if self.connecting {
            return Ok(None);
        }
        let request = self.fields.to_request()?;
        self.connecting = true;
        self.error = None;
        log::info!("🏦 Connecting to {}...", request.bank_name.label());
        Ok(Some(request))
    }

    /// Apply the result of the connect request.
    ///
    /// Success resets and closes the form; failure keeps the entered values
    /// and records the error message.
    pub fn finish_connect(&mut self, result: AppResult<ConnectBankResponse>) -> ConnectOutcome {
        self.connecting = false;

        let result = match result {
            Ok(response) if response.status == ConnectionOutcome::Failed => Err(response.message),
            Ok(response) => Ok(response),
            Err(err) => Err(err.to_string()),
        };

        match result {
            Ok(response) => {
                log::info!("✅ Bank linked: {} ({:?})", response.connection_id, response.status);
                self.close();
                ConnectOutcome::Linked(response)
            }
            Err(message) => {
                log::error!("❌ Bank connection failed: {}", message);
                self.error = Some(message.clone());
                ConnectOutcome::Failed(message)
            }
        }
    }

    /// Run one connect round-trip against `source`.
    ///
    /// Returns `Ok(None)` if a request was already pending.
    pub async fn connect<S: DataSource>(
        &mut self,
        source: &S,
    ) -> Result<Option<ConnectOutcome>, ValidationError> {
        let Some(request) = self.begin_connect()? else {
            return Ok(None);
        };
        let result = source.connect_bank(&request).await;
        Ok(Some(self.finish_connect(result)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeSource;
    use crate::types::AppError;
    use futures::executor::block_on;

    fn filled() -> BankConnectionForm {
        let mut form = BankConnectionForm::default();
        form.open();
        form.select_bank(Some(Bank::Chase));
        form.set_field(BankField::AccountNumber, "1234567890");
        form
    }

    #[test]
    fn test_required_fields() {
        let mut form = BankConnectionForm::default();
        assert_eq!(form.begin_connect(), Err(ValidationError::MissingBank));

        form.select_bank(Some(Bank::Other));
        form.set_field(BankField::AccountNumber, "  ");
        assert_eq!(
            form.begin_connect(),
            Err(ValidationError::MissingBankAccountNumber)
        );
        assert!(!form.is_connecting());
    }

    #[test]
    fn test_required_only_yields_empty_credentials() {
        let request = filled().fields().to_request().unwrap();
        assert_eq!(request.credentials.provided_count(), 0);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["credentials"], serde_json::json!({}));
    }

    #[test]
    fn test_optional_credentials_independent() {
        let mut form = filled();
        form.set_field(BankField::Username, "treasurer");
        form.set_field(BankField::AccountId, "");
        form.set_field(BankField::ApiKey, "k-123");

        let request = form.fields().to_request().unwrap();
        assert_eq!(request.credentials.username.as_deref(), Some("treasurer"));
        assert_eq!(request.credentials.account_id, None);
        assert_eq!(request.credentials.api_key.as_deref(), Some("k-123"));
    }

    #[test]
    fn test_connecting_freezes_form() {
        let mut form = filled();
        let request = form.begin_connect().unwrap();
        assert!(request.is_some());
        assert!(form.is_connecting());

        form.set_field(BankField::AccountNumber, "changed");
        form.select_bank(None);
        assert!(!form.close());
        assert!(form.is_open());
        assert_eq!(form.fields().account_number, "1234567890");
        assert_eq!(form.fields().bank, Some(Bank::Chase));

        // A second submit while pending is swallowed.
        assert_eq!(form.begin_connect(), Ok(None));
    }

    #[test]
    fn test_failure_keeps_values_and_shows_error() {
        let mut form = filled();
        form.begin_connect().unwrap();
        let outcome = form.finish_connect(Err(AppError::Network("bank unreachable".into())));

        assert_eq!(
            outcome,
            ConnectOutcome::Failed("Network error: bank unreachable".into())
        );
        assert_eq!(
            outcome.notification(),
            "Connection failed: Network error: bank unreachable"
        );
        assert_eq!(form.error(), Some("Network error: bank unreachable"));
        assert!(form.is_open());
        assert!(!form.is_connecting());
        assert_eq!(form.fields().account_number, "1234567890");
    }

    #[test]
    fn test_failed_status_treated_as_error() {
        let mut form = filled();
        form.begin_connect().unwrap();
        let outcome = form.finish_connect(Ok(ConnectBankResponse {
            connection_id: "conn_1".into(),
            status: ConnectionOutcome::Failed,
            message: "Invalid credentials".into(),
        }));
        assert_eq!(outcome, ConnectOutcome::Failed("Invalid credentials".into()));
        assert!(form.is_open());
    }

    #[test]
    fn test_success_resets_and_closes() {
        let source = FakeSource::default();
        let mut form = filled();
        form.set_field(BankField::Username, "treasurer");

        let outcome = block_on(form.connect(&source)).unwrap().unwrap();
        assert_eq!(
            outcome.navigation_target(),
            Some("/analysis?connectionId=conn_test".to_string())
        );
        assert_eq!(outcome.notification(), "Bank connected successfully!");
        assert!(!form.is_open());
        assert_eq!(form.fields(), &BankConnectionFields::default());
        assert_eq!(form.error(), None);

        let requests = source.connect_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].bank_name, Bank::Chase);
        assert_eq!(requests[0].credentials.provided_count(), 1);
    }

    #[test]
    fn test_pending_verification_does_not_navigate() {
        let mut form = filled();
        form.begin_connect().unwrap();
        let outcome = form.finish_connect(Ok(ConnectBankResponse {
            connection_id: "conn_2".into(),
            status: ConnectionOutcome::PendingVerification,
            message: "Verify via email".into(),
        }));
        assert!(matches!(outcome, ConnectOutcome::Linked(_)));
        assert_eq!(outcome.navigation_target(), None);
        assert!(!form.is_open());
    }

    #[test]
    fn test_close_resets_form() {
        let mut form = filled();
        form.begin_connect().unwrap();
        form.finish_connect(Err(AppError::Network("timeout".into())));
        assert!(form.close());
        assert!(!form.is_open());
        assert_eq!(form.error(), None);
        assert_eq!(form.fields(), &BankConnectionFields::default());
    }

    #[test]
    fn test_invalid_form_issues_no_request() {
        let source = FakeSource::default();
        let mut form = BankConnectionForm::default();
        let result = block_on(form.connect(&source));
        assert_eq!(result, Err(ValidationError::MissingBank));
        assert!(source.connect_requests().is_empty());
    }
}
