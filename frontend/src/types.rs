//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Client Types** - Validated client identity
//! - **File Types** - Accepted statement formats
//! - **Bank Types** - Supported banks and connection requests
//! - **API Types** - Treasury API request/response structures
//! - **Analysis Types** - Transactions and cash-flow metrics
//! - **Product & Recommendation Types** - Treasury products and suggestions
//! - **Report Types** - Generated treasury reports
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Client Types
// =============================================================================

/// Validated client identity attached to an upload.
///
/// Only obtainable through [`ClientInfo::new`], so a value of this type
/// always has a non-empty name and at least one account number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    name: String,
    account_numbers: Vec<String>,
}

impl ClientInfo {
    /// Validate raw form input.
    ///
    /// The name is trimmed. Account numbers are kept as entered; only
    /// blank ones are dropped.
    pub fn new<I, S>(name: &str, account_numbers: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingClientName);
        }

        let account_numbers: Vec<String> = account_numbers
            .into_iter()
            .filter(|account| !account.as_ref().trim().is_empty())
            .map(|account| account.as_ref().to_string())
            .collect();
        if account_numbers.is_empty() {
            return Err(ValidationError::MissingAccountNumber);
        }

        Ok(Self {
            name: name.to_string(),
            account_numbers,
        })
    }

    /// Business name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Account numbers, in the order they were entered.
    pub fn account_numbers(&self) -> &[String] {
        &self.account_numbers
    }
}

// =============================================================================
// File Types
// =============================================================================

/// Statement formats accepted by the staging area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AcceptedFileType {
    Pdf,
    Csv,
    Xls,
    Xlsx,
}

impl AcceptedFileType {
    /// Every accepted format.
    pub const ALL: [AcceptedFileType; 4] = [
        AcceptedFileType::Pdf,
        AcceptedFileType::Csv,
        AcceptedFileType::Xls,
        AcceptedFileType::Xlsx,
    ];

    /// MIME type reported by the browser.
    pub fn mime_type(&self) -> &'static str {
        match self {
            AcceptedFileType::Pdf => "application/pdf",
            AcceptedFileType::Csv => "text/csv",
            AcceptedFileType::Xls => "application/vnd.ms-excel",
            AcceptedFileType::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// File extension, including the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            AcceptedFileType::Pdf => ".pdf",
            AcceptedFileType::Csv => ".csv",
            AcceptedFileType::Xls => ".xls",
            AcceptedFileType::Xlsx => ".xlsx",
        }
    }

    /// Short label used in hints ("PDF", "CSV", ...).
    pub fn label(&self) -> &'static str {
        match self {
            AcceptedFileType::Pdf => "PDF",
            AcceptedFileType::Csv => "CSV",
            AcceptedFileType::Xls => "XLS",
            AcceptedFileType::Xlsx => "XLSX",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.mime_type().eq_ignore_ascii_case(mime))
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| lower.ends_with(kind.extension()))
    }

    /// Resolve the format of a candidate file.
    ///
    /// The extension is only consulted when the browser reported no MIME
    /// type at all; a known-but-unsupported MIME type is never overridden.
    pub fn detect(mime: &str, file_name: &str) -> Option<Self> {
        if mime.trim().is_empty() {
            Self::from_file_name(file_name)
        } else {
            Self::from_mime(mime)
        }
    }

    /// Value for the `accept` attribute of a file input.
    pub fn accept_attribute() -> String {
        Self::ALL
            .iter()
            .flat_map(|kind| [kind.extension(), kind.mime_type()])
            .collect::<Vec<_>>()
            .join(",")
    }
}

// =============================================================================
// Bank Types
// =============================================================================

/// Banks offered in the connection dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Bank {
    Chase,
    Bofa,
    WellsFargo,
    Citi,
    Pnc,
    Other,
}

impl Bank {
    pub const ALL: [Bank; 6] = [
        Bank::Chase,
        Bank::Bofa,
        Bank::WellsFargo,
        Bank::Citi,
        Bank::Pnc,
        Bank::Other,
    ];

    /// Wire value, also used as the `<option>` value.
    pub fn value(&self) -> &'static str {
        match self {
            Bank::Chase => "chase",
            Bank::Bofa => "bofa",
            Bank::WellsFargo => "wells-fargo",
            Bank::Citi => "citi",
            Bank::Pnc => "pnc",
            Bank::Other => "other",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Bank::Chase => "Chase Business Banking",
            Bank::Bofa => "Bank of America Business",
            Bank::WellsFargo => "Wells Fargo Business",
            Bank::Citi => "Citi Business Banking",
            Bank::Pnc => "PNC Business Banking",
            Bank::Other => "Other Bank",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bank| bank.value() == value)
    }
}

/// Optional credentials for a bank link.
///
/// Absent fields are omitted from the JSON body entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl BankCredentials {
    /// Number of credential fields actually provided.
    pub fn provided_count(&self) -> usize {
        [&self.username, &self.account_id, &self.api_key]
            .iter()
            .filter(|field| field.is_some())
            .count()
    }
}

/// Body of `POST /api/banks/connect`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankConnectionRequest {
    pub bank_name: Bank,
    pub account_number: String,
    pub credentials: BankCredentials,
}

// =============================================================================
// API Response Types
// =============================================================================

/// Server-side processing state of an uploaded statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadedFileStatus {
    Uploading,
    Processing,
    Completed,
    Error,
}

/// A statement as recorded by the treasury API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
    pub status: UploadedFileStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub uploaded_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Response from the statement upload endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadStatementResponse {
    pub client_id: String,
    pub upload_id: String,
    pub files: Vec<UploadedFile>,
    /// Free-form status, e.g. "processing".
    pub status: String,
}

/// Outcome reported by the bank connect endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionOutcome {
    Connected,
    PendingVerification,
    Failed,
}

/// Response from the bank connect endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectBankResponse {
    pub connection_id: String,
    pub status: ConnectionOutcome,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Active,
    Inactive,
    Pending,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Active => "Active",
            ConnectionStatus::Inactive => "Inactive",
            ConnectionStatus::Pending => "Pending",
        }
    }
}

/// An existing bank link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankConnection {
    pub id: String,
    pub bank_name: String,
    /// Masked account number, e.g. `****7890`.
    pub account_number: String,
    pub connection_status: ConnectionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<String>,
}

/// A treasury client known to the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub account_numbers: Vec<String>,
    pub relationship_manager: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Stage of the server-side analysis pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    Uploaded,
    Parsing,
    Categorizing,
    Analyzing,
    GeneratingRecommendations,
    Completed,
    Error,
}

impl AnalysisStage {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisStage::Uploaded => "Uploaded",
            AnalysisStage::Parsing => "Parsing statements",
            AnalysisStage::Categorizing => "Categorizing transactions",
            AnalysisStage::Analyzing => "Analyzing cash flow",
            AnalysisStage::GeneratingRecommendations => "Generating recommendations",
            AnalysisStage::Completed => "Completed",
            AnalysisStage::Error => "Error",
        }
    }
}

/// Progress of an upload through analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStatus {
    pub client_id: String,
    pub stage: AnalysisStage,
    /// Percentage, 0 to 100.
    pub progress: u8,
    pub message: String,
    /// Seconds, when the server can estimate it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time_remaining: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

// =============================================================================
// Analysis Types
// =============================================================================

/// Kind of a bank transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Credit,
    Debit,
    Transfer,
    Check,
    Ach,
    Wire,
    Card,
}

impl TransactionType {
    /// Wire value, also used as the `type` query parameter.
    pub fn value(&self) -> &'static str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
            TransactionType::Transfer => "transfer",
            TransactionType::Check => "check",
            TransactionType::Ach => "ach",
            TransactionType::Wire => "wire",
            TransactionType::Card => "card",
        }
    }
}

/// A categorized statement line. Negative amounts are outflows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
    pub balance_after: f64,
}

/// Optional narrowing for transaction listings.
///
/// Dates compare as ISO strings, both ends inclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub category: Option<String>,
    pub kind: Option<TransactionType>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.start_date
            .as_deref()
            .map_or(true, |start| transaction.date.as_str() >= start)
            && self
                .end_date
                .as_deref()
                .map_or(true, |end| transaction.date.as_str() <= end)
            && self
                .category
                .as_deref()
                .map_or(true, |category| transaction.category == category)
            && self.kind.map_or(true, |kind| transaction.kind == kind)
    }

    /// Matching transactions, then `offset` and `limit` applied in order.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|transaction| self.matches(transaction))
            .skip(self.offset.unwrap_or(0))
            .take(self.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    /// Query string pairs for the live API; unset fields are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(start) = &self.start_date {
            pairs.push(("startDate", start.clone()));
        }
        if let Some(end) = &self.end_date {
            pairs.push(("endDate", end.clone()));
        }
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(kind) = self.kind {
            pairs.push(("type", kind.value().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalTrend {
    pub period: String,
    pub average_balance: f64,
    pub inflow_pattern: f64,
    pub outflow_pattern: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConcentration {
    pub vendor: String,
    pub total_amount: f64,
    pub frequency: u32,
    pub percentage: f64,
}

/// Cash-flow metrics computed for one client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetrics {
    pub client_id: String,
    pub average_daily_balance: f64,
    pub total_inflows: f64,
    pub total_outflows: f64,
    pub idle_cash_amount: f64,
    pub liquidity_ratio: f64,
    pub cash_flow_volatility: f64,
    pub seasonal_trends: Vec<SeasonalTrend>,
    pub payment_concentration: Vec<PaymentConcentration>,
}

// =============================================================================
// Product & Recommendation Types
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    CashManagement,
    Investment,
    PaymentServices,
    Liquidity,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_transaction_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFees {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_transaction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup: Option<f64>,
}

/// A treasury product the bank can offer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasuryProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    pub features: Vec<String>,
    pub eligibility_rules: EligibilityRules,
    /// Percent per year, for investment products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_yield: Option<f64>,
    pub fees: ProductFees,
    pub benefits: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitType {
    YieldImprovement,
    CostReduction,
    Efficiency,
    RiskMitigation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Pending,
    Accepted,
    Rejected,
    UnderReview,
}

/// A product suggested for a client, with the reasoning behind it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub client_id: String,
    pub product_id: String,
    pub product_name: String,
    pub rationale: String,
    pub data_source: String,
    /// Estimated yearly benefit in dollars.
    pub estimated_benefit: f64,
    pub benefit_type: BenefitType,
    pub priority: Priority,
    pub status: RecommendationStatus,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
}

/// Body of `POST /api/recommendations/{id}/accept`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptRecommendationRequest {
    pub recommendation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Body of `POST /api/recommendations/{id}/reject`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRecommendationRequest {
    pub recommendation_id: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

// =============================================================================
// Report Types
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Excel,
    Html,
}

/// Body of `POST /api/reports/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    pub client_id: String,
    pub include_transaction_details: bool,
    pub format: ReportFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_sections: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_recommendations: u32,
    pub estimated_total_benefit: f64,
    pub key_insights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSections {
    pub executive_summary: String,
    pub analysis_results: AnalysisMetrics,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: Vec<String>,
}

/// A generated treasury report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub id: String,
    pub client_id: String,
    pub generated_at: String,
    pub summary: ReportSummary,
    pub sections: ReportSections,
}

// =============================================================================
// Error Types
// =============================================================================

/// Field-level validation failures.
///
/// Always recovered locally and rendered next to the offending field.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Client name is required")]
    MissingClientName,

    #[error("At least one account number is required")]
    MissingAccountNumber,

    #[error("{name} is not a supported file type.")]
    UnsupportedFileType { name: String },

    #[error("{name} is too large. Maximum size is {max_mb}MB.")]
    FileTooLarge { name: String, max_mb: String },

    #[error("Cannot upload more than {max_files} files at once.")]
    TooManyFiles { max_files: usize },

    #[error("Bank name is required")]
    MissingBank,

    #[error("Account number is required")]
    MissingBankAccountNumber,
}

/// Frontend application errors.
///
/// Unified error type for every service operation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Requested record does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Local validation rejected the input.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_info_filters_blank_accounts() {
        let info = ClientInfo::new("Acme", ["", " ", "123"]).unwrap();
        assert_eq!(info.account_numbers(), ["123".to_string()]);
    }

    #[test]
    fn test_client_info_keeps_account_numbers_as_entered() {
        let info = ClientInfo::new("Acme", [" 123 ", "", "45-67"]).unwrap();
        assert_eq!(info.account_numbers(), [" 123 ".to_string(), "45-67".to_string()]);
    }

    #[test]
    fn test_client_info_rejects_blank_input() {
        assert_eq!(
            ClientInfo::new("   ", ["123"]),
            Err(ValidationError::MissingClientName)
        );
        assert_eq!(
            ClientInfo::new("Acme", ["", "  "]),
            Err(ValidationError::MissingAccountNumber)
        );
    }

    #[test]
    fn test_client_info_serializes_camel_case() {
        let info = ClientInfo::new(" Acme ", ["111", "222"]).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Acme", "accountNumbers": ["111", "222"] })
        );
    }

    #[test]
    fn test_file_type_detection() {
        assert_eq!(
            AcceptedFileType::detect("application/pdf", "a.pdf"),
            Some(AcceptedFileType::Pdf)
        );
        // Browsers often leave CSV untyped.
        assert_eq!(
            AcceptedFileType::detect("", "Q4.CSV"),
            Some(AcceptedFileType::Csv)
        );
        assert_eq!(AcceptedFileType::detect("image/png", "scan.pdf"), None);
        assert_eq!(AcceptedFileType::detect("", "notes.txt"), None);
    }

    #[test]
    fn test_bank_wire_values() {
        for bank in Bank::ALL {
            let json = serde_json::to_string(&bank).unwrap();
            assert_eq!(json, format!("\"{}\"", bank.value()));
            assert_eq!(Bank::from_value(bank.value()), Some(bank));
        }
        assert_eq!(Bank::from_value(""), None);
    }

    #[test]
    fn test_connection_request_omits_missing_credentials() {
        let request = BankConnectionRequest {
            bank_name: Bank::WellsFargo,
            account_number: "42".into(),
            credentials: BankCredentials {
                api_key: Some("secret".into()),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bankName": "wells-fargo",
                "accountNumber": "42",
                "credentials": { "apiKey": "secret" }
            })
        );
    }

    #[test]
    fn test_upload_response_deserialization() {
        let json = r#"{
            "clientId": "1",
            "uploadId": "upload_1700000000000",
            "files": [
                {
                    "id": "1",
                    "name": "January_Statement.pdf",
                    "type": "application/pdf",
                    "size": 2048000,
                    "status": "completed",
                    "clientId": "1",
                    "uploadedAt": "2024-01-20T10:00:00Z"
                }
            ],
            "status": "processing"
        }"#;

        let response: UploadStatementResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.client_id, "1");
        assert_eq!(response.files.len(), 1);
        assert_eq!(response.files[0].mime_type, "application/pdf");
        assert_eq!(response.files[0].status, UploadedFileStatus::Completed);
        assert_eq!(response.files[0].error_message, None);
    }

    #[test]
    fn test_connect_response_status() {
        let json = r#"{"connectionId":"conn_1","status":"pending_verification","message":"Check your email"}"#;
        let response: ConnectBankResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, ConnectionOutcome::PendingVerification);
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::FileTooLarge {
            name: "big.pdf".into(),
            max_mb: "10".into(),
        };
        assert_eq!(err.to_string(), "big.pdf is too large. Maximum size is 10MB.");

        let err: AppError = ValidationError::MissingBank.into();
        assert_eq!(err.to_string(), "Bank name is required");

        let err = AppError::Server {
            status: 502,
            message: "Bad gateway".into(),
        };
        assert!(err.to_string().contains("502"));
    }

    fn sample_transaction(id: &str, date: &str, category: &str, kind: TransactionType) -> Transaction {
        Transaction {
            id: id.into(),
            date: date.into(),
            amount: 100.0,
            kind,
            category: category.into(),
            description: "test".into(),
            counterparty: None,
            balance_after: 1000.0,
        }
    }

    #[test]
    fn test_transaction_filter() {
        let transactions = vec![
            sample_transaction("1", "2024-01-15", "Customer Payment", TransactionType::Credit),
            sample_transaction("2", "2024-01-16", "Payroll", TransactionType::Debit),
            sample_transaction("3", "2024-01-18", "Customer Payment", TransactionType::Ach),
        ];

        let by_category = TransactionFilter {
            category: Some("Customer Payment".into()),
            ..Default::default()
        };
        let ids: Vec<String> = by_category.apply(&transactions).into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let window = TransactionFilter {
            start_date: Some("2024-01-16".into()),
            end_date: Some("2024-01-18".into()),
            kind: Some(TransactionType::Ach),
            ..Default::default()
        };
        assert_eq!(window.apply(&transactions).len(), 1);

        let page = TransactionFilter {
            offset: Some(1),
            limit: Some(1),
            ..Default::default()
        };
        assert_eq!(page.apply(&transactions)[0].id, "2");
    }

    #[test]
    fn test_transaction_filter_query_pairs() {
        assert!(TransactionFilter::default().query_pairs().is_empty());
        let filter = TransactionFilter {
            kind: Some(TransactionType::Wire),
            limit: Some(20),
            ..Default::default()
        };
        assert_eq!(
            filter.query_pairs(),
            vec![("type", "wire".to_string()), ("limit", "20".to_string())]
        );
    }

    #[test]
    fn test_transaction_deserialization() {
        let json = r#"{"id":"5","date":"2024-01-19","amount":-15000,"type":"wire","category":"Loan Payment","description":"Wire Transfer","balanceAfter":280000}"#;
        let transaction: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(transaction.kind, TransactionType::Wire);
        assert_eq!(transaction.amount, -15000.0);
        assert!(transaction.counterparty.is_none());
    }

    #[test]
    fn test_review_requests_serialize_camel_case() {
        let reject = RejectRecommendationRequest {
            recommendation_id: "2".into(),
            reason: "Not now".into(),
            comments: None,
        };
        assert_eq!(
            serde_json::to_value(&reject).unwrap(),
            serde_json::json!({ "recommendationId": "2", "reason": "Not now" })
        );

        let report = GenerateReportRequest {
            client_id: "1".into(),
            include_transaction_details: true,
            format: ReportFormat::Excel,
            custom_sections: None,
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({ "clientId": "1", "includeTransactionDetails": true, "format": "excel" })
        );
    }
}
