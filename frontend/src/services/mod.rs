//! Treasury API services.
//!
//! All data access goes through the [`DataSource`] capability. Two
//! implementations exist:
//!
//! - [`api`] - [`LiveSource`], HTTP calls to the treasury API
//! - [`mock`] - [`MockSource`], answers from the static [`fixtures`]
//!
//! [`TreasuryService`] picks one from [`AppConfig`] and is what the
//! components receive through the Leptos context.

pub mod api;
pub mod fixtures;
pub mod mock;

#[cfg(test)]
pub(crate) mod testing;

pub use api::*;
pub use mock::*;

use web_sys::File;

use crate::config::{AppConfig, DataSourceKind};
use crate::types::{
    AcceptRecommendationRequest, AnalysisMetrics, AnalysisStatus, AppResult, BankConnection,
    BankConnectionRequest, Client, ClientInfo, ConnectBankResponse, GenerateReportRequest,
    Recommendation, RejectRecommendationRequest, ReportData, Transaction, TransactionFilter,
    TreasuryProduct, UploadStatementResponse,
};
use crate::workflow::StagedFile;

/// Remote operations used by the dashboard.
///
/// Futures are not `Send`: everything runs on the browser's UI thread.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// File handle carried by staged files and sent on upload.
    type Payload: Clone;

    async fn upload_statement(
        &self,
        files: &[StagedFile<Self::Payload>],
        client_info: &ClientInfo,
    ) -> AppResult<UploadStatementResponse>;

    async fn get_upload_status(&self, upload_id: &str) -> AppResult<AnalysisStatus>;

    async fn connect_bank(&self, request: &BankConnectionRequest)
        -> AppResult<ConnectBankResponse>;

    async fn get_bank_connections(&self) -> AppResult<Vec<BankConnection>>;

    async fn disconnect_bank(&self, connection_id: &str) -> AppResult<bool>;

    async fn get_clients(&self) -> AppResult<Vec<Client>>;

    async fn get_client(&self, client_id: &str) -> AppResult<Client>;

    async fn get_analysis_metrics(&self, client_id: &str) -> AppResult<AnalysisMetrics>;

    /// Analysis progress for a client, as opposed to a single upload.
    async fn get_analysis_status(&self, client_id: &str) -> AppResult<AnalysisStatus>;

    async fn get_transactions(
        &self,
        client_id: &str,
        filter: &TransactionFilter,
    ) -> AppResult<Vec<Transaction>>;

    async fn get_transaction_categories(&self, client_id: &str) -> AppResult<Vec<String>>;

    async fn get_recommendations(&self, client_id: &str) -> AppResult<Vec<Recommendation>>;

    async fn accept_recommendation(
        &self,
        request: &AcceptRecommendationRequest,
    ) -> AppResult<Recommendation>;

    async fn reject_recommendation(
        &self,
        request: &RejectRecommendationRequest,
    ) -> AppResult<Recommendation>;

    async fn get_treasury_products(&self) -> AppResult<Vec<TreasuryProduct>>;

    async fn get_treasury_product(&self, product_id: &str) -> AppResult<TreasuryProduct>;

    async fn generate_report(&self, request: &GenerateReportRequest) -> AppResult<ReportData>;

    async fn get_report_preview(&self, client_id: &str) -> AppResult<ReportData>;
}

/// The data source selected at startup.
#[derive(Clone, Debug)]
pub enum TreasuryService {
    Live(LiveSource),
    Mock(MockSource<File>),
}

impl TreasuryService {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.data_source {
            DataSourceKind::Live => {
                log::info!("🌐 Using treasury API at {}", config.api_base_url);
                TreasuryService::Live(LiveSource::new(config.api_base_url.clone()))
            }
            DataSourceKind::Mock => {
                log::info!("🧪 Using mock treasury data");
                TreasuryService::Mock(MockSource::new())
            }
        }
    }

    pub fn kind(&self) -> DataSourceKind {
        match self {
            TreasuryService::Live(_) => DataSourceKind::Live,
            TreasuryService::Mock(_) => DataSourceKind::Mock,
        }
    }
}

/// Forward a call to whichever source is active.
macro_rules! dispatch {
    ($service:expr, $method:ident($($arg:expr),*)) => {
        match $service {
            TreasuryService::Live(source) => source.$method($($arg),*).await,
            TreasuryService::Mock(source) => source.$method($($arg),*).await,
        }
    };
}

impl DataSource for TreasuryService {
    type Payload = File;

    async fn upload_statement(
        &self,
        files: &[StagedFile<File>],
        client_info: &ClientInfo,
    ) -> AppResult<UploadStatementResponse> {
        dispatch!(self, upload_statement(files, client_info))
    }

    async fn get_upload_status(&self, upload_id: &str) -> AppResult<AnalysisStatus> {
        dispatch!(self, get_upload_status(upload_id))
    }

    async fn connect_bank(
        &self,
        request: &BankConnectionRequest,
    ) -> AppResult<ConnectBankResponse> {
        dispatch!(self, connect_bank(request))
    }

    async fn get_bank_connections(&self) -> AppResult<Vec<BankConnection>> {
        dispatch!(self, get_bank_connections())
    }

    async fn disconnect_bank(&self, connection_id: &str) -> AppResult<bool> {
        dispatch!(self, disconnect_bank(connection_id))
    }

    async fn get_clients(&self) -> AppResult<Vec<Client>> {
        dispatch!(self, get_clients())
    }

    async fn get_client(&self, client_id: &str) -> AppResult<Client> {
        dispatch!(self, get_client(client_id))
    }

    async fn get_analysis_metrics(&self, client_id: &str) -> AppResult<AnalysisMetrics> {
        dispatch!(self, get_analysis_metrics(client_id))
    }

    async fn get_analysis_status(&self, client_id: &str) -> AppResult<AnalysisStatus> {
        dispatch!(self, get_analysis_status(client_id))
    }

    async fn get_transactions(
        &self,
        client_id: &str,
        filter: &TransactionFilter,
    ) -> AppResult<Vec<Transaction>> {
        dispatch!(self, get_transactions(client_id, filter))
    }

    async fn get_transaction_categories(&self, client_id: &str) -> AppResult<Vec<String>> {
        dispatch!(self, get_transaction_categories(client_id))
    }

    async fn get_recommendations(&self, client_id: &str) -> AppResult<Vec<Recommendation>> {
        dispatch!(self, get_recommendations(client_id))
    }

    async fn accept_recommendation(
        &self,
        request: &AcceptRecommendationRequest,
    ) -> AppResult<Recommendation> {
        dispatch!(self, accept_recommendation(request))
    }

    async fn reject_recommendation(
        &self,
        request: &RejectRecommendationRequest,
    ) -> AppResult<Recommendation> {
        dispatch!(self, reject_recommendation(request))
    }

    async fn get_treasury_products(&self) -> AppResult<Vec<TreasuryProduct>> {
        dispatch!(self, get_treasury_products())
    }

    async fn get_treasury_product(&self, product_id: &str) -> AppResult<TreasuryProduct> {
        dispatch!(self, get_treasury_product(product_id))
    }

    async fn generate_report(&self, request: &GenerateReportRequest) -> AppResult<ReportData> {
        dispatch!(self, generate_report(request))
    }

    async fn get_report_preview(&self, client_id: &str) -> AppResult<ReportData> {
        dispatch!(self, get_report_preview(client_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_follows_config() {
        let live = TreasuryService::from_config(&AppConfig::from_values(None, None));
        assert_eq!(live.kind(), DataSourceKind::Live);

        let mock = TreasuryService::from_config(&AppConfig::from_values(None, Some("true")));
        assert_eq!(mock.kind(), DataSourceKind::Mock);
    }

    #[test]
    fn test_mock_service_dispatches_to_fixtures() {
        let service = TreasuryService::from_config(&AppConfig::from_values(None, Some("true")));
        let products = futures::executor::block_on(service.get_treasury_products()).unwrap();
        assert_eq!(products.len(), 4);
        let recommendations =
            futures::executor::block_on(service.get_recommendations("1")).unwrap();
        assert_eq!(recommendations.len(), 3);
    }
}
