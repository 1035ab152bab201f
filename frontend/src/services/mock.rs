//! Fixture-backed data source for demos and offline development.

use std::marker::PhantomData;

use super::fixtures::dataset;
use super::DataSource;
use crate::types::{
    AcceptRecommendationRequest, AnalysisMetrics, AnalysisStatus, AppError, AppResult,
    BankConnection, BankConnectionRequest, Client, ClientInfo, ConnectBankResponse,
    ConnectionOutcome, GenerateReportRequest, Recommendation, RecommendationStatus,
    RejectRecommendationRequest, ReportData, Transaction, TransactionFilter, TreasuryProduct,
    UploadStatementResponse,
};
use crate::workflow::StagedFile;

/// Answers every request from the static fixture dataset.
///
/// Nothing is sent anywhere; the payload type only has to match the
/// staging area it is paired with.
#[derive(Debug)]
pub struct MockSource<P> {
    _payload: PhantomData<P>,
}

impl<P> MockSource<P> {
    pub fn new() -> Self {
        Self {
            _payload: PhantomData,
        }
    }
}

impl<P> Default for MockSource<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for MockSource<P> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

fn timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Name recorded on recommendations reviewed through the mock.
const REVIEWER: &str = "Current User";

/// Copy of a fixture recommendation with a review decision applied.
fn reviewed(recommendation_id: &str, status: RecommendationStatus) -> AppResult<Recommendation> {
    let mut recommendation = dataset()
        .recommendations
        .iter()
        .find(|r| r.id == recommendation_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Recommendation".into()))?;

    log::info!("🧪 Mock review of recommendation {}: {:?}", recommendation_id, status);
    recommendation.status = status;
    recommendation.reviewed_at = Some(chrono::Utc::now().to_rfc3339());
    recommendation.reviewed_by = Some(REVIEWER.to_string());
    Ok(recommendation)
}

fn report_for(client_id: &str) -> ReportData {
    ReportData {
        client_id: client_id.to_string(),
        ..dataset().report.clone()
    }
}

impl<P: Clone> DataSource for MockSource<P> {
    type Payload = P;

    async fn upload_statement(
        &self,
        files: &[StagedFile<P>],
        client_info: &ClientInfo,
    ) -> AppResult<UploadStatementResponse> {
        log::info!(
            "🧪 Mock upload of {} file(s) for {}",
            files.len(),
            client_info.name()
        );
        Ok(UploadStatementResponse {
            client_id: "1".into(),
            upload_id: format!("upload_{}", timestamp_millis()),
            files: dataset().uploaded_files.clone(),
            status: "processing".into(),
        })
    }

    async fn get_upload_status(&self, _upload_id: &str) -> AppResult<AnalysisStatus> {
        Ok(dataset().analysis_status.clone())
    }

    async fn connect_bank(
        &self,
        request: &BankConnectionRequest,
    ) -> AppResult<ConnectBankResponse> {
        log::info!("🧪 Mock bank link to {}", request.bank_name.label());
        Ok(ConnectBankResponse {
            connection_id: format!("conn_{}", timestamp_millis()),
            status: ConnectionOutcome::Connected,
            message: "Bank connection established successfully".into(),
        })
    }

    async fn get_bank_connections(&self) -> AppResult<Vec<BankConnection>> {
        Ok(dataset().bank_connections.clone())
    }

    async fn disconnect_bank(&self, _connection_id: &str) -> AppResult<bool> {
        Ok(true)
    }

    async fn get_clients(&self) -> AppResult<Vec<Client>> {
        Ok(dataset().clients.clone())
    }

    async fn get_client(&self, client_id: &str) -> AppResult<Client> {
        dataset()
            .clients
            .iter()
            .find(|client| client.id == client_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Client".into()))
    }

    async fn get_analysis_metrics(&self, client_id: &str) -> AppResult<AnalysisMetrics> {
        Ok(AnalysisMetrics {
            client_id: client_id.to_string(),
            ..dataset().analysis_metrics.clone()
        })
    }

    async fn get_analysis_status(&self, client_id: &str) -> AppResult<AnalysisStatus> {
        Ok(AnalysisStatus {
            client_id: client_id.to_string(),
            ..dataset().analysis_status.clone()
        })
    }

    async fn get_transactions(
        &self,
        _client_id: &str,
        filter: &TransactionFilter,
    ) -> AppResult<Vec<Transaction>> {
        Ok(filter.apply(&dataset().transactions))
    }

    async fn get_transaction_categories(&self, _client_id: &str) -> AppResult<Vec<String>> {
        Ok(dataset().transaction_categories.clone())
    }

    async fn get_recommendations(&self, client_id: &str) -> AppResult<Vec<Recommendation>> {
        Ok(dataset()
            .recommendations
            .iter()
            .filter(|r| r.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn accept_recommendation(
        &self,
        request: &AcceptRecommendationRequest,
    ) -> AppResult<Recommendation> {
        reviewed(&request.recommendation_id, RecommendationStatus::Accepted)
    }

    async fn reject_recommendation(
        &self,
        request: &RejectRecommendationRequest,
    ) -> AppResult<Recommendation> {
        reviewed(&request.recommendation_id, RecommendationStatus::Rejected)
    }

    async fn get_treasury_products(&self) -> AppResult<Vec<TreasuryProduct>> {
        Ok(dataset().treasury_products.clone())
    }

    async fn get_treasury_product(&self, product_id: &str) -> AppResult<TreasuryProduct> {
        dataset()
            .treasury_products
            .iter()
            .find(|product| product.id == product_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Product".into()))
    }

    async fn generate_report(&self, request: &GenerateReportRequest) -> AppResult<ReportData> {
        log::info!(
            "🧪 Mock {:?} report for client {}",
            request.format,
            request.client_id
        );
        Ok(report_for(&request.client_id))
    }

    async fn get_report_preview(&self, client_id: &str) -> AppResult<ReportData> {
        Ok(report_for(client_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bank, BankCredentials, ReportFormat, TransactionType};
    use futures::executor::block_on;

    #[test]
    fn test_mock_upload_response() {
        let source = MockSource::<()>::new();
        let info = ClientInfo::new("Acme", ["111"]).unwrap();
        let response = block_on(source.upload_statement(&[], &info)).unwrap();

        assert_eq!(response.client_id, "1");
        assert!(response.upload_id.starts_with("upload_"));
        assert_eq!(response.status, "processing");
        assert_eq!(response.files.len(), 2);
    }

    #[test]
    fn test_mock_connect_bank() {
        let source = MockSource::<()>::new();
        let request = BankConnectionRequest {
            bank_name: Bank::Pnc,
            account_number: "555".into(),
            credentials: BankCredentials::default(),
        };
        let response = block_on(source.connect_bank(&request)).unwrap();
        assert!(response.connection_id.starts_with("conn_"));
        assert_eq!(response.status, ConnectionOutcome::Connected);
    }

    #[test]
    fn test_mock_client_lookup() {
        let source = MockSource::<()>::new();
        let client = block_on(source.get_client("2")).unwrap();
        assert_eq!(client.name, "TechStart Solutions LLC");

        let missing = block_on(source.get_client("404"));
        assert_eq!(missing, Err(AppError::NotFound("Client".into())));
        assert_eq!(missing.unwrap_err().to_string(), "Client not found");
    }

    #[test]
    fn test_mock_read_operations() {
        let source = MockSource::<()>::new();
        assert_eq!(block_on(source.get_bank_connections()).unwrap().len(), 2);
        assert!(block_on(source.disconnect_bank("1")).unwrap());
        let status = block_on(source.get_upload_status("upload_1")).unwrap();
        assert_eq!(status.message, "Analysis complete. 3 recommendations generated.");
    }

    #[test]
    fn test_mock_recommendations_filtered_by_client() {
        let source = MockSource::<()>::new();
        let acme = block_on(source.get_recommendations("1")).unwrap();
        assert_eq!(acme.len(), 3);
        assert!(acme.iter().all(|r| r.client_id == "1"));
        assert!(block_on(source.get_recommendations("2")).unwrap().is_empty());
    }

    #[test]
    fn test_mock_review_recommendation() {
        let source = MockSource::<()>::new();
        let accepted = block_on(source.accept_recommendation(&AcceptRecommendationRequest {
            recommendation_id: "1".into(),
            comments: Some("Go ahead".into()),
        }))
        .unwrap();
        assert_eq!(accepted.status, RecommendationStatus::Accepted);
        assert_eq!(accepted.reviewed_by.as_deref(), Some("Current User"));
        assert!(accepted.reviewed_at.is_some());

        let rejected = block_on(source.reject_recommendation(&RejectRecommendationRequest {
            recommendation_id: "2".into(),
            reason: "Already has ACH".into(),
            comments: None,
        }))
        .unwrap();
        assert_eq!(rejected.status, RecommendationStatus::Rejected);

        // Fixtures are never mutated.
        assert_eq!(dataset().recommendations[0].status, RecommendationStatus::Pending);
    }

    #[test]
    fn test_mock_review_unknown_recommendation() {
        let source = MockSource::<()>::new();
        let accept = block_on(source.accept_recommendation(&AcceptRecommendationRequest {
            recommendation_id: "99".into(),
            comments: None,
        }));
        assert_eq!(accept, Err(AppError::NotFound("Recommendation".into())));

        let reject = block_on(source.reject_recommendation(&RejectRecommendationRequest {
            recommendation_id: "99".into(),
            reason: "n/a".into(),
            comments: None,
        }));
        assert_eq!(reject.unwrap_err().to_string(), "Recommendation not found");
    }

    #[test]
    fn test_mock_products() {
        let source = MockSource::<()>::new();
        assert_eq!(block_on(source.get_treasury_products()).unwrap().len(), 4);
        let product = block_on(source.get_treasury_product("3")).unwrap();
        assert_eq!(product.name, "Zero Balance Account (ZBA)");
        assert_eq!(
            block_on(source.get_treasury_product("42")),
            Err(AppError::NotFound("Product".into()))
        );
    }

    #[test]
    fn test_mock_analysis_uses_requested_client() {
        let source = MockSource::<()>::new();
        let metrics = block_on(source.get_analysis_metrics("2")).unwrap();
        assert_eq!(metrics.client_id, "2");
        assert_eq!(metrics.seasonal_trends.len(), 4);

        let status = block_on(source.get_analysis_status("2")).unwrap();
        assert_eq!(status.client_id, "2");
        assert_eq!(status.progress, 100);
    }

    #[test]
    fn test_mock_transactions_and_categories() {
        let source = MockSource::<()>::new();
        let all = block_on(source.get_transactions("1", &TransactionFilter::default())).unwrap();
        assert_eq!(all.len(), 5);

        let checks = TransactionFilter {
            kind: Some(TransactionType::Check),
            ..Default::default()
        };
        let found = block_on(source.get_transactions("1", &checks)).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].counterparty.as_deref(), Some("Office Depot"));

        let categories = block_on(source.get_transaction_categories("1")).unwrap();
        assert!(categories.contains(&"Payroll".to_string()));
    }

    #[test]
    fn test_mock_reports() {
        let source = MockSource::<()>::new();
        let report = block_on(source.generate_report(&GenerateReportRequest {
            client_id: "2".into(),
            include_transaction_details: false,
            format: ReportFormat::Pdf,
            custom_sections: None,
        }))
        .unwrap();
        assert_eq!(report.client_id, "2");
        assert_eq!(report.summary.total_recommendations, 3);

        let preview = block_on(source.get_report_preview("1")).unwrap();
        assert_eq!(preview.sections.next_steps.len(), 4);
        assert_eq!(block_on(source.get_clients()).unwrap().len(), 2);
    }
}
