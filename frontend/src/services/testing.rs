//! Recording fake used by workflow tests.

use std::cell::RefCell;

use super::{DataSource, MockSource};
use crate::types::{
    AcceptRecommendationRequest, AnalysisMetrics, AnalysisStage, AnalysisStatus, AppError,
    AppResult, BankConnection, BankConnectionRequest, Client, ClientInfo, ConnectBankResponse,
    ConnectionOutcome, GenerateReportRequest, Recommendation, RejectRecommendationRequest,
    ReportData, Transaction, TransactionFilter, TreasuryProduct, UploadStatementResponse,
};
use crate::workflow::StagedFile;

/// Records uploads and bank links; answers with fixed ids or a configured
/// error. Read-only lookups are served by the fixture-backed mock.
#[derive(Default)]
pub struct FakeSource {
    upload_error: Option<AppError>,
    uploads: RefCell<Vec<(Vec<String>, ClientInfo)>>,
    connects: RefCell<Vec<BankConnectionRequest>>,
}

impl FakeSource {
    pub fn failing_uploads(error: AppError) -> Self {
        Self {
            upload_error: Some(error),
            ..Default::default()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.borrow().len()
    }

    /// File names and client info of the most recent upload.
    pub fn last_upload(&self) -> Option<(Vec<String>, ClientInfo)> {
        self.uploads.borrow().last().cloned()
    }

    pub fn connect_requests(&self) -> Vec<BankConnectionRequest> {
        self.connects.borrow().clone()
    }
}

impl DataSource for FakeSource {
    type Payload = ();

    async fn upload_statement(
        &self,
        files: &[StagedFile<()>],
        client_info: &ClientInfo,
    ) -> AppResult<UploadStatementResponse> {
        let names = files.iter().map(|file| file.name.clone()).collect();
        self.uploads.borrow_mut().push((names, client_info.clone()));

        match &self.upload_error {
            Some(err) => Err(err.clone()),
            None => Ok(UploadStatementResponse {
                client_id: "client_test".into(),
                upload_id: "upload_test".into(),
                files: Vec::new(),
                status: "processing".into(),
            }),
        }
    }

    async fn get_upload_status(&self, _upload_id: &str) -> AppResult<AnalysisStatus> {
        Ok(AnalysisStatus {
            client_id: "client_test".into(),
            stage: AnalysisStage::Parsing,
            progress: 10,
            message: "Parsing".into(),
            estimated_time_remaining: None,
            errors: None,
        })
    }

    async fn connect_bank(
        &self,
        request: &BankConnectionRequest,
    ) -> AppResult<ConnectBankResponse> {
        self.connects.borrow_mut().push(request.clone());
        Ok(ConnectBankResponse {
            connection_id: "conn_test".into(),
            status: ConnectionOutcome::Connected,
            message: "ok".into(),
        })
    }

    async fn get_bank_connections(&self) -> AppResult<Vec<BankConnection>> {
        Ok(Vec::new())
    }

    async fn disconnect_bank(&self, _connection_id: &str) -> AppResult<bool> {
        Ok(true)
    }

    async fn get_clients(&self) -> AppResult<Vec<Client>> {
        Ok(Vec::new())
    }

    async fn get_client(&self, _client_id: &str) -> AppResult<Client> {
        Err(AppError::NotFound("Client".into()))
    }

    async fn get_analysis_metrics(&self, client_id: &str) -> AppResult<AnalysisMetrics> {
        fixtures().get_analysis_metrics(client_id).await
    }

    async fn get_analysis_status(&self, client_id: &str) -> AppResult<AnalysisStatus> {
        fixtures().get_analysis_status(client_id).await
    }

    async fn get_transactions(
        &self,
        client_id: &str,
        filter: &TransactionFilter,
    ) -> AppResult<Vec<Transaction>> {
        fixtures().get_transactions(client_id, filter).await
    }

    async fn get_transaction_categories(&self, client_id: &str) -> AppResult<Vec<String>> {
        fixtures().get_transaction_categories(client_id).await
    }

    async fn get_recommendations(&self, client_id: &str) -> AppResult<Vec<Recommendation>> {
        fixtures().get_recommendations(client_id).await
    }

    async fn accept_recommendation(
        &self,
        request: &AcceptRecommendationRequest,
    ) -> AppResult<Recommendation> {
        fixtures().accept_recommendation(request).await
    }

    async fn reject_recommendation(
        &self,
        request: &RejectRecommendationRequest,
    ) -> AppResult<Recommendation> {
        fixtures().reject_recommendation(request).await
    }

    async fn get_treasury_products(&self) -> AppResult<Vec<TreasuryProduct>> {
        fixtures().get_treasury_products().await
    }

    async fn get_treasury_product(&self, product_id: &str) -> AppResult<TreasuryProduct> {
        fixtures().get_treasury_product(product_id).await
    }

    async fn generate_report(&self, request: &GenerateReportRequest) -> AppResult<ReportData> {
        fixtures().generate_report(request).await
    }

    async fn get_report_preview(&self, client_id: &str) -> AppResult<ReportData> {
        fixtures().get_report_preview(client_id).await
    }
}

fn fixtures() -> MockSource<()> {
    MockSource::new()
}
