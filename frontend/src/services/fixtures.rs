//! Static demo dataset served by [`MockSource`](super::MockSource).
//!
//! Built once on first access and read-only afterwards.

use once_cell::sync::Lazy;

use crate::types::{
    AnalysisMetrics, AnalysisStage, AnalysisStatus, BankConnection, BenefitType, Client,
    ConnectionStatus, EligibilityRules, PaymentConcentration, Priority, ProductCategory,
    ProductFees, Recommendation, RecommendationStatus, ReportData, ReportSections, ReportSummary,
    SeasonalTrend, Transaction, TransactionType, TreasuryProduct, UploadedFile,
    UploadedFileStatus,
};

/// Everything the mock data source can return.
#[derive(Debug)]
pub struct MockDataset {
    pub clients: Vec<Client>,
    pub uploaded_files: Vec<UploadedFile>,
    pub bank_connections: Vec<BankConnection>,
    pub analysis_status: AnalysisStatus,
    pub transactions: Vec<Transaction>,
    pub transaction_categories: Vec<String>,
    pub analysis_metrics: AnalysisMetrics,
    pub treasury_products: Vec<TreasuryProduct>,
    pub recommendations: Vec<Recommendation>,
    pub report: ReportData,
}

static DATASET: Lazy<MockDataset> = Lazy::new(build_dataset);

/// The shared fixture dataset.
pub fn dataset() -> &'static MockDataset {
    &DATASET
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn transaction(
    id: &str,
    date: &str,
    amount: f64,
    kind: TransactionType,
    category: &str,
    description: &str,
    counterparty: Option<&str>,
    balance_after: f64,
) -> Transaction {
    Transaction {
        id: id.into(),
        date: date.into(),
        amount,
        kind,
        category: category.into(),
        description: description.into(),
        counterparty: counterparty.map(str::to_string),
        balance_after,
    }
}

fn build_transactions() -> Vec<Transaction> {
    vec![
        transaction(
            "1",
            "2024-01-15",
            50_000.0,
            TransactionType::Credit,
            "Customer Payment",
            "Payment from ABC Corp",
            Some("ABC Corp"),
            250_000.0,
        ),
        transaction(
            "2",
            "2024-01-16",
            -25_000.0,
            TransactionType::Debit,
            "Payroll",
            "Employee Payroll",
            None,
            225_000.0,
        ),
        transaction(
            "3",
            "2024-01-17",
            -5_000.0,
            TransactionType::Check,
            "Vendor Payment",
            "Office Supplies - Check #1234",
            Some("Office Depot"),
            220_000.0,
        ),
        transaction(
            "4",
            "2024-01-18",
            75_000.0,
            TransactionType::Ach,
            "Customer Payment",
            "ACH Transfer from XYZ Inc",
            Some("XYZ Inc"),
            295_000.0,
        ),
        transaction(
            "5",
            "2024-01-19",
            -15_000.0,
            TransactionType::Wire,
            "Loan Payment",
            "Wire Transfer - Equipment Loan",
            Some("Equipment Finance Co"),
            280_000.0,
        ),
    ]
}

fn build_metrics() -> AnalysisMetrics {
    let trend = |period: &str, average_balance, inflow_pattern, outflow_pattern| SeasonalTrend {
        period: period.into(),
        average_balance,
        inflow_pattern,
        outflow_pattern,
    };
    let concentration = |vendor: &str, total_amount, frequency, percentage| PaymentConcentration {
        vendor: vendor.into(),
        total_amount,
        frequency,
        percentage,
    };

    AnalysisMetrics {
        client_id: "1".into(),
        average_daily_balance: 275_000.0,
        total_inflows: 2_500_000.0,
        total_outflows: 2_100_000.0,
        idle_cash_amount: 180_000.0,
        liquidity_ratio: 1.19,
        cash_flow_volatility: 0.15,
        seasonal_trends: vec![
            trend("Q1", 260_000.0, 850_000.0, 720_000.0),
            trend("Q2", 290_000.0, 920_000.0, 780_000.0),
            trend("Q3", 275_000.0, 880_000.0, 750_000.0),
            trend("Q4", 285_000.0, 950_000.0, 820_000.0),
        ],
        payment_concentration: vec![
            concentration("ABC Corp", 450_000.0, 24, 18.0),
            concentration("XYZ Inc", 380_000.0, 12, 15.2),
            concentration("Equipment Finance Co", 180_000.0, 12, 7.2),
        ],
    }
}

fn build_products() -> Vec<TreasuryProduct> {
    vec![
        TreasuryProduct {
            id: "1".into(),
            name: "Automated Investment Sweep".into(),
            description: "Automatically invests idle cash balances into money market funds".into(),
            category: ProductCategory::Investment,
            features: strings(&[
                "Automatic daily sweeps",
                "Same-day liquidity",
                "FDIC insured up to $250k per bank",
                "Competitive yield rates",
            ]),
            eligibility_rules: EligibilityRules {
                min_balance: Some(250_000.0),
                business_type: Some(strings(&["corporation", "llc", "partnership"])),
                ..Default::default()
            },
            estimated_yield: Some(4.5),
            fees: ProductFees {
                monthly: Some(25.0),
                setup: Some(100.0),
                ..Default::default()
            },
            benefits: strings(&[
                "Maximize yield on idle cash",
                "Maintain liquidity access",
                "Reduce manual cash management",
            ]),
        },
        TreasuryProduct {
            id: "2".into(),
            name: "ACH Origination Service".into(),
            description: "Streamline vendor payments and payroll with automated ACH processing"
                .into(),
            category: ProductCategory::PaymentServices,
            features: strings(&[
                "Bulk payment processing",
                "Same-day and next-day ACH",
                "Payment approval workflows",
                "Detailed reporting and reconciliation",
            ]),
            eligibility_rules: EligibilityRules {
                min_transaction_volume: Some(100_000.0),
                ..Default::default()
            },
            estimated_yield: None,
            fees: ProductFees {
                monthly: Some(50.0),
                per_transaction: Some(0.25),
                setup: Some(200.0),
            },
            benefits: strings(&[
                "Reduce check processing costs",
                "Faster payment processing",
                "Enhanced security and tracking",
            ]),
        },
        TreasuryProduct {
            id: "3".into(),
            name: "Zero Balance Account (ZBA)".into(),
            description: "Centralize cash management with automatic balance transfers".into(),
            category: ProductCategory::CashManagement,
            features: strings(&[
                "Automatic balance transfers",
                "Centralized liquidity management",
                "Separate account tracking",
                "Detailed sub-account reporting",
            ]),
            eligibility_rules: EligibilityRules {
                min_balance: Some(100_000.0),
                ..Default::default()
            },
            estimated_yield: None,
            fees: ProductFees {
                monthly: Some(35.0),
                setup: Some(150.0),
                ..Default::default()
            },
            benefits: strings(&[
                "Optimize cash positioning",
                "Reduce idle balances",
                "Improve cash visibility",
            ]),
        },
        TreasuryProduct {
            id: "4".into(),
            name: "Remote Deposit Capture".into(),
            description: "Deposit checks electronically from your office".into(),
            category: ProductCategory::PaymentServices,
            features: strings(&[
                "Electronic check processing",
                "Mobile and desktop capture",
                "Same-day availability",
                "Fraud protection",
            ]),
            eligibility_rules: EligibilityRules {
                min_transaction_volume: Some(50_000.0),
                ..Default::default()
            },
            estimated_yield: None,
            fees: ProductFees {
                monthly: Some(30.0),
                per_transaction: Some(0.15),
                setup: Some(100.0),
            },
            benefits: strings(&[
                "Faster fund availability",
                "Reduce transportation costs",
                "Enhanced security",
            ]),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn recommendation(
    id: &str,
    product_id: &str,
    product_name: &str,
    rationale: &str,
    data_source: &str,
    estimated_benefit: f64,
    benefit_type: BenefitType,
    priority: Priority,
) -> Recommendation {
    Recommendation {
        id: id.into(),
        client_id: "1".into(),
        product_id: product_id.into(),
        product_name: product_name.into(),
        rationale: rationale.into(),
        data_source: data_source.into(),
        estimated_benefit,
        benefit_type,
        priority,
        status: RecommendationStatus::Pending,
        created_at: "2024-01-20T15:30:00Z".into(),
        reviewed_at: None,
        reviewed_by: None,
    }
}

fn build_recommendations() -> Vec<Recommendation> {
    vec![
        recommendation(
            "1",
            "1",
            "Automated Investment Sweep",
            "Analysis shows sustained idle cash balances above $250k for 45+ days, indicating opportunity for yield optimization through automated sweep account.",
            "Average balance analysis",
            8_100.0,
            BenefitType::YieldImprovement,
            Priority::High,
        ),
        recommendation(
            "2",
            "2",
            "ACH Origination Service",
            "80% of vendor payments are processed via manual checks. ACH origination would reduce processing costs and improve payment timing.",
            "Transaction type distribution",
            3_600.0,
            BenefitType::CostReduction,
            Priority::High,
        ),
        recommendation(
            "3",
            "4",
            "Remote Deposit Capture",
            "High weekend deposit volumes indicate significant check processing activity. RDC would provide faster fund availability.",
            "Inflow pattern analysis",
            2_400.0,
            BenefitType::Efficiency,
            Priority::Medium,
        ),
    ]
}

fn build_report(metrics: &AnalysisMetrics, recommendations: &[Recommendation]) -> ReportData {
    ReportData {
        id: "1".into(),
        client_id: "1".into(),
        generated_at: "2024-01-20T16:00:00Z".into(),
        summary: ReportSummary {
            total_recommendations: 3,
            estimated_total_benefit: 14_100.0,
            key_insights: strings(&[
                "Significant idle cash optimization opportunity",
                "Payment processing efficiency can be improved",
                "Cash concentration analysis reveals vendor payment patterns",
            ]),
        },
        sections: ReportSections {
            executive_summary: "Based on analysis of transaction patterns, we identified significant opportunities for treasury optimization through automated cash management and payment processing improvements.".into(),
            analysis_results: metrics.clone(),
            recommendations: recommendations.to_vec(),
            next_steps: strings(&[
                "Review and approve recommended treasury products",
                "Schedule implementation planning session",
                "Begin account setup and integration process",
                "Establish monitoring and reporting procedures",
            ]),
        },
    }
}

fn build_dataset() -> MockDataset {
    log::debug!("🗂️  Loading mock treasury dataset");

    let analysis_metrics = build_metrics();
    let recommendations = build_recommendations();
    let report = build_report(&analysis_metrics, &recommendations);

    MockDataset {
        clients: vec![
            Client {
                id: "1".into(),
                name: "Acme Manufacturing Corp".into(),
                account_numbers: vec!["1234567890".into(), "0987654321".into()],
                relationship_manager: "John Smith".into(),
                created_at: "2024-01-15T10:00:00Z".into(),
                updated_at: "2024-01-20T15:30:00Z".into(),
            },
            Client {
                id: "2".into(),
                name: "TechStart Solutions LLC".into(),
                account_numbers: vec!["1122334455".into()],
                relationship_manager: "Sarah Johnson".into(),
                created_at: "2024-02-01T09:00:00Z".into(),
                updated_at: "2024-02-10T12:00:00Z".into(),
            },
        ],
        uploaded_files: vec![
            UploadedFile {
                id: "1".into(),
                name: "January_Statement.pdf".into(),
                mime_type: "application/pdf".into(),
                size: 2_048_000,
                status: UploadedFileStatus::Completed,
                client_id: Some("1".into()),
                uploaded_at: "2024-01-20T10:00:00Z".into(),
                error_message: None,
            },
            UploadedFile {
                id: "2".into(),
                name: "Q4_Transactions.csv".into(),
                mime_type: "text/csv".into(),
                size: 512_000,
                status: UploadedFileStatus::Processing,
                client_id: Some("1".into()),
                uploaded_at: "2024-01-20T10:05:00Z".into(),
                error_message: None,
            },
        ],
        bank_connections: vec![
            BankConnection {
                id: "1".into(),
                bank_name: "Chase Business Banking".into(),
                account_number: "****7890".into(),
                connection_status: ConnectionStatus::Active,
                last_sync: Some("2024-01-20T08:00:00Z".into()),
            },
            BankConnection {
                id: "2".into(),
                bank_name: "Bank of America Business".into(),
                account_number: "****4321".into(),
                connection_status: ConnectionStatus::Inactive,
                last_sync: Some("2024-01-15T12:00:00Z".into()),
            },
        ],
        analysis_status: AnalysisStatus {
            client_id: "1".into(),
            stage: AnalysisStage::Completed,
            progress: 100,
            message: "Analysis complete. 3 recommendations generated.".into(),
            estimated_time_remaining: Some(0),
            errors: None,
        },
        transactions: build_transactions(),
        transaction_categories: strings(&[
            "Customer Payment",
            "Payroll",
            "Vendor Payment",
            "Loan Payment",
            "Office Expenses",
        ]),
        analysis_metrics,
        treasury_products: build_products(),
        recommendations,
        report,
    }
}
