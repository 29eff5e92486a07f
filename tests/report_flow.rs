mod common;

use common::{setup_test_env, transaction_json};
use fintrack_core::core::services::{SummaryService, TransactionService};
use fintrack_core::domain::MonthKey;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn fetched_transactions_aggregate_into_dashboard_figures() {
    let (server, ctx) = setup_test_env().await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            transaction_json("t1", "u1", "food", 100.0, "expense", "2024-05-05"),
            transaction_json("t2", "u1", "transport", 50.0, "expense", "2024-05-12"),
            transaction_json("t3", "u1", "salary", 500.0, "income", "2024-05-01"),
            transaction_json("t4", "u1", "food", 77.0, "expense", "2024-04-30"),
        ])))
        .mount(&server)
        .await;

    let month: MonthKey = "2024-05".parse().unwrap();
    let transactions = TransactionService::list_for_user(&ctx, "u1")
        .await
        .expect("fetch succeeds");

    let stats = SummaryService::monthly_stats(&transactions, &month);
    assert_eq!(stats.total_income, 500.0);
    assert_eq!(stats.total_expense, 150.0);
    assert_eq!(stats.balance, 350.0);
    assert_eq!(stats.transaction_count, 3);

    let breakdown = SummaryService::expense_breakdown(&transactions, &[], &month);
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].category_id, "food");
    assert!((breakdown[0].percentage - 100.0 * 100.0 / 150.0).abs() < 1e-9);
    let share_total: f64 = breakdown.iter().map(|stat| stat.percentage).sum();
    assert!((share_total - 100.0).abs() < 1e-9);

    let recent = SummaryService::recent(&transactions, 2);
    assert_eq!(recent[0].id, "t2");
    assert_eq!(recent[1].id, "t1");
}

#[tokio::test]
async fn an_empty_month_reads_as_all_zeroes() {
    let (server, ctx) = setup_test_env().await;
    Mock::given(method("GET"))
        .and(path("/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let month: MonthKey = "2024-05".parse().unwrap();
    let transactions = TransactionService::list_for_user(&ctx, "u1")
        .await
        .expect("fetch succeeds");
    let stats = SummaryService::monthly_stats(&transactions, &month);
    assert_eq!(stats.total_income, 0.0);
    assert_eq!(stats.total_expense, 0.0);
    assert_eq!(stats.balance, 0.0);
    assert_eq!(stats.transaction_count, 0);
    assert!(SummaryService::expense_breakdown(&transactions, &[], &month).is_empty());
}
