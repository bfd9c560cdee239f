// ═══════════════════════════════════════════════════════════════════
// Integration Tests — procedures and the Dashboard facade, end to end
// against a mock MotherDuck server
// ═══════════════════════════════════════════════════════════════════

use mockito::{Server, ServerGuard};
use serde_json::{json, Value};
use std::collections::HashMap;

use jcn_dashboard_core::errors::CoreError;
use jcn_dashboard_core::models::holding::Holding;
use jcn_dashboard_core::models::settings::StoreSettings;
use jcn_dashboard_core::procedures::envelope::ProcedureResponse;
use jcn_dashboard_core::procedures::fundamentals::GetByTickersInput;
use jcn_dashboard_core::Dashboard;

const PATH: &str = "/v1/query";

fn dashboard_for(server: &ServerGuard, token: Option<&str>) -> Dashboard {
    Dashboard::new(StoreSettings {
        token: token.map(str::to_string),
        endpoint: format!("{}{}", server.url(), PATH),
        ..StoreSettings::default()
    })
}

// ═══════════════════════════════════════════════════════════════════
// fundamentals.getByTickers
// ═══════════════════════════════════════════════════════════════════

mod get_by_tickers {
    use super::*;

    #[tokio::test]
    async fn success_envelope() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(
                json!({
                    "data": [{
                        "symbol": "AAPL",
                        "obq_growth_score": 10,
                        "obq_momentum_score": 20,
                        "OBQ_Quality_Rank": 30,
                        "obq_value_score": 40,
                        "obq_finstr_score": 50
                    }],
                    "schema": [],
                    "rowCount": 1
                })
                .to_string(),
            )
            .create_async()
            .await;

        let dashboard = dashboard_for(&server, Some("tok"));
        let response = dashboard
            .fundamentals()
            .get_by_tickers(GetByTickersInput::new(["aapl"]))
            .await;

        assert!(response.success);
        assert_eq!(response.error, None);
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].derived_scores().composite, Some(21.0));
    }

    #[tokio::test]
    async fn upstream_500_becomes_failure_envelope() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(500)
            .with_body("server error")
            .create_async()
            .await;

        let dashboard = dashboard_for(&server, Some("tok"));
        let response = dashboard
            .fundamentals()
            .get_by_tickers(GetByTickersInput::new(["AAPL"]))
            .await;

        assert!(!response.success);
        assert!(response.data.is_empty());
        let error = response.error.unwrap();
        assert!(error.contains("500"));
        assert!(error.contains("server error"));
    }

    #[tokio::test]
    async fn missing_token_fails_fast_without_http_call() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(r#"{"data":[]}"#)
            .expect(0)
            .create_async()
            .await;

        let dashboard = dashboard_for(&server, None);

        let err = dashboard
            .gateway()
            .get_fundamentals(&["AAPL"])
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));

        let response = dashboard
            .fundamentals()
            .get_by_tickers(GetByTickersInput::new(["AAPL"]))
            .await;
        assert!(!response.success);
        assert!(response.error.unwrap().contains("token not configured"));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn blank_tickers_succeed_with_empty_data_and_no_call() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", PATH).expect(0).create_async().await;

        // no token either: the short-circuit happens before the token check
        let dashboard = dashboard_for(&server, None);
        let response = dashboard
            .fundamentals()
            .get_by_tickers(GetByTickersInput::new([" ", ""]))
            .await;

        assert!(response.success);
        assert!(response.data.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn call_rejects_malformed_input() {
        let server = Server::new_async().await;
        let dashboard = dashboard_for(&server, Some("tok"));

        for input in [
            json!({}),
            json!({ "tickers": "AAPL" }),
            json!({ "tickers": [1, 2] }),
            json!(["AAPL"]),
            Value::Null,
        ] {
            let err = dashboard.fundamentals().call(input.clone()).await.unwrap_err();
            assert!(
                matches!(err, CoreError::Validation(_)),
                "{input} should fail validation"
            );
        }
    }

    #[tokio::test]
    async fn call_ignores_unknown_keys() {
        let server = Server::new_async().await;
        let dashboard = dashboard_for(&server, Some("tok"));
        let response = dashboard
            .fundamentals()
            .call(json!({ "tickers": [], "extra": true }))
            .await
            .unwrap();
        assert!(response.success);
    }

    #[test]
    fn envelope_wire_format() {
        let ok: ProcedureResponse<Value> = ProcedureResponse::ok(vec![json!({ "symbol": "V" })]);
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "success": true, "data": [{ "symbol": "V" }] })
        );

        let failed: ProcedureResponse<Value> =
            ProcedureResponse::failure(&CoreError::Transport("timed out".into()));
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({ "success": false, "data": [], "error": "Network error: timed out" })
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// bpsp.getHistory
// ═══════════════════════════════════════════════════════════════════

mod bpsp {
    use super::*;

    #[tokio::test]
    async fn success_envelope_is_chronological() {
        let today = chrono::Utc::now().date_naive();
        let recent = today - chrono::Duration::days(10);
        let older = today - chrono::Duration::days(400);

        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(200)
            .with_body(
                json!({
                    "data": [
                        { "date": recent.to_string(), "bp": 2.0 },
                        { "date": older.to_string(), "bp": 1.0 }
                    ]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = dashboard_for(&server, Some("tok")).bpsp().get_history().await;
        assert!(response.success);
        let dates: Vec<_> = response.data.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![older, recent]);
    }

    #[tokio::test]
    async fn failure_envelope() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PATH)
            .with_status(502)
            .with_body("bad gateway")
            .create_async()
            .await;

        let response = dashboard_for(&server, Some("tok")).bpsp().get_history().await;
        assert!(!response.success);
        assert!(response.data.is_empty());
        assert!(response.error.unwrap().contains("502"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Dashboard facade
// ═══════════════════════════════════════════════════════════════════

mod dashboard {
    use super::*;

    #[test]
    fn default_holdings_loaded() {
        let dashboard = Dashboard::new(StoreSettings::default());
        assert_eq!(dashboard.holdings().len(), 21);
        assert!(format!("{:?}", dashboard).contains("MotherDuck"));
    }

    #[test]
    fn portfolio_summary_at_cost() {
        let dashboard = Dashboard::new(StoreSettings::default())
            .with_holdings(vec![Holding::new("AAPL", 181.40, 2865)]);
        let summary = dashboard.portfolio_summary(&HashMap::new());
        assert_eq!(summary.positions, 1);
        assert!((summary.total_cost - 181.40 * 2865.0).abs() < 1e-6);
        assert_eq!(summary.total_value, None);
    }

    #[test]
    fn portfolio_summary_with_prices() {
        let dashboard = Dashboard::new(StoreSettings::default())
            .with_holdings(vec![Holding::new("AAPL", 100.0, 10)]);
        let prices = HashMap::from([("AAPL".to_string(), 120.0)]);
        let summary = dashboard.portfolio_summary(&prices);
        assert_eq!(summary.total_value, Some(1200.0));
        assert_eq!(summary.total_return_pct, Some(20.0));
    }
}
