#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::future::ready;
    use green_model_dashboard::hooks::screen_state::{ScreenAction, ScreenView};
    use green_model_dashboard::hooks::use_comparison::{ComparisonAction, ComparisonState};
    use green_model_dashboard::hooks::use_dashboard::DashboardState;
    use green_model_dashboard::hooks::use_esg_report::EsgReportState;
    use green_model_dashboard::hooks::use_recommendations::{
        RecommendationsAction, RecommendationsState, recommendations_or_empty,
    };
    use green_model_dashboard::models::{
        comparison::{ModelCompareModel, ModelComparison},
        dashboard::{
            DashboardInsights, DashboardMetrics, DashboardSnapshot, DashboardTrends,
            EnergyTrendPoint, MostUsedModel, UNAVAILABLE,
        },
        error::AppError,
        esg::{EsgModelRow, EsgSummary},
        navigation::{MenuItem, Screen},
        recommendations::{Impact, Recommendation},
    };
    use green_model_dashboard::services::api::{
        Endpoint, join_dashboard, join_esg_report, parse_payload,
    };
    use std::rc::Rc;
    use yew::Reducible;

    // Helper function to create a well-formed dashboard round
    fn create_test_snapshot() -> Result<DashboardSnapshot, AppError> {
        block_on(join_dashboard(
            ready(Ok(DashboardMetrics {
                co2_kg: 0.0042,
                energy_kwh: 1.25,
                green_score: 87.3,
            })),
            ready(Ok(DashboardInsights {
                energy_trend: vec![
                    EnergyTrendPoint {
                        label: "Mon".to_string(),
                        energy: 0.4,
                    },
                    EnergyTrendPoint {
                        label: "Tue".to_string(),
                        energy: 0.85,
                    },
                ],
                ..Default::default()
            })),
            ready(Ok(DashboardTrends {
                co2_change_pct: Some(-12.5),
                energy_change_pct: None,
                green_score_change_pct: Some(3.0),
            })),
        ))
    }

    fn create_test_models() -> ModelComparison {
        let model = |name: &str, efficiency: f64| ModelCompareModel {
            name: name.to_string(),
            co2_kg: 0.5,
            energy_kwh: 0.002,
            gpu_hours: 1.5,
            efficiency,
            usage: 10,
        };

        ModelComparison {
            models: vec![
                model("gpt-4", 72.0),
                model("bert-large", 91.0),
                model("llama-3", 85.0),
                model("t5-base", 60.0),
                model("mistral-7b", 78.0),
            ],
        }
    }

    fn create_test_recommendations() -> Vec<Recommendation> {
        vec![
            Recommendation {
                title: "Use mixed precision".to_string(),
                description: "Switch from fp32 to fp16".to_string(),
                impact: Impact::High,
                co2_saving_kg: 12.5,
                impact_color: String::new(),
            },
            Recommendation {
                title: "Shift to a greener region".to_string(),
                description: "Run batch jobs where the grid is cleaner".to_string(),
                impact: Impact::Medium,
                co2_saving_kg: 4.0,
                impact_color: String::new(),
            },
        ]
    }

    fn resolve(
        state: DashboardState,
        round: u64,
        result: Result<DashboardSnapshot, String>,
    ) -> Rc<DashboardState> {
        Rc::new(state).reduce(ScreenAction::Resolved { round, result })
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_fetch_display() {
        let error = AppError::Fetch {
            endpoint: "/api/dashboard/metrics",
            status: 500,
        };
        assert_eq!(
            error.to_string(),
            "Failed to fetch /api/dashboard/metrics: HTTP 500"
        );
    }

    #[test]
    fn test_app_error_validation_display() {
        let error = AppError::Validation {
            endpoint: "/api/esg/summary",
            message: "missing field `total_runs`".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid response from /api/esg/summary: missing field `total_runs`"
        );
    }

    // ===== Dashboard Load Tests =====

    #[test]
    fn test_dashboard_round_success() {
        let snapshot = create_test_snapshot().unwrap();
        let state = resolve(DashboardState::default(), 1, Ok(snapshot));

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(matches!(state.view(), ScreenView::Ready(_)));

        let kpis = state.data.as_ref().unwrap().kpis();
        assert!(kpis.iter().all(|k| !k.value.is_empty() && k.value != UNAVAILABLE));
        assert_eq!(kpis[0].value, "4.20 g");
        assert_eq!(kpis[1].value, "1.25 kWh");
        assert_eq!(kpis[2].value, "87.3");
    }

    #[test]
    fn test_dashboard_initially_loading() {
        let state = DashboardState::default();
        assert!(state.loading);
        assert_eq!(state.view(), ScreenView::Loading);
    }

    #[test]
    fn test_dashboard_join_fails_when_one_endpoint_fails() {
        let result = block_on(join_dashboard(
            ready(Ok(DashboardMetrics {
                co2_kg: 1.0,
                energy_kwh: 1.0,
                green_score: 50.0,
            })),
            ready(Err(AppError::Fetch {
                endpoint: Endpoint::DashboardInsights.path(),
                status: 500,
            })),
            ready(Ok(DashboardTrends::default())),
        ));

        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch /api/dashboard/insights: HTTP 500"
        );

        let state = resolve(DashboardState::default(), 1, Err(err.to_string()));
        assert!(!state.loading);
        match state.view() {
            ScreenView::Failed(message) => assert!(!message.is_empty()),
            other => panic!("expected error view, got {other:?}"),
        }
    }

    #[test]
    fn test_dashboard_stale_round_is_ignored() {
        let fresh = create_test_snapshot().unwrap();
        let state = resolve(DashboardState::default(), 2, Ok(fresh.clone()));

        let mut stale = fresh;
        stale.metrics.green_score = 10.0;
        let state = Rc::clone(&state).reduce(ScreenAction::Resolved {
            round: 1,
            result: Ok(stale),
        });

        assert_eq!(state.last_round(), 2);
        assert_eq!(state.data.as_ref().unwrap().metrics.green_score, 87.3);
    }

    #[test]
    fn test_dashboard_failure_keeps_data_then_recovers() {
        let snapshot = create_test_snapshot().unwrap();
        let state = resolve(DashboardState::default(), 1, Ok(snapshot.clone()));

        let state = state.reduce(ScreenAction::Resolved {
            round: 2,
            result: Err("Network error: offline".to_string()),
        });
        assert_eq!(state.error.as_deref(), Some("Network error: offline"));
        assert!(state.data.is_some());

        let state = state.reduce(ScreenAction::Resolved {
            round: 3,
            result: Ok(snapshot),
        });
        assert!(state.error.is_none());
        assert!(matches!(state.view(), ScreenView::Ready(_)));
    }

    #[test]
    fn test_dashboard_invalid_magnitude_renders_placeholder() {
        let mut snapshot = create_test_snapshot().unwrap();
        snapshot.metrics.co2_kg = f64::NAN;
        assert_eq!(snapshot.kpis()[0].value, UNAVAILABLE);
    }

    #[test]
    fn test_dashboard_trend_captions() {
        let kpis = create_test_snapshot().unwrap().kpis();
        assert_eq!(kpis[0].trend.text, "-12.5% reduction");
        assert!(!kpis[0].trend.flipped);
        assert_eq!(kpis[1].trend.text, "No data");
        assert_eq!(kpis[2].trend.text, "3% improvement");
        assert!(kpis[2].trend.flipped);
    }

    #[test]
    fn test_out_of_range_scores_are_clamped_for_display() {
        let mut snapshot = create_test_snapshot().unwrap();
        snapshot.metrics.green_score = 140.0;
        assert_eq!(snapshot.kpis()[2].value, "100.0");
        assert_eq!(snapshot.score_dasharray(), "100, 100");
        assert_eq!(snapshot.metrics.green_score, 140.0);

        let most_used = MostUsedModel {
            name: "gpt-4".to_string(),
            usage: 3,
            co2: 0.2,
            efficiency: 120.0,
        };
        assert_eq!(most_used.efficiency_display(), "100.0%");

        let mut compared = create_test_models().models.remove(0);
        compared.efficiency = -5.0;
        assert_eq!(compared.efficiency_display(), "0.0%");

        let summary = EsgSummary {
            total_co2_kg: 1.0,
            total_energy_kwh: 1.0,
            avg_green_score: 104.6,
            total_runs: 1,
        };
        assert_eq!(summary.score_display(), "100.0");

        let row = EsgModelRow {
            model: "bert-large".to_string(),
            co2_kg: 0.1,
            energy_kwh: 0.1,
            efficiency: 250.0,
            runs: 1,
        };
        assert_eq!(row.efficiency_display(), "100.0%");
    }

    // ===== Wire Count Tests =====

    #[test]
    fn test_counts_sent_as_whole_floats_are_accepted() {
        let json = r#"{ "models": [
            { "name": "gpt-4", "co2_kg": 0.5, "energy_kwh": 1.0, "gpu_hours": 2.0, "efficiency": 80, "usage": 12.0 }
        ] }"#;
        let comparison = parse_payload::<ModelComparison>(Endpoint::ModelsCompare, json).unwrap();
        assert_eq!(comparison.models[0].usage, 12);

        let json = r#"{ "most_used_models": [
            { "name": "gpt-4", "usage": 1200.0, "co2": 0.3, "efficiency": 70 }
        ] }"#;
        let insights =
            parse_payload::<DashboardInsights>(Endpoint::DashboardInsights, json).unwrap();
        assert_eq!(insights.most_used_models[0].usage, 1200);

        let json = r#"{ "total_co2_kg": 1.5, "total_energy_kwh": 2, "avg_green_score": 75, "total_runs": 7.0 }"#;
        let summary = parse_payload::<EsgSummary>(Endpoint::EsgSummary, json).unwrap();
        assert_eq!(summary.total_runs, 7);

        let json = r#"[ { "model": "bert-large", "co2_kg": 0.1, "energy_kwh": 0.2, "efficiency": 90, "runs": 3.0 } ]"#;
        let rows = parse_payload::<Vec<EsgModelRow>>(Endpoint::EsgModels, json).unwrap();
        assert_eq!(rows[0].runs, 3);
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        let json = r#"{ "models": [
            { "name": "gpt-4", "co2_kg": 0.5, "energy_kwh": 1.0, "gpu_hours": 2.0, "efficiency": 80, "usage": 12.5 }
        ] }"#;
        let err = parse_payload::<ModelComparison>(Endpoint::ModelsCompare, json).unwrap_err();
        assert!(matches!(err, AppError::Validation { endpoint: "/api/models/compare", .. }));
    }

    // ===== ESG Report Tests =====

    #[test]
    fn test_esg_report_join_and_grade() {
        let summary = EsgSummary {
            total_co2_kg: 0.0,
            total_energy_kwh: 0.5,
            avg_green_score: 92.0,
            total_runs: 0,
        };
        let rows = vec![EsgModelRow {
            model: "bert-large".to_string(),
            co2_kg: 0.01,
            energy_kwh: 0.02,
            efficiency: 65.0,
            runs: 4,
        }];

        let report = block_on(join_esg_report(ready(Ok(summary)), ready(Ok(rows)))).unwrap();
        assert_eq!(report.summary.grade().label(), "A+");
        assert_eq!(report.summary.co2_statement(), "No emissions recorded yet.");
        assert_eq!(report.models[0].rating().label(), "C");

        let state = Rc::new(EsgReportState::default()).reduce(ScreenAction::Resolved {
            round: 1,
            result: Ok(report),
        });
        assert!(matches!(state.view(), ScreenView::Ready(_)));
    }

    #[test]
    fn test_esg_summary_rejects_malformed_payload() {
        let json = r#"{ "total_co2_kg": "lots", "total_energy_kwh": 1, "avg_green_score": 50, "total_runs": 1 }"#;
        let err = parse_payload::<EsgSummary>(Endpoint::EsgSummary, json).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    // ===== Comparison Tests =====

    fn loaded_comparison() -> Rc<ComparisonState> {
        Rc::new(ComparisonState::default())
            .reduce(ComparisonAction::Resolved(Ok(create_test_models())))
    }

    #[test]
    fn test_comparison_selects_first_three() {
        let state = loaded_comparison();
        let selected: Vec<&str> = state.selected.iter().collect();
        assert_eq!(selected, vec!["gpt-4", "bert-large", "llama-3"]);
    }

    #[test]
    fn test_comparison_duplicate_selection_is_removed() {
        let state = loaded_comparison().reduce(ComparisonAction::SelectSlot {
            slot: 1,
            model: Some("gpt-4".to_string()),
        });
        let selected: Vec<&str> = state.selected.iter().collect();
        assert_eq!(selected, vec!["gpt-4", "llama-3"]);
    }

    #[test]
    fn test_comparison_unknown_model_is_ignored() {
        let before = loaded_comparison();
        let after = Rc::clone(&before).reduce(ComparisonAction::SelectSlot {
            slot: 0,
            model: Some("not-a-model".to_string()),
        });
        assert_eq!(after.selected, before.selected);
    }

    #[test]
    fn test_comparison_best_model_follows_selection() {
        let state = loaded_comparison();
        let comparison = state.load.data.as_ref().unwrap();
        assert_eq!(comparison.best_model(&state.selected).unwrap().name, "bert-large");

        let state = state.reduce(ComparisonAction::SelectSlot {
            slot: 1,
            model: Some("mistral-7b".to_string()),
        });
        let comparison = state.load.data.as_ref().unwrap();
        assert_eq!(comparison.best_model(&state.selected).unwrap().name, "llama-3");
    }

    #[test]
    fn test_comparison_selection_before_load_is_ignored() {
        let state = Rc::new(ComparisonState::default()).reduce(ComparisonAction::SelectSlot {
            slot: 0,
            model: Some("gpt-4".to_string()),
        });
        assert!(state.selected.is_empty());
        assert_eq!(state.load.view(), ScreenView::Loading);
    }

    #[test]
    fn test_comparison_failure_shows_error() {
        let state = Rc::new(ComparisonState::default()).reduce(ComparisonAction::Resolved(Err(
            "Failed to fetch /api/models/compare: HTTP 503".to_string(),
        )));
        assert!(matches!(state.load.view(), ScreenView::Failed(_)));
        assert!(state.selected.is_empty());
    }

    // ===== Recommendations Tests =====

    #[test]
    fn test_recommendations_failure_degrades_to_empty() {
        let items = recommendations_or_empty(Err(AppError::Network("offline".to_string())));
        let state = Rc::new(RecommendationsState::default())
            .reduce(RecommendationsAction::Loaded(items));
        assert!(!state.loading);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_recommendations_apply_and_details() {
        let state = Rc::new(RecommendationsState::default())
            .reduce(RecommendationsAction::Loaded(create_test_recommendations()));

        let state = state.reduce(RecommendationsAction::Apply(1));
        assert!(state.applied.contains(1));
        assert!(!state.applied.contains(0));

        let state = state.reduce(RecommendationsAction::Show(0));
        assert_eq!(state.selected_item().unwrap().title, "Use mixed precision");

        let state = state.reduce(RecommendationsAction::Dismiss);
        assert!(state.selected_item().is_none());
        assert!(state.applied.contains(1));
    }

    #[test]
    fn test_recommendations_out_of_range_index_is_ignored() {
        let state = Rc::new(RecommendationsState::default())
            .reduce(RecommendationsAction::Loaded(create_test_recommendations()));
        let state = state.reduce(RecommendationsAction::Apply(7));
        let state = state.reduce(RecommendationsAction::Show(7));
        assert!(state.applied.is_empty());
        assert!(state.selected.is_none());
    }

    // ===== Navigation Tests =====

    #[test]
    fn test_every_menu_item_maps_to_a_screen() {
        let screens: Vec<Screen> = MenuItem::all().iter().map(MenuItem::screen).collect();
        assert_eq!(
            screens,
            vec![
                Screen::Dashboard,
                Screen::Dashboard,
                Screen::Comparison,
                Screen::Recommendations,
                Screen::Reports,
                Screen::Dashboard,
            ]
        );
    }
}
