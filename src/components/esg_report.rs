use chrono::Local;
use yew::prelude::*;

use crate::components::status::{Status, StatusKind};
use crate::hooks::screen_state::ScreenView;
use crate::hooks::use_esg_report::use_esg_report;
use crate::models::esg::{EsgModelRow, EsgReport, ReportFormat, quarter_label};
use crate::services::api::ApiConfig;
use crate::services::download::open_report;
use crate::utils::units::{group_thousands, to_fixed};

#[function_component(EsgReportScreen)]
pub fn esg_report_screen() -> Html {
    let state = use_esg_report();
    let preview = use_state(|| false);

    let download = Callback::from(|format: ReportFormat| {
        if let Err(e) = open_report(&ApiConfig::default(), format) {
            gloo::console::error!(&format!("Report download failed: {e}"));
        }
    });
    let on_csv = download.reform(|_: MouseEvent| ReportFormat::Csv);
    let on_pdf = download.reform(|_: MouseEvent| ReportFormat::Pdf);
    let on_preview = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| preview.set(!*preview))
    };

    let body = match state.view() {
        ScreenView::Loading => html! {
            <Status kind={StatusKind::Loading} message="Loading ESG report..." />
        },
        ScreenView::Failed(message) => html! {
            <Status kind={StatusKind::Error} message={message.to_string()} />
        },
        ScreenView::Ready(report) => render_report(report, *preview),
    };

    html! {
        <div class="screen esg-report">
            <section class="card report-actions">
                <div>
                    <h2>{"ESG Compliance Report"}</h2>
                    <p class="period">{quarter_label(Local::now().date_naive())}</p>
                </div>
                <div class="actions">
                    <button class="btn secondary" onclick={on_preview}>
                        { if *preview { "Hide Preview" } else { "Preview" } }
                    </button>
                    <button class="btn primary" onclick={on_csv}>{ReportFormat::Csv.label()}</button>
                    <button class="btn primary" onclick={on_pdf}>{ReportFormat::Pdf.label()}</button>
                </div>
            </section>
            {body}
        </div>
    }
}

fn render_report(report: &EsgReport, preview: bool) -> Html {
    let summary = &report.summary;
    let grade = summary.grade();

    html! {
        <>
            <section class="summary-grid">
                <div class="card summary-item">
                    <h3>{"Total CO₂"}</h3>
                    <p class="summary-value">{summary.co2_display()}</p>
                </div>
                <div class="card summary-item">
                    <h3>{"Total Energy"}</h3>
                    <p class="summary-value">{summary.energy_display()}</p>
                </div>
                <div class="card summary-item">
                    <h3>{"Avg Green Score"}</h3>
                    <p class="summary-value">{summary.score_display()}</p>
                </div>
                <div class="card summary-item">
                    <h3>{"Total Runs"}</h3>
                    <p class="summary-value">{group_thousands(summary.total_runs)}</p>
                </div>
            </section>

            if preview {
                <section class="card executive-summary">
                    <h2>{"Executive Summary"}</h2>
                    <p>{summary.co2_statement()}</p>
                    <p>
                        {"Overall ESG grade: "}
                        <span class="grade">{grade.label()}</span>
                    </p>
                </section>
            }

            <section class="card">
                <h2>{"Model Breakdown"}</h2>
                <table class="report-table">
                    <thead>
                        <tr>
                            <th>{"Model"}</th>
                            <th>{"CO₂ (kg)"}</th>
                            <th>{"Energy (kWh)"}</th>
                            <th>{"Efficiency"}</th>
                            <th>{"Runs"}</th>
                            <th>{"Rating"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for report.models.iter().map(model_row) }
                    </tbody>
                </table>
            </section>
        </>
    }
}

fn model_row(row: &EsgModelRow) -> Html {
    html! {
        <tr key={row.model.clone()}>
            <td>{&row.model}</td>
            <td>{to_fixed(row.co2_kg, 6)}</td>
            <td>{to_fixed(row.energy_kwh, 6)}</td>
            <td>{row.efficiency_display()}</td>
            <td>{group_thousands(row.runs)}</td>
            <td><span class="grade">{row.rating().label()}</span></td>
        </tr>
    }
}
