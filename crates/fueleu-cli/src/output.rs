//! Output formatting module

use std::fmt::Write;

use serde::Serialize;

use fueleu_app::app::{
    AdjustedCbReport, ApplyReport, AvailableReport, BankReport, CbReport, ComparisonReport,
    PoolReport,
};
use fueleu_domain::model::{BankEntry, Route};
use fueleu_types::{OutputFormat, Result};

/// Print `value` as JSON, or the table produced by `table`
pub fn emit<T, F>(format: OutputFormat, value: &T, table: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => print_json(value)?,
        OutputFormat::Table => print!("{}", table(value)),
    }
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_routes(routes: &[Route]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<8} {:<12} {:<6} {:>5} {:>10} {:>10} {:>10} {:>10}  {}",
        "ID", "Route", "Vessel", "Fuel", "Year", "gCO2e/MJ", "Fuel(t)", "Dist(km)", "CO2e(t)", "Baseline"
    );
    let _ = writeln!(out, "{}", "-".repeat(100));
    for r in routes {
        let _ = writeln!(
            out,
            "{:>4}  {:<8} {:<12} {:<6} {:>5} {:>10.4} {:>10.1} {:>10.1} {:>10.1}  {}",
            r.id,
            r.route_id,
            r.vessel_type,
            r.fuel_type,
            r.year,
            r.ghg_intensity,
            r.fuel_consumption_t,
            r.distance_km,
            r.total_emissions_t,
            if r.is_baseline { "*" } else { "" }
        );
    }
    let _ = writeln!(out, "\n{} route(s)", routes.len());
    out
}

pub fn format_comparison(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Baseline: {} ({:.4} gCO2e/MJ)\n",
        report.baseline.route_id, report.baseline.ghg_intensity
    );
    let _ = writeln!(
        out,
        "{:<8} {:>12} {:>12} {:>10}  {}",
        "Route", "Baseline", "Compared", "Diff(%)", "Compliant"
    );
    let _ = writeln!(out, "{}", "-".repeat(58));
    for c in &report.comparisons {
        let _ = writeln!(
            out,
            "{:<8} {:>12.4} {:>12.4} {:>+10.2}  {}",
            c.route_id,
            c.baseline,
            c.comparison,
            c.percent_diff,
            if c.compliant { "yes" } else { "no" }
        );
    }
    out
}

pub fn format_cb(report: &CbReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Compliance Balance: {} ({})", report.ship_id, report.year);
    let _ = writeln!(out, "  CB before: {:>14.3} tCO2e  {}", report.cb_before, balance_label(report.cb_before));
    let _ = writeln!(out, "  Applied:   {:>14.3} tCO2e", report.applied);
    let _ = writeln!(out, "  CB after:  {:>14.3} tCO2e", report.cb_after);
    out
}

pub fn format_adjusted_cb(report: &AdjustedCbReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Adjusted Compliance Balance: {} ({})", report.ship_id, report.year);
    let _ = writeln!(out, "  CB before: {:>14.3} tCO2e  {}", report.cb_before, balance_label(report.cb_before));
    let _ = writeln!(out, "  Banked:    {:>14.3} tCO2e", report.banked);
    let _ = writeln!(out, "  Applied:   {:>14.3} tCO2e", report.applied);
    let _ = writeln!(out, "  CB after:  {:>14.3} tCO2e", report.cb_after);
    out
}

pub fn format_bank_records(entries: &[BankEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<8} {:>5} {:>14}  {}",
        "ID", "Ship", "Year", "Amount(t)", "Created"
    );
    let _ = writeln!(out, "{}", "-".repeat(60));
    for e in entries {
        let _ = writeln!(
            out,
            "{:>4}  {:<8} {:>5} {:>+14.3}  {}",
            e.id,
            e.ship_id,
            e.year,
            e.amount_t,
            e.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
    let _ = writeln!(out, "\n{} entr{}", entries.len(), if entries.len() == 1 { "y" } else { "ies" });
    out
}

pub fn format_available(report: &AvailableReport) -> String {
    format!(
        "Banked surplus available for {} ({}): {:.3} tCO2e\n",
        report.ship_id, report.year, report.available_t
    )
}

pub fn format_bank_report(report: &BankReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Banked surplus: {} ({})", report.ship_id, report.year);
    let _ = writeln!(out, "  CB before: {:>14.3} tCO2e", report.cb_before);
    let _ = writeln!(out, "  Banked:    {:>14.3} tCO2e  (entry #{})", report.banked, report.entry.id);
    let _ = writeln!(out, "  CB after:  {:>14.3} tCO2e", report.cb_after);
    out
}

pub fn format_apply_report(report: &ApplyReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Applied banked surplus: {} ({})", report.ship_id, report.year);
    let _ = writeln!(out, "  CB before: {:>14.3} tCO2e", report.cb_before);
    let _ = writeln!(out, "  Applied:   {:>14.3} tCO2e  (entry #{})", report.applied, report.entry.id);
    let _ = writeln!(out, "  CB after:  {:>14.3} tCO2e", report.cb_after);
    out
}

pub fn format_pool(report: &PoolReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Pool #{} ({}), created {}",
        report.pool.pool_id,
        report.pool.year,
        report.pool.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "  {:<8} {:>14} {:>14}", "Ship", "CB before", "CB after");
    for m in &report.pool.members {
        let _ = writeln!(out, "  {:<8} {:>14.3} {:>14.3}", m.ship_id, m.cb_before, m.cb_after);
    }
    let _ = writeln!(
        out,
        "  {:<8} {:>14.3} {:>14.3}",
        "Total", report.totals.cb_before, report.totals.cb_after
    );
    if report.totals.uncovered_deficit > 0.0 {
        let _ = writeln!(
            out,
            "  Uncovered deficit: {:.3} tCO2e (not carried by any member)",
            report.totals.uncovered_deficit
        );
    }
    out
}

pub fn format_pools(reports: &[PoolReport]) -> String {
    if reports.is_empty() {
        return "No pools\n".to_string();
    }
    reports.iter().map(format_pool).collect::<Vec<_>>().join("\n")
}

fn balance_label(cb_t: f64) -> &'static str {
    if cb_t > 0.0 {
        "(surplus)"
    } else if cb_t < 0.0 {
        "(deficit)"
    } else {
        ""
    }
}
