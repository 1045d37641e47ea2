use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    client::ClientProfile,
    core::{
        analysis::AnalysisResult,
        capacitor::{CATALOG, CapacitorBank},
        summary::AuditSummary,
    },
    quantity::{cost::Cost, ratios::Percentage},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn money(currency: &str, cost: Cost) -> Cell {
    Cell::new(format!("{currency} {cost}")).set_alignment(CellAlignment::Right)
}

fn penalty(currency: &str, cost: Cost) -> Cell {
    money(currency, cost).fg(if cost >= Cost::ONE_CENT { Color::Red } else { Color::Green })
}

pub fn build_client_table(client: &ClientProfile) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Client", "Group", "Utility", "State"]);
    table.add_row(vec![
        Cell::new(&client.name).add_attribute(Attribute::Bold),
        Cell::new(client.tariff_group),
        Cell::new(&client.utility),
        Cell::new(&client.state),
    ]);
    if let Some(building_manager) = &client.building_manager {
        table.add_row(vec![Cell::new("Building manager"), Cell::new(building_manager)]);
    }
    if let Some(engineer) = &client.engineer {
        table.add_row(vec![Cell::new("Engineer"), Cell::new(engineer)]);
    }
    table
}

pub fn build_summary_table(summary: &AuditSummary, currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Total potential savings", "Reactive penalties", "Demand penalties"]);
    table.add_row(vec![
        money(currency, summary.total_potential_savings).add_attribute(Attribute::Bold),
        penalty(currency, summary.total_reactive_penalty),
        penalty(currency, summary.total_demand_penalty),
    ]);
    table
}

pub fn build_analysis_table(analyses: &[AnalysisResult], currency: &str) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Period",
        "Power factor",
        "Reactive penalty",
        "Demand use",
        "Demand penalty",
        "Capacitor bank",
    ]);
    for analysis in analyses {
        table.add_row(vec![
            Cell::new(analysis.period),
            Cell::new(analysis.power_factor).fg(if analysis.is_power_factor_compliant {
                Color::Green
            } else {
                Color::Red
            }),
            penalty(currency, analysis.reactive_penalty),
            Cell::new(format!("{:.0}", analysis.demand_utilization))
                .set_alignment(CellAlignment::Right)
                .fg(if analysis.demand_utilization > Percentage(100.0) {
                    Color::Red
                } else {
                    Color::Reset
                }),
            penalty(currency, analysis.demand_penalty),
            match analysis.capacitor_bank {
                CapacitorBank::NotRequired => Cell::new("-").add_attribute(Attribute::Dim),
                CapacitorBank::Recommended { commercial, .. } => {
                    Cell::new(commercial).set_alignment(CellAlignment::Right).fg(Color::DarkYellow)
                }
            },
        ]);
    }
    table
}

pub fn build_catalog_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Capacitor bank rating"]);
    for rating in CATALOG {
        table.add_row(vec![Cell::new(rating).set_alignment(CellAlignment::Right)]);
    }
    table
}
