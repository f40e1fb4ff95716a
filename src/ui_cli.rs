use std::io::{self, Write};

use crate::app::AppError;
use crate::biogas::UnrecognizedEntry;
use crate::catalog::{
    biodigester_models, generator_models, livestock_profiles, substrate_profiles, BiodigesterShape,
};
use crate::i18n::{keys, Translator};
use crate::proposal::ProposalReport;
use crate::viability::ViabilityIssue;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    QuickEstimate,
    Catalog,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_QUICK_ESTIMATE));
    println!("{}", tr.t(keys::MAIN_MENU_CATALOG));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(&tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::QuickEstimate),
            "2" => return Ok(MenuChoice::Catalog),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 간이 평가 입력값.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickEstimateInput {
    pub species: String,
    pub class: String,
    pub headcount: u32,
    pub confinement_hours: f64,
    pub energy_cost_per_kwh: f64,
    pub monthly_bill: f64,
    pub direct_payment: bool,
}

/// 간이 평가 입력을 받는다.
pub fn prompt_quick_estimate(tr: &Translator) -> Result<QuickEstimateInput, AppError> {
    println!("{}", tr.t(keys::QUICK_HEADING));
    println!("{}", tr.t(keys::QUICK_SPECIES_OPTIONS));
    let species = read_line(&tr.t(keys::PROMPT_SPECIES))?.trim().to_string();
    let class = read_line(&tr.t(keys::PROMPT_CLASS))?.trim().to_string();
    let headcount = read_u32(tr, &tr.t(keys::PROMPT_HEADCOUNT))?;
    let confinement_hours = read_f64(tr, &tr.t(keys::PROMPT_CONFINEMENT))?;
    let energy_cost_per_kwh = read_f64(tr, &tr.t(keys::PROMPT_ENERGY_COST))?;
    let monthly_bill = read_f64(tr, &tr.t(keys::PROMPT_MONTHLY_BILL))?;
    let direct_payment = read_line(&tr.t(keys::PROMPT_PAYMENT_METHOD))?.trim() == "2";
    Ok(QuickEstimateInput {
        species,
        class,
        headcount,
        confinement_hours,
        energy_cost_per_kwh,
        monthly_bill,
        direct_payment,
    })
}

/// 언어 설정을 묻는다. 취소하거나 잘못 입력하면 None.
pub fn prompt_language(tr: &Translator, current: &str) -> Result<Option<String>, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {current} ({})",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        tr.language_code()
    );
    let input = read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let code = input.trim().to_lowercase();
    match code.as_str() {
        "" => Ok(None),
        "auto" | "ko" | "en" | "pt" => {
            println!("{} {code}", tr.t(keys::SETTINGS_SAVED));
            Ok(Some(code))
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(None)
        }
    }
}

/// 장비 카탈로그를 표로 출력한다.
pub fn print_catalog(tr: &Translator) {
    println!("{}", tr.t(keys::CATALOG_BIODIGESTERS));
    println!("{:>8} {:>7} {:>6} {:>12}  shape", "m³", "Ø m", "h m", "R$");
    for b in biodigester_models() {
        println!(
            "{:>8.0} {:>7.1} {:>6.1} {:>12.0}  {}",
            b.volume_m3,
            b.diameter_m,
            b.depth_m,
            b.total_cost,
            shape_code(b.shape)
        );
    }
    println!("{}", tr.t(keys::CATALOG_GENERATORS));
    println!(
        "{:<11} {:<12} {:<8} {:>6} {:>8} {:>6} {:>12}  h/day",
        "id", "brand", "model", "kW", "m³/h", "kWh/m³", "R$"
    );
    for g in generator_models() {
        println!(
            "{:<11} {:<12} {:<8} {:>6.0} {:>8.1} {:>6.2} {:>12.0}  {:.0}-{:.0}",
            g.id,
            g.brand,
            g.model,
            g.power_kw,
            g.biogas_consumption_m3_per_h,
            g.conversion_factor,
            g.cost,
            g.min_operating_hours,
            g.max_operating_hours
        );
    }

    println!("{}", tr.t(keys::CATALOG_LIVESTOCK));
    println!(
        "{:<10} {:<14} {:<22} {:>10} {:>9} {:>5}",
        "species", "class", "label", "kgVS/head", "L/kgVS", "eff"
    );
    for p in livestock_profiles() {
        println!(
            "{:<10} {:<14} {:<22} {:>10.3} {:>9.1} {:>5.2}",
            p.species,
            p.class,
            p.label,
            p.vs_kg_per_head_day,
            p.biogas_liters_per_kg_vs,
            p.process_efficiency
        );
    }
    println!("{}", tr.t(keys::CATALOG_SUBSTRATES));
    println!("{:<16} {:<22} {:>8} {:>5}", "kind", "label", "m³/t", "eff");
    for s in substrate_profiles() {
        println!(
            "{:<16} {:<22} {:>8.1} {:>5.2}",
            s.kind, s.label, s.biogas_m3_per_tonne, s.process_efficiency
        );
    }
}

fn shape_code(shape: BiodigesterShape) -> &'static str {
    match shape {
        BiodigesterShape::Circular => "circular",
        BiodigesterShape::Rectangular => "rectangular",
    }
}

/// 판정 항목을 사람이 읽는 문장으로 바꾼다.
pub fn describe_issue(tr: &Translator, issue: &ViabilityIssue) -> String {
    let text = tr.t_code("issue", issue.code());
    let detail = match *issue {
        ViabilityIssue::BiogasTooLow { daily_biogas_m3, minimum } => {
            format!("{daily_biogas_m3:.1} < {minimum:.0} m³/day")
        }
        ViabilityIssue::BiogasBelowIdeal { daily_biogas_m3, ideal } => {
            format!("{daily_biogas_m3:.1} < {ideal:.0} m³/day")
        }
        ViabilityIssue::PowerTooLow { installed_power_kw, minimum } => {
            format!("{installed_power_kw:.1} < {minimum:.0} kW")
        }
        ViabilityIssue::PowerBelowIdeal { installed_power_kw, ideal } => {
            format!("{installed_power_kw:.1} < {ideal:.0} kW")
        }
        ViabilityIssue::BiodigesterOversized { required_volume_m3, maximum } => {
            format!("{required_volume_m3:.0} > {maximum:.0} m³")
        }
        ViabilityIssue::NegativeMonthlyCashFlow { monthly_net_cash_flow } => {
            format!("R$ {monthly_net_cash_flow:.2}")
        }
        ViabilityIssue::PaybackTooLong { payback_years, maximum } => {
            format!("{payback_years:.1} > {maximum:.0}")
        }
        ViabilityIssue::NoPaybackWithinHorizon { horizon_years } => format!("{horizon_years}"),
        ViabilityIssue::InsufficientEnergy { daily_energy_kwh, daily_demand_kwh } => {
            format!("{daily_energy_kwh:.1} < {daily_demand_kwh:.1} kWh/day")
        }
    };
    format!("{text} ({detail})")
}

/// 전체 보고서를 텍스트로 출력한다.
pub fn print_report(tr: &Translator, report: &ProposalReport) {
    println!("{}", tr.t(keys::REPORT_TITLE));
    if let Some(name) = &report.name {
        println!("{name}");
    }
    println!("{} {}", tr.t(keys::LABEL_ROUTE), tr.t_code("route", report.route.code()));

    let y = &report.yield_result;
    println!("{}", tr.t(keys::REPORT_YIELD));
    println!("{} {:.2}", tr.t(keys::LABEL_DAILY_BIOGAS), y.daily_biogas_m3);
    println!("{} {:.0}", tr.t(keys::LABEL_MONTHLY_BIOGAS), y.monthly_biogas_m3());
    println!("{} {:.2}", tr.t(keys::LABEL_DAILY_ENERGY), y.daily_energy_kwh);
    println!("{} {:.2}", tr.t(keys::LABEL_INSTALLED_POWER), y.installed_power_kw);
    println!("{} {:.1}", tr.t(keys::LABEL_REQUIRED_VOLUME), y.required_biodigester_volume_m3);
    if !y.unrecognized.is_empty() {
        println!("{}", tr.t(keys::LABEL_UNRECOGNIZED));
        for entry in &y.unrecognized {
            match entry {
                UnrecognizedEntry::Livestock { species, class } => println!("  - {species}/{class}"),
                UnrecognizedEntry::Substrate { kind } => println!("  - {kind}"),
            }
        }
    }

    let eq = &report.equipment;
    println!("{}", tr.t(keys::REPORT_EQUIPMENT));
    println!(
        "{} {} {:.0} m³",
        tr.t(keys::LABEL_BIODIGESTER),
        shape_code(eq.biodigester_shape),
        eq.biodigester_volume_m3
    );
    println!(
        "{} {} {} - {:.0} kW",
        tr.t(keys::LABEL_GENERATOR),
        eq.generator_brand,
        eq.generator_model,
        eq.generator_power_kw
    );
    println!("{} {:.1}", tr.t(keys::LABEL_OPERATING_HOURS), report.generator_operating_hours);
    if report.requires_custom_engineering {
        println!("! {}", tr.t(keys::LABEL_CUSTOM_ENGINEERING));
    }
    if !eq.generator_in_range {
        println!("! {}", tr.t(keys::LABEL_GENERATOR_FALLBACK));
    }

    println!("{}", tr.t(keys::REPORT_CAPEX));
    for share in report.capex.summary() {
        println!(
            "  {:<36} {:>14.0} {:>6.1}%",
            tr.t_code("capex", share.key.code()),
            share.value,
            share.percentage
        );
    }
    println!("  {:<36} {:>14.0}", tr.t(keys::LABEL_TOTAL), report.capex.total());

    println!("{}", tr.t(keys::REPORT_OPEX));
    for share in report.opex.summary() {
        println!(
            "  {:<36} {:>14.0} {:>6.1}%",
            tr.t_code("opex", share.key.code()),
            share.value,
            share.percentage
        );
    }
    println!("  {:<36} {:>14.0}", tr.t(keys::LABEL_MONTHLY_TOTAL), report.opex.monthly_total());
    println!("  {:<36} {:>14.0}", tr.t(keys::LABEL_ANNUAL_TOTAL), report.opex.annual_total());

    println!("{}", tr.t(keys::REPORT_FINANCING));
    println!("{} {:.0}", tr.t(keys::LABEL_OWN_CAPITAL), report.own_capital);
    println!("{} {:.0}", tr.t(keys::LABEL_FINANCED), report.financed_amount);
    println!("{} {:.2}", tr.t(keys::LABEL_MONTHLY_INSTALLMENT), report.savings.monthly_installment);
    println!("{} {:.2}", tr.t(keys::LABEL_NET_MONTHLY_SAVINGS), report.savings.net_monthly_savings);
    println!(
        "{} {:.2}",
        tr.t(keys::LABEL_MONTHLY_NET_CASH_FLOW),
        report.savings.monthly_net_cash_flow
    );
    if let Some(plan) = &report.payment_plan {
        println!("{}", tr.t(keys::REPORT_PAYMENT_PLAN));
        for stage in plan {
            println!(
                "  {:<24} {:>5.0}% {:>14.0}",
                tr.t_code("milestone", stage.milestone.code()),
                stage.share * 100.0,
                stage.amount
            );
        }
    }

    println!("{}", tr.t(keys::REPORT_CASH_FLOW));
    println!("{}", tr.t(keys::LABEL_CASH_FLOW_HEADER));
    for row in &report.cash_flow.years {
        println!(
            "{:>4} {:>12.0} {:>11.0} {:>11.0} {:>15.0} {:>13.0}",
            row.year,
            row.avoided_cost,
            row.opex,
            row.financing_payment,
            row.simple_cash_flow,
            row.accumulated_cash_flow
        );
    }

    let cf = &report.cash_flow;
    println!("{}", tr.t(keys::REPORT_INDICATORS));
    println!("{} {:.2}", tr.t(keys::LABEL_IRR), cf.irr);
    println!("{} {:.0}", tr.t(keys::LABEL_NPV), cf.npv);
    println!("{} {:.1}", tr.t(keys::LABEL_PAYBACK_SIMPLE), cf.payback_simple);
    println!("{} {:.1}", tr.t(keys::LABEL_PAYBACK_DISCOUNTED), cf.payback_discounted);
    println!("{} {:.2}", tr.t(keys::LABEL_ROI), cf.roi);

    let v = &report.verdict;
    println!("{}", tr.t(keys::REPORT_VERDICT));
    let label = if v.is_viable {
        keys::LABEL_VIABLE
    } else {
        keys::LABEL_NOT_VIABLE
    };
    println!("{} ({} {})", tr.t(label), tr.t(keys::LABEL_SCORE), v.score);
    for issue in &v.issues {
        println!("  - {}", describe_issue(tr, issue));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
