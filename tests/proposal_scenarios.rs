//! 입력 파일 단위 전체 산출 시나리오.
use biogas_viability::config::Config;
use biogas_viability::finance::{PaymentMethod, MAX_TERM_MONTHS};
use biogas_viability::proposal::{run_proposal, ProposalInput, TechnologicalRoute};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

const SWINE_FARM: &str = r#"
name = "Granja Boa Vista"

[[livestock]]
species = "swine"
class = "finishing"
headcount = 5000
confinement_hours = 18.0

[current_costs]
energy_cost_per_kwh = 0.85
monthly_bill = 5000.0
"#;

fn parse(src: &str) -> ProposalInput {
    match ProposalInput::from_toml_str(src) {
        Ok(input) => input,
        Err(e) => panic!("input should parse: {e}"),
    }
}

#[test]
fn swine_farm_is_viable() {
    let input = parse(SWINE_FARM);
    let report = run_proposal(&input, &Config::default());

    assert_eq!(report.name.as_deref(), Some("Granja Boa Vista"));
    assert_eq!(report.route, TechnologicalRoute::Manure);
    assert_close("biogas", report.yield_result.daily_biogas_m3, 711.75, 1e-9);
    assert_eq!(report.equipment.generator_id, "cat-180");
    assert!(!report.requires_custom_engineering);
    assert_close("capex", report.capex.total(), 933_107.0, 0.5);
    assert_close("opex", report.opex.monthly_total(), 12_282.0, 0.5);

    assert_close("own", report.own_capital, 933_107.0 * 0.2, 1e-6);
    assert_close(
        "split",
        report.own_capital + report.financed_amount,
        report.capex.total(),
        1e-6,
    );
    assert_close(
        "consumption",
        report.savings.monthly_consumption_kwh,
        5000.0 / 0.85,
        1e-9,
    );
    assert_close(
        "gross savings",
        report.savings.gross_monthly_savings,
        42_705.0 * 0.85,
        1e-6,
    );
    assert_close(
        "net savings",
        report.savings.net_monthly_savings,
        42_705.0 * 0.85 * 0.9,
        1e-6,
    );
    assert!(report.savings.monthly_net_cash_flow > 0.0);

    let cf = &report.cash_flow;
    assert_eq!(cf.horizon_years(), 20);
    assert!(cf.pays_back());
    assert!(cf.payback_simple < 15.0, "payback {}", cf.payback_simple);
    assert!(cf.irr > 0.0);
    assert!(cf.npv > 0.0);

    assert!(report.verdict.is_viable, "{:?}", report.verdict.issues);
    assert_eq!(report.verdict.score, 100);
    assert!(report.payment_plan.is_none());
}

#[test]
fn swine_farm_meets_stricter_payback_limit() {
    let input = parse(SWINE_FARM);
    let mut config = Config::default();
    config.viability.max_payback_years = 15.0;
    let report = run_proposal(&input, &config);
    assert!(report.verdict.is_viable);
}

#[test]
fn cheap_energy_is_not_worth_it() {
    let src = SWINE_FARM.replace("energy_cost_per_kwh = 0.85", "energy_cost_per_kwh = 0.05");
    let report = run_proposal(&parse(&src), &Config::default());
    assert!(report.savings.monthly_net_cash_flow < 0.0);
    assert!(report.verdict.has_issue("negative_monthly_cash_flow"));
    assert!(!report.verdict.is_viable);
}

#[test]
fn empty_farm_still_prices_a_minimum_plant() {
    let src = r#"
[current_costs]
energy_cost_per_kwh = 0.85
monthly_bill = 1000.0
"#;
    let report = run_proposal(&parse(src), &Config::default());
    assert_eq!(report.route, TechnologicalRoute::Generic);
    assert_eq!(report.yield_result.daily_biogas_m3, 0.0);
    assert_eq!(report.equipment.generator_id, "mwm-25");
    assert!(!report.equipment.generator_in_range);
    assert_close("capex", report.capex.total(), 332_123.0, 0.5);
    assert_close("opex", report.opex.monthly_total(), 3_350.0, 0.5);

    let verdict = &report.verdict;
    assert!(!verdict.is_viable);
    for code in ["biogas_too_low", "power_too_low", "insufficient_energy"] {
        assert!(verdict.has_issue(code), "missing {code}");
    }
}

#[test]
fn direct_payment_adds_staged_plan() {
    let src = format!("{SWINE_FARM}\n[financing]\nmethod = \"direct\"\n");
    let report = run_proposal(&parse(&src), &Config::default());
    assert_eq!(report.financing.method, PaymentMethod::Direct);
    assert_eq!(report.financing.term_months, 60);

    let plan = match &report.payment_plan {
        Some(plan) => plan,
        None => panic!("direct payment should carry a staged plan"),
    };
    assert_eq!(plan.len(), 5);
    let staged: f64 = plan.iter().map(|s| s.amount).sum();
    assert_close("staged", staged, report.capex.total(), 1e-6);
}

#[test]
fn payment_method_changes_installment() {
    let direct_src = format!("{SWINE_FARM}\n[financing]\nmethod = \"direct\"\n");
    let financed = run_proposal(&parse(SWINE_FARM), &Config::default());
    let direct = run_proposal(&parse(&direct_src), &Config::default());
    assert!(
        (financed.savings.monthly_installment - direct.savings.monthly_installment).abs() > 1.0
    );
}

#[test]
fn financing_overrides_apply() {
    let src = format!(
        "{SWINE_FARM}\n[financing]\nown_capital_fraction = 1.0\nterm_months = 24\namortization = \"sac\"\n"
    );
    let report = run_proposal(&parse(&src), &Config::default());
    assert_close("own", report.own_capital, report.capex.total(), 1e-6);
    assert_eq!(report.financed_amount, 0.0);
    assert_eq!(report.savings.monthly_installment, 0.0);
    assert!(report
        .cash_flow
        .years
        .iter()
        .all(|y| y.amortization == 0.0 && y.interest == 0.0));
}

#[test]
fn substrates_change_the_route() {
    let src = format!(
        "{SWINE_FARM}\n[[substrates]]\nkind = \"rso\"\ndaily_mass = 2.0\nunit = \"tonne\"\n"
    );
    let report = run_proposal(&parse(&src), &Config::default());
    assert_eq!(report.route, TechnologicalRoute::CoDigestion);
    assert!(report.yield_result.substrate_biogas_m3 > 0.0);

    assert_eq!(
        TechnologicalRoute::classify(false, true),
        TechnologicalRoute::OrganicWaste
    );
    assert_eq!(TechnologicalRoute::CoDigestion.code(), "co_digestion");
}

#[test]
fn same_input_same_report() {
    let input = parse(SWINE_FARM);
    let a = run_proposal(&input, &Config::default());
    let b = run_proposal(&input, &Config::default());
    assert_eq!(a.capex, b.capex);
    assert_eq!(a.cash_flow, b.cash_flow);
    assert_eq!(a.verdict, b.verdict);
}

#[test]
fn report_serializes_to_json() {
    let report = run_proposal(&parse(SWINE_FARM), &Config::default());
    let json = match serde_json::to_value(&report) {
        Ok(v) => v,
        Err(e) => panic!("report should serialize: {e}"),
    };
    assert_eq!(json["route"], "manure");
    assert_eq!(json["verdict"]["is_viable"], true);
    assert_eq!(json["cash_flow"]["years"].as_array().map(Vec::len), Some(20));
    assert!(json["capex"]["total"].as_f64().is_some());
    assert!(json["opex"]["monthly_total"].as_f64().is_some());
}

#[test]
fn missing_current_costs_is_rejected() {
    let src = r#"
[[livestock]]
species = "swine"
class = "finishing"
headcount = 10
confinement_hours = 24.0
"#;
    assert!(ProposalInput::from_toml_str(src).is_err());
}

#[test]
fn oversized_loan_term_is_capped() {
    let src = format!("{SWINE_FARM}\n[financing]\nterm_months = 4000000000\n");
    let report = run_proposal(&parse(&src), &Config::default());
    assert_eq!(report.financing.term_months, MAX_TERM_MONTHS);
    assert!(report.savings.monthly_installment > 0.0);
    assert_eq!(report.cash_flow.horizon_years(), 20);
}
