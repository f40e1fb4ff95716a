//! 연도별 현금흐름 전망 테스트.
use biogas_viability::finance::{
    project_cash_flow, staged_payment_plan, CashFlowInput, FinancingConfig, PaymentMethod,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn sample_input() -> CashFlowInput {
    CashFlowInput {
        capex_total: 1_000_000.0,
        own_capital: 200_000.0,
        financed_amount: 800_000.0,
        annual_savings: 450_000.0,
        annual_revenue: 0.0,
        annual_taxes: 45_000.0,
        annual_opex: 150_000.0,
    }
}

#[test]
fn projection_length_matches_horizon() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    for horizon in [1u32, 5, 10, 20, 25] {
        let projected = project_cash_flow(&sample_input(), &cfg, horizon);
        assert_eq!(projected.horizon_years(), horizon as usize);
        let numbered: Vec<u32> = projected.years.iter().map(|y| y.year).collect();
        assert_eq!(numbered, (1..=horizon).collect::<Vec<_>>());
    }
}

#[test]
fn zero_horizon_yields_empty_projection() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    let projected = project_cash_flow(&sample_input(), &cfg, 0);
    assert!(projected.years.is_empty());
    assert_eq!(projected.irr, 0.0);
    assert_eq!(projected.npv, 0.0);
    assert_eq!(projected.payback_simple, 0.0);
    assert_eq!(projected.roi, 0.0);
    assert!(!projected.pays_back());
}

#[test]
fn accumulated_series_start_from_own_capital() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    let input = sample_input();
    let projected = project_cash_flow(&input, &cfg, 20);

    let mut accumulated = -input.own_capital;
    let mut accumulated_discounted = -input.own_capital;
    for y in &projected.years {
        accumulated += y.simple_cash_flow;
        let expected_discounted =
            y.simple_cash_flow / (1.0 + cfg.discount_rate).powi(y.year as i32);
        accumulated_discounted += expected_discounted;
        assert_close("discounted", y.discounted_cash_flow, expected_discounted, 1e-6);
        assert_close("accumulated", y.accumulated_cash_flow, accumulated, 1e-6);
        assert_close(
            "accumulated discounted",
            y.accumulated_discounted,
            accumulated_discounted,
            1e-6,
        );
    }
}

#[test]
fn escalation_and_inflation_compound_from_year_one() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    let input = sample_input();
    let projected = project_cash_flow(&input, &cfg, 3);
    let first = projected.years[0];
    assert_close("year 1 savings", first.avoided_cost, input.annual_savings, 1e-9);
    assert_close("year 1 opex", first.opex, input.annual_opex, 1e-9);

    let third = projected.years[2];
    assert_close(
        "year 3 savings",
        third.avoided_cost,
        input.annual_savings * (1.0 + cfg.revenue_escalation_rate).powi(2),
        1e-6,
    );
    assert_close(
        "year 3 opex",
        third.opex,
        input.annual_opex * (1.0 + cfg.opex_inflation_rate).powi(2),
        1e-6,
    );
    assert_close(
        "tax escalates with savings",
        third.tax_on_revenue,
        input.annual_taxes * (1.0 + cfg.revenue_escalation_rate).powi(2),
        1e-6,
    );
}

#[test]
fn row_identities_hold() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    let projected = project_cash_flow(&sample_input(), &cfg, 15);
    for y in &projected.years {
        assert_close("ebit", y.ebit, y.total_revenue - y.tax_on_revenue - y.opex, 1e-6);
        assert_close(
            "net profit",
            y.net_profit,
            y.ebit - y.income_tax - y.interest,
            1e-6,
        );
        assert_close(
            "simple",
            y.simple_cash_flow,
            y.net_profit - y.amortization,
            1e-6,
        );
        // 기본 소득세율 0
        assert_eq!(y.income_tax, 0.0);
    }
}

#[test]
fn amortization_only_within_financing_term() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    let input = sample_input();
    let projected = project_cash_flow(&input, &cfg, 20);
    let term_years = cfg.financing_years() as usize;
    assert_eq!(term_years, 10);

    for (i, y) in projected.years.iter().enumerate() {
        if i < term_years {
            assert!(y.amortization > 0.0, "year {} should amortize", y.year);
        } else {
            assert_eq!(y.amortization, 0.0);
            assert_eq!(y.interest, 0.0);
        }
    }
    let amortized: f64 = projected.years.iter().map(|y| y.amortization).sum();
    assert_close("principal repaid", amortized, input.financed_amount, 1e-4);
}

#[test]
fn no_financing_means_no_debt_service() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    let input = CashFlowInput {
        own_capital: 1_000_000.0,
        financed_amount: 0.0,
        ..sample_input()
    };
    let projected = project_cash_flow(&input, &cfg, 10);
    for y in &projected.years {
        assert_eq!(y.amortization, 0.0);
        assert_eq!(y.interest, 0.0);
        assert_eq!(y.financing_payment, 0.0);
    }
}

#[test]
fn indicators_use_operating_flows_against_total_investment() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    let input = sample_input();
    let projected = project_cash_flow(&input, &cfg, 20);

    let flows = projected.indicator_flows(input.capex_total);
    assert_eq!(flows.len(), 21);
    assert_eq!(flows[0], -input.capex_total);
    for (flow, y) in flows[1..].iter().zip(&projected.years) {
        assert_close("operating", *flow, y.simple_cash_flow + y.amortization, 1e-9);
    }

    // 1년차 영업흐름 = 450k − 45k − 150k − 이자
    assert!(projected.irr > 0.0);
    assert!(projected.npv > 0.0);
    assert!(projected.pays_back());
    assert!(projected.payback_simple > 0.0 && projected.payback_simple < 6.0);
    assert!(projected.payback_discounted >= projected.payback_simple);
    assert_close("discount rate", projected.discount_rate_pct, 12.18, 1e-9);

    let expected_roi = projected.total_simple_cash_flow() / input.capex_total * 100.0;
    assert_close("roi", projected.roi, expected_roi, 1e-9);
}

#[test]
fn zero_investment_keeps_indicators_finite() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    let input = CashFlowInput {
        capex_total: 0.0,
        own_capital: 0.0,
        financed_amount: 0.0,
        ..sample_input()
    };
    let projected = project_cash_flow(&input, &cfg, 5);
    assert_eq!(projected.roi, 0.0);
    assert_eq!(projected.payback_simple, 0.0);
    assert!(projected.irr.is_finite());
}

#[test]
fn staged_plan_sums_to_total() {
    let plan = staged_payment_plan(933_107.0);
    assert_eq!(plan.len(), 5);
    let shares: f64 = plan.iter().map(|s| s.share).sum();
    assert_close("shares", shares, 1.0, 1e-12);
    let amounts: f64 = plan.iter().map(|s| s.amount).sum();
    assert_close("amounts", amounts, 933_107.0, 1e-6);
    assert_close("signature", plan[0].amount, 933_107.0 * 0.05, 1e-9);
    assert_eq!(plan[0].milestone.code(), "signature");
    assert_eq!(plan[4].milestone.code(), "start_up");
}
