//! IRR/NPV/회수기간과 대출 스케줄 테스트.
use biogas_viability::finance::{
    annual_to_monthly_rate, discounted_payback, irr, npv, price_installment, recovery_year,
    simple_payback,
    AmortizationType, FinancingConfig, LoanSchedule, PaymentMethod,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn irr_of_single_period_flow() {
    assert_close("irr", irr(&[-100.0, 110.0]), 10.0, 1e-6);
    assert_close("irr two periods", irr(&[-100.0, 0.0, 121.0]), 10.0, 1e-4);
}

#[test]
fn npv_at_irr_is_zero_for_conventional_flows() {
    let series: [&[f64]; 4] = [
        &[-1000.0, 300.0, 400.0, 500.0, 200.0],
        &[-933_107.0, 250_000.0, 260_000.0, 270_000.0, 280_000.0, 290_000.0],
        &[-50_000.0, 5_000.0, 5_000.0, 5_000.0, 5_000.0, 5_000.0, 5_000.0, 5_000.0, 5_000.0],
        &[-10.0, 100.0],
    ];
    for flows in series {
        let rate = irr(flows);
        let value = npv(flows, rate);
        assert!(value.abs() < 1.0, "flows={flows:?} irr={rate} npv={value}");
    }
}

#[test]
fn irr_handles_degenerate_input() {
    assert_eq!(irr(&[]), 0.0);
    assert_eq!(irr(&[-100.0]), 0.0);
    assert!(irr(&[-100.0, -50.0, -10.0]).is_finite());
}

#[test]
fn npv_matches_hand_computation() {
    let flows = [-1000.0, 500.0, 500.0, 500.0];
    let expected = -1000.0 + 500.0 / 1.1 + 500.0 / 1.21 + 500.0 / 1.331;
    assert_close("npv", npv(&flows, 10.0), expected, 1e-9);
    assert_close("npv zero rate", npv(&flows, 0.0), 500.0, 1e-12);
}

#[test]
fn simple_payback_interpolates_crossing_year() {
    // 누적: -700, -300, +200 → 2 + 300/500
    assert_close("payback", simple_payback(1000.0, &[300.0, 400.0, 500.0]), 2.6, 1e-12);
    assert_close("exact", simple_payback(1000.0, &[500.0, 500.0]), 2.0, 1e-12);
}

#[test]
fn simple_payback_reports_horizon_when_not_recovered() {
    assert_eq!(simple_payback(1000.0, &[100.0, 100.0]), 2.0);
    assert_eq!(simple_payback(1000.0, &[0.0, 0.0, 0.0]), 3.0);
    assert_eq!(simple_payback(1000.0, &[]), 0.0);
}

#[test]
fn recovery_year_separates_exact_recovery_from_shortfall() {
    assert_eq!(recovery_year(100.0, &[50.0, 50.0]), Some(2.0));
    assert_eq!(recovery_year(100.0, &[50.0, 49.0]), None);
    assert_eq!(simple_payback(100.0, &[50.0, 50.0]), 2.0);
    assert_eq!(simple_payback(100.0, &[50.0, 49.0]), 2.0);
    assert_eq!(recovery_year(0.0, &[]), Some(0.0));
}

#[test]
fn payback_without_investment_is_immediate() {
    assert_eq!(simple_payback(0.0, &[100.0]), 0.0);
    assert_eq!(discounted_payback(0.0, &[100.0], 10.0), 0.0);
}

#[test]
fn discounted_payback_is_never_shorter() {
    let flows = [300.0, 400.0, 500.0, 600.0];
    let simple = simple_payback(1000.0, &flows);
    let discounted = discounted_payback(1000.0, &flows, 12.18);
    assert!(discounted >= simple);
    assert_close("zero rate", discounted_payback(1000.0, &flows, 0.0), simple, 1e-12);
}

#[test]
fn zero_rate_price_installment_is_exact_split() {
    assert_eq!(price_installment(120_000.0, 0.0, 120), 1_000.0);
    assert_eq!(price_installment(100_000.0, 0.0, 60), 100_000.0 / 60.0);
    let schedule = LoanSchedule::build(120_000.0, 0.0, 120, AmortizationType::Price);
    assert_eq!(schedule.first_payment(), 1_000.0);
    assert_eq!(schedule.total_interest(), 0.0);
}

#[test]
fn price_installment_matches_annuity_formula() {
    let r = 0.01;
    let n = 12;
    let expected = 10_000.0 * r * 1.01f64.powi(n) / (1.01f64.powi(n) - 1.0);
    assert_close("pmt", price_installment(10_000.0, r, n as u32), expected, 1e-9);
    assert_eq!(price_installment(10_000.0, r, 0), 0.0);
    assert_eq!(price_installment(0.0, r, 12), 0.0);
}

#[test]
fn schedules_repay_principal_in_financing_years() {
    for kind in [AmortizationType::Price, AmortizationType::Sac] {
        let schedule = LoanSchedule::build(500_000.0, 0.0103, 30, kind);
        let years = schedule.yearly();
        assert_eq!(years.len(), 3);
        let amortized: f64 = years.iter().map(|y| y.amortization).sum();
        assert_close("principal", amortized, 500_000.0, 1e-6);
        for y in &years {
            assert_close("interest", y.interest, y.payment - y.amortization, 1e-6);
        }
        let last = schedule.installments.last().map(|m| m.balance).unwrap_or(-1.0);
        assert_close("balance", last, 0.0, 1e-6);
    }
}

#[test]
fn sac_payments_decline_and_price_payments_are_level() {
    let sac = LoanSchedule::build(120_000.0, 0.01, 24, AmortizationType::Sac);
    for pair in sac.installments.windows(2) {
        assert!(pair[1].payment < pair[0].payment);
        assert_close("straight", pair[0].amortization, 5_000.0, 1e-9);
    }
    let price = LoanSchedule::build(120_000.0, 0.01, 24, AmortizationType::Price);
    let first = price.first_payment();
    for m in &price.installments {
        assert_close("level", m.payment, first, 1e-6);
    }
}

#[test]
fn annual_rate_converts_to_equivalent_monthly_rate() {
    let monthly = annual_to_monthly_rate(0.131);
    assert_close("compound", (1.0 + monthly).powi(12) - 1.0, 0.131, 1e-12);
    assert_eq!(annual_to_monthly_rate(0.0), 0.0);
}

#[test]
fn payment_methods_have_distinct_installments() {
    let financing = FinancingConfig::for_method(PaymentMethod::Financing);
    let direct = FinancingConfig::for_method(PaymentMethod::Direct);
    assert_eq!(financing.term_months, 120);
    assert_eq!(direct.term_months, 60);
    assert!(financing.monthly_rate > direct.monthly_rate);

    let principal = 746_486.0;
    let a = financing.monthly_installment(principal);
    let b = direct.monthly_installment(principal);
    assert!(a > 0.0 && b > 0.0);
    assert!((a - b).abs() > 1.0, "financing={a} direct={b}");
    // 기간이 짧은 직접 납부가 월 납부액은 더 크다
    assert!(b > a);
}

#[test]
fn investment_split_follows_own_capital_fraction() {
    let cfg = FinancingConfig::for_method(PaymentMethod::Financing);
    let (own, financed) = cfg.split_investment(1_000_000.0);
    assert_close("own", own, 200_000.0, 1e-9);
    assert_close("financed", financed, 800_000.0, 1e-9);
    assert_eq!(cfg.financing_years(), 10);
}
