//! 연도별 현금흐름 전망과 투자 지표.
use serde::{Deserialize, Serialize};

use super::indicators::{discounted_payback, irr, npv, recovery_year, simple_payback};
use super::loan::FinancingConfig;

/// 전망의 1년차 기준 금액 [R$/년].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashFlowInput {
    pub capex_total: f64,
    pub own_capital: f64,
    pub financed_amount: f64,
    /// 회피 전력비. `annual_taxes`를 빼기 전 총액이다.
    pub annual_savings: f64,
    /// 판매 수입
    pub annual_revenue: f64,
    /// 수입에 부과되는 세금
    pub annual_taxes: f64,
    pub annual_opex: f64,
}

/// 전망 연도 한 줄.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CashFlowYear {
    pub year: u32,
    pub avoided_cost: f64,
    pub gross_revenue: f64,
    pub total_revenue: f64,
    pub tax_on_revenue: f64,
    pub opex: f64,
    pub amortization: f64,
    pub interest: f64,
    pub financing_payment: f64,
    pub ebit: f64,
    pub income_tax: f64,
    pub net_profit: f64,
    pub simple_cash_flow: f64,
    pub accumulated_cash_flow: f64,
    pub discounted_cash_flow: f64,
    pub accumulated_discounted: f64,
}

impl CashFlowYear {
    /// 원리금 상환 전 영업 현금흐름. 투자 지표는 이 값으로 계산한다.
    pub fn operating_cash_flow(&self) -> f64 {
        self.simple_cash_flow + self.amortization
    }
}

/// 현금흐름 전망 결과.
///
/// IRR/NPV/회수기간은 `[−총투자비, 영업 현금흐름…]`으로 구한다. 총투자비에 조달액이
/// 이미 포함되어 있으므로 원금 상환분을 다시 빼지 않는다. 수익률 지표는 모두 %.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectedCashFlow {
    pub years: Vec<CashFlowYear>,
    pub irr: f64,
    pub npv: f64,
    /// 회수하지 못하면 기간 길이(표시용)
    pub payback_simple: f64,
    /// 기간 안에 누적 영업흐름이 총투자비에 도달했는가
    pub recovered: bool,
    pub payback_discounted: f64,
    pub roi: f64,
    /// 할인에 쓴 TMA [%]
    pub discount_rate_pct: f64,
}

impl ProjectedCashFlow {
    pub fn horizon_years(&self) -> usize {
        self.years.len()
    }

    /// 지표 계산에 쓴 현금흐름 배열 `[−C0, C1, …, Cn]`.
    pub fn indicator_flows(&self, capex_total: f64) -> Vec<f64> {
        std::iter::once(-capex_total)
            .chain(self.years.iter().map(CashFlowYear::operating_cash_flow))
            .collect()
    }

    pub fn total_simple_cash_flow(&self) -> f64 {
        self.years.iter().map(|y| y.simple_cash_flow).sum()
    }

    /// 기간 안에 투자를 회수했는가. 마지막 해에 정확히 회수한 경우도 포함한다.
    pub fn pays_back(&self) -> bool {
        !self.years.is_empty() && self.recovered
    }
}

/// 1년차 금액을 연도별로 증액/할인해 `horizon_years`년 현금흐름을 만든다.
///
/// 기간이 0이면 빈 표와 0 지표를 돌려준다. 조달액이 0 이하면 상환 행은 모두 0이다.
pub fn project_cash_flow(
    input: &CashFlowInput,
    financing: &FinancingConfig,
    horizon_years: u32,
) -> ProjectedCashFlow {
    let discount_rate_pct = financing.discount_rate * 100.0;
    if horizon_years == 0 {
        return ProjectedCashFlow {
            discount_rate_pct,
            ..ProjectedCashFlow::default()
        };
    }

    let loan_years = if input.financed_amount > 0.0 {
        financing.schedule(input.financed_amount).yearly()
    } else {
        Vec::new()
    };

    let mut years = Vec::with_capacity(horizon_years as usize);
    let mut accumulated = -input.own_capital;
    let mut accumulated_discounted = -input.own_capital;

    for year in 1..=horizon_years {
        let exponent = year as i32 - 1;
        let escalation = (1.0 + financing.revenue_escalation_rate).powi(exponent);
        let inflation = (1.0 + financing.opex_inflation_rate).powi(exponent);

        let avoided_cost = input.annual_savings * escalation;
        let gross_revenue = input.annual_revenue * escalation;
        let total_revenue = avoided_cost + gross_revenue;
        let tax_on_revenue = input.annual_taxes * escalation;
        let opex = input.annual_opex * inflation;

        let loan = loan_years
            .get(year as usize - 1)
            .copied()
            .unwrap_or_default();

        let ebit = total_revenue - tax_on_revenue - opex;
        let taxable = ebit - loan.interest;
        let income_tax = if taxable > 0.0 {
            taxable * financing.income_tax_rate
        } else {
            0.0
        };
        let net_profit = ebit - income_tax - loan.interest;
        let simple_cash_flow = net_profit - loan.amortization;
        let discounted_cash_flow =
            simple_cash_flow / (1.0 + financing.discount_rate).powi(year as i32);
        accumulated += simple_cash_flow;
        accumulated_discounted += discounted_cash_flow;

        years.push(CashFlowYear {
            year,
            avoided_cost,
            gross_revenue,
            total_revenue,
            tax_on_revenue,
            opex,
            amortization: loan.amortization,
            interest: loan.interest,
            financing_payment: loan.payment,
            ebit,
            income_tax,
            net_profit,
            simple_cash_flow,
            accumulated_cash_flow: accumulated,
            discounted_cash_flow,
            accumulated_discounted,
        });
    }

    let mut projected = ProjectedCashFlow {
        years,
        discount_rate_pct,
        ..ProjectedCashFlow::default()
    };
    let flows = projected.indicator_flows(input.capex_total);
    let operating = &flows[1..];
    projected.irr = irr(&flows);
    projected.npv = npv(&flows, discount_rate_pct);
    projected.recovered = recovery_year(input.capex_total, operating).is_some();
    projected.payback_simple = simple_payback(input.capex_total, operating);
    projected.payback_discounted = discounted_payback(input.capex_total, operating, discount_rate_pct);
    projected.roi = if input.capex_total > 0.0 {
        projected.total_simple_cash_flow() / input.capex_total * 100.0
    } else {
        0.0
    };
    projected
}
