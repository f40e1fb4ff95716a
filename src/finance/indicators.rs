//! IRR, NPV, 단순/할인 회수기간.
//!
//! 현금흐름 배열은 `[−C0, C1, …, Cn]` 형태이며 인덱스가 곧 연차다.
use tracing::debug;

const MAX_ITERATIONS: usize = 100;
const TOLERANCE: f64 = 1e-4;
const INITIAL_GUESS: f64 = 0.1;
const BISECTION_LOW: f64 = -0.99;
const BISECTION_HIGH: f64 = 10.0;

/// 소수 할인율(0.12 = 12 %)에서의 NPV.
fn npv_at(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, c)| c / (1.0 + rate).powi(t as i32))
        .sum()
}

fn npv_derivative_at(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, c)| -(t as f64) * c / (1.0 + rate).powi(t as i32 + 1))
        .sum()
}

/// 내부수익률 [%].
///
/// 10 %에서 시작하는 뉴턴-랩슨을 최대 100회 돌리고, 도함수가 0이 되거나 수렴하지
/// 않으면 [-0.99, 10.0] 구간 이분법으로 넘어간다. 부호가 두 번 이상 바뀌는
/// 현금흐름에서는 근이 여러 개일 수 있으며, 이 함수는 그중 초기 구간 근처의 하나를
/// 돌려줄 뿐 경제적으로 의미 있는 근을 고르지 않는다. 항목이 2개 미만이면 0.
pub fn irr(cash_flows: &[f64]) -> f64 {
    if cash_flows.len() < 2 {
        return 0.0;
    }

    let mut rate = INITIAL_GUESS;
    for _ in 0..MAX_ITERATIONS {
        let value = npv_at(cash_flows, rate);
        if value.abs() < TOLERANCE {
            return rate * 100.0;
        }
        let derivative = npv_derivative_at(cash_flows, rate);
        if derivative == 0.0 || !derivative.is_finite() {
            break;
        }
        rate -= value / derivative;
        if !rate.is_finite() || rate <= -1.0 {
            break;
        }
    }

    debug!("newton iteration did not converge; falling back to bisection");
    irr_bisection(cash_flows) * 100.0
}

fn irr_bisection(cash_flows: &[f64]) -> f64 {
    let mut low = BISECTION_LOW;
    let mut high = BISECTION_HIGH;
    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let value = npv_at(cash_flows, mid);
        if value.abs() < TOLERANCE {
            return mid;
        }
        if value > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }
    (low + high) / 2.0
}

/// 할인율 `rate_pct` [%]에서의 순현재가치. `Σ C_t / (1+r)^t`.
pub fn npv(cash_flows: &[f64], rate_pct: f64) -> f64 {
    npv_at(cash_flows, rate_pct / 100.0)
}

/// 누적값이 처음으로 0 이상이 되는 시점을 선형 보간으로 구한다.
/// 끝까지 회수하지 못하면 None. 투자액이 0 이하면 `Some(0)`.
fn payback(investment: f64, flows: impl Iterator<Item = f64>) -> Option<f64> {
    if investment <= 0.0 {
        return Some(0.0);
    }
    let mut accumulated = -investment;
    for (year, flow) in flows.enumerate() {
        let previous = accumulated;
        accumulated += flow;
        if accumulated >= 0.0 {
            let fraction = if flow != 0.0 { -previous / flow } else { 0.0 };
            return Some(year as f64 + fraction);
        }
    }
    None
}

/// 단순 회수 시점 [년]. 기간 안에 회수하지 못하면 None.
pub fn recovery_year(investment: f64, annual_flows: &[f64]) -> Option<f64> {
    payback(investment, annual_flows.iter().copied())
}

/// 단순 회수기간 [년]. `annual_flows[0]`이 1년차다. 회수하지 못하면 기간 길이.
pub fn simple_payback(investment: f64, annual_flows: &[f64]) -> f64 {
    recovery_year(investment, annual_flows).unwrap_or(annual_flows.len() as f64)
}

/// 할인 회수기간 [년]. 1년차 흐름은 `(1+r)^1`로 나눈다.
pub fn discounted_payback(investment: f64, annual_flows: &[f64], rate_pct: f64) -> f64 {
    let rate = rate_pct / 100.0;
    payback(
        investment,
        annual_flows
            .iter()
            .enumerate()
            .map(|(i, flow)| flow / (1.0 + rate).powi(i as i32 + 1)),
    )
    .unwrap_or(annual_flows.len() as f64)
}
