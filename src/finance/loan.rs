//! 대출 상환 스케줄(PRICE/SAC)과 결제 방식별 기본 조건.
use serde::{Deserialize, Serialize};

/// 입력으로 받을 수 있는 최장 상환 기간 [개월]
pub const MAX_TERM_MONTHS: u32 = 600;

/// 결제 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// 금융기관 대출
    #[default]
    Financing,
    /// 공급사 직접 분할 납부
    Direct,
}

/// 상환 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmortizationType {
    /// 원리금 균등
    #[default]
    Price,
    /// 원금 균등
    Sac,
}

/// 연 이율을 복리 기준 등가 월 이율로 바꾼다. `(1+a)^(1/12) − 1`.
pub fn annual_to_monthly_rate(annual_rate: f64) -> f64 {
    if annual_rate <= -1.0 {
        return 0.0;
    }
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

/// PRICE 균등 상환액. 이율이 0이면 정확히 `원금 / 회차`다.
pub fn price_installment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 || principal <= 0.0 {
        return 0.0;
    }
    let n = f64::from(months);
    if monthly_rate == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + monthly_rate).powi(months as i32);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// 월 상환 한 회차.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInstallment {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub amortization: f64,
    /// 납부 후 잔액
    pub balance: f64,
}

/// 연 단위로 묶은 상환액.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanYear {
    pub year: u32,
    pub payment: f64,
    pub interest: f64,
    pub amortization: f64,
}

/// 월별 상환 스케줄.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub installments: Vec<LoanInstallment>,
}

impl LoanSchedule {
    pub fn build(principal: f64, monthly_rate: f64, months: u32, kind: AmortizationType) -> Self {
        if principal <= 0.0 || months == 0 {
            return Self::default();
        }
        let level_payment = price_installment(principal, monthly_rate, months);
        let straight = principal / f64::from(months);
        let mut balance = principal;
        let mut installments = Vec::with_capacity(months.min(MAX_TERM_MONTHS) as usize);

        for month in 1..=months {
            let interest = balance * monthly_rate;
            let amortization = match kind {
                AmortizationType::Price => level_payment - interest,
                AmortizationType::Sac => straight,
            };
            // 마지막 회차에서 부동소수 잔차를 정리한다
            let amortization = if month == months { balance } else { amortization };
            balance -= amortization;
            installments.push(LoanInstallment {
                month,
                payment: amortization + interest,
                interest,
                amortization,
                balance: balance.max(0.0),
            });
        }
        Self { installments }
    }

    /// 첫 회차 납부액. 대출이 없으면 0.
    pub fn first_payment(&self) -> f64 {
        self.installments.first().map(|i| i.payment).unwrap_or(0.0)
    }

    /// 12개월 단위 합계. 길이는 `ceil(회차/12)`.
    pub fn yearly(&self) -> Vec<LoanYear> {
        self.installments
            .chunks(12)
            .enumerate()
            .map(|(i, chunk)| LoanYear {
                year: i as u32 + 1,
                payment: chunk.iter().map(|m| m.payment).sum(),
                interest: chunk.iter().map(|m| m.interest).sum(),
                amortization: chunk.iter().map(|m| m.amortization).sum(),
            })
            .collect()
    }

    pub fn total_interest(&self) -> f64 {
        self.installments.iter().map(|m| m.interest).sum()
    }
}

/// 결제 방식 하나의 기본 이율/기간.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePreset {
    /// 연 이율 (0.131 = 13.1 %)
    pub annual_rate: f64,
    pub term_months: u32,
}

/// 결제 방식별 기본값과 공통 가정.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancingPresets {
    pub financing: RatePreset,
    pub direct: RatePreset,
    /// 자기자본 비율 (0~1)
    pub own_capital_fraction: f64,
    pub amortization: AmortizationType,
    pub revenue_escalation_rate: f64,
    pub opex_inflation_rate: f64,
    /// 최소 요구 수익률(TMA)
    pub discount_rate: f64,
    pub income_tax_rate: f64,
}

impl Default for FinancingPresets {
    fn default() -> Self {
        Self {
            financing: RatePreset {
                annual_rate: 0.131,
                term_months: 120,
            },
            direct: RatePreset {
                annual_rate: 0.06,
                term_months: 60,
            },
            own_capital_fraction: 0.20,
            amortization: AmortizationType::Price,
            revenue_escalation_rate: 0.065,
            opex_inflation_rate: 0.041,
            discount_rate: 0.1218,
            income_tax_rate: 0.0,
        }
    }
}

impl FinancingPresets {
    pub fn preset(&self, method: PaymentMethod) -> RatePreset {
        match method {
            PaymentMethod::Financing => self.financing,
            PaymentMethod::Direct => self.direct,
        }
    }

    /// 결제 방식의 기본 조건으로 [`FinancingConfig`]를 만든다.
    pub fn config_for(&self, method: PaymentMethod) -> FinancingConfig {
        let preset = self.preset(method);
        FinancingConfig {
            method,
            own_capital_fraction: self.own_capital_fraction,
            term_months: preset.term_months,
            monthly_rate: annual_to_monthly_rate(preset.annual_rate),
            amortization: self.amortization,
            revenue_escalation_rate: self.revenue_escalation_rate,
            opex_inflation_rate: self.opex_inflation_rate,
            discount_rate: self.discount_rate,
            income_tax_rate: self.income_tax_rate,
        }
    }
}

/// 현금흐름 전망에 쓰는 자금 조달 조건. 모든 이율은 소수(0.01 = 1 %)다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingConfig {
    pub method: PaymentMethod,
    pub own_capital_fraction: f64,
    pub term_months: u32,
    pub monthly_rate: f64,
    pub amortization: AmortizationType,
    pub revenue_escalation_rate: f64,
    pub opex_inflation_rate: f64,
    pub discount_rate: f64,
    pub income_tax_rate: f64,
}

impl FinancingConfig {
    /// 기본 프리셋 기준 조건.
    pub fn for_method(method: PaymentMethod) -> Self {
        FinancingPresets::default().config_for(method)
    }

    /// 대출 기간 [년], `ceil(개월/12)`.
    pub fn financing_years(&self) -> u32 {
        self.term_months.div_ceil(12)
    }

    /// 총투자비를 자기자본과 조달액으로 나눈다.
    pub fn split_investment(&self, total: f64) -> (f64, f64) {
        let own = total * self.own_capital_fraction.clamp(0.0, 1.0);
        (own, total - own)
    }

    pub fn schedule(&self, principal: f64) -> LoanSchedule {
        LoanSchedule::build(principal, self.monthly_rate, self.term_months, self.amortization)
    }

    /// 첫 달 납부액.
    pub fn monthly_installment(&self, principal: f64) -> f64 {
        self.schedule(principal).first_payment()
    }
}
