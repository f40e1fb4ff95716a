//! 자금 조달, 현금흐름 전망, 투자 지표.

pub mod cash_flow;
pub mod indicators;
pub mod loan;
pub mod payment_plan;

pub use cash_flow::{project_cash_flow, CashFlowInput, CashFlowYear, ProjectedCashFlow};
pub use indicators::{discounted_payback, irr, npv, recovery_year, simple_payback};
pub use loan::{
    annual_to_monthly_rate, price_installment, AmortizationType, FinancingConfig,
    FinancingPresets, LoanInstallment, LoanSchedule, LoanYear, PaymentMethod, RatePreset,
    MAX_TERM_MONTHS,
};
pub use payment_plan::{staged_payment_plan, PaymentMilestone, PaymentStage};
