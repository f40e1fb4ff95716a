//! 직접 납부 방식의 단계별 지급 일정.
use serde::{Deserialize, Serialize};

/// 지급 시점.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMilestone {
    /// 계약 서명
    Signature,
    /// 본 계약 체결
    Contract,
    /// 소화조 방수 완료
    Waterproofing,
    /// 발전기 출하
    GeneratorShipping,
    /// 시운전
    StartUp,
}

impl PaymentMilestone {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMilestone::Signature => "signature",
            PaymentMilestone::Contract => "contract",
            PaymentMilestone::Waterproofing => "waterproofing",
            PaymentMilestone::GeneratorShipping => "generator_shipping",
            PaymentMilestone::StartUp => "start_up",
        }
    }
}

const STAGES: [(PaymentMilestone, f64); 5] = [
    (PaymentMilestone::Signature, 0.05),
    (PaymentMilestone::Contract, 0.30),
    (PaymentMilestone::Waterproofing, 0.30),
    (PaymentMilestone::GeneratorShipping, 0.30),
    (PaymentMilestone::StartUp, 0.05),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentStage {
    pub milestone: PaymentMilestone,
    /// 총액 대비 비율 (0~1)
    pub share: f64,
    pub amount: f64,
}

/// 5/30/30/30/5 % 단계 지급. 단계 금액 합은 총액과 같다.
pub fn staged_payment_plan(total: f64) -> Vec<PaymentStage> {
    let total = total.max(0.0);
    STAGES
        .iter()
        .map(|&(milestone, share)| PaymentStage {
            milestone,
            share,
            amount: total * share,
        })
        .collect()
}
