//! 입력 파일 한 개로 생산량 → 장비 → CAPEX/OPEX → 현금흐름 → 판정까지 수행한다.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::biogas::{
    estimate_yield, LivestockEntry, SubstrateEntry, YieldParams, YieldResult, DEFAULT_HRT_DAYS,
    DEFAULT_OPERATING_HOURS,
};
use crate::catalog::{
    daily_energy_kwh, operating_hours, select_biodigester, select_generator, BiodigesterModel,
    BiodigesterShape, GeneratorSelection,
};
use crate::config::Config;
use crate::costs::{
    build_capex, build_opex, CapexBreakdown, ExternalBiomass, FeatureFlags, OpexBreakdown,
    OpexInput, SiteConditions,
};
use crate::finance::{
    annual_to_monthly_rate, project_cash_flow, staged_payment_plan, AmortizationType,
    CashFlowInput, FinancingConfig, FinancingPresets, PaymentMethod, PaymentStage,
    ProjectedCashFlow, MAX_TERM_MONTHS,
};
use crate::viability::{evaluate, ViabilityContext, ViabilityVerdict};

/// 프로젝트 입력 파일 로드 오류.
#[derive(Debug)]
pub enum ProposalError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for ProposalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProposalError::Io(e) => write!(f, "입력 파일 입출력 오류: {e}"),
            ProposalError::Parse(e) => write!(f, "입력 파일 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for ProposalError {}

impl From<std::io::Error> for ProposalError {
    fn from(value: std::io::Error) -> Self {
        ProposalError::Io(value)
    }
}

impl From<toml::de::Error> for ProposalError {
    fn from(value: toml::de::Error) -> Self {
        ProposalError::Parse(value)
    }
}

/// 엔진 공통 가정. `config.toml`의 `[engine]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub hydraulic_retention_days: f64,
    pub target_operating_hours: f64,
    pub horizon_years: u32,
    /// 회피 전력비에 부과되는 세율
    pub energy_tax_rate: f64,
    /// 이 출력 이상이면 전담 운전원을 둔다 [kW]
    pub dedicated_operator_min_kw: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            hydraulic_retention_days: DEFAULT_HRT_DAYS,
            target_operating_hours: DEFAULT_OPERATING_HOURS,
            horizon_years: 20,
            energy_tax_rate: 0.10,
            dedicated_operator_min_kw: 100.0,
        }
    }
}

/// 현재 전력 비용.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrentCosts {
    /// 전력 단가 [R$/kWh]
    pub energy_cost_per_kwh: f64,
    /// 월 사용량 [kWh/월]. 없으면 `monthly_bill`에서 환산한다.
    #[serde(default)]
    pub monthly_consumption_kwh: Option<f64>,
    /// 월 전기요금 [R$/월]
    #[serde(default)]
    pub monthly_bill: Option<f64>,
    /// 입력하면 엔진 기본 세율 대신 쓴다
    #[serde(default)]
    pub energy_tax_rate: Option<f64>,
}

impl CurrentCosts {
    /// 월 요금과 단가로 만든다.
    pub fn from_monthly_bill(energy_cost_per_kwh: f64, monthly_bill: f64) -> Self {
        Self {
            energy_cost_per_kwh,
            monthly_bill: Some(monthly_bill),
            ..Self::default()
        }
    }

    pub fn monthly_consumption_kwh(&self) -> f64 {
        if let Some(kwh) = self.monthly_consumption_kwh {
            return kwh.max(0.0);
        }
        match self.monthly_bill {
            Some(bill) if self.energy_cost_per_kwh > 0.0 => bill.max(0.0) / self.energy_cost_per_kwh,
            _ => 0.0,
        }
    }
}

/// 자금 조달 선택. 비워 둔 항목은 결제 방식 프리셋을 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancingChoice {
    pub method: PaymentMethod,
    pub own_capital_fraction: Option<f64>,
    pub term_months: Option<u32>,
    pub annual_rate: Option<f64>,
    /// 지정하면 `annual_rate`보다 우선한다
    pub monthly_rate: Option<f64>,
    pub amortization: Option<AmortizationType>,
}

impl FinancingChoice {
    /// 상환 기간은 [`MAX_TERM_MONTHS`]로 제한한다.
    pub fn resolve(&self, presets: &FinancingPresets) -> FinancingConfig {
        let mut cfg = presets.config_for(self.method);
        if let Some(v) = self.own_capital_fraction {
            cfg.own_capital_fraction = v.clamp(0.0, 1.0);
        }
        if let Some(v) = self.term_months {
            cfg.term_months = v;
        }
        cfg.term_months = cfg.term_months.min(MAX_TERM_MONTHS);
        if let Some(v) = self.annual_rate {
            cfg.monthly_rate = annual_to_monthly_rate(v);
        }
        if let Some(v) = self.monthly_rate {
            cfg.monthly_rate = v;
        }
        if let Some(v) = self.amortization {
            cfg.amortization = v;
        }
        cfg
    }
}

/// 운전 조건.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationOptions {
    pub dedicated_operator: Option<bool>,
    pub external_biomass: Option<ExternalBiomass>,
    pub biomass_remuneration: f64,
    pub hydraulic_retention_days: Option<f64>,
    pub target_operating_hours: Option<f64>,
}

/// 프로젝트 입력 파일.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub livestock: Vec<LivestockEntry>,
    #[serde(default)]
    pub substrates: Vec<SubstrateEntry>,
    #[serde(default)]
    pub site: SiteConditions,
    #[serde(default)]
    pub features: FeatureFlags,
    pub current_costs: CurrentCosts,
    #[serde(default)]
    pub financing: FinancingChoice,
    #[serde(default)]
    pub operation: OperationOptions,
}

impl ProposalInput {
    pub fn from_toml_str(src: &str) -> Result<Self, ProposalError> {
        Ok(toml::from_str(src)?)
    }
}

/// TOML 입력 파일을 읽는다.
pub fn load_input(path: impl AsRef<Path>) -> Result<ProposalInput, ProposalError> {
    let content = fs::read_to_string(path)?;
    ProposalInput::from_toml_str(&content)
}

/// 처리 경로 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnologicalRoute {
    /// 가축분뇨 단독
    Manure,
    /// 유기성 고형 폐기물 단독
    OrganicWaste,
    /// 병합 소화
    CoDigestion,
    Generic,
}

impl TechnologicalRoute {
    pub fn classify(has_livestock: bool, has_substrates: bool) -> Self {
        match (has_livestock, has_substrates) {
            (true, false) => TechnologicalRoute::Manure,
            (false, true) => TechnologicalRoute::OrganicWaste,
            (true, true) => TechnologicalRoute::CoDigestion,
            (false, false) => TechnologicalRoute::Generic,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TechnologicalRoute::Manure => "manure",
            TechnologicalRoute::OrganicWaste => "organic_waste",
            TechnologicalRoute::CoDigestion => "co_digestion",
            TechnologicalRoute::Generic => "generic",
        }
    }
}

/// 보고서 문구용 장비 요약.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDescriptors {
    pub biodigester_shape: BiodigesterShape,
    pub biodigester_volume_m3: f64,
    pub required_volume_m3: f64,
    pub generator_id: String,
    pub generator_brand: String,
    pub generator_model: String,
    pub generator_power_kw: f64,
    /// 운전시간 범위를 만족해 고른 발전기인가
    pub generator_in_range: bool,
}

/// 월 절감액 내역 [R$/월].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SavingsSummary {
    pub monthly_energy_kwh: f64,
    pub monthly_consumption_kwh: f64,
    pub gross_monthly_savings: f64,
    pub monthly_tax: f64,
    pub net_monthly_savings: f64,
    pub monthly_installment: f64,
    /// 순절감액 − 첫 달 납부액
    pub monthly_net_cash_flow: f64,
}

/// 전체 산출 결과.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalReport {
    pub name: Option<String>,
    pub yield_result: YieldResult,
    pub route: TechnologicalRoute,
    pub biodigester: BiodigesterModel,
    pub generator: GeneratorSelection,
    pub equipment: EquipmentDescriptors,
    /// 최대 표준 소화조로도 요구 체적을 못 채움
    pub requires_custom_engineering: bool,
    pub generator_operating_hours: f64,
    pub generator_daily_energy_kwh: f64,
    pub capex: CapexBreakdown,
    pub opex: OpexBreakdown,
    pub financing: FinancingConfig,
    pub own_capital: f64,
    pub financed_amount: f64,
    pub savings: SavingsSummary,
    pub cash_flow: ProjectedCashFlow,
    /// 직접 납부일 때만 채운다
    pub payment_plan: Option<Vec<PaymentStage>>,
    pub verdict: ViabilityVerdict,
}

/// 입력과 설정으로 전체 산출을 수행한다. 같은 입력은 항상 같은 결과를 낸다.
pub fn run_proposal(input: &ProposalInput, config: &Config) -> ProposalReport {
    let engine = &config.engine;
    let params = YieldParams {
        hydraulic_retention_days: input
            .operation
            .hydraulic_retention_days
            .unwrap_or(engine.hydraulic_retention_days),
        target_operating_hours: input
            .operation
            .target_operating_hours
            .unwrap_or(engine.target_operating_hours),
    };
    let yield_result = estimate_yield(&input.livestock, &input.substrates, params);

    let biodigester = select_biodigester(yield_result.required_biodigester_volume_m3);
    let generator = select_generator(yield_result.daily_biogas_m3, params.target_operating_hours);
    let gen_model = generator.model();

    let capex = build_capex(&yield_result, biodigester, gen_model, input.site, input.features);
    let opex = build_opex(&OpexInput {
        installed_power_kw: yield_result.installed_power_kw,
        features: input.features,
        dedicated_operator: input
            .operation
            .dedicated_operator
            .unwrap_or(yield_result.installed_power_kw >= engine.dedicated_operator_min_kw),
        external_biomass: input.operation.external_biomass,
        biomass_remuneration: input.operation.biomass_remuneration,
    });

    let financing = input.financing.resolve(&config.financing);
    let capex_total = capex.total();
    let (own_capital, financed_amount) = financing.split_investment(capex_total);
    let monthly_installment = if financed_amount > 0.0 {
        financing.monthly_installment(financed_amount)
    } else {
        0.0
    };

    let tax_rate = input
        .current_costs
        .energy_tax_rate
        .unwrap_or(engine.energy_tax_rate);
    let monthly_energy_kwh = yield_result.monthly_energy_kwh();
    let gross_monthly_savings = monthly_energy_kwh * input.current_costs.energy_cost_per_kwh;
    let monthly_tax = gross_monthly_savings * tax_rate;
    let net_monthly_savings = gross_monthly_savings - monthly_tax;
    let savings = SavingsSummary {
        monthly_energy_kwh,
        monthly_consumption_kwh: input.current_costs.monthly_consumption_kwh(),
        gross_monthly_savings,
        monthly_tax,
        net_monthly_savings,
        monthly_installment,
        monthly_net_cash_flow: net_monthly_savings - monthly_installment,
    };

    let cash_flow = project_cash_flow(
        &CashFlowInput {
            capex_total,
            own_capital,
            financed_amount,
            annual_savings: gross_monthly_savings * 12.0,
            annual_revenue: 0.0,
            annual_taxes: monthly_tax * 12.0,
            annual_opex: opex.annual_total(),
        },
        &financing,
        engine.horizon_years,
    );

    let verdict = evaluate(
        &ViabilityContext {
            yield_result: &yield_result,
            cash_flow: &cash_flow,
            monthly_net_cash_flow: savings.monthly_net_cash_flow,
            monthly_consumption_kwh: savings.monthly_consumption_kwh,
        },
        &config.viability,
    );

    let equipment = EquipmentDescriptors {
        biodigester_shape: biodigester.shape,
        biodigester_volume_m3: biodigester.volume_m3,
        required_volume_m3: yield_result.required_biodigester_volume_m3,
        generator_id: gen_model.id.to_string(),
        generator_brand: gen_model.brand.to_string(),
        generator_model: gen_model.model.to_string(),
        generator_power_kw: gen_model.power_kw,
        generator_in_range: generator.is_in_range(),
    };

    ProposalReport {
        name: input.name.clone(),
        route: TechnologicalRoute::classify(!input.livestock.is_empty(), !input.substrates.is_empty()),
        requires_custom_engineering: biodigester
            .is_undersized_for(yield_result.required_biodigester_volume_m3),
        generator_operating_hours: operating_hours(yield_result.daily_biogas_m3, gen_model),
        generator_daily_energy_kwh: daily_energy_kwh(yield_result.daily_biogas_m3, gen_model),
        biodigester: *biodigester,
        generator,
        equipment,
        capex,
        opex,
        financing,
        own_capital,
        financed_amount,
        savings,
        payment_plan: (financing.method == PaymentMethod::Direct)
            .then(|| staged_payment_plan(capex_total)),
        cash_flow,
        verdict,
        yield_result,
    }
}
