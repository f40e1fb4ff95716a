use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
///
/// CAPEX/OPEX 항목, 판정 항목, 처리 경로, 지급 단계는 `capex.<code>` 처럼
/// 도메인 타입의 `code()`를 붙여 조회한다.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_QUICK_ESTIMATE: &str = "main_menu.quick_estimate";
    pub const MAIN_MENU_CATALOG: &str = "main_menu.catalog";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const QUICK_HEADING: &str = "quick.heading";
    pub const QUICK_SPECIES_OPTIONS: &str = "quick.species_options";
    pub const PROMPT_SPECIES: &str = "prompt.species";
    pub const PROMPT_CLASS: &str = "prompt.class";
    pub const PROMPT_HEADCOUNT: &str = "prompt.headcount";
    pub const PROMPT_CONFINEMENT: &str = "prompt.confinement_hours";
    pub const PROMPT_ENERGY_COST: &str = "prompt.energy_cost";
    pub const PROMPT_MONTHLY_BILL: &str = "prompt.monthly_bill";
    pub const PROMPT_PAYMENT_METHOD: &str = "prompt.payment_method";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const CATALOG_BIODIGESTERS: &str = "catalog.biodigesters";
    pub const CATALOG_GENERATORS: &str = "catalog.generators";
    pub const CATALOG_LIVESTOCK: &str = "catalog.livestock";
    pub const CATALOG_SUBSTRATES: &str = "catalog.substrates";

    pub const REPORT_TITLE: &str = "report.title";
    pub const REPORT_YIELD: &str = "report.yield";
    pub const REPORT_EQUIPMENT: &str = "report.equipment";
    pub const REPORT_CAPEX: &str = "report.capex";
    pub const REPORT_OPEX: &str = "report.opex";
    pub const REPORT_FINANCING: &str = "report.financing";
    pub const REPORT_CASH_FLOW: &str = "report.cash_flow";
    pub const REPORT_INDICATORS: &str = "report.indicators";
    pub const REPORT_VERDICT: &str = "report.verdict";
    pub const REPORT_PAYMENT_PLAN: &str = "report.payment_plan";

    pub const LABEL_ROUTE: &str = "label.route";
    pub const LABEL_DAILY_BIOGAS: &str = "label.daily_biogas";
    pub const LABEL_MONTHLY_BIOGAS: &str = "label.monthly_biogas";
    pub const LABEL_DAILY_ENERGY: &str = "label.daily_energy";
    pub const LABEL_INSTALLED_POWER: &str = "label.installed_power";
    pub const LABEL_REQUIRED_VOLUME: &str = "label.required_volume";
    pub const LABEL_UNRECOGNIZED: &str = "label.unrecognized";
    pub const LABEL_BIODIGESTER: &str = "label.biodigester";
    pub const LABEL_GENERATOR: &str = "label.generator";
    pub const LABEL_OPERATING_HOURS: &str = "label.operating_hours";
    pub const LABEL_CUSTOM_ENGINEERING: &str = "label.custom_engineering";
    pub const LABEL_GENERATOR_FALLBACK: &str = "label.generator_fallback";
    pub const LABEL_TOTAL: &str = "label.total";
    pub const LABEL_MONTHLY_TOTAL: &str = "label.monthly_total";
    pub const LABEL_ANNUAL_TOTAL: &str = "label.annual_total";
    pub const LABEL_OWN_CAPITAL: &str = "label.own_capital";
    pub const LABEL_FINANCED: &str = "label.financed";
    pub const LABEL_MONTHLY_INSTALLMENT: &str = "label.monthly_installment";
    pub const LABEL_NET_MONTHLY_SAVINGS: &str = "label.net_monthly_savings";
    pub const LABEL_MONTHLY_NET_CASH_FLOW: &str = "label.monthly_net_cash_flow";
    pub const LABEL_CASH_FLOW_HEADER: &str = "label.cash_flow_header";
    pub const LABEL_IRR: &str = "label.irr";
    pub const LABEL_NPV: &str = "label.npv";
    pub const LABEL_PAYBACK_SIMPLE: &str = "label.payback_simple";
    pub const LABEL_PAYBACK_DISCOUNTED: &str = "label.payback_discounted";
    pub const LABEL_ROI: &str = "label.roi";
    pub const LABEL_VIABLE: &str = "label.viable";
    pub const LABEL_NOT_VIABLE: &str = "label.not_viable";
    pub const LABEL_SCORE: &str = "label.score";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
    Pt,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("pt") {
            Language::Pt
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
            Language::Pt => "pt",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en/pt)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 없으면 en, 그다음 ko 문자열로 폴백하고 끝내 없으면 키를 돌려준다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let built_in = match self.lang {
            Language::Pt => pt(key).or_else(|| en(key)).or_else(|| ko(key)),
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key),
        };
        built_in.map(str::to_string).unwrap_or_else(|| key.to_string())
    }

    /// `prefix.code` 형태의 키를 조회한다.
    pub fn t_code(&self, prefix: &str, code: &str) -> String {
        self.t(&format!("{prefix}.{code}"))
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("pt") => Some("pt".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    normalize_lang(&lang)
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 바이오가스 사업성 평가 ===",
        MAIN_MENU_QUICK_ESTIMATE => "1) 간이 평가 (가축 1종)",
        MAIN_MENU_CATALOG => "2) 장비 카탈로그",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        QUICK_HEADING => "\n-- 간이 평가 --",
        QUICK_SPECIES_OPTIONS => "축종/구분 예: swine/finishing, swine/sow, cattle/feedlot, poultry/broiler",
        PROMPT_SPECIES => "축종: ",
        PROMPT_CLASS => "구분: ",
        PROMPT_HEADCOUNT => "사육 두수: ",
        PROMPT_CONFINEMENT => "축사 체류 시간 [h/일]: ",
        PROMPT_ENERGY_COST => "전력 단가 [R$/kWh]: ",
        PROMPT_MONTHLY_BILL => "월 전기요금 [R$/월]: ",
        PROMPT_PAYMENT_METHOD => "결제 방식 (1=대출, 2=직접 납부): ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 입력 (auto/ko/en/pt, 엔터=취소): ",
        SETTINGS_INVALID => "알 수 없는 코드입니다. 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        CATALOG_BIODIGESTERS => "\n-- 바이오다이제스터 --",
        CATALOG_GENERATORS => "\n-- 발전기 --",
        CATALOG_LIVESTOCK => "\n-- 가축 VS 계수 --",
        CATALOG_SUBSTRATES => "\n-- 기질 수율 --",
        REPORT_TITLE => "\n===== 사업성 평가 보고서 =====",
        REPORT_YIELD => "\n[생산량]",
        REPORT_EQUIPMENT => "\n[장비]",
        REPORT_CAPEX => "\n[CAPEX]",
        REPORT_OPEX => "\n[OPEX (월)]",
        REPORT_FINANCING => "\n[자금 조달]",
        REPORT_CASH_FLOW => "\n[현금흐름]",
        REPORT_INDICATORS => "\n[투자 지표]",
        REPORT_VERDICT => "\n[판정]",
        REPORT_PAYMENT_PLAN => "\n[단계별 지급]",
        LABEL_ROUTE => "처리 경로:",
        LABEL_DAILY_BIOGAS => "일일 바이오가스 [m³/일]:",
        LABEL_MONTHLY_BIOGAS => "월 바이오가스 [m³/월]:",
        LABEL_DAILY_ENERGY => "일일 발전량 [kWh/일]:",
        LABEL_INSTALLED_POWER => "설치 출력 [kW]:",
        LABEL_REQUIRED_VOLUME => "필요 소화조 체적 [m³]:",
        LABEL_UNRECOGNIZED => "인식하지 못한 입력 (0으로 처리):",
        LABEL_BIODIGESTER => "바이오다이제스터:",
        LABEL_GENERATOR => "발전기:",
        LABEL_OPERATING_HOURS => "운전시간 [h/일]:",
        LABEL_CUSTOM_ENGINEERING => "요구 체적이 표준 모델을 넘어 맞춤 설계가 필요합니다.",
        LABEL_GENERATOR_FALLBACK => "운전 범위를 만족하는 발전기가 없어 가장 가까운 모델을 골랐습니다.",
        LABEL_TOTAL => "합계:",
        LABEL_MONTHLY_TOTAL => "월 합계:",
        LABEL_ANNUAL_TOTAL => "연 합계:",
        LABEL_OWN_CAPITAL => "자기자본:",
        LABEL_FINANCED => "조달액:",
        LABEL_MONTHLY_INSTALLMENT => "월 납부액 (1회차):",
        LABEL_NET_MONTHLY_SAVINGS => "월 순절감액:",
        LABEL_MONTHLY_NET_CASH_FLOW => "월 순현금흐름:",
        LABEL_CASH_FLOW_HEADER => "연차      절감액        OPEX      상환액    단순현금흐름      누적",
        LABEL_IRR => "IRR [%]:",
        LABEL_NPV => "NPV:",
        LABEL_PAYBACK_SIMPLE => "단순 회수기간 [년]:",
        LABEL_PAYBACK_DISCOUNTED => "할인 회수기간 [년]:",
        LABEL_ROI => "ROI [%]:",
        LABEL_VIABLE => "사업성 있음",
        LABEL_NOT_VIABLE => "사업성 없음",
        LABEL_SCORE => "점수:",
        "capex.project_management" => "프로젝트 관리",
        "capex.pretreatment" => "전처리",
        "capex.biodigestion_system" => "소화 설비",
        "capex.digestate" => "소화액 처리",
        "capex.biogas_conduction" => "바이오가스 이송/정제",
        "capex.electric_generation" => "발전 설비",
        "capex.thermal" => "열 회수",
        "capex.biomethane" => "바이오메탄",
        "capex.organomineral" => "유기무기질 비료",
        "capex.infrastructure" => "전기 인프라",
        "opex.logistics" => "물류",
        "opex.biodigestion_maintenance" => "소화 설비 유지보수",
        "opex.biogas_treatment_maintenance" => "가스 처리 유지보수",
        "opex.electric_generation_maintenance" => "발전 설비 유지보수",
        "opex.thermal_maintenance" => "열 회수 유지보수",
        "opex.biomethane_maintenance" => "바이오메탄 유지보수",
        "opex.organomineral_maintenance" => "비료 공장 유지보수",
        "opex.operation" => "운전 인력",
        "opex.administrative" => "관리비",
        "opex.biomass_remuneration" => "바이오매스 보상",
        "issue.biogas_too_low" => "바이오가스 생산량 부족",
        "issue.biogas_below_ideal" => "바이오가스 생산량이 권장치보다 낮음",
        "issue.power_too_low" => "설치 출력 부족",
        "issue.power_below_ideal" => "설치 출력이 권장치보다 낮음",
        "issue.biodigester_oversized" => "소화조 체적 과대, 맞춤 설계 필요",
        "issue.negative_monthly_cash_flow" => "월 순현금흐름이 음수 (납부액이 절감액보다 큼)",
        "issue.payback_too_long" => "회수기간이 너무 김",
        "issue.no_payback_within_horizon" => "전망 기간 내 투자 회수 불가",
        "issue.insufficient_energy" => "발전량이 월 사용량을 충족하지 못함",
        "route.manure" => "가축분뇨 혐기성 소화",
        "route.organic_waste" => "유기성 고형 폐기물 혐기성 소화",
        "route.co_digestion" => "가축분뇨와 유기성 폐기물 병합 소화",
        "route.generic" => "유기성 폐기물 혐기성 소화",
        "milestone.signature" => "서명",
        "milestone.contract" => "계약",
        "milestone.waterproofing" => "방수 완료",
        "milestone.generator_shipping" => "발전기 출하",
        "milestone.start_up" => "시운전",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Biogas Viability Engine ===",
        MAIN_MENU_QUICK_ESTIMATE => "1) Quick estimate (one livestock entry)",
        MAIN_MENU_CATALOG => "2) Equipment catalog",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        QUICK_HEADING => "\n-- Quick estimate --",
        QUICK_SPECIES_OPTIONS => "Species/class e.g. swine/finishing, swine/sow, cattle/feedlot, poultry/broiler",
        PROMPT_SPECIES => "Species: ",
        PROMPT_CLASS => "Class: ",
        PROMPT_HEADCOUNT => "Headcount: ",
        PROMPT_CONFINEMENT => "Confinement [h/day]: ",
        PROMPT_ENERGY_COST => "Energy cost [R$/kWh]: ",
        PROMPT_MONTHLY_BILL => "Monthly energy bill [R$/month]: ",
        PROMPT_PAYMENT_METHOD => "Payment method (1=financing, 2=direct): ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en/pt, enter to cancel): ",
        SETTINGS_INVALID => "Unknown code; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        CATALOG_BIODIGESTERS => "\n-- Biodigesters --",
        CATALOG_GENERATORS => "\n-- Generators --",
        CATALOG_LIVESTOCK => "\n-- Livestock VS factors --",
        CATALOG_SUBSTRATES => "\n-- Substrate yields --",
        REPORT_TITLE => "\n===== Viability report =====",
        REPORT_YIELD => "\n[Yield]",
        REPORT_EQUIPMENT => "\n[Equipment]",
        REPORT_CAPEX => "\n[CAPEX]",
        REPORT_OPEX => "\n[OPEX (monthly)]",
        REPORT_FINANCING => "\n[Financing]",
        REPORT_CASH_FLOW => "\n[Cash flow]",
        REPORT_INDICATORS => "\n[Indicators]",
        REPORT_VERDICT => "\n[Verdict]",
        REPORT_PAYMENT_PLAN => "\n[Staged payments]",
        LABEL_ROUTE => "Technological route:",
        LABEL_DAILY_BIOGAS => "Daily biogas [m³/day]:",
        LABEL_MONTHLY_BIOGAS => "Monthly biogas [m³/month]:",
        LABEL_DAILY_ENERGY => "Daily energy [kWh/day]:",
        LABEL_INSTALLED_POWER => "Installed power [kW]:",
        LABEL_REQUIRED_VOLUME => "Required digester volume [m³]:",
        LABEL_UNRECOGNIZED => "Unrecognized entries (counted as zero):",
        LABEL_BIODIGESTER => "Biodigester:",
        LABEL_GENERATOR => "Generator:",
        LABEL_OPERATING_HOURS => "Operating hours [h/day]:",
        LABEL_CUSTOM_ENGINEERING => "Required volume exceeds the largest standard model; custom engineering needed.",
        LABEL_GENERATOR_FALLBACK => "No generator fits its operating range; closest nominal match selected.",
        LABEL_TOTAL => "Total:",
        LABEL_MONTHLY_TOTAL => "Monthly total:",
        LABEL_ANNUAL_TOTAL => "Annual total:",
        LABEL_OWN_CAPITAL => "Own capital:",
        LABEL_FINANCED => "Financed amount:",
        LABEL_MONTHLY_INSTALLMENT => "Monthly installment (first):",
        LABEL_NET_MONTHLY_SAVINGS => "Net monthly savings:",
        LABEL_MONTHLY_NET_CASH_FLOW => "Monthly net cash flow:",
        LABEL_CASH_FLOW_HEADER => "Year     Savings        OPEX     Payment     Simple flow   Accumulated",
        LABEL_IRR => "IRR [%]:",
        LABEL_NPV => "NPV:",
        LABEL_PAYBACK_SIMPLE => "Simple payback [years]:",
        LABEL_PAYBACK_DISCOUNTED => "Discounted payback [years]:",
        LABEL_ROI => "ROI [%]:",
        LABEL_VIABLE => "Viable",
        LABEL_NOT_VIABLE => "Not viable",
        LABEL_SCORE => "Score:",
        "capex.project_management" => "Project management",
        "capex.pretreatment" => "Pretreatment",
        "capex.biodigestion_system" => "Biodigestion system",
        "capex.digestate" => "Digestate handling",
        "capex.biogas_conduction" => "Biogas conduction and treatment",
        "capex.electric_generation" => "Electric generation",
        "capex.thermal" => "Thermal recovery",
        "capex.biomethane" => "Biomethane upgrading",
        "capex.organomineral" => "Organomineral fertilizer",
        "capex.infrastructure" => "Electrical infrastructure",
        "opex.logistics" => "Logistics",
        "opex.biodigestion_maintenance" => "Biodigestion maintenance",
        "opex.biogas_treatment_maintenance" => "Biogas treatment maintenance",
        "opex.electric_generation_maintenance" => "Generation maintenance",
        "opex.thermal_maintenance" => "Thermal maintenance",
        "opex.biomethane_maintenance" => "Biomethane maintenance",
        "opex.organomineral_maintenance" => "Fertilizer plant maintenance",
        "opex.operation" => "Operation",
        "opex.administrative" => "Administrative",
        "opex.biomass_remuneration" => "Biomass remuneration",
        "issue.biogas_too_low" => "Biogas production insufficient",
        "issue.biogas_below_ideal" => "Biogas production below recommended level",
        "issue.power_too_low" => "Installed power too low",
        "issue.power_below_ideal" => "Installed power below recommended level",
        "issue.biodigester_oversized" => "Digester volume oversized; custom engineering required",
        "issue.negative_monthly_cash_flow" => "Negative monthly net cash flow (installments exceed savings)",
        "issue.payback_too_long" => "Payback period too long",
        "issue.no_payback_within_horizon" => "Investment not recovered within the projection horizon",
        "issue.insufficient_energy" => "Energy production insufficient to meet demand",
        "route.manure" => "Anaerobic digestion of livestock manure",
        "route.organic_waste" => "Anaerobic digestion of organic solid waste",
        "route.co_digestion" => "Co-digestion of manure and organic waste",
        "route.generic" => "Anaerobic digestion of organic residues",
        "milestone.signature" => "Signature",
        "milestone.contract" => "Contract",
        "milestone.waterproofing" => "Waterproofing",
        "milestone.generator_shipping" => "Generator shipping",
        "milestone.start_up" => "Start-up",
        _ => return None,
    })
}

fn pt(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando.",
        MAIN_MENU_TITLE => "\n=== Viabilidade de Biogás ===",
        MAIN_MENU_QUICK_ESTIMATE => "1) Estimativa rápida (um plantel)",
        MAIN_MENU_CATALOG => "2) Catálogo de equipamentos",
        MAIN_MENU_SETTINGS => "3) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Escolha: ",
        INVALID_SELECTION_RETRY => "Entrada inválida. Escolha novamente.",
        ERROR_INVALID_NUMBER => "Digite um número.",
        QUICK_HEADING => "\n-- Estimativa rápida --",
        QUICK_SPECIES_OPTIONS => "Espécie/categoria ex.: suino/terminacao, suino/matriz, bovino/confinamento, aves/frango",
        PROMPT_SPECIES => "Espécie: ",
        PROMPT_CLASS => "Categoria: ",
        PROMPT_HEADCOUNT => "Número de cabeças: ",
        PROMPT_CONFINEMENT => "Confinamento [h/dia]: ",
        PROMPT_ENERGY_COST => "Custo da energia [R$/kWh]: ",
        PROMPT_MONTHLY_BILL => "Conta mensal de energia [R$/mês]: ",
        PROMPT_PAYMENT_METHOD => "Forma de pagamento (1=financiamento, 2=direto): ",
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_CURRENT_LANGUAGE => "Idioma atual:",
        SETTINGS_PROMPT_LANGUAGE => "Código do idioma (auto/ko/en/pt, enter cancela): ",
        SETTINGS_INVALID => "Código desconhecido; idioma mantido.",
        SETTINGS_SAVED => "Idioma alterado para:",
        CATALOG_BIODIGESTERS => "\n-- Biodigestores --",
        CATALOG_GENERATORS => "\n-- Geradores --",
        CATALOG_LIVESTOCK => "\n-- Fatores de SV por rebanho --",
        CATALOG_SUBSTRATES => "\n-- Rendimento de substratos --",
        REPORT_TITLE => "\n===== Estudo de viabilidade =====",
        REPORT_YIELD => "\n[Produção]",
        REPORT_EQUIPMENT => "\n[Equipamentos]",
        REPORT_CAPEX => "\n[CAPEX]",
        REPORT_OPEX => "\n[OPEX (mensal)]",
        REPORT_FINANCING => "\n[Financiamento]",
        REPORT_CASH_FLOW => "\n[Fluxo de caixa]",
        REPORT_INDICATORS => "\n[Indicadores]",
        REPORT_VERDICT => "\n[Parecer]",
        REPORT_PAYMENT_PLAN => "\n[Pagamento por etapas]",
        LABEL_ROUTE => "Rota tecnológica:",
        LABEL_DAILY_BIOGAS => "Biogás diário [m³/dia]:",
        LABEL_MONTHLY_BIOGAS => "Biogás mensal [m³/mês]:",
        LABEL_DAILY_ENERGY => "Energia diária [kWh/dia]:",
        LABEL_INSTALLED_POWER => "Potência instalada [kW]:",
        LABEL_REQUIRED_VOLUME => "Volume de biodigestor necessário [m³]:",
        LABEL_UNRECOGNIZED => "Entradas não reconhecidas (contadas como zero):",
        LABEL_BIODIGESTER => "Biodigestor:",
        LABEL_GENERATOR => "Gerador:",
        LABEL_OPERATING_HOURS => "Horas de operação [h/dia]:",
        LABEL_CUSTOM_ENGINEERING => "Volume acima do maior modelo padrão; projeto customizado necessário.",
        LABEL_GENERATOR_FALLBACK => "Nenhum gerador dentro da faixa de operação; escolhido o mais próximo.",
        LABEL_TOTAL => "Total:",
        LABEL_MONTHLY_TOTAL => "Total mensal:",
        LABEL_ANNUAL_TOTAL => "Total anual:",
        LABEL_OWN_CAPITAL => "Capital próprio:",
        LABEL_FINANCED => "Valor financiado:",
        LABEL_MONTHLY_INSTALLMENT => "Parcela mensal (primeira):",
        LABEL_NET_MONTHLY_SAVINGS => "Economia mensal líquida:",
        LABEL_MONTHLY_NET_CASH_FLOW => "Fluxo de caixa mensal líquido:",
        LABEL_CASH_FLOW_HEADER => "Ano     Economia        OPEX     Parcela   Fluxo simples     Acumulado",
        LABEL_IRR => "TIR [%]:",
        LABEL_NPV => "VPL:",
        LABEL_PAYBACK_SIMPLE => "Payback simples [anos]:",
        LABEL_PAYBACK_DISCOUNTED => "Payback descontado [anos]:",
        LABEL_ROI => "ROI [%]:",
        LABEL_VIABLE => "Viável",
        LABEL_NOT_VIABLE => "Inviável",
        LABEL_SCORE => "Pontuação:",
        "capex.project_management" => "Gestão do projeto",
        "capex.pretreatment" => "Pré-tratamento",
        "capex.biodigestion_system" => "Sistema de biodigestão",
        "capex.digestate" => "Digestato",
        "capex.biogas_conduction" => "Condução e tratamento do biogás",
        "capex.electric_generation" => "Geração elétrica",
        "capex.thermal" => "Aproveitamento térmico",
        "capex.biomethane" => "Biometano",
        "capex.organomineral" => "Fertilizante organomineral",
        "capex.infrastructure" => "Infraestrutura elétrica",
        "opex.logistics" => "Logística",
        "opex.biodigestion_maintenance" => "Manutenção da biodigestão",
        "opex.biogas_treatment_maintenance" => "Manutenção do tratamento do biogás",
        "opex.electric_generation_maintenance" => "Manutenção da geração",
        "opex.thermal_maintenance" => "Manutenção térmica",
        "opex.biomethane_maintenance" => "Manutenção do biometano",
        "opex.organomineral_maintenance" => "Manutenção da fábrica de fertilizante",
        "opex.operation" => "Operação",
        "opex.administrative" => "Administrativo",
        "opex.biomass_remuneration" => "Remuneração da biomassa",
        "issue.biogas_too_low" => "Produção de biogás insuficiente",
        "issue.biogas_below_ideal" => "Produção de biogás abaixo do ideal",
        "issue.power_too_low" => "Potência instalada muito baixa",
        "issue.power_below_ideal" => "Potência instalada abaixo do ideal",
        "issue.biodigester_oversized" => "Volume de biodigestor excessivo; projeto customizado",
        "issue.negative_monthly_cash_flow" => "Receita líquida mensal negativa - as parcelas superam a economia",
        "issue.payback_too_long" => "Período de retorno muito longo",
        "issue.no_payback_within_horizon" => "Investimento não recuperado no horizonte projetado",
        "issue.insufficient_energy" => "Produção de energia insuficiente para atender o consumo mensal",
        "route.manure" => "Biodigestão anaeróbia de dejetos animais",
        "route.organic_waste" => "Biodigestão anaeróbia de resíduos sólidos",
        "route.co_digestion" => "Codigestão de dejetos animais e resíduos orgânicos",
        "route.generic" => "Biodigestão anaeróbia de resíduos orgânicos",
        "milestone.signature" => "Assinatura",
        "milestone.contract" => "Contrato",
        "milestone.waterproofing" => "Impermeabilização",
        "milestone.generator_shipping" => "Embarque do gerador",
        "milestone.start_up" => "Partida",
        _ => return None,
    })
}
