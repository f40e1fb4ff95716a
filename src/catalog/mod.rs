//! 정적 카탈로그 모음. 가축/기질 바이오가스 계수, 바이오다이제스터, 발전기 표를 담는다.
//!
//! 모든 표는 `'static` 상수이며 프로세스 수명 동안 변경되지 않는다. 여러 계산이
//! 동시에 읽어도 동기화가 필요 없다.

pub mod biodigester;
pub mod feedstock;
pub mod generator;

pub use biodigester::{biodigester_models, select_biodigester, BiodigesterModel, BiodigesterShape};
pub use feedstock::{
    find_livestock, find_substrate, livestock_profiles, substrate_profiles, LivestockProfile,
    SubstrateProfile,
};
pub use generator::{
    daily_energy_kwh, generation_components, generator_models, operating_hours,
    select_generator, GenerationComponents, GeneratorModel, GeneratorSelection,
};

/// 카탈로그 조회에 쓰는 대소문자 무시 비교. 코드 또는 별칭 중 하나와 일치하면 참.
pub(crate) fn matches_name(query: &str, code: &str, aliases: &[&str]) -> bool {
    let q = query.trim();
    code.eq_ignore_ascii_case(q) || aliases.iter().any(|a| a.eq_ignore_ascii_case(q))
}
