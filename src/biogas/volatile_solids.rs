use tracing::warn;

use super::{
    LivestockContribution, LivestockEntry, SubstrateContribution, SubstrateEntry,
    UnrecognizedEntry, YieldModel, YieldParams, YieldResult, KWH_PER_M3_BIOGAS,
};
use crate::catalog::{find_livestock, find_substrate};
use crate::units::{convert_mass, convert_volume, MassUnit, VolumeUnit};

/// VS 1 kg당 분뇨 체적 [m³/kg VS]. 총고형물 10~15 % 가정의 경험치.
const SLURRY_M3_PER_KG_VS: f64 = 0.007;
/// 기질 밀도 [kg/m³]
const SUBSTRATE_DENSITY_KG_PER_M3: f64 = 1000.0;

/// 휘발성 고형물 기반 생산량 모델.
///
/// - 가축: `VS = 두당VS × 두수 × (체류시간/24)`, `바이오가스 = VS × L/kgVS × 효율 / 1000`
/// - 기질: `바이오가스 = 톤 × m³/t × 효율`
/// - 체적: `Σ VS × 0.007 + Σ 기질kg / 1000`, 소화조 = 일일 체적 × HRT
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatileSolidsModel {
    pub kwh_per_m3: f64,
    pub slurry_m3_per_kg_vs: f64,
    pub substrate_density_kg_per_m3: f64,
}

impl Default for VolatileSolidsModel {
    fn default() -> Self {
        Self {
            kwh_per_m3: KWH_PER_M3_BIOGAS,
            slurry_m3_per_kg_vs: SLURRY_M3_PER_KG_VS,
            substrate_density_kg_per_m3: SUBSTRATE_DENSITY_KG_PER_M3,
        }
    }
}

impl YieldModel for VolatileSolidsModel {
    fn estimate(
        &self,
        livestock: &[LivestockEntry],
        substrates: &[SubstrateEntry],
        params: YieldParams,
    ) -> YieldResult {
        let mut result = YieldResult {
            operating_hours_per_day: params.target_operating_hours,
            ..YieldResult::default()
        };

        for entry in livestock {
            let Some(profile) = find_livestock(&entry.species, &entry.class) else {
                warn!(
                    species = %entry.species,
                    class = %entry.class,
                    "unknown livestock entry ignored"
                );
                result.unrecognized.push(UnrecognizedEntry::Livestock {
                    species: entry.species.clone(),
                    class: entry.class.clone(),
                });
                continue;
            };
            let confinement = (entry.confinement_hours / 24.0).clamp(0.0, 1.0);
            let vs_kg = profile.vs_kg_per_head_day * f64::from(entry.headcount) * confinement;
            let biogas_liters = vs_kg * profile.biogas_liters_per_kg_vs * profile.process_efficiency;
            let biogas_m3 = convert_volume(biogas_liters, VolumeUnit::Liter, VolumeUnit::CubicMeter);

            result.daily_volatile_solids_kg += vs_kg;
            result.livestock_biogas_m3 += biogas_m3;
            result.daily_biomass_volume_m3 += vs_kg * self.slurry_m3_per_kg_vs;
            result.livestock_detail.push(LivestockContribution {
                species: entry.species.clone(),
                class: entry.class.clone(),
                headcount: entry.headcount,
                volatile_solids_kg: vs_kg,
                biogas_m3,
            });
        }

        for entry in substrates {
            let Some(profile) = find_substrate(&entry.kind) else {
                warn!(kind = %entry.kind, "unknown substrate entry ignored");
                result.unrecognized.push(UnrecognizedEntry::Substrate {
                    kind: entry.kind.clone(),
                });
                continue;
            };
            let mass_kg = convert_mass(entry.daily_mass.max(0.0), entry.unit, MassUnit::Kilogram);
            let tonnes = convert_mass(mass_kg, MassUnit::Kilogram, MassUnit::Tonne);
            let biogas_m3 = tonnes * profile.biogas_m3_per_tonne * profile.process_efficiency;

            result.substrate_biogas_m3 += biogas_m3;
            result.daily_biomass_volume_m3 += mass_kg / self.substrate_density_kg_per_m3;
            result.substrate_detail.push(SubstrateContribution {
                kind: entry.kind.clone(),
                mass_kg,
                biogas_m3,
            });
        }

        result.daily_biogas_m3 = result.livestock_biogas_m3 + result.substrate_biogas_m3;
        result.daily_energy_kwh = result.daily_biogas_m3 * self.kwh_per_m3;
        result.installed_power_kw = if params.target_operating_hours > 0.0 {
            result.daily_energy_kwh / params.target_operating_hours
        } else {
            0.0
        };
        result.required_biodigester_volume_m3 =
            result.daily_biomass_volume_m3 * params.hydraulic_retention_days.max(0.0);
        result
    }
}
