//! 입력 환산용 단위 정의 모음.

pub mod mass;
pub mod volume;

pub use mass::{convert_mass, MassUnit};
pub use volume::{convert_volume, VolumeUnit};
