//! 바이오가스 발전 사업성 평가 엔진.
//!
//! 계산 로직은 모두 순수 함수이며 라이브러리로 분리해 CLI 외의 표현 계층에서도 쓸 수 있게 한다.

pub mod app;
pub mod biogas;
pub mod catalog;
pub mod config;
pub mod costs;
pub mod finance;
pub mod i18n;
pub mod proposal;
pub mod ui_cli;
pub mod units;
pub mod viability;
