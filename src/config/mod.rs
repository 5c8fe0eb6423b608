//! 설정 모듈.

mod env;

pub use env::APP_CONFIG;
#[cfg(test)]
pub use env::get_environments;
