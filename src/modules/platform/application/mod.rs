pub mod domain;
pub mod platform_use_cases;
pub mod ports;
pub mod service;
