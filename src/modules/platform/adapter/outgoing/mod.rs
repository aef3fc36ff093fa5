mod homepage_scan_postgres;
mod regex_platform_postgres;

pub use homepage_scan_postgres::HomepageScanPostgres;
pub use regex_platform_postgres::RegexPlatformPostgres;
