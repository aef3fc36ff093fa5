mod negotiation;
mod request_gate;

pub use negotiation::{negotiate_locale, LOCALE_COOKIE};
pub use request_gate::{decide, request_gate, GateDecision, GateRequest};
