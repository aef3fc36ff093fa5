mod check_session;
mod login_admin;
mod logout_admin;
mod public_setup;

pub use check_session::{__path_check_session_handler, check_session_handler};
pub use login_admin::{__path_login_admin_handler, login_admin_handler, LoginRequestDto};
pub use logout_admin::{__path_logout_admin_handler, logout_admin_handler, LogoutResponseBody};
pub use public_setup::{__path_public_setup_handler, public_setup_handler};
