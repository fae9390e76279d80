//! Authentication Endpoint Handlers
//!
//! One module per endpoint, mirroring the `/api/auth/*` route table:
//! signup, signin, signout, me, delete-account, forgot-password.

pub mod delete_account;
pub mod forgot_password;
pub mod me;
pub mod signin;
pub mod signout;
pub mod signup;
pub mod types;

pub use delete_account::delete_account;
pub use forgot_password::forgot_password;
pub use me::me;
pub use signin::signin;
pub use signout::signout;
pub use signup::signup;
