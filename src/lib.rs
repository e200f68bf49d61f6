pub mod errors;
pub mod password;
pub mod secret;
pub mod session;
pub mod token;
