pub mod change_password;
pub mod get_profile;
pub mod login;
pub mod logout;
pub mod register;
