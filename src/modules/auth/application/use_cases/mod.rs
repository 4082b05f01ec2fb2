pub mod change_password;
pub mod create_user;
pub mod deactivate_user;
pub mod fetch_profile;
pub mod list_users;
pub mod login_user;
pub mod logout_user;
pub mod refresh_session;
pub mod update_user;
