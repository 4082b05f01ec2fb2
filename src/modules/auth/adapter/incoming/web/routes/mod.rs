pub mod change_password;
pub mod create_user;
pub mod deactivate_user;
pub mod fetch_profile;
pub mod list_users;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod update_user;

pub use change_password::{change_password_handler, ChangePasswordDto, ChangePasswordResponse};
pub use create_user::{create_user_handler, CreateUserDto};
pub use deactivate_user::{deactivate_user_handler, DeactivateUserResponse};
pub use fetch_profile::fetch_profile_handler;
pub use list_users::{list_users_handler, ListUsersQuery};
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse};
pub use logout_user::{logout_user_handler, LogoutDto, LogoutResponse};
pub use refresh_token::{refresh_token_handler, RefreshTokenDto, RefreshTokenResponse};
pub use update_user::{update_user_handler, UpdateUserDto};
