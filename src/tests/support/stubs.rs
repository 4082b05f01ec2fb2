use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::user_query::UserPage;
use crate::auth::application::use_cases::change_password::{
    ChangePasswordError, IChangePasswordUseCase,
};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserRequest, ICreateUserUseCase,
};
use crate::auth::application::use_cases::deactivate_user::{
    DeactivateUserError, IDeactivateUserUseCase,
};
use crate::auth::application::use_cases::fetch_profile::{FetchProfileError, IFetchProfileUseCase};
use crate::auth::application::use_cases::list_users::{IListUsersUseCase, ListUsersError};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginOutput, LoginRequest,
};
use crate::auth::application::use_cases::logout_user::{ILogoutUserUseCase, LogoutError};
use crate::auth::application::use_cases::refresh_session::{
    IRefreshSessionUseCase, RefreshError, RefreshOutput,
};
use crate::auth::application::use_cases::update_user::{
    IUpdateUserUseCase, UpdateUserError, UpdateUserRequest,
};
use crate::ticket::application::ports::outgoing::ticket_notifier::{
    TicketNotificationError, TicketNotifier,
};
use crate::ticket::application::ports::outgoing::ticket_query::{
    PageRequest, PageResult, SalesStats, TicketListFilter, TicketView,
};
use crate::ticket::application::use_cases::cancel_ticket::{CancelTicketError, ICancelTicketUseCase};
use crate::ticket::application::use_cases::fetch_ticket::{FetchTicketError, IFetchTicketUseCase};
use crate::ticket::application::use_cases::issue_ticket::{
    IIssueTicketUseCase, IssueTicketError, IssueTicketRequest,
};
use crate::ticket::application::use_cases::list_tickets::{IListTicketsUseCase, ListTicketsError};
use crate::ticket::application::use_cases::redeem_ticket::{IRedeemTicketUseCase, RedeemTicketError};
use crate::ticket::application::use_cases::resend_ticket::{IResendTicketUseCase, ResendTicketError};
use crate::ticket::application::use_cases::sales_stats::{ISalesStatsUseCase, SalesStatsError};
use crate::ticket::application::use_cases::scan_ticket::{
    IScanTicketUseCase, ScanResult, ScanTicketError,
};

use super::fixtures::empty_sales_stats;

// Ticket side

pub struct StubIssueTicketUseCase;

#[async_trait]
impl IIssueTicketUseCase for StubIssueTicketUseCase {
    async fn execute(
        &self,
        _request: IssueTicketRequest,
        _created_by: Uuid,
    ) -> Result<TicketView, IssueTicketError> {
        Err(IssueTicketError::RepositoryError(
            "not wired in this test".to_string(),
        ))
    }
}

pub struct StubTicketNotifier;

#[async_trait]
impl TicketNotifier for StubTicketNotifier {
    async fn send_ticket_email(&self, _ticket: &TicketView) -> Result<(), TicketNotificationError> {
        Ok(())
    }
}

pub struct StubFetchTicketUseCase;

#[async_trait]
impl IFetchTicketUseCase for StubFetchTicketUseCase {
    async fn execute(&self, _ticket_id: Uuid) -> Result<TicketView, FetchTicketError> {
        Err(FetchTicketError::TicketNotFound)
    }
}

pub struct StubListTicketsUseCase;

#[async_trait]
impl IListTicketsUseCase for StubListTicketsUseCase {
    async fn execute(
        &self,
        _filter: TicketListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TicketView>, ListTicketsError> {
        Ok(PageResult {
            items: Vec::new(),
            page: page.page,
            limit: page.limit,
            total: 0,
        })
    }
}

pub struct StubScanTicketUseCase;

#[async_trait]
impl IScanTicketUseCase for StubScanTicketUseCase {
    async fn execute(&self, _qr_data: &str) -> Result<ScanResult, ScanTicketError> {
        Ok(ScanResult {
            ticket: None,
            is_valid: false,
            message: "Invalid QR code".to_string(),
        })
    }
}

pub struct StubRedeemTicketUseCase;

#[async_trait]
impl IRedeemTicketUseCase for StubRedeemTicketUseCase {
    async fn execute(&self, _ticket_id: Uuid) -> Result<TicketView, RedeemTicketError> {
        Err(RedeemTicketError::TicketNotFound)
    }
}

pub struct StubCancelTicketUseCase;

#[async_trait]
impl ICancelTicketUseCase for StubCancelTicketUseCase {
    async fn execute(&self, _ticket_id: Uuid) -> Result<(), CancelTicketError> {
        Err(CancelTicketError::TicketNotFound)
    }
}

pub struct StubResendTicketUseCase;

#[async_trait]
impl IResendTicketUseCase for StubResendTicketUseCase {
    async fn execute(
        &self,
        _ticket_id: Uuid,
        _email_override: Option<String>,
    ) -> Result<TicketView, ResendTicketError> {
        Err(ResendTicketError::TicketNotFound)
    }
}

pub struct StubSalesStatsUseCase;

#[async_trait]
impl ISalesStatsUseCase for StubSalesStatsUseCase {
    async fn execute(&self) -> Result<SalesStats, SalesStatsError> {
        Ok(empty_sales_stats())
    }
}

// Auth side

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginOutput, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubRefreshSessionUseCase;

#[async_trait]
impl IRefreshSessionUseCase for StubRefreshSessionUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<RefreshOutput, RefreshError> {
        Err(RefreshError::InvalidRefreshToken)
    }
}

pub struct StubLogoutUserUseCase;

#[async_trait]
impl ILogoutUserUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<(), LogoutError> {
        Ok(())
    }
}

pub struct StubFetchProfileUseCase;

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<User, FetchProfileError> {
        Err(FetchProfileError::UserNotFound)
    }
}

pub struct StubChangePasswordUseCase;

#[async_trait]
impl IChangePasswordUseCase for StubChangePasswordUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _current_password: &str,
        _new_password: &str,
    ) -> Result<(), ChangePasswordError> {
        Err(ChangePasswordError::UserNotFound)
    }
}

pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _request: CreateUserRequest) -> Result<User, CreateUserError> {
        Err(CreateUserError::RepositoryError(
            "not wired in this test".to_string(),
        ))
    }
}

pub struct StubListUsersUseCase;

#[async_trait]
impl IListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self, page: u32, limit: u32) -> Result<UserPage, ListUsersError> {
        Ok(UserPage {
            items: Vec::new(),
            page,
            limit,
            total: 0,
        })
    }
}

pub struct StubUpdateUserUseCase;

#[async_trait]
impl IUpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _request: UpdateUserRequest,
    ) -> Result<User, UpdateUserError> {
        Err(UpdateUserError::UserNotFound)
    }
}

pub struct StubDeactivateUserUseCase;

#[async_trait]
impl IDeactivateUserUseCase for StubDeactivateUserUseCase {
    async fn execute(&self, _actor_id: Uuid, _target_id: Uuid) -> Result<(), DeactivateUserError> {
        Err(DeactivateUserError::UserNotFound)
    }
}
