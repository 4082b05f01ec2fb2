use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::{
    change_password::IChangePasswordUseCase, create_user::ICreateUserUseCase,
    deactivate_user::IDeactivateUserUseCase, fetch_profile::IFetchProfileUseCase,
    list_users::IListUsersUseCase, login_user::ILoginUserUseCase, logout_user::ILogoutUserUseCase,
    refresh_session::IRefreshSessionUseCase, update_user::IUpdateUserUseCase,
};
use crate::ticket::application::orchestrator::ticket_issuance::TicketIssuanceOrchestrator;
use crate::ticket::application::use_cases::{
    cancel_ticket::ICancelTicketUseCase, fetch_ticket::IFetchTicketUseCase,
    issue_ticket::IIssueTicketUseCase, list_tickets::IListTicketsUseCase,
    redeem_ticket::IRedeemTicketUseCase, resend_ticket::IResendTicketUseCase,
    sales_stats::ISalesStatsUseCase, scan_ticket::IScanTicketUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub fn default_test_ticket_issuance_orchestrator() -> Arc<TicketIssuanceOrchestrator> {
    Arc::new(TicketIssuanceOrchestrator::new(
        Arc::new(StubIssueTicketUseCase),
        Arc::new(StubTicketNotifier),
    ))
}

pub fn orchestrator_with(
    use_case: impl IIssueTicketUseCase + 'static,
) -> Arc<TicketIssuanceOrchestrator> {
    Arc::new(TicketIssuanceOrchestrator::new(
        Arc::new(use_case),
        Arc::new(StubTicketNotifier),
    ))
}

pub struct TestAppStateBuilder {
    issue_ticket_orchestrator: Option<Arc<TicketIssuanceOrchestrator>>,
    fetch_ticket: Option<Arc<dyn IFetchTicketUseCase + Send + Sync>>,
    list_tickets: Option<Arc<dyn IListTicketsUseCase + Send + Sync>>,
    scan_ticket: Option<Arc<dyn IScanTicketUseCase + Send + Sync>>,
    redeem_ticket: Option<Arc<dyn IRedeemTicketUseCase + Send + Sync>>,
    cancel_ticket: Option<Arc<dyn ICancelTicketUseCase + Send + Sync>>,
    resend_ticket: Option<Arc<dyn IResendTicketUseCase + Send + Sync>>,
    sales_stats: Option<Arc<dyn ISalesStatsUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    refresh_session: Option<Arc<dyn IRefreshSessionUseCase + Send + Sync>>,
    logout_user: Option<Arc<dyn ILogoutUserUseCase + Send + Sync>>,
    fetch_profile: Option<Arc<dyn IFetchProfileUseCase + Send + Sync>>,
    change_password: Option<Arc<dyn IChangePasswordUseCase + Send + Sync>>,
    create_user: Option<Arc<dyn ICreateUserUseCase + Send + Sync>>,
    list_users: Option<Arc<dyn IListUsersUseCase + Send + Sync>>,
    update_user: Option<Arc<dyn IUpdateUserUseCase + Send + Sync>>,
    deactivate_user: Option<Arc<dyn IDeactivateUserUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            issue_ticket_orchestrator: Some(default_test_ticket_issuance_orchestrator()),
            fetch_ticket: Some(Arc::new(StubFetchTicketUseCase)),
            list_tickets: Some(Arc::new(StubListTicketsUseCase)),
            scan_ticket: Some(Arc::new(StubScanTicketUseCase)),
            redeem_ticket: Some(Arc::new(StubRedeemTicketUseCase)),
            cancel_ticket: Some(Arc::new(StubCancelTicketUseCase)),
            resend_ticket: Some(Arc::new(StubResendTicketUseCase)),
            sales_stats: Some(Arc::new(StubSalesStatsUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            refresh_session: Some(Arc::new(StubRefreshSessionUseCase)),
            logout_user: Some(Arc::new(StubLogoutUserUseCase)),
            fetch_profile: Some(Arc::new(StubFetchProfileUseCase)),
            change_password: Some(Arc::new(StubChangePasswordUseCase)),
            create_user: Some(Arc::new(StubCreateUserUseCase)),
            list_users: Some(Arc::new(StubListUsersUseCase)),
            update_user: Some(Arc::new(StubUpdateUserUseCase)),
            deactivate_user: Some(Arc::new(StubDeactivateUserUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_issue_ticket_orchestrator(
        mut self,
        orchestrator: Arc<TicketIssuanceOrchestrator>,
    ) -> Self {
        self.issue_ticket_orchestrator = Some(orchestrator);
        self
    }

    pub fn with_fetch_ticket(mut self, uc: impl IFetchTicketUseCase + 'static) -> Self {
        self.fetch_ticket = Some(Arc::new(uc));
        self
    }

    pub fn with_list_tickets(mut self, uc: impl IListTicketsUseCase + 'static) -> Self {
        self.list_tickets = Some(Arc::new(uc));
        self
    }

    pub fn with_scan_ticket(mut self, uc: impl IScanTicketUseCase + 'static) -> Self {
        self.scan_ticket = Some(Arc::new(uc));
        self
    }

    pub fn with_redeem_ticket(mut self, uc: impl IRedeemTicketUseCase + 'static) -> Self {
        self.redeem_ticket = Some(Arc::new(uc));
        self
    }

    pub fn with_cancel_ticket(mut self, uc: impl ICancelTicketUseCase + 'static) -> Self {
        self.cancel_ticket = Some(Arc::new(uc));
        self
    }

    pub fn with_resend_ticket(mut self, uc: impl IResendTicketUseCase + 'static) -> Self {
        self.resend_ticket = Some(Arc::new(uc));
        self
    }

    pub fn with_sales_stats(mut self, uc: impl ISalesStatsUseCase + 'static) -> Self {
        self.sales_stats = Some(Arc::new(uc));
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Some(Arc::new(uc));
        self
    }

    pub fn with_refresh_session(
        mut self,
        uc: impl IRefreshSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_session = Some(Arc::new(uc));
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUserUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile = Some(Arc::new(uc));
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl IChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.change_password = Some(Arc::new(uc));
        self
    }

    pub fn with_create_user(mut self, uc: impl ICreateUserUseCase + Send + Sync + 'static) -> Self {
        self.create_user = Some(Arc::new(uc));
        self
    }

    pub fn with_list_users(mut self, uc: impl IListUsersUseCase + Send + Sync + 'static) -> Self {
        self.list_users = Some(Arc::new(uc));
        self
    }

    pub fn with_update_user(mut self, uc: impl IUpdateUserUseCase + Send + Sync + 'static) -> Self {
        self.update_user = Some(Arc::new(uc));
        self
    }

    pub fn with_deactivate_user(
        mut self,
        uc: impl IDeactivateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.deactivate_user = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            issue_ticket_orchestrator: self.issue_ticket_orchestrator.unwrap(),
            fetch_ticket_use_case: self.fetch_ticket.unwrap(),
            list_tickets_use_case: self.list_tickets.unwrap(),
            scan_ticket_use_case: self.scan_ticket.unwrap(),
            redeem_ticket_use_case: self.redeem_ticket.unwrap(),
            cancel_ticket_use_case: self.cancel_ticket.unwrap(),
            resend_ticket_use_case: self.resend_ticket.unwrap(),
            sales_stats_use_case: self.sales_stats.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            refresh_session_use_case: self.refresh_session.unwrap(),
            logout_user_use_case: self.logout_user.unwrap(),
            fetch_profile_use_case: self.fetch_profile.unwrap(),
            change_password_use_case: self.change_password.unwrap(),
            create_user_use_case: self.create_user.unwrap(),
            list_users_use_case: self.list_users.unwrap(),
            update_user_use_case: self.update_user.unwrap(),
            deactivate_user_use_case: self.deactivate_user.unwrap(),
        })
    }
}
