pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::email;
pub use modules::qr;
pub use modules::ticket;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::{
    RefreshTokenRepositoryPostgres, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::use_cases::{
    change_password::{ChangePasswordUseCase, IChangePasswordUseCase},
    create_user::{CreateUserUseCase, ICreateUserUseCase},
    deactivate_user::{DeactivateUserUseCase, IDeactivateUserUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    list_users::{IListUsersUseCase, ListUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUserUseCase, LogoutUserUseCase},
    refresh_session::{IRefreshSessionUseCase, RefreshSessionUseCase},
    update_user::{IUpdateUserUseCase, UpdateUserUseCase},
};

use crate::ticket::adapter::outgoing::{
    EventRepositoryPostgres, TicketQueryPostgres, TicketRepositoryPostgres,
};
use crate::ticket::application::orchestrator::ticket_issuance::TicketIssuanceOrchestrator;
use crate::ticket::application::use_cases::{
    cancel_ticket::{CancelTicketUseCase, ICancelTicketUseCase},
    fetch_ticket::{FetchTicketUseCase, IFetchTicketUseCase},
    issue_ticket::{IIssueTicketUseCase, IssueTicketUseCase},
    list_tickets::{IListTicketsUseCase, ListTicketsUseCase},
    redeem_ticket::{IRedeemTicketUseCase, RedeemTicketUseCase},
    resend_ticket::{IResendTicketUseCase, ResendTicketUseCase},
    sales_stats::{ISalesStatsUseCase, SalesStatsUseCase},
    scan_ticket::{IScanTicketUseCase, ScanTicketUseCase},
};

use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::services::TicketEmailService;

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub issue_ticket_orchestrator: Arc<TicketIssuanceOrchestrator>,
    pub fetch_ticket_use_case: Arc<dyn IFetchTicketUseCase + Send + Sync>,
    pub list_tickets_use_case: Arc<dyn IListTicketsUseCase + Send + Sync>,
    pub scan_ticket_use_case: Arc<dyn IScanTicketUseCase + Send + Sync>,
    pub redeem_ticket_use_case: Arc<dyn IRedeemTicketUseCase + Send + Sync>,
    pub cancel_ticket_use_case: Arc<dyn ICancelTicketUseCase + Send + Sync>,
    pub resend_ticket_use_case: Arc<dyn IResendTicketUseCase + Send + Sync>,
    pub sales_stats_use_case: Arc<dyn ISalesStatsUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_session_use_case: Arc<dyn IRefreshSessionUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUserUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub change_password_use_case: Arc<dyn IChangePasswordUseCase + Send + Sync>,
    pub create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn IListUsersUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn IUpdateUserUseCase + Send + Sync>,
    pub deactivate_user_use_case: Arc<dyn IDeactivateUserUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::{
        adapter::outgoing::security::BcryptHasher,
        application::ports::outgoing::token_provider::TokenProvider,
    };
    use crate::email::application::ports::outgoing::EmailSender;
    use crate::ticket::application::ports::outgoing::TicketNotifier;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // SMTP SETUPS
    let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if std::env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Ticket repositories and use cases
    let event_repo = EventRepositoryPostgres::new(Arc::clone(&db_arc));
    let ticket_repo = TicketRepositoryPostgres::new(Arc::clone(&db_arc));
    let ticket_query = TicketQueryPostgres::new(Arc::clone(&db_arc));

    let email_sender_arc: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);
    let ticket_email_service = TicketEmailService::new(email_sender_arc);

    // Ticket issuance components
    let issue_ticket_use_case = IssueTicketUseCase::new(event_repo, ticket_repo.clone());
    let issue_ticket_uc_arc: Arc<dyn IIssueTicketUseCase + Send + Sync> =
        Arc::new(issue_ticket_use_case);
    let ticket_notifier_arc: Arc<dyn TicketNotifier + Send + Sync> =
        Arc::new(ticket_email_service.clone());

    let issue_ticket_orchestrator =
        TicketIssuanceOrchestrator::new(issue_ticket_uc_arc, ticket_notifier_arc);

    let fetch_ticket_use_case = FetchTicketUseCase::new(ticket_query.clone());
    let list_tickets_use_case = ListTicketsUseCase::new(ticket_query.clone());
    let scan_ticket_use_case = ScanTicketUseCase::new(ticket_query.clone());
    let sales_stats_use_case = SalesStatsUseCase::new(ticket_query.clone());
    let redeem_ticket_use_case =
        RedeemTicketUseCase::new(ticket_repo.clone(), ticket_query.clone());
    let cancel_ticket_use_case =
        CancelTicketUseCase::new(ticket_repo.clone(), ticket_query.clone());
    let resend_ticket_use_case =
        ResendTicketUseCase::new(ticket_repo, ticket_query, ticket_email_service);

    // Auth repositories and use cases
    let jwt_config = JwtConfig::from_env();
    let refresh_token_ttl = chrono::Duration::seconds(jwt_config.refresh_token_expiry);
    let jwt_service = JwtTokenService::new(jwt_config);

    let password_hasher = Arc::new(BcryptHasher);
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let refresh_token_repo = RefreshTokenRepositoryPostgres::new(Arc::clone(&db_arc));

    let login_user_use_case = LoginUserUseCase::new(
        Arc::new(user_query.clone()),
        Arc::new(refresh_token_repo.clone()),
        Arc::clone(&password_hasher),
        Arc::new(jwt_service.clone()),
        refresh_token_ttl,
    );
    let refresh_session_use_case = RefreshSessionUseCase::new(
        Arc::new(refresh_token_repo.clone()),
        Arc::new(user_query.clone()),
        Arc::new(jwt_service.clone()),
    );
    let logout_user_use_case = LogoutUserUseCase::new(Arc::new(refresh_token_repo.clone()));
    let fetch_profile_use_case = FetchProfileUseCase::new(Arc::new(user_query.clone()));
    let change_password_use_case = ChangePasswordUseCase::new(
        Arc::new(user_query.clone()),
        Arc::new(user_repo.clone()),
        Arc::new(refresh_token_repo.clone()),
        Arc::clone(&password_hasher),
    );
    let create_user_use_case =
        CreateUserUseCase::new(Arc::new(user_repo.clone()), Arc::clone(&password_hasher));
    let list_users_use_case = ListUsersUseCase::new(Arc::new(user_query));
    let update_user_use_case = UpdateUserUseCase::new(Arc::new(user_repo.clone()));
    let deactivate_user_use_case =
        DeactivateUserUseCase::new(Arc::new(user_repo), Arc::new(refresh_token_repo));

    let state = AppState {
        issue_ticket_orchestrator: Arc::new(issue_ticket_orchestrator),
        fetch_ticket_use_case: Arc::new(fetch_ticket_use_case),
        list_tickets_use_case: Arc::new(list_tickets_use_case),
        scan_ticket_use_case: Arc::new(scan_ticket_use_case),
        redeem_ticket_use_case: Arc::new(redeem_ticket_use_case),
        cancel_ticket_use_case: Arc::new(cancel_ticket_use_case),
        resend_ticket_use_case: Arc::new(resend_ticket_use_case),
        sales_stats_use_case: Arc::new(sales_stats_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        refresh_session_use_case: Arc::new(refresh_session_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        change_password_use_case: Arc::new(change_password_use_case),
        create_user_use_case: Arc::new(create_user_use_case),
        list_users_use_case: Arc::new(list_users_use_case),
        update_user_use_case: Arc::new(update_user_use_case),
        deactivate_user_use_case: Arc::new(deactivate_user_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    // Tickets
    cfg.service(crate::ticket::adapter::incoming::web::routes::issue_ticket_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::list_tickets_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::scan_ticket_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::fetch_ticket_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::resend_ticket_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::redeem_ticket_handler);
    cfg.service(crate::ticket::adapter::incoming::web::routes::cancel_ticket_handler);
    // QR scanner devices
    cfg.service(crate::qr::adapter::incoming::web::routes::validate_qr_handler);
    cfg.service(crate::qr::adapter::incoming::web::routes::mark_used_qr_handler);
    // Admin
    cfg.service(crate::ticket::adapter::incoming::web::routes::sales_stats_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::create_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::list_users_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::deactivate_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
