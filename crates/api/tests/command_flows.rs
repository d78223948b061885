//! Integration tests for the command layer
//!
//! Each test wires a full `AppContext` against a wiremock backend and drives
//! it through the public commands.

use std::io::Write;
use std::sync::Arc;

use numerolog_core::{AuthStep, Tab};
use numerolog_domain::constants::{messages, GUEST_LABEL};
use numerolog_domain::utils::validation::RegistrationForm;
use numerolog_domain::{
    ApiConfig, CalculatorId, CalculatorView, Config, Tariff, TelegramIdentity,
};
use numerolog_infra::StaticIdentityProvider;
use numerolog_lib::AppContext;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        api: ApiConfig { base_url: server.uri(), timeout_secs: 5, max_attempts: 1 },
        support_url: Some("https://t.me/numerolog_support".into()),
    }
}

fn context(server: &MockServer, identity: Option<TelegramIdentity>) -> AppContext {
    AppContext::new_with_identity(
        config_for(server),
        Arc::new(StaticIdentityProvider::new(identity)),
    )
    .expect("app context")
}

fn ivan() -> TelegramIdentity {
    TelegramIdentity {
        id: 77,
        first_name: Some("Иван".into()),
        last_name: Some("Петров".into()),
        username: Some("ivan".into()),
        photo_url: None,
    }
}

fn user_json(id: i64, tariff: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Иван Петров",
        "email": "ivan@example.com",
        "phone": null,
        "birth_date": "15.03.1990",
        "tariff": tariff,
        "telegram_id": 77,
        "telegram_username": "ivan",
        "telegram_first_name": "Иван",
        "telegram_last_name": "Петров",
        "is_email_verified": true
    })
}

async fn mount_user(server: &MockServer, tariff: &str) {
    Mock::given(method("GET"))
        .and(path("/users/by-telegram/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(12, tariff)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn guest_session_shows_the_guest_header() {
    let server = MockServer::start().await;
    let ctx = context(&server, None);

    let session = numerolog_lib::start_session(&ctx).await.unwrap();

    assert_eq!(session.tab, Tab::Matrix);
    assert_eq!(session.header.label, GUEST_LABEL);
    assert!(session.profile.is_none());
    assert!(session.profile_error.is_none());
}

#[tokio::test]
async fn telegram_session_loads_the_backend_profile() {
    let server = MockServer::start().await;
    mount_user(&server, "basic").await;
    let ctx = context(&server, Some(ivan()));

    let session = numerolog_lib::start_session(&ctx).await.unwrap();

    assert_eq!(session.header.label, "👤 Иван Петров");
    assert_eq!(session.header.initials, "ИП");
    assert_eq!(session.profile.map(|p| p.id), Some(12));
}

#[tokio::test]
async fn user_menu_closes_when_switching_to_calculate_for_me() {
    let server = MockServer::start().await;
    mount_user(&server, "free").await;
    let ctx = context(&server, Some(ivan()));
    numerolog_lib::start_session(&ctx).await.unwrap();

    let session = numerolog_lib::toggle_user_menu(&ctx).await.unwrap();
    assert!(session.header.menu_open);

    let session = numerolog_lib::calculate_for_me(&ctx, Tab::Ai).await.unwrap();
    assert!(!session.header.menu_open);
    assert_eq!(session.tab, Tab::Ai);
}

#[tokio::test]
async fn calculate_for_me_needs_a_birth_date() {
    let server = MockServer::start().await;
    let ctx = context(&server, None);
    numerolog_lib::start_session(&ctx).await.unwrap();

    let err = numerolog_lib::calculate_for_me(&ctx, Tab::Calculators).await.unwrap_err();

    assert_eq!(err, messages::BIRTH_DATE_MISSING);
}

#[tokio::test]
async fn calculate_for_me_seeds_every_page() {
    let server = MockServer::start().await;
    mount_user(&server, "pro").await;
    Mock::given(method("POST"))
        .and(path("/calculators/life_code"))
        .and(body_json(json!({"birth_date": "15.03.1990"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result_html": "Число 1"})))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = context(&server, Some(ivan()));
    numerolog_lib::start_session(&ctx).await.unwrap();
    numerolog_lib::switch_tab(&ctx, Tab::Profile).await.unwrap();

    let session = numerolog_lib::calculate_for_me(&ctx, Tab::Calculators).await.unwrap();
    assert_eq!(session.tab, Tab::Calculators);

    let outcome =
        numerolog_lib::run_calculator(&ctx, CalculatorId::LifeCode, None).await.unwrap();
    assert_eq!(outcome.result, "Число 1");
    assert_eq!(
        outcome.view,
        Some(CalculatorView::Paragraphs { paragraphs: vec![vec!["Число 1".to_string()]] })
    );
}

#[tokio::test]
async fn calculators_are_locked_below_the_pro_tariff() {
    let server = MockServer::start().await;
    mount_user(&server, "basic").await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let ctx = context(&server, Some(ivan()));
    numerolog_lib::start_session(&ctx).await.unwrap();

    let catalogue = numerolog_lib::list_calculators(&ctx).await.unwrap();
    assert!(!catalogue.has_access);
    assert_eq!(catalogue.calculators.len(), CalculatorId::ALL.len());

    let err =
        numerolog_lib::run_calculator(&ctx, CalculatorId::PythagorasSquare, Some("15031990"))
            .await
            .unwrap_err();
    assert_eq!(err, messages::CALCULATORS_LOCKED);

    let session = numerolog_lib::go_to_tariffs(&ctx).await.unwrap();
    assert_eq!(session.tab, Tab::Profile);
    assert!(numerolog_lib::get_profile(&ctx).await.unwrap().tariff_chooser_open);
}

#[tokio::test]
async fn guest_tariff_choice_unlocks_calculators_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/calculators/pythagoras_square"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result_html": "Вступление\nПСИХОМАТРИЦА:\n| 1 | 4 | 7 |\n| 2 | 5 | 8 |\n| 3 | 6 | 9 |\n\nИтог"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let ctx = context(&server, None);
    numerolog_lib::start_session(&ctx).await.unwrap();

    let view = numerolog_lib::select_tariff(&ctx, Tariff::Pro).await.unwrap();
    assert_eq!(view.tariff, "Профессиональный");
    assert!(!view.tariff_chooser_open);

    let outcome =
        numerolog_lib::run_calculator(&ctx, CalculatorId::PythagorasSquare, Some("02.08.1995"))
            .await
            .unwrap();
    assert_eq!(outcome.calculator, CalculatorId::PythagorasSquare);
    assert!(outcome.view.is_some());
}

#[tokio::test]
async fn matrix_rejects_incomplete_dates_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/matrix/image"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let ctx = context(&server, None);

    let err = numerolog_lib::compute_matrix(&ctx, Some("0208")).await.unwrap_err();

    assert_eq!(err, messages::INVALID_BIRTH_DATE);
}

#[tokio::test]
async fn matrix_failure_surfaces_the_backend_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/matrix/image"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "Матрица недоступна"})),
        )
        .mount(&server)
        .await;
    let ctx = context(&server, None);

    let err = numerolog_lib::compute_matrix(&ctx, Some("02081995")).await.unwrap_err();

    assert_eq!(err, "Матрица недоступна");
}

#[tokio::test]
async fn ai_report_is_split_into_paragraphs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ai/interpretation"))
        .and(body_json(json!({"birth_date": "02.08.1995"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "profile": {"life_path": 7},
            "report": "Первый абзац.\n\nВторой абзац."
        })))
        .mount(&server)
        .await;
    let ctx = context(&server, None);

    let report = numerolog_lib::generate_report(&ctx, Some("02081995")).await.unwrap();

    assert_eq!(report.paragraphs, vec!["Первый абзац.", "Второй абзац."]);
    assert_eq!(report.state.profile, Some(json!({"life_path": 7})));
}

#[tokio::test]
async fn ai_report_without_a_date_asks_for_one() {
    let server = MockServer::start().await;
    let ctx = context(&server, None);

    let err = numerolog_lib::generate_report(&ctx, None).await.unwrap_err();

    assert_eq!(err, messages::AI_DATE_REQUIRED);
}

#[tokio::test]
async fn failed_login_reports_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Unauthorized"})))
        .mount(&server)
        .await;
    let ctx = context(&server, None);

    let err = numerolog_lib::login(&ctx, "ivan@example.com", "wrong-pass").await.unwrap_err();

    assert_eq!(err, messages::INVALID_CREDENTIALS);
}

#[tokio::test]
async fn registration_then_verification_signs_the_user_in() {
    let server = MockServer::start().await;
    let mut pending = user_json(31, "free");
    pending["is_email_verified"] = json!(false);
    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "ok", "user": pending})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-email"))
        .and(body_json(json!({"email": "ivan@example.com", "code": "123456"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok", "user": user_json(31, "free")})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let ctx = context(&server, None);

    let form = RegistrationForm {
        name: "иван петров".into(),
        email: "Ivan@Example.com".into(),
        phone: "+7 900 123 45 67".into(),
        birth_date: "15031990".into(),
        password: "secret1".into(),
        password_confirm: "secret1".into(),
    };
    let view = numerolog_lib::register(&ctx, form).await.unwrap();
    assert_eq!(view.step, AuthStep::Verify);
    assert!(ctx.store.profile().is_none());

    let view = numerolog_lib::verify_email(&ctx, None, "12-34-56").await.unwrap();
    assert_eq!(view.step, AuthStep::Done);
    assert_eq!(ctx.store.profile().map(|p| p.id), Some(31));

    let view = numerolog_lib::logout(&ctx).await.unwrap();
    assert_eq!(view.step, AuthStep::Form);
    assert!(ctx.store.profile().is_none());
}

#[tokio::test]
async fn verification_in_a_new_session_uses_the_given_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-email"))
        .and(body_json(json!({"email": "anna@example.com", "code": "654321"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok", "user": user_json(40, "free")})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let ctx = context(&server, None);
    numerolog_lib::start_session(&ctx).await.unwrap();

    let view =
        numerolog_lib::verify_email(&ctx, Some(" Anna@Example.com "), "654321").await.unwrap();

    assert_eq!(view.step, AuthStep::Done);
    assert_eq!(ctx.store.profile().map(|p| p.id), Some(40));
}

#[tokio::test]
async fn verification_without_a_known_email_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let ctx = context(&server, None);
    numerolog_lib::start_session(&ctx).await.unwrap();

    let err = numerolog_lib::verify_email(&ctx, None, "654321").await.unwrap_err();

    assert_eq!(err, messages::EMAIL_REQUIRED);
}

#[tokio::test]
async fn avatar_upload_needs_a_profile() {
    let server = MockServer::start().await;
    let ctx = context(&server, None);
    numerolog_lib::start_session(&ctx).await.unwrap();

    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(b"\x89PNG").unwrap();

    let err = numerolog_lib::upload_avatar(&ctx, file.path()).await.unwrap_err();

    assert_eq!(err, messages::AVATAR_NO_PROFILE);
    assert!(ctx.store.profile().is_none());
}

#[tokio::test]
async fn avatar_upload_rejects_non_images() {
    let server = MockServer::start().await;
    let ctx = context(&server, None);
    numerolog_lib::select_tariff(&ctx, Tariff::Free).await.unwrap();

    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"not an image").unwrap();

    let err = numerolog_lib::upload_avatar(&ctx, file.path()).await.unwrap_err();

    assert_eq!(err, messages::AVATAR_NOT_IMAGE);
}

#[tokio::test]
async fn forgot_password_is_not_available_yet() {
    let server = MockServer::start().await;
    let ctx = context(&server, None);

    let message = numerolog_lib::forgot_password(&ctx).await.unwrap();

    assert_eq!(message, messages::PASSWORD_RESET_UNAVAILABLE);
}
