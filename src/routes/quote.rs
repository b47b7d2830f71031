//! `GET /quote` handler.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, web};

use crate::dto::quote::QuoteQuery;
use crate::generator::QuoteGenerator;
use crate::repository::RecipientReader;
use crate::services::quote as quote_service;

/// Returns a quote in the requested language with the full recipient list.
///
/// Every failure is answered with an empty `500`; the cause is only logged.
pub async fn show_quote<G, R>(
    pairs: web::Query<Vec<(String, String)>>,
    generator: web::Data<G>,
    repo: web::Data<R>,
) -> impl Responder
where
    G: QuoteGenerator + 'static,
    R: RecipientReader + 'static,
{
    let params = QuoteQuery::from_pairs(pairs.into_inner());
    let response =
        match quote_service::load_quote(generator.get_ref(), repo.get_ref(), &params.lang).await {
            Ok(response) => response,
            Err(err) => {
                log::error!("Failed to load quote for lang {:?}: {err}", params.lang);
                return HttpResponse::InternalServerError().finish();
            }
        };

    match serde_json::to_vec(&response) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(err) => {
            log::error!("Failed to serialize quote response: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    use super::*;
    use crate::configure_quote_routes;
    use crate::domain::recipient::Recipient;
    use crate::generator::errors::QuoteError;
    use crate::generator::test::StubQuoteGenerator;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[actix_web::test]
    async fn responds_with_quote_and_recipients() {
        let mut repo = MockRepository::new();
        repo.expect_list_recipients()
            .times(1)
            .returning(|| Ok(vec![Recipient::new(1, "user1", "user1@testmail.com")]));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StubQuoteGenerator::ok("Bla Bla Bla", "Bob")))
                .app_data(web::Data::new(repo))
                .configure(configure_quote_routes::<StubQuoteGenerator, MockRepository>),
        )
        .await;

        let req = test::TestRequest::get().uri("/quote?lang=en").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "quote": {"quoteText": "Bla Bla Bla", "quoteAuthor": "Bob", "lang": "en"},
                "recipients": [{"id": 1, "name": "user1", "email": "user1@testmail.com"}],
            })
        );
    }

    #[actix_web::test]
    async fn missing_lang_is_forwarded_as_empty() {
        let mut repo = MockRepository::new();
        repo.expect_list_recipients().returning(|| Ok(Vec::new()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StubQuoteGenerator::ok("Bla", "Bob")))
                .app_data(web::Data::new(repo))
                .configure(configure_quote_routes::<StubQuoteGenerator, MockRepository>),
        )
        .await;

        let req = test::TestRequest::get().uri("/quote").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["quote"]["lang"], "");
        assert_eq!(body["recipients"], json!([]));
    }

    #[actix_web::test]
    async fn repeated_lang_uses_first_value() {
        let mut repo = MockRepository::new();
        repo.expect_list_recipients().times(1).returning(|| Ok(Vec::new()));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StubQuoteGenerator::ok("Bla", "Bob")))
                .app_data(web::Data::new(repo))
                .configure(configure_quote_routes::<StubQuoteGenerator, MockRepository>),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/quote?lang=en&lang=fr")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["quote"]["lang"], "en");
    }

    #[actix_web::test]
    async fn quote_failure_returns_empty_500() {
        let mut repo = MockRepository::new();
        repo.expect_list_recipients().never();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StubQuoteGenerator::failing(
                    QuoteError::Transport("timeout".into()),
                )))
                .app_data(web::Data::new(repo))
                .configure(configure_quote_routes::<StubQuoteGenerator, MockRepository>),
        )
        .await;

        let req = test::TestRequest::get().uri("/quote?lang=en").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn repository_failure_returns_empty_500() {
        let mut repo = MockRepository::new();
        repo.expect_list_recipients()
            .times(1)
            .returning(|| Err(RepositoryError::DatabaseError("no such table".into())));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StubQuoteGenerator::ok("Bla", "Bob")))
                .app_data(web::Data::new(repo))
                .configure(configure_quote_routes::<StubQuoteGenerator, MockRepository>),
        )
        .await;

        let req = test::TestRequest::get().uri("/quote?lang=en").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn other_methods_are_not_allowed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(StubQuoteGenerator::ok("Bla", "Bob")))
                .app_data(web::Data::new(MockRepository::new()))
                .configure(configure_quote_routes::<StubQuoteGenerator, MockRepository>),
        )
        .await;

        let req = test::TestRequest::post().uri("/quote?lang=en").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
