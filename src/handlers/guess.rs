use actix_web::{post, web, HttpResponse, Responder};
use log::{info, warn};
use crate::error::GuessError;
use crate::models::{AppState, GuessResponse};
use crate::services::boundary::process_input;

fn guess_logic(
    data: &web::Data<AppState>,
    topic: &str,
    body: &[u8]
) -> HttpResponse {
    let topic = topic.to_lowercase();
    let entry = match data.topics.get(&topic) {
        Some(t) => t,
        None => {
            warn!("Guess requested for unknown topic: {}", topic);
            let err = GuessError::malformed(format!("topic '{}' not loaded", topic));
            return HttpResponse::NotFound().json(GuessResponse::from(Err::<char, _>(err)));
        }
    };

    let response = match std::str::from_utf8(body) {
        Ok(input) => process_input(&entry.engine, input),
        Err(e) => GuessResponse::from(Err::<char, _>(GuessError::malformed(e.to_string()))),
    };

    info!("Guess ({}): {}{}", topic, response.next_guess,
          response.error.as_deref().map(|e| format!(" [{}]", e)).unwrap_or_default());
    HttpResponse::Ok().json(response)
}

#[post("/guess/{topic}")]
pub async fn guess_topic(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    guess_logic(&data, &path.into_inner(), &body)
}

// Uses the configured default topic
#[post("/guess")]
pub async fn guess_default(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    let topic = data.default_topic.clone();
    guess_logic(&data, &topic, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use actix_web::{test, App};
    use crate::models::Topic;
    use crate::services::engine::GuessEngine;

    fn state() -> web::Data<AppState> {
        let mut topics = HashMap::new();
        topics.insert("pets".to_string(), Topic {
            engine: GuessEngine::new(["cat", "dog", "cow"]).unwrap(),
            loaded_at: "2024-01-01T00:00:00.000Z".to_string(),
        });
        web::Data::new(AppState { topics, default_topic: "pets".to_string() })
    }

    #[actix_web::test]
    async fn test_guess_default_topic() {
        let app = test::init_service(
            App::new().app_data(state()).service(guess_default).service(guess_topic)
        ).await;

        let req = test::TestRequest::post()
            .uri("/guess")
            .set_payload(r#"{"currentWordState": "c _ _", "guessedLetters": ["c"], "guessesRemaining": 6}"#)
            .to_request();
        let resp: GuessResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.error, None);
        // cat and cow remain; only 'a', 't', 'o', 'w' are possible
        assert!("atow".contains(resp.next_guess.as_str()));
    }

    #[actix_web::test]
    async fn test_guess_malformed_body_is_still_ok() {
        let app = test::init_service(
            App::new().app_data(state()).service(guess_topic)
        ).await;

        let req = test::TestRequest::post()
            .uri("/guess/pets")
            .set_payload("{\"guessedLetters\": []}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: GuessResponse = test::read_body_json(resp).await;
        assert_eq!(body.next_guess, "a");
        assert!(body.error.is_some());
    }

    #[actix_web::test]
    async fn test_guess_unknown_topic() {
        let app = test::init_service(
            App::new().app_data(state()).service(guess_topic)
        ).await;

        let req = test::TestRequest::post()
            .uri("/guess/birds")
            .set_payload(r#"{"currentWordState": "___", "guessedLetters": []}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body: GuessResponse = test::read_body_json(resp).await;
        assert_eq!(body.next_guess, "a");
        assert!(body.error.unwrap().contains("birds"));
    }
}
