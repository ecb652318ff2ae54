use std::collections::BTreeMap;
use actix_web::{get, web, HttpResponse, Responder};
use crate::models::{AppState, StatsResponse, TopicInfo};
use log::info;

#[get("/topics")]
pub async fn get_topics(data: web::Data<AppState>) -> impl Responder {
    let mut topics: Vec<TopicInfo> = data.topics.iter().map(|(code, topic)| {
        TopicInfo {
            code: code.clone(),
            word_count: topic.engine.word_count(),
            loaded_at: topic.loaded_at.clone(),
        }
    }).collect();
    topics.sort_by(|a, b| a.code.cmp(&b.code));

    HttpResponse::Ok().json(topics)
}

#[get("/stats/{topic}")]
pub async fn get_stats(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let topic = path.into_inner().to_lowercase();

    let engine = match data.topics.get(&topic) {
        Some(t) => &t.engine,
        None => return HttpResponse::NotFound().body(format!("Topic '{}' not loaded", topic)),
    };

    let letter_frequency: BTreeMap<char, usize> = engine.global_frequency()
        .iter()
        .map(|(&c, &n)| (c, n))
        .collect();
    let position_frequency: Vec<BTreeMap<char, usize>> = engine.position_frequency()
        .iter()
        .map(|counts| counts.iter().map(|(&c, &n)| (c, n)).collect())
        .collect();

    info!("Generated {} stats over {} words (longest {})",
          topic, engine.word_count(), engine.max_word_length());

    HttpResponse::Ok().json(StatsResponse {
        word_count: engine.word_count(),
        max_word_length: engine.max_word_length(),
        letter_frequency,
        position_frequency,
    })
}
