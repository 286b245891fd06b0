use std::time::Instant;

use anyhow::Result;
use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Word};

use yoga_db::Store;
use yoga_models::{Session, SessionDraft, TeacherId};

const STYLES: &[&str] = &[
    "Hatha", "Vinyasa", "Yin", "Ashtanga", "Kundalini", "Restorative", "Power",
];

const NAME_MAX_CHARS: usize = 50;

/// Builds `count` upcoming sessions, assigning teachers round-robin.
pub fn generate_sessions(count: usize, teachers: &[TeacherId]) -> Vec<SessionDraft> {
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let style = STYLES[i % STYLES.len()];
            let word: String = Word().fake();
            let name: String = format!("{} {}", style, word).chars().take(NAME_MAX_CHARS).collect();
            let days: i64 = (1i64..60).fake();
            let hour: i64 = (7i64..21).fake();

            SessionDraft {
                id: None,
                name,
                date: now + Duration::days(days) + Duration::hours(hour),
                description: Paragraph(1..3).fake(),
                teacher_id: (!teachers.is_empty()).then(|| teachers[i % teachers.len()]),
                users: vec![],
            }
        })
        .collect()
}

pub async fn seed_sessions(store: &dyn Store, count: usize) -> Result<Vec<Session>> {
    let start_time = Instant::now();
    println!("📅 Seeding {} sessions...", count);

    let teachers: Vec<TeacherId> = store
        .find_all_teachers()
        .await
        .map_err(|e| e.error)?
        .iter()
        .map(|t| t.id)
        .collect();

    let mut created = Vec::with_capacity(count);
    for draft in generate_sessions(count, &teachers) {
        created.push(store.save_session(draft).await.map_err(|e| e.error)?);
    }

    println!(
        "   ✓ Inserted {} sessions in {:?}",
        created.len(),
        start_time.elapsed()
    );

    Ok(created)
}
