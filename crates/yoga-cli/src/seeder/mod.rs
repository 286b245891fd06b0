//! Fake data generation for development databases.

mod sessions;
mod teachers;

use std::time::Instant;

use anyhow::Result;
use yoga_db::Store;

pub use sessions::{generate_sessions, seed_sessions};
pub use teachers::{generate_teachers, seed_teachers};

#[derive(Debug, Clone, Copy)]
pub struct SeedConfig {
    pub teachers: usize,
    pub sessions: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            teachers: 5,
            sessions: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub teachers: usize,
    pub sessions: usize,
}

/// Seeds teachers, then sessions spread across every teacher in the store.
pub async fn seed_all(store: &dyn Store, config: SeedConfig) -> Result<SeedSummary> {
    let start_time = Instant::now();
    println!("\n🌱 Seeding database...");

    let teachers = seed_teachers(store, config.teachers).await?;
    let sessions = seed_sessions(store, config.sessions).await?;

    println!("\n✅ Seeding finished in {:?}", start_time.elapsed());

    Ok(SeedSummary {
        teachers: teachers.len(),
        sessions: sessions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use yoga_db::{InMemoryStore, SessionRepository, TeacherRepository};

    #[tokio::test]
    async fn test_seed_all_counts() {
        let store = InMemoryStore::new();

        let summary = seed_all(
            &store,
            SeedConfig {
                teachers: 3,
                sessions: 7,
            },
        )
        .await
        .unwrap();

        assert_eq!(summary, SeedSummary { teachers: 3, sessions: 7 });
        assert_eq!(store.find_all_teachers().await.unwrap().len(), 3);
        assert_eq!(store.find_all_sessions().await.unwrap().len(), 7);
    }
}
