use tracing::instrument;

use yoga_core::AppError;
use yoga_db::Store;
use yoga_models::{Teacher, TeacherId};

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(store))]
    pub async fn find_all(store: &dyn Store) -> Result<Vec<Teacher>, AppError> {
        store.find_all_teachers().await
    }

    #[instrument(skip(store))]
    pub async fn find_by_id(store: &dyn Store, id: TeacherId) -> Result<Option<Teacher>, AppError> {
        store.find_teacher_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yoga_db::InMemoryStore;

    #[tokio::test]
    async fn test_find_all_and_by_id() {
        let store = InMemoryStore::with_demo_data().await.unwrap();

        let teachers = TeacherService::find_all(&store).await.unwrap();
        assert_eq!(teachers.len(), 2);
        assert_eq!(teachers[0].last_name, "DELAHAYE");

        let teacher = TeacherService::find_by_id(&store, TeacherId::new(2))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(teacher.first_name, "Hélène");

        assert!(
            TeacherService::find_by_id(&store, TeacherId::new(9))
                .await
                .unwrap()
                .is_none()
        );
    }
}
