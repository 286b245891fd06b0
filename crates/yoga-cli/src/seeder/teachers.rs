use std::time::Instant;

use anyhow::Result;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};

use yoga_db::Store;
use yoga_models::{NewTeacher, Teacher};

pub fn generate_teachers(count: usize) -> Vec<NewTeacher> {
    (0..count)
        .map(|_| NewTeacher {
            first_name: FirstName().fake(),
            last_name: LastName().fake::<String>().to_uppercase(),
        })
        .collect()
}

pub async fn seed_teachers(store: &dyn Store, count: usize) -> Result<Vec<Teacher>> {
    let start_time = Instant::now();
    println!("🧘 Seeding {} teachers...", count);

    let mut created = Vec::with_capacity(count);
    for teacher in generate_teachers(count) {
        created.push(store.create_teacher(teacher).await.map_err(|e| e.error)?);
    }

    println!(
        "   ✓ Inserted {} teachers in {:?}",
        created.len(),
        start_time.elapsed()
    );

    Ok(created)
}
