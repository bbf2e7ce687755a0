use crate::models::WaitlistEntry;
use sqlx::PgPool;

/// Add an entry to the waitlist. Joining twice with the same email is
/// idempotent and refreshes the stored name.
pub async fn upsert_entry(
    pool: &PgPool,
    email: &str,
    name: &str,
) -> Result<WaitlistEntry, sqlx::Error> {
    let entry = sqlx::query_as::<_, WaitlistEntry>(
        r#"
        INSERT INTO waitlist (email, name)
        VALUES ($1, $2)
        ON CONFLICT (email) DO UPDATE
        SET name = EXCLUDED.name
        RETURNING email, name, created_at
        "#,
    )
    .bind(email)
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}
