use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create venues table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id SERIAL PRIMARY KEY,
            name VARCHAR NOT NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(120) NOT NULL,
            address VARCHAR(120) NULL,
            phone VARCHAR(120) NOT NULL,
            image_link VARCHAR(500) NULL,
            facebook_link VARCHAR(500) NULL,
            genres TEXT[] NOT NULL,
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500) NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create artists table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id SERIAL PRIMARY KEY,
            name VARCHAR NOT NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(120) NOT NULL,
            address VARCHAR(120) NULL,
            phone VARCHAR(120) NOT NULL,
            website VARCHAR(500) NULL,
            image_link VARCHAR(500) NULL,
            facebook_link VARCHAR(120) NULL,
            genres TEXT[] NOT NULL,
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500) NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create shows table; parents cannot be deleted while shows reference them
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id SERIAL PRIMARY KEY,
            title VARCHAR NOT NULL,
            artist_id INTEGER NOT NULL REFERENCES artists(id) ON DELETE RESTRICT,
            venue_id INTEGER NOT NULL REFERENCES venues(id) ON DELETE RESTRICT,
            start_time TEXT NOT NULL,
            description VARCHAR(500) NULL,
            register_link VARCHAR(500) NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_shows_artist_id ON shows(artist_id)",
        "CREATE INDEX IF NOT EXISTS idx_shows_venue_id ON shows(venue_id)",
        "CREATE INDEX IF NOT EXISTS idx_venues_city_state ON venues(city, state)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}

/// Row counts of the directory tables, in creation order.
pub async fn table_counts(pool: &Pool<Postgres>) -> Result<Vec<(&'static str, i64)>> {
    let mut counts = Vec::with_capacity(3);
    for table in ["venues", "artists", "shows"] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await?;
        counts.push((table, count));
    }
    Ok(counts)
}
