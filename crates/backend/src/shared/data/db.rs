use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/catalog.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // Minimal schema bootstrap. `code` is the upsert key for both tables.
    let create_rocks = r#"
        CREATE TABLE IF NOT EXISTS a001_rock_specimen (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            specimen_type TEXT NOT NULL DEFAULT '',
            color TEXT NOT NULL DEFAULT '',
            mineral_composition TEXT NOT NULL DEFAULT '',
            texture TEXT NOT NULL DEFAULT '',
            grain_size TEXT NOT NULL DEFAULT '',
            hardness TEXT NOT NULL DEFAULT '',
            coordinates TEXT NOT NULL DEFAULT '',
            locality TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            bedding TEXT NOT NULL DEFAULT '',
            sorting TEXT NOT NULL DEFAULT '',
            roundness TEXT NOT NULL DEFAULT '',
            fossil_content TEXT NOT NULL DEFAULT '',
            silica_content TEXT NOT NULL DEFAULT '',
            cooling_rate TEXT NOT NULL DEFAULT '',
            foliation TEXT NOT NULL DEFAULT '',
            parent_rock TEXT NOT NULL DEFAULT '',
            commodity_type TEXT NOT NULL DEFAULT '',
            ore_group TEXT NOT NULL DEFAULT '',
            type_of_deposit TEXT NOT NULL DEFAULT '',
            mining_company TEXT NOT NULL DEFAULT '',
            created_at TEXT,
            updated_at TEXT
        );
    "#;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        create_rocks.to_string(),
    ))
    .await?;

    let create_minerals = r#"
        CREATE TABLE IF NOT EXISTS a002_mineral_specimen (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            specimen_type TEXT NOT NULL DEFAULT '',
            hardness TEXT NOT NULL DEFAULT '',
            luster TEXT NOT NULL DEFAULT '',
            streak TEXT NOT NULL DEFAULT '',
            crystal_system TEXT NOT NULL DEFAULT '',
            chemical_formula TEXT NOT NULL DEFAULT '',
            color TEXT NOT NULL DEFAULT '',
            cleavage TEXT NOT NULL DEFAULT '',
            fracture TEXT NOT NULL DEFAULT '',
            specific_gravity TEXT NOT NULL DEFAULT '',
            occurrence TEXT NOT NULL DEFAULT '',
            uses TEXT NOT NULL DEFAULT '',
            coordinates TEXT NOT NULL DEFAULT '',
            locality TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            created_at TEXT,
            updated_at TEXT
        );
    "#;
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        create_minerals.to_string(),
    ))
    .await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database connection already initialized"))?;

    tracing::info!("Database initialized at {}", absolute_path.display());
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN.get().expect("database not initialized")
}
