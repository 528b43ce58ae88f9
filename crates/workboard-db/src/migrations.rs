use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id            TEXT PRIMARY KEY,
            full_name     TEXT NOT NULL,
            email         TEXT NOT NULL UNIQUE,
            password      TEXT NOT NULL,
            image_path    TEXT,
            account_type  TEXT NOT NULL DEFAULT 'employee'
                          CHECK (account_type IN ('employee', 'admin')),
            created_at    TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS companies (
            id            TEXT PRIMARY KEY,
            company_name  TEXT NOT NULL,
            image_path    TEXT NOT NULL,
            created_at    TEXT NOT NULL,
            updated_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_companies_created
            ON companies(created_at);

        CREATE TABLE IF NOT EXISTS jobs (
            id            TEXT PRIMARY KEY,
            company_name  TEXT NOT NULL,
            job_title     TEXT NOT NULL,
            description   TEXT NOT NULL,
            salary        TEXT NOT NULL,
            apply_link    TEXT NOT NULL,
            posted_at     TEXT NOT NULL
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
