use crate::Database;
use crate::models::{CompanyRow, JobRow, UserRow};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension};

impl Database {
    // -- Users --

    pub fn create_user(
        &self,
        id: &str,
        full_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, full_name, email, password) VALUES (?1, ?2, ?3, ?4)",
                (id, full_name, email, password_hash),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_email(conn, email))
    }

    /// Replace the mutable columns in one write. The caller merges the
    /// edit into the current row first.
    pub fn update_user(&self, email: &str, full_name: &str, password_hash: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE users SET full_name = ?1, password = ?2 WHERE email = ?3",
                (full_name, password_hash, email),
            )?;
            Ok(())
        })
    }

    pub fn set_user_image(&self, email: &str, image_path: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE users SET image_path = ?1 WHERE email = ?2",
                (image_path, email),
            )?;
            Ok(())
        })
    }

    /// Returns the number of rows removed (0 when no user matched).
    pub fn delete_user(&self, email: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let n = conn.execute("DELETE FROM users WHERE email = ?1", [email])?;
            Ok(n)
        })
    }

    pub fn list_users(&self) -> Result<Vec<UserRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, full_name, email, password, image_path, account_type, created_at
                 FROM users",
            )?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(UserRow {
                        id: row.get(0)?,
                        full_name: row.get(1)?,
                        email: row.get(2)?,
                        password: row.get(3)?,
                        image_path: row.get(4)?,
                        account_type: row.get(5)?,
                        created_at: row.get(6)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    // -- Companies --

    /// Insert a fresh company row and return it with its stamped
    /// timestamps. Every upload inserts — no dedup by name.
    pub fn insert_company(
        &self,
        id: &str,
        company_name: &str,
        image_path: &str,
    ) -> Result<CompanyRow> {
        let now = chrono::Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO companies (id, company_name, image_path, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (id, company_name, image_path, &now, &now),
            )?;
            Ok(CompanyRow {
                id: id.to_string(),
                company_name: company_name.to_string(),
                image_path: image_path.to_string(),
                created_at: now.clone(),
                updated_at: now.clone(),
            })
        })
    }

    /// Newest first. rowid breaks ties between same-instant inserts.
    pub fn list_companies(&self) -> Result<Vec<CompanyRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, company_name, image_path, created_at, updated_at
                 FROM companies
                 ORDER BY created_at DESC, rowid DESC",
            )?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(CompanyRow {
                        id: row.get(0)?,
                        company_name: row.get(1)?,
                        image_path: row.get(2)?,
                        created_at: row.get(3)?,
                        updated_at: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }

    // -- Jobs --

    pub fn insert_job(
        &self,
        id: &str,
        company_name: &str,
        job_title: &str,
        description: &str,
        salary: &str,
        apply_link: &str,
    ) -> Result<JobRow> {
        let now = chrono::Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO jobs (id, company_name, job_title, description, salary, apply_link, posted_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                (id, company_name, job_title, description, salary, apply_link, &now),
            )?;
            Ok(JobRow {
                id: id.to_string(),
                company_name: company_name.to_string(),
                job_title: job_title.to_string(),
                description: description.to_string(),
                salary: salary.to_string(),
                apply_link: apply_link.to_string(),
                posted_at: now,
            })
        })
    }

    pub fn list_jobs(&self) -> Result<Vec<JobRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, company_name, job_title, description, salary, apply_link, posted_at
                 FROM jobs",
            )?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(JobRow {
                        id: row.get(0)?,
                        company_name: row.get(1)?,
                        job_title: row.get(2)?,
                        description: row.get(3)?,
                        salary: row.get(4)?,
                        apply_link: row.get(5)?,
                        posted_at: row.get(6)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;

            Ok(rows)
        })
    }
}

fn query_user_by_email(conn: &Connection, email: &str) -> Result<Option<UserRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, full_name, email, password, image_path, account_type, created_at
         FROM users WHERE email = ?1",
    )?;

    let row = stmt
        .query_row([email], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                full_name: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
                image_path: row.get(4)?,
                account_type: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .optional()?;

    Ok(row)
}
