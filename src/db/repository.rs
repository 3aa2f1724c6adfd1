//! Repository layer for data access
//!
//! One repository per table. Every method funnels through
//! [`DatabaseManager::execute`], so handlers never block the async runtime on
//! SQLite. Creation methods ignore the `id` field of the passed record and
//! return the rowid SQLite assigned.

use crate::core::error::{Result, SitedeskError};
use crate::db::manager::DatabaseManager;
use crate::db::models::{Appointment, Credential, Partner, Project, ProjectStatus, Reminder, TeamMember};
use rusqlite::{params, OptionalExtension};
use std::sync::Arc;

/// Repository for login credentials
pub struct CredentialRepository {
    db: Arc<DatabaseManager>,
}

impl CredentialRepository {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    /// Insert a new credential.
    ///
    /// Uniqueness is delegated to the primary key: a constraint violation
    /// surfaces as [`SitedeskError::DuplicateUsername`]. There is no prior
    /// existence check, so two racing registrations cannot both succeed.
    pub async fn create(&self, credential: &Credential) -> Result<()> {
        let credential = credential.clone();
        self.db
            .execute(move |conn| {
                match conn.execute(
                    "INSERT INTO credentials (username, salt, password_hash) VALUES (?, ?, ?)",
                    params![credential.username, credential.salt, credential.password_hash],
                ) {
                    Ok(_) => Ok(()),
                    Err(rusqlite::Error::SqliteFailure(e, _))
                        if e.code == rusqlite::ErrorCode::ConstraintViolation =>
                    {
                        Err(SitedeskError::DuplicateUsername)
                    }
                    Err(e) => Err(SitedeskError::DatabaseError(e)),
                }
            })
            .await
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Credential>> {
        let username = username.to_string();
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT username, salt, password_hash, created_at \
                     FROM credentials WHERE username = ?",
                    [&username],
                    |row| {
                        Ok(Credential {
                            username: row.get(0)?,
                            salt: row.get(1)?,
                            password_hash: row.get(2)?,
                            created_at: row.get(3)?,
                        })
                    },
                )
                .optional()
                .map_err(SitedeskError::DatabaseError)
            })
            .await
    }

    pub async fn count(&self) -> Result<i64> {
        self.db
            .execute(|conn| {
                conn.query_row("SELECT COUNT(*) FROM credentials", [], |row| row.get(0))
                    .map_err(SitedeskError::DatabaseError)
            })
            .await
    }
}

/// Repository for Project entities
pub struct ProjectRepository {
    db: Arc<DatabaseManager>,
}

impl ProjectRepository {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    pub async fn create(&self, project: &Project) -> Result<i64> {
        let project = project.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO projects \
                     (name, engineer, contractor, start_date, due_date, contact, drive_link, status) \
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                    params![
                        project.name,
                        project.engineer,
                        project.contractor,
                        project.start_date,
                        project.due_date,
                        project.contact,
                        project.drive_link,
                        project.status,
                    ],
                )
                .map_err(SitedeskError::DatabaseError)?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Project>> {
        self.db
            .execute(move |conn| {
                conn.query_row(
                    "SELECT id, name, engineer, contractor, start_date, due_date, \
                     contact, drive_link, status FROM projects WHERE id = ?",
                    [id],
                    map_project_row,
                )
                .optional()
                .map_err(SitedeskError::DatabaseError)
            })
            .await
    }

    /// List projects with the given status, newest first.
    pub async fn find_by_status(&self, status: ProjectStatus) -> Result<Vec<Project>> {
        self.db
            .execute(move |conn| {
                let mut stmt = conn
                    .prepare(
                        "SELECT id, name, engineer, contractor, start_date, due_date, \
                         contact, drive_link, status FROM projects \
                         WHERE status = ? ORDER BY id DESC",
                    )
                    .map_err(SitedeskError::DatabaseError)?;

                let projects = stmt
                    .query_map([status], map_project_row)
                    .map_err(SitedeskError::DatabaseError)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(SitedeskError::DatabaseError)?;

                Ok(projects)
            })
            .await
    }

    /// Update a project's status. Returns whether a row was changed.
    pub async fn set_status(&self, id: i64, status: ProjectStatus) -> Result<bool> {
        self.db
            .execute(move |conn| {
                let changed = conn
                    .execute("UPDATE projects SET status = ? WHERE id = ?", params![status, id])
                    .map_err(SitedeskError::DatabaseError)?;
                Ok(changed > 0)
            })
            .await
    }
}

fn map_project_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        engineer: row.get(2)?,
        contractor: row.get(3)?,
        start_date: row.get(4)?,
        due_date: row.get(5)?,
        contact: row.get(6)?,
        drive_link: row.get(7)?,
        status: row.get(8)?,
    })
}

/// Repository for Appointment entities
pub struct AppointmentRepository {
    db: Arc<DatabaseManager>,
}

impl AppointmentRepository {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    pub async fn create(&self, appointment: &Appointment) -> Result<i64> {
        let appointment = appointment.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO appointments (title, appt_date, appt_time, attendees) \
                     VALUES (?, ?, ?, ?)",
                    params![
                        appointment.title,
                        appointment.appt_date,
                        appointment.appt_time,
                        appointment.attendees,
                    ],
                )
                .map_err(SitedeskError::DatabaseError)?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }

    /// List all appointments in calendar order.
    pub async fn find_all(&self) -> Result<Vec<Appointment>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn
                    .prepare(
                        "SELECT id, title, appt_date, appt_time, attendees \
                         FROM appointments ORDER BY appt_date, appt_time",
                    )
                    .map_err(SitedeskError::DatabaseError)?;

                let appointments = stmt
                    .query_map([], |row| {
                        Ok(Appointment {
                            id: row.get(0)?,
                            title: row.get(1)?,
                            appt_date: row.get(2)?,
                            appt_time: row.get(3)?,
                            attendees: row.get(4)?,
                        })
                    })
                    .map_err(SitedeskError::DatabaseError)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(SitedeskError::DatabaseError)?;

                Ok(appointments)
            })
            .await
    }

    /// Delete an appointment. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.db
            .execute(move |conn| {
                let changed = conn
                    .execute("DELETE FROM appointments WHERE id = ?", [id])
                    .map_err(SitedeskError::DatabaseError)?;
                Ok(changed > 0)
            })
            .await
    }
}

/// Repository for Reminder entities
pub struct ReminderRepository {
    db: Arc<DatabaseManager>,
}

impl ReminderRepository {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    pub async fn create(&self, text: &str) -> Result<i64> {
        let text = text.to_string();
        self.db
            .execute(move |conn| {
                conn.execute("INSERT INTO reminders (text) VALUES (?)", [&text])
                    .map_err(SitedeskError::DatabaseError)?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }

    /// List all reminders, open ones first, newest first within each group.
    pub async fn find_all(&self) -> Result<Vec<Reminder>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn
                    .prepare("SELECT id, text, done FROM reminders ORDER BY done, id DESC")
                    .map_err(SitedeskError::DatabaseError)?;

                let reminders = stmt
                    .query_map([], |row| {
                        Ok(Reminder {
                            id: row.get(0)?,
                            text: row.get(1)?,
                            done: row.get::<_, i64>(2)? != 0,
                        })
                    })
                    .map_err(SitedeskError::DatabaseError)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(SitedeskError::DatabaseError)?;

                Ok(reminders)
            })
            .await
    }

    /// Flip a reminder's done flag in one statement and return the new value,
    /// or `None` when the reminder does not exist. A single UPDATE keeps the
    /// toggle atomic under concurrent requests.
    pub async fn toggle_done(&self, id: i64) -> Result<Option<bool>> {
        self.db
            .execute(move |conn| {
                let done: Option<i64> = conn
                    .query_row(
                        "UPDATE reminders SET done = 1 - done WHERE id = ? RETURNING done",
                        [id],
                        |row| row.get(0),
                    )
                    .optional()
                    .map_err(SitedeskError::DatabaseError)?;
                Ok(done.map(|d| d != 0))
            })
            .await
    }
}

/// Repository for Partner entities
pub struct PartnerRepository {
    db: Arc<DatabaseManager>,
}

impl PartnerRepository {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    pub async fn create(&self, partner: &Partner) -> Result<i64> {
        let partner = partner.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO partners (name, kind, contact_person, contact_email, contact_phone) \
                     VALUES (?, ?, ?, ?, ?)",
                    params![
                        partner.name,
                        partner.kind,
                        partner.contact_person,
                        partner.contact_email,
                        partner.contact_phone,
                    ],
                )
                .map_err(SitedeskError::DatabaseError)?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<Partner>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn
                    .prepare(
                        "SELECT id, name, kind, contact_person, contact_email, contact_phone \
                         FROM partners ORDER BY name",
                    )
                    .map_err(SitedeskError::DatabaseError)?;

                let partners = stmt
                    .query_map([], |row| {
                        Ok(Partner {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            kind: row.get(2)?,
                            contact_person: row.get(3)?,
                            contact_email: row.get(4)?,
                            contact_phone: row.get(5)?,
                        })
                    })
                    .map_err(SitedeskError::DatabaseError)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(SitedeskError::DatabaseError)?;

                Ok(partners)
            })
            .await
    }
}

/// Repository for TeamMember entities
pub struct TeamMemberRepository {
    db: Arc<DatabaseManager>,
}

impl TeamMemberRepository {
    pub fn new(db: Arc<DatabaseManager>) -> Self {
        Self { db }
    }

    pub async fn create(&self, member: &TeamMember) -> Result<i64> {
        let member = member.clone();
        self.db
            .execute(move |conn| {
                conn.execute(
                    "INSERT INTO team_members (name, role, email, phone) VALUES (?, ?, ?, ?)",
                    params![member.name, member.role, member.email, member.phone],
                )
                .map_err(SitedeskError::DatabaseError)?;
                Ok(conn.last_insert_rowid())
            })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<TeamMember>> {
        self.db
            .execute(|conn| {
                let mut stmt = conn
                    .prepare(
                        "SELECT id, name, role, email, phone FROM team_members ORDER BY name",
                    )
                    .map_err(SitedeskError::DatabaseError)?;

                let members = stmt
                    .query_map([], |row| {
                        Ok(TeamMember {
                            id: row.get(0)?,
                            name: row.get(1)?,
                            role: row.get(2)?,
                            email: row.get(3)?,
                            phone: row.get(4)?,
                        })
                    })
                    .map_err(SitedeskError::DatabaseError)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(SitedeskError::DatabaseError)?;

                Ok(members)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> Arc<DatabaseManager> {
        Arc::new(DatabaseManager::new_in_memory().unwrap())
    }

    fn credential(username: &str) -> Credential {
        Credential {
            username: username.to_string(),
            salt: "00112233445566778899aabbccddeeff".to_string(),
            password_hash: "ff".repeat(32),
            created_at: String::new(),
        }
    }

    #[tokio::test]
    async fn test_credential_create_and_find() {
        let repo = CredentialRepository::new(test_db());

        repo.create(&credential("alice")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.username, "alice");
        assert_eq!(found.salt, "00112233445566778899aabbccddeeff");

        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_maps_to_conflict() {
        let repo = CredentialRepository::new(test_db());

        repo.create(&credential("alice")).await.unwrap();
        let dup = repo.create(&credential("alice")).await;
        assert!(matches!(dup, Err(SitedeskError::DuplicateUsername)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    fn project(name: &str) -> Project {
        Project {
            id: 0,
            name: name.to_string(),
            engineer: Some("R. Vega".to_string()),
            contractor: None,
            start_date: Some("2026-03-01".to_string()),
            due_date: None,
            contact: None,
            drive_link: None,
            status: ProjectStatus::Ongoing,
        }
    }

    #[tokio::test]
    async fn test_project_lifecycle() {
        let repo = ProjectRepository::new(test_db());

        let id = repo.create(&project("Harbor Bridge")).await.unwrap();
        let found = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name, "Harbor Bridge");
        assert_eq!(found.status, ProjectStatus::Ongoing);

        assert!(repo.set_status(id, ProjectStatus::Completed).await.unwrap());
        let completed = repo.find_by_status(ProjectStatus::Completed).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert!(repo
            .find_by_status(ProjectStatus::Ongoing)
            .await
            .unwrap()
            .is_empty());

        // Missing id
        assert!(!repo.set_status(9999, ProjectStatus::Completed).await.unwrap());
        assert!(repo.find_by_id(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_projects_listed_newest_first() {
        let repo = ProjectRepository::new(test_db());
        repo.create(&project("First")).await.unwrap();
        repo.create(&project("Second")).await.unwrap();

        let ongoing = repo.find_by_status(ProjectStatus::Ongoing).await.unwrap();
        assert_eq!(ongoing[0].name, "Second");
        assert_eq!(ongoing[1].name, "First");
    }

    #[tokio::test]
    async fn test_appointment_create_order_and_delete() {
        let repo = AppointmentRepository::new(test_db());

        let late = Appointment {
            id: 0,
            title: "Site walk".to_string(),
            appt_date: "2026-09-02".to_string(),
            appt_time: "14:00".to_string(),
            attendees: None,
        };
        let early = Appointment {
            id: 0,
            title: "Kickoff".to_string(),
            appt_date: "2026-09-01".to_string(),
            appt_time: "09:00".to_string(),
            attendees: Some("alice, bob".to_string()),
        };

        let late_id = repo.create(&late).await.unwrap();
        repo.create(&early).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Kickoff");

        assert!(repo.delete(late_id).await.unwrap());
        assert!(!repo.delete(late_id).await.unwrap());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reminder_toggle_twice_restores_value() {
        let repo = ReminderRepository::new(test_db());

        let id = repo.create("order rebar").await.unwrap();
        let before = repo.find_all().await.unwrap()[0].done;

        assert_eq!(repo.toggle_done(id).await.unwrap(), Some(!before));
        assert_eq!(repo.toggle_done(id).await.unwrap(), Some(before));

        assert_eq!(repo.toggle_done(9999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_reminders_open_first() {
        let repo = ReminderRepository::new(test_db());
        let first = repo.create("first").await.unwrap();
        repo.create("second").await.unwrap();
        repo.toggle_done(first).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert!(!all[0].done);
        assert_eq!(all[0].text, "second");
        assert!(all[1].done);
    }

    #[tokio::test]
    async fn test_partners_and_team_ordered_by_name() {
        let db = test_db();
        let partners = PartnerRepository::new(db.clone());
        let team = TeamMemberRepository::new(db);

        partners
            .create(&Partner {
                id: 0,
                name: "Zenith Steel".to_string(),
                kind: Some("supplier".to_string()),
                contact_person: None,
                contact_email: None,
                contact_phone: None,
            })
            .await
            .unwrap();
        partners
            .create(&Partner {
                id: 0,
                name: "Apex Concrete".to_string(),
                kind: None,
                contact_person: None,
                contact_email: None,
                contact_phone: None,
            })
            .await
            .unwrap();

        let all = partners.find_all().await.unwrap();
        assert_eq!(all[0].name, "Apex Concrete");

        team.create(&TeamMember {
            id: 0,
            name: "Mona".to_string(),
            role: "surveyor".to_string(),
            email: None,
            phone: None,
        })
        .await
        .unwrap();
        team.create(&TeamMember {
            id: 0,
            name: "Aldo".to_string(),
            role: "foreman".to_string(),
            email: Some("aldo@example.com".to_string()),
            phone: None,
        })
        .await
        .unwrap();

        let all = team.find_all().await.unwrap();
        assert_eq!(all[0].name, "Aldo");
        assert_eq!(all[1].name, "Mona");
    }
}
