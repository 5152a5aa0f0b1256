use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::repository::{
    PARTICIPANT_ID_KEY, STUDENT_NAME_KEY, SessionRecord, SessionRepository, StorageError,
};

use super::SqliteRepository;

#[async_trait]
impl SessionRepository for SqliteRepository {
    async fn load_session(&self) -> Result<Option<SessionRecord>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT key, value, saved_at
            FROM session_store
            WHERE key IN (?1, ?2)
            ",
        )
        .bind(PARTICIPANT_ID_KEY)
        .bind(STUDENT_NAME_KEY)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let mut participant_id: Option<String> = None;
        let mut student_name: Option<String> = None;
        let mut saved_at: Option<DateTime<Utc>> = None;

        for row in rows {
            let key: String = row
                .try_get("key")
                .map_err(|err| StorageError::Serialization(err.to_string()))?;
            let value: String = row
                .try_get("value")
                .map_err(|err| StorageError::Serialization(err.to_string()))?;
            if key == PARTICIPANT_ID_KEY {
                saved_at = Some(
                    row.try_get("saved_at")
                        .map_err(|err| StorageError::Serialization(err.to_string()))?,
                );
                participant_id = Some(value);
            } else {
                student_name = Some(value);
            }
        }

        // Both keys are written together; a partial pair reads as empty.
        match (participant_id, student_name, saved_at) {
            (Some(participant_id), Some(student_name), Some(saved_at)) => Ok(Some(SessionRecord {
                participant_id,
                student_name,
                saved_at,
            })),
            _ => Ok(None),
        }
    }

    async fn save_session(&self, record: &SessionRecord) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        for (key, value) in [
            (PARTICIPANT_ID_KEY, record.participant_id.as_str()),
            (STUDENT_NAME_KEY, record.student_name.as_str()),
        ] {
            sqlx::query(
                r"
                INSERT INTO session_store (key, value, saved_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    saved_at = excluded.saved_at
                ",
            )
            .bind(key)
            .bind(value)
            .bind(record.saved_at)
            .execute(&mut *tx)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn clear_session(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM session_store WHERE key IN (?1, ?2)")
            .bind(PARTICIPANT_ID_KEY)
            .bind(STUDENT_NAME_KEY)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}
