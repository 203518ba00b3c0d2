/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Owner of user data: the `sub` claim issued by the identity provider.
pub type UserId = uuid::Uuid;
