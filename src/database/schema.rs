/// Name of the user records table.
pub const USERS: &str = "users";

/// Zero-size type for the users table schema.
pub struct Users;

impl Users {
    /// SQL to create the table if absent. Safe to repeat; the statement is
    /// a no-op once the table exists.
    pub fn creates() -> &'static str {
        const_format::concatcp!(
            "CREATE TABLE IF NOT EXISTS ",
            USERS,
            " (
                id          SERIAL PRIMARY KEY,
                name        VARCHAR(255) NOT NULL,
                email       VARCHAR(255) NOT NULL,
                tech_stacks VARCHAR(255),
                role        VARCHAR(255) NOT NULL,
                experience  INTEGER
            );"
        )
    }
}
