/// Process environment configuration for the database and HTTP listener.
/// Every variable is required; absence is a startup failure, not a runtime
/// condition.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub http_port: u16,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            db_host: std::env::var("DB_HOST").expect("DB_HOST must be set"),
            db_port: std::env::var("DB_PORT")
                .expect("DB_PORT must be set")
                .parse()
                .expect("DB_PORT must be a port number"),
            db_user: std::env::var("DB_USER").expect("DB_USER must be set"),
            db_password: std::env::var("DB_PASSWORD").expect("DB_PASSWORD must be set"),
            db_name: std::env::var("DB_NAME").expect("DB_NAME must be set"),
            http_port: std::env::var("PORT")
                .expect("PORT must be set")
                .parse()
                .expect("PORT must be a port number"),
        }
    }

    /// Connection parameters for the record store.
    pub fn database(&self) -> tokio_postgres::Config {
        let mut pg = tokio_postgres::Config::default();
        pg.host(&self.db_host)
            .port(self.db_port)
            .user(&self.db_user)
            .password(&self.db_password)
            .dbname(&self.db_name);
        pg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_postgres::config::Host;

    #[test]
    fn database_carries_all_connection_fields() {
        let config = Config {
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_user: "postgres".to_string(),
            db_password: "secret".to_string(),
            db_name: "reports".to_string(),
            http_port: 3000,
        };
        let pg = config.database();
        assert_eq!(pg.get_ports(), &[5432]);
        assert_eq!(pg.get_user(), Some("postgres"));
        assert_eq!(pg.get_dbname(), Some("reports"));
        match pg.get_hosts() {
            [Host::Tcp(host)] => assert_eq!(host, "localhost"),
            hosts => panic!("unexpected hosts: {hosts:?}"),
        }
    }
}
