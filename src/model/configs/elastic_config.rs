use crate::common::*;

use crate::errors::EsClientError;

#[doc = "Scheme used to reach an Elasticsearch node."]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElasticScheme {
    #[default]
    Http,
    Https,
}

impl Display for ElasticScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElasticScheme::Http => write!(f, "http"),
            ElasticScheme::Https => write!(f, "https"),
        }
    }
}

#[doc = "Address of a single Elasticsearch node."]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ElasticHost {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub scheme: ElasticScheme,
}

impl ElasticHost {
    #[doc = "Node address rendered as 'scheme://host:port'."]
    pub fn address(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    #[doc = "Function that parses the node address into a url."]
    pub fn to_url(&self) -> Result<Url, EsClientError> {
        Url::parse(&self.address()).map_err(|e| {
            EsClientError::InvalidConfiguration(format!(
                "[ElasticHost::to_url] invalid host entry '{}:{}': {}",
                self.host, self.port, e
            ))
        })
    }
}

#[doc = "Basic authentication pair sent with every request when present."]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ElasticCredentials {
    pub username: String,
    pub password: String,
}

fn default_timeout_secs() -> u64 {
    30
}

#[doc = "Connection parameters for one Elasticsearch cluster. Immutable once a client handle has been built from it."]
#[derive(Serialize, Deserialize, Debug, Clone, Getters, Builder)]
#[getset(get = "pub")]
#[builder(setter(into))]
pub struct ElasticConfig {
    pub hosts: Vec<ElasticHost>,
    #[serde(default)]
    #[builder(setter(strip_option), default)]
    pub credentials: Option<ElasticCredentials>,
    #[serde(default = "default_timeout_secs")]
    #[builder(default = "default_timeout_secs()")]
    pub timeout_secs: u64,
}

impl ElasticConfig {
    #[doc = "Shorthand for a single http node without authentication."]
    pub fn single_node(host: &str, port: u16) -> Self {
        ElasticConfig {
            hosts: vec![ElasticHost::new(host.to_string(), port, ElasticScheme::Http)],
            credentials: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    #[doc = "Function that checks the connection parameters before any client handle is built."]
    /// # Returns
    /// * Result<(), EsClientError> - `InvalidConfiguration` when the host list is empty or an entry is unusable.
    pub fn validate(&self) -> Result<(), EsClientError> {
        if self.hosts.is_empty() {
            return Err(EsClientError::InvalidConfiguration(
                "hosts list is empty".to_string(),
            ));
        }

        for host in &self.hosts {
            if host.host.trim().is_empty() {
                return Err(EsClientError::InvalidConfiguration(
                    "host entry with an empty hostname".to_string(),
                ));
            }

            if host.port == 0 {
                return Err(EsClientError::InvalidConfiguration(format!(
                    "invalid port 0 for host '{}'",
                    host.host
                )));
            }

            host.to_url()?;
        }

        Ok(())
    }

    #[doc = "Request timeout applied to the transport."]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[doc = "Urls of every configured node."]
    pub fn node_urls(&self) -> Result<Vec<Url>, EsClientError> {
        self.hosts.iter().map(|host| host.to_url()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_rejects_empty_host_list() {
        let config: ElasticConfig = ElasticConfigBuilder::default()
            .hosts(Vec::<ElasticHost>::new())
            .build()
            .unwrap();

        let result = config.validate();
        assert!(matches!(result, Err(EsClientError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_validate_rejects_blank_hostname_and_zero_port() {
        let blank: ElasticConfig = ElasticConfigBuilder::default()
            .hosts(vec![ElasticHost::new("  ".to_string(), 9200, ElasticScheme::Http)])
            .build()
            .unwrap();
        assert!(matches!(
            blank.validate(),
            Err(EsClientError::InvalidConfiguration(_))
        ));

        let zero_port: ElasticConfig = ElasticConfigBuilder::default()
            .hosts(vec![ElasticHost::new("localhost".to_string(), 0, ElasticScheme::Http)])
            .build()
            .unwrap();
        assert!(matches!(
            zero_port.validate(),
            Err(EsClientError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_accepts_well_formed_config() {
        let config: ElasticConfig = ElasticConfigBuilder::default()
            .hosts(vec![
                ElasticHost::new("es1.internal".to_string(), 9200, ElasticScheme::Https),
                ElasticHost::new("es2.internal".to_string(), 9201, ElasticScheme::Http),
            ])
            .credentials(ElasticCredentials::new("elastic".to_string(), "changeme".to_string()))
            .build()
            .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(*config.timeout_secs(), 30);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.node_urls().unwrap().len(), 2);
    }

    #[test]
    fn test_host_address_rendering() {
        let host: ElasticHost = ElasticHost::new("127.0.0.1".to_string(), 9200, ElasticScheme::Http);
        assert_eq!(host.address(), "http://127.0.0.1:9200");

        let secure: ElasticHost = ElasticHost::new("es.internal".to_string(), 443, ElasticScheme::Https);
        assert_eq!(secure.address(), "https://es.internal:443");
    }

    #[test]
    fn test_config_parses_from_toml() {
        let raw: &str = r#"
            timeout_secs = 5

            [[hosts]]
            host = "localhost"
            port = 9200
            scheme = "https"

            [[hosts]]
            host = "localhost"
            port = 9201

            [credentials]
            username = "elastic"
            password = "changeme"
        "#;

        let config: ElasticConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.hosts().len(), 2);
        assert_eq!(*config.hosts()[0].scheme(), ElasticScheme::Https);
        assert_eq!(*config.hosts()[1].scheme(), ElasticScheme::Http);
        assert_eq!(
            config.credentials().as_ref().map(|c| c.username().as_str()),
            Some("elastic")
        );
        assert_eq!(*config.timeout_secs(), 5);
    }

    #[test]
    fn test_single_node_defaults() {
        let config: ElasticConfig = ElasticConfig::single_node("127.0.0.1", 9200);
        assert_eq!(config.hosts().len(), 1);
        assert!(config.credentials().is_none());
        assert_eq!(*config.timeout_secs(), 30);
        assert!(config.validate().is_ok());
    }
}
