use serde::Deserialize;

const API_CONFIG_TOML: &str =
  include_str!("../assets/api.toml");
const DEFAULT_API_BASE_URL: &str =
  "http://localhost:3000/api";

#[derive(
  Clone, PartialEq, Deserialize,
)]
pub struct ApiConfig {
  #[serde(
    default = "default_base_url"
  )]
  pub base_url: String
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: default_base_url()
    }
  }
}

fn default_base_url() -> String {
  DEFAULT_API_BASE_URL.to_string()
}

pub fn load_api_config() -> ApiConfig {
  parse_api_config(API_CONFIG_TOML)
}

fn parse_api_config(
  raw: &str
) -> ApiConfig {
  match toml::from_str::<ApiConfig>(raw)
  {
    | Ok(mut config) => {
      let base_url = config
        .base_url
        .trim()
        .trim_end_matches('/')
        .to_string();
      if base_url.is_empty() {
        tracing::warn!(
          "api config had an empty \
           base url; using default"
        );
        config.base_url =
          default_base_url();
      } else {
        config.base_url = base_url;
      }
      tracing::info!(
        base_url = %config.base_url,
        "loaded api config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed to parse api config; using default");
      ApiConfig::default()
    }
  }
}

#[cfg(test)]
mod config_tests {
  use super::*;

  #[test]
  fn custom_base_url_is_honored() {
    let config = parse_api_config(
      "base_url = \"http://10.0.0.2:8080/api\""
    );
    assert_eq!(
      config.base_url,
      "http://10.0.0.2:8080/api"
    );
  }

  #[test]
  fn trailing_slash_is_trimmed() {
    let config = parse_api_config(
      "base_url = \"http://localhost:3000/api/\""
    );
    assert_eq!(
      config.base_url,
      "http://localhost:3000/api"
    );
  }

  #[test]
  fn missing_key_falls_back_to_default()
  {
    let config = parse_api_config("");
    assert_eq!(
      config.base_url,
      DEFAULT_API_BASE_URL
    );
  }

  #[test]
  fn blank_base_url_falls_back_to_default()
  {
    let config = parse_api_config(
      "base_url = \"  \""
    );
    assert_eq!(
      config.base_url,
      DEFAULT_API_BASE_URL
    );
  }

  #[test]
  fn malformed_toml_falls_back_to_default()
  {
    let config = parse_api_config(
      "base_url = ["
    );
    assert_eq!(
      config.base_url,
      DEFAULT_API_BASE_URL
    );
  }

  #[test]
  fn embedded_asset_parses() {
    let config = load_api_config();
    assert!(!config
      .base_url
      .ends_with('/'));
  }
}
