//! GraphQL Data Source
//!
//! Queries the public character catalogue one page at a time.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::config::SourceConfig;
use crate::domain::{Character, PageResult, Status};
use crate::error::{Error, Result};

use super::source::DataSource;

const CHARACTERS_QUERY: &str = "query GetCharacters($page: Int) {
  characters(page: $page) {
    info {
      next
    }
    results {
      id
      name
      status
      species
      gender
      origin {
        name
      }
      image
    }
  }
}";

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    variables: QueryVariables,
}

#[derive(Debug, Serialize)]
struct QueryVariables {
    page: u32,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    data: Option<QueryData>,
    #[serde(default)]
    errors: Vec<QueryError>,
}

#[derive(Debug, Deserialize)]
struct QueryError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct QueryData {
    characters: Option<CharactersPage>,
}

#[derive(Debug, Deserialize)]
struct CharactersPage {
    info: PageInfo,
    #[serde(default)]
    results: Vec<RawCharacter>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    next: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawCharacter {
    id: String,
    name: String,
    status: String,
    species: String,
    gender: String,
    origin: Option<RawOrigin>,
    image: String,
}

#[derive(Debug, Deserialize)]
struct RawOrigin {
    name: String,
}

impl From<RawCharacter> for Character {
    fn from(raw: RawCharacter) -> Self {
        Character {
            id: raw.id.into(),
            name: raw.name.into(),
            status: Status::from(raw.status),
            species: raw.species.into(),
            gender: raw.gender.into(),
            origin: raw
                .origin
                .map(|o| Arc::from(o.name))
                .unwrap_or_else(|| Arc::from("unknown")),
            image: raw.image.into(),
        }
    }
}

/// Turn a GraphQL response body into a page
fn parse_page(body: &str, page: u32) -> Result<PageResult> {
    let response: QueryResponse = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let message = response
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(Error::Query { message });
    }

    let characters = response
        .data
        .and_then(|d| d.characters)
        .ok_or(Error::PageUnavailable { page })?;

    Ok(PageResult::new(
        characters.results.into_iter().map(Character::from).collect(),
        characters.info.next.is_some(),
    ))
}

/// Character catalogue behind a GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphqlSource {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlSource {
    /// Build a client for the configured endpoint
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl DataSource for GraphqlSource {
    fn name(&self) -> &str {
        "graphql"
    }

    async fn fetch(&self, page: u32) -> Result<PageResult> {
        tracing::debug!(endpoint = %self.endpoint, page, "Querying characters");

        let request = QueryRequest {
            query: CHARACTERS_QUERY,
            variables: QueryVariables { page },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_page(&body, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_ONE: &str = r#"{
      "data": {
        "characters": {
          "info": { "next": 2 },
          "results": [
            {
              "id": "1",
              "name": "Rick Sanchez",
              "status": "Alive",
              "species": "Human",
              "gender": "Male",
              "origin": { "name": "Earth (C-137)" },
              "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg"
            },
            {
              "id": "8",
              "name": "Adjudicator Rick",
              "status": "Dead",
              "species": "Human",
              "gender": "Male",
              "origin": { "name": "unknown" },
              "image": "https://rickandmortyapi.com/api/character/avatar/8.jpeg"
            }
          ]
        }
      }
    }"#;

    #[test]
    fn parses_records_and_next_page() {
        let page = parse_page(PAGE_ONE, 1).expect("parse");
        assert!(page.has_next);
        assert_eq!(page.len(), 2);

        let rick = &page.records[0];
        assert_eq!(&*rick.id, "1");
        assert_eq!(rick.status, Status::Alive);
        assert_eq!(&*rick.origin, "Earth (C-137)");
        assert_eq!(page.records[1].status, Status::Dead);
    }

    #[test]
    fn null_next_means_last_page() {
        let body = r#"{"data":{"characters":{"info":{"next":null},"results":[]}}}"#;
        let page = parse_page(body, 42).expect("parse");
        assert!(!page.has_next);
        assert!(page.is_empty());
    }

    #[test]
    fn graphql_errors_become_query_errors() {
        let body = r#"{"data":null,"errors":[{"message":"bad page"},{"message":"again"}]}"#;
        match parse_page(body, 1) {
            Err(Error::Query { message }) => assert_eq!(message, "bad page; again"),
            other => panic!("expected query error, got {other:?}"),
        }
    }

    #[test]
    fn missing_characters_is_page_unavailable() {
        let body = r#"{"data":{"characters":null}}"#;
        assert!(matches!(
            parse_page(body, 99),
            Err(Error::PageUnavailable { page: 99 })
        ));
    }

    #[test]
    fn missing_origin_defaults_to_unknown() {
        let body = r#"{"data":{"characters":{"info":{"next":null},"results":[
            {"id":"5","name":"Jerry Smith","status":"Alive","species":"Human",
             "gender":"Male","origin":null,"image":""}
        ]}}}"#;
        let page = parse_page(body, 1).expect("parse");
        assert_eq!(&*page.records[0].origin, "unknown");
    }

    #[test]
    fn request_body_carries_page_variable() {
        let request = QueryRequest {
            query: CHARACTERS_QUERY,
            variables: QueryVariables { page: 3 },
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["variables"]["page"], 3);
        assert!(json["query"].as_str().is_some_and(|q| q.contains("characters(page: $page)")));
    }
}
