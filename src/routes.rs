//! Client route surface
//!
//! `/`, `/loading?region=&summoner=&demo=`, `/dashboard/{region}/{name}` and
//! `/compare`. Summoner names are URL-encoded in both paths and queries.

use std::fmt;
use thiserror::Error;

use crate::error::ClientError;

pub const LANDING_PATH: &str = "/";
pub const LOADING_PATH: &str = "/loading";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const COMPARE_PATH: &str = "/compare";

/// Shown when the landing form is submitted without a name
pub const EMPTY_SUMMONER_MESSAGE: &str = "Please enter a summoner name";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("No route matches {0}")]
    NotFound(String),

    #[error("Malformed route segment: {0}")]
    Malformed(String),
}

/// Query of the loading page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingQuery {
    pub region: Option<String>,
    pub summoner: Option<String>,
    pub demo: bool,
}

impl LoadingQuery {
    /// Region and trimmed summoner name, when both are present
    pub fn target(&self) -> Option<(&str, &str)> {
        let region = self.region.as_deref().map(str::trim).filter(|r| !r.is_empty())?;
        let summoner = self.summoner.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some((region, summoner))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Loading(LoadingQuery),
    Dashboard {
        region: String,
        summoner_name: String,
    },
    Compare,
}

impl Route {
    pub fn loading(region: &str, summoner: &str) -> Self {
        Route::Loading(LoadingQuery {
            region: Some(region.to_string()),
            summoner: Some(summoner.to_string()),
            demo: false,
        })
    }

    pub fn demo() -> Self {
        Route::Loading(LoadingQuery {
            demo: true,
            ..LoadingQuery::default()
        })
    }

    pub fn dashboard(region: &str, summoner_name: &str) -> Self {
        Route::Dashboard {
            region: region.to_string(),
            summoner_name: summoner_name.to_string(),
        }
    }

    /// Parse a path with optional query string
    pub fn parse(location: &str) -> Result<Self, RouteError> {
        let (path, query) = location.split_once('?').unwrap_or((location, ""));
        let path = path.trim_end_matches('/');

        match path {
            "" => Ok(Route::Landing),
            LOADING_PATH => parse_loading_query(query).map(Route::Loading),
            COMPARE_PATH => Ok(Route::Compare),
            _ => {
                let rest = path
                    .strip_prefix(DASHBOARD_PATH)
                    .and_then(|rest| rest.strip_prefix('/'))
                    .ok_or_else(|| RouteError::NotFound(location.to_string()))?;

                match rest.split('/').collect::<Vec<_>>().as_slice() {
                    [region, name] if !region.is_empty() && !name.is_empty() => {
                        Ok(Route::Dashboard {
                            region: decode(region)?,
                            summoner_name: decode(name)?,
                        })
                    }
                    _ => Err(RouteError::NotFound(location.to_string())),
                }
            }
        }
    }

    /// Render the route as a path
    pub fn to_path(&self) -> String {
        match self {
            Route::Landing => LANDING_PATH.to_string(),
            Route::Loading(query) => {
                let mut params = Vec::new();
                if let Some(region) = &query.region {
                    params.push(format!("region={}", urlencoding::encode(region)));
                }
                if let Some(summoner) = &query.summoner {
                    params.push(format!("summoner={}", urlencoding::encode(summoner)));
                }
                if query.demo {
                    params.push("demo=true".to_string());
                }
                if params.is_empty() {
                    LOADING_PATH.to_string()
                } else {
                    format!("{}?{}", LOADING_PATH, params.join("&"))
                }
            }
            Route::Dashboard {
                region,
                summoner_name,
            } => format!(
                "{}/{}/{}",
                DASHBOARD_PATH,
                urlencoding::encode(region),
                urlencoding::encode(summoner_name)
            ),
            Route::Compare => COMPARE_PATH.to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

fn decode(raw: &str) -> Result<String, RouteError> {
    urlencoding::decode(&raw.replace('+', " "))
        .map(|s| s.into_owned())
        .map_err(|_| RouteError::Malformed(raw.to_string()))
}

fn parse_loading_query(query: &str) -> Result<LoadingQuery, RouteError> {
    let mut parsed = LoadingQuery::default();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode(value)?;
        match key {
            "region" => parsed.region = Some(value),
            "summoner" => parsed.summoner = Some(value),
            "demo" => parsed.demo = matches!(value.as_str(), "true" | "1"),
            _ => {}
        }
    }

    Ok(parsed)
}

/// Validate the landing form and build the loading route.
///
/// The name is trimmed; a blank name is rejected before anything is
/// requested.
pub fn submit_lookup(region: &str, summoner_name: &str) -> Result<Route, ClientError> {
    let name = summoner_name.trim();
    if name.is_empty() {
        return Err(ClientError::Validation(EMPTY_SUMMONER_MESSAGE.to_string()));
    }
    Ok(Route::loading(region.trim(), name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_lookup() {
        let route = submit_lookup("kr", "  Faker ").unwrap();
        assert_eq!(route.to_path(), "/loading?region=kr&summoner=Faker");

        let err = submit_lookup("kr", "   ").unwrap_err();
        assert_eq!(err.user_message(), EMPTY_SUMMONER_MESSAGE);
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Ok(Route::Landing));
        assert_eq!(Route::parse("/compare"), Ok(Route::Compare));
        assert_eq!(
            Route::parse("/dashboard/kr/Hide%20on%20bush"),
            Ok(Route::dashboard("kr", "Hide on bush"))
        );
        assert!(matches!(Route::parse("/dashboard/kr"), Err(RouteError::NotFound(_))));
        assert!(matches!(Route::parse("/settings"), Err(RouteError::NotFound(_))));
    }

    #[test]
    fn test_loading_query() {
        let route = Route::parse("/loading?region=euw1&summoner=G2%20Caps%23EUW").unwrap();
        let Route::Loading(query) = route else {
            panic!("expected loading route");
        };
        assert_eq!(query.target(), Some(("euw1", "G2 Caps#EUW")));
        assert!(!query.demo);

        let Ok(Route::Loading(query)) = Route::parse("/loading?summoner=Faker") else {
            panic!("expected loading route");
        };
        assert_eq!(query.target(), None);

        assert_eq!(Route::demo().to_path(), "/loading?demo=true");
        let Ok(Route::Loading(query)) = Route::parse("/loading?demo=true") else {
            panic!("expected loading route");
        };
        assert!(query.demo);
    }

    #[test]
    fn test_dashboard_path_round_trip() {
        let route = Route::dashboard("kr", "Faker");
        assert_eq!(route.to_path(), "/dashboard/kr/Faker");
        assert_eq!(Route::parse(&route.to_path()), Ok(route));
    }

    #[test]
    fn test_riot_id_dashboard_path_matches_handed_off_route() {
        let handed_off = Route::dashboard("euw1", "G2 Caps#EUW");
        let path = handed_off.to_path();
        assert_eq!(path, "/dashboard/euw1/G2%20Caps%23EUW");

        // What the dashboard reads back from `location.pathname`
        assert_eq!(Route::parse(&path), Ok(handed_off.clone()));
        assert_eq!(Route::parse(&format!("{}/", path)), Ok(handed_off));
    }
}
