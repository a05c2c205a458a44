//! URL query component of the tracker requests.
//!
//! ```text
//! URI = scheme ":" ["//" authority] path ["?" query] ["#" fragment]
//! ```
//!
//! Param names are percent decoded. Values are kept percent encoded because
//! some of them (`info_hash`, `peer_id`) are raw bytes, not text, so every
//! request parser decodes its own params.
use std::panic::Location;
use std::str::FromStr;

use multimap::MultiMap;
use thiserror::Error;

use crate::servers::http::percent_encoding::percent_decode_text;

/// The params of a URL query, by name. A name can have many values.
#[derive(Debug, Default)]
pub struct Query {
    params: MultiMap<String, String>,
}

impl Query {
    /// The first value of the param `name`.
    ///
    /// ```rust
    /// use torrust_swarm_tracker::servers::http::v1::query::Query;
    ///
    /// let query = "port=6881&event=started&port=6882".parse::<Query>().unwrap();
    ///
    /// assert_eq!(query.get_param("port").unwrap(), "6881");
    /// assert_eq!(query.get_param("left"), None);
    /// ```
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    /// Every value of the param `name`, in query order.
    #[must_use]
    pub fn get_param_vec(&self, name: &str) -> Option<Vec<String>> {
        self.params.get_vec(name).cloned()
    }

    /// Like [`Query::get_param`], but an empty value counts as missing.
    #[must_use]
    pub fn get_non_blank_param(&self, name: &str) -> Option<String> {
        self.get_param(name).filter(|value| !value.is_empty())
    }
}

#[derive(Error, Debug)]
pub enum ParseQueryError {
    /// A param without name, like `=value`.
    #[error("invalid param {raw_param} in {location}")]
    InvalidParam {
        location: &'static Location<'static>,
        raw_param: String,
    },
}

impl FromStr for Query {
    type Err = ParseQueryError;

    /// A value is everything after the first `=` of its param. A param
    /// without `=` has an empty value. Empty params (`a=1&&b=2`) are skipped.
    fn from_str(raw_query: &str) -> Result<Self, Self::Err> {
        let mut query = Query::default();

        for raw_param in raw_query.trim().trim_start_matches('?').split('&') {
            if raw_param.is_empty() {
                continue;
            }

            let (raw_name, value) = raw_param.split_once('=').unwrap_or((raw_param, ""));
            let name = percent_decode_text(raw_name);

            if name.is_empty() {
                return Err(ParseQueryError::InvalidParam {
                    location: Location::caller(),
                    raw_param: raw_param.to_owned(),
                });
            }

            query.params.insert(name, value.to_owned());
        }

        Ok(query)
    }
}

impl From<Vec<(&str, &str)>> for Query {
    fn from(raw_params: Vec<(&str, &str)>) -> Self {
        Self {
            params: raw_params
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value.to_owned()))
                .collect(),
        }
    }
}
