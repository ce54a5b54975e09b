use serde::{Deserialize, Serialize};

/// Body of `POST /token/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Opaque access/refresh pair returned by `POST /token/`. Persisted in
/// browser storage; presence of `access` is the only client-side admin check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body of `POST /token/refresh/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_pair_parses_the_login_response() {
        let pair: TokenPair =
            serde_json::from_str(r#"{"access": "aaa.bbb.ccc", "refresh": "ddd.eee.fff"}"#)
                .unwrap();
        assert_eq!(pair.access, "aaa.bbb.ccc");
        assert_eq!(pair.refresh, "ddd.eee.fff");
    }

    #[test]
    fn refresh_round_trip_matches_the_token_endpoints() {
        let body = RefreshRequest {
            refresh: "ddd.eee.fff".into(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"refresh":"ddd.eee.fff"}"#
        );

        let resp: RefreshResponse =
            serde_json::from_str(r#"{"access": "ggg.hhh.iii"}"#).unwrap();
        assert_eq!(resp.access, "ggg.hhh.iii");
    }
}
