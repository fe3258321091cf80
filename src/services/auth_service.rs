use super::{Fetcher, ServiceError};

pub struct AuthService<F> {
    fetcher: F,
}

impl<F: Fetcher> AuthService<F> {
    pub fn new(fetcher: F) -> Self {
        AuthService { fetcher }
    }

    /// `Ok(false)` means LinkedIn answered and rejected the cookie; `Err` means
    /// we could not tell.
    pub async fn validate_session(
        &self,
        session_cookie: &str,
        proxy: Option<&str>,
    ) -> Result<bool, ServiceError> {
        let status = self
            .fetcher
            .probe(session_cookie, proxy)
            .await
            .map_err(|e| ServiceError::new("session validation request failed", e))?;

        Ok(status == 200)
    }
}
