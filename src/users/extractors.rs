use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use tracing::debug;

/// Text fields of a urlencoded or multipart body. A repeated key keeps its last value;
/// file parts are skipped. An unreadable body yields no fields.
#[derive(Debug, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let mut multipart = match Multipart::from_request(req, state).await {
                Ok(m) => m,
                Err(e) => {
                    debug!(error = %e, "body is not multipart");
                    return Ok(Self::default());
                }
            };
            let mut fields = Self::default();
            loop {
                let field = match multipart.next_field().await {
                    Ok(Some(field)) => field,
                    Ok(None) => break,
                    Err(e) => {
                        debug!(error = %e, "multipart body cut short");
                        break;
                    }
                };
                if field.file_name().is_some() {
                    continue;
                }
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                match field.text().await {
                    Ok(value) => {
                        fields.0.insert(name, value);
                    }
                    Err(e) => debug!(error = %e, field = %name, "multipart field unreadable"),
                }
            }
            return Ok(fields);
        }

        match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => Ok(Self::from_pairs(pairs)),
            Err(e) => {
                debug!(error = %e, "body is not a form");
                Ok(Self::default())
            }
        }
    }
}
