use super::*;

/// Every argument travels as its own JSON document in the query string.
pub(super) fn encode_args(
    args: &[(&str, serde_json::Value)],
) -> Result<Vec<(String, String)>, ApiError> {
    args.iter()
        .map(|(name, value)| {
            serde_json::to_string(value)
                .map(|encoded| (name.to_string(), encoded))
                .map_err(|source| ApiError::Encode {
                    name: name.to_string(),
                    source,
                })
        })
        .collect()
}

impl ApiClient {
    pub(super) fn url(&self, method: &str) -> String {
        format!("{}/api/{}", self.base_url, method)
    }

    pub(super) async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        args: &[(&str, serde_json::Value)],
    ) -> Result<T, ApiError> {
        let query = encode_args(args)?;
        debug!(method, args = query.len(), "api call");

        let resp = self.client.get(self.url(method)).query(&query).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        let out = decode_envelope(method, status, &body);
        if let Err(err) = &out {
            debug!(method, %status, error = %err, "api call failed");
        }
        out
    }
}
