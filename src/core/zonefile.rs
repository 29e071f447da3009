use crate::core::{ConfigProvider, Storage, ZoneRequest};
use crate::domain::model::{ACME_GATEWAY_ZONE, DEFAULT_TTL_SECS, HTTP_GATEWAY_ZONE};
use crate::utils::error::Result;

/// Renders the zone text for `domain`.
///
/// Both values are substituted verbatim; nothing is escaped or checked.
pub fn render_zone_file(domain: &str, canister_id: &str) -> String {
    format!(
        "$ORIGIN {domain}.\n\
         $TTL {ttl}\n\
         \n\
         ; Route all traffic for {domain} to the HTTP gateway\n\
         @                   IN CNAME {domain}.{http}.\n\
         \n\
         ; Associate the canister ID with the _canister-id subdomain\n\
         _canister-id        IN TXT \"{canister_id}\"\n\
         \n\
         ; Route the _acme-challenge subdomain to the certificate acquisition gateway\n\
         _acme-challenge     IN CNAME _acme-challenge.{domain}.{acme}.\n",
        domain = domain,
        ttl = DEFAULT_TTL_SECS,
        http = HTTP_GATEWAY_ZONE,
        canister_id = canister_id,
        acme = ACME_GATEWAY_ZONE,
    )
}

pub struct ZoneFileGenerator<S: Storage> {
    storage: S,
}

impl<S: Storage> ZoneFileGenerator<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn render(&self, request: &ZoneRequest) -> String {
        render_zone_file(&request.domain, &request.canister_id)
    }

    /// Writes the zone for `request` to `output_path`, replacing any
    /// existing content, and returns the path written.
    pub fn generate(&self, request: &ZoneRequest, output_path: &str) -> Result<String> {
        tracing::debug!(
            domain = %request.domain,
            canister_id = %request.canister_id,
            "Rendering zone file"
        );
        let content = self.render(request);

        self.storage.write_file(output_path, content.as_bytes())?;
        tracing::info!("Wrote {} bytes to {}", content.len(), output_path);

        Ok(output_path.to_string())
    }

    pub fn generate_from<C: ConfigProvider>(&self, config: &C) -> Result<String> {
        let request = ZoneRequest::new(config.domain(), config.canister_id());
        self.generate(&request, config.output_path())
    }
}
