/// TTL applied to every record through the `$TTL` directive.
pub const DEFAULT_TTL_SECS: u32 = 600;

/// Zone the apex CNAME points into.
pub const HTTP_GATEWAY_ZONE: &str = "icp1.io";

/// Zone the `_acme-challenge` CNAME delegates to.
pub const ACME_GATEWAY_ZONE: &str = "icp2.io";

pub const DEFAULT_OUTPUT_PATH: &str = "zonefile.zone";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRequest {
    pub domain: String,
    pub canister_id: String,
}

impl ZoneRequest {
    pub fn new(domain: impl Into<String>, canister_id: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            canister_id: canister_id.into(),
        }
    }
}
