use utoipa::{
    Modify,
    openapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

pub const GATEWAY_IDENTITY_HEADER: &str = "x-username";

/// Documents the identity header injected by the upstream gateway after it
/// has authenticated the caller.
pub struct GatewayIdentitySecurityAddon;

impl Modify for GatewayIdentitySecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "gatewayIdentity",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(GATEWAY_IDENTITY_HEADER))),
        );
    }
}
