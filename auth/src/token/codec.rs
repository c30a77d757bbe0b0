use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenKind;
use super::errors::TokenError;
use super::errors::TokenRejection;

/// Codec for signed, time-limited credentials.
///
/// Issues and verifies HS256-signed tokens carrying a subject id, an
/// issued-at instant, an expiry, and a token kind. The codec is purely
/// functional given its secret: no shared mutable state, safe to share
/// across request tasks behind an `Arc`.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from a server-held secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for `subject`, expiring `ttl` from now.
    ///
    /// The issued-at claim is stamped from the clock, so two calls with the
    /// same inputs at different instants yield different tokens. The
    /// signature covers every claim.
    pub fn issue(
        &self,
        subject: &str,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            kind,
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Checks run in order and short-circuit on the first failure: structure,
    /// signature, expiry, required claims. Expiry uses zero leeway; a token
    /// expired by one second is rejected even though its signature verifies.
    ///
    /// Malformed input never panics; every failure is a typed rejection.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenRejection> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(reject)?;

        // The library treats exp == now as still valid; the credential window
        // is [iat, exp), so the expiry instant itself must already reject.
        let claims = token_data.claims;
        if claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenRejection::Expired);
        }

        Ok(claims)
    }

    /// Decode token claims without verifying the signature.
    ///
    /// # Security Warning
    /// For logging and inspection only. Never trust claims from this method
    /// for authorization decisions.
    pub fn decode_unverified(&self, token: &str) -> Result<Claims, TokenRejection> {
        let mut validation = Validation::new(self.algorithm);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(reject)
    }
}

fn reject(e: jsonwebtoken::errors::Error) -> TokenRejection {
    match e.kind() {
        ErrorKind::ExpiredSignature => TokenRejection::Expired,
        ErrorKind::InvalidSignature => TokenRejection::InvalidSignature,
        ErrorKind::MissingRequiredClaim(claim) => TokenRejection::MissingClaim(claim.clone()),
        // Base64, JSON, UTF-8, and shape errors all mean the token was never
        // a well-formed credential.
        _ => TokenRejection::Malformed(e.to_string()),
    }
}
