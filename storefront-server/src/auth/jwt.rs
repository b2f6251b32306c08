//! 管理员访问令牌 (HS256)

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MIN_SECRET_LEN: usize = 32;
const DEFAULT_EXPIRATION_MINUTES: i64 = 24 * 60;
const DEFAULT_ISSUER: &str = "nakubyte-storefront";
const DEFAULT_AUDIENCE: &str = "nakubyte-admin";
const SECRET_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.~+/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

/// 读取 `JWT_*` 环境变量
///
/// `JWT_SECRET` 缺失或短于 32 字符时改用随机密钥，重启后旧令牌全部失效。
impl Default for JwtConfig {
    fn default() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if secret.len() >= MIN_SECRET_LEN => secret,
            Ok(_) => {
                tracing::warn!("JWT_SECRET shorter than {} chars, using a random key", MIN_SECRET_LEN);
                random_secret()
            }
            Err(_) => {
                tracing::warn!("JWT_SECRET not set, using a random key");
                random_secret()
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(DEFAULT_EXPIRATION_MINUTES),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_AUDIENCE.into()),
        }
    }
}

impl JwtConfig {
    /// 固定密钥，不读环境变量
    pub fn for_tests() -> Self {
        Self {
            secret: "nakubyte-test-secret-0123456789abcdef".to_string(),
            expiration_minutes: 60,
            issuer: DEFAULT_ISSUER.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
        }
    }
}

/// 64 个可打印字符
pub fn random_secret() -> String {
    let mut bytes = [0u8; 64];
    if SystemRandom::new().fill(&mut bytes).is_err() {
        // 系统随机源不可用时退回时间戳派生值，仅影响本次进程
        let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (seed.rotate_left(i as u32) ^ (i as u64 * 0x9E37)) as u8;
        }
    }
    bytes
        .iter()
        .map(|b| SECRET_ALPHABET[*b as usize % SECRET_ALPHABET.len()] as char)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// account id
    pub sub: String,
    pub email: String,
    pub is_admin: bool,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("令牌已过期")]
    Expired,

    #[error("令牌无效: {0}")]
    Invalid(String),

    #[error("签发令牌失败: {0}")]
    Signing(String),
}

#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&config.audience]);
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            config,
        }
    }

    pub fn config(&self) -> &JwtConfig {
        &self.config
    }

    /// 签发登录令牌
    pub fn issue(&self, account_id: &str, email: &str, is_admin: bool) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: account_id.to_string(),
            email: email.to_string(),
            is_admin,
            exp: (now + Duration::minutes(self.config.expiration_minutes)).timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Signing(e.to_string()))
    }

    /// 校验签名、签发者、受众与有效期
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e.to_string()),
            })
    }
}

/// 已通过令牌校验的调用者，由认证中间件放入请求扩展
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    is_admin: bool,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            is_admin: claims.is_admin,
        }
    }
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::with_config(JwtConfig::for_tests())
    }

    #[test]
    fn test_issue_then_verify() {
        let service = service();
        let token = service.issue("acc123", "admin@nakubyte.com", true).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "acc123");
        assert_eq!(claims.email, "admin@nakubyte.com");
        assert_eq!(claims.iss, DEFAULT_ISSUER);
        assert_eq!(claims.exp - claims.iat, 60 * 60);
        assert!(CurrentUser::from(claims).is_admin());
    }

    #[test]
    fn test_foreign_secret_or_audience_rejected() {
        let other_secret = JwtService::with_config(JwtConfig {
            secret: "some-other-secret-also-32-chars-or-more".to_string(),
            ..JwtConfig::for_tests()
        });
        let other_audience = JwtService::with_config(JwtConfig {
            audience: "someone-else".to_string(),
            ..JwtConfig::for_tests()
        });

        for issuer in [other_secret, other_audience] {
            let token = issuer.issue("x", "x@nakubyte.com", true).unwrap();
            assert!(matches!(service().verify(&token), Err(JwtError::Invalid(_))));
        }
    }

    #[test]
    fn test_expired_token() {
        let stale = JwtService::with_config(JwtConfig {
            expiration_minutes: -10,
            ..JwtConfig::for_tests()
        });
        let token = stale.issue("x", "x@nakubyte.com", true).unwrap();
        assert!(matches!(service().verify(&token), Err(JwtError::Expired)));
    }

    #[test]
    fn test_random_secret() {
        let a = random_secret();
        assert_eq!(a.len(), 64);
        assert!(a.len() >= MIN_SECRET_LEN);
        assert_ne!(a, random_secret());
        assert!(a.bytes().all(|c| SECRET_ALPHABET.contains(&c)));
    }
}
