//! 登录凭据工具
//!
//! 密码哈希 (argon2)、邮箱格式检查，以及按邮箱计数的登录失败限流。

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use regex::Regex;

/// 窗口内允许的连续失败次数
pub const MAX_FAILED_ATTEMPTS: u32 = 5;
/// 失败计数窗口
pub const ATTEMPT_WINDOW: Duration = Duration::from_secs(15 * 60);

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[derive(Debug, Clone, Copy)]
struct AttemptWindow {
    failures: u32,
    started: Instant,
}

/// 登录失败限流 (key = 小写邮箱)
#[derive(Debug)]
pub struct LoginAttempts {
    entries: DashMap<String, AttemptWindow>,
    max_failures: u32,
    window: Duration,
}

impl Default for LoginAttempts {
    fn default() -> Self {
        Self::new(MAX_FAILED_ATTEMPTS, ATTEMPT_WINDOW)
    }
}

impl LoginAttempts {
    pub fn new(max_failures: u32, window: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            max_failures,
            window,
        }
    }

    fn key(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// 当前窗口内是否已达到失败上限
    pub fn is_blocked(&self, email: &str) -> bool {
        let key = Self::key(email);
        let Some(entry) = self.entries.get(&key).map(|e| *e) else {
            return false;
        };
        if entry.started.elapsed() >= self.window {
            self.entries.remove(&key);
            return false;
        }
        entry.failures >= self.max_failures
    }

    /// 丢弃已过期的窗口
    pub fn prune(&self) {
        self.entries.retain(|_, w| w.started.elapsed() < self.window);
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.entries.len()
    }

    /// 记录一次失败，返回窗口内的失败次数
    ///
    /// 每次写入前先清理过期窗口，随机邮箱刷接口不会让表无限增长。
    pub fn record_failure(&self, email: &str) -> u32 {
        self.prune();
        let mut entry = self
            .entries
            .entry(Self::key(email))
            .or_insert(AttemptWindow {
                failures: 0,
                started: Instant::now(),
            });
        if entry.started.elapsed() >= self.window {
            *entry = AttemptWindow {
                failures: 0,
                started: Instant::now(),
            };
        }
        entry.failures += 1;
        entry.failures
    }

    /// 登录成功后清零
    pub fn reset(&self, email: &str) {
        self.entries.remove(&Self::key(email));
    }
}
