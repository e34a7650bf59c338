//! Production readiness checks. Each check inspects an environment snapshot
//! (or runs a subprocess) independently and reports pass/warn/fail; the
//! aggregate fails only when a required check fails.

use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use uuid::Uuid;

pub const REQUIRED_ENV_VARS: [&str; 3] =
    ["MEMOS_SECRET_KEY", "MEMOS_DEBUG", "MEMOS_ALLOWED_HOSTS"];

pub const RECOMMENDED_ENV_VARS: [&str; 3] = [
    "SECURE_SSL_REDIRECT",
    "USE_X_FORWARDED_PROTO",
    "SECURE_HSTS_SECONDS",
];

const DEFAULT_SECRET_KEYS: [&str; 2] = ["your-default-secret-key", "your-super-secret-key-here"];

/// Placeholder keys shipped in example configs. Only exact matches count;
/// a real key that merely resembles one is fine.
pub fn is_known_default_secret(secret: &str) -> bool {
    DEFAULT_SECRET_KEYS.contains(&secret)
}

const DEV_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "0.0.0.0"];

const MIN_SECRET_KEY_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Debug)]
pub struct CheckResult {
    pub name: &'static str,
    pub status: CheckStatus,
    pub messages: Vec<String>,
    /// Required checks block deployment on failure; optional ones never do.
    pub required: bool,
}

impl CheckResult {
    fn pass(name: &'static str, required: bool) -> Self {
        Self {
            name,
            status: CheckStatus::Pass,
            messages: Vec::new(),
            required,
        }
    }

    fn warn(&mut self, message: impl Into<String>) {
        if self.status == CheckStatus::Pass {
            self.status = CheckStatus::Warn;
        }
        self.messages.push(message.into());
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.status = CheckStatus::Fail;
        self.messages.push(message.into());
    }

    fn note(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

/// Snapshot of environment variables, injectable for tests.
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

pub fn check_environment_variables(env: &Environment) -> CheckResult {
    let mut result = CheckResult::pass("environment variables", true);

    let missing_required: Vec<&str> = REQUIRED_ENV_VARS
        .iter()
        .copied()
        .filter(|var| env.get(var).is_none())
        .collect();
    let missing_recommended: Vec<&str> = RECOMMENDED_ENV_VARS
        .iter()
        .copied()
        .filter(|var| env.get(var).is_none())
        .collect();

    if !missing_required.is_empty() {
        result.fail(format!(
            "Missing required variables: {}",
            missing_required.join(", ")
        ));
    }
    if !missing_recommended.is_empty() {
        result.warn(format!(
            "Missing recommended variables: {}",
            missing_recommended.join(", ")
        ));
    }
    result
}

pub fn check_debug_setting(env: &Environment) -> CheckResult {
    let mut result = CheckResult::pass("debug setting", true);

    let debug = env.get("MEMOS_DEBUG").unwrap_or("false");
    if debug.eq_ignore_ascii_case("false") || debug == "0" {
        result.note("DEBUG is disabled");
    } else {
        result.fail(format!(
            "DEBUG is enabled ({debug}). Set MEMOS_DEBUG=false for production"
        ));
    }
    result
}

pub fn check_secret_key(env: &Environment) -> CheckResult {
    let mut result = CheckResult::pass("secret key", true);

    let Some(secret_key) = env.get("MEMOS_SECRET_KEY") else {
        result.fail("MEMOS_SECRET_KEY is not set");
        return result;
    };

    if is_known_default_secret(secret_key) {
        result.fail("MEMOS_SECRET_KEY is using a default value. Generate a new secure key!");
        return result;
    }

    if secret_key.len() < MIN_SECRET_KEY_LEN {
        result.warn("MEMOS_SECRET_KEY is quite short. Consider using a longer key");
    } else {
        result.note("MEMOS_SECRET_KEY appears to be secure");
    }
    result
}

pub fn check_allowed_hosts(env: &Environment) -> CheckResult {
    let mut result = CheckResult::pass("allowed hosts", true);

    let raw = env.get("MEMOS_ALLOWED_HOSTS").unwrap_or("");
    let hosts: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .collect();

    if hosts.is_empty() {
        result.fail("MEMOS_ALLOWED_HOSTS contains no valid hosts");
        return result;
    }

    if hosts.iter().any(|host| DEV_HOSTS.contains(host)) {
        result.warn(format!(
            "MEMOS_ALLOWED_HOSTS contains development hosts: {}. \
             Make sure to include your production domain",
            hosts.join(", ")
        ));
    } else {
        result.note(format!("MEMOS_ALLOWED_HOSTS is configured: {}", hosts.join(", ")));
    }
    result
}

/// Delegates to the server binary's own deployment validation. Spawn errors
/// become a generic check failure, never a panic or propagated error.
pub fn check_deploy_config(server_bin: &Path) -> CheckResult {
    let mut result = CheckResult::pass("deploy check", true);

    match Command::new(server_bin).arg("--check-deploy").output() {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.trim().is_empty() {
                result.note(stdout.trim().to_string());
            }
        }
        Ok(output) => {
            result.fail(format!(
                "Deploy check failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        Err(err) => {
            result.fail(format!("Error running deploy check: {err}"));
        }
    }
    result
}

/// Dry-run probe of the static root: verifies the directory exists and is
/// writable without leaving anything behind.
pub fn check_static_files(env: &Environment) -> CheckResult {
    let mut result = CheckResult::pass("static files", false);

    let Some(static_root) = env.get("MEMOS_STATIC_ROOT") else {
        result.note("MEMOS_STATIC_ROOT is not set; skipping static file check");
        return result;
    };

    let root = Path::new(static_root);
    if !root.is_dir() {
        result.fail(format!("Static root {static_root} is not a directory"));
        return result;
    }

    let probe = root.join(format!(".readiness-probe-{}", Uuid::new_v4().simple()));
    match std::fs::write(&probe, b"") {
        Ok(()) => {
            let _ = std::fs::remove_file(&probe);
            result.note("Static root is writable");
        }
        Err(err) => {
            result.fail(format!("Static root {static_root} is not writable: {err}"));
        }
    }
    result
}

/// Dry-run migration status via the sqlx CLI.
pub fn check_migrations() -> CheckResult {
    run_migrations_check("sqlx")
}

fn run_migrations_check(program: &str) -> CheckResult {
    let mut result = CheckResult::pass("migrations", false);

    match Command::new(program)
        .args(["migrate", "info", "--source", "migrations"])
        .output()
    {
        Ok(output) if output.status.success() => {
            result.note("Database migration check passed");
        }
        Ok(output) => {
            result.fail(format!(
                "Database migration check failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        Err(err) => {
            result.fail(format!("Error checking migrations: {err}"));
        }
    }
    result
}

#[derive(Default)]
pub struct ReadinessReport {
    pub results: Vec<CheckResult>,
}

impl ReadinessReport {
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Warnings and optional-check failures never block.
    pub fn passed(&self) -> bool {
        self.results
            .iter()
            .all(|r| !r.required || r.status != CheckStatus::Fail)
    }

    pub fn passed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status != CheckStatus::Fail)
            .count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }
}

/// 64 hex characters, comfortably above the minimum secret length.
pub fn suggest_secret_key() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn production_env() -> Environment {
        Environment::from_iter([
            ("MEMOS_SECRET_KEY", "x".repeat(60)),
            ("MEMOS_DEBUG", "false".to_string()),
            ("MEMOS_ALLOWED_HOSTS", "memos.example.com".to_string()),
            ("SECURE_SSL_REDIRECT", "true".to_string()),
            ("USE_X_FORWARDED_PROTO", "true".to_string()),
            ("SECURE_HSTS_SECONDS", "31536000".to_string()),
        ])
    }

    #[test]
    fn fully_configured_environment_passes() {
        let env = production_env();
        assert_eq!(check_environment_variables(&env).status, CheckStatus::Pass);
        assert_eq!(check_debug_setting(&env).status, CheckStatus::Pass);
        assert_eq!(check_secret_key(&env).status, CheckStatus::Pass);
        assert_eq!(check_allowed_hosts(&env).status, CheckStatus::Pass);
    }

    #[test]
    fn missing_required_variable_fails() {
        let env = Environment::from_iter([("MEMOS_DEBUG", "false")]);
        let result = check_environment_variables(&env);
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.messages[0].contains("MEMOS_SECRET_KEY"));
    }

    #[test]
    fn missing_recommended_variable_only_warns() {
        let env = Environment::from_iter([
            ("MEMOS_SECRET_KEY", "k"),
            ("MEMOS_DEBUG", "false"),
            ("MEMOS_ALLOWED_HOSTS", "memos.example.com"),
        ]);
        assert_eq!(check_environment_variables(&env).status, CheckStatus::Warn);
    }

    #[test]
    fn enabled_debug_fails() {
        let env = Environment::from_iter([("MEMOS_DEBUG", "true")]);
        assert_eq!(check_debug_setting(&env).status, CheckStatus::Fail);
    }

    #[test]
    fn default_secret_key_fails() {
        let env = Environment::from_iter([("MEMOS_SECRET_KEY", "your-default-secret-key")]);
        assert_eq!(check_secret_key(&env).status, CheckStatus::Fail);
    }

    #[test]
    fn short_secret_key_warns_but_passes() {
        let env = Environment::from_iter([("MEMOS_SECRET_KEY", "short-but-not-default")]);
        assert_eq!(check_secret_key(&env).status, CheckStatus::Warn);
    }

    #[test]
    fn empty_allowed_hosts_fails() {
        let env = Environment::from_iter([("MEMOS_ALLOWED_HOSTS", " , ,")]);
        assert_eq!(check_allowed_hosts(&env).status, CheckStatus::Fail);
    }

    #[test]
    fn development_hosts_warn() {
        let env = Environment::from_iter([("MEMOS_ALLOWED_HOSTS", "localhost,memos.example.com")]);
        assert_eq!(check_allowed_hosts(&env).status, CheckStatus::Warn);
    }

    #[test]
    fn warnings_do_not_block_the_report() {
        let mut report = ReadinessReport::default();
        let env = Environment::from_iter([("MEMOS_SECRET_KEY", "short-but-not-default")]);
        report.push(check_secret_key(&env));
        assert!(report.passed());
    }

    #[test]
    fn required_failure_blocks_the_report() {
        let mut report = ReadinessReport::default();
        report.push(check_debug_setting(&Environment::from_iter([(
            "MEMOS_DEBUG",
            "true",
        )])));
        report.push(check_secret_key(&Environment::from_iter([(
            "MEMOS_SECRET_KEY",
            "x".repeat(60),
        )])));
        assert!(!report.passed());
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn optional_failure_does_not_block_the_report() {
        let mut report = ReadinessReport::default();
        let mut optional = CheckResult::pass("migrations", false);
        optional.fail("sqlx not installed");
        report.push(optional);
        assert!(report.passed());
    }

    #[test]
    fn deploy_check_spawn_failure_becomes_a_check_failure() {
        let result = check_deploy_config(Path::new("/nonexistent/memos-server"));
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.messages[0].starts_with("Error running deploy check"));
        assert!(result.required);
    }

    #[test]
    fn migrations_spawn_failure_is_reported_but_optional() {
        let result = run_migrations_check("/nonexistent/sqlx");
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.messages[0].starts_with("Error checking migrations"));

        let mut report = ReadinessReport::default();
        report.push(result);
        assert!(report.passed());
    }

    #[test]
    fn only_exact_default_secrets_are_flagged() {
        assert!(is_known_default_secret("your-default-secret-key"));
        assert!(is_known_default_secret("your-super-secret-key-here"));
        assert!(!is_known_default_secret(
            "your-organization-memos-key-0123456789012345678901234567"
        ));
    }

    #[test]
    fn unset_static_root_is_skipped() {
        let env = Environment::from_iter::<[(&str, &str); 0]>([]);
        assert_eq!(check_static_files(&env).status, CheckStatus::Pass);
    }

    #[test]
    fn suggested_secret_key_is_long_enough() {
        assert!(suggest_secret_key().len() >= MIN_SECRET_KEY_LEN);
    }
}
