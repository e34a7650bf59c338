//! Production readiness check for the memos service. Run before deployment;
//! exits non-zero when any required check fails.

use std::path::PathBuf;
use std::process::ExitCode;

use memos::readiness::{
    CheckResult, CheckStatus, Environment, ReadinessReport, check_allowed_hosts,
    check_debug_setting, check_deploy_config, check_environment_variables, check_migrations,
    check_secret_key, check_static_files, is_known_default_secret, suggest_secret_key,
};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let env = Environment::from_process();

    println!("Memos Production Readiness Check");
    println!("{}", "=".repeat(50));

    let mut report = ReadinessReport::default();
    report.push(check_environment_variables(&env));
    report.push(check_debug_setting(&env));
    report.push(check_secret_key(&env));
    report.push(check_allowed_hosts(&env));
    report.push(check_deploy_config(&server_binary()));
    report.push(check_static_files(&env));
    report.push(check_migrations());

    for result in &report.results {
        print_result(result);
    }

    println!("\n{}", "=".repeat(50));
    println!(
        "Results: {}/{} checks passed",
        report.passed_count(),
        report.total()
    );

    if report.passed() {
        println!("All required checks passed. The application is ready for production.");
        ExitCode::SUCCESS
    } else {
        println!("Several issues need to be addressed before deployment.");

        let secret = env.get("MEMOS_SECRET_KEY");
        if secret.is_none() || secret.is_some_and(is_known_default_secret) {
            println!("\nNeed a new MEMOS_SECRET_KEY? Here's a secure one:");
            println!("  MEMOS_SECRET_KEY={}", suggest_secret_key());
        }
        ExitCode::FAILURE
    }
}

fn print_result(result: &CheckResult) {
    let marker = match result.status {
        CheckStatus::Pass => "PASS",
        CheckStatus::Warn => "WARN",
        CheckStatus::Fail => "FAIL",
    };
    println!("\n[{marker}] {}", result.name);
    for message in &result.messages {
        println!("  {message}");
    }
}

/// The server binary ships alongside this one.
fn server_binary() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("memos-server")))
        .unwrap_or_else(|| PathBuf::from("memos-server"))
}
