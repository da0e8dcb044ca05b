//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 시 구성 요약을 박스 형태로 출력합니다.

use crate::config::AppConfig;

pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 저장소와 공급자 구성을 출력합니다. 비밀값은 출력하지 않습니다.
pub fn print_startup_summary(config: &AppConfig) {
    println!();
    print_boxed_title("🔐 SECRETS SERVICE");

    let credential_store = if config.uses_memory_store() {
        "in-process".to_string()
    } else {
        format!("MongoDB ({})", config.database_name)
    };
    print_sub_task("Credential store", &credential_store);

    let session_store = if config.redis_url.is_some() { "Redis" } else { "in-process" };
    print_sub_task("Session store", session_store);

    let providers: Vec<&str> = config
        .providers
        .iter()
        .map(|p| p.provider.display_name())
        .collect();
    let providers = if providers.is_empty() {
        "none".to_string()
    } else {
        providers.join(", ")
    };
    print_sub_task("OAuth providers", &providers);
    print_sub_task("Base URL", &config.app_base_url);
    println!();
}
