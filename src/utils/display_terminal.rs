//! 터미널 출력 포맷팅 유틸리티
//!
//! 레지스트리 초기화 과정에서 사용되는 터미널 출력 함수들입니다.
//! 박스 형태의 제목, 진행 단계, 완료 요약을 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║        🔄 INITIALIZING COMPONENT REGISTRY         ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^49}║\n╚{}╝", border, title, border)
}

/// `→ Step 1: Creating Repository instances`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: Repository instances created (4 items)`
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 최종 요약
pub fn print_final_summary(repos: usize, services: usize, controllers: usize) {
    println!();
    print_boxed_title("🎨 COMPONENT REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🧭 Controllers: {}", controllers);
    println!("   🚀 Total Components: {}", repos + services + controllers);
    println!();
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_title_has_three_lines() {
        let boxed = boxed_title("GALLERY");
        let lines: Vec<&str> = boxed.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains("GALLERY"));
        assert!(lines[2].ends_with('╝'));
    }
}
