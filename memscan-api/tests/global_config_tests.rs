//! 全局配置（独立进程，避免与其他测试共享状态）

use memscan_api::{get_config, init_config, is_initialized, scan_with_global, RunConfig};

#[test]
fn test_scan_with_global_config() {
    assert!(!is_initialized());
    init_config(RunConfig {
        show_tokens: true,
        ..RunConfig::default()
    });
    assert!(get_config().show_tokens);

    let output = scan_with_global("mul(3,7)");
    assert_eq!(output.sum, 21);
}
