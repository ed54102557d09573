//! 配置与日志系统集成测试
//!
//! 测试范围:
//! - 配置默认值与 TOML 往返
//! - 配置驱动推导行为
//! - 日志文件创建和写入

mod common;

use std::fs;
use std::time::Duration;

use predicate_pullup::config::{Config, ConfigError, PullUpConfig};
use predicate_pullup::utils::logging;
use predicate_pullup::PredicatePullUp;
use serial_test::serial;
use tempfile::TempDir;

use common::plan_fixtures::orders_customers;

/// 测试日志配置默认值
#[test]
fn test_log_config_defaults() {
    let config = Config::default();

    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.dir, "logs");
    assert_eq!(config.log.file, "predicate_pullup");
    assert_eq!(config.log.max_file_size, 100 * 1024 * 1024); // 100MB
    assert_eq!(config.log.max_files, 5);
}

/// 测试配置序列化和反序列化
#[test]
fn test_config_serialization() {
    let mut config = Config::default();
    config.log.level = "debug".to_string();
    config.pull_up.max_equivalence_class_size = 16;

    let toml_str = toml::to_string_pretty(&config).expect("序列化配置失败");
    assert!(toml_str.contains("[log]"));
    assert!(toml_str.contains("[pull_up]"));
    assert!(toml_str.contains("level = \"debug\""));
    assert!(toml_str.contains("max_equivalence_class_size = 16"));

    let loaded_config: Config = toml::from_str(&toml_str).expect("反序列化配置失败");
    assert_eq!(loaded_config, config);
}

#[test]
fn test_config_file_roundtrip() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let path = dir.path().join("pullup.toml");

    let mut config = Config::default();
    config.pull_up = PullUpConfig {
        enable_inference: false,
        max_equivalence_class_size: 8,
    };
    config.save(&path).expect("保存配置失败");

    let loaded = Config::load(&path).expect("加载配置失败");
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_config_file_is_io_error() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_loaded_config_drives_pull_up() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let path = dir.path().join("pullup.toml");
    fs::write(&path, "[pull_up]\nenable_inference = false\n").expect("写入配置失败");
    let config = Config::load(&path).expect("加载配置失败");

    let plan = orders_customers();
    let mut without = PredicatePullUp::with_config(&plan.arena, &config.pull_up);
    let mut with = PredicatePullUp::new(&plan.arena);
    assert!(without.derive(plan.root).len() < with.derive(plan.root).len());
}

/// 测试日志文件创建和写入
#[test]
#[serial]
fn test_log_file_written() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let mut config = Config::default();
    config.log.dir = dir.path().to_string_lossy().into_owned();
    config.log.level = "trace".to_string();
    config.log.file = "pullup_test".to_string();

    logging::init(&config).expect("日志初始化失败");
    assert!(logging::is_initialized());

    let plan = orders_customers();
    let mut pass = PredicatePullUp::new(&plan.arena);
    pass.derive(plan.root);

    logging::shutdown();
    assert!(!logging::is_initialized());
    std::thread::sleep(Duration::from_millis(50));

    let log_files: Vec<_> = fs::read_dir(dir.path())
        .expect("读取日志目录失败")
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with("pullup_test"))
        .collect();
    assert!(!log_files.is_empty(), "应创建日志文件");

    let content: String = log_files
        .iter()
        .map(|entry| fs::read_to_string(entry.path()).unwrap_or_default())
        .collect();
    assert!(content.contains("谓词推导完成"), "日志中应包含推导摘要");
}
