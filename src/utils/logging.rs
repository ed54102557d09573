// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::config::{Config, LogConfig};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::Mutex;
use thiserror::Error;

/// 日志初始化错误
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("日志系统已初始化")]
    AlreadyInitialized,

    #[error("日志系统启动失败: {0}")]
    Start(#[from] flexi_logger::FlexiLoggerError),
}

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

/// 初始化日志系统
///
/// # Examples
/// ```no_run
/// use predicate_pullup::config::Config;
/// use predicate_pullup::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &Config) -> Result<(), LoggingError> {
    let mut guard = LOGGER_HANDLE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if guard.is_some() {
        return Err(LoggingError::AlreadyInitialized);
    }

    let handle = build_logger(&config.log)?;
    *guard = Some(handle);

    log::info!("日志系统初始化完成: {}/{}", config.log.dir, config.log.file);
    Ok(())
}

fn build_logger(log_config: &LogConfig) -> Result<LoggerHandle, LoggingError> {
    let handle = Logger::try_with_str(&log_config.level)?
        .log_to_file(
            FileSpec::default()
                .basename(&log_config.file)
                .directory(&log_config.dir),
        )
        .rotate(
            Criterion::Size(log_config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(log_config.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;
    Ok(handle)
}

/// 刷新并关闭日志系统
///
/// 在程序退出前调用，确保所有异步日志都已写入文件
pub fn shutdown() {
    if let Ok(mut guard) = LOGGER_HANDLE.lock() {
        if let Some(handle) = guard.take() {
            handle.flush();
            // handle 在这里被 drop，会等待异步线程完成
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    LOGGER_HANDLE
        .lock()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}
