// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭操作，确保异步日志正确 flush

use crate::config::LogConfig;
use crate::core::error::{AlgoError, AlgoResult};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::sync::{Mutex, MutexGuard};

/// 全局日志句柄，用于程序退出时 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

fn handle_slot() -> AlgoResult<MutexGuard<'static, Option<LoggerHandle>>> {
    LOGGER_HANDLE
        .lock()
        .map_err(|e| AlgoError::config(format!("日志句柄锁被污染: {:?}", e)))
}

/// 初始化日志系统
///
/// `to_file` 为 true 时按大小轮转写入 `dir/file`，否则输出到 stderr。
/// 已初始化时返回错误。
///
/// `log` 门面每个进程只能注册一次全局 logger，因此本函数在整个进程内最多成功一次；
/// [`shutdown`] 之后再次调用同样返回 `AlgoError::Config`。
///
/// # Examples
/// ```no_run
/// use sortgraph::config::Config;
/// use sortgraph::utils::logging;
///
/// let config = Config::default();
/// logging::init(&config.log).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> AlgoResult<()> {
    let mut slot = handle_slot()?;
    if slot.is_some() {
        return Err(AlgoError::config("日志系统已初始化"));
    }

    let logger = Logger::try_with_str(&config.level)?;
    let handle = if config.to_file {
        logger
            .log_to_file(
                FileSpec::default()
                    .basename(&config.file)
                    .directory(&config.dir),
            )
            .rotate(
                Criterion::Size(config.max_file_size),
                Naming::Numbers,
                Cleanup::KeepLogFiles(config.max_files),
            )
            .write_mode(WriteMode::Async)
            .append()
            .start()?
    } else {
        logger.log_to_stderr().start()?
    };

    *slot = Some(handle);
    drop(slot);

    if config.to_file {
        log::info!("日志系统初始化完成: {}/{}", config.dir, config.file);
    } else {
        log::info!("日志系统初始化完成: stderr");
    }
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 在程序退出前调用，确保所有异步日志都已写入文件
pub fn shutdown() {
    if let Ok(mut guard) = handle_slot() {
        if let Some(handle) = guard.take() {
            handle.flush();
            // handle 在这里被 drop，会等待异步线程完成
        }
    }
}

/// 检查日志系统是否已初始化
pub fn is_initialized() -> bool {
    handle_slot().map(|guard| guard.is_some()).unwrap_or(false)
}
