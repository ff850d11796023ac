//! 桥接层配置
//!
//! 参数扁平化，运行时可通过 `set_config` 或 C 接口修改。
//! 配置只在构造适配器和处理 panic 时读取，转发路径上不加锁。

use once_cell::sync::Lazy;
use std::sync::RwLock;

use crate::{BridgeError, Result};

/// 入口函数内部发生 panic 时的处理方式
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanicPolicy {
    /// 记录日志后终止进程（与引擎分配失败时的约定一致）
    Abort = 0,
    /// 记录日志后返回该入口的哨兵值（空指针、false、0 等）
    Sentinel = 1,
}

impl PanicPolicy {
    pub fn from_raw(raw: u32) -> Result<Self> {
        match raw {
            0 => Ok(PanicPolicy::Abort),
            1 => Ok(PanicPolicy::Sentinel),
            other => Err(BridgeError::UnknownPanicPolicy(other)),
        }
    }
}

/// 桥接配置（扁平化，不嵌套）
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    // ========== 错误处理 ==========
    /// panic 处理方式，默认 Abort
    pub panic_policy: PanicPolicy,

    // ========== 日志 ==========
    /// 是否对每次转发输出 trace 日志，默认 false
    /// 在适配器构造时快照，之后修改不影响已有适配器
    pub trace_dispatch: bool,
    /// 构造时缺少必需回调是否输出警告，默认 true
    pub warn_missing_required: bool,
    /// 是否记录适配器创建/销毁，默认 true
    pub log_lifecycle: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            // ====== 错误处理 ======
            // 引擎本身没有可恢复的错误路径，默认直接终止，
            // 嵌入方需要继续运行时改为 Sentinel
            panic_policy: PanicPolicy::Abort,

            // ====== 日志 ======
            // 转发日志量和模拟步数成正比，只在排查回调问题时打开
            trace_dispatch: false,
            warn_missing_required: true,
            log_lifecycle: true,
        }
    }
}

/// 全局配置实例
static BRIDGE_CONFIG: Lazy<RwLock<BridgeConfig>> =
    Lazy::new(|| RwLock::new(BridgeConfig::default()));

/// 获取当前配置（只读）
pub fn get_config() -> BridgeConfig {
    BRIDGE_CONFIG
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// 手动设置配置
pub fn set_config(config: BridgeConfig) {
    *BRIDGE_CONFIG
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
}

/// 原地修改配置的某几项
pub fn update_config(f: impl FnOnce(&mut BridgeConfig)) {
    let mut config = BRIDGE_CONFIG
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut config);
}

/// 重置为默认配置
pub fn reset_config() {
    set_config(BridgeConfig::default());
}
