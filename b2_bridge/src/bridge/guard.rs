//! 边界上的 panic 隔离
//!
//! panic 不能穿过 C 边界。每个导出函数的函数体都在这里运行，
//! 捕获后按配置终止进程或返回哨兵值。

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::config::{get_config, PanicPolicy};
use crate::BridgeError;

/// 运行一个导出函数的函数体；panic 时按全局配置处理
pub fn guard<R>(entry: &'static str, sentinel: R, body: impl FnOnce() -> R) -> R {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => value,
        // 只有真的发生 panic 才读取配置
        Err(payload) => contain(entry, payload, get_config().panic_policy, sentinel),
    }
}

/// 同 [`guard`]，但显式指定处理方式
pub fn guard_with<R>(
    policy: PanicPolicy,
    entry: &'static str,
    sentinel: R,
    body: impl FnOnce() -> R,
) -> R {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => value,
        Err(payload) => contain(entry, payload, policy, sentinel),
    }
}

fn contain<R>(
    entry: &'static str,
    payload: Box<dyn Any + Send>,
    policy: PanicPolicy,
    sentinel: R,
) -> R {
    let err = BridgeError::Panicked {
        entry,
        message: panic_message(payload.as_ref()),
    };
    log::error!("{}", err);

    match policy {
        PanicPolicy::Abort => {
            log::error!("panic 不能跨越 C 边界，终止进程");
            std::process::abort()
        }
        PanicPolicy::Sentinel => sentinel,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}
