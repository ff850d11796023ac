//! C 接口
//!
//! 扁平的 `#[no_mangle] extern "C"` 函数，命名为 `<类型>_<操作>`：
//! - `<Bridge>_New/Delete/Upcast`：适配器生命周期
//! - `b2<Base>_<Op>`：引擎侧通过基类指针回调适配器的入口
//! - `b2Bridge_*`：库级别的版本、日志和配置
//!
//! 每个函数体都在 [`guard`] 里运行，panic 不会穿过边界。
//! 指针参数的有效性由调用方保证，这里只检查空指针。

#![allow(non_snake_case)]

mod draw;
mod world_callbacks;

pub use draw::*;
pub use world_callbacks::*;

use std::ffi::c_char;
use std::ptr;

use crate::bridge::lifecycle::{create, destroy};
use crate::bridge::{guard, live_adapters, Bridge, CallbackTable, ExtensionKind, TraitDescriptor};
use crate::config::{reset_config, update_config, PanicPolicy};
use crate::{BridgeError, Result, BRIDGE_ABI_VERSION};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

// ============================================================================
// 内部工具
// ============================================================================

/// 指针 + 数量 转为切片；空指针或非正数量都视为空集合
///
/// # Safety
/// 非空时 `ptr` 必须指向至少 `count` 个有效元素，且在返回的切片使用期间不被修改。
pub(crate) unsafe fn raw_slice<'a, E>(ptr: *const E, count: i32) -> &'a [E] {
    if ptr.is_null() || count <= 0 {
        &[]
    } else {
        std::slice::from_raw_parts(ptr, count as usize)
    }
}

/// 以常量指针传入的值参数
///
/// # Safety
/// 非空时 `ptr` 必须指向有效的 `V`。
pub(crate) unsafe fn value_arg<'a, V>(ptr: *const V, name: &'static str) -> Result<&'a V> {
    ptr.as_ref().ok_or(BridgeError::NullArgument(name))
}

/// `<Bridge>_New` 的公共实现
///
/// # Safety
/// `descriptor` 必须为空或指向有效的描述符。
pub(crate) unsafe fn new_bridge<T: CallbackTable>(
    entry: &'static str,
    descriptor: *const TraitDescriptor<T>,
) -> *mut Bridge<T> {
    guard(entry, ptr::null_mut(), || match descriptor.as_ref() {
        Some(descriptor) => create(descriptor).as_ptr(),
        None => {
            log::error!("{}", BridgeError::NullDescriptor(T::KIND.name()));
            ptr::null_mut()
        }
    })
}

/// `<Bridge>_Delete` 的公共实现
///
/// # Safety
/// 见 [`destroy`]。
pub(crate) unsafe fn delete_bridge<T: CallbackTable>(entry: &'static str, bridge: *mut Bridge<T>) {
    guard(entry, (), || destroy(bridge))
}

/// `<Bridge>_Upcast` 的公共实现，纯指针转换
pub(crate) fn upcast_bridge<T: CallbackTable>(
    entry: &'static str,
    bridge: *mut Bridge<T>,
) -> *mut T::Interface {
    guard(entry, ptr::null_mut(), || Bridge::upcast(bridge))
}

/// 通过基类指针转发一次调用
///
/// 基类指针为空或参数检查失败时记录错误并返回 `default`。
///
/// # Safety
/// `base` 必须为空，或来自同一种适配器的 `_Upcast` 且尚未释放。
pub(crate) unsafe fn forward<T: CallbackTable, R: Copy>(
    entry: &'static str,
    base: *mut T::Interface,
    default: R,
    body: impl FnOnce(&mut Bridge<T>) -> Result<R>,
) -> R {
    guard(entry, default, || {
        Bridge::<T>::from_interface(base)
            .and_then(body)
            .unwrap_or_else(|err| {
                log::error!("{}: {}", entry, err);
                default
            })
    })
}

// ============================================================================
// 库级别函数
// ============================================================================

/// 回调表 ABI 版本，调用方应在创建适配器前比对
#[no_mangle]
pub extern "C" fn b2Bridge_AbiVersion() -> u32 {
    BRIDGE_ABI_VERSION
}

/// 库版本号（静态字符串，不要释放）
#[no_mangle]
pub extern "C" fn b2Bridge_Version() -> *const c_char {
    VERSION.as_ptr().cast()
}

/// 安装 env_logger，日志级别由 RUST_LOG 控制
///
/// 重复调用或宿主已经安装了别的 logger 时什么都不做。
#[no_mangle]
pub extern "C" fn b2Bridge_InitLogging() {
    guard("b2Bridge_InitLogging", (), || {
        if env_logger::try_init().is_ok() {
            log::info!("b2_bridge {} 日志已初始化", env!("CARGO_PKG_VERSION"));
        }
    })
}

/// 开关转发 trace 日志，只影响之后创建的适配器
#[no_mangle]
pub extern "C" fn b2Bridge_SetTraceDispatch(enabled: bool) {
    guard("b2Bridge_SetTraceDispatch", (), || {
        update_config(|config| config.trace_dispatch = enabled)
    })
}

/// 设置 panic 处理方式：0 = 终止进程，1 = 返回哨兵值
///
/// 未知取值返回 false，配置不变。
#[no_mangle]
pub extern "C" fn b2Bridge_SetPanicPolicy(policy: u32) -> bool {
    guard("b2Bridge_SetPanicPolicy", false, || match PanicPolicy::from_raw(policy) {
        Ok(policy) => {
            update_config(|config| config.panic_policy = policy);
            true
        }
        Err(err) => {
            log::error!("{}", err);
            false
        }
    })
}

/// 恢复默认配置
#[no_mangle]
pub extern "C" fn b2Bridge_ResetConfig() {
    guard("b2Bridge_ResetConfig", (), reset_config)
}

/// 当前线程上某种适配器的存活数量；未知种类返回 0
#[no_mangle]
pub extern "C" fn b2Bridge_LiveAdapterCount(kind: u32) -> u32 {
    guard("b2Bridge_LiveAdapterCount", 0, || match ExtensionKind::from_raw(kind) {
        Ok(kind) => live_adapters(kind) as u32,
        Err(err) => {
            log::error!("{}", err);
            0
        }
    })
}
