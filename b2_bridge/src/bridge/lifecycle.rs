//! 适配器生命周期
//!
//! 跨边界的堆对象没有任何自动回收：每种适配器只有一个构造函数和一个析构函数，
//! 析构恰好一次。重复析构是未定义行为，这里不做检测。

use std::cell::Cell;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use super::adapter::{Bridge, CallbackTable, ExtensionKind, TraitDescriptor};
use crate::config::get_config;

// 存活适配器计数，供测试和调用方检查泄漏。
// 调用模型是单线程的，按线程计数即可。
thread_local! {
    static LIVE_ADAPTERS: [Cell<usize>; ExtensionKind::COUNT] = Default::default();
}

fn adjust_live(kind: ExtensionKind, created: bool) {
    LIVE_ADAPTERS.with(|counters| {
        let counter = &counters[kind as usize];
        if created {
            counter.set(counter.get() + 1);
        } else {
            counter.set(counter.get().saturating_sub(1));
        }
    });
}

/// 当前线程上某种适配器的存活数量
pub fn live_adapters(kind: ExtensionKind) -> usize {
    LIVE_ADAPTERS.with(|counters| counters[kind as usize].get())
}

/// 当前线程上所有适配器的存活数量
pub fn live_adapters_total() -> usize {
    ExtensionKind::ALL.iter().map(|&kind| live_adapters(kind)).sum()
}

/// 在堆上创建适配器，所有权交给调用方
///
/// 分配失败时由全局分配器终止进程，不存在部分构造的情况。
pub fn create<T: CallbackTable>(descriptor: &TraitDescriptor<T>) -> NonNull<Bridge<T>> {
    let bridge = NonNull::from(Box::leak(Box::new(Bridge::new(descriptor))));
    adjust_live(T::KIND, true);

    if get_config().log_lifecycle {
        log::debug!(
            "[{}] 创建适配器 {:p} (state={:p})",
            T::KIND.name(),
            bridge.as_ptr(),
            descriptor.state
        );
    }
    bridge
}

/// 释放 `create` 创建的适配器；空指针不做任何事
///
/// # Safety
/// `bridge` 必须为空，或者来自 `create` 且尚未释放。
/// 引擎仍持有该地址时释放，之后引擎再调用就是悬垂指针，由调用方负责避免。
pub unsafe fn destroy<T: CallbackTable>(bridge: *mut Bridge<T>) {
    if bridge.is_null() {
        return;
    }

    if get_config().log_lifecycle {
        log::debug!("[{}] 销毁适配器 {:p}", T::KIND.name(), bridge);
    }
    drop(Box::from_raw(bridge));
    adjust_live(T::KIND, false);
}

/// Rust 侧调用方使用的适配器所有者，离开作用域时析构
///
/// 交给引擎侧垫片之后，必须先从引擎注销垫片（或确保引擎不再回调）再丢弃。
pub struct OwnedBridge<T: CallbackTable> {
    ptr: NonNull<Bridge<T>>,
}

impl<T: CallbackTable> OwnedBridge<T> {
    pub fn new(descriptor: &TraitDescriptor<T>) -> Self {
        Self {
            ptr: create(descriptor),
        }
    }

    pub fn as_ptr(&self) -> *mut Bridge<T> {
        self.ptr.as_ptr()
    }

    /// 基类句柄，交给引擎侧垫片保存，只能用于 `b2<Base>_*` 入口
    pub fn upcast(&self) -> *mut T::Interface {
        Bridge::upcast(self.ptr.as_ptr())
    }

    /// 交出所有权，之后需要通过 C 接口的 `_Delete` 释放
    pub fn into_raw(self) -> *mut Bridge<T> {
        let ptr = self.ptr.as_ptr();
        std::mem::forget(self);
        ptr
    }
}

impl<T: CallbackTable> Deref for OwnedBridge<T> {
    type Target = Bridge<T>;

    fn deref(&self) -> &Bridge<T> {
        // 指针来自 create，生命周期与 self 相同
        unsafe { self.ptr.as_ref() }
    }
}

impl<T: CallbackTable> DerefMut for OwnedBridge<T> {
    fn deref_mut(&mut self) -> &mut Bridge<T> {
        unsafe { self.ptr.as_mut() }
    }
}

impl<T: CallbackTable> Drop for OwnedBridge<T> {
    fn drop(&mut self) {
        unsafe { destroy(self.ptr.as_ptr()) }
    }
}
