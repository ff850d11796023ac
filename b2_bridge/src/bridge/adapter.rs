//! 通用桥接适配器
//!
//! 每个扩展点只需要一张回调表和一份基类接口实现，构造、状态保存和转发逻辑全部在这里共用。

use std::ffi::c_void;

use crate::config::get_config;
use crate::{BridgeError, Result};

/// 扩展点种类
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionKind {
    Draw = 0,
    ContactListener = 1,
    QueryCallback = 2,
    RayCastCallback = 3,
    ContactFilter = 4,
    DestructionListener = 5,
}

impl ExtensionKind {
    pub const COUNT: usize = 6;

    pub const ALL: [ExtensionKind; Self::COUNT] = [
        ExtensionKind::Draw,
        ExtensionKind::ContactListener,
        ExtensionKind::QueryCallback,
        ExtensionKind::RayCastCallback,
        ExtensionKind::ContactFilter,
        ExtensionKind::DestructionListener,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExtensionKind::Draw => "Draw",
            ExtensionKind::ContactListener => "ContactListener",
            ExtensionKind::QueryCallback => "QueryCallback",
            ExtensionKind::RayCastCallback => "RayCastCallback",
            ExtensionKind::ContactFilter => "ContactFilter",
            ExtensionKind::DestructionListener => "DestructionListener",
        }
    }

    pub fn from_raw(raw: u32) -> Result<Self> {
        Self::ALL
            .get(raw as usize)
            .copied()
            .ok_or(BridgeError::UnknownExtensionKind(raw))
    }
}

/// 一个扩展点的回调表
///
/// 实现者是 `#[repr(C)]` 的函数指针槽位结构体，每个槽位都是
/// `Option<unsafe extern "C" fn(state, ...)>`，空槽位在转发时走固定默认值。
pub trait CallbackTable: Copy + Default + 'static {
    const KIND: ExtensionKind;

    /// 基类自身携带的数据（调试绘制是标志位，其余扩展点为空）
    type Base: Default;

    /// Upcast 之后的基类指针类型
    type Interface;

    /// 缺失的必需槽位名称
    fn missing_required(&self) -> Vec<&'static str>;
}

/// 回调描述符：调用方的不透明状态句柄 + 回调表
///
/// 适配器只保存 `state` 的非拥有引用，`state` 必须比所有引用它的适配器活得更久，
/// 桥接层不检查这一点。
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct TraitDescriptor<T> {
    pub state: *mut c_void,
    pub callbacks: T,
}

impl<T: CallbackTable> TraitDescriptor<T> {
    pub fn new(state: *mut c_void, callbacks: T) -> Self {
        Self { state, callbacks }
    }
}

/// 桥接适配器
///
/// 实现某个扩展点的基类接口，把每个虚函数调用转发到描述符里对应的回调。
/// 本身不拥有任何东西，只持有一个指向调用方状态的非拥有指针。
pub struct Bridge<T: CallbackTable> {
    base: T::Base,
    state: *mut c_void,
    callbacks: T,
    trace: bool,
}

impl<T: CallbackTable> Bridge<T> {
    /// 从描述符构造（复制回调表）
    pub fn new(descriptor: &TraitDescriptor<T>) -> Self {
        let config = get_config();
        if config.warn_missing_required {
            for slot in descriptor.callbacks.missing_required() {
                log::warn!(
                    "[{}] 描述符缺少必需回调 `{}`（state {:p}），调用时按空操作处理",
                    T::KIND.name(),
                    slot,
                    descriptor.state
                );
            }
        }

        Self {
            base: T::Base::default(),
            state: descriptor.state,
            callbacks: descriptor.callbacks,
            trace: config.trace_dispatch,
        }
    }

    /// 调用方状态句柄
    pub fn state(&self) -> *mut c_void {
        self.state
    }

    pub fn callbacks(&self) -> &T {
        &self.callbacks
    }

    pub(crate) fn base(&self) -> &T::Base {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut T::Base {
        &mut self.base
    }

    /// 转为基类句柄，纯指针重解释，不做检查
    ///
    /// 结果不是 C++ 对象，只能交还给 `b2<Base>_*` 入口（经 [`Bridge::from_interface`] 还原）。
    pub fn upcast(this: *mut Self) -> *mut T::Interface {
        this.cast()
    }

    /// 从基类指针还原适配器
    ///
    /// # Safety
    /// `base` 必须为空，或者来自同一种适配器的 `upcast` 且尚未销毁。
    /// 动态类型不符时是未定义行为。
    pub unsafe fn from_interface<'a>(base: *mut T::Interface) -> Result<&'a mut Self> {
        base.cast::<Self>()
            .as_mut()
            .ok_or(BridgeError::NullHandle(T::KIND.name()))
    }

    /// 转发一次调用：槽位存在时调用回调并原样返回结果，否则返回固定默认值
    #[inline]
    pub(crate) fn dispatch<F: Copy, R>(
        &self,
        op: &'static str,
        slot: Option<F>,
        default: R,
        call: impl FnOnce(F, *mut c_void) -> R,
    ) -> R {
        match slot {
            Some(f) => {
                if self.trace {
                    log::trace!("[{}] {} -> {:p}", T::KIND.name(), op, self.state);
                }
                call(f, self.state)
            }
            None => default,
        }
    }
}

/// 集合跨边界时的指针：空集合统一传空指针
pub(crate) fn slice_ptr<E>(items: &[E]) -> *const E {
    if items.is_empty() {
        std::ptr::null()
    } else {
        items.as_ptr()
    }
}
