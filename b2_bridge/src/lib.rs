//! b2_bridge - LiquidFun/Box2D 扩展点的 C 回调桥接层
//!
//! 引擎通过 C++ 虚函数提供扩展点（调试绘制、接触监听、区域查询等），
//! 外部调用方既不能继承这些基类，也不能直接链接它们的虚表。本库提供：
//! - 不透明句柄模型与共享值类型
//! - 回调描述符（调用方状态句柄 + 回调表）
//! - 通用桥接适配器，把引擎的每次虚函数调用转发到回调表
//! - 调试绘制标志位协商
//! - 显式的构造/析构 C 接口

pub mod bridge;
pub mod capi;
pub mod config;
pub mod engine;

pub use bridge::{
    Bridge, CallbackTable, ContactFilterBridge, ContactFilterCallbacks, ContactFilterDescriptor,
    ContactListenerBridge, ContactListenerCallbacks, ContactListenerDescriptor,
    DestructionListenerBridge, DestructionListenerCallbacks, DestructionListenerDescriptor,
    DrawBridge, DrawCallbacks, DrawDescriptor, ExtensionKind, OwnedBridge, QueryCallbackBridge,
    QueryCallbackCallbacks, QueryCallbackDescriptor, RayCastCallbackBridge,
    RayCastCallbackCallbacks, RayCastCallbackDescriptor, TraitDescriptor,
};
pub use config::{get_config, reset_config, set_config, BridgeConfig, PanicPolicy};
pub use engine::{
    Color, ContactFilter, ContactListener, DestructionListener, Draw, DrawFlags, ParticleColor,
    QueryCallback, RayCastCallback, Rot, Transform, Vec2,
};

use thiserror::Error;

/// 回调表的 ABI 版本，回调表布局变化时递增
pub const BRIDGE_ABI_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("null descriptor passed to {0} constructor")]
    NullDescriptor(&'static str),

    #[error("null handle passed to {0}")]
    NullHandle(&'static str),

    #[error("null `{0}` argument")]
    NullArgument(&'static str),

    #[error("panic in {entry}: {message}")]
    Panicked { entry: &'static str, message: String },

    #[error("unknown panic policy: {0}")]
    UnknownPanicPolicy(u32),

    #[error("unknown extension kind: {0}")]
    UnknownExtensionKind(u32),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
