//! 不透明引擎对象
//!
//! 引擎对象跨边界时只是一个地址，不附带任何运行时类型信息。
//! 桥接层从不构造、也从不解引用这些类型；传入已销毁对象或动态类型不符的地址属于未定义行为，
//! 边界上不做检测。

use std::marker::{PhantomData, PhantomPinned};

macro_rules! opaque_engine_type {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _data: [u8; 0],
                _marker: PhantomData<(*mut u8, PhantomPinned)>,
            }
        )*
    };
}

// ============================================================================
// 引擎拥有的对象
// ============================================================================

opaque_engine_type! {
    /// 接触（b2Contact），由引擎的接触管理器持有
    B2Contact;
    /// 夹具（b2Fixture），随所属刚体一起销毁
    B2Fixture;
    /// 关节（b2Joint）
    B2Joint;
    /// 粒子系统（b2ParticleSystem）
    B2ParticleSystem;
    /// 粒子组（b2ParticleGroup）
    B2ParticleGroup;
    /// 粒子与夹具的接触（b2ParticleBodyContact）
    B2ParticleBodyContact;
    /// 粒子之间的接触（b2ParticleContact）
    B2ParticleContact;
    /// 接触流形（b2Manifold），PreSolve 时传入旧流形
    B2Manifold;
    /// 接触冲量（b2ContactImpulse），PostSolve 时传入
    B2ContactImpulse;
}

// ============================================================================
// 扩展点基类
// ============================================================================
//
// 适配器 Upcast 后得到的就是这些基类指针，引擎注册接口只认它们。

opaque_engine_type! {
    /// b2Draw 基类
    B2Draw;
    /// b2ContactListener 基类
    B2ContactListener;
    /// b2QueryCallback 基类
    B2QueryCallback;
    /// b2RayCastCallback 基类
    B2RayCastCallback;
    /// b2ContactFilter 基类
    B2ContactFilter;
    /// b2DestructionListener 基类
    B2DestructionListener;
}
