//! 世界回调 C 接口：接触监听、区域查询、射线检测、碰撞过滤、销毁通知

use crate::bridge::contact_filter::ContactFilterCallbacks;
use crate::bridge::contact_listener::ContactListenerCallbacks;
use crate::bridge::destruction_listener::DestructionListenerCallbacks;
use crate::bridge::query_callback::QueryCallbackCallbacks;
use crate::bridge::ray_cast_callback::RayCastCallbackCallbacks;
use crate::bridge::{
    ContactFilterBridge, ContactFilterDescriptor, ContactListenerBridge,
    ContactListenerDescriptor, DestructionListenerBridge, DestructionListenerDescriptor,
    QueryCallbackBridge, QueryCallbackDescriptor, RayCastCallbackBridge,
    RayCastCallbackDescriptor,
};
use crate::engine::{
    B2Contact, B2ContactFilter, B2ContactImpulse, B2ContactListener, B2DestructionListener,
    B2Fixture, B2Joint, B2Manifold, B2ParticleBodyContact, B2ParticleContact, B2ParticleGroup,
    B2ParticleSystem, B2QueryCallback, B2RayCastCallback, ContactFilter, ContactListener,
    DestructionListener, QueryCallback, RayCastCallback, Vec2,
};

use super::{delete_bridge, forward, new_bridge, upcast_bridge, value_arg};

// 本文件所有函数的安全约定：
// - `_New` 的描述符必须为空或有效，描述符的状态句柄必须比适配器活得更久
// - `_Delete` 的句柄必须为空或来自对应的 `_New` 且尚未释放，引擎也不能再持有它
// - `b2*_` 入口的 `base` 必须为空或来自对应的 `_Upcast` 且尚未释放
// 引擎对象句柄（夹具、接触、粒子系统等）原样透传，不解引用。

// ============================================================================
// 接触监听
// ============================================================================

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn ContactListenerBridge_New(
    descriptor: *const ContactListenerDescriptor,
) -> *mut ContactListenerBridge {
    new_bridge("ContactListenerBridge_New", descriptor)
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn ContactListenerBridge_Delete(bridge: *mut ContactListenerBridge) {
    delete_bridge("ContactListenerBridge_Delete", bridge)
}

/// 转为基类句柄，只能传给 `b2ContactListener_*` 入口
///
/// 句柄没有 C++ 虚表，不能直接注册到 `b2World`；由引擎侧垫片保存并转发，
/// 见 [`crate::engine`] 模块说明。
#[no_mangle]
pub extern "C" fn ContactListenerBridge_Upcast(
    bridge: *mut ContactListenerBridge,
) -> *mut B2ContactListener {
    upcast_bridge("ContactListenerBridge_Upcast", bridge)
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactListener_BeginContact(
    base: *mut B2ContactListener,
    contact: *mut B2Contact,
) {
    forward::<ContactListenerCallbacks, _>("b2ContactListener_BeginContact", base, (), |bridge| {
        bridge.begin_contact(contact);
        Ok(())
    })
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactListener_EndContact(
    base: *mut B2ContactListener,
    contact: *mut B2Contact,
) {
    forward::<ContactListenerCallbacks, _>("b2ContactListener_EndContact", base, (), |bridge| {
        bridge.end_contact(contact);
        Ok(())
    })
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactListener_BeginParticleBodyContact(
    base: *mut B2ContactListener,
    particle_system: *mut B2ParticleSystem,
    contact: *mut B2ParticleBodyContact,
) {
    forward::<ContactListenerCallbacks, _>(
        "b2ContactListener_BeginParticleBodyContact",
        base,
        (),
        |bridge| {
            bridge.begin_particle_body_contact(particle_system, contact);
            Ok(())
        },
    )
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactListener_EndParticleBodyContact(
    base: *mut B2ContactListener,
    fixture: *mut B2Fixture,
    particle_system: *mut B2ParticleSystem,
    index: i32,
) {
    forward::<ContactListenerCallbacks, _>(
        "b2ContactListener_EndParticleBodyContact",
        base,
        (),
        |bridge| {
            bridge.end_particle_body_contact(fixture, particle_system, index);
            Ok(())
        },
    )
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactListener_BeginParticleContact(
    base: *mut B2ContactListener,
    particle_system: *mut B2ParticleSystem,
    contact: *mut B2ParticleContact,
) {
    forward::<ContactListenerCallbacks, _>(
        "b2ContactListener_BeginParticleContact",
        base,
        (),
        |bridge| {
            bridge.begin_particle_contact(particle_system, contact);
            Ok(())
        },
    )
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactListener_EndParticleContact(
    base: *mut B2ContactListener,
    particle_system: *mut B2ParticleSystem,
    index_a: i32,
    index_b: i32,
) {
    forward::<ContactListenerCallbacks, _>(
        "b2ContactListener_EndParticleContact",
        base,
        (),
        |bridge| {
            bridge.end_particle_contact(particle_system, index_a, index_b);
            Ok(())
        },
    )
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactListener_PreSolve(
    base: *mut B2ContactListener,
    contact: *mut B2Contact,
    old_manifold: *const B2Manifold,
) {
    forward::<ContactListenerCallbacks, _>("b2ContactListener_PreSolve", base, (), |bridge| {
        bridge.pre_solve(contact, old_manifold);
        Ok(())
    })
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactListener_PostSolve(
    base: *mut B2ContactListener,
    contact: *mut B2Contact,
    impulse: *const B2ContactImpulse,
) {
    forward::<ContactListenerCallbacks, _>("b2ContactListener_PostSolve", base, (), |bridge| {
        bridge.post_solve(contact, impulse);
        Ok(())
    })
}

// ============================================================================
// 区域查询
// ============================================================================

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn QueryCallbackBridge_New(
    descriptor: *const QueryCallbackDescriptor,
) -> *mut QueryCallbackBridge {
    new_bridge("QueryCallbackBridge_New", descriptor)
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn QueryCallbackBridge_Delete(bridge: *mut QueryCallbackBridge) {
    delete_bridge("QueryCallbackBridge_Delete", bridge)
}

/// 转为基类句柄，只能传给 `b2QueryCallback_*` 入口
///
/// 句柄没有 C++ 虚表，不能直接注册到 `b2World`；由引擎侧垫片保存并转发，
/// 见 [`crate::engine`] 模块说明。
#[no_mangle]
pub extern "C" fn QueryCallbackBridge_Upcast(bridge: *mut QueryCallbackBridge) -> *mut B2QueryCallback {
    upcast_bridge("QueryCallbackBridge_Upcast", bridge)
}

/// 报告一个夹具；返回 false 时引擎停止枚举。空句柄返回 false。
///
/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2QueryCallback_ReportFixture(
    base: *mut B2QueryCallback,
    fixture: *mut B2Fixture,
) -> bool {
    forward::<QueryCallbackCallbacks, _>("b2QueryCallback_ReportFixture", base, false, |bridge| {
        Ok(bridge.report_fixture(fixture))
    })
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2QueryCallback_ReportParticle(
    base: *mut B2QueryCallback,
    particle_system: *const B2ParticleSystem,
    index: i32,
) -> bool {
    forward::<QueryCallbackCallbacks, _>("b2QueryCallback_ReportParticle", base, false, |bridge| {
        Ok(bridge.report_particle(particle_system, index))
    })
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2QueryCallback_ShouldQueryParticleSystem(
    base: *mut B2QueryCallback,
    particle_system: *const B2ParticleSystem,
) -> bool {
    forward::<QueryCallbackCallbacks, _>(
        "b2QueryCallback_ShouldQueryParticleSystem",
        base,
        false,
        |bridge| Ok(bridge.should_query_particle_system(particle_system)),
    )
}

// ============================================================================
// 射线检测
// ============================================================================

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn RayCastCallbackBridge_New(
    descriptor: *const RayCastCallbackDescriptor,
) -> *mut RayCastCallbackBridge {
    new_bridge("RayCastCallbackBridge_New", descriptor)
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn RayCastCallbackBridge_Delete(bridge: *mut RayCastCallbackBridge) {
    delete_bridge("RayCastCallbackBridge_Delete", bridge)
}

/// 转为基类句柄，只能传给 `b2RayCastCallback_*` 入口
///
/// 句柄没有 C++ 虚表，不能直接注册到 `b2World`；由引擎侧垫片保存并转发，
/// 见 [`crate::engine`] 模块说明。
#[no_mangle]
pub extern "C" fn RayCastCallbackBridge_Upcast(
    bridge: *mut RayCastCallbackBridge,
) -> *mut B2RayCastCallback {
    upcast_bridge("RayCastCallbackBridge_Upcast", bridge)
}

/// 报告一次命中，返回值控制射线裁剪。空句柄返回 -1（忽略命中）。
///
/// # Safety
/// 见文件头说明；`point`、`normal` 不能为空。
#[no_mangle]
pub unsafe extern "C" fn b2RayCastCallback_ReportFixture(
    base: *mut B2RayCastCallback,
    fixture: *mut B2Fixture,
    point: *const Vec2,
    normal: *const Vec2,
    fraction: f32,
) -> f32 {
    forward::<RayCastCallbackCallbacks, _>("b2RayCastCallback_ReportFixture", base, -1.0, |bridge| {
        let point = value_arg(point, "point")?;
        let normal = value_arg(normal, "normal")?;
        Ok(bridge.report_fixture(fixture, point, normal, fraction))
    })
}

/// # Safety
/// 见文件头说明；`point`、`normal` 不能为空。
#[no_mangle]
pub unsafe extern "C" fn b2RayCastCallback_ReportParticle(
    base: *mut B2RayCastCallback,
    particle_system: *const B2ParticleSystem,
    index: i32,
    point: *const Vec2,
    normal: *const Vec2,
    fraction: f32,
) -> f32 {
    forward::<RayCastCallbackCallbacks, _>("b2RayCastCallback_ReportParticle", base, -1.0, |bridge| {
        let point = value_arg(point, "point")?;
        let normal = value_arg(normal, "normal")?;
        Ok(bridge.report_particle(particle_system, index, point, normal, fraction))
    })
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2RayCastCallback_ShouldQueryParticleSystem(
    base: *mut B2RayCastCallback,
    particle_system: *const B2ParticleSystem,
) -> bool {
    forward::<RayCastCallbackCallbacks, _>(
        "b2RayCastCallback_ShouldQueryParticleSystem",
        base,
        false,
        |bridge| Ok(bridge.should_query_particle_system(particle_system)),
    )
}

// ============================================================================
// 碰撞过滤
// ============================================================================

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn ContactFilterBridge_New(
    descriptor: *const ContactFilterDescriptor,
) -> *mut ContactFilterBridge {
    new_bridge("ContactFilterBridge_New", descriptor)
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn ContactFilterBridge_Delete(bridge: *mut ContactFilterBridge) {
    delete_bridge("ContactFilterBridge_Delete", bridge)
}

/// 转为基类句柄，只能传给 `b2ContactFilter_*` 入口
///
/// 句柄没有 C++ 虚表，不能直接注册到 `b2World`；由引擎侧垫片保存并转发，
/// 见 [`crate::engine`] 模块说明。
#[no_mangle]
pub extern "C" fn ContactFilterBridge_Upcast(bridge: *mut ContactFilterBridge) -> *mut B2ContactFilter {
    upcast_bridge("ContactFilterBridge_Upcast", bridge)
}

/// 空句柄返回 true（不过滤）
///
/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactFilter_ShouldCollide(
    base: *mut B2ContactFilter,
    fixture_a: *mut B2Fixture,
    fixture_b: *mut B2Fixture,
) -> bool {
    forward::<ContactFilterCallbacks, _>("b2ContactFilter_ShouldCollide", base, true, |bridge| {
        Ok(bridge.should_collide(fixture_a, fixture_b))
    })
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactFilter_ShouldCollideFixtureParticle(
    base: *mut B2ContactFilter,
    fixture: *mut B2Fixture,
    particle_system: *mut B2ParticleSystem,
    index: i32,
) -> bool {
    forward::<ContactFilterCallbacks, _>(
        "b2ContactFilter_ShouldCollideFixtureParticle",
        base,
        true,
        |bridge| Ok(bridge.should_collide_fixture_particle(fixture, particle_system, index)),
    )
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2ContactFilter_ShouldCollideParticles(
    base: *mut B2ContactFilter,
    particle_system: *mut B2ParticleSystem,
    index_a: i32,
    index_b: i32,
) -> bool {
    forward::<ContactFilterCallbacks, _>(
        "b2ContactFilter_ShouldCollideParticles",
        base,
        true,
        |bridge| Ok(bridge.should_collide_particles(particle_system, index_a, index_b)),
    )
}

// ============================================================================
// 销毁通知
// ============================================================================

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn DestructionListenerBridge_New(
    descriptor: *const DestructionListenerDescriptor,
) -> *mut DestructionListenerBridge {
    new_bridge("DestructionListenerBridge_New", descriptor)
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn DestructionListenerBridge_Delete(bridge: *mut DestructionListenerBridge) {
    delete_bridge("DestructionListenerBridge_Delete", bridge)
}

/// 转为基类句柄，只能传给 `b2DestructionListener_*` 入口
///
/// 句柄没有 C++ 虚表，不能直接注册到 `b2World`；由引擎侧垫片保存并转发，
/// 见 [`crate::engine`] 模块说明。
#[no_mangle]
pub extern "C" fn DestructionListenerBridge_Upcast(
    bridge: *mut DestructionListenerBridge,
) -> *mut B2DestructionListener {
    upcast_bridge("DestructionListenerBridge_Upcast", bridge)
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2DestructionListener_SayGoodbyeJoint(
    base: *mut B2DestructionListener,
    joint: *mut B2Joint,
) {
    forward::<DestructionListenerCallbacks, _>(
        "b2DestructionListener_SayGoodbyeJoint",
        base,
        (),
        |bridge| {
            bridge.say_goodbye_joint(joint);
            Ok(())
        },
    )
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2DestructionListener_SayGoodbyeFixture(
    base: *mut B2DestructionListener,
    fixture: *mut B2Fixture,
) {
    forward::<DestructionListenerCallbacks, _>(
        "b2DestructionListener_SayGoodbyeFixture",
        base,
        (),
        |bridge| {
            bridge.say_goodbye_fixture(fixture);
            Ok(())
        },
    )
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2DestructionListener_SayGoodbyeParticleGroup(
    base: *mut B2DestructionListener,
    group: *mut B2ParticleGroup,
) {
    forward::<DestructionListenerCallbacks, _>(
        "b2DestructionListener_SayGoodbyeParticleGroup",
        base,
        (),
        |bridge| {
            bridge.say_goodbye_particle_group(group);
            Ok(())
        },
    )
}

/// # Safety
/// 见文件头说明。
#[no_mangle]
pub unsafe extern "C" fn b2DestructionListener_SayGoodbyeParticle(
    base: *mut B2DestructionListener,
    particle_system: *mut B2ParticleSystem,
    index: i32,
) {
    forward::<DestructionListenerCallbacks, _>(
        "b2DestructionListener_SayGoodbyeParticle",
        base,
        (),
        |bridge| {
            bridge.say_goodbye_particle(particle_system, index);
            Ok(())
        },
    )
}
