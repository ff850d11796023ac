//! 世界回调扩展点
//!
//! 与引擎头文件中的虚函数一一对应。带默认实现的方法对应引擎里本身就有函数体的虚函数，
//! 默认值与引擎一致；没有默认实现的是纯虚函数。

use super::handles::{
    B2Contact, B2ContactImpulse, B2Fixture, B2Joint, B2Manifold, B2ParticleBodyContact,
    B2ParticleContact, B2ParticleGroup, B2ParticleSystem,
};
use super::math::Vec2;

/// 接触监听（b2ContactListener）
///
/// 回调发生在 `Step` 内部，此时世界处于锁定状态，不能创建或销毁对象。
pub trait ContactListener {
    /// 两个夹具开始接触
    fn begin_contact(&mut self, _contact: *mut B2Contact) {}

    /// 两个夹具结束接触
    fn end_contact(&mut self, _contact: *mut B2Contact) {}

    /// 粒子开始接触夹具（需要粒子设置 b2_fixtureContactFilterParticle）
    fn begin_particle_body_contact(
        &mut self,
        _particle_system: *mut B2ParticleSystem,
        _contact: *mut B2ParticleBodyContact,
    ) {
    }

    /// 粒子结束接触夹具
    fn end_particle_body_contact(
        &mut self,
        _fixture: *mut B2Fixture,
        _particle_system: *mut B2ParticleSystem,
        _index: i32,
    ) {
    }

    /// 两个粒子开始接触（需要任一粒子设置 b2_particleContactFilterParticle）
    fn begin_particle_contact(
        &mut self,
        _particle_system: *mut B2ParticleSystem,
        _contact: *mut B2ParticleContact,
    ) {
    }

    /// 两个粒子结束接触
    fn end_particle_contact(
        &mut self,
        _particle_system: *mut B2ParticleSystem,
        _index_a: i32,
        _index_b: i32,
    ) {
    }

    /// 接触进入求解器之前调用，可以检查或修改流形
    fn pre_solve(&mut self, _contact: *mut B2Contact, _old_manifold: *const B2Manifold) {}

    /// 求解完成后调用，用于读取冲量
    fn post_solve(&mut self, _contact: *mut B2Contact, _impulse: *const B2ContactImpulse) {}
}

/// AABB 查询回调（b2QueryCallback）
pub trait QueryCallback {
    /// 查询到一个夹具；返回 false 终止查询
    fn report_fixture(&mut self, fixture: *mut B2Fixture) -> bool;

    /// 查询到一个粒子；返回 false 终止查询
    fn report_particle(&mut self, _particle_system: *const B2ParticleSystem, _index: i32) -> bool {
        false
    }

    /// 是否把整个粒子系统纳入 b2World::QueryAABB
    ///
    /// 这里是引擎基类的默认值；桥接适配器在回调缺失时返回 false，不主动查询粒子。
    fn should_query_particle_system(&mut self, _particle_system: *const B2ParticleSystem) -> bool {
        true
    }
}

/// 射线检测回调（b2RayCastCallback）
///
/// 返回值控制射线继续的方式：-1 忽略本次命中并继续，0 终止，
/// fraction 把射线裁剪到命中点，1 不裁剪继续。
pub trait RayCastCallback {
    fn report_fixture(
        &mut self,
        fixture: *mut B2Fixture,
        point: &Vec2,
        normal: &Vec2,
        fraction: f32,
    ) -> f32;

    /// 引擎基类默认返回 0（终止）；桥接适配器在回调缺失时返回 -1，忽略命中继续
    fn report_particle(
        &mut self,
        _particle_system: *const B2ParticleSystem,
        _index: i32,
        _point: &Vec2,
        _normal: &Vec2,
        _fraction: f32,
    ) -> f32 {
        0.0
    }

    /// 同 [`QueryCallback::should_query_particle_system`]，桥接适配器缺省为 false
    fn should_query_particle_system(&mut self, _particle_system: *const B2ParticleSystem) -> bool {
        true
    }
}

/// 碰撞过滤（b2ContactFilter）
///
/// 引擎自带的默认实现依赖夹具的过滤数据，桥接层看不到，所以这里全部是纯虚函数。
pub trait ContactFilter {
    /// 两个夹具之间是否产生接触
    fn should_collide(&mut self, fixture_a: *mut B2Fixture, fixture_b: *mut B2Fixture) -> bool;

    /// 夹具与粒子之间是否产生接触
    fn should_collide_fixture_particle(
        &mut self,
        fixture: *mut B2Fixture,
        particle_system: *mut B2ParticleSystem,
        index: i32,
    ) -> bool;

    /// 两个粒子之间是否产生接触
    fn should_collide_particles(
        &mut self,
        particle_system: *mut B2ParticleSystem,
        index_a: i32,
        index_b: i32,
    ) -> bool;
}

/// 销毁通知（b2DestructionListener）
///
/// 父对象销毁时引擎隐式销毁的子对象会通过这里通知，调用方据此清理自己持有的指针。
pub trait DestructionListener {
    fn say_goodbye_joint(&mut self, joint: *mut B2Joint);

    fn say_goodbye_fixture(&mut self, fixture: *mut B2Fixture);

    fn say_goodbye_particle_group(&mut self, _group: *mut B2ParticleGroup) {}

    fn say_goodbye_particle(&mut self, _particle_system: *mut B2ParticleSystem, _index: i32) {}
}
