//! 射线检测适配器
//!
//! 回调返回值控制射线裁剪：-1 忽略本次命中，0 终止，`fraction` 裁剪到命中点，1 不裁剪继续。

use std::ffi::c_void;

use super::adapter::{Bridge, CallbackTable, ExtensionKind};
use super::query_callback::ShouldQueryParticleSystemFn;
use crate::engine::{B2Fixture, B2ParticleSystem, B2RayCastCallback, RayCastCallback, Vec2};

pub type RayCastReportFixtureFn = unsafe extern "C" fn(
    state: *mut c_void,
    fixture: *mut B2Fixture,
    point: *const Vec2,
    normal: *const Vec2,
    fraction: f32,
) -> f32;
pub type RayCastReportParticleFn = unsafe extern "C" fn(
    state: *mut c_void,
    particle_system: *const B2ParticleSystem,
    index: i32,
    point: *const Vec2,
    normal: *const Vec2,
    fraction: f32,
) -> f32;

/// 没有回调时的返回值：忽略本次命中，射线继续
const IGNORE_HIT: f32 = -1.0;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct RayCastCallbackCallbacks {
    pub report_fixture: Option<RayCastReportFixtureFn>,
    pub report_particle: Option<RayCastReportParticleFn>,
    pub should_query_particle_system: Option<ShouldQueryParticleSystemFn>,
}

impl CallbackTable for RayCastCallbackCallbacks {
    const KIND: ExtensionKind = ExtensionKind::RayCastCallback;
    type Base = ();
    type Interface = B2RayCastCallback;

    fn missing_required(&self) -> Vec<&'static str> {
        if self.report_fixture.is_none() {
            vec!["report_fixture"]
        } else {
            Vec::new()
        }
    }
}

impl RayCastCallback for Bridge<RayCastCallbackCallbacks> {
    fn report_fixture(
        &mut self,
        fixture: *mut B2Fixture,
        point: &Vec2,
        normal: &Vec2,
        fraction: f32,
    ) -> f32 {
        self.dispatch(
            "report_fixture",
            self.callbacks().report_fixture,
            IGNORE_HIT,
            |f, state| unsafe { f(state, fixture, point, normal, fraction) },
        )
    }

    fn report_particle(
        &mut self,
        particle_system: *const B2ParticleSystem,
        index: i32,
        point: &Vec2,
        normal: &Vec2,
        fraction: f32,
    ) -> f32 {
        self.dispatch(
            "report_particle",
            self.callbacks().report_particle,
            IGNORE_HIT,
            |f, state| unsafe { f(state, particle_system, index, point, normal, fraction) },
        )
    }

    fn should_query_particle_system(&mut self, particle_system: *const B2ParticleSystem) -> bool {
        self.dispatch(
            "should_query_particle_system",
            self.callbacks().should_query_particle_system,
            false,
            |f, state| unsafe { f(state, particle_system) },
        )
    }
}
