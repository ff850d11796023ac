//! 区域查询适配器

use std::ffi::c_void;

use super::adapter::{Bridge, CallbackTable, ExtensionKind};
use crate::engine::{B2Fixture, B2ParticleSystem, B2QueryCallback, QueryCallback};

/// 返回 false 时引擎停止枚举
pub type QueryReportFixtureFn = unsafe extern "C" fn(state: *mut c_void, fixture: *mut B2Fixture) -> bool;
pub type QueryReportParticleFn = unsafe extern "C" fn(
    state: *mut c_void,
    particle_system: *const B2ParticleSystem,
    index: i32,
) -> bool;
pub type ShouldQueryParticleSystemFn =
    unsafe extern "C" fn(state: *mut c_void, particle_system: *const B2ParticleSystem) -> bool;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryCallbackCallbacks {
    pub report_fixture: Option<QueryReportFixtureFn>,
    pub report_particle: Option<QueryReportParticleFn>,
    pub should_query_particle_system: Option<ShouldQueryParticleSystemFn>,
}

impl CallbackTable for QueryCallbackCallbacks {
    const KIND: ExtensionKind = ExtensionKind::QueryCallback;
    type Base = ();
    type Interface = B2QueryCallback;

    fn missing_required(&self) -> Vec<&'static str> {
        if self.report_fixture.is_none() {
            vec!["report_fixture"]
        } else {
            Vec::new()
        }
    }
}

impl QueryCallback for Bridge<QueryCallbackCallbacks> {
    fn report_fixture(&mut self, fixture: *mut B2Fixture) -> bool {
        // 没有回调时继续枚举，结果无人观察
        self.dispatch("report_fixture", self.callbacks().report_fixture, true, |f, state| unsafe {
            f(state, fixture)
        })
    }

    fn report_particle(&mut self, particle_system: *const B2ParticleSystem, index: i32) -> bool {
        self.dispatch(
            "report_particle",
            self.callbacks().report_particle,
            false,
            |f, state| unsafe { f(state, particle_system, index) },
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
