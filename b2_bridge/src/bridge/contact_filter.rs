//! 碰撞过滤适配器

use std::ffi::c_void;

use super::adapter::{Bridge, CallbackTable, ExtensionKind};
use crate::engine::{B2ContactFilter, B2Fixture, B2ParticleSystem, ContactFilter};

pub type ShouldCollideFn =
    unsafe extern "C" fn(state: *mut c_void, fixture_a: *mut B2Fixture, fixture_b: *mut B2Fixture) -> bool;
pub type ShouldCollideFixtureParticleFn = unsafe extern "C" fn(
    state: *mut c_void,
    fixture: *mut B2Fixture,
    particle_system: *mut B2ParticleSystem,
    index: i32,
) -> bool;
pub type ShouldCollideParticlesFn = unsafe extern "C" fn(
    state: *mut c_void,
    particle_system: *mut B2ParticleSystem,
    index_a: i32,
    index_b: i32,
) -> bool;

/// 碰撞过滤回调表；空槽位一律放行
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFilterCallbacks {
    pub should_collide: Option<ShouldCollideFn>,
    pub should_collide_fixture_particle: Option<ShouldCollideFixtureParticleFn>,
    pub should_collide_particles: Option<ShouldCollideParticlesFn>,
}

impl CallbackTable for ContactFilterCallbacks {
    const KIND: ExtensionKind = ExtensionKind::ContactFilter;
    type Base = ();
    type Interface = B2ContactFilter;

    fn missing_required(&self) -> Vec<&'static str> {
        if self.should_collide.is_none() {
            vec!["should_collide"]
        } else {
            Vec::new()
        }
    }
}

impl ContactFilter for Bridge<ContactFilterCallbacks> {
    fn should_collide(&mut self, fixture_a: *mut B2Fixture, fixture_b: *mut B2Fixture) -> bool {
        self.dispatch("should_collide", self.callbacks().should_collide, true, |f, state| unsafe {
            f(state, fixture_a, fixture_b)
        })
    }

    fn should_collide_fixture_particle(
        &mut self,
        fixture: *mut B2Fixture,
        particle_system: *mut B2ParticleSystem,
        index: i32,
    ) -> bool {
        self.dispatch(
            "should_collide_fixture_particle",
            self.callbacks().should_collide_fixture_particle,
            true,
            |f, state| unsafe { f(state, fixture, particle_system, index) },
        )
    }

    fn should_collide_particles(
        &mut self,
        particle_system: *mut B2ParticleSystem,
        index_a: i32,
        index_b: i32,
    ) -> bool {
        self.dispatch(
            "should_collide_particles",
            self.callbacks().should_collide_particles,
            true,
            |f, state| unsafe { f(state, particle_system, index_a, index_b) },
        )
    }
}
