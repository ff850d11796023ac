//! 隐式销毁通知适配器
//!
//! 引擎在销毁物体时连带销毁关节、夹具和粒子，这里把通知转给调用方，
//! 让它清理自己持有的句柄。

use std::ffi::c_void;

use super::adapter::{Bridge, CallbackTable, ExtensionKind};
use crate::engine::{
    B2DestructionListener, B2Fixture, B2Joint, B2ParticleGroup, B2ParticleSystem,
    DestructionListener,
};

pub type SayGoodbyeJointFn = unsafe extern "C" fn(state: *mut c_void, joint: *mut B2Joint);
pub type SayGoodbyeFixtureFn = unsafe extern "C" fn(state: *mut c_void, fixture: *mut B2Fixture);
pub type SayGoodbyeParticleGroupFn =
    unsafe extern "C" fn(state: *mut c_void, group: *mut B2ParticleGroup);
pub type SayGoodbyeParticleFn =
    unsafe extern "C" fn(state: *mut c_void, particle_system: *mut B2ParticleSystem, index: i32);

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct DestructionListenerCallbacks {
    pub say_goodbye_joint: Option<SayGoodbyeJointFn>,
    pub say_goodbye_fixture: Option<SayGoodbyeFixtureFn>,
    pub say_goodbye_particle_group: Option<SayGoodbyeParticleGroupFn>,
    pub say_goodbye_particle: Option<SayGoodbyeParticleFn>,
}

impl CallbackTable for DestructionListenerCallbacks {
    const KIND: ExtensionKind = ExtensionKind::DestructionListener;
    type Base = ();
    type Interface = B2DestructionListener;

    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.say_goodbye_joint.is_none() {
            missing.push("say_goodbye_joint");
        }
        if self.say_goodbye_fixture.is_none() {
            missing.push("say_goodbye_fixture");
        }
        missing
    }
}

impl DestructionListener for Bridge<DestructionListenerCallbacks> {
    fn say_goodbye_joint(&mut self, joint: *mut B2Joint) {
        self.dispatch("say_goodbye_joint", self.callbacks().say_goodbye_joint, (), |f, state| unsafe {
            f(state, joint)
        })
    }

    fn say_goodbye_fixture(&mut self, fixture: *mut B2Fixture) {
        self.dispatch(
            "say_goodbye_fixture",
            self.callbacks().say_goodbye_fixture,
            (),
            |f, state| unsafe { f(state, fixture) },
        )
    }

    fn say_goodbye_particle_group(&mut self, group: *mut B2ParticleGroup) {
        self.dispatch(
            "say_goodbye_particle_group",
            self.callbacks().say_goodbye_particle_group,
            (),
            |f, state| unsafe { f(state, group) },
        )
    }

    fn say_goodbye_particle(&mut self, particle_system: *mut B2ParticleSystem, index: i32) {
        self.dispatch(
            "say_goodbye_particle",
            self.callbacks().say_goodbye_particle,
            (),
            |f, state| unsafe { f(state, particle_system, index) },
        )
    }
}
