//! 接触监听适配器

use std::ffi::c_void;

use super::adapter::{Bridge, CallbackTable, ExtensionKind};
use crate::engine::{
    B2Contact, B2ContactImpulse, B2ContactListener, B2Fixture, B2Manifold,
    B2ParticleBodyContact, B2ParticleContact, B2ParticleSystem, ContactListener,
};

pub type ContactFn = unsafe extern "C" fn(state: *mut c_void, contact: *mut B2Contact);
pub type BeginParticleBodyContactFn = unsafe extern "C" fn(
    state: *mut c_void,
    particle_system: *mut B2ParticleSystem,
    contact: *mut B2ParticleBodyContact,
);
pub type EndParticleBodyContactFn = unsafe extern "C" fn(
    state: *mut c_void,
    fixture: *mut B2Fixture,
    particle_system: *mut B2ParticleSystem,
    index: i32,
);
pub type BeginParticleContactFn = unsafe extern "C" fn(
    state: *mut c_void,
    particle_system: *mut B2ParticleSystem,
    contact: *mut B2ParticleContact,
);
pub type EndParticleContactFn = unsafe extern "C" fn(
    state: *mut c_void,
    particle_system: *mut B2ParticleSystem,
    index_a: i32,
    index_b: i32,
);
pub type PreSolveFn =
    unsafe extern "C" fn(state: *mut c_void, contact: *mut B2Contact, old_manifold: *const B2Manifold);
pub type PostSolveFn = unsafe extern "C" fn(
    state: *mut c_void,
    contact: *mut B2Contact,
    impulse: *const B2ContactImpulse,
);

/// 接触监听回调表
///
/// 只有 `begin_contact`/`end_contact` 是必需的，粒子接触与求解前后钩子可以留空。
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactListenerCallbacks {
    pub begin_contact: Option<ContactFn>,
    pub end_contact: Option<ContactFn>,
    pub begin_particle_body_contact: Option<BeginParticleBodyContactFn>,
    pub end_particle_body_contact: Option<EndParticleBodyContactFn>,
    pub begin_particle_contact: Option<BeginParticleContactFn>,
    pub end_particle_contact: Option<EndParticleContactFn>,
    pub pre_solve: Option<PreSolveFn>,
    pub post_solve: Option<PostSolveFn>,
}

impl CallbackTable for ContactListenerCallbacks {
    const KIND: ExtensionKind = ExtensionKind::ContactListener;
    type Base = ();
    type Interface = B2ContactListener;

    fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.begin_contact.is_none() {
            missing.push("begin_contact");
        }
        if self.end_contact.is_none() {
            missing.push("end_contact");
        }
        missing
    }
}

impl ContactListener for Bridge<ContactListenerCallbacks> {
    fn begin_contact(&mut self, contact: *mut B2Contact) {
        self.dispatch("begin_contact", self.callbacks().begin_contact, (), |f, state| unsafe {
            f(state, contact)
        })
    }

    fn end_contact(&mut self, contact: *mut B2Contact) {
        self.dispatch("end_contact", self.callbacks().end_contact, (), |f, state| unsafe {
            f(state, contact)
        })
    }

    fn begin_particle_body_contact(
        &mut self,
        particle_system: *mut B2ParticleSystem,
        contact: *mut B2ParticleBodyContact,
    ) {
        self.dispatch(
            "begin_particle_body_contact",
            self.callbacks().begin_particle_body_contact,
            (),
            |f, state| unsafe { f(state, particle_system, contact) },
        )
    }

    fn end_particle_body_contact(
        &mut self,
        fixture: *mut B2Fixture,
        particle_system: *mut B2ParticleSystem,
        index: i32,
    ) {
        self.dispatch(
            "end_particle_body_contact",
            self.callbacks().end_particle_body_contact,
            (),
            |f, state| unsafe { f(state, fixture, particle_system, index) },
        )
    }

    fn begin_particle_contact(
        &mut self,
        particle_system: *mut B2ParticleSystem,
        contact: *mut B2ParticleContact,
    ) {
        self.dispatch(
            "begin_particle_contact",
            self.callbacks().begin_particle_contact,
            (),
            |f, state| unsafe { f(state, particle_system, contact) },
        )
    }

    fn end_particle_contact(&mut self, particle_system: *mut B2ParticleSystem, a: i32, b: i32) {
        self.dispatch(
            "end_particle_contact",
            self.callbacks().end_particle_contact,
            (),
            |f, state| unsafe { f(state, particle_system, a, b) },
        )
    }

    fn pre_solve(&mut self, contact: *mut B2Contact, old_manifold: *const B2Manifold) {
        self.dispatch("pre_solve", self.callbacks().pre_solve, (), |f, state| unsafe {
            f(state, contact, old_manifold)
        })
    }

    fn post_solve(&mut self, contact: *mut B2Contact, impulse: *const B2ContactImpulse) {
        self.dispatch("post_solve", self.callbacks().post_solve, (), |f, state| unsafe {
            f(state, contact, impulse)
        })
    }
}
