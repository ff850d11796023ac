//! 调试绘制适配器

use std::ffi::c_void;

use super::adapter::{slice_ptr, Bridge, CallbackTable, ExtensionKind};
use crate::engine::{B2Draw, Color, Draw, DrawFlags, ParticleColor, Transform, Vec2};

pub type DrawPolygonFn =
    unsafe extern "C" fn(state: *mut c_void, vertices: *const Vec2, vertex_count: i32, color: *const Color);
pub type DrawCircleFn =
    unsafe extern "C" fn(state: *mut c_void, center: *const Vec2, radius: f32, color: *const Color);
pub type DrawSolidCircleFn = unsafe extern "C" fn(
    state: *mut c_void,
    center: *const Vec2,
    radius: f32,
    axis: *const Vec2,
    color: *const Color,
);
/// `colors` 为空指针表示粒子系统没有颜色缓冲
pub type DrawParticlesFn = unsafe extern "C" fn(
    state: *mut c_void,
    centers: *const Vec2,
    radius: f32,
    colors: *const ParticleColor,
    count: i32,
);
pub type DrawSegmentFn =
    unsafe extern "C" fn(state: *mut c_void, p1: *const Vec2, p2: *const Vec2, color: *const Color);
pub type DrawTransformFn = unsafe extern "C" fn(state: *mut c_void, xf: *const Transform);
pub type GetFlagsFn = unsafe extern "C" fn(state: *mut c_void) -> u32;
pub type FlagsFn = unsafe extern "C" fn(state: *mut c_void, flags: u32);

/// 调试绘制回调表
///
/// 标志位保存在适配器上。四个标志位槽位可选：设置类槽位存在时，适配器更新自己的
/// 标志位之后再通知调用方；`get_flags` 存在时以调用方返回的值为准。
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawCallbacks {
    pub draw_polygon: Option<DrawPolygonFn>,
    pub draw_solid_polygon: Option<DrawPolygonFn>,
    pub draw_circle: Option<DrawCircleFn>,
    pub draw_solid_circle: Option<DrawSolidCircleFn>,
    pub draw_particles: Option<DrawParticlesFn>,
    pub draw_segment: Option<DrawSegmentFn>,
    pub draw_transform: Option<DrawTransformFn>,
    pub get_flags: Option<GetFlagsFn>,
    pub set_flags: Option<FlagsFn>,
    pub append_flags: Option<FlagsFn>,
    pub clear_flags: Option<FlagsFn>,
}

impl CallbackTable for DrawCallbacks {
    const KIND: ExtensionKind = ExtensionKind::Draw;
    type Base = DrawFlags;
    type Interface = B2Draw;

    fn missing_required(&self) -> Vec<&'static str> {
        let slots = [
            ("draw_polygon", self.draw_polygon.is_some()),
            ("draw_solid_polygon", self.draw_solid_polygon.is_some()),
            ("draw_circle", self.draw_circle.is_some()),
            ("draw_solid_circle", self.draw_solid_circle.is_some()),
            ("draw_particles", self.draw_particles.is_some()),
            ("draw_segment", self.draw_segment.is_some()),
            ("draw_transform", self.draw_transform.is_some()),
        ];
        slots
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }
}

impl Draw for Bridge<DrawCallbacks> {
    fn draw_flags(&self) -> DrawFlags {
        *self.base()
    }

    fn draw_flags_mut(&mut self) -> &mut DrawFlags {
        self.base_mut()
    }

    fn set_flags(&mut self, flags: DrawFlags) {
        *self.base_mut() = flags;
        self.dispatch("set_flags", self.callbacks().set_flags, (), |f, state| unsafe {
            f(state, flags.bits())
        })
    }

    fn get_flags(&self) -> DrawFlags {
        let stored = *self.base();
        self.dispatch("get_flags", self.callbacks().get_flags, stored, |f, state| {
            DrawFlags::from_bits_retain(unsafe { f(state) })
        })
    }

    fn append_flags(&mut self, flags: DrawFlags) {
        self.base_mut().insert(flags);
        self.dispatch("append_flags", self.callbacks().append_flags, (), |f, state| unsafe {
            f(state, flags.bits())
        })
    }

    fn clear_flags(&mut self, flags: DrawFlags) {
        self.base_mut().remove(flags);
        self.dispatch("clear_flags", self.callbacks().clear_flags, (), |f, state| unsafe {
            f(state, flags.bits())
        })
    }

    fn draw_polygon(&mut self, vertices: &[Vec2], color: &Color) {
        self.dispatch("draw_polygon", self.callbacks().draw_polygon, (), |f, state| unsafe {
            f(state, slice_ptr(vertices), vertices.len() as i32, color)
        })
    }

    fn draw_solid_polygon(&mut self, vertices: &[Vec2], color: &Color) {
        self.dispatch(
            "draw_solid_polygon",
            self.callbacks().draw_solid_polygon,
            (),
            |f, state| unsafe { f(state, slice_ptr(vertices), vertices.len() as i32, color) },
        )
    }

    fn draw_circle(&mut self, center: &Vec2, radius: f32, color: &Color) {
        self.dispatch("draw_circle", self.callbacks().draw_circle, (), |f, state| unsafe {
            f(state, center, radius, color)
        })
    }

    fn draw_solid_circle(&mut self, center: &Vec2, radius: f32, axis: &Vec2, color: &Color) {
        self.dispatch(
            "draw_solid_circle",
            self.callbacks().draw_solid_circle,
            (),
            |f, state| unsafe { f(state, center, radius, axis, color) },
        )
    }

    fn draw_particles(&mut self, centers: &[Vec2], radius: f32, colors: Option<&[ParticleColor]>) {
        let colors = colors.map_or(std::ptr::null(), slice_ptr);
        self.dispatch("draw_particles", self.callbacks().draw_particles, (), |f, state| unsafe {
            f(state, slice_ptr(centers), radius, colors, centers.len() as i32)
        })
    }

    fn draw_segment(&mut self, p1: &Vec2, p2: &Vec2, color: &Color) {
        self.dispatch("draw_segment", self.callbacks().draw_segment, (), |f, state| unsafe {
            f(state, p1, p2, color)
        })
    }

    fn draw_transform(&mut self, xf: &Transform) {
        self.dispatch("draw_transform", self.callbacks().draw_transform, (), |f, state| unsafe {
            f(state, xf)
        })
    }
}
