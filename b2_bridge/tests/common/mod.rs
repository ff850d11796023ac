//! 集成测试共用：事件记录器 + 模拟引擎
//!
//! 模拟引擎只持有注册进来的基类指针，通过 `b2*_` 入口回调适配器，
//! 和真实引擎的 C 垫片走同一条路径。

#![allow(dead_code)]

use std::ffi::c_void;

use b2_bridge::capi::*;
use b2_bridge::engine::{
    B2Contact, B2ContactFilter, B2ContactImpulse, B2ContactListener, B2DestructionListener,
    B2Draw, B2Fixture, B2Joint, B2Manifold, B2ParticleSystem, B2QueryCallback, B2RayCastCallback,
};
use b2_bridge::{
    Color, ContactFilterCallbacks, ContactFilterDescriptor, ContactListenerCallbacks,
    ContactListenerDescriptor, DestructionListenerCallbacks, DestructionListenerDescriptor,
    DrawCallbacks, DrawDescriptor, DrawFlags, ParticleColor, QueryCallbackCallbacks,
    QueryCallbackDescriptor, RayCastCallbackCallbacks, RayCastCallbackDescriptor, Transform,
    Vec2,
};

// ============================================================================
// 事件记录
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Polygon { vertices: Vec<Vec2>, color: Color },
    SolidPolygon { vertices: Vec<Vec2>, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    SolidCircle { center: Vec2, radius: f32, axis: Vec2, color: Color },
    Particles { centers: Vec<Vec2>, radius: f32, colors: Option<Vec<ParticleColor>> },
    Segment { p1: Vec2, p2: Vec2, color: Color },
    Transform(Transform),
    SetFlags(u32),
    AppendFlags(u32),
    ClearFlags(u32),
    BeginContact(usize),
    EndContact(usize),
    PreSolve(usize),
    PostSolve(usize),
    ReportFixture(usize),
    RayHit { fixture: usize, point: Vec2, normal: Vec2, fraction: f32 },
    ShouldCollide(usize, usize),
    GoodbyeJoint(usize),
    GoodbyeFixture(usize),
}

/// 调用方状态：记录收到的每一次回调
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
    /// 区域查询在这个夹具序号上返回 false
    pub stop_query_at: Option<usize>,
    /// 射线检测对每次命中的返回值；None 表示返回命中的 fraction
    pub ray_answer: Option<f32>,
    /// 碰撞过滤拒绝涉及这个夹具序号的接触
    pub blocked_fixture: Option<usize>,
}

impl Recorder {
    pub fn state(&mut self) -> *mut c_void {
        self as *mut Recorder as *mut c_void
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

unsafe fn recorder<'a>(state: *mut c_void) -> &'a mut Recorder {
    &mut *(state as *mut Recorder)
}

unsafe fn collect<T: Copy>(ptr: *const T, count: i32) -> Vec<T> {
    if ptr.is_null() || count <= 0 {
        Vec::new()
    } else {
        std::slice::from_raw_parts(ptr, count as usize).to_vec()
    }
}

// ============================================================================
// 夹具与接触句柄（假地址，只用于比较）
// ============================================================================

pub fn fixture_handle(index: usize) -> *mut B2Fixture {
    (0x1000 + index * 0x10) as *mut B2Fixture
}

pub fn fixture_index(fixture: *mut B2Fixture) -> usize {
    (fixture as usize - 0x1000) / 0x10
}

pub fn contact_handle(a: usize, b: usize) -> *mut B2Contact {
    (0x8000 + a * 0x100 + b * 0x8) as *mut B2Contact
}

pub fn joint_handle(index: usize) -> *mut B2Joint {
    (0x4000 + index * 0x10) as *mut B2Joint
}

// ============================================================================
// 回调实现
// ============================================================================

unsafe extern "C" fn on_polygon(state: *mut c_void, v: *const Vec2, n: i32, color: *const Color) {
    recorder(state).events.push(Event::Polygon {
        vertices: collect(v, n),
        color: *color,
    });
}

unsafe extern "C" fn on_solid_polygon(state: *mut c_void, v: *const Vec2, n: i32, color: *const Color) {
    recorder(state).events.push(Event::SolidPolygon {
        vertices: collect(v, n),
        color: *color,
    });
}

unsafe extern "C" fn on_circle(state: *mut c_void, c: *const Vec2, radius: f32, color: *const Color) {
    recorder(state).events.push(Event::Circle {
        center: *c,
        radius,
        color: *color,
    });
}

unsafe extern "C" fn on_solid_circle(
    state: *mut c_void,
    c: *const Vec2,
    radius: f32,
    axis: *const Vec2,
    color: *const Color,
) {
    recorder(state).events.push(Event::SolidCircle {
        center: *c,
        radius,
        axis: *axis,
        color: *color,
    });
}

unsafe extern "C" fn on_particles(
    state: *mut c_void,
    centers: *const Vec2,
    radius: f32,
    colors: *const ParticleColor,
    count: i32,
) {
    let colors = if colors.is_null() {
        None
    } else {
        Some(collect(colors, count))
    };
    recorder(state).events.push(Event::Particles {
        centers: collect(centers, count),
        radius,
        colors,
    });
}

unsafe extern "C" fn on_segment(state: *mut c_void, p1: *const Vec2, p2: *const Vec2, color: *const Color) {
    recorder(state).events.push(Event::Segment {
        p1: *p1,
        p2: *p2,
        color: *color,
    });
}

unsafe extern "C" fn on_transform(state: *mut c_void, xf: *const Transform) {
    recorder(state).events.push(Event::Transform(*xf));
}

unsafe extern "C" fn on_set_flags(state: *mut c_void, flags: u32) {
    recorder(state).events.push(Event::SetFlags(flags));
}

unsafe extern "C" fn on_append_flags(state: *mut c_void, flags: u32) {
    recorder(state).events.push(Event::AppendFlags(flags));
}

unsafe extern "C" fn on_clear_flags(state: *mut c_void, flags: u32) {
    recorder(state).events.push(Event::ClearFlags(flags));
}

unsafe extern "C" fn on_begin_contact(state: *mut c_void, contact: *mut B2Contact) {
    recorder(state).events.push(Event::BeginContact(contact as usize));
}

unsafe extern "C" fn on_end_contact(state: *mut c_void, contact: *mut B2Contact) {
    recorder(state).events.push(Event::EndContact(contact as usize));
}

unsafe extern "C" fn on_pre_solve(state: *mut c_void, contact: *mut B2Contact, _: *const B2Manifold) {
    recorder(state).events.push(Event::PreSolve(contact as usize));
}

unsafe extern "C" fn on_post_solve(
    state: *mut c_void,
    contact: *mut B2Contact,
    _: *const B2ContactImpulse,
) {
    recorder(state).events.push(Event::PostSolve(contact as usize));
}

unsafe extern "C" fn on_report_fixture(state: *mut c_void, fixture: *mut B2Fixture) -> bool {
    let rec = recorder(state);
    let index = fixture_index(fixture);
    rec.events.push(Event::ReportFixture(index));
    rec.stop_query_at != Some(index)
}

unsafe extern "C" fn on_ray_hit(
    state: *mut c_void,
    fixture: *mut B2Fixture,
    point: *const Vec2,
    normal: *const Vec2,
    fraction: f32,
) -> f32 {
    let rec = recorder(state);
    rec.events.push(Event::RayHit {
        fixture: fixture_index(fixture),
        point: *point,
        normal: *normal,
        fraction,
    });
    rec.ray_answer.unwrap_or(fraction)
}

unsafe extern "C" fn on_should_collide(state: *mut c_void, a: *mut B2Fixture, b: *mut B2Fixture) -> bool {
    let rec = recorder(state);
    let (a, b) = (fixture_index(a), fixture_index(b));
    rec.events.push(Event::ShouldCollide(a, b));
    rec.blocked_fixture.map_or(true, |blocked| a != blocked && b != blocked)
}

unsafe extern "C" fn on_goodbye_joint(state: *mut c_void, joint: *mut B2Joint) {
    recorder(state).events.push(Event::GoodbyeJoint(joint as usize));
}

unsafe extern "C" fn on_goodbye_fixture(state: *mut c_void, fixture: *mut B2Fixture) {
    recorder(state)
        .events
        .push(Event::GoodbyeFixture(fixture_index(fixture)));
}

// ============================================================================
// 描述符
// ============================================================================

pub fn draw_descriptor(rec: &mut Recorder) -> DrawDescriptor {
    DrawDescriptor::new(
        rec.state(),
        DrawCallbacks {
            draw_polygon: Some(on_polygon),
            draw_solid_polygon: Some(on_solid_polygon),
            draw_circle: Some(on_circle),
            draw_solid_circle: Some(on_solid_circle),
            draw_particles: Some(on_particles),
            draw_segment: Some(on_segment),
            draw_transform: Some(on_transform),
            ..Default::default()
        },
    )
}

/// 绘制回调加上三个设置类标志位回调，`get_flags` 留空
pub fn flag_observer_descriptor(rec: &mut Recorder) -> DrawDescriptor {
    let mut descriptor = draw_descriptor(rec);
    descriptor.callbacks.set_flags = Some(on_set_flags);
    descriptor.callbacks.append_flags = Some(on_append_flags);
    descriptor.callbacks.clear_flags = Some(on_clear_flags);
    descriptor
}

/// 只提供必需回调的接触监听
pub fn contact_listener_descriptor(rec: &mut Recorder) -> ContactListenerDescriptor {
    ContactListenerDescriptor::new(
        rec.state(),
        ContactListenerCallbacks {
            begin_contact: Some(on_begin_contact),
            end_contact: Some(on_end_contact),
            ..Default::default()
        },
    )
}

pub fn solving_contact_listener_descriptor(rec: &mut Recorder) -> ContactListenerDescriptor {
    ContactListenerDescriptor::new(
        rec.state(),
        ContactListenerCallbacks {
            begin_contact: Some(on_begin_contact),
            end_contact: Some(on_end_contact),
            pre_solve: Some(on_pre_solve),
            post_solve: Some(on_post_solve),
            ..Default::default()
        },
    )
}

pub fn query_descriptor(rec: &mut Recorder) -> QueryCallbackDescriptor {
    QueryCallbackDescriptor::new(
        rec.state(),
        QueryCallbackCallbacks {
            report_fixture: Some(on_report_fixture),
            ..Default::default()
        },
    )
}

pub fn ray_cast_descriptor(rec: &mut Recorder) -> RayCastCallbackDescriptor {
    RayCastCallbackDescriptor::new(
        rec.state(),
        RayCastCallbackCallbacks {
            report_fixture: Some(on_ray_hit),
            ..Default::default()
        },
    )
}

pub fn contact_filter_descriptor(rec: &mut Recorder) -> ContactFilterDescriptor {
    ContactFilterDescriptor::new(
        rec.state(),
        ContactFilterCallbacks {
            should_collide: Some(on_should_collide),
            ..Default::default()
        },
    )
}

pub fn destruction_descriptor(rec: &mut Recorder) -> DestructionListenerDescriptor {
    DestructionListenerDescriptor::new(
        rec.state(),
        DestructionListenerCallbacks {
            say_goodbye_joint: Some(on_goodbye_joint),
            say_goodbye_fixture: Some(on_goodbye_fixture),
            ..Default::default()
        },
    )
}

// ============================================================================
// 模拟引擎
// ============================================================================

/// 一个只有一个物体的世界，物体上挂着若干夹具和关节
pub struct MockWorld {
    fixtures: Vec<*mut B2Fixture>,
    joints: Vec<*mut B2Joint>,
    debug_draw: *mut B2Draw,
    contact_listener: *mut B2ContactListener,
    contact_filter: *mut B2ContactFilter,
    destruction_listener: *mut B2DestructionListener,
}

impl MockWorld {
    pub fn new(fixture_count: usize, joint_count: usize) -> Self {
        Self {
            fixtures: (0..fixture_count).map(fixture_handle).collect(),
            joints: (0..joint_count).map(joint_handle).collect(),
            debug_draw: std::ptr::null_mut(),
            contact_listener: std::ptr::null_mut(),
            contact_filter: std::ptr::null_mut(),
            destruction_listener: std::ptr::null_mut(),
        }
    }

    pub fn fixture(&self, index: usize) -> *mut B2Fixture {
        self.fixtures[index]
    }

    pub fn set_debug_draw(&mut self, draw: *mut B2Draw) {
        self.debug_draw = draw;
    }

    pub fn set_contact_listener(&mut self, listener: *mut B2ContactListener) {
        self.contact_listener = listener;
    }

    pub fn set_contact_filter(&mut self, filter: *mut B2ContactFilter) {
        self.contact_filter = filter;
    }

    pub fn set_destruction_listener(&mut self, listener: *mut B2DestructionListener) {
        self.destruction_listener = listener;
    }

    /// 按调试绘制的标志位决定画什么：形状画成单位正方形，质心画成坐标系
    pub fn draw_debug_data(&self) {
        if self.debug_draw.is_null() {
            return;
        }
        let flags = DrawFlags::from_bits_retain(unsafe { b2Draw_GetFlags(self.debug_draw) });
        let color = Color::new(0.9, 0.7, 0.7);

        for index in 0..self.fixtures.len() {
            let offset = Vec2::new(index as f32 * 2.0, 0.0);
            if flags.contains(DrawFlags::SHAPE) {
                let square = unit_square(offset);
                unsafe {
                    b2Draw_DrawSolidPolygon(self.debug_draw, square.as_ptr(), 4, &color);
                }
            }
            if flags.contains(DrawFlags::CENTER_OF_MASS) {
                let xf = Transform::new(offset + Vec2::splat(0.5), 0.0);
                unsafe { b2Draw_DrawTransform(self.debug_draw, &xf) };
            }
        }
    }

    /// 按夹具顺序报告，回调返回 false 时停止
    pub fn query_aabb(&self, callback: *mut B2QueryCallback) {
        for &fixture in &self.fixtures {
            if !unsafe { b2QueryCallback_ReportFixture(callback, fixture) } {
                return;
            }
        }
    }

    /// 射线沿 +x 依次穿过每个夹具，返回最终的裁剪比例
    ///
    /// 返回值 < 0 忽略命中，0 终止，其他值裁剪射线。
    pub fn ray_cast(&self, callback: *mut B2RayCastCallback) -> f32 {
        let count = self.fixtures.len() as f32;
        let normal = Vec2::new(-1.0, 0.0);
        let mut max_fraction = 1.0_f32;

        for (index, &fixture) in self.fixtures.iter().enumerate() {
            let fraction = (index as f32 + 1.0) / (count + 1.0);
            if fraction > max_fraction {
                break;
            }
            let point = Vec2::new(fraction * 10.0, 0.0);
            let answer =
                unsafe { b2RayCastCallback_ReportFixture(callback, fixture, &point, &normal, fraction) };
            if answer == 0.0 {
                return 0.0;
            }
            if answer > 0.0 && answer < max_fraction {
                max_fraction = answer;
            }
        }
        max_fraction
    }

    /// 两个夹具开始接触：先过滤，再通知监听；返回是否产生了接触
    pub fn touch(&self, a: usize, b: usize) -> bool {
        let (fa, fb) = (self.fixtures[a], self.fixtures[b]);
        if !self.contact_filter.is_null()
            && !unsafe { b2ContactFilter_ShouldCollide(self.contact_filter, fa, fb) }
        {
            return false;
        }
        if !self.contact_listener.is_null() {
            let contact = contact_handle(a, b);
            unsafe {
                b2ContactListener_BeginContact(self.contact_listener, contact);
                b2ContactListener_PreSolve(self.contact_listener, contact, std::ptr::null());
                b2ContactListener_PostSolve(self.contact_listener, contact, std::ptr::null());
            }
        }
        true
    }

    pub fn separate(&self, a: usize, b: usize) {
        if !self.contact_listener.is_null() {
            unsafe { b2ContactListener_EndContact(self.contact_listener, contact_handle(a, b)) };
        }
    }

    /// 粒子系统的接触事件，监听方一般不关心
    pub fn particle_contacts(&self, particle_system: *mut B2ParticleSystem) {
        if self.contact_listener.is_null() {
            return;
        }
        unsafe {
            b2ContactListener_BeginParticleBodyContact(
                self.contact_listener,
                particle_system,
                std::ptr::null_mut(),
            );
            b2ContactListener_EndParticleBodyContact(
                self.contact_listener,
                self.fixtures[0],
                particle_system,
                3,
            );
            b2ContactListener_BeginParticleContact(
                self.contact_listener,
                particle_system,
                std::ptr::null_mut(),
            );
            b2ContactListener_EndParticleContact(self.contact_listener, particle_system, 3, 4);
        }
    }

    /// 销毁物体：先通知关节，再通知夹具
    pub fn destroy_body(&mut self) {
        let joints = std::mem::take(&mut self.joints);
        let fixtures = std::mem::take(&mut self.fixtures);
        if self.destruction_listener.is_null() {
            return;
        }
        for joint in joints {
            unsafe { b2DestructionListener_SayGoodbyeJoint(self.destruction_listener, joint) };
        }
        for fixture in fixtures {
            unsafe { b2DestructionListener_SayGoodbyeFixture(self.destruction_listener, fixture) };
        }
    }
}

pub fn unit_square(offset: Vec2) -> [Vec2; 4] {
    [
        offset,
        offset + Vec2::X,
        offset + Vec2::ONE,
        offset + Vec2::Y,
    ]
}
