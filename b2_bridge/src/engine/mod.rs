//! 引擎侧接口模型
//!
//! LiquidFun/Box2D 本体是外部依赖，桥接层只需要看到其中三类东西：
//! 不透明的引擎对象、两边共享内存布局的小值类型，以及引擎通过虚函数调用的扩展点。
//!
//! ## 扩展点对应关系
//! | C++ (LiquidFun) | Rust |
//! |-----------------|------|
//! | b2Draw | [`Draw`] |
//! | b2ContactListener | [`ContactListener`] |
//! | b2QueryCallback | [`QueryCallback`] |
//! | b2RayCastCallback | [`RayCastCallback`] |
//! | b2ContactFilter | [`ContactFilter`] |
//! | b2DestructionListener | [`DestructionListener`] |
//!
//! ## 引擎侧垫片
//!
//! 适配器是普通的 Rust 结构体，没有 C++ 虚表。`<Bridge>_Upcast` 得到的基类句柄
//! 不能直接交给 `b2World::SetDebugDraw`、`SetContactListener`、`QueryAABB` 等接口：
//! 引擎会把句柄的第一个字当作虚表指针，结果是未定义行为。
//!
//! 注册需要引擎一侧的 C++ 垫片，每个扩展点一个子类：
//! - 构造时保存 `_Upcast` 返回的句柄
//! - 覆盖基类的每个虚函数，把参数原样转给对应的 `b2<Base>_<Op>(stored, ...)`，
//!   例如 `DrawPolygon(v, n, c)` 调用 `b2Draw_DrawPolygon(stored, v, n, &c)`，
//!   `ReportFixture(f)` 返回 `b2QueryCallback_ReportFixture(stored, f)` 的结果
//! - 调试绘制的 `SetFlags`/`GetFlags`/`AppendFlags`/`ClearFlags` 同样转给 `b2Draw_*Flags`
//! - 把垫片对象（而不是句柄）注册到 `b2World`
//!
//! 垫片的生命周期不能超过适配器：先从引擎注销垫片，再调用 `<Bridge>_Delete`。

mod handles;
mod math;
pub mod draw;
pub mod world_callbacks;

pub use handles::*;
pub use math::{Color, ParticleColor, Rot, Transform, Vec2};
pub use draw::{Draw, DrawFlags};
pub use world_callbacks::{
    ContactFilter, ContactListener, DestructionListener, QueryCallback, RayCastCallback,
};
