//! 调试绘制 C 接口

use crate::bridge::draw::DrawCallbacks;
use crate::bridge::{guard, DrawBridge, DrawDescriptor};
use crate::engine::{B2Draw, Color, Draw, DrawFlags, ParticleColor, Transform, Vec2};
use crate::BridgeError;

use super::{delete_bridge, forward, new_bridge, raw_slice, upcast_bridge, value_arg};

// ============================================================================
// 适配器生命周期
// ============================================================================

/// 创建调试绘制适配器，初始标志位为空
///
/// # Safety
/// `descriptor` 必须为空或指向有效的描述符；描述符里的状态句柄必须比适配器活得更久。
#[no_mangle]
pub unsafe extern "C" fn DrawBridge_New(descriptor: *const DrawDescriptor) -> *mut DrawBridge {
    new_bridge("DrawBridge_New", descriptor)
}

/// 释放调试绘制适配器；空指针不做任何事
///
/// # Safety
/// `bridge` 必须为空或来自 `DrawBridge_New` 且尚未释放，引擎也不能再持有它。
#[no_mangle]
pub unsafe extern "C" fn DrawBridge_Delete(bridge: *mut DrawBridge) {
    delete_bridge("DrawBridge_Delete", bridge)
}

/// 转为基类句柄，只能传给 `b2Draw_*` 入口
///
/// 句柄没有 C++ 虚表，不能直接注册到 `b2World`；由引擎侧垫片保存并转发，
/// 见 [`crate::engine`] 模块说明。
#[no_mangle]
pub extern "C" fn DrawBridge_Upcast(bridge: *mut DrawBridge) -> *mut B2Draw {
    upcast_bridge("DrawBridge_Upcast", bridge)
}

// ============================================================================
// 标志位（适配器句柄）
// ============================================================================

/// # Safety
/// `bridge` 必须为空或是存活的适配器。
unsafe fn with_adapter<R: Copy>(
    entry: &'static str,
    bridge: *mut DrawBridge,
    default: R,
    body: impl FnOnce(&mut DrawBridge) -> R,
) -> R {
    guard(entry, default, || match bridge.as_mut() {
        Some(bridge) => body(bridge),
        None => {
            log::error!("{}", BridgeError::NullHandle(entry));
            default
        }
    })
}

/// 读取标志位；空句柄返回 0
///
/// # Safety
/// `bridge` 必须为空或是存活的适配器。
#[no_mangle]
pub unsafe extern "C" fn DrawBridge_GetFlags(bridge: *mut DrawBridge) -> u32 {
    with_adapter("DrawBridge_GetFlags", bridge, 0, |bridge| bridge.get_flags().bits())
}

/// 替换标志位，未知位原样保留
///
/// # Safety
/// `bridge` 必须为空或是存活的适配器。
#[no_mangle]
pub unsafe extern "C" fn DrawBridge_SetFlags(bridge: *mut DrawBridge, flags: u32) {
    with_adapter("DrawBridge_SetFlags", bridge, (), |bridge| {
        bridge.set_flags(DrawFlags::from_bits_retain(flags))
    })
}

/// 追加标志位（按位或）
///
/// # Safety
/// `bridge` 必须为空或是存活的适配器。
#[no_mangle]
pub unsafe extern "C" fn DrawBridge_AppendFlags(bridge: *mut DrawBridge, flags: u32) {
    with_adapter("DrawBridge_AppendFlags", bridge, (), |bridge| {
        bridge.append_flags(DrawFlags::from_bits_retain(flags))
    })
}

/// 清除标志位（与上取反）
///
/// # Safety
/// `bridge` 必须为空或是存活的适配器。
#[no_mangle]
pub unsafe extern "C" fn DrawBridge_ClearFlags(bridge: *mut DrawBridge, flags: u32) {
    with_adapter("DrawBridge_ClearFlags", bridge, (), |bridge| {
        bridge.clear_flags(DrawFlags::from_bits_retain(flags))
    })
}

// ============================================================================
// 基类入口（引擎通过 b2Draw* 调用）
// ============================================================================
//
// 以下函数的 `base` 必须为空或来自 `DrawBridge_Upcast` 且尚未释放。
// 集合参数为 指针 + 数量，空指针配 0 表示空集合；值参数不能为空。

/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_GetFlags(base: *mut B2Draw) -> u32 {
    forward::<DrawCallbacks, _>("b2Draw_GetFlags", base, 0, |bridge| Ok(bridge.get_flags().bits()))
}

/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_SetFlags(base: *mut B2Draw, flags: u32) {
    forward::<DrawCallbacks, _>("b2Draw_SetFlags", base, (), |bridge| {
        bridge.set_flags(DrawFlags::from_bits_retain(flags));
        Ok(())
    })
}

/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_AppendFlags(base: *mut B2Draw, flags: u32) {
    forward::<DrawCallbacks, _>("b2Draw_AppendFlags", base, (), |bridge| {
        bridge.append_flags(DrawFlags::from_bits_retain(flags));
        Ok(())
    })
}

/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_ClearFlags(base: *mut B2Draw, flags: u32) {
    forward::<DrawCallbacks, _>("b2Draw_ClearFlags", base, (), |bridge| {
        bridge.clear_flags(DrawFlags::from_bits_retain(flags));
        Ok(())
    })
}

/// 绘制闭合多边形轮廓
///
/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_DrawPolygon(
    base: *mut B2Draw,
    vertices: *const Vec2,
    vertex_count: i32,
    color: *const Color,
) {
    forward::<DrawCallbacks, _>("b2Draw_DrawPolygon", base, (), |bridge| {
        let color = value_arg(color, "color")?;
        bridge.draw_polygon(raw_slice(vertices, vertex_count), color);
        Ok(())
    })
}

/// 绘制实心多边形
///
/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_DrawSolidPolygon(
    base: *mut B2Draw,
    vertices: *const Vec2,
    vertex_count: i32,
    color: *const Color,
) {
    forward::<DrawCallbacks, _>("b2Draw_DrawSolidPolygon", base, (), |bridge| {
        let color = value_arg(color, "color")?;
        bridge.draw_solid_polygon(raw_slice(vertices, vertex_count), color);
        Ok(())
    })
}

/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_DrawCircle(
    base: *mut B2Draw,
    center: *const Vec2,
    radius: f32,
    color: *const Color,
) {
    forward::<DrawCallbacks, _>("b2Draw_DrawCircle", base, (), |bridge| {
        let center = value_arg(center, "center")?;
        let color = value_arg(color, "color")?;
        bridge.draw_circle(center, radius, color);
        Ok(())
    })
}

/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_DrawSolidCircle(
    base: *mut B2Draw,
    center: *const Vec2,
    radius: f32,
    axis: *const Vec2,
    color: *const Color,
) {
    forward::<DrawCallbacks, _>("b2Draw_DrawSolidCircle", base, (), |bridge| {
        let center = value_arg(center, "center")?;
        let axis = value_arg(axis, "axis")?;
        let color = value_arg(color, "color")?;
        bridge.draw_solid_circle(center, radius, axis, color);
        Ok(())
    })
}

/// 绘制粒子；`colors` 为空表示粒子系统没有颜色缓冲，非空时长度与 `centers` 相同
///
/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_DrawParticles(
    base: *mut B2Draw,
    centers: *const Vec2,
    radius: f32,
    colors: *const ParticleColor,
    count: i32,
) {
    forward::<DrawCallbacks, _>("b2Draw_DrawParticles", base, (), |bridge| {
        let colors: Option<&[ParticleColor]> = if colors.is_null() {
            None
        } else {
            Some(raw_slice(colors, count))
        };
        bridge.draw_particles(raw_slice(centers, count), radius, colors);
        Ok(())
    })
}

/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_DrawSegment(
    base: *mut B2Draw,
    p1: *const Vec2,
    p2: *const Vec2,
    color: *const Color,
) {
    forward::<DrawCallbacks, _>("b2Draw_DrawSegment", base, (), |bridge| {
        let p1 = value_arg(p1, "p1")?;
        let p2 = value_arg(p2, "p2")?;
        let color = value_arg(color, "color")?;
        bridge.draw_segment(p1, p2, color);
        Ok(())
    })
}

/// 绘制坐标系
///
/// # Safety
/// 见本节说明。
#[no_mangle]
pub unsafe extern "C" fn b2Draw_DrawTransform(base: *mut B2Draw, xf: *const Transform) {
    forward::<DrawCallbacks, _>("b2Draw_DrawTransform", base, (), |bridge| {
        bridge.draw_transform(value_arg(xf, "xf")?);
        Ok(())
    })
}
