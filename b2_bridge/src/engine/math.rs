//! 共享值类型
//!
//! 这些类型两边内存布局一致，按值或按常量指针直接跨边界，不做序列化。

/// 二维向量，布局为 `{ x: f32, y: f32 }`（对应 b2Vec2）
pub use glam::Vec2;

/// 旋转，保存正弦和余弦（对应 b2Rot）
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rot {
    pub s: f32,
    pub c: f32,
}

impl Rot {
    pub const IDENTITY: Self = Self { s: 0.0, c: 1.0 };

    /// 从弧度构造
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self { s, c }
    }
}

impl Default for Rot {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// 平移 + 旋转，布局为 `{ p: Vec2, q: Rot }`（对应 b2Transform）
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Transform {
    pub p: Vec2,
    pub q: Rot,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        p: Vec2::ZERO,
        q: Rot::IDENTITY,
    };

    pub fn new(position: Vec2, angle: f32) -> Self {
        Self {
            p: position,
            q: Rot::from_angle(angle),
        }
    }
}

/// 调试绘制颜色，每个分量范围 [0,1]（对应 b2Color）
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// 粒子颜色，每个分量范围 0~255（对应 b2ParticleColor）
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ParticleColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ParticleColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}
