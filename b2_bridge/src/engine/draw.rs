//! 调试绘制扩展点（b2Draw）

use bitflags::bitflags;

use super::math::{Color, ParticleColor, Transform, Vec2};

bitflags! {
    /// 调试绘制类别标志位
    ///
    /// 类别由引擎定义，桥接层不校验未知位：`from_bits_retain` 原样保留。
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DrawFlags: u32 {
        /// 绘制形状
        const SHAPE = 0x0001;
        /// 绘制关节连线
        const JOINT = 0x0002;
        /// 绘制 AABB
        const AABB = 0x0004;
        /// 绘制宽相配对
        const PAIR = 0x0008;
        /// 绘制质心坐标系
        const CENTER_OF_MASS = 0x0010;
        /// 绘制粒子
        const PARTICLE = 0x0020;
    }
}

/// b2Draw 抽象基类
///
/// 标志位存储属于基类本身，由实现者提供 `draw_flags`/`draw_flags_mut`；
/// 四个标志位访问器以默认方法给出，需要观察或接管标志位变化的实现者可以覆盖。
pub trait Draw {
    fn draw_flags(&self) -> DrawFlags;
    fn draw_flags_mut(&mut self) -> &mut DrawFlags;

    /// 替换标志位
    fn set_flags(&mut self, flags: DrawFlags) {
        *self.draw_flags_mut() = flags;
    }

    /// 获取标志位
    fn get_flags(&self) -> DrawFlags {
        self.draw_flags()
    }

    /// 按位或追加标志位
    fn append_flags(&mut self, flags: DrawFlags) {
        self.draw_flags_mut().insert(flags);
    }

    /// 按位与非清除标志位
    fn clear_flags(&mut self, flags: DrawFlags) {
        self.draw_flags_mut().remove(flags);
    }

    /// 多边形轮廓，顶点按逆时针排列
    fn draw_polygon(&mut self, vertices: &[Vec2], color: &Color);
    /// 实心多边形
    fn draw_solid_polygon(&mut self, vertices: &[Vec2], color: &Color);
    fn draw_circle(&mut self, center: &Vec2, radius: f32, color: &Color);
    fn draw_solid_circle(&mut self, center: &Vec2, radius: f32, axis: &Vec2, color: &Color);
    /// 一批粒子；粒子系统没有颜色缓冲时 `colors` 为 `None`
    fn draw_particles(&mut self, centers: &[Vec2], radius: f32, colors: Option<&[ParticleColor]>);
    fn draw_segment(&mut self, p1: &Vec2, p2: &Vec2, color: &Color);
    /// 坐标系示意（两根轴）
    fn draw_transform(&mut self, xf: &Transform);
}
